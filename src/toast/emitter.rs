// SPDX-License-Identifier: MPL-2.0
//! Per call-site toast requests.
//!
//! An [`Emitter`] owns a local "presented" flag. Raising the flag writes a
//! fresh request into the scope's slot; lowering it clears the slot, but only
//! while the slot still holds this emitter's request. When something else
//! empties or overwrites the slot, the emitter lowers its own flag. It never
//! raises the flag on its own: presentation always starts at the call site.
//! Flags follow the value the slot settles on, including writes still queued
//! behind the notification being delivered.

use super::request::{EmitterConfig, EmitterId, ToastRequest};
use super::slot::{SharedSlot, Subscription};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle held by one call site.
pub struct Emitter {
    id: EmitterId,
    config: RefCell<EmitterConfig>,
    presented: Rc<Cell<bool>>,
    slot: SharedSlot,
    _subscription: Subscription,
}

impl Emitter {
    /// Attaches a new emitter to `slot`.
    pub fn attach(slot: &SharedSlot, config: EmitterConfig) -> Self {
        let id = EmitterId::new();
        let presented = Rc::new(Cell::new(false));

        let flag = Rc::downgrade(&presented);
        let own_slot = slot.downgrade();
        let subscription = slot.observe(move |value| {
            let Some(flag) = flag.upgrade() else {
                return;
            };
            if !flag.get() {
                return;
            }
            // The flag may have been raised by a write still queued behind `value`.
            let latest = own_slot.upgrade().and_then(|slot| slot.latest_occupant_id());
            if latest == Some(id) {
                return;
            }
            match value {
                None => {
                    tracing::trace!(%id, "toast cleared externally, lowering presented flag");
                    flag.set(false);
                }
                Some(request) if request.id() != id => {
                    tracing::trace!(%id, by = %request.id(), "toast superseded, lowering presented flag");
                    flag.set(false);
                }
                Some(_) => {
                    tracing::trace!(%id, "toast replaced by a queued write, lowering presented flag");
                    flag.set(false);
                }
            }
        });

        Self {
            id,
            config: RefCell::new(config),
            presented,
            slot: slot.clone(),
            _subscription: subscription,
        }
    }

    /// Returns this emitter's identity, stable for its whole lifetime.
    #[must_use]
    pub fn id(&self) -> EmitterId {
        self.id
    }

    /// Returns the local presented flag.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presented.get()
    }

    /// Returns a copy of the configuration used for the next presentation.
    #[must_use]
    pub fn config(&self) -> EmitterConfig {
        self.config.borrow().clone()
    }

    /// Replaces the configuration. Takes effect on the next presentation;
    /// a toast already on screen keeps the request it was shown with.
    pub fn set_config(&self, config: EmitterConfig) {
        *self.config.borrow_mut() = config;
    }

    /// Sets the presented flag.
    ///
    /// Raising it writes a new request into the slot, replacing whatever is
    /// there. Lowering it clears the slot if this emitter still owns it.
    /// Setting the flag to its current value does nothing.
    pub fn set_presented(&self, presented: bool) {
        if self.presented.get() == presented {
            return;
        }
        self.presented.set(presented);

        if presented {
            let request = ToastRequest::new(self.id, &self.config.borrow());
            self.slot.write(Rc::new(request));
        } else {
            self.slot.clear_if_owned(self.id);
        }
    }
}

impl Drop for Emitter {
    fn drop(&mut self) {
        if self.presented.get() {
            self.slot.clear_if_owned(self.id);
        }
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("id", &self.id)
            .field("presented", &self.presented.get())
            .finish_non_exhaustive()
    }
}
