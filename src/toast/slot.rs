// SPDX-License-Identifier: MPL-2.0
//! Single-occupancy broadcast cell shared by one scope.
//!
//! The slot holds at most one [`ToastRequest`]. Every write overwrites the
//! previous occupant and synchronously notifies all observers. A write
//! issued by an observer while a notification round is running is queued
//! and delivered once the round completes, so observers never see two
//! values in the same round and no write is lost.

use super::request::{EmitterId, ToastRequest};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Observer = Rc<dyn Fn(Option<&Rc<ToastRequest>>)>;

#[derive(Default)]
struct SlotState {
    value: RefCell<Option<Rc<ToastRequest>>>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_observer: Cell<u64>,
    pending: RefCell<VecDeque<Option<Rc<ToastRequest>>>>,
    notifying: Cell<bool>,
}

/// Handle to a scope's toast slot. Clones share the same cell.
#[derive(Clone, Default)]
pub struct SharedSlot {
    state: Rc<SlotState>,
}

impl SharedSlot {
    /// Creates an empty slot with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current occupant.
    #[must_use]
    pub fn get(&self) -> Option<Rc<ToastRequest>> {
        self.state.value.borrow().clone()
    }

    /// Returns the ID of the emitter owning the current occupant.
    #[must_use]
    pub fn occupant_id(&self) -> Option<EmitterId> {
        self.state.value.borrow().as_ref().map(|request| request.id())
    }

    /// Returns the ID of the owner the slot will hold once writes queued by
    /// the current notification round are delivered.
    #[must_use]
    pub fn latest_occupant_id(&self) -> Option<EmitterId> {
        match self.state.pending.borrow().back() {
            Some(next) => next.as_ref().map(|request| request.id()),
            None => self.occupant_id(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.value.borrow().is_none()
    }

    /// Replaces the occupant unconditionally.
    pub fn write(&self, request: Rc<ToastRequest>) {
        tracing::debug!(id = %request.id(), mode = ?request.mode(), "toast slot write");
        self.set(Some(request));
    }

    /// Empties the slot unconditionally.
    pub fn clear(&self) {
        tracing::debug!("toast slot clear");
        self.set(None);
    }

    /// Empties the slot only if its latest occupant belongs to `id`.
    ///
    /// Returns `true` if the slot was cleared.
    pub fn clear_if_owned(&self, id: EmitterId) -> bool {
        if self.latest_occupant_id() == Some(id) {
            self.clear();
            true
        } else {
            tracing::trace!(%id, "toast slot clear skipped, not the owner");
            false
        }
    }

    /// Registers an observer called after every write.
    ///
    /// The observer stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn observe(&self, observer: impl Fn(Option<&Rc<ToastRequest>>) + 'static) -> Subscription {
        let key = self.state.next_observer.get();
        self.state.next_observer.set(key + 1);
        self.state
            .observers
            .borrow_mut()
            .push((key, Rc::new(observer)));

        Subscription {
            state: Rc::downgrade(&self.state),
            key,
        }
    }

    pub(crate) fn downgrade(&self) -> WeakSlot {
        WeakSlot(Rc::downgrade(&self.state))
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.state.observers.borrow().len()
    }

    fn set(&self, value: Option<Rc<ToastRequest>>) {
        self.state.pending.borrow_mut().push_back(value);
        if self.state.notifying.replace(true) {
            // Delivered by the round already in progress.
            return;
        }
        let _round = RoundGuard(&self.state);

        loop {
            let next = self.state.pending.borrow_mut().pop_front();
            let Some(next) = next else {
                break;
            };
            *self.state.value.borrow_mut() = next.clone();

            // Observers may subscribe, unsubscribe or write while being notified.
            let observers: Vec<Observer> = self
                .state
                .observers
                .borrow()
                .iter()
                .map(|(_, observer)| Rc::clone(observer))
                .collect();
            for observer in observers {
                observer(next.as_ref());
            }
        }
    }
}

impl fmt::Debug for SharedSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSlot")
            .field("occupant", &self.occupant_id())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Non-owning handle for observers that need to query their own slot.
pub(crate) struct WeakSlot(Weak<SlotState>);

impl WeakSlot {
    pub(crate) fn upgrade(&self) -> Option<SharedSlot> {
        self.0.upgrade().map(|state| SharedSlot { state })
    }
}

/// Resets the in-round flag even if an observer panics.
struct RoundGuard<'a>(&'a SlotState);

impl Drop for RoundGuard<'_> {
    fn drop(&mut self) {
        self.0.notifying.set(false);
    }
}

/// Keeps an observer registered on a [`SharedSlot`].
#[must_use = "dropping the subscription unregisters the observer"]
pub struct Subscription {
    state: Weak<SlotState>,
    key: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state
                .observers
                .borrow_mut()
                .retain(|(key, _)| *key != self.key);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::content::ContentBox;
    use crate::toast::request::EmitterConfig;

    fn request() -> Rc<ToastRequest> {
        Rc::new(ToastRequest::new(
            EmitterId::new(),
            &EmitterConfig::new(ContentBox::default()),
        ))
    }

    fn recorder(slot: &SharedSlot) -> (Rc<RefCell<Vec<Option<EmitterId>>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = slot.observe(move |value| {
            sink.borrow_mut().push(value.map(|request| request.id()));
        });
        (seen, subscription)
    }

    #[test]
    fn new_slot_is_empty() {
        let slot = SharedSlot::new();
        assert!(slot.is_empty());
        assert!(slot.occupant_id().is_none());
    }

    #[test]
    fn last_write_wins() {
        let slot = SharedSlot::new();
        let first = request();
        let second = request();

        slot.write(Rc::clone(&first));
        slot.write(Rc::clone(&second));

        assert_eq!(slot.occupant_id(), Some(second.id()));
    }

    #[test]
    fn every_write_notifies_observers() {
        let slot = SharedSlot::new();
        let (seen, _subscription) = recorder(&slot);
        let first = request();

        slot.write(Rc::clone(&first));
        slot.clear();

        assert_eq!(*seen.borrow(), vec![Some(first.id()), None]);
    }

    #[test]
    fn clear_if_owned_ignores_other_owners() {
        let slot = SharedSlot::new();
        let occupant = request();
        slot.write(Rc::clone(&occupant));

        assert!(!slot.clear_if_owned(EmitterId::new()));
        assert_eq!(slot.occupant_id(), Some(occupant.id()));

        assert!(slot.clear_if_owned(occupant.id()));
        assert!(slot.is_empty());
    }

    #[test]
    fn dropping_subscription_unregisters_observer() {
        let slot = SharedSlot::new();
        let (seen, subscription) = recorder(&slot);
        assert_eq!(slot.observer_count(), 1);

        drop(subscription);
        slot.write(request());

        assert_eq!(slot.observer_count(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn writes_from_observers_are_queued_until_round_ends() {
        let slot = SharedSlot::new();
        let follow_up = request();
        let trigger = request();

        // Clears the slot whenever `trigger` lands in it.
        let writer_slot = slot.clone();
        let trigger_id = trigger.id();
        let _writer = slot.observe(move |value| {
            if value.map(|request| request.id()) == Some(trigger_id) {
                writer_slot.clear();
            }
        });
        let (seen, _recorder) = recorder(&slot);

        slot.write(Rc::clone(&trigger));

        // The recorder saw the trigger before the queued clear.
        assert_eq!(*seen.borrow(), vec![Some(trigger.id()), None]);
        assert!(slot.is_empty());

        slot.write(Rc::clone(&follow_up));
        assert_eq!(slot.occupant_id(), Some(follow_up.id()));
    }

    #[test]
    fn owner_checks_see_queued_writes() {
        let slot = SharedSlot::new();
        let queued = request();
        let queued_id = queued.id();

        let writer_slot = slot.clone();
        let pending = RefCell::new(Some(queued));
        let owner_during_round = Rc::new(Cell::new(None));
        let seen_owner = Rc::clone(&owner_during_round);
        let _writer = slot.observe(move |value| {
            if value.is_some() {
                return;
            }
            if let Some(next) = pending.borrow_mut().take() {
                writer_slot.write(next);
                seen_owner.set(Some((
                    writer_slot.occupant_id(),
                    writer_slot.latest_occupant_id(),
                )));
                assert!(writer_slot.clear_if_owned(queued_id));
            }
        });

        slot.clear();

        assert_eq!(owner_during_round.get(), Some((None, Some(queued_id))));
        assert!(slot.is_empty());
    }
}
