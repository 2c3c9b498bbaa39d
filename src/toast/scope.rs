// SPDX-License-Identifier: MPL-2.0
//! A subtree within which at most one toast is visible.

use super::clock::Clock;
use super::coordinator::{CoordinatorOptions, RootCoordinator};
use super::emitter::Emitter;
use super::request::EmitterConfig;
use super::slot::SharedSlot;
use std::rc::Rc;

/// A slot together with the coordinator that presents it.
///
/// Created once at the root of a view subtree with [`install_coordinator`];
/// call sites below it get their handles from [`Scope::attach_emitter`].
/// Dropping the scope ends every visual presence in it.
pub struct Scope {
    coordinator: RootCoordinator,
    clock: Rc<dyn Clock>,
}

/// Installs a coordinator over a fresh slot.
///
/// Every call creates an independent scope; toasts never cross scopes.
pub fn install_coordinator(clock: impl Clock + 'static, options: CoordinatorOptions) -> Scope {
    Scope::with_clock(Rc::new(clock), options)
}

impl Scope {
    fn with_clock(clock: Rc<dyn Clock>, options: CoordinatorOptions) -> Self {
        let slot = SharedSlot::new();
        tracing::debug!(?options, "toast scope installed");
        Self {
            coordinator: RootCoordinator::new(slot, Rc::clone(&clock), options),
            clock,
        }
    }

    /// Installs an independent scope for a nested subtree, sharing this
    /// scope's clock and options.
    #[must_use]
    pub fn nested(&self) -> Self {
        Self::with_clock(Rc::clone(&self.clock), self.coordinator.options())
    }

    /// Creates a handle for one call site in this scope.
    #[must_use]
    pub fn attach_emitter(&self, config: EmitterConfig) -> Emitter {
        Emitter::attach(self.coordinator.slot(), config)
    }

    #[must_use]
    pub fn slot(&self) -> &SharedSlot {
        self.coordinator.slot()
    }

    #[must_use]
    pub fn coordinator(&self) -> &RootCoordinator {
        &self.coordinator
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("coordinator", &self.coordinator)
            .finish_non_exhaustive()
    }
}
