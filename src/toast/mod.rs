// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast presentation.
//!
//! Any number of call sites in a view subtree can ask for a toast, but at
//! most one is visible at a time. The most recent request always wins; the
//! request it replaces still leaves the screen properly and still gets its
//! `on_dismiss` call, exactly once.
//!
//! # Components
//!
//! - [`content`] - `ContentBox`, the opaque identity-compared payload
//! - [`transition`] - `DisplayMode` and the enter/exit transition policy
//! - [`request`] - `ToastRequest`, `EmitterConfig`, `EmitterId`
//! - [`slot`] - `SharedSlot`, the single-occupancy broadcast cell
//! - [`emitter`] - `Emitter`, the per call-site handle
//! - [`coordinator`] - `RootCoordinator`, timers, taps and dismissal
//! - [`scope`] - `Scope` and [`install_coordinator`]
//! - [`clock`] - time sources
//!
//! # Usage
//!
//! ```
//! use iced_toast::toast::{install_coordinator, ContentBox, CoordinatorOptions, EmitterConfig, ManualClock};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let scope = install_coordinator(clock.clone(), CoordinatorOptions::default());
//!
//! let saved = scope.attach_emitter(EmitterConfig::new(ContentBox::new("Saved")));
//! let failed = scope.attach_emitter(EmitterConfig::new(ContentBox::new("Failed")));
//!
//! saved.set_presented(true);
//! failed.set_presented(true);
//! assert!(!saved.is_presented()); // superseded
//!
//! clock.advance(Duration::from_secs(2));
//! scope.coordinator().tick();
//! assert!(!failed.is_presented()); // timed out
//! ```

pub mod clock;
pub mod content;
pub mod coordinator;
pub mod emitter;
pub mod request;
pub mod scope;
pub mod slot;
pub mod transition;

pub use clock::{Clock, ManualClock, SystemClock};
pub use content::ContentBox;
pub use coordinator::{CoordinatorOptions, CoordinatorState, Layer, Phase, RootCoordinator};
pub use emitter::Emitter;
pub use request::{Callback, EmitterConfig, EmitterId, ToastRequest};
pub use scope::{install_coordinator, Scope};
pub use slot::{SharedSlot, Subscription};
pub use transition::{
    transitions, BannerStyle, Direction, DisplayMode, Edge, Frame, Motion, Transition,
    TransitionPair,
};
