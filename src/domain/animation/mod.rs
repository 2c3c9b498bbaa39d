// SPDX-License-Identifier: MPL-2.0
//! Animation domain types.
//!
//! This module provides pure domain types for toast animation timing:
//! - [`TransitionMillis`]: Length of enter and exit transitions
//! - [`TickInterval`]: How often the host drives the coordinator

mod newtypes;

pub use newtypes::{tick_bounds, transition_bounds, TickInterval, TransitionMillis};
