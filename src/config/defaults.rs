// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Request defaults applied to new emitters
//! - **Animation**: Transition length and tick rate

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss delay for a toast (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u32 = 2000;

/// Whether a tap dismisses a toast by default.
pub const DEFAULT_TAP_TO_DISMISS: bool = true;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default length of enter and exit transitions (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u32 = 250;

/// Minimum transition length (in milliseconds).
pub const MIN_TRANSITION_MS: u32 = 0;

/// Maximum transition length (in milliseconds).
pub const MAX_TRANSITION_MS: u32 = 2000;

/// Default interval between coordinator ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 16;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u32 = 1;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u32 = 1000;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::animation::{tick_bounds, transition_bounds};

    // Verify domain bounds match config constants
    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(transition_bounds::MIN_MS, MIN_TRANSITION_MS);
        assert_eq!(transition_bounds::MAX_MS, MAX_TRANSITION_MS);
        assert_eq!(transition_bounds::DEFAULT_MS, DEFAULT_TRANSITION_MS);
        assert_eq!(tick_bounds::MIN_MS, MIN_TICK_INTERVAL_MS);
        assert_eq!(tick_bounds::MAX_MS, MAX_TICK_INTERVAL_MS);
        assert_eq!(tick_bounds::DEFAULT_MS, DEFAULT_TICK_INTERVAL_MS);
    }
}
