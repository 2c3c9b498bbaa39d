// SPDX-License-Identifier: MPL-2.0
//! Animation newtypes.
//!
//! This module provides type-safe wrappers for animation timing values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Transition Bounds
// =============================================================================

/// Transition length bounds (0 to 2000 milliseconds).
pub mod transition_bounds {
    /// Minimum transition length (instant).
    pub const MIN_MS: u32 = 0;
    /// Maximum transition length.
    pub const MAX_MS: u32 = 2000;
    /// Default transition length.
    pub const DEFAULT_MS: u32 = 250;
}

// =============================================================================
// TransitionMillis
// =============================================================================

/// Length of a toast's enter and exit transitions.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–2000 ms). Zero makes toasts appear
/// and disappear instantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionMillis(u32);

impl TransitionMillis {
    /// Creates a new transition length, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the transition length as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Returns true if transitions are disabled.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for TransitionMillis {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tick Interval Bounds
// =============================================================================

/// Tick interval bounds (1 to 1000 milliseconds).
pub mod tick_bounds {
    /// Minimum interval between coordinator ticks.
    pub const MIN_MS: u32 = 1;
    /// Maximum interval between coordinator ticks.
    pub const MAX_MS: u32 = 1000;
    /// Default interval (about one frame at 60 Hz).
    pub const DEFAULT_MS: u32 = 16;
}

// =============================================================================
// TickInterval
// =============================================================================

/// How often the host drives the coordinator while a toast is on screen.
///
/// Bounds the lateness of dismiss timers and the smoothness of sampled
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u32);

impl TickInterval {
    /// Creates a new tick interval, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(tick_bounds::MIN_MS, tick_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(tick_bounds::DEFAULT_MS)
    }
}
