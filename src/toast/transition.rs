// SPDX-License-Identifier: MPL-2.0
//! Display modes and the transitions they map to.
//!
//! [`transitions`] is the whole policy: a pure, exhaustive match from a
//! [`DisplayMode`] to the pair of transitions played when a toast appears
//! and disappears. Players that have no easing engine of their own can use
//! [`Transition::sample`] as a linear reference.

/// How a banner enters and leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BannerStyle {
    /// Slides in from the leading edge and out past the trailing edge, fading.
    #[default]
    Slide,
    /// Moves up from the bottom edge and back down, without fading.
    Plain,
}

/// Where and how a toast is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Centered card.
    #[default]
    Alert,
    /// Compact capsule pinned to the top edge.
    Hud,
    /// Full-width strip pinned to the bottom edge.
    Banner(BannerStyle),
}

/// Screen edge used by edge-anchored motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

/// Geometric part of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Grows from (or shrinks to) nothing around the toast's center.
    Scale,
    /// Travels across the given edge.
    Move(Edge),
    /// Enters from the leading edge, leaves past the trailing edge.
    Slide,
}

/// Whether a transition brings a toast on screen or takes it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
}

/// A transition descriptor handed to the transition player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub motion: Motion,
    /// Opacity animates alongside the motion.
    pub fade: bool,
    pub direction: Direction,
}

/// The enter and exit transitions selected for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionPair {
    pub enter: Transition,
    pub exit: Transition,
}

/// Selects the enter and exit transitions for a display mode.
#[must_use]
pub fn transitions(mode: DisplayMode) -> TransitionPair {
    let (motion, fade) = match mode {
        DisplayMode::Alert => (Motion::Scale, true),
        DisplayMode::Hud => (Motion::Move(Edge::Top), true),
        DisplayMode::Banner(BannerStyle::Slide) => (Motion::Slide, true),
        DisplayMode::Banner(BannerStyle::Plain) => (Motion::Move(Edge::Bottom), false),
    };

    TransitionPair {
        enter: Transition {
            motion,
            fade,
            direction: Direction::In,
        },
        exit: Transition {
            motion,
            fade,
            direction: Direction::Out,
        },
    }
}

/// Visual properties of a toast at one instant of a transition.
///
/// Offsets are expressed in units of the toast's own size along each axis,
/// so `offset_y = -1.0` places the toast one full height above its resting
/// position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Frame {
    /// The resting frame of a fully visible toast.
    pub const REST: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };
}

impl Transition {
    /// Samples the transition linearly at `progress` (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn sample(self, progress: f32) -> Frame {
        let progress = progress.clamp(0.0, 1.0);
        // How much of the toast is "on screen": rises while entering, falls while leaving.
        let presence = match self.direction {
            Direction::In => progress,
            Direction::Out => 1.0 - progress,
        };
        let away = 1.0 - presence;

        let mut frame = Frame::REST;
        if self.fade {
            frame.opacity = presence;
        }
        match self.motion {
            Motion::Scale => frame.scale = presence,
            Motion::Move(Edge::Top) => frame.offset_y = -away,
            Motion::Move(Edge::Bottom) => frame.offset_y = away,
            Motion::Slide => {
                frame.offset_x = match self.direction {
                    Direction::In => -away,
                    Direction::Out => away,
                };
            }
        }
        frame
    }
}
