// SPDX-License-Identifier: MPL-2.0
//! Presentation lifecycle derived from a scope's slot.
//!
//! The [`RootCoordinator`] observes a [`SharedSlot`] and turns its value into
//! what is on screen:
//!
//! - a slot write starts the new request's enter transition and arms its
//!   dismiss timer (after cancelling whatever timer was armed before);
//! - a slot clear, or a write that replaces the occupant, starts the old
//!   request's exit transition;
//! - [`RootCoordinator::tick`] fires the armed timer once its deadline has
//!   passed and completes exits whose transition has finished, invoking
//!   `on_dismiss` for each;
//! - [`RootCoordinator::tap`] forwards taps to the visible request.
//!
//! The logical state (`Idle` / `Presenting`) always mirrors the slot. Visual
//! removal lags behind it by the transition duration, so a superseded
//! request may still be exiting while its successor enters.

use super::clock::Clock;
use super::request::{Callback, EmitterId, ToastRequest};
use super::slot::{SharedSlot, Subscription};
use super::transition::{transitions, Frame, Transition, TransitionPair};
use crate::config::DEFAULT_TRANSITION_MS;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Tunables for a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorOptions {
    /// Length of every enter and exit transition.
    pub transition_duration: Duration,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            transition_duration: Duration::from_millis(u64::from(DEFAULT_TRANSITION_MS)),
        }
    }
}

/// Logical state, always equal to what the slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Presenting(EmitterId),
}

/// Where a displayed toast is in its visual lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Exiting,
}

/// One toast the transition player should draw this frame.
#[derive(Debug, Clone)]
pub struct Layer {
    pub request: Rc<ToastRequest>,
    /// Transition to sample; the exit transition once `phase` is `Exiting`.
    pub transition: Transition,
    pub phase: Phase,
    /// Progress of `transition`, in `0.0..=1.0`.
    pub progress: f32,
}

impl Layer {
    /// Samples the layer's transition at its current progress.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.transition.sample(self.progress)
    }

    /// Whether this layer is the presented toast rather than a departing one.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.phase != Phase::Exiting
    }
}

#[derive(Debug, Clone, Copy)]
struct DismissTimer {
    owner: EmitterId,
    deadline: Instant,
}

struct Presentation {
    request: Rc<ToastRequest>,
    transitions: TransitionPair,
    entered_at: Instant,
}

struct Departure {
    presentation: Presentation,
    exit_started_at: Instant,
}

impl Departure {
    fn is_finished(&self, now: Instant, transition: Duration) -> bool {
        now.saturating_duration_since(self.exit_started_at) >= transition
    }

    /// Ends this request's visual presence.
    ///
    /// Consumes the departure and takes the request's dismiss callback, which
    /// a request hands out only once. The caller runs it once no coordinator
    /// state is borrowed.
    fn finish(self) -> Option<Callback> {
        tracing::debug!(id = %self.presentation.request.id(), "toast removed from display");
        self.presentation.request.take_dismiss_callback()
    }
}

struct Inner {
    clock: Rc<dyn Clock>,
    options: CoordinatorOptions,
    current: Option<Presentation>,
    timer: Option<DismissTimer>,
    departing: Vec<Departure>,
}

impl Inner {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            tracing::debug!(id = %timer.owner, "dismiss timer cancelled");
        }
    }

    /// Mirrors a new slot value.
    fn sync(&mut self, value: Option<&Rc<ToastRequest>>) {
        let unchanged = match (&self.current, value) {
            (None, None) => true,
            (Some(current), Some(next)) => Rc::ptr_eq(&current.request, next),
            _ => false,
        };
        if unchanged {
            return;
        }

        let now = self.clock.now();
        // Cancel before rearming so a stale timer can never fire against the new occupant.
        self.cancel_timer();

        if let Some(previous) = self.current.take() {
            tracing::debug!(
                id = %previous.request.id(),
                exit = ?previous.transitions.exit,
                "toast exit started"
            );
            self.departing.push(Departure {
                presentation: previous,
                exit_started_at: now,
            });
        }

        if let Some(request) = value {
            // A request written back while still exiting resumes instead of exiting twice.
            if let Some(index) = self
                .departing
                .iter()
                .position(|departure| Rc::ptr_eq(&departure.presentation.request, request))
            {
                self.departing.remove(index);
                tracing::debug!(id = %request.id(), "exiting toast presented again");
            }
            if request.auto_dismisses() {
                self.arm_timer(request, now);
            }
            let transitions = transitions(request.mode());
            tracing::debug!(id = %request.id(), enter = ?transitions.enter, "toast enter started");
            self.current = Some(Presentation {
                request: Rc::clone(request),
                transitions,
                entered_at: now,
            });
        }
    }

    fn arm_timer(&mut self, request: &ToastRequest, now: Instant) {
        let Some(deadline) = now.checked_add(request.duration()) else {
            tracing::debug!(
                id = %request.id(),
                duration = ?request.duration(),
                "duration out of range, toast never expires"
            );
            return;
        };
        tracing::debug!(id = %request.id(), duration = ?request.duration(), "dismiss timer armed");
        self.timer = Some(DismissTimer {
            owner: request.id(),
            deadline,
        });
    }

    /// Takes the armed timer if its deadline has passed.
    fn take_expired_timer(&mut self, now: Instant) -> Option<DismissTimer> {
        match self.timer {
            Some(timer) if timer.deadline <= now => self.timer.take(),
            _ => None,
        }
    }

    fn take_finished(&mut self, now: Instant) -> Vec<Departure> {
        let transition = self.options.transition_duration;
        let (finished, still_exiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.departing)
            .into_iter()
            .partition(|departure| departure.is_finished(now, transition));
        self.departing = still_exiting;
        finished
    }

    fn progress(&self, since: Instant, now: Instant) -> f32 {
        let transition = self.options.transition_duration;
        if transition.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(since);
        (elapsed.as_secs_f32() / transition.as_secs_f32()).min(1.0)
    }
}

/// Owns the visible toast lifecycle of one scope.
pub struct RootCoordinator {
    slot: SharedSlot,
    inner: Rc<RefCell<Inner>>,
    subscription: Option<Subscription>,
}

impl RootCoordinator {
    /// Starts coordinating `slot`. Any request already in the slot is
    /// presented immediately.
    pub fn new(slot: SharedSlot, clock: Rc<dyn Clock>, options: CoordinatorOptions) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            clock,
            options,
            current: None,
            timer: None,
            departing: Vec::new(),
        }));

        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&inner);
        let subscription = slot.observe(move |value| {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().sync(value);
            }
        });
        inner.borrow_mut().sync(slot.get().as_ref());

        Self {
            slot,
            inner,
            subscription: Some(subscription),
        }
    }

    /// Returns the slot this coordinator observes.
    #[must_use]
    pub fn slot(&self) -> &SharedSlot {
        &self.slot
    }

    #[must_use]
    pub fn options(&self) -> CoordinatorOptions {
        self.inner.borrow().options
    }

    /// Returns the logical state.
    #[must_use]
    pub fn state(&self) -> CoordinatorState {
        match &self.inner.borrow().current {
            Some(presentation) => CoordinatorState::Presenting(presentation.request.id()),
            None => CoordinatorState::Idle,
        }
    }

    /// Returns the request currently presented, if any.
    #[must_use]
    pub fn presenting(&self) -> Option<Rc<ToastRequest>> {
        self.inner
            .borrow()
            .current
            .as_ref()
            .map(|presentation| Rc::clone(&presentation.request))
    }

    /// Returns whether a dismiss timer is armed.
    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.inner.borrow().timer.is_some()
    }

    /// Returns when the armed dismiss timer fires.
    #[must_use]
    pub fn timer_deadline(&self) -> Option<Instant> {
        self.inner.borrow().timer.map(|timer| timer.deadline)
    }

    /// Returns the number of toasts still playing their exit transition.
    #[must_use]
    pub fn exiting_count(&self) -> usize {
        self.inner.borrow().departing.len()
    }

    /// Returns whether anything is on screen.
    #[must_use]
    pub fn has_layers(&self) -> bool {
        let inner = self.inner.borrow();
        inner.current.is_some() || !inner.departing.is_empty()
    }

    /// Advances time-driven work: fires the dismiss timer once its deadline
    /// has passed and completes finished exit transitions.
    ///
    /// Should be called from the host event loop, e.g. on every animation
    /// frame while [`has_layers`](Self::has_layers) is true.
    pub fn tick(&self) {
        let expired = {
            let mut inner = self.inner.borrow_mut();
            let now = inner.clock.now();
            inner.take_expired_timer(now)
        };
        if let Some(timer) = expired {
            tracing::debug!(id = %timer.owner, "dismiss timer fired");
            // Every slot change rearms the timer, so the armed one belongs to the occupant.
            self.slot.clear();
        }

        let finished = {
            let mut inner = self.inner.borrow_mut();
            let now = inner.clock.now();
            inner.take_finished(now)
        };
        run_dismiss_callbacks(finished);
    }

    /// Reports a tap on the visible toast.
    ///
    /// Runs the presented request's `on_tap`, then dismisses it if it is
    /// tap-to-dismiss. Taps while idle are ignored.
    pub fn tap(&self) {
        let Some(request) = self.presenting() else {
            tracing::trace!("tap ignored, no toast presented");
            return;
        };

        request.notify_tap();

        if !request.tap_to_dismiss() {
            return;
        }
        // `on_tap` may already have replaced or cleared the toast.
        let still_presented = self
            .slot
            .get()
            .is_some_and(|occupant| Rc::ptr_eq(&occupant, &request));
        if still_presented {
            tracing::debug!(id = %request.id(), "toast dismissed by tap");
            self.inner.borrow_mut().cancel_timer();
            self.slot.clear();
        }
    }

    /// Returns every toast to draw, bottom-most first: exiting toasts in
    /// the order they left, then the presented one.
    #[must_use]
    pub fn layers(&self) -> Vec<Layer> {
        let inner = self.inner.borrow();
        let now = inner.clock.now();

        let mut layers: Vec<Layer> = inner
            .departing
            .iter()
            .map(|departure| Layer {
                request: Rc::clone(&departure.presentation.request),
                transition: departure.presentation.transitions.exit,
                phase: Phase::Exiting,
                progress: inner.progress(departure.exit_started_at, now),
            })
            .collect();

        if let Some(presentation) = &inner.current {
            let progress = inner.progress(presentation.entered_at, now);
            let phase = if progress < 1.0 {
                Phase::Entering
            } else {
                Phase::Shown
            };
            layers.push(Layer {
                request: Rc::clone(&presentation.request),
                transition: presentation.transitions.enter,
                phase,
                progress,
            });
        }
        layers
    }

    /// Stops coordinating and ends every visual presence at once.
    ///
    /// Equivalent to dropping the coordinator.
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for RootCoordinator {
    fn drop(&mut self) {
        // Stop observing first so the clear below does not start new exits.
        self.subscription.take();

        let ended: Vec<Departure> = {
            let mut inner = self.inner.borrow_mut();
            let now = inner.clock.now();
            inner.cancel_timer();
            let mut ended = std::mem::take(&mut inner.departing);
            if let Some(presentation) = inner.current.take() {
                ended.push(Departure {
                    presentation,
                    exit_started_at: now,
                });
            }
            ended
        };

        if !self.slot.is_empty() {
            self.slot.clear();
        }
        run_dismiss_callbacks(ended);
    }
}

impl std::fmt::Debug for RootCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootCoordinator")
            .field("state", &self.state())
            .field("timer_armed", &self.is_timer_armed())
            .field("exiting", &self.exiting_count())
            .finish()
    }
}

fn run_dismiss_callbacks(departures: Vec<Departure>) {
    for callback in departures.into_iter().filter_map(Departure::finish) {
        callback();
    }
}
