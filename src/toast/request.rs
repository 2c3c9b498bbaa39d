// SPDX-License-Identifier: MPL-2.0
//! Toast requests and the emitter configuration they are built from.

use super::content::ContentBox;
use super::transition::DisplayMode;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Callback attached to a toast request.
pub type Callback = Rc<dyn Fn()>;

/// Identity of an emitter, shared by every request it writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmitterId(u64);

impl EmitterId {
    /// Creates a new unique emitter ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EmitterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "emitter#{}", self.0)
    }
}

/// Everything a call site says about the toast it wants to show.
///
/// The same configuration is reused every time the emitter presents, so
/// callbacks are shared (`Fn`, not `FnOnce`).
#[derive(Clone, Default)]
pub struct EmitterConfig {
    pub content: ContentBox,
    pub mode: DisplayMode,
    /// Zero disables automatic dismissal.
    pub duration: Duration,
    pub tap_to_dismiss: bool,
    pub on_tap: Option<Callback>,
    pub on_dismiss: Option<Callback>,
    pub vertical_offset: f32,
}

impl EmitterConfig {
    /// Creates a configuration for the given content with library defaults.
    pub fn new(content: ContentBox) -> Self {
        Self {
            content,
            duration: Duration::from_millis(u64::from(crate::config::DEFAULT_TOAST_DURATION_MS)),
            tap_to_dismiss: crate::config::DEFAULT_TAP_TO_DISMISS,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: ContentBox) -> Self {
        self.content = content;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the auto-dismiss delay. `Duration::ZERO` keeps the toast up until
    /// it is tapped or cleared.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn tap_to_dismiss(mut self, enabled: bool) -> Self {
        self.tap_to_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn on_tap(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_tap = Some(Rc::new(callback));
        self
    }

    /// Sets the callback fired once each time a presentation of this
    /// emitter's toast leaves the screen.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(callback));
        self
    }

    #[must_use]
    pub fn with_offset(mut self, vertical_offset: f32) -> Self {
        self.vertical_offset = vertical_offset;
        self
    }
}

impl fmt::Debug for EmitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmitterConfig")
            .field("content", &self.content)
            .field("mode", &self.mode)
            .field("duration", &self.duration)
            .field("tap_to_dismiss", &self.tap_to_dismiss)
            .field("on_tap", &self.on_tap.is_some())
            .field("on_dismiss", &self.on_dismiss.is_some())
            .field("vertical_offset", &self.vertical_offset)
            .finish()
    }
}

/// One request to show a toast. Immutable once built, except that its
/// `on_dismiss` callback can be taken only once.
pub struct ToastRequest {
    id: EmitterId,
    content: ContentBox,
    mode: DisplayMode,
    duration: Duration,
    tap_to_dismiss: bool,
    on_tap: Option<Callback>,
    on_dismiss: RefCell<Option<Callback>>,
    vertical_offset: f32,
}

impl ToastRequest {
    /// Builds a request owned by `id` from an emitter configuration.
    pub fn new(id: EmitterId, config: &EmitterConfig) -> Self {
        Self {
            id,
            content: config.content.clone(),
            mode: config.mode,
            duration: config.duration,
            tap_to_dismiss: config.tap_to_dismiss,
            on_tap: config.on_tap.clone(),
            on_dismiss: RefCell::new(config.on_dismiss.clone()),
            vertical_offset: config.vertical_offset,
        }
    }

    /// Returns the ID of the emitter that owns this request.
    #[must_use]
    pub fn id(&self) -> EmitterId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &ContentBox {
        &self.content
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether this request dismisses itself after its duration.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    #[must_use]
    pub fn tap_to_dismiss(&self) -> bool {
        self.tap_to_dismiss
    }

    #[must_use]
    pub fn vertical_offset(&self) -> f32 {
        self.vertical_offset
    }

    pub(crate) fn notify_tap(&self) {
        if let Some(on_tap) = &self.on_tap {
            on_tap();
        }
    }

    /// Takes the dismiss callback; later calls return `None`.
    pub(crate) fn take_dismiss_callback(&self) -> Option<Callback> {
        self.on_dismiss.borrow_mut().take()
    }
}

impl fmt::Debug for ToastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("mode", &self.mode)
            .field("duration", &self.duration)
            .field("tap_to_dismiss", &self.tap_to_dismiss)
            .field("vertical_offset", &self.vertical_offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn emitter_ids_are_unique() {
        assert_ne!(EmitterId::new(), EmitterId::new());
    }

    #[test]
    fn request_copies_config_fields() {
        let content = ContentBox::new("saved");
        let config = EmitterConfig::new(content.clone())
            .with_mode(DisplayMode::Hud)
            .with_duration(Duration::from_secs(5))
            .tap_to_dismiss(false)
            .with_offset(12.0);
        let id = EmitterId::new();

        let request = ToastRequest::new(id, &config);

        assert_eq!(request.id(), id);
        assert_eq!(request.content(), &content);
        assert_eq!(request.mode(), DisplayMode::Hud);
        assert_eq!(request.duration(), Duration::from_secs(5));
        assert!(!request.tap_to_dismiss());
        assert!((request.vertical_offset() - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_duration_does_not_auto_dismiss() {
        let config = EmitterConfig::new(ContentBox::default()).with_duration(Duration::ZERO);
        let request = ToastRequest::new(EmitterId::new(), &config);
        assert!(!request.auto_dismisses());
    }

    #[test]
    fn notify_tap_runs_callback() {
        let taps = Rc::new(Cell::new(0));
        let counter = Rc::clone(&taps);
        let config = EmitterConfig::default().on_tap(move || counter.set(counter.get() + 1));
        let request = ToastRequest::new(EmitterId::new(), &config);

        request.notify_tap();
        request.notify_tap();

        assert_eq!(taps.get(), 2);
    }

    #[test]
    fn dismiss_callback_is_handed_out_once() {
        let config = EmitterConfig::default().on_dismiss(|| {});
        let request = ToastRequest::new(EmitterId::new(), &config);

        assert!(request.take_dismiss_callback().is_some());
        assert!(request.take_dismiss_callback().is_none());
        assert!(config.on_dismiss.is_some());
    }

    #[test]
    fn new_config_uses_library_defaults() {
        let config = EmitterConfig::new(ContentBox::default());
        assert_eq!(config.mode, DisplayMode::Alert);
        assert!(config.tap_to_dismiss);
        assert_eq!(config.duration, Duration::from_secs(2));
    }
}
