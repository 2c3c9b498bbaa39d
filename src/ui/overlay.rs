// SPDX-License-Identifier: MPL-2.0
//! Iced adapter for a [`RootCoordinator`].
//!
//! The host application embeds three things:
//!
//! - [`subscription`] while toasts are on screen, to drive [`Message::Tick`]
//! - [`update`] to forward overlay messages to the coordinator
//! - [`overlay`] stacked above its own content
//!
//! Drawing the toast itself stays with the host: the overlay hands each
//! layer's [`ContentBox`], [`DisplayMode`] and sampled [`Frame`] to a render
//! closure and only takes care of placement and taps.

use crate::domain::animation::TickInterval;
use crate::toast::{ContentBox, DisplayMode, Frame, Layer, RootCoordinator};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{mouse_area, text, Container, Stack};
use iced::{Element, Length, Padding, Subscription};

/// Messages produced by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame; the coordinator reads time from its own clock.
    Tick,
    /// The presented toast was tapped.
    Tapped,
}

/// Forwards an overlay message to the coordinator.
pub fn update(coordinator: &RootCoordinator, message: Message) {
    match message {
        Message::Tick => coordinator.tick(),
        Message::Tapped => coordinator.tap(),
    }
}

/// Ticks the coordinator at `interval` while it has anything on screen.
pub fn subscription(
    coordinator: &RootCoordinator,
    interval: TickInterval,
) -> Subscription<Message> {
    if coordinator.has_layers() {
        iced::time::every(interval.as_duration()).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Renders every layer of `coordinator`, bottom-most first.
///
/// `render` draws one toast; it receives the sampled transition frame and
/// is expected to apply opacity, scale and offset itself. Only the presented
/// toast reacts to taps.
pub fn overlay<'a, F>(coordinator: &RootCoordinator, render: F) -> Element<'a, Message>
where
    F: Fn(&ContentBox, DisplayMode, Frame) -> Element<'a, Message>,
{
    let layers = coordinator.layers();
    if layers.is_empty() {
        // An empty container that takes no space
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let mut stack = Stack::new();
    for layer in &layers {
        let request = &layer.request;
        let toast = render(request.content(), request.mode(), layer.frame());
        stack = stack.push(place(layer, toast));
    }

    stack
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn place<'a>(layer: &Layer, toast: Element<'a, Message>) -> Element<'a, Message> {
    let mode = layer.request.mode();
    let (horizontal, vertical) = alignment(mode);

    let toast = if layer.is_presenting() {
        mouse_area(toast).on_press(Message::Tapped).into()
    } else {
        toast
    };

    Container::new(toast)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(offset_padding(layer.request.vertical_offset()))
        .into()
}

/// Screen anchor for a display mode.
fn alignment(mode: DisplayMode) -> (Horizontal, Vertical) {
    match mode {
        DisplayMode::Alert => (Horizontal::Center, Vertical::Center),
        DisplayMode::Hud => (Horizontal::Center, Vertical::Top),
        DisplayMode::Banner(_) => (Horizontal::Center, Vertical::Bottom),
    }
}

/// Shifts the anchored toast by `offset` logical pixels, positive downward.
fn offset_padding(offset: f32) -> Padding {
    Padding {
        top: offset.max(0.0),
        right: 0.0,
        bottom: (-offset).max(0.0),
        left: 0.0,
    }
}
