// SPDX-License-Identifier: MPL-2.0
//! Iced integration for toast presentation.

pub mod overlay;

pub use overlay::{overlay, subscription, update, Message};
