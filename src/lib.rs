// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` presents transient toast notifications in Iced applications.
//!
//! Any number of call sites can request a toast, but a scope shows at most
//! one at a time and the most recent request wins. Superseded toasts still
//! animate out and still receive their dismissal callback exactly once.
//!
//! - [`toast`] holds the presentation model (slot, emitters, coordinator)
//! - [`ui`] wires a coordinator into an Iced `update`/`view`/`subscription`
//! - [`config`] loads and saves user defaults from `toast.toml`

#![doc(html_root_url = "https://docs.rs/iced_toast/0.3.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod toast;
pub mod ui;
