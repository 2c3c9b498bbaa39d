// SPDX-License-Identifier: MPL-2.0
//! Pure domain types shared across modules.
//!
//! Types here validate and clamp their values on construction and carry no
//! UI or I/O dependencies.

pub mod animation;
