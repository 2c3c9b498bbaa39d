// SPDX-License-Identifier: MPL-2.0
//! Opaque toast payload.
//!
//! The coordinator never looks inside a toast's content. Renderers recover
//! the concrete payload type with [`ContentBox::downcast_ref`].

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Identity-compared wrapper around an arbitrary render payload.
///
/// Two boxes are equal only when they share the same allocation. Cloning a
/// box yields an equal box; wrapping two structurally identical payloads
/// yields two distinct boxes.
#[derive(Clone)]
pub struct ContentBox(Rc<dyn Any>);

impl ContentBox {
    /// Wraps a payload in a new box with a fresh identity.
    pub fn new<T: Any>(payload: T) -> Self {
        Self(Rc::new(payload))
    }

    /// Returns the payload if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns whether the payload is of type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl PartialEq for ContentBox {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ContentBox {}

impl fmt::Debug for ContentBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentBox")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

impl Default for ContentBox {
    fn default() -> Self {
        Self::new(())
    }
}
