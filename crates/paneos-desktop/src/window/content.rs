//! Window content construction
//!
//! A window's on-screen content is produced by an external
//! [`ContentProvider`], exactly once per open, and owned by the window
//! for its whole lifetime. The core never inspects the handle.

use std::any::Any;

use crate::error::DesktopResult;

/// Opaque handle to a window's content.
///
/// Produced by a [`ContentProvider`] at open time and dropped when the
/// window closes. The rendering layer may downcast it back to whatever
/// concrete type the provider mounted.
pub struct ContentHandle(Box<dyn Any>);

impl ContentHandle {
    /// Wrap a concrete content value.
    pub fn new<T: Any>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Borrow the content as a concrete type, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl std::fmt::Debug for ContentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ContentHandle(..)")
    }
}

/// Produces content handles for window ids.
///
/// Invoked exactly once per successful open; if `mount` fails the
/// window is not registered at all.
pub trait ContentProvider {
    /// Construct the content for the window `id`.
    fn mount(&mut self, id: &str) -> DesktopResult<ContentHandle>;
}
