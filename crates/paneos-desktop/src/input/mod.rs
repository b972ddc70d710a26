//! Input interpretation module
//!
//! Translates raw pointer and key events into window-manager actions:
//! the drag/resize gesture state machine and the pure geometry rules
//! that clamp window bounds to the viewport.

mod geometry;
mod router;

pub use geometry::{calculate_resize, clamp_drag};
pub use router::{DragState, InputRouter};

use crate::types::WindowId;

/// Discrete key events scoped to the focused window's chrome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
}

/// Outcome of handling an input event
#[derive(Clone, Debug, PartialEq)]
pub enum InputResult {
    /// The core consumed the event
    Handled,
    /// The event belongs to a window's content; forward it with
    /// window-local coordinates
    Forward {
        window_id: WindowId,
        local_x: f32,
        local_y: f32,
    },
    /// Nothing to do
    Unhandled,
}
