//! Drag gesture state machine
//!
//! One gesture at a time: press starts it, moves apply it, release
//! commits it, cancel abandons it. Events that arrive without an
//! active matching gesture are ignored by the callers checking
//! [`InputRouter::drag_state`].

use crate::math::{Size, Vec2};
use crate::types::WindowId;
use crate::window::WindowRegion;

/// Active drag operation
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a window by its title bar
    MoveWindow {
        window_id: WindowId,
        /// Pointer offset from the window's top-left corner at press time
        offset: Vec2,
    },
    /// Resizing a window from one of its eight handles
    ResizeWindow {
        window_id: WindowId,
        handle: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        start_mouse: Vec2,
    },
}

impl DragState {
    /// The window this gesture manipulates
    pub fn window_id(&self) -> &WindowId {
        match self {
            Self::MoveWindow { window_id, .. } => window_id,
            Self::ResizeWindow { window_id, .. } => window_id,
        }
    }
}

/// Router holding the active gesture, if any
#[derive(Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin moving a window.
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { window_id, offset });
    }

    /// Begin resizing a window from `handle`.
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        start_mouse: Vec2,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_pos,
            start_size,
            start_mouse,
        });
    }

    /// The active gesture, if any.
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// End the active gesture, returning it so the caller can commit.
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_lifecycle() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());
        assert!(router.end_drag().is_none());

        router.start_window_move("about".to_string(), Vec2::new(12.0, 6.0));
        assert!(router.is_dragging());
        assert_eq!(
            router.drag_state().unwrap().window_id(),
            &"about".to_string()
        );

        let ended = router.end_drag().unwrap();
        assert!(matches!(ended, DragState::MoveWindow { .. }));
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_new_gesture_replaces_old() {
        let mut router = InputRouter::new();
        router.start_window_move("about".to_string(), Vec2::ZERO);
        router.start_window_resize(
            "notes".to_string(),
            WindowRegion::ResizeSE,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(498.0, 398.0),
        );

        assert_eq!(
            router.drag_state().unwrap().window_id(),
            &"notes".to_string()
        );
    }
}
