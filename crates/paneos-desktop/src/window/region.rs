//! Window region hit testing
//!
//! Maps a pointer position inside a window's rectangle to the chrome
//! region it lands on. Resize bands hug the window edges, the three
//! control buttons sit at the left of the title bar (close, minimize,
//! maximize, in that order), and everything below the title bar is
//! content.

use crate::math::{Rect, Vec2, FRAME_STYLE};

/// A region of a window that can receive pointer input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    TitleBar,
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    Content,
    ResizeN,
    ResizeS,
    ResizeE,
    ResizeW,
    ResizeNE,
    ResizeNW,
    ResizeSE,
    ResizeSW,
}

impl WindowRegion {
    /// Whether this region is one of the eight resize handles
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            Self::ResizeN
                | Self::ResizeS
                | Self::ResizeE
                | Self::ResizeW
                | Self::ResizeNE
                | Self::ResizeNW
                | Self::ResizeSE
                | Self::ResizeSW
        )
    }

    /// Hit-test a point against a window rectangle.
    ///
    /// Returns `None` when the point is outside the rectangle.
    pub fn at(rect: Rect, p: Vec2) -> Option<WindowRegion> {
        if !rect.contains(p) {
            return None;
        }

        // Resize bands win over everything else at the edges.
        let handle = FRAME_STYLE.resize_handle_size;
        let near_w = p.x < rect.x + handle;
        let near_e = p.x >= rect.right() - handle;
        let near_n = p.y < rect.y + handle;
        let near_s = p.y >= rect.bottom() - handle;

        match (near_n, near_s, near_e, near_w) {
            (true, _, true, _) => return Some(Self::ResizeNE),
            (true, _, _, true) => return Some(Self::ResizeNW),
            (_, true, true, _) => return Some(Self::ResizeSE),
            (_, true, _, true) => return Some(Self::ResizeSW),
            (true, _, _, _) => return Some(Self::ResizeN),
            (_, true, _, _) => return Some(Self::ResizeS),
            (_, _, true, _) => return Some(Self::ResizeE),
            (_, _, _, true) => return Some(Self::ResizeW),
            _ => {}
        }

        if p.y < rect.y + FRAME_STYLE.title_bar_height {
            if let Some(button) = Self::button_at(rect, p) {
                return Some(button);
            }
            return Some(Self::TitleBar);
        }

        Some(Self::Content)
    }

    /// Which control button, if any, sits under the point.
    fn button_at(rect: Rect, p: Vec2) -> Option<WindowRegion> {
        let size = FRAME_STYLE.button_size;
        let top = rect.y + (FRAME_STYLE.title_bar_height - size) * 0.5;
        let buttons = [Self::CloseButton, Self::MinimizeButton, Self::MaximizeButton];

        for (i, button) in buttons.into_iter().enumerate() {
            let left = rect.x
                + FRAME_STYLE.button_margin
                + i as f32 * (size + FRAME_STYLE.button_spacing);
            if Rect::new(left, top, size, size).contains(p) {
                return Some(button);
            }
        }
        None
    }
}
