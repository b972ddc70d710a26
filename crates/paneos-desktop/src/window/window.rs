//! The window entity

use crate::math::Rect;
use crate::types::WindowId;
use crate::window::content::ContentHandle;

/// Visual state of a window. The three states are mutually exclusive;
/// transitions between minimized and maximized pass through `Normal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// One simulated desktop panel
#[derive(Debug)]
pub struct Window {
    /// Stable identifier, unique among open windows
    pub id: WindowId,
    /// Display label, assigned at open time
    title: String,
    /// Current on-screen bounds. While maximized these equal the usable
    /// viewport; the pre-maximize geometry lives in `last_normal_bounds`.
    pub bounds: Rect,
    /// Current visual state
    pub state: WindowState,
    /// Stacking index assigned during restacking
    pub z_index: i32,
    /// Whether this is the single active window
    pub active: bool,
    /// Most recent non-maximized, non-minimized geometry, used to
    /// restore the window
    last_normal_bounds: Option<Rect>,
    /// Content handle, owned for the window's lifetime
    content: ContentHandle,
}

impl Window {
    /// Create a new window in the normal state.
    pub fn new(
        id: impl Into<WindowId>,
        title: impl Into<String>,
        bounds: Rect,
        content: ContentHandle,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            bounds,
            state: WindowState::Normal,
            z_index: 0,
            active: false,
            last_normal_bounds: None,
            content,
        }
    }

    /// Display label
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Borrow the content handle
    pub fn content(&self) -> &ContentHandle {
        &self.content
    }

    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }

    /// Snapshot the current bounds as the restore target.
    pub fn remember_bounds(&mut self) {
        self.last_normal_bounds = Some(self.bounds);
    }

    /// Seed the restore target directly (used when applying saved state).
    pub fn seed_remembered_bounds(&mut self, bounds: Rect) {
        self.last_normal_bounds = Some(bounds);
    }

    /// The bounds to restore to, falling back to the current bounds
    /// when nothing was remembered yet.
    pub fn remembered_bounds(&self) -> Rect {
        self.last_normal_bounds.unwrap_or(self.bounds)
    }

    /// Bounds to persist: minimized windows report their remembered
    /// geometry, never the live collapsed one.
    pub fn persistable_bounds(&self) -> Rect {
        match self.state {
            WindowState::Minimized => self.remembered_bounds(),
            _ => self.bounds,
        }
    }
}
