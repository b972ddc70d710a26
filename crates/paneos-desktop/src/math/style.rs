//! Layout constants for window chrome and desktop surface

use super::vec2::Vec2;

/// Window chrome metrics
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub resize_handle_size: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 28.0,
    resize_handle_size: 8.0,
    button_size: 14.0,
    button_spacing: 6.0,
    button_margin: 8.0,
};

/// Padding kept between windows and the viewport edges
pub const PAD: f32 = 8.0;

/// Height of the taskbar strip reserved at the bottom of the viewport
pub const TASKBAR_HEIGHT: f32 = 44.0;

/// Top-left corner of the first cascaded window
pub const CASCADE_ORIGIN: Vec2 = Vec2::new(140.0, 120.0);

/// Offset applied per already-open window when cascading new ones
pub const CASCADE_STEP: f32 = 40.0;

/// Minimum window width while in the normal state
pub const MIN_WIDTH: f32 = 200.0;

/// Minimum window height while in the normal state
pub const MIN_HEIGHT: f32 = 150.0;

/// Lowest stacking index assigned to windows; indices below this are
/// reserved for passive backdrop elements
pub const Z_BASE: i32 = 10;
