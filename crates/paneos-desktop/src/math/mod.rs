//! Core geometry types for the desktop environment
//!
//! These types provide basic 2D math operations for positioning
//! and sizing windows.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{
    FrameStyle, CASCADE_ORIGIN, CASCADE_STEP, FRAME_STYLE, MIN_HEIGHT, MIN_WIDTH, PAD,
    TASKBAR_HEIGHT, Z_BASE,
};
pub use vec2::Vec2;
