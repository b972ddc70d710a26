//! Window creation configuration

use crate::math::{Size, Vec2};

/// Configuration for opening a window
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Display label, immutable after open
    pub title: String,
    /// Explicit position; `None` uses cascaded placement
    pub position: Option<Vec2>,
    /// Initial size
    pub size: Size,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            position: None,
            size: Size::new(520.0, 360.0),
        }
    }
}

impl WindowConfig {
    /// Config with the given title and default placement.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
