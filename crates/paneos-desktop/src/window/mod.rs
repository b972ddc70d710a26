//! Window management module
//!
//! Provides window lifecycle, focus management, the minimize/maximize
//! state machine, and hit testing.

mod config;
mod content;
mod manager;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use config::WindowConfig;
pub use content::{ContentHandle, ContentProvider};
pub use manager::WindowManager;
pub use region::WindowRegion;
pub use window::{Window, WindowState};
