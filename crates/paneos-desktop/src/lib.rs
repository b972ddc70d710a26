//! Desktop window-manager core for PaneOS
//!
//! This crate provides the desktop session's window machinery:
//! - Window lifecycle (open, close, focus, z-order)
//! - Chrome interactions (drag, resize, minimize, maximize)
//! - Pointer routing and hit testing
//! - Layout persistence across sessions
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`) and layout
//!   constants
//! - [`window`]: Window entities, the stacking registry, and hit
//!   regions
//! - [`input`]: Drag state machine and gesture geometry
//! - [`persistence`]: Layout serialization for storage
//!
//! All of it is pure state management driven through [`DesktopEngine`];
//! rendering and event capture live in whatever host embeds the crate.
//!
//! ## Example
//!
//! ```rust
//! use paneos_desktop::{
//!     ContentHandle, ContentProvider, DesktopEngine, DesktopResult, WindowConfig,
//! };
//! use paneos_store::MemoryStore;
//!
//! struct BlankContent;
//!
//! impl ContentProvider for BlankContent {
//!     fn mount(&mut self, _id: &str) -> DesktopResult<ContentHandle> {
//!         Ok(ContentHandle::new(()))
//!     }
//! }
//!
//! let mut engine = DesktopEngine::new(Box::new(MemoryStore::new()));
//! engine.init(1920.0, 1080.0);
//! engine.open_window("about", WindowConfig::titled("About"), &mut BlankContent)?;
//! assert!(engine.is_open("about"));
//! # Ok::<(), paneos_desktop::DesktopError>(())
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is plain Rust, testable
//!    without a display server
//! 2. **Injected Storage**: Persistence goes through the `KvStore`
//!    trait, so tests run against an in-memory backend
//! 3. **Single-Threaded**: Every operation runs to completion on the
//!    calling thread; there is no internal locking

pub mod error;
pub mod input;
pub mod math;
pub mod persistence;
pub mod types;
pub mod window;

mod engine;

// Re-export core types for convenience
pub use error::{DesktopError, DesktopResult};
pub use input::{DragState, InputResult, InputRouter, Key};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use persistence::{PersistedWindow, Snapshot, LAYOUT_KEY};
pub use types::WindowId;
pub use window::{
    ContentHandle, ContentProvider, Window, WindowConfig, WindowManager, WindowRegion, WindowState,
};

pub use engine::DesktopEngine;

/// Gap kept between window edges and the viewport
pub use math::PAD;

/// Height of the reserved taskbar strip at the bottom of the viewport
pub use math::TASKBAR_HEIGHT;
