//! Layout snapshot serialization
//!
//! The full registry (every open window, minimized or not) plus the
//! z-order sequence is serialized wholesale under one fixed key after
//! every structural or geometric change. Absent or malformed stored
//! data loads as an empty snapshot; it is never an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use paneos_store::KvStore;

use crate::error::{DesktopError, DesktopResult};
use crate::math::Rect;
use crate::types::WindowId;
use crate::window::{Window, WindowManager};

/// Fixed storage key for the layout snapshot
pub const LAYOUT_KEY: &str = "desktop.layout.v1";

/// Persisted geometry and visual state for one window
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedWindow {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    #[serde(rename = "isMax")]
    pub is_max: bool,
    #[serde(rename = "isMin")]
    pub is_min: bool,
}

impl PersistedWindow {
    /// The stored geometry as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    fn capture(window: &Window) -> Self {
        let bounds = window.persistable_bounds();
        Self {
            left: bounds.x,
            top: bounds.y,
            width: bounds.width,
            height: bounds.height,
            is_max: window.is_maximized(),
            is_min: window.is_minimized(),
        }
    }
}

/// Durable record of all windows' layout and z-order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Z-order sequence, front-most last
    pub order: Vec<WindowId>,
    /// Per-window layout, keyed by window id
    pub wins: BTreeMap<WindowId, PersistedWindow>,
}

impl Snapshot {
    /// Capture the current registry state.
    pub fn capture(manager: &WindowManager) -> Self {
        let order: Vec<WindowId> = manager.z_order().to_vec();
        let wins = order
            .iter()
            .filter_map(|id| {
                manager
                    .get(id)
                    .map(|w| (id.clone(), PersistedWindow::capture(w)))
            })
            .collect();
        Self { order, wins }
    }

    /// Look up the saved entry for a window id.
    pub fn window(&self, id: &str) -> Option<&PersistedWindow> {
        self.wins.get(id)
    }

    /// Read the snapshot from the store. Fails soft: absent or
    /// malformed data yields an empty snapshot with a warning.
    pub fn load(store: &dyn KvStore) -> Self {
        let bytes = match store.read(LAYOUT_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!(error = %e, "failed to read layout snapshot, starting empty");
                return Self::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "malformed layout snapshot, starting empty");
                Self::default()
            }
        }
    }

    /// Write the snapshot wholesale under the fixed key.
    pub fn save(&self, store: &dyn KvStore) -> DesktopResult<()> {
        let bytes = serde_json::to_vec(self)
            .map_err(|e| DesktopError::SerializationError(e.to_string()))?;
        store
            .write(LAYOUT_KEY, &bytes)
            .map_err(|e| DesktopError::PersistenceError(e.to_string()))
    }
}
