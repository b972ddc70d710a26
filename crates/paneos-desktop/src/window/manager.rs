//! Window registry, z-order, focus, and the minimize/maximize state
//! machine.
//!
//! The manager owns every open window and the z-order sequence
//! (front-most last, one entry per open window, minimized included).
//! Minimized windows keep their sequence slot for restore ordering but
//! are skipped when computing the front-most visible window.

use std::collections::BTreeMap;

use tracing::debug;

use crate::math::{Rect, Vec2, Z_BASE};
use crate::types::WindowId;
use crate::window::region::WindowRegion;
use crate::window::window::{Window, WindowState};

/// Registry of open windows plus stacking and focus state
#[derive(Debug, Default)]
pub struct WindowManager {
    /// id -> window
    windows: BTreeMap<WindowId, Window>,
    /// Stacking sequence, front-most last, no duplicates
    z_order: Vec<WindowId>,
    /// The single active window, if any
    focused: Option<WindowId>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open windows (minimized included)
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Whether `id` is currently open (minimized counts as open)
    pub fn is_open(&self, id: &str) -> bool {
        self.windows.contains_key(id)
    }

    /// Whether `id` is open and minimized
    pub fn is_minimized(&self, id: &str) -> bool {
        self.windows
            .get(id)
            .map(Window::is_minimized)
            .unwrap_or(false)
    }

    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Window> {
        self.windows.get_mut(id)
    }

    /// The currently focused window id, if any
    pub fn focused(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    /// The stacking sequence, back to front
    pub fn z_order(&self) -> &[WindowId] {
        &self.z_order
    }

    /// Windows in stacking order, back to front
    pub fn windows_by_z(&self) -> Vec<&Window> {
        self.z_order
            .iter()
            .filter_map(|id| self.windows.get(id))
            .collect()
    }

    /// Front-most window regardless of visual state
    pub fn front_most(&self) -> Option<&WindowId> {
        self.z_order.last()
    }

    /// Front-most window that is not minimized
    pub fn front_most_visible(&self) -> Option<WindowId> {
        self.z_order
            .iter()
            .rev()
            .find(|id| !self.is_minimized(id))
            .cloned()
    }

    /// Register a window and append it to the stacking sequence.
    /// The caller is expected to focus it afterwards.
    pub(crate) fn insert(&mut self, window: Window) {
        debug!(id = %window.id, "window registered");
        self.z_order.push(window.id.clone());
        self.windows.insert(window.id.clone(), window);
    }

    /// Remove a window, pruning it from the stacking sequence.
    /// Returns the window so the caller can release its content.
    pub(crate) fn remove(&mut self, id: &str) -> Option<Window> {
        let window = self.windows.remove(id)?;
        self.z_order.retain(|wid| wid != id);
        if self.focused.as_deref() == Some(id) {
            self.focused = None;
        }
        debug!(id = %id, "window removed");
        Some(window)
    }

    /// Bring `id` to the front, reassign stacking indices over the
    /// whole sequence, and mark it as the single active window.
    /// No-op on unknown ids.
    pub(crate) fn focus(&mut self, id: &str) {
        if !self.windows.contains_key(id) {
            return;
        }

        self.z_order.retain(|wid| wid != id);
        self.z_order.push(id.to_string());

        for (i, wid) in self.z_order.iter().enumerate() {
            if let Some(window) = self.windows.get_mut(wid) {
                window.z_index = Z_BASE + i as i32;
                window.active = wid == id;
            }
        }
        self.focused = Some(id.to_string());
        debug!(id = %id, "window focused");
    }

    /// Toggle `id` between normal and minimized.
    ///
    /// Entering minimized first passes through normal if the window was
    /// maximized, then snapshots the on-screen bounds so the collapsed
    /// live geometry can never overwrite the restore target.
    ///
    /// Returns the new state, or `None` for unknown ids.
    pub(crate) fn toggle_minimize(&mut self, id: &str) -> Option<WindowState> {
        let window = self.windows.get_mut(id)?;

        let state = match window.state {
            WindowState::Minimized => {
                window.state = WindowState::Normal;
                WindowState::Normal
            }
            WindowState::Maximized | WindowState::Normal => {
                if window.is_maximized() {
                    window.bounds = window.remembered_bounds();
                    window.state = WindowState::Normal;
                }
                window.remember_bounds();
                window.state = WindowState::Minimized;
                WindowState::Minimized
            }
        };
        debug!(id = %id, ?state, "minimize toggled");
        Some(state)
    }

    /// Toggle `id` between normal and maximized, expanding to `usable`
    /// (the viewport minus the taskbar strip) when maximizing.
    ///
    /// Returns the new state, or `None` for unknown ids.
    pub(crate) fn toggle_maximize(&mut self, id: &str, usable: Rect) -> Option<WindowState> {
        let window = self.windows.get_mut(id)?;

        let state = match window.state {
            WindowState::Maximized => {
                window.bounds = window.remembered_bounds();
                window.state = WindowState::Normal;
                WindowState::Normal
            }
            WindowState::Minimized | WindowState::Normal => {
                if window.is_minimized() {
                    window.state = WindowState::Normal;
                }
                window.remember_bounds();
                window.bounds = usable;
                window.state = WindowState::Maximized;
                WindowState::Maximized
            }
        };
        debug!(id = %id, ?state, "maximize toggled");
        Some(state)
    }

    /// Clear focus entirely, deactivating the previously active
    /// window. Used when every remaining window is minimized.
    pub(crate) fn clear_focus(&mut self) {
        if let Some(id) = self.focused.take() {
            if let Some(window) = self.windows.get_mut(&id) {
                window.active = false;
            }
            debug!(id = %id, "focus cleared");
        }
    }

    /// Drop a maximized window back to normal before a drag or resize
    /// gesture manipulates its bounds. Returns true if it transitioned.
    pub(crate) fn restore_if_maximized(&mut self, id: &str) -> bool {
        match self.windows.get_mut(id) {
            Some(window) if window.is_maximized() => {
                window.bounds = window.remembered_bounds();
                window.state = WindowState::Normal;
                true
            }
            _ => false,
        }
    }

    /// Hit-test a pointer position against visible windows, top-down.
    pub fn region_at(&self, p: Vec2) -> Option<(WindowId, WindowRegion)> {
        for id in self.z_order.iter().rev() {
            let Some(window) = self.windows.get(id) else {
                continue;
            };
            if window.is_minimized() {
                continue;
            }
            if let Some(region) = WindowRegion::at(window.bounds, p) {
                return Some((id.clone(), region));
            }
        }
        None
    }
}
