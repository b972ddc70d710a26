//! Desktop engine coordinating windows, input, and persistence
//!
//! This is the main entry point for desktop operations. External
//! collaborators (taskbar, desktop icons) call the named operations
//! and read the query methods; an input adapter feeds raw pointer and
//! key events into the `handle_*` methods. Everything runs
//! synchronously to completion on the calling thread.

use tracing::{debug, warn};

use paneos_store::KvStore;

use crate::error::DesktopResult;
use crate::input::{calculate_resize, clamp_drag, DragState, InputResult, InputRouter, Key};
use crate::math::{
    Rect, Size, Vec2, CASCADE_ORIGIN, CASCADE_STEP, MIN_HEIGHT, MIN_WIDTH, PAD, TASKBAR_HEIGHT,
};
use crate::persistence::Snapshot;
use crate::types::WindowId;
use crate::window::{
    ContentProvider, Window, WindowConfig, WindowManager, WindowRegion, WindowState,
};

/// Desktop engine owning the window registry and interaction state
///
/// The storage backend is injected so tests can substitute an
/// in-memory store; the engine never reaches for a global one.
pub struct DesktopEngine {
    /// Window registry, z-order, and focus. Never handed out mutably;
    /// all mutation goes through the named operations so persistence
    /// and content release cannot be bypassed.
    windows: WindowManager,
    /// Active drag/resize gesture
    input: InputRouter,
    /// Durable layout store
    store: Box<dyn KvStore>,
    /// Snapshot loaded at construction, applied as windows (re)open
    saved: Snapshot,
    /// Viewport size in pixels
    screen_size: Size,
}

impl DesktopEngine {
    /// Create an engine over the given store, loading any previously
    /// persisted layout. Malformed stored data starts empty.
    pub fn new(store: Box<dyn KvStore>) -> Self {
        let saved = Snapshot::load(store.as_ref());
        Self {
            windows: WindowManager::new(),
            input: InputRouter::new(),
            store,
            saved,
            screen_size: Size::new(1920.0, 1080.0),
        }
    }

    /// Set the viewport size.
    pub fn init(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width, height);
    }

    /// Update the viewport size after a surface resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width, height);
    }

    /// Current viewport size.
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// The viewport minus the taskbar strip; what maximized windows
    /// expand to.
    pub fn usable_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.screen_size.width,
            self.screen_size.height - TASKBAR_HEIGHT,
        )
    }

    /// Whether `id` is currently open (minimized counts as open).
    pub fn is_open(&self, id: &str) -> bool {
        self.windows.is_open(id)
    }

    /// Whether `id` is open and minimized.
    pub fn is_minimized(&self, id: &str) -> bool {
        self.windows.is_minimized(id)
    }

    /// Borrow an open window.
    pub fn window(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// The stacking sequence, back to front.
    pub fn z_order(&self) -> &[WindowId] {
        self.windows.z_order()
    }

    /// Windows in stacking order, back to front.
    pub fn windows_by_z(&self) -> Vec<&Window> {
        self.windows.windows_by_z()
    }

    /// The currently focused window id, if any.
    pub fn focused(&self) -> Option<&WindowId> {
        self.windows.focused()
    }

    /// The front-most window that is not minimized.
    pub fn front_most_visible(&self) -> Option<WindowId> {
        self.windows.front_most_visible()
    }

    /// Open a window, or focus it if `id` is already open.
    ///
    /// Fresh windows are placed on the cascade (one step per already-
    /// open window, clamped to the viewport), content is mounted
    /// exactly once, and any saved layout entry for `id` overrides the
    /// defaults. Content construction failure propagates and leaves
    /// nothing registered.
    pub fn open_window(
        &mut self,
        id: &str,
        config: WindowConfig,
        provider: &mut dyn ContentProvider,
    ) -> DesktopResult<()> {
        if self.windows.is_open(id) {
            self.focus_window(id);
            return Ok(());
        }

        let content = provider.mount(id)?;

        // Undersized configs are brought up to the minimums, same as
        // saved geometry
        let size = Size::new(
            config.size.width.max(MIN_WIDTH),
            config.size.height.max(MIN_HEIGHT),
        );
        let depth = self.windows.len() as f32;
        let pos = config.position.unwrap_or_else(|| {
            Vec2::new(
                CASCADE_ORIGIN.x + CASCADE_STEP * depth,
                CASCADE_ORIGIN.y + CASCADE_STEP * depth,
            )
        });
        let pos = clamp_drag(pos, size, self.screen_size);

        let window = Window::new(id, config.title, Rect::from_pos_size(pos, size), content);
        self.windows.insert(window);
        self.apply_saved_bounds(id);
        self.windows.focus(id);
        debug!(id, "window opened");
        self.persist_soft();
        Ok(())
    }

    /// Close a window, releasing its content and pruning it from the
    /// stacking sequence. No-op on unknown ids. If the closed window
    /// was front-most, the next front-most visible window is focused.
    pub fn close_window(&mut self, id: &str) {
        if !self.windows.is_open(id) {
            return;
        }

        // Abandon a gesture aimed at the closing window
        if let Some(drag) = self.input.drag_state() {
            if drag.window_id().as_str() == id {
                self.input.end_drag();
            }
        }

        let was_front = self.windows.front_most().map(String::as_str) == Some(id);
        drop(self.windows.remove(id));
        debug!(id, "window closed");
        self.persist_soft();

        if was_front {
            if let Some(next) = self.windows.front_most_visible() {
                self.focus_window(&next);
            }
        }
    }

    /// Bring a window to the front and make it active. No-op on
    /// unknown ids.
    pub fn focus_window(&mut self, id: &str) {
        if !self.windows.is_open(id) {
            return;
        }
        self.windows.focus(id);
        self.persist_soft();
    }

    /// Toggle a window between normal and minimized. Minimizing passes
    /// focus to the next front-most visible window.
    pub fn toggle_minimize(&mut self, id: &str) {
        let Some(state) = self.windows.toggle_minimize(id) else {
            return;
        };
        match state {
            // Pass focus along; if every window is now minimized there
            // is no chrome left for keys to target
            WindowState::Minimized => match self.windows.front_most_visible() {
                Some(next) => self.windows.focus(&next),
                None => self.windows.clear_focus(),
            },
            _ => self.windows.focus(id),
        }
        self.persist_soft();
    }

    /// Toggle a window between normal and maximized.
    pub fn toggle_maximize(&mut self, id: &str) {
        let usable = self.usable_rect();
        if self.windows.toggle_maximize(id, usable).is_none() {
            return;
        }
        self.windows.focus(id);
        self.persist_soft();
    }

    /// Apply the saved layout entry for `id` to a just-opened window,
    /// clamping to size minimums and edge padding. No-op when the
    /// snapshot has no entry or the window is not open.
    pub fn apply_saved_bounds(&mut self, id: &str) {
        let Some(saved) = self.saved.window(id).copied() else {
            return;
        };
        let usable = self.usable_rect();
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };

        let mut rect = saved.rect();
        rect.width = rect.width.max(MIN_WIDTH);
        rect.height = rect.height.max(MIN_HEIGHT);
        rect.x = rect.x.max(PAD);
        rect.y = rect.y.max(PAD);

        if saved.is_max {
            window.bounds = usable;
            window.state = WindowState::Maximized;
        } else {
            window.bounds = rect;
            window.seed_remembered_bounds(rect);
            window.state = if saved.is_min {
                WindowState::Minimized
            } else {
                WindowState::Normal
            };
        }
    }

    /// Serialize the registry and write it to the store.
    pub fn persist(&mut self) -> DesktopResult<()> {
        Snapshot::capture(&self.windows).save(self.store.as_ref())
    }

    fn persist_soft(&mut self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist layout");
        }
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    /// Handle a pointer press. Only the primary button interacts with
    /// window chrome.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8) -> InputResult {
        if button != 0 {
            return InputResult::Unhandled;
        }

        let p = Vec2::new(x, y);
        let Some((id, region)) = self.windows.region_at(p) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => {
                self.close_window(&id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.toggle_minimize(&id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.toggle_maximize(&id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                self.focus_window(&id);
                // Dragging a maximized window drops it back to normal
                // before the gesture manipulates its bounds
                if self.windows.restore_if_maximized(&id) {
                    self.persist_soft();
                }
                if let Some(window) = self.windows.get(&id) {
                    self.input
                        .start_window_move(id.clone(), p - window.bounds.position());
                }
                InputResult::Handled
            }
            WindowRegion::Content => {
                self.focus_window(&id);
                match self.windows.get(&id) {
                    Some(window) => {
                        let local = p - window.bounds.position();
                        InputResult::Forward {
                            window_id: id.clone(),
                            local_x: local.x,
                            local_y: local.y,
                        }
                    }
                    None => InputResult::Handled,
                }
            }
            region if region.is_resize() => {
                self.focus_window(&id);
                if self.windows.restore_if_maximized(&id) {
                    self.persist_soft();
                }
                if let Some(window) = self.windows.get(&id) {
                    self.input.start_window_resize(
                        id.clone(),
                        region,
                        window.bounds.position(),
                        window.bounds.size(),
                        p,
                    );
                }
                InputResult::Handled
            }
            _ => InputResult::Unhandled,
        }
    }

    /// Handle a pointer move, applying live drag or resize geometry.
    /// A move without an active gesture is a no-op.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let p = Vec2::new(x, y);
        let Some(drag) = self.input.drag_state().cloned() else {
            return InputResult::Unhandled;
        };

        match drag {
            DragState::MoveWindow { window_id, offset } => {
                let screen = self.screen_size;
                if let Some(window) = self.windows.get_mut(&window_id) {
                    let pos = clamp_drag(p - offset, window.bounds.size(), screen);
                    window.bounds.x = pos.x;
                    window.bounds.y = pos.y;
                }
                InputResult::Handled
            }
            DragState::ResizeWindow {
                window_id,
                handle,
                start_pos,
                start_size,
                start_mouse,
            } => {
                let (pos, size) =
                    calculate_resize(handle, start_pos, start_size, p - start_mouse, self.screen_size);
                if let Some(window) = self.windows.get_mut(&window_id) {
                    window.bounds = Rect::from_pos_size(pos, size);
                }
                InputResult::Handled
            }
        }
    }

    /// Handle a pointer release: commit the gesture's final bounds as
    /// the window's restore target and persist.
    pub fn handle_pointer_up(&mut self) -> InputResult {
        let Some(drag) = self.input.end_drag() else {
            return InputResult::Unhandled;
        };

        if let Some(window) = self.windows.get_mut(drag.window_id()) {
            window.remember_bounds();
        }
        self.persist_soft();
        InputResult::Handled
    }

    /// Handle a pointer cancellation: the gesture ends without a
    /// commit. Geometry already applied live stays as-is.
    pub fn handle_pointer_cancel(&mut self) -> InputResult {
        if self.input.end_drag().is_some() {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle a key event scoped to the focused window's chrome.
    pub fn handle_key(&mut self, key: Key) -> InputResult {
        let Some(id) = self.windows.focused().cloned() else {
            return InputResult::Unhandled;
        };
        match key {
            Key::Escape => self.close_window(&id),
            Key::Enter => self.toggle_maximize(&id),
            Key::Space => self.toggle_minimize(&id),
        }
        InputResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesktopError;
    use crate::window::ContentHandle;
    use paneos_store::MemoryStore;

    struct CountingContent {
        mounts: usize,
    }

    impl CountingContent {
        fn new() -> Self {
            Self { mounts: 0 }
        }
    }

    impl ContentProvider for CountingContent {
        fn mount(&mut self, _id: &str) -> DesktopResult<ContentHandle> {
            self.mounts += 1;
            Ok(ContentHandle::new(()))
        }
    }

    struct FailingContent;

    impl ContentProvider for FailingContent {
        fn mount(&mut self, id: &str) -> DesktopResult<ContentHandle> {
            Err(DesktopError::ContentFailed {
                id: id.to_string(),
                reason: "boom".to_string(),
            })
        }
    }

    fn engine() -> DesktopEngine {
        let mut e = DesktopEngine::new(Box::new(MemoryStore::new()));
        e.init(1920.0, 1080.0);
        e
    }

    #[test]
    fn test_first_window_lands_on_cascade_origin() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        let w = e.window("about").unwrap();
        assert_eq!(w.bounds, Rect::new(140.0, 120.0, 520.0, 360.0));
        assert_eq!(w.state, WindowState::Normal);
    }

    #[test]
    fn test_cascade_staggers_by_stack_depth() {
        let mut e = engine();
        let mut content = CountingContent::new();
        e.open_window("a", WindowConfig::titled("A"), &mut content).unwrap();
        e.open_window("b", WindowConfig::titled("B"), &mut content).unwrap();
        e.open_window("c", WindowConfig::titled("C"), &mut content).unwrap();

        assert_eq!(e.window("b").unwrap().bounds.position(), Vec2::new(180.0, 160.0));
        assert_eq!(e.window("c").unwrap().bounds.position(), Vec2::new(220.0, 200.0));
    }

    #[test]
    fn test_open_clamps_undersized_config() {
        let mut e = engine();
        e.open_window(
            "tiny",
            WindowConfig {
                title: "Tiny".to_string(),
                position: None,
                size: Size::new(50.0, 20.0),
            },
            &mut CountingContent::new(),
        )
        .unwrap();

        let w = e.window("tiny").unwrap();
        assert_eq!(w.state, WindowState::Normal);
        assert_eq!(w.bounds.size(), Size::new(MIN_WIDTH, MIN_HEIGHT));
    }

    #[test]
    fn test_reopen_is_focus_and_mounts_once() {
        let mut e = engine();
        let mut content = CountingContent::new();
        e.open_window("about", WindowConfig::titled("About"), &mut content).unwrap();
        e.open_window("notes", WindowConfig::titled("Notes"), &mut content).unwrap();
        e.open_window("about", WindowConfig::titled("About"), &mut content).unwrap();

        assert_eq!(content.mounts, 2);
        assert_eq!(e.z_order(), ["notes", "about"]);
        assert_eq!(e.focused().map(String::as_str), Some("about"));
    }

    #[test]
    fn test_content_failure_registers_nothing() {
        let mut e = engine();
        let err = e
            .open_window("about", WindowConfig::titled("About"), &mut FailingContent)
            .unwrap_err();

        assert!(matches!(err, DesktopError::ContentFailed { .. }));
        assert!(!e.is_open("about"));
        assert!(e.z_order().is_empty());
    }

    #[test]
    fn test_close_focuses_next_front_most() {
        let mut e = engine();
        let mut content = CountingContent::new();
        e.open_window("a", WindowConfig::titled("A"), &mut content).unwrap();
        e.open_window("b", WindowConfig::titled("B"), &mut content).unwrap();

        e.close_window("b");
        assert!(!e.is_open("b"));
        assert_eq!(e.focused().map(String::as_str), Some("a"));

        // Closing the last window leaves nothing focused
        e.close_window("a");
        assert_eq!(e.focused(), None);

        // Close on an empty registry is a no-op
        e.close_window("a");
    }

    #[test]
    fn test_minimize_scenario() {
        let mut e = engine();
        let mut content = CountingContent::new();
        e.open_window("notes", WindowConfig::titled("Notes"), &mut content).unwrap();
        e.open_window("about", WindowConfig::titled("About"), &mut content).unwrap();

        e.toggle_minimize("about");
        assert!(e.is_open("about"));
        assert!(e.is_minimized("about"));
        assert_eq!(e.front_most_visible().as_deref(), Some("notes"));
        assert_eq!(e.focused().map(String::as_str), Some("notes"));

        // Restore focuses the window again
        e.toggle_minimize("about");
        assert!(!e.is_minimized("about"));
        assert_eq!(e.focused().map(String::as_str), Some("about"));
    }

    #[test]
    fn test_minimizing_last_visible_window_clears_focus() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        e.toggle_minimize("about");
        assert_eq!(e.focused(), None);
        assert!(!e.window("about").unwrap().active);

        // No chrome target left for keys
        assert_eq!(e.handle_key(Key::Escape), InputResult::Unhandled);
        assert!(e.is_open("about"));
    }

    #[test]
    fn test_maximize_restores_exact_bounds() {
        let mut e = engine();
        let mut content = CountingContent::new();
        e.open_window(
            "about",
            WindowConfig {
                title: "About".to_string(),
                position: Some(Vec2::new(200.0, 150.0)),
                size: Size::new(500.0, 300.0),
            },
            &mut content,
        )
        .unwrap();

        e.toggle_maximize("about");
        assert_eq!(
            e.window("about").unwrap().bounds,
            Rect::new(0.0, 0.0, 1920.0, 1036.0)
        );

        e.toggle_maximize("about");
        assert_eq!(
            e.window("about").unwrap().bounds,
            Rect::new(200.0, 150.0, 500.0, 300.0)
        );
    }

    #[test]
    fn test_drag_moves_and_commits() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        // Press in the middle of the title bar, clear of the buttons
        let r = e.handle_pointer_down(350.0, 135.0, 0);
        assert_eq!(r, InputResult::Handled);

        e.handle_pointer_move(1000.0, 500.0);
        let w = e.window("about").unwrap();
        assert_eq!(w.bounds.position(), Vec2::new(790.0, 485.0));

        assert_eq!(e.handle_pointer_up(), InputResult::Handled);
        assert_eq!(
            e.window("about").unwrap().remembered_bounds().position(),
            Vec2::new(790.0, 485.0)
        );
    }

    #[test]
    fn test_drag_clamps_to_viewport() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        e.handle_pointer_down(350.0, 135.0, 0);
        e.handle_pointer_move(-9000.0, -9000.0);

        let w = e.window("about").unwrap();
        assert_eq!(w.bounds.position(), Vec2::new(PAD, PAD));
    }

    #[test]
    fn test_secondary_button_does_not_drag() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        assert_eq!(e.handle_pointer_down(350.0, 135.0, 2), InputResult::Unhandled);
        assert_eq!(e.handle_pointer_move(1000.0, 500.0), InputResult::Unhandled);
    }

    #[test]
    fn test_resize_from_corner() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        // Bottom-right corner handle of the 520x360 window at (140,120)
        e.handle_pointer_down(658.0, 478.0, 0);
        e.handle_pointer_move(758.0, 528.0);

        let w = e.window("about").unwrap();
        assert_eq!(w.bounds.size(), Size::new(620.0, 410.0));
        assert_eq!(w.bounds.position(), Vec2::new(140.0, 120.0));

        e.handle_pointer_up();
        assert_eq!(
            e.window("about").unwrap().remembered_bounds().size(),
            Size::new(620.0, 410.0)
        );
    }

    #[test]
    fn test_cancel_ends_gesture_without_commit() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        e.handle_pointer_down(350.0, 135.0, 0);
        e.handle_pointer_move(1000.0, 500.0);
        assert_eq!(e.handle_pointer_cancel(), InputResult::Handled);

        // Live geometry stays, but nothing was committed as the
        // restore target
        let w = e.window("about").unwrap();
        assert_eq!(w.bounds.position(), Vec2::new(790.0, 485.0));
        assert_eq!(
            w.remembered_bounds().position(),
            Vec2::new(790.0, 485.0) // falls back to live bounds, none remembered
        );

        // Further moves are ignored
        assert_eq!(e.handle_pointer_move(1200.0, 600.0), InputResult::Unhandled);
        assert_eq!(e.handle_pointer_up(), InputResult::Unhandled);
    }

    #[test]
    fn test_drag_on_maximized_restores_first() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        e.toggle_maximize("about");
        e.handle_pointer_down(960.0, 15.0, 0);

        let w = e.window("about").unwrap();
        assert_eq!(w.state, WindowState::Normal);
        assert_eq!(w.bounds.size(), Size::new(520.0, 360.0));
    }

    #[test]
    fn test_resize_on_maximized_restores_first() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        e.toggle_maximize("about");
        // Bottom-right corner of the maximized surface
        e.handle_pointer_down(1918.0, 1034.0, 0);

        let w = e.window("about").unwrap();
        assert_eq!(w.state, WindowState::Normal);
        assert_eq!(w.bounds, Rect::new(140.0, 120.0, 520.0, 360.0));

        // The gesture resizes from the restored geometry
        e.handle_pointer_move(1938.0, 1044.0);
        assert_eq!(e.window("about").unwrap().bounds.size(), Size::new(540.0, 370.0));
    }

    #[test]
    fn test_content_press_forwards_local_coords() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        let r = e.handle_pointer_down(340.0, 320.0, 0);
        assert_eq!(
            r,
            InputResult::Forward {
                window_id: "about".to_string(),
                local_x: 200.0,
                local_y: 200.0,
            }
        );
        // A content press focuses but starts no gesture
        assert_eq!(e.handle_pointer_move(400.0, 400.0), InputResult::Unhandled);
    }

    #[test]
    fn test_close_button_closes() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        // First button in the title bar at (140,120)
        let r = e.handle_pointer_down(150.0, 134.0, 0);
        assert_eq!(r, InputResult::Handled);
        assert!(!e.is_open("about"));
    }

    #[test]
    fn test_escape_closes_focused_window() {
        let mut e = engine();
        let mut content = CountingContent::new();
        e.open_window("a", WindowConfig::titled("A"), &mut content).unwrap();
        e.open_window("b", WindowConfig::titled("B"), &mut content).unwrap();

        assert_eq!(e.handle_key(Key::Escape), InputResult::Handled);
        assert!(!e.is_open("b"));
        assert!(e.is_open("a"));

        e.close_window("a");
        assert_eq!(e.handle_key(Key::Escape), InputResult::Unhandled);
    }

    #[test]
    fn test_enter_and_space_toggle_chrome_states() {
        let mut e = engine();
        e.open_window("about", WindowConfig::titled("About"), &mut CountingContent::new())
            .unwrap();

        e.handle_key(Key::Enter);
        assert!(e.window("about").unwrap().is_maximized());
        e.handle_key(Key::Enter);
        assert!(!e.window("about").unwrap().is_maximized());

        e.handle_key(Key::Space);
        assert!(e.is_minimized("about"));
    }

    #[test]
    fn test_unknown_id_operations_are_noops() {
        let mut e = engine();
        e.focus_window("ghost");
        e.close_window("ghost");
        e.toggle_minimize("ghost");
        e.toggle_maximize("ghost");
        e.apply_saved_bounds("ghost");
        assert!(!e.is_open("ghost"));
        assert!(!e.is_minimized("ghost"));
    }
}
