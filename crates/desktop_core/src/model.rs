use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{focus::FocusController, registry::WindowRegistry, taskbar::TaskbarSync};

/// Minimum width a window can be resized to.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: i32 = 120;
/// Horizontal strip of a dragged window that must stay inside the viewport.
pub const MIN_VISIBLE_WIDTH: i32 = 100;
/// Vertical strip of a dragged window that must stay inside the viewport.
pub const MIN_VISIBLE_HEIGHT: i32 = 80;
/// Z-order value preceding the first activation.
pub const INITIAL_Z_INDEX: u64 = 10;
pub const DEFAULT_ICON_SIZE: i32 = 72;
pub const DEFAULT_ICON_ORIGIN: i32 = 10;
pub const DEFAULT_ICON_SPACING: i32 = 80;

/// Stable identifier of a declared window surface, e.g. `profile-window`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Creates a window identifier from trusted caller input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Stable identifier of a desktop icon.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(String);

impl IconId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Pixel coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// Axis-aligned pixel rectangle used for window geometry, icon footprints, the viewport and the
/// desktop surface box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn top_left(self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn with_top_left(self, top_left: Point) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

/// Display lifecycle of a window.
///
/// Replaces the visible/minimized flag pair, so "visible and minimized" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowLifecycle {
    Open,
    Minimized,
    /// Never opened, or explicitly closed.
    #[default]
    Closed,
}

impl WindowLifecycle {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub rect: Rect,
    pub z_index: u64,
    pub lifecycle: WindowLifecycle,
}

impl WindowRecord {
    /// Creates a closed window at `rect`.
    pub fn new(id: WindowId, title: impl Into<String>, rect: Rect) -> Self {
        Self {
            id,
            title: title.into(),
            rect,
            z_index: 0,
            lifecycle: WindowLifecycle::Closed,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.lifecycle.is_visible()
    }

    pub fn is_minimized(&self) -> bool {
        self.lifecycle == WindowLifecycle::Minimized
    }
}

/// Taskbar projection of one opened window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarButton {
    pub window_id: WindowId,
    /// Window title at the time the button was created.
    pub label: String,
    pub inactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub id: IconId,
    pub label: String,
    pub window_id: WindowId,
    /// Top-left corner relative to the desktop surface, plus the icon footprint.
    pub rect: Rect,
}

/// What a start-menu entry does when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StartMenuAction {
    OpenWindow {
        window: WindowId,
        #[serde(default)]
        refresh_weather: bool,
    },
    ShutDown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartMenuEntry {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub action: StartMenuAction,
}

/// Whole window-manager state owned by the shell and passed by reference into the reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopState {
    pub registry: WindowRegistry,
    pub taskbar: TaskbarSync,
    pub focus: FocusController,
    pub icons: Vec<DesktopIcon>,
    pub start_menu: Vec<StartMenuEntry>,
    pub start_menu_open: bool,
}

impl DesktopState {
    /// The active window: visible, most recently activated, and not shown as inactive on the
    /// taskbar.
    pub fn active_window_id(&self) -> Option<&WindowId> {
        let id = self.focus.active()?;
        let window = self.registry.get(id)?;
        let highlighted = self
            .taskbar
            .button(id)
            .map(|button| !button.inactive)
            .unwrap_or(true);
        (window.is_visible() && highlighted).then_some(id)
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.registry.get(window_id)
    }

    pub fn icon(&self, icon_id: &IconId) -> Option<&DesktopIcon> {
        self.icons.iter().find(|icon| icon.id == *icon_id)
    }

    pub(crate) fn icon_mut(&mut self, icon_id: &IconId) -> Option<&mut DesktopIcon> {
        self.icons.iter_mut().find(|icon| icon.id == *icon_id)
    }

    pub fn start_menu_entry(&self, entry_id: &str) -> Option<&StartMenuEntry> {
        self.start_menu.iter().find(|entry| entry.id == entry_id)
    }
}

/// Default desktop placement for the icon at `index` when the catalog gives none.
pub fn default_icon_position(index: usize) -> Point {
    Point::new(
        DEFAULT_ICON_ORIGIN,
        DEFAULT_ICON_ORIGIN + index as i32 * DEFAULT_ICON_SPACING,
    )
}
