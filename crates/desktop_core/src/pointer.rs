//! Pointer session state machine for window drags, window resizes, and icon drags.
//!
//! Exactly one session can be live. The shell registers a single document-level move/up listener
//! pair and routes every event through [`PointerSessionManager`], regardless of which window or
//! icon started the session.

use crate::{
    model::{
        DesktopIcon, IconId, Point, Rect, WindowId, WindowRecord, MIN_VISIBLE_HEIGHT,
        MIN_VISIBLE_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    },
    reducer::ReducerError,
};

/// Mouse button that pressed the pointer, mapped from DOM `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDrag {
    pub window_id: WindowId,
    /// Pointer position minus the window's top-left at pointer-down.
    pub grab_offset: Point,
    pub rect_start: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowResize {
    pub window_id: WindowId,
    pub pointer_start: Point,
    pub rect_start: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDrag {
    pub icon_id: IconId,
    /// Pointer position minus the icon's on-screen top-left at pointer-down.
    pub grab_offset: Point,
    pub rect_start: Rect,
    /// Size the icon occupies on screen; only `w` and `h` are meaningful.
    pub footprint: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PointerSession {
    #[default]
    Idle,
    DraggingWindow(WindowDrag),
    ResizingWindow(WindowResize),
    DraggingIcon(IconDrag),
}

/// Screen geometry sampled by the shell at the time of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerBounds {
    /// Browser viewport; windows are clamped against its width and height.
    pub viewport: Rect,
    /// Desktop surface box in viewport coordinates; icons are clamped inside it.
    pub surface: Rect,
}

/// Geometry change produced by a pointer move or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryUpdate {
    Window { window_id: WindowId, rect: Rect },
    Icon { icon_id: IconId, rect: Rect },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointerSessionManager {
    session: PointerSession,
}

impl PointerSessionManager {
    pub fn session(&self) -> &PointerSession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.session != PointerSession::Idle
    }

    /// Starts dragging `window` by its titlebar.
    ///
    /// # Errors
    ///
    /// [`ReducerError::SessionBusy`] while another session is live.
    pub fn begin_window_drag(
        &mut self,
        window: &WindowRecord,
        pointer: Point,
    ) -> Result<(), ReducerError> {
        self.ensure_idle()?;
        self.session = PointerSession::DraggingWindow(WindowDrag {
            window_id: window.id.clone(),
            grab_offset: pointer.offset_from(window.rect.top_left()),
            rect_start: window.rect,
        });
        Ok(())
    }

    /// Starts resizing `window` from its resize handle.
    ///
    /// A resize overrides a drag that the same pointer-down already started on the same window.
    ///
    /// # Errors
    ///
    /// [`ReducerError::SessionBusy`] while any other session is live.
    pub fn begin_window_resize(
        &mut self,
        window: &WindowRecord,
        pointer: Point,
    ) -> Result<(), ReducerError> {
        let overrides_drag = matches!(
            &self.session,
            PointerSession::DraggingWindow(drag) if drag.window_id == window.id
        );
        if !overrides_drag {
            self.ensure_idle()?;
        }
        self.session = PointerSession::ResizingWindow(WindowResize {
            window_id: window.id.clone(),
            pointer_start: pointer,
            rect_start: window.rect,
        });
        Ok(())
    }

    /// Starts dragging `icon`. Returns `false` without starting a session for any button other
    /// than the primary one.
    ///
    /// `rendered` is the icon's box in viewport coordinates as laid out by the browser. When it is
    /// known, the grab offset and the clamping footprint come from it; otherwise the icon's
    /// declared rect placed on `surface` is used.
    ///
    /// # Errors
    ///
    /// [`ReducerError::SessionBusy`] while another session is live.
    pub fn begin_icon_drag(
        &mut self,
        icon: &DesktopIcon,
        button: PointerButton,
        pointer: Point,
        surface: Rect,
        rendered: Option<Rect>,
    ) -> Result<bool, ReducerError> {
        if button != PointerButton::Primary {
            return Ok(false);
        }
        self.ensure_idle()?;
        let on_screen = rendered.unwrap_or_else(|| {
            icon.rect
                .with_top_left(Point::new(surface.x + icon.rect.x, surface.y + icon.rect.y))
        });
        self.session = PointerSession::DraggingIcon(IconDrag {
            icon_id: icon.id.clone(),
            grab_offset: pointer.offset_from(on_screen.top_left()),
            rect_start: icon.rect,
            footprint: on_screen,
        });
        Ok(true)
    }

    /// Computes the geometry the live session wants for `pointer`. `Idle` yields `None`.
    pub fn pointer_moved(&self, pointer: Point, bounds: PointerBounds) -> Option<GeometryUpdate> {
        match &self.session {
            PointerSession::Idle => None,
            PointerSession::DraggingWindow(drag) => {
                let top_left = clamp_window_position(pointer.offset_from(drag.grab_offset), bounds.viewport);
                Some(GeometryUpdate::Window {
                    window_id: drag.window_id.clone(),
                    rect: drag.rect_start.with_top_left(top_left),
                })
            }
            PointerSession::ResizingWindow(resize) => {
                let delta = pointer.offset_from(resize.pointer_start);
                Some(GeometryUpdate::Window {
                    window_id: resize.window_id.clone(),
                    rect: resize_rect(resize.rect_start, delta.x, delta.y),
                })
            }
            PointerSession::DraggingIcon(drag) => {
                let relative = pointer
                    .offset_from(bounds.surface.top_left())
                    .offset_from(drag.grab_offset);
                let top_left = clamp_icon_position(relative, drag.footprint, bounds.surface);
                Some(GeometryUpdate::Icon {
                    icon_id: drag.icon_id.clone(),
                    rect: drag.rect_start.with_top_left(top_left),
                })
            }
        }
    }

    /// Ends the live session. Returns `true` when a session was live.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        self.session = PointerSession::Idle;
        was_active
    }

    /// Aborts the live session and returns the geometry captured when it started.
    pub fn cancel(&mut self) -> Option<GeometryUpdate> {
        match std::mem::take(&mut self.session) {
            PointerSession::Idle => None,
            PointerSession::DraggingWindow(WindowDrag {
                window_id,
                rect_start,
                ..
            })
            | PointerSession::ResizingWindow(WindowResize {
                window_id,
                rect_start,
                ..
            }) => Some(GeometryUpdate::Window {
                window_id,
                rect: rect_start,
            }),
            PointerSession::DraggingIcon(IconDrag {
                icon_id, rect_start, ..
            }) => Some(GeometryUpdate::Icon {
                icon_id,
                rect: rect_start,
            }),
        }
    }

    fn ensure_idle(&self) -> Result<(), ReducerError> {
        if self.is_active() {
            return Err(ReducerError::SessionBusy);
        }
        Ok(())
    }
}

/// Keeps a dragged window's top-left inside the viewport, leaving at least
/// [`MIN_VISIBLE_WIDTH`] x [`MIN_VISIBLE_HEIGHT`] reachable.
pub fn clamp_window_position(top_left: Point, viewport: Rect) -> Point {
    Point::new(
        top_left.x.min(viewport.w - MIN_VISIBLE_WIDTH).max(0),
        top_left.y.min(viewport.h - MIN_VISIBLE_HEIGHT).max(0),
    )
}

/// Grows `start` by the pointer delta, floored at [`MIN_WINDOW_WIDTH`] x [`MIN_WINDOW_HEIGHT`].
pub fn resize_rect(start: Rect, dx: i32, dy: i32) -> Rect {
    Rect {
        w: start.w + dx,
        h: start.h + dy,
        ..start
    }
    .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

/// Keeps the whole icon footprint inside the desktop surface.
pub fn clamp_icon_position(top_left: Point, icon: Rect, surface: Rect) -> Point {
    Point::new(
        top_left.x.min(surface.w - icon.w).max(0),
        top_left.y.min(surface.h - icon.h).max(0),
    )
}
