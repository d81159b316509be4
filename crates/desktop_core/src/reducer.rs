//! Reducer actions, side-effect intents, and transition logic for the desktop window manager.

use thiserror::Error;

use crate::{
    launcher,
    model::{DesktopState, IconId, Point, Rect, StartMenuAction, WindowId, WindowRecord},
    pointer::{GeometryUpdate, PointerBounds, PointerButton, PointerSessionManager},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open or restore a window by id (icons, boot, programmatic launches).
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Close a window and drop its taskbar button.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window, keeping its taskbar button.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Taskbar button click.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Pointer-down anywhere on a window.
    FocusWindow {
        /// Window under the pointer.
        window_id: WindowId,
    },
    /// Double-click on a desktop icon.
    ActivateIcon {
        /// Icon that was double-clicked.
        icon_id: IconId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Click on a start-menu entry.
    LaunchStartMenuEntry {
        /// Entry id from the shell catalog.
        entry_id: String,
    },
    /// Titlebar pointer-down.
    BeginWindowDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: Point,
    },
    /// Resize-handle pointer-down.
    BeginWindowResize {
        /// Window being resized.
        window_id: WindowId,
        /// Pointer position at resize start.
        pointer: Point,
    },
    /// Icon pointer-down.
    BeginIconDrag {
        /// Icon being dragged.
        icon_id: IconId,
        /// Button that pressed the pointer.
        button: PointerButton,
        /// Pointer position at drag start.
        pointer: Point,
        /// Desktop surface box in viewport coordinates.
        surface: Rect,
        /// The icon's rendered box in viewport coordinates, when the shell could measure it.
        rendered: Option<Rect>,
    },
    /// Document-level pointer move.
    PointerMove {
        /// Current pointer position.
        pointer: Point,
        /// Viewport and desktop surface geometry at the time of the move.
        bounds: PointerBounds,
    },
    /// Document-level pointer release.
    PointerUp,
    /// Browser-initiated pointer cancel; restores the geometry captured at session start.
    PointerCancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Toggle document-wide text selection while a pointer session is live.
    SetTextSelection {
        /// `true` to suppress selection, `false` to restore it.
        suppressed: bool,
    },
    /// Refresh the weather widget, honoring its cache unless `force` is set.
    LoadWeather {
        /// Bypass the cache.
        force: bool,
    },
    /// Leave the shell (close the tab, or navigate away).
    ShutDown,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference missing entities or conflict with live state.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
    /// The target icon id was not found in the current state.
    #[error("desktop icon `{0}` not found")]
    IconNotFound(IconId),
    /// The start-menu entry id was not found in the current state.
    #[error("start menu entry `{0}` not found")]
    StartMenuEntryNotFound(String),
    /// The window must be open before it can take focus or start a pointer session.
    #[error("window `{0}` is not visible")]
    WindowNotVisible(WindowId),
    /// A pointer session is already live.
    #[error("another pointer session is already active")]
    SessionBusy,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Every action either applies completely or returns an error with `state` and `pointer`
/// untouched.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a missing window, icon or start-menu entry,
/// targets a hidden window for a pointer session, or starts a session while another is live.
pub fn reduce_desktop(
    state: &mut DesktopState,
    pointer: &mut PointerSessionManager,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id } => {
            launcher::open_or_restore(state, &window_id)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            launcher::close_window(state, &window_id)?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            launcher::minimize_window(state, &window_id)?;
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            launcher::toggle(state, &window_id)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            launcher::focus_window(state, &window_id)?;
        }
        DesktopAction::ActivateIcon { icon_id } => {
            let window_id = state
                .icon(&icon_id)
                .map(|icon| icon.window_id.clone())
                .ok_or(ReducerError::IconNotFound(icon_id))?;
            launcher::open_or_restore(state, &window_id)?;
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::LaunchStartMenuEntry { entry_id } => {
            let action = state
                .start_menu_entry(&entry_id)
                .map(|entry| entry.action.clone())
                .ok_or(ReducerError::StartMenuEntryNotFound(entry_id))?;
            match action {
                StartMenuAction::OpenWindow {
                    window,
                    refresh_weather,
                } => {
                    launcher::open_or_restore(state, &window)?;
                    if refresh_weather {
                        effects.push(RuntimeEffect::LoadWeather { force: false });
                    }
                }
                StartMenuAction::ShutDown => effects.push(RuntimeEffect::ShutDown),
            }
            state.start_menu_open = false;
        }
        DesktopAction::BeginWindowDrag {
            window_id,
            pointer: at,
        } => {
            let window = visible_window(state, &window_id)?.clone();
            pointer.begin_window_drag(&window, at)?;
            launcher::focus_window(state, &window_id)?;
            effects.push(RuntimeEffect::SetTextSelection { suppressed: true });
        }
        DesktopAction::BeginWindowResize {
            window_id,
            pointer: at,
        } => {
            let window = visible_window(state, &window_id)?.clone();
            let was_active = pointer.is_active();
            pointer.begin_window_resize(&window, at)?;
            launcher::focus_window(state, &window_id)?;
            if !was_active {
                effects.push(RuntimeEffect::SetTextSelection { suppressed: true });
            }
        }
        DesktopAction::BeginIconDrag {
            icon_id,
            button,
            pointer: at,
            surface,
            rendered,
        } => {
            let icon = state
                .icon(&icon_id)
                .cloned()
                .ok_or(ReducerError::IconNotFound(icon_id))?;
            if pointer.begin_icon_drag(&icon, button, at, surface, rendered)? {
                effects.push(RuntimeEffect::SetTextSelection { suppressed: true });
            }
        }
        DesktopAction::PointerMove { pointer: at, bounds } => {
            if let Some(update) = pointer.pointer_moved(at, bounds) {
                apply_geometry(state, update)?;
            }
        }
        DesktopAction::PointerUp => {
            if pointer.end() {
                effects.push(RuntimeEffect::SetTextSelection { suppressed: false });
            }
        }
        DesktopAction::PointerCancel => {
            if let Some(update) = pointer.cancel() {
                apply_geometry(state, update)?;
                effects.push(RuntimeEffect::SetTextSelection { suppressed: false });
            }
        }
    }

    Ok(effects)
}

fn visible_window<'a>(
    state: &'a DesktopState,
    window_id: &WindowId,
) -> Result<&'a WindowRecord, ReducerError> {
    let window = state
        .registry
        .get(window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
    if !window.is_visible() {
        return Err(ReducerError::WindowNotVisible(window_id.clone()));
    }
    Ok(window)
}

fn apply_geometry(state: &mut DesktopState, update: GeometryUpdate) -> Result<(), ReducerError> {
    match update {
        GeometryUpdate::Window { window_id, rect } => {
            state.registry.get_mut(&window_id)?.rect = rect;
        }
        GeometryUpdate::Icon { icon_id, rect } => {
            state
                .icon_mut(&icon_id)
                .ok_or(ReducerError::IconNotFound(icon_id))?
                .rect = rect;
        }
    }
    Ok(())
}
