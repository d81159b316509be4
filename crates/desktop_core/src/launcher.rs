//! Open/restore/toggle/close entry points shared by icons, the start menu, taskbar buttons, and
//! window chrome. Each one keeps the registry, focus, and taskbar in step within one call.

use crate::{
    model::{DesktopState, WindowId},
    reducer::ReducerError,
    registry::ToggleOutcome,
};

/// Shows `window_id`, makes sure it has a taskbar button, and activates it.
///
/// # Errors
///
/// [`ReducerError::WindowNotFound`] when no window is declared under `window_id`; nothing changes
/// in that case.
pub fn open_or_restore(state: &mut DesktopState, window_id: &WindowId) -> Result<u64, ReducerError> {
    state.registry.open(window_id)?;
    if let Some(window) = state.registry.get(window_id) {
        state.taskbar.ensure_button(window);
    }
    state
        .focus
        .activate(&mut state.registry, &mut state.taskbar, window_id)
}

/// Taskbar-button behavior: restore a hidden or minimized window, minimize a visible one.
pub fn toggle(state: &mut DesktopState, window_id: &WindowId) -> Result<ToggleOutcome, ReducerError> {
    let outcome = state.registry.restore_or_toggle(window_id)?;
    match outcome {
        ToggleOutcome::Restored => {
            if let Some(window) = state.registry.get(window_id) {
                state.taskbar.ensure_button(window);
            }
            state
                .focus
                .activate(&mut state.registry, &mut state.taskbar, window_id)?;
        }
        ToggleOutcome::Minimized => {
            state.focus.release(window_id);
            state.taskbar.mark_inactive(window_id);
        }
    }
    Ok(outcome)
}

/// Minimize-button behavior: hide the window but keep its taskbar button, dimmed.
pub fn minimize_window(state: &mut DesktopState, window_id: &WindowId) -> Result<bool, ReducerError> {
    let changed = state.registry.minimize(window_id)?;
    if changed {
        state.focus.release(window_id);
        state.taskbar.mark_inactive(window_id);
    }
    Ok(changed)
}

/// Close-button behavior: hide the window and drop its taskbar button, whatever its state.
pub fn close_window(state: &mut DesktopState, window_id: &WindowId) -> Result<bool, ReducerError> {
    let changed = state.registry.close(window_id)?;
    let removed = state.taskbar.remove_button(window_id);
    state.focus.release(window_id);
    Ok(changed || removed)
}

/// Pointer-down anywhere on a window. Hidden windows are left alone.
pub fn focus_window(state: &mut DesktopState, window_id: &WindowId) -> Result<bool, ReducerError> {
    let visible = state
        .registry
        .get(window_id)
        .map(|w| w.is_visible())
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
    if !visible {
        return Ok(false);
    }
    state
        .focus
        .activate(&mut state.registry, &mut state.taskbar, window_id)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{Rect, WindowLifecycle, WindowRecord},
        registry::WindowRegistry,
    };

    fn state() -> DesktopState {
        DesktopState {
            registry: WindowRegistry::new(vec![
                WindowRecord::new("profile-window".into(), "Profile", Rect::new(100, 100, 400, 300)),
                WindowRecord::new("projects-window".into(), "Projects", Rect::new(140, 120, 400, 300)),
            ]),
            ..DesktopState::default()
        }
    }

    #[test]
    fn open_or_restore_shows_window_with_button_and_focus() {
        let mut state = state();
        let id = WindowId::new("profile-window");

        open_or_restore(&mut state, &id).unwrap();

        assert_eq!(state.active_window_id(), Some(&id));
        assert_eq!(state.taskbar.buttons().len(), 1);
        assert_eq!(state.taskbar.buttons()[0].label, "Profile");
        assert!(!state.taskbar.buttons()[0].inactive);
    }

    #[test]
    fn open_or_restore_unknown_window_changes_nothing() {
        let mut state = state();
        let before = state.clone();

        let result = open_or_restore(&mut state, &"missing".into());

        assert_eq!(result, Err(ReducerError::WindowNotFound("missing".into())));
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_minimizes_then_restores_in_place() {
        let mut state = state();
        let id = WindowId::new("profile-window");
        open_or_restore(&mut state, &id).unwrap();

        assert_eq!(toggle(&mut state, &id).unwrap(), ToggleOutcome::Minimized);
        assert_eq!(state.active_window_id(), None);
        assert!(state.taskbar.button(&id).unwrap().inactive);

        assert_eq!(toggle(&mut state, &id).unwrap(), ToggleOutcome::Restored);
        assert_eq!(state.active_window_id(), Some(&id));
        assert_eq!(state.window(&id).unwrap().rect, Rect::new(100, 100, 400, 300));
    }

    #[test]
    fn toggle_minimizes_a_visible_background_window_without_stealing_focus() {
        let mut state = state();
        let profile = WindowId::new("profile-window");
        let projects = WindowId::new("projects-window");
        open_or_restore(&mut state, &profile).unwrap();
        open_or_restore(&mut state, &projects).unwrap();

        assert_eq!(toggle(&mut state, &profile).unwrap(), ToggleOutcome::Minimized);

        assert_eq!(
            state.window(&profile).unwrap().lifecycle,
            WindowLifecycle::Minimized
        );
        assert!(state.taskbar.button(&profile).unwrap().inactive);
        assert_eq!(state.active_window_id(), Some(&projects));
        assert!(!state.taskbar.button(&projects).unwrap().inactive);
    }

    #[test]
    fn minimize_keeps_button_and_close_removes_it() {
        let mut state = state();
        let id = WindowId::new("projects-window");
        open_or_restore(&mut state, &id).unwrap();

        assert!(minimize_window(&mut state, &id).unwrap());
        assert!(!minimize_window(&mut state, &id).unwrap());
        assert!(state.taskbar.button(&id).is_some());

        assert!(close_window(&mut state, &id).unwrap());
        assert!(state.taskbar.button(&id).is_none());
        assert_eq!(state.window(&id).unwrap().lifecycle, WindowLifecycle::Closed);
    }

    #[test]
    fn focus_window_ignores_hidden_windows() {
        let mut state = state();
        let id = WindowId::new("profile-window");

        assert!(!focus_window(&mut state, &id).unwrap());
        assert_eq!(state.focus.active(), None);
    }
}
