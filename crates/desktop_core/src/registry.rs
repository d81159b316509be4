//! Lifecycle bookkeeping for the declared window surfaces.
//!
//! The registry never creates or drops windows after construction; it only flips
//! [`WindowLifecycle`] on records declared up front, so geometry survives close/reopen.

use crate::{
    model::{WindowId, WindowLifecycle, WindowRecord},
    reducer::ReducerError,
};

/// Outcome of a taskbar-style toggle on a single window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The window was hidden or minimized and is now open.
    Restored,
    /// The window was open and is now minimized.
    Minimized,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
}

impl WindowRegistry {
    pub fn new(windows: Vec<WindowRecord>) -> Self {
        Self { windows }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter()
    }

    pub fn get(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == *window_id)
    }

    pub(crate) fn get_mut(&mut self, window_id: &WindowId) -> Result<&mut WindowRecord, ReducerError> {
        self.windows
            .iter_mut()
            .find(|w| w.id == *window_id)
            .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
    }

    /// Visible windows ordered bottom to top.
    pub fn visible_by_z_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> = self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    /// Shows `window_id`. Returns `true` when the lifecycle changed.
    pub fn open(&mut self, window_id: &WindowId) -> Result<bool, ReducerError> {
        Ok(set_lifecycle(self.get_mut(window_id)?, WindowLifecycle::Open))
    }

    /// Hides `window_id` as closed. Returns `true` when the lifecycle changed.
    pub fn close(&mut self, window_id: &WindowId) -> Result<bool, ReducerError> {
        Ok(set_lifecycle(self.get_mut(window_id)?, WindowLifecycle::Closed))
    }

    /// Hides an open window as minimized.
    ///
    /// Minimizing a window that is already minimized or closed leaves it untouched and returns
    /// `false`.
    pub fn minimize(&mut self, window_id: &WindowId) -> Result<bool, ReducerError> {
        let window = self.get_mut(window_id)?;
        if !window.is_visible() {
            return Ok(false);
        }
        Ok(set_lifecycle(window, WindowLifecycle::Minimized))
    }

    /// Opens a hidden or minimized window, minimizes an open one.
    pub fn restore_or_toggle(&mut self, window_id: &WindowId) -> Result<ToggleOutcome, ReducerError> {
        let window = self.get_mut(window_id)?;
        if window.is_visible() {
            window.lifecycle = WindowLifecycle::Minimized;
            Ok(ToggleOutcome::Minimized)
        } else {
            window.lifecycle = WindowLifecycle::Open;
            Ok(ToggleOutcome::Restored)
        }
    }
}

fn set_lifecycle(window: &mut WindowRecord, lifecycle: WindowLifecycle) -> bool {
    if window.lifecycle == lifecycle {
        return false;
    }
    window.lifecycle = lifecycle;
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Rect;

    fn registry() -> WindowRegistry {
        WindowRegistry::new(vec![
            WindowRecord::new("profile-window".into(), "Profile", Rect::new(100, 100, 400, 300)),
            WindowRecord::new("contact-window".into(), "Contact", Rect::new(160, 140, 360, 240)),
        ])
    }

    #[test]
    fn open_and_close_flip_lifecycle_without_touching_geometry() {
        let mut registry = registry();
        let id = WindowId::new("profile-window");

        assert!(registry.open(&id).unwrap());
        assert!(!registry.open(&id).unwrap());
        assert!(registry.close(&id).unwrap());

        let window = registry.get(&id).unwrap();
        assert_eq!(window.lifecycle, WindowLifecycle::Closed);
        assert_eq!(window.rect, Rect::new(100, 100, 400, 300));
    }

    #[test]
    fn unknown_window_is_not_found() {
        let mut registry = registry();
        let missing = WindowId::new("missing-window");

        assert_eq!(
            registry.open(&missing),
            Err(ReducerError::WindowNotFound(missing.clone()))
        );
        assert_eq!(
            registry.minimize(&missing),
            Err(ReducerError::WindowNotFound(missing))
        );
    }

    #[test]
    fn minimize_is_a_noop_for_hidden_windows() {
        let mut registry = registry();
        let id = WindowId::new("contact-window");

        assert!(!registry.minimize(&id).unwrap());
        assert_eq!(registry.get(&id).unwrap().lifecycle, WindowLifecycle::Closed);

        registry.open(&id).unwrap();
        assert!(registry.minimize(&id).unwrap());
        assert!(!registry.minimize(&id).unwrap());
        assert!(registry.get(&id).unwrap().is_minimized());
    }

    #[test]
    fn restore_or_toggle_alternates_between_open_and_minimized() {
        let mut registry = registry();
        let id = WindowId::new("profile-window");

        assert_eq!(registry.restore_or_toggle(&id).unwrap(), ToggleOutcome::Restored);
        assert_eq!(registry.restore_or_toggle(&id).unwrap(), ToggleOutcome::Minimized);
        assert_eq!(registry.restore_or_toggle(&id).unwrap(), ToggleOutcome::Restored);
        assert!(registry.get(&id).unwrap().is_visible());
    }

    #[test]
    fn visible_by_z_order_skips_hidden_windows() {
        let mut registry = registry();
        let profile = WindowId::new("profile-window");
        let contact = WindowId::new("contact-window");
        registry.open(&profile).unwrap();
        registry.open(&contact).unwrap();
        registry.get_mut(&profile).unwrap().z_index = 12;
        registry.get_mut(&contact).unwrap().z_index = 11;

        let order: Vec<&str> = registry
            .visible_by_z_order()
            .into_iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(order, vec!["contact-window", "profile-window"]);

        registry.minimize(&profile).unwrap();
        assert_eq!(registry.visible_by_z_order().len(), 1);
    }
}
