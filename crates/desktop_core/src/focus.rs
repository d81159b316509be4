//! Z-order assignment and the active-window singleton.

use crate::{
    model::{WindowId, INITIAL_Z_INDEX},
    reducer::ReducerError,
    registry::WindowRegistry,
    taskbar::TaskbarSync,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusController {
    z_counter: u64,
    active: Option<WindowId>,
}

impl Default for FocusController {
    fn default() -> Self {
        Self {
            z_counter: INITIAL_Z_INDEX,
            active: None,
        }
    }
}

impl FocusController {
    /// Last z-index handed out. Never decreases.
    pub fn z_counter(&self) -> u64 {
        self.z_counter
    }

    /// Most recently activated window, if it has not been hidden since.
    pub fn active(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    /// Raises `window_id` above every other window and makes it the active window.
    ///
    /// Returns the z-index assigned to the window.
    ///
    /// # Errors
    ///
    /// [`ReducerError::WindowNotFound`] for unknown ids and [`ReducerError::WindowNotVisible`] for
    /// windows that are closed or minimized.
    pub fn activate(
        &mut self,
        registry: &mut WindowRegistry,
        taskbar: &mut TaskbarSync,
        window_id: &WindowId,
    ) -> Result<u64, ReducerError> {
        let window = registry.get_mut(window_id)?;
        if !window.is_visible() {
            return Err(ReducerError::WindowNotVisible(window_id.clone()));
        }
        self.z_counter += 1;
        window.z_index = self.z_counter;
        self.active = Some(window_id.clone());
        taskbar.mark_active_button(window_id);
        Ok(self.z_counter)
    }

    /// Drops the active marker if it belongs to `window_id`.
    pub fn release(&mut self, window_id: &WindowId) -> bool {
        if self.active.as_ref() == Some(window_id) {
            self.active = None;
            return true;
        }
        false
    }
}
