//! Taskbar button projection of window state.
//!
//! Buttons are keyed by [`WindowId`] and never own window state. Every component that changes a
//! window's visibility updates the matching button in the same transition.

use crate::model::{TaskbarButton, WindowId, WindowRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskbarSync {
    buttons: Vec<TaskbarButton>,
}

impl TaskbarSync {
    /// Buttons in creation order.
    pub fn buttons(&self) -> &[TaskbarButton] {
        &self.buttons
    }

    pub fn button(&self, window_id: &WindowId) -> Option<&TaskbarButton> {
        self.buttons.iter().find(|b| b.window_id == *window_id)
    }

    pub fn window_ids(&self) -> impl Iterator<Item = &WindowId> {
        self.buttons.iter().map(|b| &b.window_id)
    }

    /// Creates a button for `window` unless one exists. Returns `true` when a button was added.
    pub fn ensure_button(&mut self, window: &WindowRecord) -> bool {
        if self.button(&window.id).is_some() {
            return false;
        }
        self.buttons.push(TaskbarButton {
            window_id: window.id.clone(),
            label: if window.title.is_empty() {
                "Window".to_string()
            } else {
                window.title.clone()
            },
            inactive: false,
        });
        true
    }

    /// Highlights the button of `window_id` and dims every other one.
    ///
    /// Leaves all buttons untouched when `window_id` has no button.
    pub fn mark_active_button(&mut self, window_id: &WindowId) -> bool {
        if self.button(window_id).is_none() {
            return false;
        }
        for button in &mut self.buttons {
            button.inactive = button.window_id != *window_id;
        }
        true
    }

    pub fn mark_inactive(&mut self, window_id: &WindowId) -> bool {
        match self.buttons.iter_mut().find(|b| b.window_id == *window_id) {
            Some(button) => {
                button.inactive = true;
                true
            }
            None => false,
        }
    }

    /// Removes the button of `window_id`. Returns `true` when a button was removed.
    pub fn remove_button(&mut self, window_id: &WindowId) -> bool {
        let before = self.buttons.len();
        self.buttons.retain(|b| b.window_id != *window_id);
        self.buttons.len() != before
    }
}
