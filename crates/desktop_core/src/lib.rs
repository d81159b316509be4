//! Runtime-agnostic window manager for the retro desktop shell.
//!
//! The crate owns window lifecycle, z-order and focus, taskbar button projection, and pointer
//! drag/resize sessions as plain data. It does not depend on Leptos or browser APIs; the shell
//! crate renders [`DesktopState`] and feeds DOM events back in as [`DesktopAction`] values.

pub mod catalog;
pub mod focus;
pub mod launcher;
pub mod model;
pub mod pointer;
pub mod reducer;
pub mod registry;
pub mod taskbar;

pub use catalog::{CatalogError, ShellCatalog};
pub use focus::FocusController;
pub use model::*;
pub use pointer::{PointerBounds, PointerButton, PointerSession, PointerSessionManager};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use registry::{ToggleOutcome, WindowRegistry};
pub use taskbar::TaskbarSync;
