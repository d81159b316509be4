//! Leptos shell for the retro desktop: window chrome, desktop icons, taskbar, start menu and the
//! weather window, all driven by [`desktop_core::reduce_desktop`].

pub mod components;
mod effect_executor;
mod host;
mod runtime_context;

pub use components::DesktopShell;
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
