//! Host-side helpers for executing reducer effects and querying browser geometry.
//!
//! Browser calls are gated on `wasm32`; native builds fall back to fixed geometry so the shell
//! compiles and its pure helpers test off-browser.

mod host_ui;
mod weather_effects;

use std::{cell::RefCell, rc::Rc};

use desktop_core::{PointerBounds, Rect, RuntimeEffect};
use desktop_widgets::WeatherCache;

use crate::runtime_context::DesktopRuntimeContext;

/// DOM id of the element icons are positioned in.
pub(crate) const DESKTOP_SURFACE_DOM_ID: &str = "desktop-surface";
pub(crate) const TASKBAR_HEIGHT_PX: i32 = 38;

#[derive(Clone, Default)]
/// Host state that outlives individual effects.
pub struct DesktopHostContext {
    weather_cache: Rc<RefCell<WeatherCache>>,
}

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::SetTextSelection { suppressed } => {
                host_ui::set_text_selection_suppressed(suppressed)
            }
            RuntimeEffect::LoadWeather { force } => {
                weather_effects::load_weather(self.weather_cache.clone(), runtime, force)
            }
            RuntimeEffect::ShutDown => host_ui::shut_down(),
        }
    }

    /// Browser viewport, used to clamp dragged windows.
    pub fn viewport_rect(&self) -> Rect {
        host_ui::viewport_rect()
    }

    /// Desktop surface box in viewport coordinates, used to clamp dragged icons.
    pub fn desktop_surface_rect(&self) -> Rect {
        host_ui::desktop_surface_rect()
    }

    /// Box of the element an event listener is attached to, in viewport coordinates.
    pub fn current_target_rect(&self, ev: &web_sys::Event) -> Option<Rect> {
        host_ui::current_target_rect(ev)
    }

    pub fn pointer_bounds(&self) -> PointerBounds {
        PointerBounds {
            viewport: self.viewport_rect(),
            surface: self.desktop_surface_rect(),
        }
    }
}
