//! Desktop shell UI composition and interaction surfaces.

mod icons;
mod start_menu;
mod taskbar;
mod weather_panel;
mod window;

use desktop_core::{DesktopAction, Point, Rect, StartMenuAction, WindowId};
use leptos::*;

use self::{icons::DesktopIcons, start_menu::StartMenu, taskbar::Taskbar, window::DesktopWindow};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell and owns the document-level pointer listeners.
///
/// Move, release and cancel are registered once for the whole document and routed through the
/// runtime's single pointer session, whichever window or icon started it.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let session_live = move || runtime.pointer.get_untracked().is_active();

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if !session_live() {
            return;
        }
        runtime.dispatch_action(DesktopAction::PointerMove {
            pointer: pointer_from_pointer_event(&ev),
            bounds: runtime.host.get_value().pointer_bounds(),
        });
    });
    on_cleanup(move || move_listener.remove());

    let up_listener = window_event_listener(ev::pointerup, move |_| {
        if session_live() {
            runtime.dispatch_action(DesktopAction::PointerUp);
        }
    });
    on_cleanup(move || up_listener.remove());

    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        if session_live() {
            runtime.dispatch_action(DesktopAction::PointerCancel);
        }
    });
    on_cleanup(move || cancel_listener.remove());

    // Start button and menu stop propagation, so any click that reaches the window is outside.
    let outside_click_listener = window_event_listener(ev::click, move |_| {
        if state.get_untracked().start_menu_open {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let window_ids = move || {
        state
            .get()
            .registry
            .iter()
            .map(|win| win.id.clone())
            .collect::<Vec<_>>()
    };

    view! {
        <div id="desktop-shell-root" class="desktop">
            <DesktopIcons />
            <div class="desktop-window-layer">
                <For each=window_ids key=|window_id| window_id.to_string() let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </div>
            <StartMenu />
            <Taskbar />
        </div>
    }
}

/// Action for a pointer-down anywhere on a window, its chrome buttons included.
fn focus_window_action(window_id: WindowId) -> DesktopAction {
    DesktopAction::FocusWindow { window_id }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn rect_style(rect: Rect) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;",
        rect.x, rect.y, rect.w, rect.h
    )
}

fn window_style(rect: Rect, z_index: u64) -> String {
    format!("{}z-index:{};", rect_style(rect), z_index)
}

fn icon_style(rect: Rect) -> String {
    format!("left:{}px;top:{}px;", rect.x, rect.y)
}

fn window_class(active: bool) -> &'static str {
    if active {
        "window active"
    } else {
        "window"
    }
}

fn taskbar_button_class(inactive: bool) -> &'static str {
    if inactive {
        "taskbar-button inactive"
    } else {
        "taskbar-button"
    }
}

fn start_menu_item_class(action: &StartMenuAction) -> &'static str {
    match action {
        StartMenuAction::OpenWindow { .. } => "start-menu-item",
        StartMenuAction::ShutDown => "start-menu-item start-menu-shutdown",
    }
}

fn window_dom_id(window_id: &WindowId) -> String {
    window_id.to_string()
}
