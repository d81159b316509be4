use super::*;
use crate::components::weather_panel::WeatherPanel;

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let dom_id = window_dom_id(&window_id);
    let id = store_value(window_id.clone());

    let window = Signal::derive(move || runtime.state.get().window(&id.get_value()).cloned());
    let visible = move || window.get().map(|w| w.is_visible()).unwrap_or(false);
    let active = move || runtime.state.get().active_window_id() == Some(&id.get_value());

    let focus = move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(focus_window_action(id.get_value()));
    };
    let begin_drag = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginWindowDrag {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginWindowResize {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        });
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        });
    };
    // Chrome buttons still raise the window but must not reach the titlebar drag.
    let hold_pointer = move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(focus_window_action(id.get_value()));
    };

    view! {
        <Show when=visible fallback=|| ()>
            <section
                id=dom_id.clone()
                class=move || window_class(active())
                style=move || {
                    window
                        .get()
                        .map(|w| window_style(w.rect, w.z_index))
                        .unwrap_or_default()
                }
                on:pointerdown=focus
                role="dialog"
                aria-label=move || window.get().map(|w| w.title).unwrap_or_default()
            >
                <header class="window-titlebar" on:pointerdown=begin_drag>
                    <span class="window-title">
                        {move || window.get().map(|w| w.title).unwrap_or_default()}
                    </span>
                    <div class="window-controls">
                        <button
                            class="btn-minimize"
                            aria-label="Minimize window"
                            on:pointerdown=hold_pointer
                            on:click=minimize
                        >
                            "_"
                        </button>
                        <button
                            class="btn-close"
                            aria-label="Close window"
                            on:pointerdown=hold_pointer
                            on:click=close
                        >
                            "×"
                        </button>
                    </div>
                </header>
                <div class="window-body">
                    <WindowBody window_id=id.get_value() />
                </div>
                <div class="window-resizer" aria-hidden="true" on:pointerdown=begin_resize />
            </section>
        </Show>
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    match window_id.as_str() {
        "weather-window" => view! { <WeatherPanel /> }.into_view(),
        other => view! { <p class="window-text">{window_blurb(other)}</p> }.into_view(),
    }
}

fn window_blurb(window_id: &str) -> &'static str {
    match window_id {
        "profile-window" => "Hi! This little desktop is my corner of the web.",
        "projects-window" => "Things I have built and things I am still building.",
        "contact-window" => "Say hello by email or find me on the usual networks.",
        _ => "",
    }
}
