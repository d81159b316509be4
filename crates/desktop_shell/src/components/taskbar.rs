use desktop_widgets::{clock_label, CLOCK_REFRESH};

use super::*;

fn current_clock_label() -> String {
    clock_label(&chrono::Local::now())
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = create_rw_signal(current_clock_label());

    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(current_clock_label()), CLOCK_REFRESH)
    {
        on_cleanup(move || interval.clear());
    }

    let buttons = move || state.get().taskbar.buttons().to_vec();

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Desktop taskbar">
            <button
                class=move || {
                    if state.get().start_menu_open { "start-button active" } else { "start-button" }
                }
                aria-haspopup="menu"
                aria-controls="start-menu"
                aria-expanded=move || state.get().start_menu_open.to_string()
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.stop_propagation();
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                "Start"
            </button>
            <div id="taskbar-windows" class="taskbar-windows">
                <For each=buttons key=|button| button.window_id.to_string() let:button>
                    {{
                        let id = store_value(button.window_id.clone());
                        view! {
                            <button
                                class=move || {
                                    let inactive = state
                                        .get()
                                        .taskbar
                                        .button(&id.get_value())
                                        .map(|b| b.inactive)
                                        .unwrap_or(true);
                                    taskbar_button_class(inactive)
                                }
                                data-window-id=button.window_id.to_string()
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                        window_id: id.get_value(),
                                    })
                                }
                            >
                                {button.label.clone()}
                            </button>
                        }
                    }}
                </For>
            </div>
            <div id="taskbar-clock" class="taskbar-clock">{move || clock.get()}</div>
        </footer>
    }
}
