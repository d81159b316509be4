use super::*;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let entries = move || state.get().start_menu;

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <nav
                id="start-menu"
                class="start-menu visible"
                role="menu"
                on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <For each=entries key=|entry| entry.id.clone() let:entry>
                    {{
                        let entry_id = store_value(entry.id.clone());
                        view! {
                            <button
                                id=entry.id.clone()
                                class=start_menu_item_class(&entry.action)
                                role="menuitem"
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    runtime.dispatch_action(DesktopAction::LaunchStartMenuEntry {
                                        entry_id: entry_id.get_value(),
                                    });
                                }
                            >
                                {entry.label.clone()}
                            </button>
                        }
                    }}
                </For>
            </nav>
        </Show>
    }
}
