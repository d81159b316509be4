use desktop_core::{IconId, PointerButton};

use super::*;
use crate::host::DESKTOP_SURFACE_DOM_ID;

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let icon_ids = move || {
        state
            .get()
            .icons
            .into_iter()
            .map(|icon| icon.id)
            .collect::<Vec<_>>()
    };

    view! {
        <div id=DESKTOP_SURFACE_DOM_ID class="desktop-icons">
            <For each=icon_ids key=|icon_id| icon_id.to_string() let:icon_id>
                <DesktopIconButton icon_id=icon_id />
            </For>
        </div>
    }
}

#[component]
fn DesktopIconButton(icon_id: IconId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(icon_id);
    let icon = Signal::derive(move || runtime.state.get().icon(&id.get_value()).cloned());

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        let button = PointerButton::from_dom(ev.button());
        if button == PointerButton::Primary {
            ev.prevent_default();
        }
        runtime.dispatch_action(DesktopAction::BeginIconDrag {
            icon_id: id.get_value(),
            button,
            pointer: pointer_from_pointer_event(&ev),
            surface: runtime.host.get_value().desktop_surface_rect(),
            rendered: runtime.host.get_value().current_target_rect(&ev),
        });
    };

    view! {
        <div
            class="icon"
            data-window=move || icon.get().map(|i| i.window_id.to_string()).unwrap_or_default()
            style=move || icon.get().map(|i| icon_style(i.rect)).unwrap_or_default()
            on:pointerdown=on_pointerdown
            on:dblclick=move |_| {
                runtime.dispatch_action(DesktopAction::ActivateIcon {
                    icon_id: id.get_value(),
                })
            }
        >
            <div class="icon-image" aria-hidden="true"></div>
            <span class="icon-label">
                {move || icon.get().map(|i| i.label).unwrap_or_default()}
            </span>
        </div>
    }
}
