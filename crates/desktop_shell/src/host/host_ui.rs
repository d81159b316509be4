#[cfg(target_arch = "wasm32")]
use leptos::logging;

use desktop_core::Rect;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
use super::DESKTOP_SURFACE_DOM_ID;
use super::TASKBAR_HEIGHT_PX;

const FALLBACK_VIEWPORT: Rect = Rect::new(0, 0, 1024, 768);

pub(super) fn set_text_selection_suppressed(suppressed: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let style = body.style();
        let result = if suppressed {
            style.set_property("user-select", "none")
        } else {
            style.remove_property("user-select").map(|_| ())
        };
        if let Err(err) = result {
            logging::warn!("toggling text selection failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = suppressed;
}

/// Closes the tab when the browser allows it, otherwise navigates to a blank page.
pub(super) fn shut_down() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.open_with_url_and_target("", "_self");
        let _ = window.close();
        if let Err(err) = window.location().set_href("about:blank") {
            logging::warn!("shutdown navigation failed: {err:?}");
        }
    }
}

pub(super) fn viewport_rect() -> Rect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.w);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.h);
            return Rect::new(0, 0, width, height);
        }
    }

    FALLBACK_VIEWPORT
}

#[cfg(target_arch = "wasm32")]
fn element_rect(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(
        rect.left() as i32,
        rect.top() as i32,
        rect.width() as i32,
        rect.height() as i32,
    )
}

pub(super) fn current_target_rect(ev: &web_sys::Event) -> Option<Rect> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
        Some(element_rect(&element))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ev;
        None
    }
}

pub(super) fn desktop_surface_rect() -> Rect {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(DESKTOP_SURFACE_DOM_ID));
        if let Some(element) = element {
            return element_rect(&element);
        }
    }

    surface_below_viewport(viewport_rect())
}

fn surface_below_viewport(viewport: Rect) -> Rect {
    Rect {
        h: (viewport.h - TASKBAR_HEIGHT_PX).max(0),
        ..viewport
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn surface_fallback_leaves_room_for_the_taskbar() {
        assert_eq!(
            surface_below_viewport(Rect::new(0, 0, 1280, 800)),
            Rect::new(0, 0, 1280, 762)
        );
        assert_eq!(surface_below_viewport(Rect::new(0, 0, 300, 20)).h, 0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_builds_use_fixed_viewport() {
        assert_eq!(viewport_rect(), Rect::new(0, 0, 1024, 768));
        assert_eq!(desktop_surface_rect(), Rect::new(0, 0, 1024, 730));
    }
}
