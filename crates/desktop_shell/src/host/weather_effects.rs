use std::{cell::RefCell, rc::Rc};

use desktop_widgets::{render_forecast, ForecastResponse, WeatherCache, WeatherError, WeatherView};
use leptos::{logging, spawn_local, SignalSet};

use crate::runtime_context::DesktopRuntimeContext;

fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

/// Renders the cached forecast when it is still fresh, otherwise shows the loading status and
/// fetches a new one.
pub(super) fn load_weather(
    cache: Rc<RefCell<WeatherCache>>,
    runtime: DesktopRuntimeContext,
    force: bool,
) {
    let cached = cache.borrow().fresh(now_ms(), force).cloned();
    if let Some(response) = cached {
        runtime.weather.set(render_forecast(&response));
        return;
    }

    runtime.weather.set(WeatherView::loading());
    spawn_local(async move {
        match fetch_forecast().await {
            Ok(response) => {
                let view = render_forecast(&response);
                cache.borrow_mut().store(now_ms(), response);
                runtime.weather.set(view);
            }
            Err(err) => {
                logging::warn!("weather refresh failed: {err}");
                runtime.weather.set(WeatherView::fetch_failed());
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
async fn fetch_forecast() -> Result<ForecastResponse, WeatherError> {
    use desktop_widgets::{parse_forecast, FORECAST_URL};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window =
        web_sys::window().ok_or_else(|| WeatherError::Network("no browser window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(FORECAST_URL))
        .await
        .map_err(network_error)?;
    let response: web_sys::Response = response.dyn_into().map_err(network_error)?;
    if !response.ok() {
        return Err(WeatherError::Http(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    let raw = body
        .as_string()
        .ok_or_else(|| WeatherError::Decode("response body is not text".to_string()))?;
    parse_forecast(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_forecast() -> Result<ForecastResponse, WeatherError> {
    Err(WeatherError::Network(
        "weather fetch requires a browser host".to_string(),
    ))
}

#[cfg(target_arch = "wasm32")]
fn network_error(err: wasm_bindgen::JsValue) -> WeatherError {
    if let Some(text) = err.as_string() {
        return WeatherError::Network(text);
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &wasm_bindgen::JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return WeatherError::Network(text);
        }
    }
    WeatherError::Network(format!("{err:?}"))
}
