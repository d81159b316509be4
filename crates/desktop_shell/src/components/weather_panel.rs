use desktop_core::RuntimeEffect;
use desktop_widgets::WeatherView;

use super::*;

#[component]
pub(super) fn WeatherPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let weather = runtime.weather;

    let refresh = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.enqueue_effect(RuntimeEffect::LoadWeather { force: true });
    };

    view! {
        <div class="weather-panel">
            {move || match weather.get() {
                WeatherView::Status { message, note } => {
                    view! {
                        <div class="weather-current">
                            <span id="weather-emoji" class="weather-emoji"></span>
                            <span id="weather-condition" class="weather-condition">{message}</span>
                        </div>
                        <p id="weather-note" class="weather-note">{note}</p>
                    }
                        .into_view()
                }
                WeatherView::Report(report) => {
                    view! {
                        <div class="weather-current">
                            <span id="weather-emoji" class="weather-emoji">{report.emoji}</span>
                            <span id="weather-temp" class="weather-temp">{report.temperature}</span>
                            <span id="weather-condition" class="weather-condition">
                                {report.condition}
                            </span>
                        </div>
                        <p id="weather-meta" class="weather-meta">{report.meta}</p>
                        <div id="weather-forecast" class="weather-forecast">
                            {report
                                .forecast
                                .into_iter()
                                .map(|day| {
                                    view! {
                                        <div class="forecast-item">
                                            <div class="forecast-day">{day.day_label}</div>
                                            <div class="forecast-temps">{day.temps}</div>
                                            <div class="forecast-note">{day.note}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <p id="weather-note" class="weather-note">{report.note}</p>
                    }
                        .into_view()
                }
            }}
            <button class="weather-refresh" on:click=refresh>
                "Refresh"
            </button>
        </div>
    }
}
