//! Runtime-agnostic widgets hosted by the desktop shell: the Helsinki weather window and the
//! taskbar clock.

pub mod clock;
pub mod weather;

pub use clock::{clock_label, CLOCK_REFRESH};
pub use weather::{
    parse_forecast, render_forecast, weather_info, ForecastDay, ForecastResponse, WeatherCache,
    WeatherError, WeatherInfo, WeatherReport, WeatherView, FORECAST_URL, WEATHER_MAX_AGE_MS,
};
