//! Helsinki weather window: Open-Meteo response model, WMO code lookup, response cache, and the
//! text the window renders.
//!
//! Fetching is left to the shell host; everything here is pure so it runs in native tests.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Open-Meteo forecast for Helsinki: current conditions plus a three-day daily summary.
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast?latitude=60.1699&longitude=24.9384&current_weather=true&daily=temperature_2m_max,temperature_2m_min,weathercode&forecast_days=3&timezone=auto";

/// Cached responses younger than this are re-rendered without a network round trip.
pub const WEATHER_MAX_AGE_MS: u64 = 10 * 60 * 1000;

const IDLE_MESSAGE: &str = "Weather not loaded yet.";
const IDLE_NOTE: &str = "Press Refresh to fetch the latest forecast.";
const LOADING_MESSAGE: &str = "Loading Helsinki weather...";
const FETCH_FAILED_MESSAGE: &str = "Could not fetch weather.";
const FETCH_FAILED_NOTE: &str = "Open-Meteo request failed; retry in a bit.";
const MALFORMED_MESSAGE: &str = "Unable to load weather data.";
const MALFORMED_NOTE: &str = "Check your connection and try again.";
const REPORT_NOTE: &str = "Live Helsinki weather via Open-Meteo.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeatherError {
    #[error("weather request failed with HTTP {0}")]
    Http(u16),
    #[error("weather request failed: {0}")]
    Network(String),
    #[error("weather payload is not valid JSON: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherInfo {
    pub text: &'static str,
    pub emoji: &'static str,
}

impl WeatherInfo {
    const fn new(text: &'static str, emoji: &'static str) -> Self {
        Self { text, emoji }
    }
}

/// Maps a WMO weather interpretation code to display text. Unknown or missing codes fall back to
/// a generic "Weather" label.
pub fn weather_info(code: Option<i64>) -> WeatherInfo {
    match code {
        Some(0) => WeatherInfo::new("Clear sky", "☀️"),
        Some(1) => WeatherInfo::new("Mainly clear", "🌤️"),
        Some(2) => WeatherInfo::new("Partly cloudy", "⛅"),
        Some(3) => WeatherInfo::new("Overcast", "☁️"),
        Some(45 | 48) => WeatherInfo::new("Fog", "🌫️"),
        Some(51) => WeatherInfo::new("Light drizzle", "🌦️"),
        Some(53) => WeatherInfo::new("Drizzle", "🌦️"),
        Some(55) => WeatherInfo::new("Heavy drizzle", "🌧️"),
        Some(56) => WeatherInfo::new("Light freezing drizzle", "🌧️"),
        Some(57) => WeatherInfo::new("Freezing drizzle", "🌧️"),
        Some(61) => WeatherInfo::new("Light rain", "🌧️"),
        Some(63) => WeatherInfo::new("Rain", "🌧️"),
        Some(65) => WeatherInfo::new("Heavy rain", "🌧️"),
        Some(66) => WeatherInfo::new("Light freezing rain", "🌧️"),
        Some(67) => WeatherInfo::new("Freezing rain", "🌧️"),
        Some(71) => WeatherInfo::new("Light snow", "🌨️"),
        Some(73) => WeatherInfo::new("Snow", "🌨️"),
        Some(75) => WeatherInfo::new("Heavy snow", "❄️"),
        Some(77) => WeatherInfo::new("Snow grains", "❄️"),
        Some(80) => WeatherInfo::new("Light rain showers", "🌦️"),
        Some(81) => WeatherInfo::new("Rain showers", "🌧️"),
        Some(82) => WeatherInfo::new("Violent rain showers", "⛈️"),
        Some(85) => WeatherInfo::new("Snow showers", "🌨️"),
        Some(86) => WeatherInfo::new("Heavy snow showers", "❄️"),
        Some(95) => WeatherInfo::new("Thunderstorm", "⛈️"),
        Some(96) => WeatherInfo::new("Thunderstorm + hail", "⛈️"),
        Some(99) => WeatherInfo::new("Thunderstorm + heavy hail", "⛈️"),
        _ => WeatherInfo::new("Weather", "🌈"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    #[serde(default)]
    pub weathercode: Option<i64>,
    /// Local time of the observation, `YYYY-MM-DDTHH:MM`.
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub weathercode: Vec<Option<i64>>,
}

/// Subset of the Open-Meteo forecast payload the weather window reads. Both sections are optional
/// so a partial payload still decodes and renders as malformed instead of failing the fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
    #[serde(default)]
    pub daily: Option<DailyForecast>,
}

pub fn parse_forecast(raw: &str) -> Result<ForecastResponse, WeatherError> {
    serde_json::from_str(raw).map_err(|err| WeatherError::Decode(err.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastDay {
    pub day_label: String,
    pub temps: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub temperature: String,
    pub condition: String,
    pub emoji: &'static str,
    pub meta: String,
    pub forecast: Vec<ForecastDay>,
    pub note: &'static str,
}

/// Everything the weather window shows at one moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherView {
    /// A single status line with an optional note; temperature and forecast are blank.
    Status {
        message: &'static str,
        note: &'static str,
    },
    Report(WeatherReport),
}

impl Default for WeatherView {
    fn default() -> Self {
        Self::idle()
    }
}

impl WeatherView {
    /// Nothing requested yet.
    pub fn idle() -> Self {
        Self::Status {
            message: IDLE_MESSAGE,
            note: IDLE_NOTE,
        }
    }

    pub fn loading() -> Self {
        Self::Status {
            message: LOADING_MESSAGE,
            note: "",
        }
    }

    pub fn fetch_failed() -> Self {
        Self::Status {
            message: FETCH_FAILED_MESSAGE,
            note: FETCH_FAILED_NOTE,
        }
    }

    pub fn malformed() -> Self {
        Self::Status {
            message: MALFORMED_MESSAGE,
            note: MALFORMED_NOTE,
        }
    }
}

/// Builds the window contents for a decoded response.
pub fn render_forecast(response: &ForecastResponse) -> WeatherView {
    let (Some(current), Some(daily)) = (&response.current_weather, &response.daily) else {
        return WeatherView::malformed();
    };

    let info = weather_info(current.weathercode);
    let forecast = daily
        .time
        .iter()
        .enumerate()
        .map(|(index, day)| {
            let max = daily.temperature_2m_max.get(index).copied().flatten();
            let min = daily.temperature_2m_min.get(index).copied().flatten();
            let info = weather_info(daily.weathercode.get(index).copied().flatten());
            ForecastDay {
                day_label: day_label(index, day),
                temps: format!(
                    "{}°C / {}°C",
                    round_half_up(max.unwrap_or(0.0)),
                    round_half_up(min.unwrap_or(0.0))
                ),
                note: format!("{} {}", info.emoji, info.text),
            }
        })
        .collect();

    WeatherView::Report(WeatherReport {
        temperature: format!("{}°C", round_half_up(current.temperature)),
        condition: format!(
            "{} · Wind {} km/h",
            info.text,
            round_half_up(current.windspeed)
        ),
        emoji: info.emoji,
        meta: format!(
            "Updated {} · Source: Open-Meteo",
            observation_time(&current.time)
        ),
        forecast,
        note: REPORT_NOTE,
    })
}

/// Rounds halves toward positive infinity, so `-2.5` becomes `-2`.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn observation_time(iso: &str) -> String {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(iso, format).ok())
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

fn day_label(index: usize, day: &str) -> String {
    match index {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map(|date| date.format("%a").to_string())
            .unwrap_or_else(|_| day.to_string()),
    }
}

/// Last successful forecast and when it arrived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherCache {
    fetched_at_ms: u64,
    data: Option<ForecastResponse>,
}

impl WeatherCache {
    /// Returns the cached response when it may be reused at `now_ms`. `force` always misses.
    pub fn fresh(&self, now_ms: u64, force: bool) -> Option<&ForecastResponse> {
        if force {
            return None;
        }
        let age = now_ms.saturating_sub(self.fetched_at_ms);
        self.data.as_ref().filter(|_| age < WEATHER_MAX_AGE_MS)
    }

    pub fn store(&mut self, now_ms: u64, data: ForecastResponse) {
        self.fetched_at_ms = now_ms;
        self.data = Some(data);
    }
}
