//! Taskbar clock text.

use std::time::Duration;

use chrono::{Datelike, Timelike};

/// How often the taskbar re-renders the clock.
pub const CLOCK_REFRESH: Duration = Duration::from_secs(30);

/// Formats `now` as `HH:MM  DD.MM.YYYY` (two spaces between time and date).
pub fn clock_label<T: Datelike + Timelike>(now: &T) -> String {
    format!(
        "{:02}:{:02}  {:02}.{:02}.{}",
        now.hour(),
        now.minute(),
        now.day(),
        now.month(),
        now.year()
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pads_every_field_to_two_digits() {
        let now = NaiveDate::from_ymd_opt(2026, 1, 5)
            .and_then(|date| date.and_hms_opt(9, 7, 59))
            .unwrap();

        assert_eq!(clock_label(&now), "09:07  05.01.2026");
    }

    #[test]
    fn afternoon_uses_24_hour_time() {
        let now = NaiveDate::from_ymd_opt(2026, 1, 20)
            .and_then(|date| date.and_hms_opt(14, 37, 0))
            .unwrap();

        assert_eq!(clock_label(&now), "14:37  20.01.2026");
    }
}
