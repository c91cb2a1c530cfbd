// Time-of-day utility functions

use chrono::{NaiveTime, Timelike};

use crate::models::settings::TimeFormat;

/// Minutes since local midnight, ignoring seconds.
pub fn minute_of_day<T: Timelike>(time: &T) -> i32 {
    (time.hour() * 60 + time.minute()) as i32
}

/// Clock label for a time of day, e.g. "2:30 PM" or "14:30".
pub fn format_clock_label<T: Timelike>(time: &T, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwelveHour => {
            let (is_pm, hour) = time.hour12();
            format!("{}:{:02} {}", hour, time.minute(), if is_pm { "PM" } else { "AM" })
        }
        TimeFormat::TwentyFourHour => format!("{:02}:{:02}", time.hour(), time.minute()),
    }
}

/// Label for a whole hour of the grid, e.g. "8:00 AM" or "08:00".
pub fn format_hour_label(hour: u32, format: TimeFormat) -> String {
    match NaiveTime::from_hms_opt(hour % 24, 0, 0) {
        Some(time) => format_clock_label(&time, format),
        None => format!("{}:00", hour),
    }
}

/// Parse "HH:MM" (24-hour) into a time of day.
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}
