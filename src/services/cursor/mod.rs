//! Current-time indicator for the day view.
//!
//! The cursor is a pure function of the wall-clock time and the view bounds.
//! [`TimeCursorClock`] keeps the last sample so a periodic tick can replace
//! it; nothing else is remembered between ticks.

use chrono::{Local, NaiveTime};
use serde::Serialize;

use crate::models::settings::{TimeFormat, ViewBounds};
use crate::utils::time::{format_clock_label, minute_of_day};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCursor {
    pub now_minutes: i32,
    /// Pixel offset from the top of the view. Only meaningful when `visible`.
    pub indicator_top: f32,
    pub visible: bool,
    pub label: String,
}

/// Compute the cursor with the default "2:30 PM" label.
///
/// `bounds` need not be validated: the arithmetic is widened, so an
/// inverted or oversized window only yields a cursor that is never visible.
pub fn compute_time_cursor(now: NaiveTime, bounds: &ViewBounds) -> TimeCursor {
    compute_time_cursor_with_format(now, bounds, TimeFormat::TwelveHour)
}

pub fn compute_time_cursor_with_format(
    now: NaiveTime,
    bounds: &ViewBounds,
    format: TimeFormat,
) -> TimeCursor {
    let now_minutes = minute_of_day(&now);

    TimeCursor {
        now_minutes,
        indicator_top: bounds.minute_to_y(now_minutes),
        // Both window edges count as visible
        visible: bounds.start_minute() <= i64::from(now_minutes)
            && i64::from(now_minutes) <= bounds.end_minute(),
        label: format_clock_label(&now, format),
    }
}

/// Holds the last wall-clock sample and recomputes the cursor on each tick.
#[derive(Debug, Clone)]
pub struct TimeCursorClock {
    bounds: ViewBounds,
    format: TimeFormat,
    last_sample: Option<NaiveTime>,
}

impl TimeCursorClock {
    pub fn new(bounds: ViewBounds, format: TimeFormat) -> Self {
        Self {
            bounds,
            format,
            last_sample: None,
        }
    }

    pub fn last_sample(&self) -> Option<NaiveTime> {
        self.last_sample
    }

    /// Cursor for the last sample, if a tick has happened.
    pub fn current(&self) -> Option<TimeCursor> {
        self.last_sample
            .map(|now| compute_time_cursor_with_format(now, &self.bounds, self.format))
    }

    /// Sample the local wall clock.
    pub fn tick(&mut self) -> TimeCursor {
        self.tick_at(Local::now().time())
    }

    pub fn tick_at(&mut self, now: NaiveTime) -> TimeCursor {
        self.last_sample = Some(now);
        let cursor = compute_time_cursor_with_format(now, &self.bounds, self.format);
        log::trace!(
            "Time cursor at {} (top={}, visible={})",
            cursor.label,
            cursor.indicator_top,
            cursor.visible
        );
        cursor
    }
}
