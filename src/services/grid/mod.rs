//! Hour rows of the day-view time grid.

use serde::Serialize;

use crate::models::settings::{TimeFormat, ViewBounds};
use crate::utils::time::format_hour_label;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourMark {
    pub hour: u32,
    pub top: f32,
    pub label: String,
}

/// One mark per hour row, from `start_hour` up to but excluding `end_hour`.
///
/// Expects validated bounds; an unchecked `end_hour` sizes the returned list.
pub fn hour_marks(bounds: &ViewBounds, format: TimeFormat) -> Vec<HourMark> {
    (bounds.start_hour..bounds.end_hour)
        .map(|hour| HourMark {
            hour,
            top: (hour - bounds.start_hour) as f32 * bounds.pixels_per_hour,
            label: format_hour_label(hour, format),
        })
        .collect()
}
