//! Layout output model.
//!
//! A [`PositionedEvent`] is an input event paired with the geometry the day
//! view needs to paint it: pixel `top`/`height` on the time axis, and a
//! percentage `left`/`width` inside the day column.

use serde::Serialize;

use crate::models::event::Event;

/// Where an event sits among the events it is concurrent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapSlot {
    /// Number of lanes the column is split into for this event. Always >= 1.
    pub group_size: usize,
    /// Zero-based lane, counted left to right. Always < `group_size`.
    pub lane_index: usize,
}

impl OverlapSlot {
    pub const SINGLE: OverlapSlot = OverlapSlot {
        group_size: 1,
        lane_index: 0,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub top: f32,
    pub height: f32,
    pub left_percent: f32,
    pub width_percent: f32,
    pub z_index: i32,
    #[serde(flatten)]
    pub slot: OverlapSlot,
}

impl PositionedEvent {
    pub fn id(&self) -> &str {
        &self.event.id
    }

    /// Right edge of the box in percent of the column width.
    pub fn right_percent(&self) -> f32 {
        self.left_percent + self.width_percent
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}
