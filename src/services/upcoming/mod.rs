//! Upcoming events for the sidebar: what is still ahead today, and tomorrow.

use chrono::NaiveTime;
use serde::Serialize;

use crate::models::event::Event;
use crate::utils::time::minute_of_day;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpcomingEvents {
    pub today: Vec<Event>,
    pub tomorrow: Vec<Event>,
}

impl UpcomingEvents {
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.tomorrow.is_empty()
    }

    pub fn len(&self) -> usize {
        self.today.len() + self.tomorrow.len()
    }
}

/// Keep today's events that start strictly after `now`, and all of tomorrow's.
/// Input order is preserved.
pub fn upcoming_events(today: &[Event], tomorrow: &[Event], now: NaiveTime) -> UpcomingEvents {
    let now_minutes = minute_of_day(&now);

    UpcomingEvents {
        today: today
            .iter()
            .filter(|event| event.start_minute > now_minutes)
            .cloned()
            .collect(),
        tomorrow: tomorrow.to_vec(),
    }
}
