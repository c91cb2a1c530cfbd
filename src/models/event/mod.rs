// Event module
// Day-scoped event model in the calendar API's wire shape

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::event_type::EventType;

/// Minutes in a local day; the exclusive upper bound for `end_minute`.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A person attached to an event, either as creator or participant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Whether an event happens on a call or in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Online,
    Onsite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: LocationKind,
    /// Meeting platform name for online events (Zoom, Google Meet, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A single event on one day, positioned by minutes since local midnight.
///
/// Only `id`, `start_minute` and `end_minute` take part in layout. Everything
/// else is payload that the layout engine hands back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start_minute: i32,
    pub end_minute: i32,
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    /// Display string such as "9:00 - 10:00 AM", as supplied by the data layer
    #[serde(default)]
    pub time: String,
    /// Display string such as "1 hour"
    #[serde(default)]
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Participant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(
        rename = "start_date",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
}

impl Event {
    /// Create an event with only the fields layout cares about.
    ///
    /// No validation happens here: the layout engine must accept inverted or
    /// out-of-day intervals, so construction never fails. Call
    /// [`Event::validate`] when the caller wants to reject bad input.
    ///
    /// # Examples
    /// ```
    /// use rust_dayview::models::event::Event;
    ///
    /// let standup = Event::new("e1", "Standup", 9 * 60, 9 * 60 + 15);
    /// assert_eq!(standup.duration_minutes(), 15);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_minute: i32,
        end_minute: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_minute,
            end_minute,
            event_type: EventType::default(),
            time: String::new(),
            duration: String::new(),
            description: None,
            creator: None,
            participants: Vec::new(),
            location: None,
            start_date: None,
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Length of the interval in minutes. Negative for inverted events.
    ///
    /// Widened to `i64` so minutes far outside the day cannot overflow.
    pub fn duration_minutes(&self) -> i64 {
        i64::from(self.end_minute) - i64::from(self.start_minute)
    }

    /// True when the interval has no extent (`start >= end`).
    pub fn is_empty_interval(&self) -> bool {
        self.start_minute >= self.end_minute
    }

    /// Half-open interval intersection. Back-to-back events do not overlap,
    /// and an empty interval overlaps nothing.
    pub fn overlaps(&self, other: &Event) -> bool {
        if self.is_empty_interval() || other.is_empty_interval() {
            return false;
        }
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.trim().is_empty() {
            return Err(EventValidationError::EmptyId);
        }

        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if self.start_minute < 0 || self.end_minute > MINUTES_PER_DAY {
            return Err(EventValidationError::OutsideDay);
        }

        if self.is_empty_interval() {
            return Err(EventValidationError::EndNotAfterStart);
        }

        Ok(())
    }
}

/// Validation errors for Event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event id cannot be empty")]
    EmptyId,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event must lie within 00:00 and 24:00")]
    OutsideDay,
    #[error("Event end time must be after start time")]
    EndNotAfterStart,
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    start_minute: Option<i32>,
    end_minute: Option<i32>,
    event_type: EventType,
    description: Option<String>,
    creator: Option<Participant>,
    participants: Vec<Participant>,
    location: Option<Location>,
    start_date: Option<NaiveDate>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start as hour and minute of the local day
    pub fn starts_at(mut self, hour: i32, minute: i32) -> Self {
        self.start_minute = Some(hour * 60 + minute);
        self
    }

    /// Set the end as hour and minute of the local day
    pub fn ends_at(mut self, hour: i32, minute: i32) -> Self {
        self.end_minute = Some(hour * 60 + minute);
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn creator(mut self, creator: Participant) -> Self {
        self.creator = Some(creator);
        self
    }

    pub fn participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Build and validate the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start_minute = self.start_minute.ok_or("Event start time is required")?;
        let end_minute = self.end_minute.ok_or("Event end time is required")?;

        let event = Event {
            event_type: self.event_type,
            description: self.description,
            creator: self.creator,
            participants: self.participants,
            location: self.location,
            start_date: self.start_date,
            ..Event::new(id, title, start_minute, end_minute)
        };

        event.validate().map_err(|err| err.to_string())?;
        Ok(event)
    }
}
