// Test fixtures - reusable test data
// Provides consistent days of events across the integration tests

#![allow(dead_code)]

use rust_dayview::models::event::Event;
use rust_dayview::models::event_type::EventType;

/// Shorthand for an event with a generated title
pub fn event(id: &str, start: i32, end: i32) -> Event {
    Event::new(id, format!("Event {}", id), start, end)
}

/// Sample days for testing
pub mod days {
    use super::*;

    /// 9:00-10:00 followed directly by 10:00-11:00
    pub fn back_to_back() -> Vec<Event> {
        vec![event("a", 540, 600), event("b", 600, 660)]
    }

    /// 9:00-10:00 with 9:10-9:50 nested inside
    pub fn nested_pair() -> Vec<Event> {
        vec![event("a", 540, 600), event("b", 550, 590)]
    }

    /// A long event touched by two events that do not touch each other
    pub fn chain() -> Vec<Event> {
        vec![
            event("long", 540, 660),
            event("first", 540, 600),
            event("second", 600, 660),
        ]
    }

    /// A realistic working day with categories and a stray inverted entry
    pub fn busy_monday() -> Vec<Event> {
        let mut events = vec![
            Event::builder()
                .id("standup")
                .title("Standup")
                .starts_at(9, 0)
                .ends_at(9, 15)
                .build()
                .unwrap(),
            Event::builder()
                .id("review")
                .title("Design review")
                .starts_at(9, 0)
                .ends_at(10, 30)
                .event_type(EventType::Project)
                .build()
                .unwrap(),
            Event::builder()
                .id("coffee")
                .title("Coffee with Alex")
                .starts_at(10, 0)
                .ends_at(10, 30)
                .event_type(EventType::Social)
                .build()
                .unwrap(),
            Event::builder()
                .id("lunch")
                .title("Lunch")
                .starts_at(12, 0)
                .ends_at(13, 0)
                .event_type(EventType::Personal)
                .build()
                .unwrap(),
        ];
        events.push(event("typo", 900, 870));
        events
    }
}
