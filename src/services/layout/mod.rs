//! Day-view layout engine.
//!
//! Turns a day's events into [`PositionedEvent`]s: the vertical placement
//! comes from the event's minutes and the view bounds, the horizontal
//! placement from its [`OverlapSlot`](crate::models::layout::OverlapSlot).
//! Every call recomputes from scratch and never mutates its input.

pub mod overlap;

use crate::models::event::Event;
use crate::models::layout::{OverlapSlot, PositionedEvent};
use crate::models::settings::{ConfigurationError, LayoutOptions, ViewBounds};

/// Lays out events for one configured view.
///
/// Configuration is checked once in [`LayoutEngine::new`]; after that
/// [`LayoutEngine::layout_day`] cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    bounds: ViewBounds,
    options: LayoutOptions,
}

impl LayoutEngine {
    pub fn new(bounds: ViewBounds, options: LayoutOptions) -> Result<Self, ConfigurationError> {
        bounds.validate()?;
        options.validate()?;
        Ok(Self { bounds, options })
    }

    pub fn with_bounds(bounds: ViewBounds) -> Result<Self, ConfigurationError> {
        Self::new(bounds, LayoutOptions::default())
    }

    pub fn bounds(&self) -> &ViewBounds {
        &self.bounds
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Position every event of the day.
    ///
    /// Output is ordered by start minute (ties in input order). Events with an
    /// empty or inverted interval are kept, with zero height and a column of
    /// their own.
    pub fn layout_day(&self, events: &[Event]) -> Vec<PositionedEvent> {
        let slots = overlap::partition(events, self.options.overlap_mode);

        let degraded = events.iter().filter(|e| e.is_empty_interval()).count();
        if degraded > 0 {
            log::warn!(
                "Day layout: {} event(s) with end not after start rendered with zero height",
                degraded
            );
        }

        let positioned: Vec<PositionedEvent> = overlap::start_order(events)
            .into_iter()
            .map(|idx| self.position(&events[idx], slots[idx]))
            .collect();

        log::debug!(
            "Day layout: {} events, widest group {}",
            positioned.len(),
            positioned
                .iter()
                .map(|p| p.slot.group_size)
                .max()
                .unwrap_or(0)
        );

        positioned
    }

    fn position(&self, event: &Event, slot: OverlapSlot) -> PositionedEvent {
        let group_size = slot.group_size.max(1) as f32;
        let lane = slot.lane_index as f32;

        PositionedEvent {
            event: event.clone(),
            top: self.bounds.minute_to_y(event.start_minute),
            height: event.duration_minutes().max(0) as f32 * self.bounds.pixels_per_hour / 60.0,
            left_percent: lane * (100.0 / group_size),
            width_percent: self.options.gap_factor / group_size,
            z_index: self
                .options
                .base_z
                .saturating_add(i32::try_from(slot.lane_index).unwrap_or(i32::MAX)),
            slot,
        }
    }
}

/// Lay out `events` with the default layout options.
///
/// `bounds` is expected to be valid; malformed bounds are logged and replaced
/// by the defaults so this entry point stays total. Use [`LayoutEngine::new`]
/// to surface configuration errors instead.
pub fn layout_day(events: &[Event], bounds: &ViewBounds) -> Vec<PositionedEvent> {
    let engine = LayoutEngine::with_bounds(*bounds).unwrap_or_else(|err| {
        log::warn!("Invalid view bounds ({}), using defaults", err);
        LayoutEngine {
            bounds: ViewBounds::default(),
            options: LayoutOptions::default(),
        }
    });
    engine.layout_day(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::OverlapMode;

    fn event(id: &str, start: i32, end: i32) -> Event {
        Event::new(id, format!("Event {}", id), start, end)
    }

    fn find<'a>(positioned: &'a [PositionedEvent], id: &str) -> &'a PositionedEvent {
        positioned.iter().find(|p| p.id() == id).unwrap()
    }

    #[test]
    fn test_back_to_back_events() {
        let positioned = layout_day(
            &[event("a", 540, 600), event("b", 600, 660)],
            &ViewBounds::default(),
        );

        let a = find(&positioned, "a");
        let b = find(&positioned, "b");
        assert_eq!(a.slot.group_size, 1);
        assert_eq!(b.slot.group_size, 1);
        assert_eq!(a.width_percent, 95.0);
        assert_eq!(a.left_percent, 0.0);
        assert_eq!(a.top, 96.0);
        assert_eq!(b.top, 192.0);
        assert_eq!(a.height, 96.0);
    }

    #[test]
    fn test_fully_overlapping_events() {
        let positioned = layout_day(
            &[event("a", 540, 600), event("b", 550, 590)],
            &ViewBounds::default(),
        );

        let a = find(&positioned, "a");
        let b = find(&positioned, "b");
        assert_eq!(a.width_percent, 47.5);
        assert_eq!(b.width_percent, 47.5);
        assert_eq!(a.left_percent, 0.0);
        assert_eq!(b.left_percent, 50.0);
        assert_eq!(a.z_index, 10);
        assert_eq!(b.z_index, 11);
    }

    #[test]
    fn test_inverted_event_clamps_height() {
        let positioned = layout_day(&[event("x", 600, 590)], &ViewBounds::default());

        assert_eq!(positioned.len(), 1);
        assert_eq!(positioned[0].height, 0.0);
        assert_eq!(positioned[0].slot, OverlapSlot::SINGLE);
        assert_eq!(positioned[0].width_percent, 95.0);
    }

    #[test]
    fn test_event_before_window_has_negative_top() {
        let positioned = layout_day(&[event("early", 420, 510)], &ViewBounds::default());
        assert_eq!(positioned[0].top, -96.0);
        assert_eq!(positioned[0].height, 144.0);
    }

    #[test]
    fn test_empty_day() {
        assert!(layout_day(&[], &ViewBounds::default()).is_empty());
    }

    #[test]
    fn test_output_sorted_by_start() {
        let positioned = layout_day(
            &[event("late", 700, 760), event("early", 500, 530), event("mid", 600, 640)],
            &ViewBounds::default(),
        );
        let ids: Vec<&str> = positioned.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["early", "mid", "late"]);
    }

    #[test]
    fn test_payload_passes_through() {
        let mut input = event("a", 540, 600);
        input.description = Some("Quarterly planning".to_string());
        let positioned = layout_day(std::slice::from_ref(&input), &ViewBounds::default());
        assert_eq!(positioned[0].event, input);
    }

    #[test]
    fn test_custom_options() {
        let engine = LayoutEngine::new(
            ViewBounds::new(0, 24, 60.0).unwrap(),
            LayoutOptions {
                gap_factor: 90.0,
                base_z: 1,
                overlap_mode: OverlapMode::Clustered,
            },
        )
        .unwrap();

        let positioned = engine.layout_day(&[
            event("a", 60, 180),
            event("b", 60, 120),
            event("c", 120, 180),
        ]);

        let c = find(&positioned, "c");
        assert_eq!(c.top, 120.0);
        assert_eq!(c.height, 60.0);
        assert_eq!(c.width_percent, 45.0);
        assert_eq!(c.left_percent, 50.0);
        assert_eq!(c.z_index, 2);
    }

    #[test]
    fn test_engine_rejects_bad_configuration() {
        let bad_bounds = ViewBounds {
            start_hour: 18,
            end_hour: 8,
            pixels_per_hour: 96.0,
        };
        assert!(LayoutEngine::with_bounds(bad_bounds).is_err());

        let bad_options = LayoutOptions {
            gap_factor: -1.0,
            ..LayoutOptions::default()
        };
        assert_eq!(
            LayoutEngine::new(ViewBounds::default(), bad_options),
            Err(ConfigurationError::GapFactorOutOfRange(-1.0))
        );
    }

    #[test]
    fn test_free_function_falls_back_on_bad_bounds() {
        let bad_bounds = ViewBounds {
            start_hour: 8,
            end_hour: 18,
            pixels_per_hour: 0.0,
        };
        let positioned = layout_day(&[event("a", 540, 600)], &bad_bounds);
        assert_eq!(positioned[0].top, 96.0);
    }
}
