// Integration tests for the day layout engine
// Concrete layouts a day view is expected to render

mod fixtures;

use fixtures::{days, event};
use pretty_assertions::assert_eq;
use test_case::test_case;

use rust_dayview::models::layout::{OverlapSlot, PositionedEvent};
use rust_dayview::models::settings::{LayoutOptions, OverlapMode, ViewBounds};
use rust_dayview::{layout_day, LayoutEngine};

/// (id, top, left, width, group size) for compact comparisons
fn summary(positioned: &[PositionedEvent]) -> Vec<(String, f32, f32, f32, usize)> {
    positioned
        .iter()
        .map(|p| {
            (
                p.id().to_string(),
                p.top,
                p.left_percent,
                p.width_percent,
                p.slot.group_size,
            )
        })
        .collect()
}

fn find<'a>(positioned: &'a [PositionedEvent], id: &str) -> &'a PositionedEvent {
    positioned
        .iter()
        .find(|p| p.id() == id)
        .unwrap_or_else(|| panic!("event '{}' missing from layout", id))
}

#[test]
fn test_back_to_back_events_get_full_width() {
    let positioned = layout_day(&days::back_to_back(), &ViewBounds::default());

    assert_eq!(
        summary(&positioned),
        vec![
            ("a".to_string(), 96.0, 0.0, 95.0, 1),
            ("b".to_string(), 192.0, 0.0, 95.0, 1),
        ]
    );
}

#[test]
fn test_nested_events_split_the_column() {
    let positioned = layout_day(&days::nested_pair(), &ViewBounds::default());

    assert_eq!(
        summary(&positioned),
        vec![
            ("a".to_string(), 96.0, 0.0, 47.5, 2),
            ("b".to_string(), 112.0, 50.0, 47.5, 2),
        ]
    );
}

#[test]
fn test_inverted_event_still_rendered() {
    let positioned = layout_day(&[event("x", 600, 590)], &ViewBounds::default());

    assert_eq!(positioned.len(), 1);
    assert_eq!(positioned[0].height, 0.0);
    assert_eq!(positioned[0].slot, OverlapSlot::SINGLE);
}

#[test_case(OverlapMode::Direct, 3, 2 ; "direct keeps per-event groups")]
#[test_case(OverlapMode::Clustered, 2, 2 ; "clustered shares the chain lanes")]
fn test_chain_group_sizes(mode: OverlapMode, long_group: usize, short_group: usize) {
    let engine = LayoutEngine::new(
        ViewBounds::default(),
        LayoutOptions {
            overlap_mode: mode,
            ..LayoutOptions::default()
        },
    )
    .unwrap();

    let positioned = engine.layout_day(&days::chain());

    assert_eq!(find(&positioned, "long").slot.group_size, long_group);
    assert_eq!(find(&positioned, "first").slot.group_size, short_group);
    assert_eq!(find(&positioned, "second").slot.group_size, short_group);
    assert_eq!(find(&positioned, "first").left_percent, 50.0);
    assert_eq!(find(&positioned, "second").left_percent, 50.0);
}

#[test]
fn test_busy_day() {
    let positioned = layout_day(&days::busy_monday(), &ViewBounds::default());

    let standup = find(&positioned, "standup");
    let review = find(&positioned, "review");
    let coffee = find(&positioned, "coffee");
    let lunch = find(&positioned, "lunch");
    let typo = find(&positioned, "typo");

    assert_eq!((standup.slot.group_size, standup.slot.lane_index), (2, 0));
    assert_eq!((review.slot.group_size, review.slot.lane_index), (3, 1));
    assert_eq!((coffee.slot.group_size, coffee.slot.lane_index), (2, 1));
    assert_eq!(lunch.slot, OverlapSlot::SINGLE);
    assert_eq!(lunch.top, 384.0);
    assert_eq!(lunch.height, 96.0);
    assert_eq!(typo.height, 0.0);
    assert_eq!(typo.slot, OverlapSlot::SINGLE);

    assert_eq!(standup.z_index, 10);
    assert_eq!(review.z_index, 11);
}

#[test_case(8, 18, 96.0, 540, 96.0 ; "default bounds")]
#[test_case(0, 24, 60.0, 540, 540.0 ; "full day one pixel per minute")]
#[test_case(9, 17, 120.0, 510, -60.0 ; "before the window")]
fn test_top_follows_bounds(start_hour: u32, end_hour: u32, pixels_per_hour: f32, start: i32, expected_top: f32) {
    let bounds = ViewBounds::new(start_hour, end_hour, pixels_per_hour).unwrap();
    let positioned = layout_day(&[event("a", start, start + 30)], &bounds);

    assert_eq!(positioned[0].top, expected_top);
    assert_eq!(positioned[0].height, pixels_per_hour / 2.0);
}

#[test]
fn test_same_input_same_output() {
    let events = days::busy_monday();
    let bounds = ViewBounds::default();

    assert_eq!(layout_day(&events, &bounds), layout_day(&events, &bounds));
}

#[test]
fn test_input_is_not_modified() {
    let events = days::busy_monday();
    let before = events.clone();

    let _ = layout_day(&events, &ViewBounds::default());

    assert_eq!(events, before);
}
