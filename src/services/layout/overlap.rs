//! Overlap partitioning for the day view.
//!
//! Decides, for every event of a day, how many lanes its part of the column is
//! split into and which lane it takes. Events are visited in start order
//! (stable, so equal starts keep their input order) which makes lane
//! assignment deterministic.

use crate::models::event::Event;
use crate::models::layout::OverlapSlot;
use crate::models::settings::OverlapMode;

/// Indices of `events` sorted by start minute, ties in input order.
pub fn start_order(events: &[Event]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&idx| events[idx].start_minute);
    order
}

/// Compute the slot of every event, indexed like `events`.
pub fn partition(events: &[Event], mode: OverlapMode) -> Vec<OverlapSlot> {
    let order = start_order(events);
    match mode {
        OverlapMode::Direct => partition_direct(events, &order),
        OverlapMode::Clustered => partition_clustered(events, &order),
    }
}

/// Each event's group is itself plus every event that overlaps it directly.
///
/// Two events that do not overlap each other but share a neighbour can end
/// up with different group sizes; see [`OverlapMode::Clustered`] for the
/// variant that avoids this.
fn partition_direct(events: &[Event], order: &[usize]) -> Vec<OverlapSlot> {
    let mut slots = vec![OverlapSlot::SINGLE; events.len()];

    for &idx in order {
        let event = &events[idx];
        if event.is_empty_interval() {
            continue;
        }

        let mut group_size = 0;
        let mut lane_index = 0;
        for &other in order {
            if other == idx {
                lane_index = group_size;
                group_size += 1;
            } else if event.overlaps(&events[other]) {
                group_size += 1;
            }
        }

        slots[idx] = OverlapSlot {
            group_size,
            lane_index,
        };
    }

    slots
}

/// Events are grouped into chains of transitive overlap; inside a chain each
/// event takes the leftmost lane that is free at its start, and every member
/// shares the chain's lane count.
fn partition_clustered(events: &[Event], order: &[usize]) -> Vec<OverlapSlot> {
    let mut slots = vec![OverlapSlot::SINGLE; events.len()];

    // (event index, lane) of the cluster being built
    let mut members: Vec<(usize, usize)> = Vec::new();
    // End minute of the latest event in each lane
    let mut lane_ends: Vec<i32> = Vec::new();
    let mut cluster_end = i32::MIN;

    for &idx in order {
        let event = &events[idx];
        if event.is_empty_interval() {
            continue;
        }

        if !members.is_empty() && event.start_minute >= cluster_end {
            close_cluster(&mut slots, &mut members, &mut lane_ends);
        }

        let lane = match lane_ends.iter().position(|&end| end <= event.start_minute) {
            Some(free) => {
                lane_ends[free] = event.end_minute;
                free
            }
            None => {
                lane_ends.push(event.end_minute);
                lane_ends.len() - 1
            }
        };

        members.push((idx, lane));
        cluster_end = if members.len() == 1 {
            event.end_minute
        } else {
            cluster_end.max(event.end_minute)
        };
    }

    close_cluster(&mut slots, &mut members, &mut lane_ends);
    slots
}

fn close_cluster(
    slots: &mut [OverlapSlot],
    members: &mut Vec<(usize, usize)>,
    lane_ends: &mut Vec<i32>,
) {
    let group_size = lane_ends.len().max(1);
    for (idx, lane_index) in members.drain(..) {
        slots[idx] = OverlapSlot {
            group_size,
            lane_index,
        };
    }
    lane_ends.clear();
}
