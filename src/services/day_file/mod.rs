//! Reading a day's events from a JSON file in the calendar API's shape.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::event::Event;

/// Load the events of one day from a JSON array.
///
/// Structurally invalid events (inverted intervals, minutes outside the day)
/// are kept and only logged; the layout engine degrades them itself.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize events from {}", path.display()))?;

    for event in &events {
        if let Err(err) = event.validate() {
            log::warn!("Event '{}' in {}: {}", event.id, path.display(), err);
        }
    }

    log::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
