//! Event type model.
//!
//! Every event carries one of a small closed set of categories. The category
//! only drives presentation (accent color, label); layout ignores it.

use serde::{Deserialize, Serialize};

/// Category tag of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum EventType {
    #[default]
    Work,
    Personal,
    Social,
    Project,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Work,
        EventType::Personal,
        EventType::Social,
        EventType::Project,
    ];

    /// Parse a wire tag. Unknown tags fall back to `Work`, the same style the
    /// day view uses for events it cannot classify.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "personal" => Self::Personal,
            "social" => Self::Social,
            "project" => Self::Project,
            "work" => Self::Work,
            other => {
                log::debug!("Unknown event type '{}', using work", other);
                Self::Work
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Social => "social",
            Self::Project => "project",
        }
    }

    /// Display name for legends and menus.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Social => "Social",
            Self::Project => "Project",
        }
    }

    /// Hex accent color used for the event's left border and title.
    pub fn accent_hex(&self) -> &'static str {
        match self {
            Self::Work => "#3B82F6",
            Self::Personal => "#F97316",
            Self::Social => "#22C55E",
            Self::Project => "#A855F7",
        }
    }
}

impl From<String> for EventType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known_values() {
        assert_eq!(EventType::from_tag("work"), EventType::Work);
        assert_eq!(EventType::from_tag("Personal"), EventType::Personal);
        assert_eq!(EventType::from_tag(" social "), EventType::Social);
        assert_eq!(EventType::from_tag("PROJECT"), EventType::Project);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_work() {
        assert_eq!(EventType::from_tag("holiday"), EventType::Work);
        assert_eq!(EventType::from_tag(""), EventType::Work);
    }

    #[test]
    fn test_tag_matches_serialized_form() {
        for event_type in EventType::ALL {
            let json = serde_json::to_string(&event_type).unwrap();
            assert_eq!(json, format!("\"{}\"", event_type.tag()));

            let parsed: EventType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, event_type);
        }
    }

    #[test]
    fn test_deserialize_unknown_tag() {
        let parsed: EventType = serde_json::from_str("\"birthday\"").unwrap();
        assert_eq!(parsed, EventType::Work);
    }

    #[test]
    fn test_accent_colors_are_distinct_hex() {
        let colors: std::collections::HashSet<_> =
            EventType::ALL.iter().map(|t| t.accent_hex()).collect();
        assert_eq!(colors.len(), EventType::ALL.len());
        assert!(colors
            .iter()
            .all(|c| c.len() == 7 && c.starts_with('#') && c[1..].chars().all(|ch| ch.is_ascii_hexdigit())));
    }

    #[test]
    fn test_display_and_label() {
        assert_eq!(EventType::Social.to_string(), "social");
        assert_eq!(EventType::Social.label(), "Social");
    }
}
