// Settings module
// View bounds, layout constants and cursor options for the day view

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when view configuration cannot produce a sane coordinate system.
///
/// Configuration is static for the life of a view, so these are reported once
/// when an engine is built or settings are loaded, never per layout pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("end hour {end_hour} must be after start hour {start_hour}")]
    EmptyWindow { start_hour: u32, end_hour: u32 },

    #[error("end hour {0} is past the end of the day")]
    EndHourOutOfRange(u32),

    #[error("pixels per hour must be a positive number, got {0}")]
    NonPositiveScale(f32),

    #[error("gap factor must be within (0, 100], got {0}")]
    GapFactorOutOfRange(f32),

    #[error("{name} interval must be at least one second")]
    ZeroInterval { name: &'static str },
}

/// The visible time window of the day view and its vertical scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewBounds {
    pub start_hour: u32,
    pub end_hour: u32,
    pub pixels_per_hour: f32,
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 18,
            pixels_per_hour: 96.0,
        }
    }
}

impl ViewBounds {
    pub fn new(start_hour: u32, end_hour: u32, pixels_per_hour: f32) -> Result<Self, ConfigurationError> {
        let bounds = Self {
            start_hour,
            end_hour,
            pixels_per_hour,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.end_hour <= self.start_hour {
            return Err(ConfigurationError::EmptyWindow {
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            });
        }
        if self.end_hour > 24 {
            return Err(ConfigurationError::EndHourOutOfRange(self.end_hour));
        }
        if !self.pixels_per_hour.is_finite() || self.pixels_per_hour <= 0.0 {
            return Err(ConfigurationError::NonPositiveScale(self.pixels_per_hour));
        }
        Ok(())
    }

    pub fn pixels_per_minute(&self) -> f32 {
        self.pixels_per_hour / 60.0
    }

    /// First visible minute of the day.
    pub fn start_minute(&self) -> i64 {
        i64::from(self.start_hour) * 60
    }

    /// Last visible minute of the day (inclusive for the time cursor).
    pub fn end_minute(&self) -> i64 {
        i64::from(self.end_hour) * 60
    }

    /// Pixel offset from the top of the view for a minute of the day.
    /// Minutes before the window give negative offsets.
    pub fn minute_to_y(&self, minute: i32) -> f32 {
        // Multiply before dividing so whole minutes on the default scale stay exact.
        (i64::from(minute) - self.start_minute()) as f32 * self.pixels_per_hour / 60.0
    }

    /// Total height in pixels of the visible window.
    pub fn view_height(&self) -> f32 {
        (self.end_hour as f32 - self.start_hour as f32) * self.pixels_per_hour
    }
}

/// How concurrent events are grouped into lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapMode {
    /// Each event is grouped with the events that overlap it directly.
    #[default]
    Direct,
    /// Events are grouped by connected chains of overlap and packed into lanes.
    Clustered,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Share of the column (in percent) handed out to a group; the rest is gutter.
    pub gap_factor: f32,
    /// Stacking order of lane 0, above the grid lines.
    pub base_z: i32,
    pub overlap_mode: OverlapMode,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            gap_factor: 95.0,
            base_z: 10,
            overlap_mode: OverlapMode::Direct,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.gap_factor.is_finite() || self.gap_factor <= 0.0 || self.gap_factor > 100.0 {
            return Err(ConfigurationError::GapFactorOutOfRange(self.gap_factor));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    /// "2:30 PM"
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// "14:30"
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorOptions {
    pub tick_seconds: u64,
    pub time_format: TimeFormat,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            tick_seconds: 60,
            time_format: TimeFormat::TwelveHour,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshOptions {
    pub interval_seconds: u64,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self { interval_seconds: 60 }
    }
}

/// Everything the day view reads from the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub view: ViewBounds,
    pub layout: LayoutOptions,
    pub cursor: CursorOptions,
    pub refresh: RefreshOptions,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.view.validate()?;
        self.layout.validate()?;
        if self.cursor.tick_seconds == 0 {
            return Err(ConfigurationError::ZeroInterval { name: "cursor tick" });
        }
        if self.refresh.interval_seconds == 0 {
            return Err(ConfigurationError::ZeroInterval { name: "refresh" });
        }
        Ok(())
    }
}
