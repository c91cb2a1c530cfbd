// Rust Dayview Library
// Day-view event layout engine and time cursor

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::Event;
pub use models::layout::{OverlapSlot, PositionedEvent};
pub use models::settings::{ConfigurationError, ViewBounds};
pub use services::cursor::{compute_time_cursor, TimeCursor};
pub use services::layout::{layout_day, LayoutEngine};
