// Service module exports

pub mod cursor;
pub mod day_file;
pub mod grid;
pub mod layout;
pub mod schedule;
pub mod settings;
pub mod upcoming;
