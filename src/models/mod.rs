// Module exports for models

pub mod event;
pub mod event_type;
pub mod layout;
pub mod settings;
