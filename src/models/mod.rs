// Module exports for models

pub mod drag_state;
pub mod event;
pub mod settings;
pub mod visible_dates;
