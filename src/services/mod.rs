// Service module exports
// Framework-independent logic behind the dragging overlay

pub mod animation;
pub mod day_index;
pub mod geometry;
pub mod overlay;
pub mod settings;
pub mod signal;
pub mod visibility;
