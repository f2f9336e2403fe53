//! Mapping day timestamps to columns of the visible window.
//!
//! [`resolver`] finds the column for a single day, tolerating days that are
//! not (yet) part of the window. [`offset`] turns the dragged day and the
//! window anchor into a clamped column offset and animates between them.

pub mod offset;
pub mod resolver;

pub use offset::{compute_offset, DayOffsetAnimator};
pub use resolver::{find_nearest, resolve_day_index};
