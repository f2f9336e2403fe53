// Drag state module
// Live state of the provisional event under the pointer

use crate::models::event::Event;
use crate::services::signal::Signal;

/// Day timestamp meaning "no day under the pointer".
pub const NO_ACTIVE_DAY: i64 = -1;

/// The event currently being created or moved by a drag gesture.
///
/// Written by the gesture controller, read by the overlay.
#[derive(Debug, Clone)]
pub struct DragState {
    pub active: bool,
    /// Day under the pointer, or [`NO_ACTIVE_DAY`]
    pub start_unix: Signal<i64>,
    /// Minutes from midnight of the dragged start
    pub start_minutes: f32,
    pub duration_minutes: f32,
    pub event: Option<Event>,
}

impl DragState {
    pub fn idle() -> Self {
        Self {
            active: false,
            start_unix: Signal::new(NO_ACTIVE_DAY),
            start_minutes: 0.0,
            duration_minutes: 0.0,
            event: None,
        }
    }

    pub fn day(&self) -> Option<i64> {
        Some(self.start_unix.value()).filter(|day| *day != NO_ACTIVE_DAY)
    }

    pub fn title(&self) -> Option<&str> {
        self.event
            .as_ref()
            .filter(|event| event.has_title())
            .map(|event| event.title.as_str())
    }

    pub fn color(&self) -> Option<&str> {
        self.event.as_ref().and_then(|event| event.color.as_deref())
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::idle()
    }
}
