//! Pointer-driven drag controller.
//!
//! Turns press/move/release into writes on a [`DragState`]. It is the only
//! writer of that state; the overlay just reads it.

use chrono::{DateTime, Duration, Local};

use crate::models::drag_state::{DragState, NO_ACTIVE_DAY};
use crate::models::event::Event;
use crate::utils::date::{
    date_from_day_unix, minutes_since_midnight, time_from_minutes, MINUTES_PER_DAY,
};

/// Grid resolution the dragged start snaps to
pub const SNAP_MINUTES: f32 = 15.0;

#[derive(Clone, Debug)]
pub struct DragContext {
    pub event: Event,
    pub duration: Duration,
    /// Minutes between the event start and where it was grabbed
    pub grab_offset_minutes: f32,
    pub hovered_day: Option<i64>,
    pub hovered_minutes: Option<f32>,
}

impl DragContext {
    pub fn from_event(event: Event, grab_minutes: f32) -> Self {
        let start_minutes = minutes_since_midnight(event.start.time());
        Self {
            duration: event.duration(),
            grab_offset_minutes: grab_minutes - start_minutes,
            hovered_day: None,
            hovered_minutes: Some(start_minutes),
            event,
        }
    }

    pub fn duration_minutes(&self) -> f32 {
        self.duration.num_minutes() as f32
    }

    pub fn hovered_start(&self) -> Option<DateTime<Local>> {
        let date = date_from_day_unix(self.hovered_day?)?;
        let time = time_from_minutes(self.hovered_minutes?);
        date.and_time(time).and_local_timezone(Local).single()
    }
}

/// Snap `minutes` to the grid and keep the whole event inside the day.
fn snap_start(minutes: f32, duration_minutes: f32) -> f32 {
    let latest = (MINUTES_PER_DAY - duration_minutes).max(0.0);
    ((minutes / SNAP_MINUTES).round() * SNAP_MINUTES).clamp(0.0, latest)
}

#[derive(Default)]
pub struct DragManager {
    context: Option<DragContext>,
}

impl DragManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&DragContext> {
        self.context.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.context.is_some()
    }

    pub fn begin(&mut self, state: &mut DragState, context: DragContext, day: i64) {
        log::info!(
            "Drag started for '{}' ({} min)",
            context.event.title,
            context.duration_minutes()
        );
        state.active = true;
        state.event = Some(context.event.clone());
        state.duration_minutes = context.duration_minutes();
        state.start_minutes = context
            .hovered_minutes
            .unwrap_or_else(|| minutes_since_midnight(context.event.start.time()));
        state.start_unix.set(day);

        self.context = Some(DragContext {
            hovered_day: Some(day),
            ..context
        });
    }

    /// Pointer moved over `day` at `pointer_minutes` from midnight.
    pub fn update_hover(&mut self, state: &mut DragState, day: i64, pointer_minutes: f32) {
        let Some(context) = self.context.as_mut() else {
            return;
        };

        let start = snap_start(
            pointer_minutes - context.grab_offset_minutes,
            context.duration_minutes(),
        );
        context.hovered_day = Some(day);
        context.hovered_minutes = Some(start);

        state.start_minutes = start;
        state.start_unix.set(day);
    }

    /// Pointer left the grid; the day under it is unknown.
    pub fn clear_hover(&mut self, state: &mut DragState) {
        if self.context.is_some() {
            state.start_unix.set(NO_ACTIVE_DAY);
        }
    }

    /// End the drag and return the event moved to where it was dropped.
    pub fn finish(&mut self, state: &mut DragState) -> Option<Event> {
        let context = self.context.take()?;
        Self::reset(state);

        let start = context.hovered_start()?;
        let moved = context.event.moved_to(start);
        log::info!("Drag dropped '{}' at {}", moved.title, moved.start);
        Some(moved)
    }

    pub fn cancel(&mut self, state: &mut DragState) {
        if self.context.take().is_some() {
            log::info!("Drag cancelled");
        }
        Self::reset(state);
    }

    fn reset(state: &mut DragState) {
        state.active = false;
        state.event = None;
        state.start_unix.set(NO_ACTIVE_DAY);
    }
}
