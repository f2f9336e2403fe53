// Test fixtures - reusable test data
// Provides consistent windows, layouts and drag states across test files
#![allow(dead_code)]

use chrono::{Duration, Local, NaiveDate, TimeZone};
use rust_calendar_drag::models::drag_state::DragState;
use rust_calendar_drag::models::event::Event;
use rust_calendar_drag::models::visible_dates::VisibleDateIndex;
use rust_calendar_drag::services::geometry::OverlayLayout;
use rust_calendar_drag::utils::date::day_unix;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday 13 Jan 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
    }

    /// Day timestamp `offset` days after Monday 13 Jan 2025
    pub fn day(offset: i64) -> i64 {
        day_unix(monday() + Duration::days(offset))
    }
}

/// Visible windows and layouts
pub mod grid {
    use super::*;

    pub fn week() -> VisibleDateIndex {
        VisibleDateIndex::from_start_date(dates::monday(), 7)
    }

    /// 100px columns, 50px hour axis, one pixel per minute
    pub fn layout(visible_days: usize) -> OverlayLayout {
        OverlayLayout {
            minute_height: 1.0,
            column_width: 100.0,
            hour_axis_width: 50.0,
            day_start_minutes: 0.0,
            visible_days,
            columns: visible_days,
        }
    }
}

/// Sample events and drag states
pub mod events {
    use super::*;

    /// Wednesday 9:00-10:00 planning meeting
    pub fn planning() -> Event {
        let start = Local.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        Event::new("Planning", start, start + Duration::hours(1))
            .and_then(|event| event.with_color("#3366CC"))
            .unwrap()
    }

    /// Active drag of `event` over `day_offset` at 9:00 for an hour
    pub fn dragging(event: Option<Event>, day_offset: i64) -> DragState {
        let mut state = DragState::idle();
        state.active = true;
        state.start_minutes = 540.0;
        state.duration_minutes = 60.0;
        state.event = event;
        state.start_unix.set(dates::day(day_offset));
        state
    }
}
