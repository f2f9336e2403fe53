//! Time grid painting and pointer mapping for the week view.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use super::theme::OverlayTheme;
use crate::models::event::Event;
use crate::models::visible_dates::VisibleDateIndex;
use crate::services::geometry::{OverlayGeometry, OverlayLayout};
use crate::utils::date::{day_unix, minutes_since_midnight, SECONDS_PER_DAY};

/// Day timestamp and minute-of-day under `pos`.
///
/// Columns left or right of the window map to days outside it.
pub fn pointer_to_slot(pos: Pos2, origin: Pos2, layout: &OverlayLayout, first_day: i64) -> (i64, f32) {
    let column_width = layout.column_width.max(1.0);
    let column = ((pos.x - origin.x - layout.hour_axis_width) / column_width).floor() as i64;
    let minutes = (pos.y - origin.y) / layout.minute_height + layout.day_start_minutes;
    (first_day + column * SECONDS_PER_DAY, minutes)
}

/// Screen rect of a stored event, if its day is in the window.
pub fn event_rect(
    event: &Event,
    index: &VisibleDateIndex,
    origin: Pos2,
    layout: &OverlayLayout,
) -> Option<Rect> {
    let column = index.position(day_unix(event.start.date_naive()))?;
    let start = minutes_since_midnight(event.start.time());
    let duration = event.duration().num_minutes() as f32;
    Some(OverlayGeometry::project(start, duration, column as f32, layout).to_rect(origin))
}

/// Topmost event under `pos`.
pub fn hit_test<'e>(
    events: &'e [Event],
    pos: Pos2,
    index: &VisibleDateIndex,
    origin: Pos2,
    layout: &OverlayLayout,
) -> Option<(usize, &'e Event)> {
    events
        .iter()
        .enumerate()
        .rev()
        .find(|(_, event)| event_rect(event, index, origin, layout).is_some_and(|r| r.contains(pos)))
}

pub fn paint_time_grid(
    painter: &Painter,
    body: Rect,
    layout: &OverlayLayout,
    day_end_minutes: f32,
    theme: &OverlayTheme,
) {
    painter.rect_filled(body, 0.0, theme.grid_background);

    let line = Stroke::new(1.0, theme.grid_line);
    let first_hour = (layout.day_start_minutes / 60.0).ceil() as u32;
    let last_hour = (day_end_minutes / 60.0).floor() as u32;
    for hour in first_hour..=last_hour {
        let y = body.top() + (hour as f32 * 60.0 - layout.day_start_minutes) * layout.minute_height;
        painter.line_segment(
            [Pos2::new(body.left() + layout.hour_axis_width, y), Pos2::new(body.right(), y)],
            line,
        );
        if hour < 24 {
            painter.text(
                Pos2::new(body.left() + layout.hour_axis_width - 5.0, y),
                Align2::RIGHT_TOP,
                format!("{:02}:00", hour),
                FontId::proportional(12.0),
                theme.text_secondary,
            );
        }
    }

    for column in 0..=layout.columns {
        let x = body.left() + layout.hour_axis_width + column as f32 * layout.column_width;
        painter.line_segment([Pos2::new(x, body.top()), Pos2::new(x, body.bottom())], line);
    }
}

pub fn paint_event(painter: &Painter, rect: Rect, event: &Event, theme: &OverlayTheme, dimmed: bool) {
    let base = event
        .color
        .as_deref()
        .and_then(|hex| OverlayTheme::hex_to_color(hex).ok())
        .unwrap_or(theme.primary);
    let fill = if dimmed { base.gamma_multiply(0.35) } else { base };

    painter.rect_filled(rect.shrink2(egui::vec2(2.0, 1.0)), 3.0, fill);
    painter.text(
        rect.left_top() + egui::vec2(5.0, 3.0),
        Align2::LEFT_TOP,
        &event.title,
        FontId::proportional(12.0),
        Color32::WHITE,
    );
}
