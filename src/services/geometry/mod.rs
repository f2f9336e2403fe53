//! Pixel geometry of the dragging overlay.
//!
//! Positions are relative to the time-grid body: `x = 0` is the left edge of
//! the hour axis and `y = 0` is the first visible minute.

use egui::{Pos2, Rect, Vec2};

/// Pulls the box one pixel left so its border sits on the grid line.
pub const BORDER_OVERLAP: f32 = 1.0;

/// Layout inputs shared with the calendar body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub minute_height: f32,
    pub column_width: f32,
    pub hour_axis_width: f32,
    pub day_start_minutes: f32,
    /// Days in the whole calendar view
    pub visible_days: usize,
    /// Day columns on screen at once
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayGeometry {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl OverlayGeometry {
    pub fn project(
        start_minutes: f32,
        duration_minutes: f32,
        offset: f32,
        layout: &OverlayLayout,
    ) -> Self {
        Self {
            top: (start_minutes - layout.day_start_minutes) * layout.minute_height,
            height: duration_minutes * layout.minute_height,
            width: layout.column_width,
            left: layout.hour_axis_width + layout.column_width * offset - BORDER_OVERLAP,
        }
    }

    /// Screen rect with the grid body's top-left corner at `origin`.
    pub fn to_rect(&self, origin: Pos2) -> Rect {
        Rect::from_min_size(
            origin + Vec2::new(self.left, self.top),
            Vec2::new(self.width, self.height),
        )
    }
}

/// Hit boxes for the default top and bottom drag dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleLayout {
    pub top: Rect,
    pub bottom: Rect,
}

impl HandleLayout {
    /// Top dot on the top-left corner, bottom dot on the bottom-right corner.
    ///
    /// Both hang `outset` pixels outside the box, except horizontally in a
    /// single-day view where there is no neighbouring column to clear.
    pub fn compute(event_rect: Rect, visible_days: usize, size: f32, outset: f32) -> Self {
        let horizontal = if visible_days == 1 { 0.0 } else { outset };
        let dot = Vec2::splat(size);

        Self {
            top: Rect::from_min_size(
                Pos2::new(event_rect.left() - horizontal, event_rect.top() - outset),
                dot,
            ),
            bottom: Rect::from_min_size(
                Pos2::new(
                    event_rect.right() + horizontal - size,
                    event_rect.bottom() + outset - size,
                ),
                dot,
            ),
        }
    }
}
