//! Default round drag handle drawn on the dragged box corners.

use egui::{Color32, Painter, Rect, Stroke};

/// Ring radius as a share of the hit box
const DOT_SCALE: f32 = 0.3;

/// Draw a drag dot centred in `hit_rect`.
pub fn draw_drag_dot(painter: &Painter, hit_rect: Rect, color: Color32) {
    let center = hit_rect.center();
    let radius = hit_rect.width().min(hit_rect.height()) * DOT_SCALE;

    painter.circle_filled(center, radius, Color32::WHITE);
    painter.circle_stroke(center, radius, Stroke::new(2.0, color));
    painter.circle_filled(center, radius * 0.45, color);
}
