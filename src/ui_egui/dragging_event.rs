//! Built-in dragging overlay.
//!
//! Paints the provisional event box at its projected geometry, fills it
//! with either the caller's content renderer or the event title, and adds
//! the top and bottom drag handles.

use egui::{FontId, Painter, Rect, Stroke, Vec2};

use super::drag_dot::draw_drag_dot;
use super::render_props::{EdgeRenderer, EventContentRenderer, OverlayFrame};
use super::theme::ContainerStyle;
use crate::services::geometry::HandleLayout;

/// What ended up inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayContent {
    /// Content renderer ran; `false` if it chose to draw nothing
    Custom(bool),
    Title,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedOverlay {
    pub rect: Rect,
    pub content: OverlayContent,
}

#[derive(Default)]
pub struct DraggingEvent<'a> {
    render_event: Option<&'a dyn EventContentRenderer>,
    top_edge: Option<&'a dyn EdgeRenderer>,
    bottom_edge: Option<&'a dyn EdgeRenderer>,
    container_style: Option<ContainerStyle>,
}

impl<'a> DraggingEvent<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_event(mut self, renderer: Option<&'a dyn EventContentRenderer>) -> Self {
        self.render_event = renderer;
        self
    }

    pub fn top_edge(mut self, edge: &'a dyn EdgeRenderer) -> Self {
        self.top_edge = Some(edge);
        self
    }

    pub fn bottom_edge(mut self, edge: &'a dyn EdgeRenderer) -> Self {
        self.bottom_edge = Some(edge);
        self
    }

    pub fn container_style(mut self, style: ContainerStyle) -> Self {
        self.container_style = Some(style);
        self
    }

    pub fn paint(&self, painter: &Painter, frame: &OverlayFrame<'_>) -> PaintedOverlay {
        let rect = frame.event_rect();
        let style = frame.theme.box_style(
            frame.drag.color(),
            frame.settings,
            self.container_style.as_ref(),
        );

        painter.rect_filled(rect, style.corner_radius, style.fill);

        let inner = rect.shrink(style.border_width);
        let clipped = painter.with_clip_rect(inner.intersect(painter.clip_rect()));
        let content = match self.render_event {
            Some(renderer) => OverlayContent::Custom(renderer.render(
                &clipped,
                inner,
                frame.drag.event.as_ref(),
                frame.content_size(),
            )),
            None => match frame.drag.title() {
                Some(title) => {
                    let title_style = frame.theme.title_style(frame.settings);
                    let wrap_width = (inner.width() - 2.0 * title_style.padding).max(0.0);
                    let galley = clipped.layout(
                        title.to_owned(),
                        FontId::proportional(title_style.font_size),
                        title_style.color,
                        wrap_width,
                    );
                    clipped.galley(
                        inner.left_top() + Vec2::new(title_style.padding, 0.0),
                        galley,
                        title_style.color,
                    );
                    OverlayContent::Title
                }
                None => OverlayContent::Empty,
            },
        };

        // Stroke is centred on the path, keep it inside the box
        painter.rect_stroke(
            rect.shrink(style.border_width / 2.0),
            style.corner_radius,
            Stroke::new(style.border_width, style.border_color),
        );

        let handles = HandleLayout::compute(
            rect,
            frame.layout.visible_days,
            frame.settings.handle_size,
            frame.settings.handle_outset,
        );
        match self.top_edge {
            Some(edge) => edge.render(painter, rect),
            None => draw_drag_dot(painter, handles.top, frame.theme.primary),
        }
        match self.bottom_edge {
            Some(edge) => edge.render(painter, rect),
            None => draw_drag_dot(painter, handles.bottom, frame.theme.primary),
        }

        PaintedOverlay { rect, content }
    }
}
