//! Caller-supplied rendering hooks for the dragging overlay.
//!
//! Every hook is a trait with a blanket impl for matching closures, so
//! callers can pass either a small struct or a closure.

use egui::{Painter, Pos2, Rect};

use crate::models::drag_state::DragState;
use crate::models::event::Event;
use crate::models::settings::OverlaySettings;
use crate::services::geometry::{OverlayGeometry, OverlayLayout};
use crate::ui_egui::theme::OverlayTheme;

/// Live size of the dragged box handed to content renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentSize {
    pub width: f32,
    pub height: f32,
}

/// Draws the inside of the dragged box in place of the default title.
pub trait EventContentRenderer {
    /// Returns false when nothing was drawn.
    fn render(&self, painter: &Painter, rect: Rect, event: Option<&Event>, size: ContentSize)
        -> bool;
}

impl<F> EventContentRenderer for F
where
    F: Fn(&Painter, Rect, Option<&Event>, ContentSize) -> bool,
{
    fn render(
        &self,
        painter: &Painter,
        rect: Rect,
        event: Option<&Event>,
        size: ContentSize,
    ) -> bool {
        self(painter, rect, event, size)
    }
}

/// Replacement for one of the default drag dots.
pub trait EdgeRenderer {
    /// `event_rect` is the dragged box in screen space.
    fn render(&self, painter: &Painter, event_rect: Rect);
}

impl<F> EdgeRenderer for F
where
    F: Fn(&Painter, Rect),
{
    fn render(&self, painter: &Painter, event_rect: Rect) {
        self(painter, event_rect)
    }
}

/// Takes over the whole overlay. Receives the content renderer the caller
/// configured so it can reuse it.
pub trait DraggingEventRenderer {
    fn render(
        &self,
        painter: &Painter,
        frame: &OverlayFrame<'_>,
        render_event: Option<&dyn EventContentRenderer>,
    ) -> bool;
}

impl<F> DraggingEventRenderer for F
where
    F: Fn(&Painter, &OverlayFrame<'_>, Option<&dyn EventContentRenderer>) -> bool,
{
    fn render(
        &self,
        painter: &Painter,
        frame: &OverlayFrame<'_>,
        render_event: Option<&dyn EventContentRenderer>,
    ) -> bool {
        self(painter, frame, render_event)
    }
}

/// Everything the overlay reads for one frame.
#[derive(Debug, Clone, Copy)]
pub struct OverlayFrame<'a> {
    pub drag: &'a DragState,
    pub layout: OverlayLayout,
    /// Animated column offset
    pub offset: f32,
    /// Screen position of the grid body's top-left corner
    pub origin: Pos2,
    pub theme: &'a OverlayTheme,
    pub settings: &'a OverlaySettings,
}

impl<'a> OverlayFrame<'a> {
    pub fn geometry(&self) -> OverlayGeometry {
        OverlayGeometry::project(
            self.drag.start_minutes,
            self.drag.duration_minutes,
            self.offset,
            &self.layout,
        )
    }

    pub fn event_rect(&self) -> Rect {
        self.geometry().to_rect(self.origin)
    }

    pub fn content_size(&self) -> ContentSize {
        let geometry = self.geometry();
        ContentSize {
            width: geometry.width,
            height: geometry.height,
        }
    }
}
