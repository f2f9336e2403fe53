//! Mount point for the dragging overlay.

use egui::Painter;

use super::dragging_event::DraggingEvent;
use super::render_props::{DraggingEventRenderer, EventContentRenderer, OverlayFrame};
use super::theme::ContainerStyle;
use crate::services::visibility::OverlayVisibility;

/// Shows nothing unless a drag is active. During a drag it hands the whole
/// overlay to `render_dragging_event` when one is set, otherwise it paints
/// the built-in [`DraggingEvent`].
#[derive(Default)]
pub struct DraggingEventWrapper<'a> {
    render_event: Option<&'a dyn EventContentRenderer>,
    render_dragging_event: Option<&'a dyn DraggingEventRenderer>,
    container_style: Option<ContainerStyle>,
}

impl<'a> DraggingEventWrapper<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_event(mut self, renderer: &'a dyn EventContentRenderer) -> Self {
        self.render_event = Some(renderer);
        self
    }

    pub fn render_dragging_event(mut self, renderer: &'a dyn DraggingEventRenderer) -> Self {
        self.render_dragging_event = Some(renderer);
        self
    }

    pub fn container_style(mut self, style: ContainerStyle) -> Self {
        self.container_style = Some(style);
        self
    }

    pub fn show(&self, painter: &Painter, frame: &OverlayFrame<'_>) -> OverlayVisibility {
        let visibility =
            OverlayVisibility::decide(frame.drag.active, self.render_dragging_event.is_some());

        match visibility {
            OverlayVisibility::Hidden => {}
            OverlayVisibility::Delegated => {
                if let Some(renderer) = self.render_dragging_event {
                    renderer.render(painter, frame, self.render_event);
                }
            }
            OverlayVisibility::BuiltIn => {
                let mut overlay = DraggingEvent::new().render_event(self.render_event);
                if let Some(style) = self.container_style {
                    overlay = overlay.container_style(style);
                }
                overlay.paint(painter, frame);
            }
        }

        visibility
    }
}
