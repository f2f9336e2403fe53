mod app;
pub mod drag;
mod drag_dot;
pub mod dragging_event;
pub mod render_props;
pub mod theme;
pub mod time_grid;
pub mod wrapper;

pub use app::DragOverlayApp;
pub use dragging_event::{DraggingEvent, OverlayContent, PaintedOverlay};
pub use render_props::{
    ContentSize, DraggingEventRenderer, EdgeRenderer, EventContentRenderer, OverlayFrame,
};
pub use wrapper::DraggingEventWrapper;
