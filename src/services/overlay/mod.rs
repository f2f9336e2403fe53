//! Per-frame glue between the drag state and the animated column offset.
//!
//! The offset animator only exists while a drag is active, the same way the
//! overlay is only mounted while dragging. A new drag starts from a freshly
//! computed column rather than sliding in from wherever the last one ended.

use std::time::Duration;

use crate::models::drag_state::DragState;
use crate::models::visible_dates::VisibleDateIndex;
use crate::services::day_index::DayOffsetAnimator;

#[derive(Debug, Clone)]
pub struct OverlayController {
    animator: Option<DayOffsetAnimator>,
    transition: Duration,
}

impl OverlayController {
    pub fn new(transition: Duration) -> Self {
        Self {
            animator: None,
            transition,
        }
    }

    /// Advance one frame. Returns the column offset while a drag is active.
    pub fn update(
        &mut self,
        drag: &DragState,
        index: &VisibleDateIndex,
        anchor_day: i64,
        columns: usize,
        dt: Duration,
    ) -> Option<f32> {
        if !drag.active {
            if self.animator.take().is_some() {
                log::debug!("Drag ended, releasing column animator");
            }
            return None;
        }

        let transition = self.transition;
        let animator = self.animator.get_or_insert_with(|| {
            DayOffsetAnimator::new(&drag.start_unix, index, anchor_day, columns, transition)
        });
        animator.sync(&drag.start_unix, index, anchor_day, columns);
        animator.tick(dt);

        Some(animator.offset())
    }

    pub fn offset(&self) -> Option<f32> {
        self.animator.as_ref().map(DayOffsetAnimator::offset)
    }

    /// True while the offset is still sliding and frames should keep coming
    pub fn is_animating(&self) -> bool {
        self.animator
            .as_ref()
            .is_some_and(DayOffsetAnimator::is_animating)
    }
}
