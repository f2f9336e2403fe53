use std::time::Duration;

use super::resolver::resolve_day_index;
use crate::models::drag_state::NO_ACTIVE_DAY;
use crate::models::visible_dates::VisibleDateIndex;
use crate::services::animation::Tween;
use crate::services::signal::{Reaction, Signal};

/// Column of `drag_day` counted from the window anchor, pinned to the
/// visible columns.
pub fn compute_offset(
    drag_day: i64,
    index: &VisibleDateIndex,
    anchor_day: i64,
    columns: usize,
) -> usize {
    let current = resolve_day_index(drag_day, index) as i64;
    let start = resolve_day_index(anchor_day, index) as i64;
    let last_column = columns.max(1) as i64 - 1;
    (current - start).clamp(0, last_column) as usize
}

/// Animated column offset of the dragged event.
///
/// Reacts to writes of the drag-day signal and slides toward the new column
/// instead of jumping to it.
#[derive(Debug, Clone)]
pub struct DayOffsetAnimator {
    tween: Tween,
    reaction: Reaction,
}

impl DayOffsetAnimator {
    /// The starting column is computed right away from the current drag day.
    pub fn new(
        drag_day: &Signal<i64>,
        index: &VisibleDateIndex,
        anchor_day: i64,
        columns: usize,
        transition: Duration,
    ) -> Self {
        let initial = compute_offset(drag_day.value(), index, anchor_day, columns);
        Self {
            tween: Tween::settled(initial as f32, transition),
            reaction: Reaction::primed(drag_day),
        }
    }

    /// Retarget if the drag day has been written since the last sync.
    ///
    /// Returns the new target column when a retarget happened.
    pub fn sync(
        &mut self,
        drag_day: &Signal<i64>,
        index: &VisibleDateIndex,
        anchor_day: i64,
        columns: usize,
    ) -> Option<usize> {
        let day = *self.reaction.changed(drag_day)?;
        if day == NO_ACTIVE_DAY {
            return None;
        }

        let target = compute_offset(day, index, anchor_day, columns);
        log::debug!(
            "Drag day {} -> column {} (was heading to {})",
            day,
            target,
            self.tween.target()
        );
        self.tween.retarget(target as f32);
        Some(target)
    }

    pub fn tick(&mut self, dt: Duration) {
        self.tween.tick(dt);
    }

    /// Current, possibly fractional, column offset
    pub fn offset(&self) -> f32 {
        self.tween.value()
    }

    pub fn target(&self) -> f32 {
        self.tween.target()
    }

    pub fn is_animating(&self) -> bool {
        !self.tween.is_complete()
    }
}
