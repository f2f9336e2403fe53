// Property-based tests for day-index resolution, offsets and geometry
// Checks the resolver and offset invariants over random windows and targets

use proptest::prelude::*;
use rust_calendar_drag::models::drag_state::NO_ACTIVE_DAY;
use rust_calendar_drag::models::visible_dates::VisibleDateIndex;
use rust_calendar_drag::services::day_index::{
    compute_offset, find_nearest, resolve_day_index, DayOffsetAnimator,
};
use rust_calendar_drag::services::geometry::{OverlayGeometry, OverlayLayout};
use rust_calendar_drag::services::signal::Signal;
use std::time::Duration;

/// Ascending distinct timestamps, from a start and strictly positive gaps.
fn window() -> impl Strategy<Value = Vec<i64>> {
    (-1_000_000i64..1_000_000, prop::collection::vec(1i64..100_000, 1..30)).prop_map(
        |(start, gaps)| {
            let mut day = start;
            gaps.into_iter()
                .map(|gap| {
                    let current = day;
                    day += gap;
                    current
                })
                .collect()
        },
    )
}

proptest! {
    /// Property: members resolve to exactly their recorded position
    #[test]
    fn prop_members_resolve_to_their_position(dates in window()) {
        let index = VisibleDateIndex::new(dates.clone()).unwrap();
        for (position, day) in dates.iter().enumerate() {
            prop_assert_eq!(resolve_day_index(*day, &index), position);
        }
    }

    /// Property: non-members resolve to a position whose day is at minimal distance,
    /// and the first such position in order
    #[test]
    fn prop_non_members_resolve_to_nearest(dates in window(), target in -3_000_000i64..3_000_000) {
        prop_assume!(!dates.contains(&target));
        let index = VisibleDateIndex::new(dates.clone()).unwrap();

        let resolved = resolve_day_index(target, &index);
        let best = dates.iter().map(|d| (d - target).abs()).min().unwrap();
        let first_best = dates.iter().position(|d| (d - target).abs() == best).unwrap();

        prop_assert_eq!(resolved, first_best);
        prop_assert_eq!(find_nearest(&dates, target), Some(dates[first_best]));
        prop_assert_eq!(resolve_day_index(target, &index), resolved);
    }

    /// Property: offsets always land on a visible column
    #[test]
    fn prop_offset_within_columns(
        dates in window(),
        drag in any::<i64>(),
        anchor in any::<i64>(),
        columns in 0usize..14,
    ) {
        let index = VisibleDateIndex::new(dates).unwrap();
        let offset = compute_offset(drag, &index, anchor, columns);
        prop_assert!(offset < columns.max(1));
    }

    /// Property: the anchor's own day has offset zero
    #[test]
    fn prop_same_day_is_zero(dates in window(), day in any::<i64>(), columns in 1usize..14) {
        let index = VisibleDateIndex::new(dates).unwrap();
        prop_assert_eq!(compute_offset(day, &index, day, columns), 0);
    }

    /// Property: a sentinel write never moves the animated offset
    #[test]
    fn prop_sentinel_holds_offset(dates in window(), pick in any::<prop::sample::Index>()) {
        let index = VisibleDateIndex::new(dates.clone()).unwrap();
        let anchor = dates[0];
        let mut day = Signal::new(dates[pick.index(dates.len())]);
        let mut animator = DayOffsetAnimator::new(&day, &index, anchor, dates.len(), Duration::from_millis(100));
        let before = animator.offset();

        day.set(NO_ACTIVE_DAY);
        prop_assert_eq!(animator.sync(&day, &index, anchor, dates.len()), None);
        animator.tick(Duration::from_millis(250));
        prop_assert_eq!(animator.offset(), before);
    }

    /// Property: geometry is linear in its inputs
    #[test]
    fn prop_geometry_formula(
        start in 0.0f32..1440.0,
        duration in 0.0f32..600.0,
        offset in 0.0f32..7.0,
        minute_height in 0.25f32..4.0,
        column_width in 10.0f32..300.0,
    ) {
        let layout = OverlayLayout {
            minute_height,
            column_width,
            hour_axis_width: 50.0,
            day_start_minutes: 0.0,
            visible_days: 7,
            columns: 7,
        };
        let geometry = OverlayGeometry::project(start, duration, offset, &layout);

        prop_assert_eq!(geometry.top, start * minute_height);
        prop_assert_eq!(geometry.height, duration * minute_height);
        prop_assert_eq!(geometry.width, column_width);
        prop_assert_eq!(geometry.left, 50.0 + column_width * offset - 1.0);
    }
}
