use crate::models::visible_dates::VisibleDateIndex;

/// Element of `values` closest to `target`.
///
/// Ties go to the element encountered first. `None` only for an empty slice.
pub fn find_nearest(values: &[i64], target: i64) -> Option<i64> {
    let mut best: Option<(i64, i128)> = None;
    for &value in values {
        let distance = (value as i128 - target as i128).abs();
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((value, distance)),
        }
    }
    best.map(|(value, _)| value)
}

/// Column of `target` within the visible window.
///
/// Days outside the window resolve to the column of the nearest visible day.
/// When nothing usable can be found the result is column 0.
pub fn resolve_day_index(target: i64, index: &VisibleDateIndex) -> usize {
    if let Some(position) = index.position(target) {
        return position;
    }

    let nearest = find_nearest(index.dates(), target);
    match nearest.and_then(|day| index.position(day)) {
        Some(position) => position,
        None => {
            log::debug!(
                "No column for day {} (nearest {:?}), falling back to column 0",
                target,
                nearest
            );
            0
        }
    }
}
