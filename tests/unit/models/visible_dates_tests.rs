// Unit tests for the visible-date index
// Exercises construction and lookups through the public API

use chrono::NaiveDate;
use rust_calendar_drag::models::visible_dates::{VisibleDateError, VisibleDateIndex};
use rust_calendar_drag::utils::date::{date_from_day_unix, day_unix};
use std::collections::HashMap;
use test_case::test_case;

#[test_case(vec![], true ; "empty window")]
#[test_case(vec![10], true ; "single day")]
#[test_case(vec![10, 20, 30], true ; "ascending")]
#[test_case(vec![10, 30, 20], false ; "out of order")]
#[test_case(vec![10, 20, 20], false ; "duplicate")]
fn test_construction(dates: Vec<i64>, valid: bool) {
    assert_eq!(VisibleDateIndex::new(dates).is_ok(), valid);
}

#[test]
fn test_error_messages_name_the_offending_days() {
    let err = VisibleDateIndex::new(vec![30, 20]).unwrap_err();
    assert_eq!(err.to_string(), "visible dates must be ascending: 30 is followed by 20");
    assert!(matches!(err, VisibleDateError::NotAscending { .. }));

    let err = VisibleDateIndex::new(vec![5, 5]).unwrap_err();
    assert_eq!(err.to_string(), "visible date 5 appears more than once");
}

#[test]
fn test_window_across_month_boundary() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 29).unwrap();
    let index = VisibleDateIndex::from_start_date(start, 5);
    let feb_2 = day_unix(NaiveDate::from_ymd_opt(2025, 2, 2).unwrap());

    assert_eq!(index.position(feb_2), Some(4));
    assert_eq!(
        index.dates().iter().filter_map(|d| date_from_day_unix(*d)).last(),
        NaiveDate::from_ymd_opt(2025, 2, 2)
    );
}

#[test]
fn test_from_parts_keeps_inconsistent_mapping() {
    let mut positions = HashMap::new();
    positions.insert(20, 5);
    let index = VisibleDateIndex::from_parts(vec![10, 20], positions);

    assert_eq!(index.len(), 2);
    assert_eq!(index.position(20), Some(5));
    assert_eq!(index.position(10), None);
}
