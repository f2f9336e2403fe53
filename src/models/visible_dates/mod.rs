//! Window of day timestamps currently materialised by the calendar grid.
//!
//! The calendar body owns the index and rebuilds it when the user scrolls;
//! the drag overlay only ever reads it.

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use thiserror::Error;

use crate::utils::date::day_unix;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisibleDateError {
    #[error("visible dates must be ascending: {previous} is followed by {next}")]
    NotAscending { previous: i64, next: i64 },
    #[error("visible date {0} appears more than once")]
    Duplicate(i64),
}

/// Ordered day timestamps plus a lookup from timestamp to column position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleDateIndex {
    dates: Vec<i64>,
    positions: HashMap<i64, usize>,
}

impl VisibleDateIndex {
    /// Build an index from ascending, distinct day timestamps.
    pub fn new(dates: Vec<i64>) -> Result<Self, VisibleDateError> {
        for pair in dates.windows(2) {
            if pair[0] == pair[1] {
                return Err(VisibleDateError::Duplicate(pair[0]));
            }
            if pair[0] > pair[1] {
                return Err(VisibleDateError::NotAscending {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }

        let positions = dates
            .iter()
            .enumerate()
            .map(|(index, day)| (*day, index))
            .collect();

        Ok(Self { dates, positions })
    }

    /// `count` consecutive days starting at `start`.
    pub fn from_start_date(start: NaiveDate, count: usize) -> Self {
        let dates = (0..count as i64)
            .map(|offset| day_unix(start + Duration::days(offset)))
            .collect();
        Self::new(dates).unwrap_or_default()
    }

    /// Assemble an index without checking that the two halves agree.
    ///
    /// Lookups against such an index fall back to column 0 where the
    /// mapping is missing.
    pub fn from_parts(dates: Vec<i64>, positions: HashMap<i64, usize>) -> Self {
        Self { dates, positions }
    }

    pub fn dates(&self) -> &[i64] {
        &self.dates
    }

    pub fn position(&self, day: i64) -> Option<usize> {
        self.positions.get(&day).copied()
    }

    pub fn first(&self) -> Option<i64> {
        self.dates.first().copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
