// Date utility functions
// Day timestamps used as keys of the visible-date window

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const MINUTES_PER_DAY: f32 = 1_440.0;

/// Seconds since the Unix epoch at UTC midnight of `date`.
pub fn day_unix(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Inverse of [`day_unix`]. Timestamps inside a day map to that day.
pub fn date_from_day_unix(day: i64) -> Option<NaiveDate> {
    chrono::DateTime::from_timestamp(day.div_euclid(SECONDS_PER_DAY) * SECONDS_PER_DAY, 0)
        .map(|dt| dt.date_naive())
}

pub fn minutes_since_midnight(time: NaiveTime) -> f32 {
    time.hour() as f32 * 60.0 + time.minute() as f32 + time.second() as f32 / 60.0
}

/// Time of day for a minute offset, clamped to the day.
pub fn time_from_minutes(minutes: f32) -> NaiveTime {
    let clamped = minutes.clamp(0.0, MINUTES_PER_DAY - 1.0).floor() as u32;
    NaiveTime::from_hms_opt(clamped / 60, clamped % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Start of the week containing `date`.
///
/// # Arguments
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}
