//! Calendar arithmetic on a fixed-offset wall clock.
//!
//! Instants are milliseconds since the Unix epoch. A [`Calendar`] turns them
//! into local wall-clock date-times using a fixed UTC offset and back again.
//! There is no time-zone database here: callers that need DST pick the offset
//! that applies to them before building the calendar.
//!
//! Weekdays are numbered from Sunday (`0`) to Saturday (`6`).

use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, Offset, TimeDelta,
    Timelike, Utc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    offset: FixedOffset,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}

impl Calendar {
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Returns `None` when the offset is a day or more away from UTC.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local wall-clock date-time of an instant.
    pub fn local(&self, millis: i64) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(millis)
            .map(|utc| utc.with_timezone(&self.offset).naive_local())
    }

    /// Instant of a local wall-clock date-time.
    pub fn instant(&self, local: NaiveDateTime) -> i64 {
        local.and_utc().timestamp_millis() - i64::from(self.offset.local_minus_utc()) * 1_000
    }

    pub fn same_day(&self, a: i64, b: i64) -> bool {
        match (self.local(a), self.local(b)) {
            (Some(a), Some(b)) => a.date() == b.date(),
            _ => false,
        }
    }

    pub fn weekday_of(&self, millis: i64) -> Option<u32> {
        self.local(millis).map(|dt| weekday_index(dt.date()))
    }

    pub fn day_of_month_of(&self, millis: i64) -> Option<u32> {
        self.local(millis).map(|dt| dt.day())
    }

    /// Hour and minute of an instant on this calendar.
    pub fn time_of_day(&self, millis: i64) -> Option<(u32, u32)> {
        self.local(millis).map(|dt| (dt.hour(), dt.minute()))
    }
}

pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// `None` past the end of the representable calendar.
pub fn add_days(local: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    TimeDelta::try_days(days).and_then(|delta| local.checked_add_signed(delta))
}

pub fn add_weeks(local: NaiveDateTime, weeks: i64) -> Option<NaiveDateTime> {
    TimeDelta::try_weeks(weeks).and_then(|delta| local.checked_add_signed(delta))
}

/// Chrono month addition: the day is clamped to the end of a shorter month.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .unwrap_or(28)
}

/// `date` at `hour:minute:00.000`.
pub fn at_time(date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    date.and_hms_opt(hour, minute, 0)
}
