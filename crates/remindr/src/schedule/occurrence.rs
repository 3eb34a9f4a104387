//! # Occurrence Calculator
//!
//! Computes the next firing instant of a reminder relative to a caller-supplied
//! `now`.
//!
//! ## Rules
//!
//! - **once**: the stored `date`, unchanged.
//! - **permanent**: no single next instant (`None`).
//! - **repeat**: the hour and minute of `date` are combined with `now`'s
//!   calendar date to form the *candidate* (seconds zeroed). The candidate is
//!   *past* when it is at or before `now`.
//!   - `day`: past candidates move to tomorrow.
//!   - `week`: the first selected weekday after today, or today itself when
//!     the candidate is not past. Otherwise the first selected weekday of
//!     next week.
//!   - `month`: the same with days of the month. Days a month does not have
//!     (the 31st in April) are skipped, so the result is always a real date.
//!
//! A repeating reminder with no usable day selection degrades to the `day`
//! rule and logs a warning; scheduling loops must never fail on bad data.
//!
//! The stored `selectedDays` are never reordered in place; a sorted copy is
//! taken per call.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::warn;

use super::calendar::{add_days, add_months, at_time, days_in_month, weekday_index, Calendar};
use crate::model::{Mode, RecurringMode, Reminder};

/// Next firing instant of `reminder` as seen at `now`.
pub fn next_occurrence(reminder: &Reminder, now: i64, calendar: &Calendar) -> Option<i64> {
    match reminder.mode {
        Mode::Once => reminder.date,
        Mode::Permanent => None,
        Mode::Repeat => next_repeat(reminder, now, calendar),
    }
}

fn next_repeat(reminder: &Reminder, now: i64, calendar: &Calendar) -> Option<i64> {
    let (hour, minute) = calendar.time_of_day(reminder.date?)?;
    let today = calendar.local(now)?.date();
    let candidate = at_time(today, hour, minute)?;
    let past = calendar.instant(candidate) <= now;

    let next = match reminder.recurring_mode {
        Some(RecurringMode::Day) => daily(candidate, past)?,
        Some(RecurringMode::Week) => match usable_days(reminder, 0..=6) {
            Some(days) => weekly(candidate, &days, past)?,
            None => fallback(reminder, candidate, past)?,
        },
        Some(RecurringMode::Month) => match usable_days(reminder, 1..=31) {
            Some(days) => monthly(today, hour, minute, &days, past)?,
            None => fallback(reminder, candidate, past)?,
        },
        None => fallback(reminder, candidate, past)?,
    };

    Some(calendar.instant(next))
}

fn daily(candidate: NaiveDateTime, past: bool) -> Option<NaiveDateTime> {
    if past {
        add_days(candidate, 1)
    } else {
        Some(candidate)
    }
}

fn weekly(candidate: NaiveDateTime, days: &[u32], past: bool) -> Option<NaiveDateTime> {
    let today = weekday_index(candidate.date());

    let this_week = days
        .iter()
        .copied()
        .find(|&day| day > today || (day == today && !past));

    match this_week {
        Some(day) => add_days(candidate, i64::from(day) - i64::from(today)),
        None => add_days(candidate, 7 + i64::from(days[0]) - i64::from(today)),
    }
}

fn monthly(
    today: NaiveDate,
    hour: u32,
    minute: u32,
    days: &[u32],
    past: bool,
) -> Option<NaiveDateTime> {
    let current = today.day();
    let this_month = days.iter().copied().find(|&day| {
        (day > current || (day == current && !past)) && fits(today, day)
    });
    if let Some(day) = this_month {
        return at_time(today.with_day(day)?, hour, minute);
    }

    // Every day in 1..=31 exists at least once in any 12 consecutive months.
    let first = today.with_day(1)?;
    for ahead in 1..=12 {
        let month = add_months(first, ahead)?;
        if let Some(day) = days.iter().copied().find(|&day| fits(month, day)) {
            return at_time(month.with_day(day)?, hour, minute);
        }
    }
    None
}

fn fits(month: NaiveDate, day: u32) -> bool {
    day <= days_in_month(month.year(), month.month())
}

fn usable_days(reminder: &Reminder, range: std::ops::RangeInclusive<u32>) -> Option<Vec<u32>> {
    let days: Vec<u32> = reminder
        .sorted_days()
        .into_iter()
        .filter(|day| range.contains(day))
        .collect();
    (!days.is_empty()).then_some(days)
}

fn fallback(reminder: &Reminder, candidate: NaiveDateTime, past: bool) -> Option<NaiveDateTime> {
    warn!(
        reminder = %reminder.id,
        recurring_mode = ?reminder.recurring_mode,
        selected_days = ?reminder.selected_days,
        "repeating reminder has no usable recurrence, scheduling daily"
    );
    daily(candidate, past)
}
