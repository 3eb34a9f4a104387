//! Active-state evaluation.
//!
//! A reminder is *active* when it should currently be considered fireable.
//! Precedence, highest first:
//!
//! 1. `disabled` → never active, even while snoozed.
//! 2. a snooze that has not yet elapsed → active.
//! 3. `once` → active until its date passes.
//! 4. `repeat` and `permanent` → always active; for repeating reminders only
//!    the next firing time moves.

use super::calendar::Calendar;
use super::occurrence::next_occurrence;
use crate::model::{Mode, Reminder};

pub fn is_snoozed(reminder: &Reminder, now: i64) -> bool {
    reminder.snooze_until.is_some_and(|until| until > now)
}

pub fn is_active(reminder: &Reminder, now: i64) -> bool {
    if reminder.disabled {
        return false;
    }
    if is_snoozed(reminder, now) {
        return true;
    }
    match reminder.mode {
        Mode::Once => reminder.date.is_some_and(|date| date > now),
        Mode::Repeat | Mode::Permanent => true,
    }
}

/// Whether the reminder's next firing falls on `now`'s calendar day.
/// Snoozing does not change the answer.
pub fn is_due_today(reminder: &Reminder, now: i64, calendar: &Calendar) -> bool {
    match reminder.mode {
        Mode::Permanent => true,
        Mode::Once | Mode::Repeat => next_occurrence(reminder, now, calendar)
            .is_some_and(|at| calendar.same_day(at, now)),
    }
}
