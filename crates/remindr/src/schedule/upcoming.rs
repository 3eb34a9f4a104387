//! Ranking reminders by their effective firing time.
//!
//! The effective time of a reminder is its next occurrence: the stored date
//! for one-shot reminders, the computed occurrence for repeating ones, and
//! nothing for permanent ones.
//!
//! Ranking is **latest first**, so [`select_next_upcoming`] returns the
//! reminder whose effective time is furthest ahead. It does no filtering.
//! Callers wanting the soonest reminder use `RemindrApi::next_upcoming`.
//!
//! A reminder without an effective time ranks equal to everything: it never
//! moves, and timed reminders never move past it.

use super::calendar::Calendar;
use super::occurrence::next_occurrence;
use crate::model::Reminder;

/// Reminders ordered by effective time, latest first.
///
/// The ordering is a stable insertion: an entry moves ahead of its
/// predecessor only when both have an effective time and its own is later.
/// Equal times keep their input order.
pub fn rank_upcoming<'a>(
    reminders: &'a [Reminder],
    now: i64,
    calendar: &Calendar,
) -> Vec<&'a Reminder> {
    let mut ranked: Vec<(Option<i64>, &Reminder)> = Vec::with_capacity(reminders.len());
    for reminder in reminders {
        let at = next_occurrence(reminder, now, calendar);
        let mut pos = ranked.len();
        while pos > 0 {
            match (ranked[pos - 1].0, at) {
                (Some(prev), Some(cur)) if cur > prev => pos -= 1,
                _ => break,
            }
        }
        ranked.insert(pos, (at, reminder));
    }
    ranked.into_iter().map(|(_, r)| r).collect()
}

pub fn select_next_upcoming<'a>(
    reminders: &'a [Reminder],
    now: i64,
    calendar: &Calendar,
) -> Option<&'a Reminder> {
    rank_upcoming(reminders, now, calendar).into_iter().next()
}
