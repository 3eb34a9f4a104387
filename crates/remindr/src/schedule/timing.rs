//! Structured timing classification for display layers.
//!
//! [`describe`] answers "what should a list row say about this reminder"
//! without producing any text: the UI turns a [`ReminderTiming`] into
//! localized strings such as "Upcoming: Tomorrow, 10:00" or "Snoozed until 9:30".

use serde::Serialize;

use super::active::is_snoozed;
use super::calendar::Calendar;
use super::occurrence::next_occurrence;
use crate::model::{Mode, Reminder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeDay {
    Yesterday,
    Today,
    Tomorrow,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingTag {
    Upcoming,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ReminderTiming {
    /// Permanent reminders have no schedule.
    Ongoing,
    Snoozed {
        until: i64,
    },
    Scheduled {
        at: i64,
        day: RelativeDay,
        tag: TimingTag,
    },
    /// No date to schedule from.
    Unscheduled,
}

pub fn relative_day(at: i64, now: i64, calendar: &Calendar) -> RelativeDay {
    let (Some(at), Some(now)) = (calendar.local(at), calendar.local(now)) else {
        return RelativeDay::Other;
    };
    match (at.date() - now.date()).num_days() {
        -1 => RelativeDay::Yesterday,
        0 => RelativeDay::Today,
        1 => RelativeDay::Tomorrow,
        _ => RelativeDay::Other,
    }
}

pub fn describe(reminder: &Reminder, now: i64, calendar: &Calendar) -> ReminderTiming {
    if reminder.mode == Mode::Permanent {
        return ReminderTiming::Ongoing;
    }
    if let Some(until) = reminder.snooze_until.filter(|_| is_snoozed(reminder, now)) {
        return ReminderTiming::Snoozed { until };
    }

    let Some(at) = next_occurrence(reminder, now, calendar) else {
        return ReminderTiming::Unscheduled;
    };
    let day = relative_day(at, now, calendar);
    let tag = match day {
        RelativeDay::Tomorrow => TimingTag::Upcoming,
        RelativeDay::Yesterday => TimingTag::Last,
        RelativeDay::Today | RelativeDay::Other if at <= now => TimingTag::Last,
        RelativeDay::Today | RelativeDay::Other => TimingTag::Upcoming,
    };

    ReminderTiming::Scheduled { at, day, tag }
}
