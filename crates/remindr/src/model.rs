//! # Domain Model: Reminders and Partial Updates
//!
//! This module defines the [`Reminder`] record, the closed enumerations that
//! drive scheduling ([`Mode`], [`RecurringMode`], [`Priority`]), and
//! [`ReminderPatch`], the partial record accepted by the store's `add`.
//!
//! ## Wire Shape
//!
//! Reminders travel between the UI, the sync layer and storage as plain JSON
//! objects with camelCase keys:
//!
//! ```text
//! {
//!   "id": "3f2c...", "type": "reminder",
//!   "title": "Stand-up", "priority": "vibrate",
//!   "mode": "repeat", "recurringMode": "week", "selectedDays": [1, 3, 5],
//!   "date": 1760781600000, "disabled": false, "localOnly": false
//! }
//! ```
//!
//! All instants are milliseconds since the Unix epoch.
//!
//! ## What `date` Means
//!
//! | Mode | Meaning of `date` |
//! |------|-------------------|
//! | `once` | Absolute firing instant |
//! | `repeat` | Only the hour and minute are used; the calendar date is ignored |
//! | `permanent` | Unused, the reminder is always on |
//!
//! ## Merging
//!
//! [`ReminderPatch::apply`] overlays a patch onto the previously stored record
//! (if any): fields present in the patch win, absent fields keep their prior
//! value. Nullable fields can be cleared explicitly with a JSON `null` (or the
//! `clear_*` builders), which is how a caller un-snoozes a reminder.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{RemindrError, Result};

/// Discriminator that lets reminders share a polymorphic collection with
/// other record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    #[default]
    Reminder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Silent,
    #[default]
    Vibrate,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Once,
    Repeat,
    Permanent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringMode {
    Day,
    Week,
    Month,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Once => write!(f, "once"),
            Self::Repeat => write!(f, "repeat"),
            Self::Permanent => write!(f, "permanent"),
        }
    }
}

impl fmt::Display for RecurringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}

/// A complete, normalized reminder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: ReminderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_mode: Option<RecurringMode>,
    /// Weekdays (0 = Sunday) for weekly recurrence, days of month (1-31) for
    /// monthly recurrence. Order is not significant.
    #[serde(default)]
    pub selected_days: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snooze_until: Option<i64>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub local_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<i64>,
}

impl Reminder {
    /// A bare reminder with every field at its default.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ReminderType::Reminder,
            title: None,
            description: None,
            priority: Priority::default(),
            mode: Mode::default(),
            date: None,
            recurring_mode: None,
            selected_days: Vec::new(),
            snooze_until: None,
            disabled: false,
            local_only: false,
            date_created: None,
            date_modified: None,
        }
    }

    pub fn once(id: impl Into<String>, date: i64) -> Self {
        Self {
            date: Some(date),
            ..Self::new(id)
        }
    }

    /// A repeating reminder firing at the time-of-day carried by `time`.
    pub fn repeating(
        id: impl Into<String>,
        recurring_mode: RecurringMode,
        selected_days: Vec<u32>,
        time: i64,
    ) -> Self {
        Self {
            mode: Mode::Repeat,
            recurring_mode: Some(recurring_mode),
            selected_days,
            date: Some(time),
            ..Self::new(id)
        }
    }

    pub fn permanent(id: impl Into<String>) -> Self {
        Self {
            mode: Mode::Permanent,
            ..Self::new(id)
        }
    }

    pub fn snoozed_until(mut self, until: i64) -> Self {
        self.snooze_until = Some(until);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The selected days in ascending order, without duplicates.
    /// The stored vector is left untouched.
    pub fn sorted_days(&self) -> Vec<u32> {
        let mut days = self.selected_days.clone();
        days.sort_unstable();
        days.dedup();
        days
    }

    /// Check that a repeating reminder carries what its recurrence needs.
    ///
    /// Scheduling never calls this: a malformed record still gets a best-effort
    /// occurrence. Editors and importers use it to reject bad input early.
    pub fn validate(&self) -> Result<()> {
        if self.mode != Mode::Repeat {
            return Ok(());
        }

        let recurring = self.recurring_mode.ok_or_else(|| {
            RemindrError::MalformedRecurrence(format!(
                "reminder {} repeats without a recurring mode",
                self.id
            ))
        })?;

        let valid_range = match recurring {
            RecurringMode::Day => return Ok(()),
            RecurringMode::Week => 0..=6,
            RecurringMode::Month => 1..=31,
        };

        if self.selected_days.is_empty() {
            return Err(RemindrError::MalformedRecurrence(format!(
                "{} recurrence of reminder {} has no selected days",
                recurring, self.id
            )));
        }

        if let Some(day) = self
            .selected_days
            .iter()
            .find(|day| !valid_range.contains(*day))
        {
            return Err(RemindrError::MalformedRecurrence(format!(
                "day {} is out of range for {} recurrence of reminder {}",
                day, recurring, self.id
            )));
        }

        Ok(())
    }
}

/// Generate a fresh reminder id.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
fn nullable<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A partial reminder as supplied by a caller of `add`.
///
/// Outer `None` means "keep the stored value". For nullable fields
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub date: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub recurring_mode: Option<Option<RecurringMode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_days: Option<Vec<u32>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub snooze_until: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<i64>,
    /// Set on records that arrive through synchronization. Such records must
    /// not go through `add`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub remote: bool,
}

impl ReminderPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Some(title.into()));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_date(mut self, date: i64) -> Self {
        self.date = Some(Some(date));
        self
    }

    pub fn with_recurrence(mut self, recurring_mode: RecurringMode, days: Vec<u32>) -> Self {
        self.mode = Some(Mode::Repeat);
        self.recurring_mode = Some(Some(recurring_mode));
        self.selected_days = Some(days);
        self
    }

    pub fn with_snooze_until(mut self, until: i64) -> Self {
        self.snooze_until = Some(Some(until));
        self
    }

    pub fn clear_snooze(mut self) -> Self {
        self.snooze_until = Some(None);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn with_local_only(mut self, local_only: bool) -> Self {
        self.local_only = Some(local_only);
        self
    }

    pub fn with_remote(mut self) -> Self {
        self.remote = true;
        self
    }

    /// Overlay this patch onto `existing` and normalize the result.
    ///
    /// `id` is the already-resolved id; it always wins over the existing
    /// record's id. Defaults: `mode = once`, `priority = vibrate`,
    /// `selectedDays = []`.
    pub fn apply(self, id: String, existing: Option<Reminder>) -> Reminder {
        let base = existing.unwrap_or_else(|| Reminder::new(id.clone()));

        Reminder {
            id,
            kind: ReminderType::Reminder,
            title: self.title.unwrap_or(base.title),
            description: self.description.unwrap_or(base.description),
            priority: self.priority.unwrap_or(base.priority),
            mode: self.mode.unwrap_or(base.mode),
            date: self.date.unwrap_or(base.date),
            recurring_mode: self.recurring_mode.unwrap_or(base.recurring_mode),
            selected_days: self.selected_days.unwrap_or(base.selected_days),
            snooze_until: self.snooze_until.unwrap_or(base.snooze_until),
            disabled: self.disabled.unwrap_or(base.disabled),
            local_only: self.local_only.unwrap_or(base.local_only),
            date_created: self.date_created.or(base.date_created),
            date_modified: self.date_modified.or(base.date_modified),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let r = Reminder::new("r1");
        assert_eq!(r.kind, ReminderType::Reminder);
        assert_eq!(r.mode, Mode::Once);
        assert_eq!(r.priority, Priority::Vibrate);
        assert!(r.selected_days.is_empty());
        assert!(!r.disabled);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        // Only the id is mandatory on the wire.
        let json = r#"{ "id": "r1", "date": 500 }"#;
        let r: Reminder = serde_json::from_str(json).unwrap();
        assert_eq!(r.mode, Mode::Once);
        assert_eq!(r.priority, Priority::Vibrate);
        assert_eq!(r.date, Some(500));
        assert!(r.recurring_mode.is_none());
        assert!(!r.local_only);
    }

    #[test]
    fn test_serializes_camel_case_with_type_tag() {
        let r = Reminder::repeating("r1", RecurringMode::Week, vec![1, 3], 0);
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["type"], "reminder");
        assert_eq!(value["mode"], "repeat");
        assert_eq!(value["recurringMode"], "week");
        assert_eq!(value["selectedDays"], serde_json::json!([1, 3]));
        assert!(value.get("snoozeUntil").is_none());
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let json = r#"{ "id": "r1", "mode": "hourly" }"#;
        assert!(serde_json::from_str::<Reminder>(json).is_err());
    }

    #[test]
    fn test_sorted_days_leaves_original_untouched() {
        let r = Reminder::repeating("r1", RecurringMode::Week, vec![5, 1, 3, 1], 0);
        assert_eq!(r.sorted_days(), vec![1, 3, 5]);
        assert_eq!(r.selected_days, vec![5, 1, 3, 1]);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(Reminder::once("a", 1).validate().is_ok());
        assert!(Reminder::permanent("b").validate().is_ok());
        assert!(Reminder::repeating("c", RecurringMode::Day, vec![], 0)
            .validate()
            .is_ok());
        assert!(Reminder::repeating("d", RecurringMode::Month, vec![1, 31], 0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_missing_recurring_mode() {
        let mut r = Reminder::new("r1");
        r.mode = Mode::Repeat;
        match r.validate() {
            Err(RemindrError::MalformedRecurrence(msg)) => assert!(msg.contains("r1")),
            other => panic!("Expected MalformedRecurrence, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_and_out_of_range_days() {
        let empty = Reminder::repeating("r1", RecurringMode::Week, vec![], 0);
        assert!(matches!(
            empty.validate(),
            Err(RemindrError::MalformedRecurrence(_))
        ));

        let weekday = Reminder::repeating("r2", RecurringMode::Week, vec![7], 0);
        assert!(matches!(
            weekday.validate(),
            Err(RemindrError::MalformedRecurrence(_))
        ));

        let month_day = Reminder::repeating("r3", RecurringMode::Month, vec![0], 0);
        assert!(matches!(
            month_day.validate(),
            Err(RemindrError::MalformedRecurrence(_))
        ));
    }

    #[test]
    fn test_apply_without_existing_uses_defaults() {
        let r = ReminderPatch::new().with_title("A").apply("r1".into(), None);
        assert_eq!(r.id, "r1");
        assert_eq!(r.title.as_deref(), Some("A"));
        assert_eq!(r.mode, Mode::Once);
        assert_eq!(r.priority, Priority::Vibrate);
        assert!(r.selected_days.is_empty());
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut existing = Reminder::once("r1", 100);
        existing.title = Some("A".into());
        existing.description = Some("keep me".into());
        existing.priority = Priority::Urgent;

        let merged = ReminderPatch::new()
            .with_title("B")
            .with_date(500)
            .apply("r1".into(), Some(existing));

        assert_eq!(merged.title.as_deref(), Some("B"));
        assert_eq!(merged.date, Some(500));
        assert_eq!(merged.description.as_deref(), Some("keep me"));
        assert_eq!(merged.priority, Priority::Urgent);
    }

    #[test]
    fn test_patch_null_clears_snooze() {
        let existing = Reminder::once("r1", 100).snoozed_until(900);
        let patch: ReminderPatch = serde_json::from_str(r#"{ "snoozeUntil": null }"#).unwrap();
        assert_eq!(patch.snooze_until, Some(None));

        let merged = patch.apply("r1".into(), Some(existing));
        assert!(merged.snooze_until.is_none());
    }

    #[test]
    fn test_patch_absent_key_keeps_snooze() {
        let existing = Reminder::once("r1", 100).snoozed_until(900);
        let patch: ReminderPatch = serde_json::from_str(r#"{ "title": "x" }"#).unwrap();
        let merged = patch.apply("r1".into(), Some(existing));
        assert_eq!(merged.snooze_until, Some(900));
    }

    #[test]
    fn test_patch_remote_flag() {
        let patch: ReminderPatch = serde_json::from_str(r#"{ "remote": true }"#).unwrap();
        assert!(patch.remote);
        assert!(ReminderPatch::new().with_remote().remote);
    }

    #[test]
    fn test_generate_id_is_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }
}
