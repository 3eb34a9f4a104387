//! # API Facade
//!
//! The API layer is a **thin facade** over the store and the scheduling
//! engine. It is the single entry point for UIs and services that want
//! "as of now" answers without threading a clock and a calendar through every
//! call.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** CRUD calls to [`ReminderStore`]
//! - **Reads the clock** once per call and hands `now` to the pure
//!   functions in [`crate::schedule`]
//! - **Returns structured types**, never formatted text
//!
//! ## Picking the Next Reminder
//!
//! [`select_next_upcoming`](crate::schedule::select_next_upcoming) ranks
//! latest-first and does no filtering; it answers "which reminder fires
//! furthest ahead". [`RemindrApi::next_upcoming`] answers "which fires next":
//! among active reminders whose next firing is still ahead, the one with the
//! earliest firing, ties going to the first listed.
//!
//! ## Generic Over Backend and Clock
//!
//! `RemindrApi<B, C>`:
//! - Production: `RemindrApi<FsBackend, SystemClock>`
//! - Testing: `RemindrApi<MemBackend, MockClock>`

use crate::clock::{Clock, SystemClock};
use crate::config::RemindrConfig;
use crate::error::Result;
use crate::model::{Reminder, ReminderPatch};
use crate::schedule::{
    describe, is_active, is_due_today, next_occurrence, Calendar, ReminderTiming,
};
use crate::store::backend::CollectionBackend;
use crate::store::fs::FileStore;
use crate::store::fs_backend::FsBackend;
use crate::store::ReminderStore;

/// The main API facade for reminder operations.
pub struct RemindrApi<B: CollectionBackend, C: Clock = SystemClock> {
    store: ReminderStore<B, C>,
    calendar: Calendar,
}

impl RemindrApi<FsBackend> {
    /// File-backed API configured from `config`.
    pub fn open(config: &RemindrConfig) -> Result<Self> {
        Ok(Self::new(FileStore::from_config(config)?, config.calendar()?))
    }
}

impl<B: CollectionBackend, C: Clock> RemindrApi<B, C> {
    pub fn new(store: ReminderStore<B, C>, calendar: Calendar) -> Self {
        Self { store, calendar }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn store(&self) -> &ReminderStore<B, C> {
        &self.store
    }

    fn now(&self) -> i64 {
        self.store.clock().now_millis()
    }

    pub fn add(&mut self, patch: ReminderPatch) -> Result<String> {
        self.store.add(patch)
    }

    pub fn get(&self, id: &str) -> Result<Option<Reminder>> {
        self.store.get(id)
    }

    pub fn list(&self) -> Result<Vec<Reminder>> {
        self.store.all()
    }

    pub fn remove<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<()> {
        self.store.remove(ids)
    }

    /// Snooze a reminder until `until`.
    pub fn snooze(&mut self, id: &str, until: i64) -> Result<()> {
        self.store.require(id)?;
        self.store
            .add(ReminderPatch::new().with_id(id).with_snooze_until(until))?;
        Ok(())
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<()> {
        self.store.require(id)?;
        self.store
            .add(ReminderPatch::new().with_id(id).with_disabled(disabled))?;
        Ok(())
    }

    /// Reminders that are currently active.
    pub fn active(&self) -> Result<Vec<Reminder>> {
        let now = self.now();
        Ok(self
            .store
            .all()?
            .into_iter()
            .filter(|r| is_active(r, now))
            .collect())
    }

    /// Reminders whose next firing falls on today's calendar day.
    pub fn due_today(&self) -> Result<Vec<Reminder>> {
        let now = self.now();
        Ok(self
            .store
            .all()?
            .into_iter()
            .filter(|r| !r.disabled && is_due_today(r, now, &self.calendar))
            .collect())
    }

    /// Next firing instant of a stored reminder.
    pub fn next_occurrence(&self, id: &str) -> Result<Option<i64>> {
        let reminder = self.store.require(id)?;
        Ok(next_occurrence(&reminder, self.now(), &self.calendar))
    }

    /// The active reminder that fires soonest after now.
    pub fn next_upcoming(&self) -> Result<Option<Reminder>> {
        let now = self.now();
        Ok(self
            .store
            .all()?
            .into_iter()
            .filter(|r| is_active(r, now))
            .filter_map(|r| {
                next_occurrence(&r, now, &self.calendar)
                    .filter(|at| *at > now)
                    .map(|at| (at, r))
            })
            .min_by_key(|(at, _)| *at)
            .map(|(_, r)| r))
    }

    pub fn timing(&self, id: &str) -> Result<ReminderTiming> {
        let reminder = self.store.require(id)?;
        Ok(describe(&reminder, self.now(), &self.calendar))
    }
}
