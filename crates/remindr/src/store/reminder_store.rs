use super::backend::CollectionBackend;
use crate::clock::{Clock, SystemClock};
use crate::error::{RemindrError, Result};
use crate::model::{generate_id, Reminder, ReminderPatch};
use std::collections::HashMap;
use tracing::debug;

/// The reminder store facade: merge-on-add, defaults, and bookkeeping stamps
/// on top of a raw [`CollectionBackend`].
pub struct ReminderStore<B: CollectionBackend, C: Clock = SystemClock> {
    /// The underlying collection.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    clock: C,
}

impl<B: CollectionBackend> ReminderStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            clock: SystemClock,
        }
    }
}

impl<B: CollectionBackend, C: Clock> ReminderStore<B, C> {
    pub fn with_clock<C2: Clock>(self, clock: C2) -> ReminderStore<B, C2> {
        ReminderStore {
            backend: self.backend,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Create or update a reminder from a partial record and return its id.
    ///
    /// When `patch.id` names a stored reminder, the patch is merged over it:
    /// present fields win, absent fields keep their stored values. Otherwise
    /// a new id is generated (an empty id counts as absent). Records received through sync (`remote`) are
    /// rejected; they must be merged, not added.
    pub fn add(&mut self, patch: ReminderPatch) -> Result<String> {
        if patch.remote {
            return Err(RemindrError::InvalidOperation(
                "remote reminders must be merged, not added".to_string(),
            ));
        }

        let id = patch
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_id);
        let existing = self.backend.get_item(&id)?;
        let is_new = existing.is_none();
        let stamp_modified = patch.date_modified.is_none();

        let mut reminder = patch.apply(id, existing);
        let now = self.clock.now_millis();
        if reminder.date_created.is_none() {
            reminder.date_created = Some(now);
        }
        if stamp_modified {
            reminder.date_modified = Some(now);
        }

        self.backend.add_item(&reminder)?;
        debug!(id = %reminder.id, mode = %reminder.mode, is_new, "saved reminder");
        Ok(reminder.id)
    }

    pub fn get(&self, id: &str) -> Result<Option<Reminder>> {
        self.backend.get_item(id)
    }

    /// Like [`get`](Self::get) but treats a missing record as an error.
    pub fn require(&self, id: &str) -> Result<Reminder> {
        self.get(id)?
            .ok_or_else(|| RemindrError::NotFound(id.to_string()))
    }

    pub fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Every stored reminder, oldest first (ties broken by id).
    pub fn all(&self) -> Result<Vec<Reminder>> {
        let mut reminders = self.backend.items()?;
        reminders.sort_by(|a, b| {
            a.date_created
                .cmp(&b.date_created)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(reminders)
    }

    pub fn raw(&self) -> Result<HashMap<String, Reminder>> {
        self.backend.raw()
    }

    /// Remove every listed id. Ids that are not stored are skipped silently.
    pub fn remove<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<()> {
        for id in ids {
            self.backend.remove_item(id.as_ref())?;
            debug!(id = id.as_ref(), "removed reminder");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::clock::MockClock;
    use crate::error::RemindrError;
    use crate::model::{Mode, Priority, RecurringMode, ReminderPatch};
    use crate::store::memory::InMemoryStore;

    fn store_at(now: i64) -> (InMemoryStore<MockClock>, MockClock) {
        let clock = MockClock::at(now);
        (InMemoryStore::new().with_clock(clock.clone()), clock)
    }

    #[test]
    fn test_add_generates_id_and_defaults() {
        let (mut store, _) = store_at(1_000);
        let id = store.add(ReminderPatch::new().with_title("Call")).unwrap();
        assert!(!id.is_empty());

        let r = store.require(&id).unwrap();
        assert_eq!(r.title.as_deref(), Some("Call"));
        assert_eq!(r.mode, Mode::Once);
        assert_eq!(r.priority, Priority::Vibrate);
        assert!(r.selected_days.is_empty());
        assert_eq!(r.date_created, Some(1_000));
        assert_eq!(r.date_modified, Some(1_000));
    }

    #[test]
    fn test_add_merges_over_existing_record() {
        let (mut store, clock) = store_at(1_000);
        store
            .add(
                ReminderPatch::new()
                    .with_id("r1")
                    .with_title("A")
                    .with_description("details")
                    .with_priority(Priority::Urgent),
            )
            .unwrap();

        clock.advance(5_000);
        let id = store
            .add(ReminderPatch::new().with_id("r1").with_title("B").with_date(500))
            .unwrap();
        assert_eq!(id, "r1");

        let all = store.all().unwrap();
        assert_eq!(all.len(), 1);
        let r = &all[0];
        assert_eq!(r.title.as_deref(), Some("B"));
        assert_eq!(r.date, Some(500));
        assert_eq!(r.description.as_deref(), Some("details"));
        assert_eq!(r.priority, Priority::Urgent);
        assert_eq!(r.date_created, Some(1_000));
        assert_eq!(r.date_modified, Some(6_000));
    }

    #[test]
    fn test_add_unknown_id_creates_record_with_that_id() {
        let (mut store, _) = store_at(0);
        let id = store
            .add(ReminderPatch::new().with_id("custom").with_date(9))
            .unwrap();
        assert_eq!(id, "custom");
        assert!(store.exists("custom").unwrap());
    }

    #[test]
    fn test_add_empty_id_generates_one() {
        let (mut store, _) = store_at(0);
        let id = store
            .add(ReminderPatch::new().with_id("").with_title("x"))
            .unwrap();
        assert!(!id.is_empty());
        assert!(!store.exists("").unwrap());
        assert_eq!(store.require(&id).unwrap().title.as_deref(), Some("x"));
    }

    #[test]
    fn test_add_keeps_caller_bookkeeping() {
        let (mut store, _) = store_at(1_000);
        let mut patch = ReminderPatch::new().with_id("r1");
        patch.date_created = Some(10);
        patch.date_modified = Some(20);
        store.add(patch).unwrap();

        let r = store.require("r1").unwrap();
        assert_eq!(r.date_created, Some(10));
        assert_eq!(r.date_modified, Some(20));
    }

    #[test]
    fn test_add_remote_is_rejected() {
        let (mut store, _) = store_at(0);
        let result = store.add(ReminderPatch::new().with_id("r1").with_remote());
        match result {
            Err(RemindrError::InvalidOperation(msg)) => assert!(msg.contains("merged")),
            other => panic!("Expected InvalidOperation, got {:?}", other),
        }
        assert!(!store.exists("r1").unwrap());
    }

    #[test]
    fn test_add_propagates_backend_failure() {
        let (mut store, _) = store_at(0);
        store.backend.set_simulate_write_error(true);
        assert!(matches!(
            store.add(ReminderPatch::new().with_title("x")),
            Err(RemindrError::Store(_))
        ));
    }

    #[test]
    fn test_add_switching_mode_keeps_recurrence_fields() {
        let (mut store, _) = store_at(0);
        store
            .add(
                ReminderPatch::new()
                    .with_id("r1")
                    .with_recurrence(RecurringMode::Week, vec![1, 3]),
            )
            .unwrap();
        store
            .add(ReminderPatch::new().with_id("r1").with_mode(Mode::Once))
            .unwrap();

        let r = store.require("r1").unwrap();
        assert_eq!(r.mode, Mode::Once);
        assert_eq!(r.recurring_mode, Some(RecurringMode::Week));
        assert_eq!(r.selected_days, vec![1, 3]);
    }

    #[test]
    fn test_get_missing() {
        let (store, _) = store_at(0);
        assert!(store.get("nope").unwrap().is_none());
        assert!(matches!(
            store.require("nope"),
            Err(RemindrError::NotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_all_is_ordered_by_creation() {
        let (mut store, clock) = store_at(100);
        store.add(ReminderPatch::new().with_id("b")).unwrap();
        clock.advance(1);
        store.add(ReminderPatch::new().with_id("a")).unwrap();

        let ids: Vec<String> = store.all().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.raw().unwrap().len(), 2);
    }

    #[test]
    fn test_remove_many_and_tolerates_missing() {
        let (mut store, _) = store_at(0);
        store.add(ReminderPatch::new().with_id("a")).unwrap();
        store.add(ReminderPatch::new().with_id("b")).unwrap();
        store.add(ReminderPatch::new().with_id("c")).unwrap();

        store.remove(&["a", "ghost", "c"]).unwrap();
        let ids: Vec<String> = store.all().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b"]);

        // Removing again is a no-op.
        store.remove(&["a"]).unwrap();
    }
}
