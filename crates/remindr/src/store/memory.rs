use super::mem_backend::MemBackend;
use super::reminder_store::ReminderStore;
use crate::clock::SystemClock;

pub type InMemoryStore<C = SystemClock> = ReminderStore<MemBackend, C>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ReminderStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::clock::MockClock;
    use crate::model::{RecurringMode, ReminderPatch};

    /// A store pinned to a mock clock, populated with a fluent builder.
    pub struct StoreFixture {
        pub store: InMemoryStore<MockClock>,
        pub clock: MockClock,
    }

    impl StoreFixture {
        pub fn at(now: i64) -> Self {
            let clock = MockClock::at(now);
            Self {
                store: InMemoryStore::new().with_clock(clock.clone()),
                clock,
            }
        }

        pub fn with_once(mut self, id: &str, date: i64) -> Self {
            self.store
                .add(ReminderPatch::new().with_id(id).with_date(date))
                .unwrap();
            self
        }

        pub fn with_repeating(
            mut self,
            id: &str,
            recurring_mode: RecurringMode,
            days: Vec<u32>,
            time: i64,
        ) -> Self {
            self.store
                .add(
                    ReminderPatch::new()
                        .with_id(id)
                        .with_recurrence(recurring_mode, days)
                        .with_date(time),
                )
                .unwrap();
            self
        }

        pub fn with_permanent(mut self, id: &str) -> Self {
            self.store
                .add(
                    ReminderPatch::new()
                        .with_id(id)
                        .with_mode(crate::model::Mode::Permanent),
                )
                .unwrap();
            self
        }

        pub fn with_disabled_once(mut self, id: &str, date: i64) -> Self {
            self.store
                .add(
                    ReminderPatch::new()
                        .with_id(id)
                        .with_date(date)
                        .with_disabled(true),
                )
                .unwrap();
            self
        }
    }
}
