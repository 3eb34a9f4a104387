use crate::error::Result;
use crate::model::Reminder;
use std::collections::HashMap;

/// Abstract interface for the keyed collection that holds reminder records.
///
/// This trait handles the "how" of persistence (file vs memory), while
/// [`ReminderStore`](super::reminder_store::ReminderStore) handles the
/// "what" (merging, defaults, bookkeeping stamps).
///
/// All methods take `&self`: backends manage their own mutability.
pub trait CollectionBackend {
    /// Get a record by id. Returns Ok(None) when absent.
    fn get_item(&self, id: &str) -> Result<Option<Reminder>>;

    /// Insert or replace the record stored under `item.id`.
    fn add_item(&self, item: &Reminder) -> Result<()>;

    /// All stored records, in no particular order.
    fn items(&self) -> Result<Vec<Reminder>>;

    /// The raw id → record map.
    fn raw(&self) -> Result<HashMap<String, Reminder>>;

    /// Remove a record. Removing an absent id is not an error.
    fn remove_item(&self, id: &str) -> Result<()>;
}
