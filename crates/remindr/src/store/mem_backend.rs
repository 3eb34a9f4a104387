use super::backend::CollectionBackend;
use crate::error::{RemindrError, Result};
use crate::model::Reminder;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory collection backend for tests and embedding.
///
/// Uses `RefCell` for interior mutability so the `CollectionBackend` trait can
/// use `&self` everywhere. It is therefore not `Sync`; wrap the store in a
/// `Mutex` to share it.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, Reminder>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error propagation.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RemindrError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl CollectionBackend for MemBackend {
    fn get_item(&self, id: &str) -> Result<Option<Reminder>> {
        Ok(self.items.borrow().get(id).cloned())
    }

    fn add_item(&self, item: &Reminder) -> Result<()> {
        self.check_writable()?;
        self.items
            .borrow_mut()
            .insert(item.id.clone(), item.clone());
        Ok(())
    }

    fn items(&self) -> Result<Vec<Reminder>> {
        Ok(self.items.borrow().values().cloned().collect())
    }

    fn raw(&self) -> Result<HashMap<String, Reminder>> {
        Ok(self.items.borrow().clone())
    }

    fn remove_item(&self, id: &str) -> Result<()> {
        self.check_writable()?;
        self.items.borrow_mut().remove(id);
        Ok(())
    }
}
