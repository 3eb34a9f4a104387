use super::backend::CollectionBackend;
use crate::error::{RemindrError, Result};
use crate::model::Reminder;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_FILE_NAME: &str = "reminders.json";

/// File-backed collection: one JSON object keyed by reminder id.
///
/// Every write rewrites the whole file through a temp file and a rename, so a
/// crash never leaves a half-written collection behind.
pub struct FsBackend {
    root: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RemindrError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<HashMap<String, Reminder>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(RemindrError::Io)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        let items: HashMap<String, Reminder> =
            serde_json::from_str(&content).map_err(RemindrError::Serialization)?;
        Ok(items)
    }

    fn save(&self, items: &HashMap<String, Reminder>) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let content = serde_json::to_string_pretty(items).map_err(RemindrError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".reminders-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(RemindrError::Io)?;
        fs::rename(&tmp_file, self.data_file()).map_err(RemindrError::Io)?;

        debug!(path = %self.data_file().display(), count = items.len(), "saved reminders");
        Ok(())
    }
}

impl CollectionBackend for FsBackend {
    fn get_item(&self, id: &str) -> Result<Option<Reminder>> {
        Ok(self.load()?.remove(id))
    }

    fn add_item(&self, item: &Reminder) -> Result<()> {
        let mut items = self.load()?;
        items.insert(item.id.clone(), item.clone());
        self.save(&items)
    }

    fn items(&self) -> Result<Vec<Reminder>> {
        Ok(self.load()?.into_values().collect())
    }

    fn raw(&self) -> Result<HashMap<String, Reminder>> {
        self.load()
    }

    fn remove_item(&self, id: &str) -> Result<()> {
        let mut items = self.load()?;
        if items.remove(id).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }
}
