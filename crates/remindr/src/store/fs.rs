use super::fs_backend::FsBackend;
use super::reminder_store::ReminderStore;
use crate::clock::SystemClock;
use crate::config::RemindrConfig;
use crate::error::Result;
use std::path::PathBuf;

/// Production store: reminders persisted to a JSON file.
pub type FileStore<C = SystemClock> = ReminderStore<FsBackend, C>;

impl FileStore {
    /// A store keeping `reminders.json` inside `root`.
    pub fn new(root: PathBuf) -> Self {
        ReminderStore::with_backend(FsBackend::new(root))
    }

    /// A store located by configuration (data dir and file name).
    pub fn from_config(config: &RemindrConfig) -> Result<Self> {
        let backend = FsBackend::new(config.data_dir()?).with_file_name(&config.file_name);
        Ok(ReminderStore::with_backend(backend))
    }
}
