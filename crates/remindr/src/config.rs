//! # Configuration
//!
//! Remindr configuration is managed by [`confique`], which handles layered
//! loading from a TOML file, environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `REMINDR_UTC_OFFSET_MINUTES`, `REMINDR_DATA_DIR`.
//! 2. **Config file**: `remindr.toml`, when a path is given to [`RemindrConfig::load`].
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `utc_offset_minutes` | `0` | Wall-clock offset used for all calendar math |
//! | `data_dir` | OS data dir (via `directories`) | Where the reminder file lives |
//! | `file_name` | `reminders.json` | Name of the reminder file |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RemindrError, Result};
use crate::schedule::Calendar;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemindrConfig {
    /// Offset of the user's wall clock from UTC, in minutes (e.g. 120, -300).
    #[config(default = 0, env = "REMINDR_UTC_OFFSET_MINUTES")]
    pub utc_offset_minutes: i32,

    /// Directory holding the reminder file. When absent, the platform data
    /// directory is used.
    #[config(env = "REMINDR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[config(default = "reminders.json")]
    pub file_name: String,
}

impl Default for RemindrConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            data_dir: None,
            file_name: crate::store::fs_backend::DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl RemindrConfig {
    /// Load configuration from the environment and, if given, a TOML file.
    /// A file that does not exist is skipped.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| RemindrError::Config(e.to_string()))
    }

    /// The calendar all scheduling runs on.
    pub fn calendar(&self) -> Result<Calendar> {
        Calendar::from_offset_minutes(self.utc_offset_minutes).ok_or_else(|| {
            RemindrError::Config(format!(
                "utc_offset_minutes {} is out of range",
                self.utc_offset_minutes
            ))
        })
    }

    /// Configured data directory, or the platform default.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        directories::ProjectDirs::from("", "", "remindr")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| RemindrError::Config("no home directory to store reminders".to_string()))
    }
}
