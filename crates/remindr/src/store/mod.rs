//! # Storage Layer
//!
//! Reminders live in an external keyed collection. This module defines the
//! contract the engine needs from it ([`backend::CollectionBackend`]) and the
//! facade that sits on top ([`reminder_store::ReminderStore`]).
//!
//! ## Split of Responsibilities
//!
//! - **Backend** ("how"): get, put, list and remove records by id. No business
//!   rules, no defaults.
//! - **Store** ("what"): merges partial updates over stored records, fills in
//!   defaults, stamps `dateCreated`/`dateModified`, refuses records that came
//!   in through sync.
//!
//! Backend errors propagate to the caller unchanged; there is no retry logic.
//! Concurrent writes to the same id resolve as last write wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file, atomic temp-file + rename writes.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── reminders.json      # { "<id>": { ...reminder... }, ... }
//! ```

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod reminder_store;

pub use reminder_store::ReminderStore;
