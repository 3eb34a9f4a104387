//! # Remindr Architecture
//!
//! Remindr is a **reminder recurrence and active-state engine**. Given a
//! reminder (one-shot, repeating or permanent, optionally snoozed) it answers
//! three questions: when does it fire next, is it active right now, and which
//! reminder of a collection is up next. It only computes *when*; delivering a
//! notification is someone else's job.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: store + clock + calendar                    │
//! │  - "As of now" views: active, due today, next upcoming      │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Store (store/)               │ │  Schedule (schedule/)     │
//! │  - Merge-on-add, defaults     │ │  - Pure calendar math     │
//! │  - Pluggable keyed backends   │ │  - Explicit `now` input   │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Key Principle: Time Is an Argument
//!
//! Nothing under `schedule/` reads the system clock. Every function takes the
//! reference instant explicitly, and calendar dates are computed on an
//! explicit [`schedule::Calendar`]. That keeps the engine deterministic,
//! testable and safe to call from many threads at once.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`schedule`]: Occurrence, active-state, ranking and timing logic
//! - [`store`]: Storage contract, facade and implementations
//! - [`model`]: `Reminder`, `ReminderPatch` and their enums
//! - [`clock`]: Wall-clock abstraction
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod schedule;
pub mod store;

pub use api::RemindrApi;
pub use error::{RemindrError, Result};
pub use model::{Mode, Priority, RecurringMode, Reminder, ReminderPatch};
