//! # Scheduling Engine
//!
//! Pure functions that answer *when* a reminder fires and *whether* it is
//! currently live. Nothing in here touches storage or reads the system clock:
//! every function takes the reference instant `now` (milliseconds since the
//! Unix epoch) and, where calendar dates matter, a [`Calendar`].
//!
//! ```text
//! Reminder ──► occurrence::next_occurrence ──► active::is_due_today
//!                        │                     timing::describe
//!                        └──────────────────► upcoming::rank_upcoming
//! Reminder ──► active::is_active  (disabled / snooze / mode)
//! ```
//!
//! Because the functions are side-effect free they are safe to call from any
//! number of threads without coordination.
//!
//! ## Modules
//!
//! - [`calendar`]: fixed-offset calendar arithmetic
//! - [`occurrence`]: next firing instant per recurrence mode
//! - [`active`]: active-state and due-today evaluation
//! - [`upcoming`]: ranking across a collection
//! - [`timing`]: structured classification for display layers

pub mod active;
pub mod calendar;
pub mod occurrence;
pub mod timing;
pub mod upcoming;

pub use active::{is_active, is_due_today, is_snoozed};
pub use calendar::Calendar;
pub use occurrence::next_occurrence;
pub use timing::{describe, RelativeDay, ReminderTiming, TimingTag};
pub use upcoming::{rank_upcoming, select_next_upcoming};
