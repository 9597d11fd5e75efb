//! Legal Eagle - quiz practice for Indian legal education
//!
//! Presents multiple-choice questions on legal topics, tracks a learner's
//! performance across sessions and awards badges.
//!
//! ## Components
//!
//! 1. **Stats engine**: pure transitions over the persisted `UserStats` record
//!    (counters, points, daily streaks, per-topic and per-difficulty accuracy,
//!    history) plus the badge rules.
//!
//! 2. **Stats store**: best-effort persistence of that record through a
//!    key-value backend (JSON files, SQLite or memory).
//!
//! 3. **Content**: validation of provider output and a local question bank.

pub mod bookmarks;
pub mod config;
pub mod content;
pub mod domain;
pub mod session;
pub mod stats;

mod atomic;

pub use domain::*;
