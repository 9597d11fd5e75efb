//! Learner statistics and achievements
//!
//! Tracks quiz completions, per-topic and per-difficulty accuracy, points,
//! daily streaks and badges in a single `UserStats` record.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐   apply_completion   ┌─────────────────┐
//! │  quiz finished  │ ───────────────────▶ │     engine      │
//! └─────────────────┘                      │ (pure, no I/O)  │
//!                                          └────────┬────────┘
//!                                                   │ new UserStats
//!                                                   ▼
//!                                          ┌─────────────────┐
//!                                          │   StatsStore    │
//!                                          │ (best effort)   │
//!                                          └────────┬────────┘
//!                                                   ▼
//!                                     KeyValueStore (file / sqlite / memory)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let stats = StatsManager::open(&config)?;
//! let update = stats.record_completion(&QuizOutcome::new("Law of Torts", Difficulty::Expert, 4, 5));
//! for badge in &update.new_badges {
//!     println!("New badge: {}", badge.name);
//! }
//! ```

pub mod badges;
pub mod engine;
pub mod streaks;

mod db;
mod file_store;
mod kv;
mod models;
mod store;

pub use badges::{BADGES, Badge, BadgeCategory, BadgeId};
pub use db::SqliteStore;
pub use engine::{BadgeAward, CompletionUpdate, apply_completion, apply_completion_at, award_badge};
pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore, StorageError};
pub use models::{
    DifficultyBreakdown, HISTORY_LIMIT, PerformanceRecord, QuizOutcome, QuizRecord, UserStats,
};
pub use store::{STATS_STORAGE_KEY, StatsStore};
pub use streaks::StreakChange;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::{Config, StorageKind};

/// Open the key-value backend selected in the config
pub fn open_backend(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let data_dir = config.data_dir();
    let backend: Arc<dyn KeyValueStore> = match config.settings.storage {
        StorageKind::File => Arc::new(FileStore::new(data_dir)),
        StorageKind::Sqlite => {
            let path = data_dir.join("stats.db");
            Arc::new(
                SqliteStore::open(&path)
                    .with_context(|| format!("Failed to open stats db: {}", path.display()))?,
            )
        }
        StorageKind::Memory => Arc::new(MemoryStore::new()),
    };
    tracing::debug!("Using {:?} storage", config.settings.storage);
    Ok(backend)
}

/// Central manager for statistics
///
/// Wires the pure engine to the store: load the current record, apply the
/// change, save once the next state is fully computed.
#[derive(Clone)]
pub struct StatsManager {
    backend: Arc<dyn KeyValueStore>,
    store: StatsStore,
}

impl StatsManager {
    /// Create a StatsManager with the backend selected in the config
    pub fn open(config: &Config) -> Result<Self> {
        Ok(Self::with_backend(open_backend(config)?))
    }

    /// Create a StatsManager over an existing backend
    pub fn with_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        let store = StatsStore::new(backend.clone());
        Self { backend, store }
    }

    /// Backend shared with other persisted features (bookmarks)
    pub fn backend(&self) -> Arc<dyn KeyValueStore> {
        self.backend.clone()
    }

    pub fn store(&self) -> &StatsStore {
        &self.store
    }

    /// Current stats record
    pub fn load(&self) -> UserStats {
        self.store.load()
    }

    /// Apply a finished quiz and persist the result
    pub fn record_completion(&self, outcome: &QuizOutcome) -> CompletionUpdate {
        let current = self.store.load();
        let update = apply_completion(&current, outcome);
        self.store.save(&update.stats);
        update
    }

    /// Award a badge outside the completion flow and persist it if new
    pub fn award_badge(&self, badge_id: &str) -> BadgeAward {
        let current = self.store.load();
        let award = award_badge(&current, badge_id);
        if !award.new_badges.is_empty() {
            self.store.save(&award.stats);
        }
        award
    }

    /// Reset all statistics to defaults
    pub fn reset_all(&self) -> UserStats {
        self.store.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;
    use tempfile::tempdir;

    #[test]
    fn test_stats_manager_roundtrip() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.settings.data_dir = Some(dir.path().to_path_buf());
        config.settings.storage = StorageKind::Sqlite;

        let manager = StatsManager::open(&config).unwrap();
        let update = manager.record_completion(&QuizOutcome::new(
            "Constitutional Law",
            Difficulty::Intermediate,
            3,
            5,
        ));
        assert_eq!(update.stats.total_points, 45);

        let reopened = StatsManager::open(&config).unwrap();
        let stats = reopened.load();
        assert_eq!(stats.total_quizzes_completed, 1);
        assert_eq!(stats.total_points, 45);
        assert_eq!(stats.badges, vec!["novice_jurist"]);

        assert_eq!(reopened.reset_all(), UserStats::default());
        assert_eq!(manager.load(), UserStats::default());
    }

    #[test]
    fn test_award_badge_persists_only_new_badges() {
        let manager = StatsManager::with_backend(Arc::new(MemoryStore::new()));
        assert_eq!(manager.award_badge("bookworm").new_badges.len(), 1);
        assert!(manager.award_badge("bookworm").new_badges.is_empty());
        assert_eq!(manager.load().badges, vec!["bookworm"]);
    }
}
