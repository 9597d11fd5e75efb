//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::Difficulty;

/// Which key-value backend holds the stats record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// One JSON file per key in the data directory
    #[default]
    File,
    /// Single `stats.db` SQLite database in the data directory
    Sqlite,
    /// Nothing is written to disk
    Memory,
}

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Storage backend for stats and bookmarks
    #[serde(default)]
    pub storage: StorageKind,

    /// Override for the data directory (defaults to ~/.legal-eagle/)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Difficulty used when `play` is not given one
    #[serde(default)]
    pub default_difficulty: Difficulty,

    /// Questions per quiz when `play` is not given a count
    #[serde(default = "default_question_count")]
    pub question_count: u32,
}

fn default_question_count() -> u32 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            data_dir: None,
            default_difficulty: Difficulty::default(),
            question_count: default_question_count(),
        }
    }
}
