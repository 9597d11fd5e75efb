//! Bookmarked questions for later review
//!
//! Persisted next to the stats record through the same key-value backend,
//! with the same best-effort policy: storage errors are logged, never returned.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::Question;
use crate::stats::KeyValueStore;

/// Key under which bookmarks are stored
pub const BOOKMARKS_STORAGE_KEY: &str = "legalEagleBookmarks";

/// Bookmark count that earns the `bookworm` badge
pub const BOOKWORM_THRESHOLD: usize = 10;

/// Result of toggling a bookmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkToggle {
    Added { count: usize },
    Removed { count: usize },
}

impl BookmarkToggle {
    /// Whether this toggle added a bookmark and reached the bookworm threshold
    pub fn reaches_bookworm(&self) -> bool {
        matches!(self, Self::Added { count } if *count >= BOOKWORM_THRESHOLD)
    }
}

/// Ordered bookmark list, unique by question text
pub struct Bookmarks {
    backend: Arc<dyn KeyValueStore>,
    questions: Vec<Question>,
}

impl Bookmarks {
    /// Load bookmarks from the backend; unreadable data yields an empty list
    pub fn load(backend: Arc<dyn KeyValueStore>) -> Self {
        let questions = match backend.get(BOOKMARKS_STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Failed to parse stored bookmarks: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to load bookmarks: {}", e);
                Vec::new()
            }
        };

        Self { backend, questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains(&self, question: &Question) -> bool {
        self.questions.iter().any(|q| q.question == question.question)
    }

    /// Add or remove a bookmark and persist the list
    pub fn toggle(&mut self, question: &Question) -> BookmarkToggle {
        let toggle = if self.contains(question) {
            self.questions.retain(|q| q.question != question.question);
            BookmarkToggle::Removed {
                count: self.questions.len(),
            }
        } else {
            self.questions.push(question.clone());
            BookmarkToggle::Added {
                count: self.questions.len(),
            }
        };

        debug!("Bookmark toggled: {:?}", toggle);
        self.save();
        toggle
    }

    fn save(&self) {
        let result = if self.questions.is_empty() {
            self.backend.remove(BOOKMARKS_STORAGE_KEY)
        } else {
            match serde_json::to_string(&self.questions) {
                Ok(json) => self.backend.set(BOOKMARKS_STORAGE_KEY, &json),
                Err(e) => {
                    warn!("Failed to serialize bookmarks: {}", e);
                    return;
                }
            }
        };

        if let Err(e) = result {
            warn!("Failed to save bookmarks: {}", e);
        }
    }
}
