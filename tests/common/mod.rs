//! Shared fixtures for stats and content integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, Local, TimeZone};
use tempfile::TempDir;

use legal_eagle::Difficulty;
use legal_eagle::config::{Config, StorageKind};
use legal_eagle::content::RawQuestion;
use legal_eagle::stats::QuizOutcome;

/// Local noon on the given day (noon keeps DST shifts off the day boundary)
pub fn noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, 12, 0, 0)
        .single()
        .expect("valid local time")
}

/// `base` shifted by whole days
pub fn days_after(base: DateTime<Local>, days: i64) -> DateTime<Local> {
    base + Duration::days(days)
}

pub fn outcome(topic: &str, difficulty: Difficulty, score: u32, total: u32) -> QuizOutcome {
    QuizOutcome::new(topic, difficulty, score, total)
}

/// Config pointing at a fresh temporary data directory
pub fn temp_config(storage: StorageKind) -> (TempDir, Config) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.settings.storage = storage;
    config.settings.data_dir = Some(dir.path().to_path_buf());
    (dir, config)
}

/// A well-formed raw question whose answer is the first option
pub fn raw_question(text: &str) -> RawQuestion {
    RawQuestion {
        question: Some(text.to_string()),
        options: Some(vec![
            "Article 14".to_string(),
            "Article 19".to_string(),
            "Article 21".to_string(),
            "Article 32".to_string(),
        ]),
        correct_answer: Some("Article 14".to_string()),
        explanation: Some("Equality before law is guaranteed by Article 14.".to_string()),
        hint: Some("Think of equality.".to_string()),
    }
}
