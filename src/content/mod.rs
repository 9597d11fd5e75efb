//! Question content boundary
//!
//! A `QuestionSource` produces raw question and domain records; everything it
//! returns is validated here before it can reach a quiz session or the stats.

mod bank;
mod validate;

pub use bank::QuestionBank;
pub use validate::{RawDomain, RawQuestion, validate_domains, validate_questions};

use async_trait::async_trait;

use crate::domain::{Difficulty, Domain, Question};

/// Topic name of the full-length mock test drawing from every topic
pub const MOCK_TEST_TOPIC: &str = "Comprehensive CLAT LLM Mock Test";

/// Questions in the mock test
pub const MOCK_TEST_QUESTION_COUNT: u32 = 120;

/// Error type for content providers
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content provider failed: {0}")]
    Provider(String),

    #[error("Content provider returned malformed data: {0}")]
    Malformed(String),

    #[error(
        "The provider returned {discarded} questions, but none of them were in the correct format. Please try again."
    )]
    NoValidQuestions { discarded: usize },

    #[error("The provider returned {discarded} domains, but none of them were usable. Please try again.")]
    NoValidDomains { discarded: usize },
}

/// External producer of quiz content
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Produce up to `count` raw questions on `topic` at `difficulty`
    async fn generate_questions(
        &self,
        topic: &str,
        count: u32,
        difficulty: Difficulty,
    ) -> Result<Vec<RawQuestion>, ContentError>;

    /// Produce the list of legal domains offered for play
    async fn generate_domains(&self) -> Result<Vec<RawDomain>, ContentError>;
}

/// Fetch and validate questions, keeping at most `count`
pub async fn fetch_questions(
    source: &dyn QuestionSource,
    topic: &str,
    count: u32,
    difficulty: Difficulty,
) -> Result<Vec<Question>, ContentError> {
    let raw = source.generate_questions(topic, count, difficulty).await?;
    if raw.is_empty() {
        return Err(ContentError::Malformed(format!(
            "no questions returned for \"{}\" ({})",
            topic, difficulty
        )));
    }

    let mut questions = validate_questions(&raw)?;
    questions.truncate(count as usize);
    tracing::debug!(
        "Fetched {} valid questions of {} for \"{}\"",
        questions.len(),
        raw.len(),
        topic
    );
    Ok(questions)
}

/// Fetch and validate the domain list
pub async fn fetch_domains(source: &dyn QuestionSource) -> Result<Vec<Domain>, ContentError> {
    let raw = source.generate_domains().await?;
    if raw.is_empty() {
        return Err(ContentError::Malformed("no domains returned".to_string()));
    }
    validate_domains(&raw)
}
