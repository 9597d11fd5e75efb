use serde::{Deserialize, Serialize};

/// Number of answer options every question carries
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A validated multiple-choice question
///
/// Only constructed through `content::validate_questions`, so `options` always
/// holds exactly four entries and `correct_answer` is one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub hint: String,
}

impl Question {
    /// Check an answer against the correct option
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Zero-based index of the correct option
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o == &self.correct_answer)
    }
}

/// A legal domain with its quiz-sized subtopics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub description: String,
    /// Icon keyword such as "Constitution" or "Gavel"
    pub icon: String,
    pub subdomains: Vec<String>,
}
