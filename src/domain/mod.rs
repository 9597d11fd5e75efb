//! Core quiz domain types

mod difficulty;
mod question;

pub use difficulty::Difficulty;
pub use question::{Domain, OPTIONS_PER_QUESTION, Question};
