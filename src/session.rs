//! A single quiz run from first question to completion outcome

use crate::domain::{Difficulty, Question};
use crate::stats::QuizOutcome;

/// Error type for quiz session misuse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("A quiz needs at least one question")]
    NoQuestions,

    #[error("The current question was already answered")]
    AlreadyAnswered,

    #[error("The current question has not been answered yet")]
    NotAnswered,

    #[error("Option {0} does not exist")]
    InvalidChoice(usize),

    #[error("The quiz is already finished")]
    Finished,
}

/// Feedback for one answered question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    /// No answer was given before the time ran out
    pub timed_out: bool,
    pub correct_answer: String,
    pub explanation: String,
}

/// Quiz in progress
#[derive(Debug, Clone)]
pub struct QuizSession {
    topic: String,
    difficulty: Difficulty,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    answered: bool,
}

impl QuizSession {
    pub fn new(
        topic: impl Into<String>,
        difficulty: Difficulty,
        questions: Vec<Question>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        Ok(Self {
            topic: topic.into(),
            difficulty,
            questions,
            current: 0,
            score: 0,
            answered: false,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based number of the current question
    pub fn question_number(&self) -> usize {
        (self.current + 1).min(self.questions.len())
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Answer the current question with a zero-based option index
    ///
    /// `None` means the time ran out and counts as a wrong answer.
    pub fn answer(&mut self, choice: Option<usize>) -> Result<AnswerFeedback, SessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Finished);
        };
        if self.answered {
            return Err(SessionError::AlreadyAnswered);
        }

        let selected = match choice {
            Some(index) => Some(
                question
                    .options
                    .get(index)
                    .ok_or(SessionError::InvalidChoice(index))?,
            ),
            None => None,
        };

        let correct = selected.is_some_and(|answer| question.is_correct(answer));
        let feedback = AnswerFeedback {
            correct,
            timed_out: choice.is_none(),
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
        };

        if correct {
            self.score += 1;
        }
        self.answered = true;
        Ok(feedback)
    }

    /// Move past an answered question; returns false once the quiz is over
    pub fn advance(&mut self) -> Result<bool, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        if !self.answered {
            return Err(SessionError::NotAnswered);
        }

        self.current += 1;
        self.answered = false;
        Ok(!self.is_finished())
    }

    /// Completion outcome, available once every question was answered
    pub fn outcome(&self) -> Option<QuizOutcome> {
        self.is_finished().then(|| {
            QuizOutcome::new(
                self.topic.clone(),
                self.difficulty,
                self.score,
                self.questions.len() as u32,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> Question {
        Question {
            question: format!("Pick {correct}"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: correct.into(),
            explanation: "Explained.".into(),
            hint: "Hinted.".into(),
        }
    }

    #[test]
    fn test_full_run_produces_outcome() {
        let mut session = QuizSession::new(
            "Law of Torts",
            Difficulty::Expert,
            vec![question("A"), question("C"), question("D")],
        )
        .unwrap();

        assert!(session.answer(Some(0)).unwrap().correct);
        assert!(session.outcome().is_none());
        assert!(session.advance().unwrap());

        let feedback = session.answer(None).unwrap();
        assert!(feedback.timed_out && !feedback.correct);
        assert_eq!(feedback.correct_answer, "C");
        assert!(session.advance().unwrap());

        assert!(session.answer(Some(3)).unwrap().correct);
        assert!(!session.advance().unwrap());

        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.total_questions, 3);
        assert_eq!(outcome.difficulty, Difficulty::Expert);
    }

    #[test]
    fn test_misuse_is_rejected() {
        assert_eq!(
            QuizSession::new("T", Difficulty::Beginner, vec![]).unwrap_err(),
            SessionError::NoQuestions
        );

        let mut session = QuizSession::new("T", Difficulty::Beginner, vec![question("A")]).unwrap();
        assert_eq!(session.advance().unwrap_err(), SessionError::NotAnswered);
        assert_eq!(session.answer(Some(7)).unwrap_err(), SessionError::InvalidChoice(7));
        session.answer(Some(1)).unwrap();
        assert_eq!(session.answer(Some(0)).unwrap_err(), SessionError::AlreadyAnswered);
        assert!(!session.advance().unwrap());
        assert_eq!(session.answer(Some(0)).unwrap_err(), SessionError::Finished);
        assert_eq!(session.outcome().unwrap().score, 0);
    }
}
