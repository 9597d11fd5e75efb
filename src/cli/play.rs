//! Play command implementation

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use legal_eagle::Difficulty;
use legal_eagle::bookmarks::{BookmarkToggle, Bookmarks};
use legal_eagle::config::Config;
use legal_eagle::content::{
    self, MOCK_TEST_QUESTION_COUNT, MOCK_TEST_TOPIC, QuestionBank,
};
use legal_eagle::session::QuizSession;
use legal_eagle::stats::{BadgeId, StatsManager};

use super::record::print_completion;

/// Options for an interactive quiz
pub struct PlayArgs {
    pub topic: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub count: Option<u32>,
    pub mock_test: bool,
}

/// Run an interactive quiz on stdin/stdout
pub async fn play_command(config: &Config, bank_path: &Path, args: PlayArgs) -> Result<()> {
    let (topic, difficulty, count) = if args.mock_test {
        (
            MOCK_TEST_TOPIC.to_string(),
            Difficulty::Expert,
            MOCK_TEST_QUESTION_COUNT,
        )
    } else {
        let Some(topic) = args.topic.filter(|t| !t.trim().is_empty()) else {
            bail!("--topic is required unless --mock-test is given");
        };
        (
            topic.trim().to_string(),
            args.difficulty.unwrap_or(config.settings.default_difficulty),
            args.count.unwrap_or(config.settings.question_count),
        )
    };

    let bank = QuestionBank::from_path(bank_path)
        .await
        .with_context(|| format!("Failed to load question bank: {}", bank_path.display()))?;
    let questions = content::fetch_questions(&bank, &topic, count, difficulty).await?;

    let manager = StatsManager::open(config)?;
    let mut bookmarks = Bookmarks::load(manager.backend());
    let mut session = QuizSession::new(topic, difficulty, questions)?;

    println!(
        "{} quiz on \"{}\" - {} questions\n",
        session.difficulty(),
        session.topic(),
        session.total_questions()
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(question) = session.current_question().cloned() {
        println!(
            "Question {}/{}: {}",
            session.question_number(),
            session.total_questions(),
            question.question
        );
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let choice = loop {
            print!("Answer [1-4, h = hint, b = bookmark, enter = skip]: ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next().transpose()? else {
                break None;
            };
            match line.trim() {
                "" => break None,
                "h" => println!("Hint: {}", question.hint),
                "b" => {
                    let toggle = bookmarks.toggle(&question);
                    match toggle {
                        BookmarkToggle::Added { count } => println!("Bookmarked ({count} saved)"),
                        BookmarkToggle::Removed { count } => {
                            println!("Bookmark removed ({count} saved)")
                        }
                    }
                    if toggle.reaches_bookworm() {
                        for badge in manager.award_badge(BadgeId::Bookworm.as_str()).new_badges {
                            println!("New badge: {} - {}", badge.name, badge.description);
                        }
                    }
                }
                input => match input.parse::<usize>() {
                    Ok(n) if (1..=question.options.len()).contains(&n) => break Some(n - 1),
                    _ => println!("Please enter a number between 1 and {}", question.options.len()),
                },
            }
        };

        let feedback = session.answer(choice)?;
        if feedback.correct {
            println!("Correct!");
        } else if feedback.timed_out {
            println!("Skipped. The answer was: {}", feedback.correct_answer);
        } else {
            println!("Incorrect. The answer was: {}", feedback.correct_answer);
        }
        println!("{}\n", feedback.explanation);

        session.advance()?;
    }

    let Some(outcome) = session.outcome() else {
        bail!("Quiz ended before every question was answered");
    };
    let update = manager.record_completion(&outcome);
    print_completion(&outcome, &update);

    Ok(())
}
