//! Record command implementation

use anyhow::{Result, bail};

use legal_eagle::Difficulty;
use legal_eagle::config::Config;
use legal_eagle::stats::{CompletionUpdate, QuizOutcome, StatsManager, StreakChange};

/// Apply a finished quiz without playing it interactively
pub async fn record_command(
    config: &Config,
    topic: String,
    difficulty: Difficulty,
    score: u32,
    total: u32,
) -> Result<()> {
    if topic.trim().is_empty() {
        bail!("Topic must not be empty");
    }
    if score > total {
        tracing::warn!("Score {} exceeds {} questions, clamping", score, total);
    }

    let manager = StatsManager::open(config)?;
    let outcome = QuizOutcome::new(topic.trim(), difficulty, score, total);
    let update = manager.record_completion(&outcome);
    print_completion(&outcome, &update);

    Ok(())
}

/// Print the result screen for a completed quiz
pub fn print_completion(outcome: &QuizOutcome, update: &CompletionUpdate) {
    println!(
        "Score: {}/{} ({}%) on \"{}\" ({})",
        outcome.clamped_score(),
        outcome.total_questions,
        outcome.percentage(),
        outcome.topic,
        outcome.difficulty
    );
    println!("{}", outcome.feedback());
    println!(
        "+{} points (total {})",
        update.points_earned, update.stats.total_points
    );

    match update.streak_change {
        StreakChange::Extended => println!(
            "Streak extended: {} days in a row!",
            update.stats.current_streak
        ),
        StreakChange::Reset | StreakChange::Started => println!("Streak: 1 day"),
        StreakChange::Unchanged => {}
    }

    for badge in &update.new_badges {
        println!("New badge: {} - {}", badge.name, badge.description);
    }
}
