//! Profile, badge and history views

use anyhow::Result;
use chrono::Local;

use legal_eagle::config::Config;
use legal_eagle::stats::{BADGES, StatsManager, streaks};

/// Show totals, streaks and accuracy breakdowns
pub async fn profile_command(config: &Config) -> Result<()> {
    let stats = StatsManager::open(config)?.load();

    if stats.total_quizzes_completed == 0 {
        println!("No quizzes completed yet. Start one with `legal-eagle play`.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let streak_note = if streaks::is_active(stats.last_quiz_date, today) {
        ""
    } else {
        " (inactive)"
    };

    println!("Quizzes completed: {}", stats.total_quizzes_completed);
    println!(
        "Questions answered: {} ({} correct, {}% accuracy)",
        stats.total_questions_answered,
        stats.total_correct_answers,
        stats.overall_accuracy()
    );
    println!("Points: {}", stats.total_points);
    println!(
        "Streak: {} day(s){} | Longest: {} day(s)",
        stats.current_streak, streak_note, stats.longest_streak
    );
    println!("Badges: {}/{}", stats.badges.len(), BADGES.len());

    println!("\nBy difficulty:");
    for (difficulty, record) in stats.performance_by_difficulty.iter() {
        println!(
            "  {:<13} {:>3}%  ({}/{})",
            difficulty,
            record.accuracy(),
            record.correct,
            record.total
        );
    }

    println!("\nBy topic:");
    let mut topics: Vec<_> = stats.performance_by_topic.iter().collect();
    topics.sort_by(|a, b| b.1.total.cmp(&a.1.total).then_with(|| a.0.cmp(b.0)));
    for (topic, record) in topics {
        println!(
            "  {:>3}%  ({}/{})  {}",
            record.accuracy(),
            record.correct,
            record.total,
            topic
        );
    }

    Ok(())
}

/// List the badge catalog with earned markers
pub async fn badges_command(config: &Config) -> Result<()> {
    let stats = StatsManager::open(config)?.load();

    for badge in BADGES {
        let marker = if stats.has_badge(badge.id.as_str()) { "[x]" } else { "[ ]" };
        println!(
            "{} {:<20} {:<12} {}",
            marker,
            badge.name,
            badge.category.label(),
            badge.description
        );
    }

    Ok(())
}

/// List recent quizzes, most recent first
pub async fn history_command(config: &Config, limit: usize) -> Result<()> {
    let stats = StatsManager::open(config)?.load();

    if stats.quiz_history.is_empty() {
        println!("No quiz history.");
        return Ok(());
    }

    for record in stats.quiz_history.iter().take(limit) {
        println!(
            "{}  {:<13} {:>3}/{:<3} {}",
            record.date.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            record.difficulty,
            record.score,
            record.total_questions,
            record.topic
        );
    }

    Ok(())
}
