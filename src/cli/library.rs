//! Domain and bookmark listings

use std::path::Path;

use anyhow::{Context, Result};

use legal_eagle::bookmarks::Bookmarks;
use legal_eagle::config::Config;
use legal_eagle::content::{self, QuestionBank};
use legal_eagle::stats::StatsManager;

/// List the legal domains offered by a question bank
pub async fn domains_command(bank_path: &Path) -> Result<()> {
    let bank = QuestionBank::from_path(bank_path)
        .await
        .with_context(|| format!("Failed to load question bank: {}", bank_path.display()))?;
    let domains = content::fetch_domains(&bank).await?;

    for domain in domains {
        println!("{} [{}]", domain.name, domain.icon);
        println!("    {}", domain.description);
        for subdomain in &domain.subdomains {
            println!("    - {}", subdomain);
        }
        println!();
    }

    Ok(())
}

/// List bookmarked questions with their answers
pub async fn bookmarks_command(config: &Config) -> Result<()> {
    let manager = StatsManager::open(config)?;
    let bookmarks = Bookmarks::load(manager.backend());

    if bookmarks.is_empty() {
        println!("No bookmarks yet. Press `b` during a quiz to save a question.");
        return Ok(());
    }

    println!("Bookmarks ({}):\n", bookmarks.len());
    for (i, question) in bookmarks.questions().iter().enumerate() {
        println!("  {}. {}", i + 1, question.question);
        println!("     Answer: {}", question.correct_answer);
        println!("     {}", question.explanation);
        println!();
    }

    Ok(())
}
