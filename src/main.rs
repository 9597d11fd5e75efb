use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use legal_eagle::Difficulty;
use legal_eagle::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "legal-eagle")]
#[command(about = "Legal Eagle - quiz practice for Indian legal education")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.legal-eagle/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Play an interactive quiz from a question bank
    Play {
        /// Path to the JSON question bank
        #[arg(long)]
        bank: PathBuf,

        /// Quiz topic (matched case-insensitively)
        #[arg(long)]
        topic: Option<String>,

        /// Beginner, Intermediate or Expert
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Number of questions
        #[arg(long)]
        count: Option<u32>,

        /// Full-length Expert mock test across every topic
        #[arg(long)]
        mock_test: bool,
    },

    /// Record a finished quiz without playing it
    Record {
        #[arg(long)]
        topic: String,

        #[arg(long)]
        difficulty: Difficulty,

        /// Correct answers
        #[arg(long)]
        score: u32,

        /// Questions in the quiz
        #[arg(long)]
        total: u32,
    },

    /// Show totals, streaks and accuracy
    Profile,

    /// List all badges and which ones are earned
    Badges,

    /// Show recent quizzes
    History {
        /// Maximum number of entries
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// List the legal domains in a question bank
    Domains {
        /// Path to the JSON question bank
        #[arg(long)]
        bank: PathBuf,
    },

    /// List bookmarked questions
    Bookmarks,

    /// Reset all statistics and badges
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Init must work even when the existing config is unreadable
    let load_config = || Config::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Init { force } => {
            cli::init::init_command(cli.config.clone(), force).await?;
        }
        Commands::Play {
            bank,
            topic,
            difficulty,
            count,
            mock_test,
        } => {
            let args = cli::play::PlayArgs {
                topic,
                difficulty,
                count,
                mock_test,
            };
            cli::play::play_command(&load_config()?, &bank, args).await?;
        }
        Commands::Record {
            topic,
            difficulty,
            score,
            total,
        } => {
            cli::record::record_command(&load_config()?, topic, difficulty, score, total).await?;
        }
        Commands::Profile => {
            cli::profile::profile_command(&load_config()?).await?;
        }
        Commands::Badges => {
            cli::profile::badges_command(&load_config()?).await?;
        }
        Commands::History { limit } => {
            cli::profile::history_command(&load_config()?, limit).await?;
        }
        Commands::Domains { bank } => {
            cli::library::domains_command(&bank).await?;
        }
        Commands::Bookmarks => {
            cli::library::bookmarks_command(&load_config()?).await?;
        }
        Commands::Reset { yes } => {
            cli::reset::reset_command(&load_config()?, yes).await?;
        }
    }

    Ok(())
}
