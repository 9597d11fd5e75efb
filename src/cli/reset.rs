//! Reset command implementation

use anyhow::{Result, bail};

use legal_eagle::config::Config;
use legal_eagle::stats::StatsManager;

/// Clear all statistics and badges
pub async fn reset_command(config: &Config, yes: bool) -> Result<()> {
    if !yes {
        bail!("This deletes all statistics and badges. Re-run with --yes to confirm.");
    }

    StatsManager::open(config)?.reset_all();
    println!("Statistics reset.");

    Ok(())
}
