pub mod toml_config;

use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::core::normalize::DEFAULT_MIN_PLAYERS;
use crate::core::reconcile::DEFAULT_MIN_GAMES;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const BASE_URL: &str = "https://www.basketball-reference.com";
pub const DEFAULT_SEASON: u16 = 2026;
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_REPORT_FILENAME: &str = "nba_stats.html";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

pub fn totals_url(season: u16) -> String {
    format!("{}/leagues/NBA_{}_totals.html", BASE_URL, season)
}

pub fn shooting_url(season: u16) -> String {
    format!("{}/leagues/NBA_{}_shooting.html", BASE_URL, season)
}

/// Checks shared by every config source.
pub(crate) fn validate_settings(
    field_prefix: &str,
    urls: &[(&str, String)],
    output_path: &str,
    filename: &str,
    min_players: usize,
    timeout_seconds: u64,
) -> Result<()> {
    for (field, url) in urls {
        validation::validate_url(&format!("{}{}", field_prefix, field), url)?;
    }
    validation::validate_path("output_path", output_path)?;
    validation::validate_report_filename("filename", filename)?;
    validation::validate_positive_number("min_players", min_players, 1)?;
    validation::validate_range("timeout_seconds", timeout_seconds, 1, 300)?;
    Ok(())
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::core::ConfigProvider;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "nba-fg-report")]
    #[command(about = "Scrape NBA season totals and build an interactive FG% report")]
    pub struct CliConfig {
        /// Season to report on (the year the season ends in)
        #[arg(long, default_value_t = DEFAULT_SEASON)]
        pub season: u16,

        /// Override the current-season totals page
        #[arg(long)]
        pub current_url: Option<String>,

        /// Override the prior-season totals page
        #[arg(long)]
        pub prior_url: Option<String>,

        /// Override the shooting page used by --dunks
        #[arg(long)]
        pub shooting_url: Option<String>,

        #[arg(long, help = "Do not fetch the prior season for low-sample players")]
        pub no_prior: bool,

        #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
        pub output_path: String,

        #[arg(long, default_value = DEFAULT_REPORT_FILENAME)]
        pub filename: String,

        /// Players with fewer games than this are blended with the prior season
        #[arg(long, default_value_t = DEFAULT_MIN_GAMES)]
        pub min_games: u32,

        /// Minimum extracted players for a scrape to count as usable
        #[arg(long, default_value_t = DEFAULT_MIN_PLAYERS)]
        pub min_players: usize,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        #[arg(long, help = "Fail instead of falling back to the bundled roster")]
        pub no_seed: bool,

        #[arg(long, help = "Print dunk stats from the shooting page as JSON and exit")]
        pub dunks: bool,

        /// Load settings from a TOML file instead of flags
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        #[arg(long, help = "Log per-phase timing and memory usage")]
        pub monitor: bool,
    }

    impl ConfigProvider for CliConfig {
        fn current_season_url(&self) -> String {
            self.current_url
                .clone()
                .unwrap_or_else(|| totals_url(self.season))
        }

        fn prior_season_url(&self) -> Option<String> {
            if self.no_prior {
                return None;
            }
            Some(
                self.prior_url
                    .clone()
                    .unwrap_or_else(|| totals_url(self.season.saturating_sub(1))),
            )
        }

        fn shooting_url(&self) -> String {
            self.shooting_url
                .clone()
                .unwrap_or_else(|| shooting_url(self.season))
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn report_filename(&self) -> &str {
            &self.filename
        }

        fn min_games(&self) -> u32 {
            self.min_games
        }

        fn min_players(&self) -> usize {
            self.min_players
        }

        fn timeout_seconds(&self) -> u64 {
            self.timeout_seconds
        }

        fn user_agent(&self) -> &str {
            DEFAULT_USER_AGENT
        }

        fn seed_fallback(&self) -> bool {
            !self.no_seed
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            let mut urls = vec![
                ("current_url", self.current_season_url()),
                ("shooting_url", self.shooting_url()),
            ];
            if let Some(prior) = self.prior_season_url() {
                urls.push(("prior_url", prior));
            }
            validate_settings(
                "",
                &urls,
                &self.output_path,
                &self.filename,
                self.min_players,
                self.timeout_seconds,
            )
        }
    }

}
