use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::config::{
    shooting_url, totals_url, validate_settings, DEFAULT_OUTPUT_PATH, DEFAULT_REPORT_FILENAME,
    DEFAULT_SEASON, DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::normalize::DEFAULT_MIN_PLAYERS;
use crate::core::reconcile::DEFAULT_MIN_GAMES;
use crate::core::ConfigProvider;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub reconcile: ReconcileConfig,
    #[serde(default)]
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub season: Option<u16>,
    pub current_url: Option<String>,
    pub prior_url: Option<String>,
    pub shooting_url: Option<String>,
    /// Set to false to skip the prior-season fetch.
    pub use_prior_season: Option<bool>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconcileConfig {
    pub min_games: Option<u32>,
    pub min_players: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: Option<String>,
    pub filename: Option<String>,
    pub seed_fallback: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        toml::from_str(&processed).map_err(|e| ReportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn season(&self) -> u16 {
        self.source.season.unwrap_or(DEFAULT_SEASON)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn current_season_url(&self) -> String {
        self.source
            .current_url
            .clone()
            .unwrap_or_else(|| totals_url(self.season()))
    }

    fn prior_season_url(&self) -> Option<String> {
        if !self.source.use_prior_season.unwrap_or(true) {
            return None;
        }
        Some(
            self.source
                .prior_url
                .clone()
                .unwrap_or_else(|| totals_url(self.season().saturating_sub(1))),
        )
    }

    fn shooting_url(&self) -> String {
        self.source
            .shooting_url
            .clone()
            .unwrap_or_else(|| shooting_url(self.season()))
    }

    fn output_path(&self) -> &str {
        self.load.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn report_filename(&self) -> &str {
        self.load.filename.as_deref().unwrap_or(DEFAULT_REPORT_FILENAME)
    }

    fn min_games(&self) -> u32 {
        self.reconcile.min_games.unwrap_or(DEFAULT_MIN_GAMES)
    }

    fn min_players(&self) -> usize {
        self.reconcile.min_players.unwrap_or(DEFAULT_MIN_PLAYERS)
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn user_agent(&self) -> &str {
        self.source.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    fn seed_fallback(&self) -> bool {
        self.load.seed_fallback.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let mut urls = vec![
            ("current_url", self.current_season_url()),
            ("shooting_url", self.shooting_url()),
        ];
        if let Some(prior) = self.prior_season_url() {
            urls.push(("prior_url", prior));
        }
        validate_settings(
            "source.",
            &urls,
            self.output_path(),
            self.report_filename(),
            self.min_players(),
            self.timeout_seconds(),
        )
    }
}
