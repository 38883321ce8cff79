use crate::adapters::html_table::parse_first_table;
use crate::core::normalize::{build_report, ReportSettings};
use crate::core::shooting::{extract_dunk_stats, DunkOutcome};
use crate::core::{ConfigProvider, PageSource, Pipeline, Storage};
use crate::domain::model::{RawTable, ReportOutcome, ReportRecord, SeasonTables};
use crate::report::html::render_report;
use crate::utils::error::Result;

/// Scrapes the season totals pages, normalizes them and writes the HTML report.
pub struct StatsPipeline<S: Storage, P: PageSource, C: ConfigProvider> {
    storage: S,
    source: P,
    config: C,
}

impl<S: Storage, P: PageSource, C: ConfigProvider> StatsPipeline<S, P, C> {
    pub fn new(storage: S, source: P, config: C) -> Self {
        Self {
            storage,
            source,
            config,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    async fn fetch_table(&self, url: &str) -> Result<Option<RawTable>> {
        let html = self.source.fetch_page(url).await?;
        let table = parse_first_table(&html)?;
        if table.is_none() {
            tracing::warn!("No table found at {}", url);
        }
        Ok(table)
    }

    /// Dunk volume from the season shooting page.
    pub async fn dunk_stats(&self) -> Result<DunkOutcome> {
        let url = self.config.shooting_url();
        tracing::info!("Fetching shooting page: {}", url);
        let table = self.fetch_table(&url).await?;
        extract_dunk_stats(table.as_ref(), self.config.min_players())
    }
}

#[async_trait::async_trait]
impl<S: Storage, P: PageSource, C: ConfigProvider> Pipeline for StatsPipeline<S, P, C> {
    async fn extract(&self) -> Result<SeasonTables> {
        let current_url = self.config.current_season_url();
        tracing::info!("Fetching current season: {}", current_url);
        let current = self.fetch_table(&current_url).await?;

        let prior = match self.config.prior_season_url() {
            Some(url) => {
                tracing::info!("Fetching prior season: {}", url);
                match self.fetch_table(&url).await {
                    Ok(table) => table,
                    Err(e) => {
                        tracing::warn!(
                            "Prior season unavailable, low-sample players use current stats only: {}",
                            e
                        );
                        None
                    }
                }
            }
            None => {
                tracing::debug!("Prior season lookup disabled");
                None
            }
        };

        Ok(SeasonTables { current, prior })
    }

    async fn transform(&self, tables: SeasonTables) -> Result<ReportOutcome> {
        let settings = ReportSettings {
            min_games: self.config.min_games(),
            min_players: self.config.min_players(),
        };
        build_report(tables.current.as_ref(), tables.prior.as_ref(), &settings)
    }

    async fn load(&self, records: &[ReportRecord]) -> Result<String> {
        let html = render_report(records, chrono::Local::now().date_naive())?;
        let filename = self.config.report_filename();

        self.storage.write_file(filename, html.as_bytes()).await?;
        tracing::debug!("Wrote {} bytes to {}", html.len(), filename);

        Ok(format!("{}/{}", self.config.output_path(), filename))
    }
}
