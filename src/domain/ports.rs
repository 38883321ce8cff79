use crate::domain::model::{ReportOutcome, ReportRecord, SeasonTables};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Retrieves raw page HTML. Implementations own timeouts and transport.
pub trait PageSource: Send + Sync {
    fn fetch_page(&self, url: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn current_season_url(&self) -> String;
    /// `None` disables the prior-season fallback entirely.
    fn prior_season_url(&self) -> Option<String>;
    fn shooting_url(&self) -> String;
    fn output_path(&self) -> &str;
    fn report_filename(&self) -> &str;
    fn min_games(&self) -> u32;
    fn min_players(&self) -> usize;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
    fn seed_fallback(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SeasonTables>;
    async fn transform(&self, tables: SeasonTables) -> Result<ReportOutcome>;
    async fn load(&self, records: &[ReportRecord]) -> Result<String>;
}
