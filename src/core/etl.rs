use crate::core::Pipeline;
use crate::domain::model::{Outcome, ReportRecord};
use crate::utils::error::{ReportError, Result};
use crate::utils::monitor::SystemMonitor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Seed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub players: usize,
    pub source: DataSource,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
    fallback: Option<Vec<ReportRecord>>,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
            fallback: None,
        }
    }

    /// Records to publish when the live scrape is unreachable or too small.
    pub fn with_fallback(mut self, records: Vec<ReportRecord>) -> Self {
        self.fallback = Some(records);
        self
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting report build");
        self.monitor.log_stats("Start");

        let (records, source) = match self.live_records().await {
            Ok(records) => (records, DataSource::Live),
            Err(e) => match &self.fallback {
                Some(seed) if is_recoverable(&e) => {
                    tracing::warn!("Live data unusable ({}), publishing bundled roster", e);
                    (seed.clone(), DataSource::Seed)
                }
                _ => return Err(e),
            },
        };

        tracing::info!("Loading {} players", records.len());
        let output_path = self.pipeline.load(&records).await?;
        tracing::info!("Report saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            output_path,
            players: records.len(),
            source,
        })
    }

    async fn live_records(&self) -> Result<Vec<ReportRecord>> {
        tracing::info!("Extracting season tables...");
        let tables = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted current table: {} rows, prior table: {}",
            tables.current.as_ref().map(|t| t.rows.len()).unwrap_or(0),
            tables
                .prior
                .as_ref()
                .map(|t| format!("{} rows", t.rows.len()))
                .unwrap_or_else(|| "unavailable".to_string())
        );
        self.monitor.log_stats("Extract");

        tracing::info!("Transforming...");
        let outcome = self.pipeline.transform(tables).await?;
        self.monitor.log_stats("Transform");

        match outcome {
            Outcome::Data(records) => {
                tracing::info!("Transformed {} players", records.len());
                Ok(records)
            }
            Outcome::Insufficient {
                extracted,
                required,
            } => Err(ReportError::InsufficientDataError {
                extracted,
                required,
            }),
        }
    }
}

/// Failures where publishing the bundled roster still makes sense.
fn is_recoverable(error: &ReportError) -> bool {
    !matches!(
        error,
        ReportError::IoError(_)
            | ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
    )
}
