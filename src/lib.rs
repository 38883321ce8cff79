pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpPageSource, storage::LocalStorage};
pub use config::toml_config::TomlConfig;
pub use core::{
    etl::{DataSource, EtlEngine, RunSummary},
    pipeline::StatsPipeline,
};
pub use utils::error::{ReportError, Result};
