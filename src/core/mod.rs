pub mod aggregate;
pub mod columns;
pub mod etl;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod prior;
pub mod reconcile;
pub mod shooting;

pub use crate::domain::model::{Outcome, ReportOutcome, ReportRecord, SeasonTables};
pub use crate::domain::ports::{ConfigProvider, PageSource, Pipeline, Storage};
pub use crate::utils::error::Result;
