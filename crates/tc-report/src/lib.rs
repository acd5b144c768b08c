//! tc-report: tabular records, diagram series and console summaries.

pub mod diagram;
pub mod export;
pub mod records;
pub mod summary;

pub use diagram::{Diagram, DiagramKind, Series};
pub use export::{ExportFormat, render, write_report};
pub use records::{ExportScope, StateRecord, records};
pub use summary::{cycle_summary, efficiency_line};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Cycle(#[from] tc_cycle::CycleError),

    #[error("Unknown {what}: {value}")]
    Unknown { what: &'static str, value: String },
}
