pub mod entry_service;
pub mod report_service;
pub mod summary_service;

pub use entry_service::EntryService;
pub use report_service::{compute_annual_matrix, AnnualMatrix, MatrixRow, ReportService};
pub use summary_service::{
    compute_filtered_and_stats, FilteredView, RealizedSplit, SummaryService, SummaryStats,
};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
    #[error("Entry not found: {0}")]
    NotFound(String),
}
