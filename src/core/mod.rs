//! Aggregation engines and entry lifecycle services.
//!
//! Everything here is a pure function of an entry snapshot plus parameters,
//! except [`services::EntryService`] which talks to the persistence collaborator.

pub mod filters;
pub mod services;
pub mod utils;

pub use filters::{FilterSet, KindFilter, RawFilters, StatusFilter};
pub use services::{
    compute_annual_matrix, compute_filtered_and_stats, AnnualMatrix, FilteredView, MatrixRow,
    SummaryStats,
};
