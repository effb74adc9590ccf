#![doc(test(attr(deny(warnings))))]

//! FinControl turns a collection of dated income and expense entries into
//! month-scoped filtered views, summary statistics and a full-year
//! category × month report.
//!
//! ```
//! use fincontrol::core::{compute_filtered_and_stats, FilterSet};
//! use fincontrol::domain::{EntryDraft, EntryKind, EntryStatus, YearMonth};
//! use chrono::NaiveDate;
//!
//! let salary = EntryDraft::new(
//!     NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
//!     EntryKind::Income,
//!     "Salary",
//!     1000.0,
//!     EntryStatus::Paid,
//! )
//! .into_entry();
//! let month = YearMonth::new(2023, 1).unwrap();
//! let view = compute_filtered_and_stats(&[salary], month, &FilterSet::default());
//! assert_eq!(view.stats.balance_realized, 1000.0);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod format;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("fincontrol tracing initialized");
    });
}
