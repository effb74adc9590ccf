//! Month-scoped filtered view and summary statistics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::filters::FilterSet;
use crate::core::utils::sort_newest_first;
use crate::domain::{Displayable, Entry, EntryKind, EntryStatus, YearMonth};

/// The five headline figures of the monthly view.
///
/// Pending income only shows up in `balance_expected`; there is no separate
/// pending-income figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub income: f64,
    pub expenses_paid: f64,
    pub expenses_pending: f64,
    pub balance_expected: f64,
    pub balance_realized: f64,
}

impl SummaryStats {
    fn accumulate(mut self, entry: &Entry) -> Self {
        self.balance_expected += entry.signed_amount();
        match (entry.kind, entry.status) {
            (EntryKind::Income, EntryStatus::Paid) => {
                self.income += entry.amount;
                self.balance_realized += entry.amount;
            }
            (EntryKind::Income, EntryStatus::Pending) => {}
            (EntryKind::Expense, EntryStatus::Paid) => {
                self.expenses_paid += entry.amount;
                self.balance_realized -= entry.amount;
            }
            (EntryKind::Expense, EntryStatus::Pending) => {
                self.expenses_pending += entry.amount;
            }
        }
        self
    }

    /// Paid income against paid expenses, or `None` when there is nothing to chart.
    pub fn realized_split(&self) -> Option<RealizedSplit> {
        if self.income == 0.0 && self.expenses_paid == 0.0 {
            return None;
        }
        Some(RealizedSplit {
            income: self.income,
            expenses: self.expenses_paid,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealizedSplit {
    pub income: f64,
    pub expenses: f64,
}

/// Result of one monthly recomputation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredView {
    /// Matching entries, most recent first.
    pub filtered: Vec<Entry>,
    pub stats: SummaryStats,
    /// Entries skipped because their date does not parse.
    pub undated: usize,
    /// Entries skipped because their stored amount is negative or not finite.
    pub invalid_amount: usize,
}

pub struct SummaryService;

impl SummaryService {
    pub fn filtered_with_stats(
        entries: &[Entry],
        month: YearMonth,
        filters: &FilterSet,
    ) -> FilteredView {
        compute_filtered_and_stats(entries, month, filters)
    }

    /// Folds an already filtered set into its summary figures.
    pub fn stats_for(entries: &[Entry]) -> SummaryStats {
        entries
            .iter()
            .fold(SummaryStats::default(), SummaryStats::accumulate)
    }
}

/// Filters `entries` down to `month` and `filters`, then summarizes the result.
pub fn compute_filtered_and_stats(
    entries: &[Entry],
    month: YearMonth,
    filters: &FilterSet,
) -> FilteredView {
    let mut undated = 0;
    let mut invalid_amount = 0;
    let mut filtered: Vec<Entry> = entries
        .iter()
        .filter(|entry| {
            if !entry.has_valid_amount() {
                debug!(
                    entry = %entry.display_label(),
                    amount = entry.amount,
                    "skipping entry with invalid amount"
                );
                invalid_amount += 1;
                return false;
            }
            match entry.calendar_date() {
                Some(date) => month.contains(date),
                None => {
                    debug!(entry = %entry.display_label(), "skipping entry with unparseable date");
                    undated += 1;
                    false
                }
            }
        })
        .filter(|entry| filters.matches(entry))
        .cloned()
        .collect();
    sort_newest_first(&mut filtered);

    let stats = SummaryService::stats_for(&filtered);
    debug!(
        %month,
        matched = filtered.len(),
        undated,
        invalid_amount,
        "recomputed monthly view"
    );
    FilteredView {
        filtered,
        stats,
        undated,
        invalid_amount,
    }
}
