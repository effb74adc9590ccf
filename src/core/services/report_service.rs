//! Full-year category × month matrix.
//!
//! Pending entries are part of the matrix: the annual view is a projection,
//! unlike the realized balance of the monthly summary.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{period::month_index, Displayable, Entry, EntryKind, MONTHS_PER_YEAR};

pub type MonthValues = [f64; MONTHS_PER_YEAR];

/// One category line of the matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub category: String,
    pub values: MonthValues,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualMatrix {
    pub year: i32,
    /// Income categories, highest yearly total first.
    pub income_rows: Vec<MatrixRow>,
    /// Expense categories, highest yearly total first.
    pub expense_rows: Vec<MatrixRow>,
    pub total_income_per_month: MonthValues,
    pub total_expense_per_month: MonthValues,
    pub net_result_per_month: MonthValues,
    pub total_income_year: f64,
    pub total_expense_year: f64,
    pub total_net_year: f64,
    /// Entries skipped because their date does not parse.
    pub undated: usize,
    /// Entries skipped because their stored amount is negative or not finite.
    pub invalid_amount: usize,
}

impl AnnualMatrix {
    pub fn is_empty(&self) -> bool {
        self.income_rows.is_empty() && self.expense_rows.is_empty()
    }

    pub fn rows(&self, kind: EntryKind) -> &[MatrixRow] {
        match kind {
            EntryKind::Income => &self.income_rows,
            EntryKind::Expense => &self.expense_rows,
        }
    }
}

pub struct ReportService;

impl ReportService {
    pub fn annual_matrix(entries: &[Entry], year: i32) -> AnnualMatrix {
        compute_annual_matrix(entries, year)
    }
}

/// Builds the category × month matrix of `year` from the full collection.
pub fn compute_annual_matrix(entries: &[Entry], year: i32) -> AnnualMatrix {
    let mut income: BTreeMap<&str, MonthValues> = BTreeMap::new();
    let mut expense: BTreeMap<&str, MonthValues> = BTreeMap::new();
    let mut undated = 0;
    let mut invalid_amount = 0;

    for entry in entries {
        if !entry.has_valid_amount() {
            debug!(
                entry = %entry.display_label(),
                amount = entry.amount,
                "skipping entry with invalid amount"
            );
            invalid_amount += 1;
            continue;
        }
        let Some(date) = entry.calendar_date() else {
            debug!(entry = %entry.display_label(), "skipping entry with unparseable date");
            undated += 1;
            continue;
        };
        if date.year() != year {
            continue;
        }
        let group = match entry.kind {
            EntryKind::Income => &mut income,
            EntryKind::Expense => &mut expense,
        };
        let cells = group
            .entry(entry.category.as_str())
            .or_insert([0.0; MONTHS_PER_YEAR]);
        cells[month_index(date)] += entry.amount;
    }

    let income_rows = into_sorted_rows(income);
    let expense_rows = into_sorted_rows(expense);

    let total_income_per_month = column_totals(&income_rows);
    let total_expense_per_month = column_totals(&expense_rows);
    let net_result_per_month: MonthValues =
        std::array::from_fn(|m| total_income_per_month[m] - total_expense_per_month[m]);

    let total_income_year: f64 = total_income_per_month.iter().sum();
    let total_expense_year: f64 = total_expense_per_month.iter().sum();

    debug!(
        year,
        income_rows = income_rows.len(),
        expense_rows = expense_rows.len(),
        undated,
        invalid_amount,
        "recomputed annual matrix"
    );

    AnnualMatrix {
        year,
        income_rows,
        expense_rows,
        total_income_per_month,
        total_expense_per_month,
        net_result_per_month,
        total_income_year,
        total_expense_year,
        total_net_year: total_income_year - total_expense_year,
        undated,
        invalid_amount,
    }
}

// The map iterates in category order and the sort is stable, so equal totals
// stay alphabetical.
fn into_sorted_rows(group: BTreeMap<&str, MonthValues>) -> Vec<MatrixRow> {
    let mut rows: Vec<MatrixRow> = group
        .into_iter()
        .map(|(category, values)| MatrixRow {
            category: category.to_string(),
            total: values.iter().sum(),
            values,
        })
        .collect();
    rows.sort_by(|a, b| b.total.total_cmp(&a.total));
    rows
}

fn column_totals(rows: &[MatrixRow]) -> MonthValues {
    let mut totals = [0.0; MONTHS_PER_YEAR];
    for row in rows {
        for (slot, value) in totals.iter_mut().zip(row.values.iter()) {
            *slot += value;
        }
    }
    totals
}
