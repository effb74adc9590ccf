//! Renders engine output as terminal tables.

use crate::cli::table::{Table, TableColumn, Tone};
use crate::core::{AnnualMatrix, FilteredView, MatrixRow, SummaryStats};
use crate::domain::{EntryKind, MONTH_LABELS};
use crate::format::{status_label, CurrencyFormatter, LocaleFormatter};

const CATEGORY_WIDTH: usize = 16;
const CELL_WIDTH: usize = 12;
const TOTAL_WIDTH: usize = 14;

pub fn render_monthly_view(view: &FilteredView, fmt: &LocaleFormatter, title: &str) -> String {
    let mut sections = vec![render_stats(&view.stats, fmt)];

    if view.filtered.is_empty() {
        sections.push("No entries found.".to_string());
    } else {
        let mut table = Table::new(
            Some(format!("{title} ({} entries)", view.filtered.len())),
            vec![
                TableColumn::left("Date", 10),
                TableColumn::left("Description", 24),
                TableColumn::left("Category", 14),
                TableColumn::left("Status", 9),
                TableColumn::right("Amount", 16),
                TableColumn::left("Id", 36),
            ],
        );
        for entry in &view.filtered {
            let tone = match entry.kind {
                EntryKind::Income => Tone::Positive,
                EntryKind::Expense => Tone::Negative,
            };
            table.add_row(
                vec![
                    fmt.entry_date(entry),
                    entry.description.clone(),
                    entry.category.clone(),
                    status_label(entry.kind, entry.status).to_string(),
                    fmt.entry_amount(entry),
                    entry.id.clone(),
                ],
                tone,
            );
        }
        sections.push(table.render());
    }

    sections.extend(skipped_notes(view.undated, view.invalid_amount));
    sections.join("\n\n")
}

pub fn render_stats(stats: &SummaryStats, fmt: &LocaleFormatter) -> String {
    let mut lines: Vec<String> = [
        ("Income", stats.income),
        ("Expenses paid", stats.expenses_paid),
        ("Expenses pending", stats.expenses_pending),
        ("Realized balance", stats.balance_realized),
        ("Expected balance", stats.balance_expected),
    ]
    .iter()
    .map(|(label, value)| format!("{label:<18} {:>16}", fmt.format_amount(*value)))
    .collect();

    if let Some(split) = stats.realized_split() {
        let income_share = split.income / (split.income + split.expenses) * 100.0;
        lines.push(format!(
            "{:<18} {:>15.0}% income / {:.0}% expenses",
            "Realized split",
            income_share,
            100.0 - income_share
        ));
    }
    lines.join("\n")
}

pub fn render_annual_matrix(matrix: &AnnualMatrix, fmt: &LocaleFormatter) -> String {
    let mut columns = vec![TableColumn::left("Category", CATEGORY_WIDTH)];
    columns.extend(
        MONTH_LABELS
            .iter()
            .map(|label| TableColumn::right(*label, CELL_WIDTH)),
    );
    columns.push(TableColumn::right("Year total", TOTAL_WIDTH));
    let mut table = Table::new(Some(format!("Annual report {}", matrix.year)), columns);

    table.add_section("INCOME");
    push_rows(&mut table, &matrix.income_rows, fmt, "No income recorded");
    table.add_row(
        total_cells("TOTAL INCOME", &matrix.total_income_per_month, matrix.total_income_year, fmt),
        Tone::Total,
    );

    table.add_section("EXPENSES");
    push_rows(&mut table, &matrix.expense_rows, fmt, "No expenses recorded");
    table.add_row(
        total_cells("TOTAL EXPENSES", &matrix.total_expense_per_month, matrix.total_expense_year, fmt),
        Tone::Total,
    );

    let net_tone = if matrix.total_net_year < 0.0 {
        Tone::Negative
    } else {
        Tone::Positive
    };
    table.add_row(
        total_cells("NET RESULT", &matrix.net_result_per_month, matrix.total_net_year, fmt),
        net_tone,
    );

    let mut sections = vec![table.render()];
    sections.extend(skipped_notes(matrix.undated, matrix.invalid_amount));
    sections.join("\n\n")
}

fn skipped_notes(undated: usize, invalid_amount: usize) -> Vec<String> {
    let mut notes = Vec::new();
    if undated > 0 {
        notes.push(format!(
            "{undated} entries skipped: their date could not be read."
        ));
    }
    if invalid_amount > 0 {
        notes.push(format!(
            "{invalid_amount} entries skipped: their amount is negative or not a number."
        ));
    }
    notes
}

fn push_rows(table: &mut Table, rows: &[MatrixRow], fmt: &LocaleFormatter, empty: &str) {
    if rows.is_empty() {
        table.add_row(vec![empty.to_string()], Tone::Plain);
        return;
    }
    for row in rows {
        let mut cells = vec![row.category.clone()];
        cells.extend(row.values.iter().map(|value| {
            if *value > 0.0 {
                fmt.format_amount(*value)
            } else {
                "-".to_string()
            }
        }));
        cells.push(fmt.format_amount(row.total));
        table.add_row(cells, Tone::Plain);
    }
}

fn total_cells(label: &str, values: &[f64], total: f64, fmt: &LocaleFormatter) -> Vec<String> {
    let mut cells = vec![label.to_string()];
    cells.extend(values.iter().map(|value| fmt.format_amount(*value)));
    cells.push(fmt.format_amount(total));
    cells
}
