//! Presentation helpers for amounts, dates and labels.

use chrono::NaiveDate;

use crate::domain::{Entry, EntryKind, EntryStatus};

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    MonthFirst,
    DayFirst,
}

/// Locale-driven formatter covering the locales the app ships with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormatter {
    symbol: String,
    symbol_spaced: bool,
    decimal_separator: char,
    grouping_separator: char,
    date_order: DateOrder,
}

impl LocaleFormatter {
    /// `pt-BR` uses `R$ 1.234,56` and day-first dates; anything else falls back
    /// to `en-US` conventions.
    pub fn for_locale(locale: &str, currency: &str) -> Self {
        let symbol = currency_symbol(currency);
        match locale.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" => Self {
                symbol,
                symbol_spaced: true,
                decimal_separator: ',',
                grouping_separator: '.',
                date_order: DateOrder::DayFirst,
            },
            _ => Self {
                symbol,
                symbol_spaced: false,
                decimal_separator: '.',
                grouping_separator: ',',
                date_order: DateOrder::MonthFirst,
            },
        }
    }

    /// Signed amount of an entry, e.g. `- $12.00` for an expense.
    pub fn entry_amount(&self, entry: &Entry) -> String {
        let sign = match entry.kind {
            EntryKind::Income => '+',
            EntryKind::Expense => '-',
        };
        format!("{} {}", sign, self.format_amount(entry.amount))
    }

    /// Formats the entry's stored date, falling back to the raw text when it
    /// does not parse.
    pub fn entry_date(&self, entry: &Entry) -> String {
        entry
            .calendar_date()
            .map(|date| self.format_date(date))
            .unwrap_or_else(|| entry.date.as_str().to_string())
    }

    fn group_digits(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::for_locale("en-US", "USD")
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format_amount(&self, amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = self.group_digits(&(cents / 100).to_string());
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        let gap = if self.symbol_spaced { " " } else { "" };
        format!(
            "{sign}{}{gap}{whole}{}{:02}",
            self.symbol,
            self.decimal_separator,
            cents % 100
        )
    }
}

impl DateFormatter for LocaleFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        match self.date_order {
            DateOrder::MonthFirst => date.format("%m/%d/%Y").to_string(),
            DateOrder::DayFirst => date.format("%d/%m/%Y").to_string(),
        }
    }
}

fn currency_symbol(code: &str) -> String {
    match code.trim().to_ascii_uppercase().as_str() {
        "USD" => "$".into(),
        "BRL" => "R$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        other => format!("{other} "),
    }
}

/// Human label for a status; paid income reads as received.
pub fn status_label(kind: EntryKind, status: EntryStatus) -> &'static str {
    match (status, kind) {
        (EntryStatus::Paid, EntryKind::Income) => "Received",
        (EntryStatus::Paid, EntryKind::Expense) => "Paid",
        (EntryStatus::Pending, _) => "Pending",
    }
}
