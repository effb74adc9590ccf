#![allow(dead_code)]

use chrono::NaiveDate;
use fincontrol::domain::{Entry, EntryDraft, EntryKind, EntryStatus};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn entry(
    id: &str,
    on: NaiveDate,
    kind: EntryKind,
    status: EntryStatus,
    category: &str,
    amount: f64,
    description: &str,
) -> Entry {
    EntryDraft::new(on, kind, category, amount, status)
        .with_description(description)
        .into_entry_with_id(id)
}

pub fn income(id: &str, on: NaiveDate, category: &str, amount: f64) -> Entry {
    entry(id, on, EntryKind::Income, EntryStatus::Paid, category, amount, "")
}

pub fn expense(id: &str, on: NaiveDate, category: &str, amount: f64) -> Entry {
    entry(id, on, EntryKind::Expense, EntryStatus::Paid, category, amount, "")
}

/// A year of mixed entries spread over every month, plus a few outside it.
pub fn mixed_year(year: i32) -> Vec<Entry> {
    let categories = ["Food", "Housing", "Transport", "Leisure", "Health"];
    let mut entries = Vec::new();
    for month in 1..=12u32 {
        for (idx, category) in categories.iter().enumerate() {
            let day = 1 + (idx as u32 * 5);
            let status = if (month as usize + idx) % 3 == 0 {
                EntryStatus::Pending
            } else {
                EntryStatus::Paid
            };
            entries.push(entry(
                &format!("e-{month}-{idx}"),
                date(year, month, day),
                EntryKind::Expense,
                status,
                category,
                10.0 * (idx as f64 + 1.0) + month as f64,
                "",
            ));
        }
        entries.push(entry(
            &format!("salary-{month}"),
            date(year, month, 5),
            EntryKind::Income,
            if month % 4 == 0 {
                EntryStatus::Pending
            } else {
                EntryStatus::Paid
            },
            "Salary",
            3000.0 + month as f64,
            "Payroll",
        ));
    }
    entries.push(income("prev-year", date(year - 1, 12, 31), "Salary", 999.0));
    entries.push(expense("next-year", date(year + 1, 1, 1), "Food", 77.0));
    entries
}
