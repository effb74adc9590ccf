//! First-run sample collection.

use crate::domain::{Entry, EntryDate, EntryKind, EntryStatus};

/// Entries written to an empty store so a fresh installation has something to show.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        sample("1", "2023-10-05", EntryKind::Income, "Salary", "Monthly salary", 5000.0, EntryStatus::Paid),
        sample("2", "2023-10-10", EntryKind::Expense, "Housing", "Rent", 1500.0, EntryStatus::Paid),
        sample("3", "2023-10-15", EntryKind::Expense, "Food", "Weekly groceries", 450.5, EntryStatus::Paid),
        sample("4", "2023-10-20", EntryKind::Expense, "Leisure", "Movies and dinner", 200.0, EntryStatus::Pending),
        sample("5", "2023-10-25", EntryKind::Income, "Investments", "Dividends", 150.25, EntryStatus::Pending),
    ]
}

fn sample(
    id: &str,
    date: &str,
    kind: EntryKind,
    category: &str,
    description: &str,
    amount: f64,
    status: EntryStatus,
) -> Entry {
    Entry {
        id: id.into(),
        date: EntryDate::new(date),
        kind,
        category: category.into(),
        description: description.into(),
        amount,
        status,
    }
}
