use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a money movement. The stored amount is always non-negative;
/// the sign is derived from the kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Some(EntryKind::Income),
            "expense" => Some(EntryKind::Expense),
            _ => None,
        }
    }

    /// Applies the sign convention: income adds, expense subtracts.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            EntryKind::Income => amount,
            EntryKind::Expense => -amount,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement state: paid entries are realized, pending ones are expected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Paid,
    Pending,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Paid => "paid",
            EntryStatus::Pending => "pending",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "paid" => Some(EntryStatus::Paid),
            "pending" => Some(EntryStatus::Pending),
            _ => None,
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, EntryStatus::Paid)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar date as persisted (`YYYY-MM-DD`).
///
/// The raw text is kept verbatim so that a stored collection round-trips
/// losslessly even when a record carries a date that no longer parses. Such
/// records cannot be placed in a month or year bucket and are skipped by the
/// aggregation engines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EntryDate(String);

impl EntryDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), DATE_FORMAT).ok()
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recorded income or expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: String,
    pub date: EntryDate,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: String,
    pub description: String,
    #[serde(rename = "value")]
    pub amount: f64,
    pub status: EntryStatus,
}

impl Entry {
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date.calendar_date()
    }

    /// Amount with the kind's sign applied.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }

    /// Amounts are stored unsigned; a negative or non-finite value cannot be
    /// aggregated.
    pub fn has_valid_amount(&self) -> bool {
        amount_is_valid(self.amount)
    }

    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }

    /// Checks the record-level invariants that a caller can violate.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("entry id must not be empty".into());
        }
        validate_fields(&self.date, &self.category, self.amount)
    }
}

impl Identifiable for Entry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Entry {
    fn display_label(&self) -> String {
        format!(
            "entry:{} [{} {} {}]",
            self.id, self.date, self.kind, self.status
        )
    }
}

/// A new entry as submitted by a user, before it has been assigned an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryDraft {
    pub date: EntryDate,
    pub kind: EntryKind,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub status: EntryStatus,
}

impl EntryDraft {
    pub fn new(
        date: NaiveDate,
        kind: EntryKind,
        category: impl Into<String>,
        amount: f64,
        status: EntryStatus,
    ) -> Self {
        Self {
            date: date.into(),
            kind,
            category: category.into(),
            description: String::new(),
            amount,
            status,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_fields(&self.date, &self.category, self.amount)
    }

    /// Materializes the draft with a freshly generated id.
    pub fn into_entry(self) -> Entry {
        self.into_entry_with_id(Uuid::new_v4().to_string())
    }

    pub fn into_entry_with_id(self, id: impl Into<String>) -> Entry {
        Entry {
            id: id.into(),
            date: self.date,
            kind: self.kind,
            category: self.category,
            description: self.description,
            amount: self.amount,
            status: self.status,
        }
    }
}

fn validate_fields(date: &EntryDate, category: &str, amount: f64) -> Result<(), String> {
    if date.calendar_date().is_none() {
        return Err(format!("`{}` is not a valid YYYY-MM-DD date", date));
    }
    if category.trim().is_empty() {
        return Err("category must not be empty".into());
    }
    if !amount_is_valid(amount) {
        return Err(format!("amount must be a non-negative number, got {amount}"));
    }
    Ok(())
}

fn amount_is_valid(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}
