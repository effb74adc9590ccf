//! Filter predicates for the monthly view.
//!
//! Form input arrives as loose text ([`RawFilters`]) and is normalized into a
//! closed [`FilterSet`] where "no constraint" is explicit. Anything that does
//! not parse degrades to "no constraint" instead of failing.

use serde::{Deserialize, Serialize};

use crate::domain::{Entry, EntryKind, EntryStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KindFilter {
    #[default]
    All,
    Only(EntryKind),
}

impl KindFilter {
    pub fn parse(value: &str) -> Self {
        EntryKind::parse(value).map_or(KindFilter::All, KindFilter::Only)
    }

    pub fn matches(&self, kind: EntryKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(expected) => *expected == kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EntryStatus),
}

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        EntryStatus::parse(value).map_or(StatusFilter::All, StatusFilter::Only)
    }

    pub fn matches(&self, status: EntryStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

/// Filter values exactly as typed into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFilters {
    pub kind: String,
    pub status: String,
    pub category: String,
    pub min_amount: String,
    pub max_amount: String,
    pub search: String,
}

/// Normalized filter predicates. `FilterSet::default()` applies no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    pub kind: KindFilter,
    pub status: StatusFilter,
    pub category: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub search: Option<String>,
}

impl FilterSet {
    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = KindFilter::Only(kind);
        self
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(&category.into());
        self
    }

    pub fn with_amount_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_amount = min.filter(|v| v.is_finite());
        self.max_amount = max.filter(|v| v.is_finite());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_blank(&search.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterSet::default()
    }

    /// Applies every predicate except the month scope.
    ///
    /// The hard gates (kind, status, category, amount bounds) run first; the
    /// free-text search only decides among entries that already passed them.
    pub fn matches(&self, entry: &Entry) -> bool {
        if !self.kind.matches(entry.kind) || !self.status.matches(entry.status) {
            return false;
        }
        if let Some(category) = &self.category {
            if entry.category != *category {
                return false;
            }
        }
        if self.min_amount.is_some_and(|min| entry.amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| entry.amount > max) {
            return false;
        }
        match &self.search {
            Some(term) => {
                let needle = term.to_lowercase();
                entry.description.to_lowercase().contains(&needle)
                    || entry.category.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

impl From<&RawFilters> for FilterSet {
    fn from(raw: &RawFilters) -> Self {
        Self {
            kind: KindFilter::parse(&raw.kind),
            status: StatusFilter::parse(&raw.status),
            category: non_blank(&raw.category),
            min_amount: parse_bound(&raw.min_amount),
            max_amount: parse_bound(&raw.max_amount),
            search: non_blank(&raw.search),
        }
    }
}

/// Parses an amount bound. Blank, non-numeric or non-finite text means unset.
pub fn parse_bound(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
