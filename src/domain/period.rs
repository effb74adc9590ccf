use std::{fmt, str::FromStr};

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: usize = 12;

/// Three-letter column headers, January first.
pub const MONTH_LABELS: [&str; MONTHS_PER_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month (`YYYY-MM`) used to scope the monthly view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Zero-based month slot of a date (January = 0).
pub fn month_index(date: NaiveDate) -> usize {
    date.month0() as usize
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let (year, month) = trimmed
            .split_once('-')
            .ok_or_else(|| format!("`{trimmed}` is not in YYYY-MM form"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("`{trimmed}` has an invalid year"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("`{trimmed}` has an invalid month"))?;
        YearMonth::new(year, month).ok_or_else(|| format!("`{trimmed}` has an invalid month"))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
