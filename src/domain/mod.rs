pub mod category;
pub mod common;
pub mod entry;
pub mod period;

pub use common::{Displayable, Identifiable};
pub use entry::{Entry, EntryDate, EntryDraft, EntryKind, EntryStatus};
pub use period::{YearMonth, MONTHS_PER_YEAR, MONTH_LABELS};
