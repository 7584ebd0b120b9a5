pub mod entry;
pub mod period;

pub use entry::{EntryForm, NewEntry, TimeEntry};
pub use period::{DateRange, Period};
