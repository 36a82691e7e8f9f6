pub mod daily_entry;
pub mod newspaper;

pub use daily_entry::{DailyEntry, EntryValidationError, NewEntryPrices};
pub use newspaper::Newspaper;
