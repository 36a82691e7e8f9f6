pub mod use_daily_entries;
pub mod use_newspapers;
