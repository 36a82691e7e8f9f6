pub mod daily_entry_mapper;
pub mod newspaper_mapper;
