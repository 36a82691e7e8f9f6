pub mod daily_entry_repository;
pub mod newspaper_repository;

pub use daily_entry_repository::DailyEntryRepository;
pub use newspaper_repository::NewspaperRepository;
