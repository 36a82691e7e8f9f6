//! # Storage Module
//!
//! Handles all data persistence for the tracker.
//!
//! ## Key Responsibilities
//!
//! - **Connection Management**: one SQLite pool, created lazily so the server
//!   starts even when the database is not reachable yet
//! - **Schema Bootstrap**: `CREATE TABLE IF NOT EXISTS` for the two tables
//! - **Repositories**: parameterized SQL behind the storage traits
//!
//! Each repository call is a single statement; there are no transactions
//! spanning calls.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{DailyEntryRepository, NewspaperRepository};
pub use traits::{DailyEntryStorage, NewspaperStorage};
