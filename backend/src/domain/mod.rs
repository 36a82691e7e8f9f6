//! # Domain Module
//!
//! Business logic for the newspaper tracker, independent of HTTP and SQL.
//!
//! ## Module Organization
//!
//! - **models**: stored entry and newspaper types, price validation
//! - **daily_entry_service**: month listing and upsert of daily entries
//! - **newspaper_service**: reference table listing and seeding

pub mod daily_entry_service;
pub mod models;
pub mod newspaper_service;

pub use daily_entry_service::{DailyEntryService, UpsertEntryCommand};
pub use newspaper_service::NewspaperService;
