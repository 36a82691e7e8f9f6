//! # Storage Traits
//!
//! Storage abstractions the domain layer depends on, so services can be
//! exercised against any backend that implements them.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::{DailyEntry, Newspaper, NewEntryPrices};

/// Persistence for daily price entries
#[async_trait]
pub trait DailyEntryStorage: Send + Sync {
    /// List entries whose date falls in the given year and month.
    /// Returns entries ordered by date ascending. The values are not
    /// range-checked; a month outside 1..=12 simply matches nothing.
    async fn list_entries_for_month(&self, year: i64, month: i64) -> Result<Vec<DailyEntry>>;

    /// Insert or overwrite the entry for `date` and return the stored row
    async fn upsert_entry(&self, date: NaiveDate, prices: &NewEntryPrices) -> Result<DailyEntry>;
}

/// Persistence for the static newspaper reference table
#[async_trait]
pub trait NewspaperStorage: Send + Sync {
    /// All newspapers, unfiltered
    async fn list_newspapers(&self) -> Result<Vec<Newspaper>>;

    /// Insert any seed rows not already present (matched by name).
    /// Returns the number of rows inserted.
    async fn seed_newspapers(&self, seeds: &[(String, f64)]) -> Result<u64>;
}
