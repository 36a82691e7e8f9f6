//! Daily entry domain logic.
//!
//! ## Business Rules
//!
//! - One entry per calendar date; saving a date again overwrites it
//! - `total_daily_price` is always the sum of the two prices and is
//!   recomputed on every write
//! - Month listings are ordered by date ascending and hold only that month

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use shared::MonthCursor;
use tracing::{info, warn};

use crate::domain::models::{DailyEntry, NewEntryPrices};
use crate::storage::DailyEntryStorage;

/// Validated input for one upsert
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertEntryCommand {
    pub date: NaiveDate,
    pub prices: NewEntryPrices,
}

/// Service for listing and saving daily entries
#[derive(Clone)]
pub struct DailyEntryService {
    storage: Arc<dyn DailyEntryStorage>,
}

impl DailyEntryService {
    pub fn new(storage: Arc<dyn DailyEntryStorage>) -> Self {
        Self { storage }
    }

    /// List every entry of a month, oldest first
    pub async fn list_entries_for_month(&self, year: i64, month: i64) -> Result<Vec<DailyEntry>> {
        let cursor = i32::try_from(year)
            .ok()
            .zip(u32::try_from(month).ok())
            .and_then(|(year, month)| MonthCursor::new(year, month));
        match cursor {
            Some(cursor) => info!("Listing daily entries for {}", cursor.label()),
            None => warn!(year, month, "Month is out of range, listing will be empty"),
        }

        let entries = self.storage.list_entries_for_month(year, month).await?;
        info!(count = entries.len(), "Loaded daily entries");
        Ok(entries)
    }

    /// Insert or overwrite the entry for the command's date
    pub async fn upsert_entry(&self, command: UpsertEntryCommand) -> Result<DailyEntry> {
        info!(
            date = %command.date,
            total = command.prices.total(),
            "Saving daily entry"
        );
        self.storage.upsert_entry(command.date, &command.prices).await
    }
}
