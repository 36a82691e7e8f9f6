use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::{DailyEntry, NewEntryPrices};
use crate::storage::connection::DbConnection;
use crate::storage::traits::DailyEntryStorage;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite repository for daily entries
#[derive(Clone)]
pub struct DailyEntryRepository {
    db: DbConnection,
}

impl DailyEntryRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_entry(row: &SqliteRow) -> Result<DailyEntry> {
        let date: String = row.get("date");
        let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .with_context(|| format!("Stored entry has malformed date '{}'", date))?;

        Ok(DailyEntry {
            id: row.get("id"),
            date,
            aaj_ka_anand_price: row.get("aaj_ka_anand_price"),
            times_of_india_price: row.get("times_of_india_price"),
            total_daily_price: row.get("total_daily_price"),
        })
    }
}

#[async_trait]
impl DailyEntryStorage for DailyEntryRepository {
    async fn list_entries_for_month(&self, year: i64, month: i64) -> Result<Vec<DailyEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, date, aaj_ka_anand_price, times_of_india_price, total_daily_price
            FROM daily_entries
            WHERE CAST(strftime('%Y', date) AS INTEGER) = ?
              AND CAST(strftime('%m', date) AS INTEGER) = ?
            ORDER BY date ASC
            "#,
        )
        .bind(year)
        .bind(month)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_entry).collect()
    }

    async fn upsert_entry(&self, date: NaiveDate, prices: &NewEntryPrices) -> Result<DailyEntry> {
        let row = sqlx::query(
            r#"
            INSERT INTO daily_entries (date, aaj_ka_anand_price, times_of_india_price, total_daily_price)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (date) DO UPDATE SET
                aaj_ka_anand_price = excluded.aaj_ka_anand_price,
                times_of_india_price = excluded.times_of_india_price,
                total_daily_price = excluded.total_daily_price
            RETURNING id, date, aaj_ka_anand_price, times_of_india_price, total_daily_price
            "#,
        )
        .bind(date.format(DATE_FORMAT).to_string())
        .bind(prices.aaj_ka_anand_price)
        .bind(prices.times_of_india_price)
        .bind(prices.total())
        .fetch_one(self.db.pool())
        .await?;

        Self::row_to_entry(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> DailyEntryRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        DailyEntryRepository::new(db)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn prices(a: f64, b: f64) -> NewEntryPrices {
        NewEntryPrices::new(a, b).unwrap()
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_updates_in_place() {
        let repo = setup_test().await;

        let first = repo.upsert_entry(date("2024-03-05"), &prices(5.0, 7.0)).await.unwrap();
        assert_eq!(first.total_daily_price, 12.0);

        let second = repo.upsert_entry(date("2024-03-05"), &prices(10.0, 7.0)).await.unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.aaj_ka_anand_price, 10.0);
        assert_eq!(second.total_daily_price, 17.0);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM daily_entries")
            .fetch_one(repo.db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_same_upsert_twice_returns_same_row() {
        let repo = setup_test().await;

        let first = repo.upsert_entry(date("2024-03-06"), &prices(4.5, 6.0)).await.unwrap();
        let second = repo.upsert_entry(date("2024-03-06"), &prices(4.5, 6.0)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.total_daily_price, 10.5);
    }

    #[tokio::test]
    async fn test_month_listing_filters_and_orders() {
        let repo = setup_test().await;

        for (d, a, b) in [
            ("2024-03-20", 1.0, 1.0),
            ("2024-02-29", 2.0, 2.0),
            ("2024-03-01", 3.0, 3.0),
            ("2023-03-10", 4.0, 4.0),
            ("2024-04-01", 5.0, 5.0),
            ("2024-03-10", 6.0, 6.0),
        ] {
            repo.upsert_entry(date(d), &prices(a, b)).await.unwrap();
        }

        let march = repo.list_entries_for_month(2024, 3).await.unwrap();
        let dates: Vec<String> = march.iter().map(|e| e.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-03-10", "2024-03-20"]);
        assert!(march
            .iter()
            .all(|e| e.total_daily_price == e.aaj_ka_anand_price + e.times_of_india_price));
    }

    #[tokio::test]
    async fn test_month_listing_empty_and_out_of_range() {
        let repo = setup_test().await;
        repo.upsert_entry(date("2024-03-05"), &prices(5.0, 7.0)).await.unwrap();

        assert!(repo.list_entries_for_month(2024, 5).await.unwrap().is_empty());
        assert!(repo.list_entries_for_month(2024, 13).await.unwrap().is_empty());
        assert!(repo.list_entries_for_month(-1, 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected_by_schema() {
        let repo = setup_test().await;
        let bad = NewEntryPrices { aaj_ka_anand_price: -1.0, times_of_india_price: 0.0 };

        assert!(repo.upsert_entry(date("2024-03-05"), &bad).await.is_err());
    }
}
