use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::Newspaper;
use crate::storage::connection::DbConnection;
use crate::storage::traits::NewspaperStorage;

/// SQLite repository for the newspaper reference table
#[derive(Clone)]
pub struct NewspaperRepository {
    db: DbConnection,
}

impl NewspaperRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewspaperStorage for NewspaperRepository {
    async fn list_newspapers(&self) -> Result<Vec<Newspaper>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price
            FROM newspapers
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let newspapers = rows
            .iter()
            .map(|row| Newspaper {
                id: row.get("id"),
                name: row.get("name"),
                price: row.get("price"),
            })
            .collect();

        Ok(newspapers)
    }

    async fn seed_newspapers(&self, seeds: &[(String, f64)]) -> Result<u64> {
        let mut inserted = 0;
        for (name, price) in seeds {
            let result = sqlx::query(
                r#"
                INSERT OR IGNORE INTO newspapers (name, price)
                VALUES (?, ?)
                "#,
            )
            .bind(name)
            .bind(price)
            .execute(self.db.pool())
            .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }
}
