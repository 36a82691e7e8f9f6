use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::NewspaperSeed;
use crate::domain::models::Newspaper;
use crate::storage::NewspaperStorage;

/// Read-only access to the newspaper reference table
#[derive(Clone)]
pub struct NewspaperService {
    storage: Arc<dyn NewspaperStorage>,
}

impl NewspaperService {
    pub fn new(storage: Arc<dyn NewspaperStorage>) -> Self {
        Self { storage }
    }

    pub async fn list_newspapers(&self) -> Result<Vec<Newspaper>> {
        self.storage.list_newspapers().await
    }

    /// Make sure the configured publications exist
    pub async fn seed(&self, seeds: &[NewspaperSeed]) -> Result<u64> {
        let rows: Vec<(String, f64)> = seeds
            .iter()
            .map(|seed| (seed.name.clone(), seed.price))
            .collect();
        let inserted = self.storage.seed_newspapers(&rows).await?;
        info!(inserted, configured = seeds.len(), "Seeded newspapers");
        Ok(inserted)
    }
}
