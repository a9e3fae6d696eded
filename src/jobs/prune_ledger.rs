use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tokio_rusqlite::Connection;

use super::PeriodicJob;
use crate::core::AppConfig;
use crate::notify::prune_deliveries_before;

/// How long handled events stay in the delivery ledger. Trigger
/// redeliveries arrive within minutes, so a month is plenty.
const RETENTION_DAYS: i64 = 30;

#[derive(Debug)]
pub struct PruneLedger;

#[async_trait]
impl PeriodicJob for PruneLedger {
    fn interval(&self) -> Duration {
        // Run once daily
        Duration::from_secs(60 * 60 * 24)
    }

    async fn run_job(&self, _config: &AppConfig, db: &Connection) {
        let cutoff = Utc::now() - chrono::Duration::days(RETENTION_DAYS);
        match prune_deliveries_before(db, cutoff).await {
            Ok(pruned) if pruned > 0 => {
                tracing::info!("Pruned {} old delivery records", pruned);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to prune delivery ledger: {}", e);
            }
        }
    }
}
