//! Periodic background jobs
use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use crate::core::AppConfig;

pub mod prune_ledger;
pub use prune_ledger::PruneLedger;

/// A job that runs forever on a fixed interval
#[async_trait]
pub trait PeriodicJob: Debug + Send + Sync + 'static {
    fn interval(&self) -> Duration;

    async fn run_job(&self, config: &AppConfig, db: &Connection);
}

/// Spawn a tokio task that runs the job on its interval. The first
/// run happens immediately after startup.
pub fn spawn_periodic_job<J: PeriodicJob>(config: AppConfig, db: Connection, job: J) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(job.interval());
        loop {
            interval.tick().await;
            tracing::info!("Running periodic job: {:?}", job);
            job.run_job(&config, &db).await;
        }
    });
}
