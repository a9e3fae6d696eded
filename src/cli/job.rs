use anyhow::Result;
use clap::ValueEnum;

use crate::core::AppConfig;
use crate::core::db::async_db;
use crate::jobs::{PeriodicJob, PruneLedger};

#[derive(Clone, Debug, ValueEnum)]
pub enum JobId {
    PruneLedger,
}

/// Run a single iteration of a periodic job
pub async fn run(id: JobId) -> Result<()> {
    let config = AppConfig::default();
    let db = async_db(&config.db_path).await?;

    match id {
        JobId::PruneLedger => PruneLedger.run_job(&config, &db).await,
    }

    Ok(())
}
