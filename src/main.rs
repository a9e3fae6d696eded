use anyhow::Result;
use notifier::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
