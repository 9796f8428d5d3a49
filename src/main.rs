use clap::Parser;

use bazaar_rs::cli::{executor, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    executor::run(cli).await
}
