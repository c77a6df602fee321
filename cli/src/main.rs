use catalog_cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_cli::init_tracing();
    let cli = Cli::parse();
    catalog_cli::run(cli).await
}
