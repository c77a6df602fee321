mod render;
mod search_cmd;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use catalog_backend_client::BackendClient;
use catalog_core::Config;
use tracing_subscriber::EnvFilter;

pub use search_cmd::InlineArgs;
pub use search_cmd::PopularArgs;
pub use search_cmd::SearchArgs;
pub use search_cmd::parse_filter;
pub use session::Session;

/// Query the data catalog's search and popular tables from the terminal.
#[derive(Debug, clap::Parser)]
#[command(name = "catalog", version)]
pub struct Cli {
    /// Config file to read instead of `$CATALOG_HOME/config.toml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL; overrides the config file and `CATALOG_BASE_URL`.
    #[arg(long = "base-url", global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List the most popular tables.
    Popular(PopularArgs),

    /// Search every enabled resource and show one page of the chosen one.
    Search(SearchArgs),

    /// Run the quick search used for type-ahead suggestions.
    Inline(InlineArgs),
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
        config.validate()?;
    }
    let client = Arc::new(BackendClient::from_config(&config)?);
    let mut session = Session::start(client, &config);

    let output = match cli.command {
        Command::Popular(args) => search_cmd::run_popular(&mut session, args).await,
        Command::Search(args) => search_cmd::run_search(&mut session, args).await,
        Command::Inline(args) => search_cmd::run_inline(&mut session, args).await,
    };
    session.shutdown().await;
    println!("{}", output?);
    Ok(())
}
