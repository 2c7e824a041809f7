use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gradebook::api::ApiClient;
use gradebook::config::Config;
use gradebook::logging::init_tracing;
use gradebook::navigation::Route;

/// Terminal client for managing students and their grades.
#[derive(Debug, Parser)]
#[command(name = "gradebook", version, about)]
struct Cli {
    /// Base URL of the REST API (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to a config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Route to open at startup, e.g. "/students/3/grades"
    #[arg(long, value_name = "PATH", default_value = "/students")]
    route: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate().context("Invalid configuration")?;
    tracing::info!(base_url = %config.api.base_url, "Configuration loaded");

    let client = ApiClient::new(&config.api).context("Failed to build HTTP client")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    gradebook::ui::run(&runtime, client, &config.ui, Route::parse(&cli.route))?;
    Ok(())
}
