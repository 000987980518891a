use anyhow::{Context, Result};
use career_analyzer::app_log;
use career_analyzer::{start_web_server, ConfigManager};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "careercompass", about = "Resume analysis and career guidance API")]
struct Cli {
    /// Configuration file with `local` and `production` sections
    #[arg(long, default_value = career_analyzer::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Port to listen on, overrides the config file and ROCKET_PORT
    #[arg(long)]
    port: Option<u16>,

    /// JSON log file, truncated on start-up
    #[arg(long, default_value = "/tmp/careercompass.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging first
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&cli.log_file)
        .with_context(|| format!("Failed to open log file {}", cli.log_file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("career_analyzer=info,rocket::server=off"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(fmt::layer().compact())
        .with(filter)
        .init();

    let config = ConfigManager::load(&cli.config)?.with_port_override(cli.port)?;

    app_log!(info, "Configuration: {}", cli.config.display());
    app_log!(info, "Log file: {}", cli.log_file.display());

    start_web_server(config).await
}
