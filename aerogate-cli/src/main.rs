mod app_config;
mod render;
mod shell;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "aerogate",
    version,
    about = "Interactive airport check-in and baggage handling console"
)]
struct Cli {
    /// Directory searched for default.toml / local.toml
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Only log errors
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "aerogate_checkin=error,aerogate_cli=error"
    } else {
        "aerogate_checkin=info,aerogate_cli=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = app_config::AppConfig::load(&cli.config_dir)?;
    tracing::info!("Starting AeroGate check-in console");

    let mut shell = shell::Shell::new(config);
    shell.run()
}
