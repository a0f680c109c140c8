use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use sz_sdk_mock::logging::init_tracing;
use sz_sdk_mock::settings::SettingsManager;

#[derive(Parser)]
#[command(name = "sz-sdk-mock-demo")]
#[command(about = "Run the mock entity-resolution SDK demo", long_about = None)]
struct Cli {
    /// YAML settings file (defaults are used when it does not exist)
    #[arg(long, default_value = "sz-sdk-mock.yaml")]
    config: PathBuf,

    /// Override the SDK log level (TRACE, DEBUG, INFO, WARN, ERROR, FATAL, PANIC)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = SettingsManager::load(&cli.config)
        .with_context(|| format!("failed to load settings from {}", cli.config.display()))?;
    let mut settings = manager.settings().clone();
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    SettingsManager::validate(&settings).context("invalid settings")?;

    init_tracing(&settings.logging).context("failed to initialise tracing")?;
    tracing::info!("[Main] 启动演示: {}", settings.instance_name);

    let report = sz_sdk_mock::demo::run(&settings)
        .await
        .context("demo run failed")?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
