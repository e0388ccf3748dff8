use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the ledger snapshot lives.
    pub data_path: String,
    /// Where tracing output goes (stderr would fight the alternate screen).
    pub log_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: "config/ledger.json".to_string(),
            log_path: "config/saldo_tui.log".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "saldo_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the ledger snapshot path.
    #[arg(long)]
    data_path: Option<String>,
    /// Override the log file path.
    #[arg(long)]
    log_path: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("SALDO_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(data_path) = args.data_path {
        settings.data_path = data_path;
    }
    if let Some(log_path) = args.log_path {
        settings.log_path = log_path;
    }

    Ok(settings)
}
