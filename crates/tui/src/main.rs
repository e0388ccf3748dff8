mod app;
mod config;
mod error;
mod ui;

use std::{fs, path::Path, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::{config::AppConfig, error::Result};

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;
    let mut app = app::App::new(config)?;
    app.run()?;
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<()> {
    let path = Path::new(&config.log_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
