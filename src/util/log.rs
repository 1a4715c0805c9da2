use std::path::PathBuf;

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        std::env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "tunepeek", env!("CARGO_PKG_NAME"))
}

pub fn data_dir() -> PathBuf {
    if let Some(dir) = DATA_FOLDER.clone() {
        dir
    } else if let Some(dirs) = project_directory() {
        dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// Sends every `tracing` event to a log file; stdout belongs to the TUI.
pub fn initialize_logging() -> Result<()> {
    let directory = data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE.as_str()))?;

    let env_filter = EnvFilter::try_from_env(LOG_ENV.as_str())
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
