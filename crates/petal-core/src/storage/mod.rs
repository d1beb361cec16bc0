mod config;
mod store;

pub use config::{Config, FocusConfig, LoggingConfig};
pub use store::{StateFile, SCHEMA_VERSION, STATE_FILE};

use std::path::PathBuf;

/// Where Petal keeps its files.
///
/// `PETAL_DATA_DIR` wins when set. Otherwise `~/.config/petal/`, or
/// `~/.config/petal-dev/` with `PETAL_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("PETAL_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("PETAL_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("petal-dev")
            } else {
                base_dir.join("petal")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
