mod config;
mod records;

pub use config::{Config, DisplayConfig, EngineConfig, UrgencySection};
pub use records::RecordFile;

use std::path::PathBuf;

/// Returns `~/.config/labcal[-dev]/` based on LABCAL_ENV.
///
/// Set LABCAL_ENV=dev to use the development data directory, or
/// LABCAL_DATA_DIR to point at an explicit directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("LABCAL_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("LABCAL_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("labcal-dev")
            } else {
                base_dir.join("labcal")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
