// Configuration loading

pub mod session;
pub mod settings;

use std::path::PathBuf;

/// Base configuration directory (`~/.config/fjordviz` on Linux).
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fjordviz")
}
