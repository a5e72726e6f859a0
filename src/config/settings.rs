//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and ledger state.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/paybook)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/paybook)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance.
    pub fn get() -> &'static Paths {
        PATHS.get_or_init(|| Self::new().expect("Failed to initialize paths"))
    }

    /// Initialize paths using XDG directories.
    fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "paybook", "paybook")
            .ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        };

        // Ensure directories exist
        fs::create_dir_all(&paths.config_dir)?;
        fs::create_dir_all(&paths.data_dir)?;

        Ok(paths)
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the directory holding the ledger state slots.
    pub fn state_dir(&self) -> PathBuf {
        self.data_dir.join("state")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Default output format for listings.
    pub default_output_format: String,
    /// Directory spreadsheet exports are written to (current directory
    /// when unset).
    pub export_dir: Option<PathBuf>,
    /// Enable verbose output by default.
    pub verbose: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_output_format: "plain".to_string(),
            export_dir: None,
            verbose: false,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    pub fn load() -> ConfigResult<Self> {
        let paths = Paths::get();
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&file).map_err(|e| ConfigError::ReadFailed {
            path: file.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &PathBuf) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let paths = Paths::get();
        let file = paths.settings_file();

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&file, content).map_err(|e| ConfigError::WriteFailed {
            path: file,
            reason: e.to_string(),
        })
    }
}
