use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Fixed name of the serialized updated table.
pub const UPDATED_FILE_NAME: &str = "Data_Kalibrasi_Updated.xlsx";

/// Fixed well-known input file, next to the working directory unless the
/// config points elsewhere.
pub const DEFAULT_DATA_FILE: &str = "Data_Kalibrasi.xlsx";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_updated_file")]
    pub updated_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_updated_file() -> String {
    UPDATED_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            updated_file: default_updated_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("kalibra")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".kalibra")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kalibra.conf")
    }

    /// Load configuration from file, or return defaults if not found or
    /// unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    crate::ui::messages::error(format!("Failed to parse configuration: {e}"));
                    Self::default()
                }
            },
            Err(e) => {
                crate::ui::messages::error(format!("Failed to read configuration: {e}"));
                Self::default()
            }
        }
    }

    /// Write the configuration to the platform config dir.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("serialize config: {e}")))?;

        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Resolved path of the fixed input file.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }
}
