use crate::errors::{AppError, AppResult};
use crate::input::TimeBasis;
use crate::utils::formatting::DurationUnit;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Every key a complete configuration file carries.
pub const FIELDS: [&str; 6] = [
    "date_formats",
    "time_basis",
    "has_headers",
    "delimiter",
    "duration_unit",
    "decimals",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,
    #[serde(default)]
    pub time_basis: TimeBasis,
    #[serde(default)]
    pub has_headers: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub duration_unit: DurationUnit,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_date_formats() -> Vec<String> {
    [
        "%Y-%m-%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%d/%m/%Y",
        "%Y/%m/%d",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_decimals() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_formats: default_date_formats(),
            time_basis: TimeBasis::default(),
            has_headers: false,
            delimiter: default_delimiter(),
            duration_unit: DurationUnit::default(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rpairtime")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpairtime")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpairtime.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write a default configuration file. An existing file is kept unless
    /// `force` is set.
    pub fn init_all(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Keys absent from the configuration file at `path`.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Ok(FIELDS.to_vec());
        }

        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;
        let Some(map) = yaml.as_mapping() else {
            return Ok(FIELDS.to_vec());
        };

        Ok(FIELDS
            .iter()
            .copied()
            .filter(|key| !map.contains_key(Value::String(key.to_string())))
            .collect())
    }

    /// The CSV delimiter as a single byte.
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }

    fn validate(&self) -> AppResult<()> {
        if self.date_formats.is_empty() {
            return Err(AppError::Config(
                "date_formats must list at least one format".to_string(),
            ));
        }
        self.delimiter_byte()?;
        Ok(())
    }
}
