//   ____             _____
//  |  _ \ __      __|  ___|  ___   _ __   __ _   ___
//  | |_) |\ \ /\ / /| |_    / _ \ | '__| / _` | / _ \
//  |  __/  \ V  V / |  _|  | (_) || |   | (_| ||  __/
//  |_|      \_/\_/  |_|     \___/ |_|    \__, | \___|
//                                        |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use std::{fs, path::{Path, PathBuf}};
use dirs::config_dir;
use log::{debug, info};
use serde::{Serialize, Deserialize};

use crate::error::ConfigError;
use crate::passgen::{ComplexityTier, GenerationOptions};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default generation options, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    pub length: usize,
    pub complexity: String,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub contains: String,
    pub excludes: String,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        let options = GenerationOptions::default();
        Self {
            length: options.length,
            complexity: options.complexity.to_string(),
            include_upper: options.include_upper,
            include_lower: options.include_lower,
            include_digits: options.include_digits,
            include_special: options.include_special,
            contains: options.contains,
            excludes: options.excludes,
        }
    }
}

impl GeneratorDefaults {
    pub fn to_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.length,
            complexity: ComplexityTier::parse(&normalize_tier(&self.complexity)),
            include_upper: self.include_upper,
            include_lower: self.include_lower,
            include_digits: self.include_digits,
            include_special: self.include_special,
            contains: self.contains.clone(),
            excludes: self.excludes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardSettings {
    pub enabled: bool,
    /// Seconds before the copied password is wiped, `None` keeps it.
    pub clear_after: Option<u64>,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            clear_after: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub generator: GeneratorDefaults,
    pub clipboard: ClipboardSettings,
}

impl ConfigFile {
    /// 读取指定配置文件
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let config_data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&config_data)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// An explicit path must exist; the default location may be absent.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = default_config_path()?;
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!("No config at {}, using built-in defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Tier names typed by people are matched case-insensitively.
pub fn normalize_tier(name: &str) -> String {
    name.trim().to_lowercase()
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("pwforge")),
        None => Err(ConfigError::ConfigDir("Could not determine configuration directory".to_string())),
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}
