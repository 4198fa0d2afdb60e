//! 配置加载
//!
//! 默认位置: ~/.config/bmi-form/config.toml，文件不存在时使用默认值

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calculator::CalculationPolicy;
use crate::error::{AppError, Result};

pub const APP_DIR: &str = "bmi-form";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub form: FormDefaults,
    pub calculation: CalculationConfig,
    pub log: LogConfig,
}

/// 输入框预填值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub weight: String,
    pub height: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            weight: "85".to_string(),
            height: "1.85".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    pub policy: CalculationPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(AppError::DataDir("config"))?;
    Ok(dir.join(APP_DIR).join("config.toml"))
}

/// 从TOML文件加载配置
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}
