//! 日志初始化
//!
//! TUI 占用 stdout，日志写入文件 (~/.local/share/bmi-form/bmi-form.log)

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{APP_DIR, LogConfig};
use crate::error::{AppError, Result};

pub const LOG_ENV: &str = "BMI_FORM_LOG";

/// 默认日志文件路径
pub fn default_log_path() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or(AppError::DataDir("data"))?;
    Ok(dir.join(APP_DIR).join("bmi-form.log"))
}

/// 安装全局 subscriber，返回日志文件路径（禁用时为 None）
pub fn init(config: &LogConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let (path, file) = open_log_file(config)?;
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(Some(path))
}

/// 以追加方式打开日志文件，必要时创建父目录
fn open_log_file(config: &LogConfig) -> Result<(PathBuf, File)> {
    let path = match &config.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

fn level_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_installs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.log");
        let config = LogConfig {
            enabled: false,
            level: "debug".to_string(),
            file: Some(path.clone()),
        };

        assert_eq!(init(&config).unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_log_file_parent_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("bmi-form.log");
        let config = LogConfig {
            file: Some(path.clone()),
            ..LogConfig::default()
        };

        let (opened, _file) = open_log_file(&config).unwrap();
        assert_eq!(opened, path);
        assert!(path.is_file());
    }

    #[test]
    fn test_level_filter() {
        assert!(level_filter("info").is_ok());
        assert!(level_filter("bmi_form=debug,warn").is_ok());

        let err = level_filter("bmi_form=loud").unwrap_err();
        assert!(matches!(err, AppError::Logging(_)));
    }
}
