//! 应用级错误
//!
//! 校验失败属于正常流程，见 [`crate::calculator::ValidationFailure`]

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("无法解析配置文件 {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("无法获取用户目录: {0}")]
    DataDir(&'static str),

    #[error("日志初始化失败: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
