//! 终端 BMI 计算器
//!
//! - calculator: 纯计算与校验
//! - ui: ratatui 表单 (MVI)
//! - config / logging / cli: 配置、日志与命令行

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use calculator::{BmiCategory, CalculationPolicy, ValidationFailure, compute, compute_with};
pub use error::AppError;
