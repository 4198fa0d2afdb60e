use std::path::PathBuf;

use clap::Parser;

use crate::calculator::CalculationPolicy;
use crate::config::Config;

/// 终端 BMI 计算器
#[derive(Debug, Parser)]
#[command(name = "bmi-form", version, about)]
pub struct Cli {
    /// 配置文件路径（默认 ~/.config/bmi-form/config.toml）
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 体重输入框的预填值（千克）
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// 身高输入框的预填值（米）
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub height: Option<String>,

    /// 拒绝非正数与无穷大结果
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// 命令行参数覆盖配置文件
    pub fn apply(&self, config: &mut Config) {
        if let Some(weight) = &self.weight {
            config.form.weight = weight.clone();
        }
        if let Some(height) = &self.height {
            config.form.height = height.clone();
        }
        if self.strict {
            config.calculation.policy = CalculationPolicy::Strict;
        }
    }
}
