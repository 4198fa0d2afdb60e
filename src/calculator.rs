//! BMI 计算核心
//!
//! 纯函数：两个文本输入 -> BMI 数值或校验失败

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 校验失败类型（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Weight must be a number(e.g. 85)")]
    InvalidWeight,
    #[error("Height must be a number(e.g. 1.85)")]
    InvalidHeight,
    #[error("BMI must be a number(e.g. 25.8)")]
    InvalidBMI,
}

/// 计算策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationPolicy {
    /// 只拒绝 NaN，零身高得到无穷大
    #[default]
    Lenient,
    /// 额外拒绝非正数、非有限值
    Strict,
}

/// 按默认 (Lenient) 策略计算 BMI
pub fn compute(weight_text: &str, height_text: &str) -> Result<f64, ValidationFailure> {
    compute_with(CalculationPolicy::Lenient, weight_text, height_text)
}

/// 按指定策略计算 BMI
///
/// 体重总是先于身高校验，两者都无效时报告 `InvalidWeight`。
/// 小数分隔符固定为 `.`，不受系统区域设置影响。
pub fn compute_with(
    policy: CalculationPolicy,
    weight_text: &str,
    height_text: &str,
) -> Result<f64, ValidationFailure> {
    let weight: f64 = weight_text
        .parse()
        .map_err(|_| ValidationFailure::InvalidWeight)?;
    if policy == CalculationPolicy::Strict && !is_positive_finite(weight) {
        return Err(ValidationFailure::InvalidWeight);
    }

    let height: f64 = height_text
        .parse()
        .map_err(|_| ValidationFailure::InvalidHeight)?;
    if policy == CalculationPolicy::Strict && !is_positive_finite(height) {
        return Err(ValidationFailure::InvalidHeight);
    }

    let bmi = weight / (height * height);
    if bmi.is_nan() {
        return Err(ValidationFailure::InvalidBMI);
    }
    if policy == CalculationPolicy::Strict && bmi.is_infinite() {
        return Err(ValidationFailure::InvalidBMI);
    }

    Ok(bmi)
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// 保留一位小数
pub fn format_bmi(bmi: f64) -> String {
    format!("{bmi:.1}")
}

/// WHO 成人 BMI 分级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Option<Self> {
        if !is_positive_finite(bmi) {
            return None;
        }
        let category = if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        };
        Some(category)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}
