//! App 状态定义 (Model)
//!
//! 表单的全部临时状态，每次计算整体覆盖

use crate::calculator::{BmiCategory, CalculationPolicy, ValidationFailure, format_bmi};
use crate::config::FormDefaults;

pub const TRIGGER_LABEL: &str = "Calculate BMI";
pub const ERROR_TITLE: &str = "OMG 😱: ";

/// 应用状态
pub struct App {
    pub weight_text: String,
    pub height_text: String,
    pub focus: InputField,
    pub policy: CalculationPolicy,
    pub bmi: f64,
    pub category: Option<BmiCategory>,
    pub highlight: Option<ErrorHighlight>,
    pub error_hidden: bool,
}

/// 输入字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Weight,
    Height,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            Self::Weight => Self::Height,
            Self::Height => Self::Weight,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Weight => "Enter Weight (in kilograms)",
            Self::Height => "Enter Height (in meters)",
        }
    }
}

/// 错误面板内容（标题 + 消息）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorHighlight {
    pub title: String,
    pub message: String,
}

impl From<ValidationFailure> for ErrorHighlight {
    fn from(failure: ValidationFailure) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: failure.to_string(),
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(defaults: &FormDefaults, policy: CalculationPolicy) -> Self {
        Self {
            weight_text: defaults.weight.clone(),
            height_text: defaults.height.clone(),
            focus: InputField::Weight,
            policy,
            bmi: 0.0,
            category: None,
            highlight: None,
            error_hidden: true,
        }
    }

    /// 当前聚焦的输入缓冲区
    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Weight => &mut self.weight_text,
            InputField::Height => &mut self.height_text,
        }
    }

    pub fn text(&self, field: InputField) -> &str {
        match field {
            InputField::Weight => &self.weight_text,
            InputField::Height => &self.height_text,
        }
    }

    /// 按钮文字，如 "Calculate BMI:24.8"
    pub fn trigger_label(&self) -> String {
        format!("{}:{}", TRIGGER_LABEL, format_bmi(self.bmi))
    }

    /// 需要显示的错误面板
    pub fn visible_error(&self) -> Option<&ErrorHighlight> {
        if self.error_hidden {
            None
        } else {
            self.highlight.as_ref()
        }
    }
}
