//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // 触发计算
    Calculate,

    // 输入框编辑
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    ClearField,  // Ctrl+U
}
