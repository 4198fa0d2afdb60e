//! BMI 表单界面
//!
//! 两个输入框 + 一个计算按钮 + 错误面板：
//! - state.rs: 表单字段、上次结果与错误面板可见性
//! - input.rs / actions.rs: 按键 -> 编辑、切换焦点、计算、退出
//! - logic.rs: 触发计算并覆盖结果
//! - view/: 把表单画到终端上

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::handle_key_event;
pub use state::App;
pub use view::render;
