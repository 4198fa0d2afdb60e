//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和计算触发

use tracing::debug;

use super::actions::Action;
use super::state::{App, ErrorHighlight};
use crate::calculator::{BmiCategory, compute_with};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext | Action::FocusPrev => self.focus = self.focus.next(),
            Action::Calculate => self.calculate(),
            Action::Input(c) => self.focused_text_mut().push(c),
            Action::DeleteChar => {
                self.focused_text_mut().pop();
            }
            Action::ClearField => self.focused_text_mut().clear(),
        }
        false
    }

    /// 用当前输入重新计算
    ///
    /// 错误面板先隐藏，只有本次计算失败才重新显示；失败时保留上一次的结果。
    pub fn calculate(&mut self) {
        self.error_hidden = true;

        match compute_with(self.policy, &self.weight_text, &self.height_text) {
            Ok(bmi) => {
                debug!(bmi, policy = ?self.policy, "BMI calculated");
                self.bmi = bmi;
                self.category = BmiCategory::from_bmi(bmi);
            }
            Err(failure) => {
                debug!(?failure, "calculation rejected");
                self.highlight = Some(ErrorHighlight::from(failure));
                self.error_hidden = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalculationPolicy;
    use crate::config::FormDefaults;
    use crate::ui::state::{ERROR_TITLE, InputField};

    fn app() -> App {
        App::new(&FormDefaults::default(), CalculationPolicy::Lenient)
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.weight_text, "85");
        assert_eq!(app.height_text, "1.85");
        assert_eq!(app.trigger_label(), "Calculate BMI:0.0");
        assert!(app.visible_error().is_none());
    }

    #[test]
    fn test_calculate_success() {
        let mut app = app();
        assert!(!app.dispatch(Action::Calculate));
        assert_eq!(app.trigger_label(), "Calculate BMI:24.8");
        assert_eq!(app.category, Some(BmiCategory::Normal));
        assert!(app.visible_error().is_none());
    }

    #[test]
    fn test_failure_keeps_stale_value() {
        let mut app = app();
        app.calculate();

        app.dispatch(Action::Input('x'));
        app.calculate();

        assert_eq!(app.trigger_label(), "Calculate BMI:24.8");
        let error = app.visible_error().unwrap();
        assert_eq!(error.title, ERROR_TITLE);
        assert_eq!(error.message, "Weight must be a number(e.g. 85)");
    }

    #[test]
    fn test_success_hides_error() {
        let mut app = app();
        app.weight_text.clear();
        app.calculate();
        assert!(app.visible_error().is_some());

        app.weight_text = "70".to_string();
        app.calculate();
        assert!(app.visible_error().is_none());
        assert_eq!(app.bmi, 70.0 / (1.85 * 1.85));
    }

    #[test]
    fn test_error_message_replaced() {
        let mut app = app();
        app.height_text = "abc".to_string();
        app.calculate();
        assert_eq!(
            app.visible_error().unwrap().message,
            "Height must be a number(e.g. 1.85)"
        );

        app.height_text = "0".to_string();
        app.weight_text = "0".to_string();
        app.calculate();
        assert_eq!(
            app.visible_error().unwrap().message,
            "BMI must be a number(e.g. 25.8)"
        );
    }

    #[test]
    fn test_editing_follows_focus() {
        let mut app = app();
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.weight_text, "8");

        app.dispatch(Action::FocusNext);
        assert_eq!(app.focus, InputField::Height);
        app.dispatch(Action::ClearField);
        app.dispatch(Action::Input('2'));
        assert_eq!(app.height_text, "2");
        assert_eq!(app.weight_text, "8");

        app.dispatch(Action::FocusPrev);
        assert_eq!(app.focus, InputField::Weight);
    }

    #[test]
    fn test_strict_zero_height() {
        let mut app = App::new(&FormDefaults::default(), CalculationPolicy::Strict);
        app.height_text = "0".to_string();
        app.calculate();
        assert_eq!(
            app.visible_error().unwrap().message,
            "Height must be a number(e.g. 1.85)"
        );
        assert_eq!(app.trigger_label(), "Calculate BMI:0.0");
    }

    #[test]
    fn test_lenient_zero_height() {
        let mut app = app();
        app.height_text = "0".to_string();
        app.calculate();
        assert!(app.visible_error().is_none());
        assert_eq!(app.trigger_label(), "Calculate BMI:inf");
        assert_eq!(app.category, None);
    }

    #[test]
    fn test_quit() {
        assert!(app().dispatch(Action::Quit));
    }
}
