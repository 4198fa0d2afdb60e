//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearField),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Enter => Some(Action::Calculate),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(get_action(plain(KeyCode::Enter)), Some(Action::Calculate));
        assert_eq!(get_action(plain(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(get_action(plain(KeyCode::Tab)), Some(Action::FocusNext));
        assert_eq!(get_action(plain(KeyCode::BackTab)), Some(Action::FocusPrev));
        assert_eq!(get_action(plain(KeyCode::Char('q'))), Some(Action::Input('q')));
        assert_eq!(get_action(plain(KeyCode::F(1))), None);
        assert_eq!(
            get_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            get_action(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(Action::ClearField)
        );
    }

    #[test]
    fn test_shifted_chars_are_input() {
        let key = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT);
        assert_eq!(get_action(key), Some(Action::Input('E')));
    }
}
