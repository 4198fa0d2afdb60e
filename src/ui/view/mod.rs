//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, InputField};
use components::{render_button, render_error_panel, render_input_widget};
use layouts::centered_column;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let column = centered_column(60, 44, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 体重
            Constraint::Length(3), // 身高
            Constraint::Length(3), // 按钮
            Constraint::Length(1), // 分级
            Constraint::Length(4), // 错误面板
            Constraint::Min(0),
            Constraint::Length(3), // 帮助
        ])
        .split(column);

    render_title(frame, chunks[0]);
    render_field(frame, app, InputField::Weight, chunks[1]);
    render_field(frame, app, InputField::Height, chunks[2]);
    render_button(frame, chunks[3], &app.trigger_label());
    render_category(frame, app, chunks[4]);

    if let Some(highlight) = app.visible_error() {
        render_error_panel(frame, chunks[5], highlight);
    }

    render_help(frame, chunks[7]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("BMI Calculator")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_field(frame: &mut Frame, app: &App, field: InputField, area: Rect) {
    let value = app.text(field);
    let is_focused = app.focus == field;
    render_input_widget(frame, area, field.placeholder(), value, is_focused);

    if is_focused {
        // 超长输入时光标停在输入框右边界内
        let offset = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_category(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(category) = app.category {
        let line = Paragraph::new(category.label())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(line, area);
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("[Enter] 计算  [Tab] 切换  [Ctrl+U] 清空  [Esc] 退出")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
