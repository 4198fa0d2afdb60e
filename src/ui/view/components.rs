//! 通用 UI 组件
//!
//! 输入框、按钮、错误面板

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::state::ErrorHighlight;

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// [组件] 带有占位符的输入框，空值时显示灰色占位文字
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    placeholder: &str,
    value: &str,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let input = if value.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        let style = if is_focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Paragraph::new(value).style(style)
    };

    frame.render_widget(
        input.block(Block::default().borders(Borders::ALL).border_style(border_style)),
        area,
    );
}

/// [组件] 计算按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(ORANGE))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ORANGE)));
    frame.render_widget(button, area);
}

/// [组件] 两行错误面板
pub fn render_error_panel(frame: &mut Frame, area: Rect, highlight: &ErrorHighlight) {
    let lines = vec![
        Line::styled(
            highlight.title.as_str(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            highlight.message.as_str(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}
