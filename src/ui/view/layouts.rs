//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 水平居中的列，宽度按百分比并有下限
pub fn centered_column(percent_x: u16, min_width: u16, r: Rect) -> Rect {
    let width = ((u32::from(r.width) * u32::from(percent_x) / 100) as u16)
        .max(min_width)
        .min(r.width);
    let side = (r.width - width) / 2;

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(side),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(r)[1]
}
