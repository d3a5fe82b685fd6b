use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

const KEY_HINTS: &str = "↑/↓ select  enter open  esc dismiss  F2 logs";

/// Content of the bottom line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Hints,
    Info(String),
    Error(String),
}

pub fn render_status(frame: &mut Frame, area: Rect, status: StatusLine, theme: &Theme) {
    let line = match status {
        StatusLine::Hints => Line::from(Span::styled(KEY_HINTS, theme.status_style())),
        StatusLine::Info(text) => Line::from(Span::styled(text, theme.status_style())),
        StatusLine::Error(text) => Line::from(Span::styled(text, theme.error_style())),
    };
    frame.render_widget(Paragraph::new(line), area);
}
