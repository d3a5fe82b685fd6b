use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "Type to search";

/// Single-line text field holding the query.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
    pub fn new(initial: impl Into<String>) -> Self {
        let mut textarea = TextArea::new(vec![initial.into()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Full current value of the field.
    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Feed a key to the field. Returns `true` when the text changed.
    ///
    /// Keys that would break the line are swallowed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let breaks_line = matches!(key.code, KeyCode::Enter)
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('m' | 'j')));
        if breaks_line {
            return false;
        }
        self.textarea.input(key)
    }

    /// Replace the whole value and park the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

impl Default for SearchInput<'_> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_reports_changes() {
        let mut input = SearchInput::default();
        assert!(input.input(key(KeyCode::Char('a'))));
        assert!(input.input(key(KeyCode::Char('b'))));
        assert_eq!(input.text(), "ab");
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn cursor_moves_are_not_changes() {
        let mut input = SearchInput::new("calc");
        assert!(!input.input(key(KeyCode::Left)));
        assert_eq!(input.text(), "calc");
    }

    #[test]
    fn line_breaks_are_swallowed() {
        let mut input = SearchInput::new("calc");
        assert!(!input.input(key(KeyCode::Enter)));
        assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
        assert_eq!(input.text(), "calc");
    }

    #[test]
    fn initial_text_keeps_cursor_at_end() {
        let mut input = SearchInput::new("cal");
        input.input(key(KeyCode::Char('c')));
        assert_eq!(input.text(), "calc");
    }

    #[test]
    fn set_text_replaces_value() {
        let mut input = SearchInput::new("calc");
        input.set_text("");
        assert_eq!(input.text(), "");
    }
}
