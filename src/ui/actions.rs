use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use crate::types::Direction;

impl<'a> App<'a> {
    /// Dispatch a key press. Arrows, Enter and Esc never reach the input.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.cancel(),
            KeyCode::Enter => {
                if let Some(effect) = self.controller.activate() {
                    self.apply(effect);
                }
            }
            KeyCode::Up => self.navigate(Direction::Previous),
            KeyCode::Down => self.navigate(Direction::Next),
            KeyCode::F(2) => self.show_logs = !self.show_logs,
            _ => {
                if self.search_input.input(key) {
                    let text = self.search_input.text().to_string();
                    let effect = self.controller.on_query_change(text);
                    self.apply(effect);
                }
            }
        }
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.row_at(mouse.column, mouse.row)
                    && let Some(effect) = self.controller.pointer_select(index)
                {
                    self.sync_scroll();
                    self.apply(effect);
                }
            }
            MouseEventKind::ScrollDown => self.navigate(Direction::Next),
            MouseEventKind::ScrollUp => self.navigate(Direction::Previous),
            _ => {}
        }
    }

    fn navigate(&mut self, direction: Direction) {
        if self.controller.navigate(direction) {
            self.sync_scroll();
        }
    }

    fn cancel(&mut self) {
        let effect = self.controller.cancel();
        self.apply(effect);
    }

    /// Map a screen cell to the index of the result row drawn there.
    pub(crate) fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.results_area.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.scroll_offset + usize::from(row - self.results_area.y);
        (index < self.controller.results().len()).then_some(index)
    }
}
