use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::widgets::Block;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::App;
use super::components::{
    Activity, PromptContext, StatusLine, body_area, render_prompt, render_results, render_status,
};

const LOG_PANE_HEIGHT: u16 = 8;

impl<'a> App<'a> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });
        let log_height = if self.show_logs { LOG_PANE_HEIGHT } else { 0 };
        let [prompt_area, results_area, log_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .areas(area);

        self.results_area = body_area(results_area);
        self.sync_scroll();

        let prompt = PromptContext {
            prompt: &self.options.prompt,
            search_input: &self.search_input,
            activity: self.activity(),
            throbber_state: &self.throbber_state,
            theme: &self.theme,
        };
        render_prompt(frame, prompt_area, prompt);

        let view = self.controller.view();
        render_results(frame, results_area, &view, self.scroll_offset, &self.theme);

        if self.show_logs {
            let logs = TuiLoggerWidget::default()
                .block(Block::bordered().title("Log"))
                .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
                .output_file(false)
                .output_line(false);
            frame.render_widget(logs, log_area);
        }

        render_status(frame, status_area, self.status_line(), &self.theme);
    }

    fn activity(&self) -> Activity {
        if self.opening().is_some() {
            Activity::Opening
        } else if self.search.is_in_flight() {
            Activity::Searching
        } else {
            Activity::Idle
        }
    }

    fn status_line(&self) -> StatusLine {
        if let Some(notice) = self.controller.notice() {
            return StatusLine::Error(notice.to_string());
        }
        match self.opening() {
            Some(path) => StatusLine::Info(format!("Opening {path}…")),
            None => StatusLine::Hints,
        }
    }
}
