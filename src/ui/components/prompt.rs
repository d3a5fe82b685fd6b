use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

/// Background work shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Searching,
    Opening,
}

impl Activity {
    fn label(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Searching => "searching",
            Self::Opening => "opening",
        }
    }
}

/// Argument bundle for rendering the input row.
pub struct PromptContext<'a> {
    pub prompt: &'a str,
    pub search_input: &'a SearchInput<'a>,
    pub activity: Activity,
    pub throbber_state: &'a ThrobberState,
    pub theme: &'a Theme,
}

/// Render `<prompt> > <input>` with an activity indicator on the right.
pub fn render_prompt(frame: &mut Frame, area: Rect, context: PromptContext<'_>) {
    let PromptContext {
        prompt,
        search_input,
        activity,
        throbber_state,
        theme,
    } = context;

    let prompt_text = if prompt.is_empty() {
        String::new()
    } else {
        format!("{prompt} > ")
    };
    let activity_line = activity_line(activity, throbber_state, theme);
    let [prompt_area, input_area, activity_area] = Layout::horizontal([
        Constraint::Length(prompt_text.width() as u16),
        Constraint::Min(1),
        Constraint::Length(activity_line.width() as u16),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(prompt_text).style(theme.prompt_style()),
        prompt_area,
    );
    search_input.render(frame, input_area);
    frame.render_widget(Paragraph::new(activity_line), activity_area);
}

fn activity_line(activity: Activity, throbber_state: &ThrobberState, theme: &Theme) -> Line<'static> {
    if activity == Activity::Idle {
        return Line::default();
    }

    let muted_style = theme.empty_style();
    let spinner = Throbber::default()
        .style(muted_style)
        .throbber_style(muted_style);
    let mut line = Line::default();
    line.spans.push(spinner.to_symbol_span(throbber_state));
    line.spans
        .push(Span::styled(activity.label().to_string(), muted_style));
    line
}
