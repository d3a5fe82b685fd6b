use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::controller::{ResultsView, RowView};
use crate::ui::theme::Theme;

pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
const HEADERS: [&str; 3] = ["Name", "Kind", "Score"];
const TABLE_COLUMN_SPACING: u16 = 1;

/// Part of the result area below the header where rows are drawn.
#[must_use]
pub fn body_area(area: Rect) -> Rect {
    let [_, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    body
}

/// Draw the result table, starting at row `offset`.
///
/// Rows are only drawn for [`ResultsView::Rows`]; the empty and failed states
/// draw their message under the header instead.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    view: &ResultsView<'_>,
    offset: usize,
    theme: &Theme,
) {
    let rows = view.rows();
    let selected = rows.iter().position(|row| row.selected);
    let table = Table::new(rows.iter().map(build_row), widths())
        .header(Row::new(HEADERS).style(theme.header_style()))
        .column_spacing(TABLE_COLUMN_SPACING)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);
    let mut state = TableState::default()
        .with_offset(offset)
        .with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);

    if let Some(message) = view.message() {
        let style = match view {
            ResultsView::Failed(_) => theme.error_style(),
            _ => theme.empty_style(),
        };
        let message = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(message, body_area(area));
    }
}

fn widths() -> [Constraint; 3] {
    [
        Constraint::Min(10),
        Constraint::Length(5),
        Constraint::Length(7),
    ]
}

fn build_row<'a>(row: &RowView<'a>) -> Row<'a> {
    Row::new([
        Cell::from(row.item.name.as_str()),
        Cell::from(row.item.kind_label()),
        Cell::from(row.item.score.to_string()),
    ])
}
