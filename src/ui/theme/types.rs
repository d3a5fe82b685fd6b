use ratatui::style::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header: Style,
    pub row_highlight: Style,
    pub prompt: Style,
    pub empty: Style,
    pub error: Style,
    pub status: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn status_style(&self) -> Style {
        self.status
    }
}
