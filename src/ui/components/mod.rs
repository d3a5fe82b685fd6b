//! Widgets that make up the overlay: prompt row, result table and status line.

mod prompt;
mod results;
mod status;

pub use prompt::{Activity, PromptContext, render_prompt};
pub use results::{HIGHLIGHT_SYMBOL, body_area, render_results};
pub use status::{StatusLine, render_status};
