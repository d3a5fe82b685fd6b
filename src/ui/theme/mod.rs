mod builtins;
mod types;

pub use builtins::{DEFAULT_THEME, by_name, names};
pub use types::Theme;

impl Default for Theme {
    fn default() -> Self {
        builtins::SLATE
    }
}
