//! Logger setup for the interactive session.
//!
//! Records go through the `log` facade into `tui-logger`'s buffer instead of
//! stderr, which would tear the full-screen UI. The log pane renders that
//! buffer.

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Install the logger and show records at `level` and above.
pub fn initialize(level: LevelFilter) -> Result<()> {
    tui_logger::init_logger(LevelFilter::Trace)
        .map_err(|err| anyhow!("failed to install logger: {err}"))?;
    tui_logger::set_default_level(level);
    Ok(())
}

/// Move buffered records into the widget's view. Call once per frame.
pub fn pump() {
    tui_logger::move_events();
}

/// Parse a level name such as `info` or `debug`.
pub fn parse_level(value: &str) -> Result<LevelFilter> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow!("unknown log level '{value}' (expected off, error, warn, info, debug or trace)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(parse_level("DEBUG").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level(" warn ").unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(parse_level("loud").is_err());
    }
}
