use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `quickpick` binary.
#[derive(Parser, Debug)]
#[command(
    name = "quickpick",
    version,
    long_version = long_version(),
    about = "Keyboard-driven launcher overlay for applications and files",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "QUICKPICK_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'm',
        long = "max-results",
        value_name = "NUM",
        help = "Limit the number of results per query (default: 20)"
    )]
    pub(crate) max_results: Option<usize>,
    #[arg(
        short = 't',
        long,
        value_name = "TEXT",
        help = "Set the label shown in front of the input (default: Launch)"
    )]
    pub(crate) prompt: Option<String>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Minimum level shown in the log pane (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 's',
        long = "print-selection",
        help = "Print the opened path after the overlay closes (default: disabled)"
    )]
    pub(crate) print_selection: bool,
    #[arg(
        long,
        requires = "print_selection",
        help = "Print the session outcome as JSON (default: disabled)"
    )]
    pub(crate) json: bool,
}
