mod cli;
mod settings;

use std::sync::Arc;

use anyhow::{Context, Result};
use cli::{parse_cli, print_json, print_selection};
use quickpick::ui::theme;
use quickpick::{App, CatalogSearcher, CommandLauncher, UiOptions, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let level = logging::parse_level(&resolved.log_level)?;
    logging::initialize(level)?;

    let mut app = build_app(resolved)?;
    let outcome = quickpick::run(&mut app)?;

    if cli.json {
        print_json(&outcome)?;
    } else if cli.print_selection {
        print_selection(&outcome);
    }

    Ok(())
}

/// Wire the configured collaborators into an overlay ready to show.
fn build_app(settings: ResolvedConfig) -> Result<App<'static>> {
    let theme = theme::by_name(&settings.theme_name)
        .with_context(|| format!("unknown theme '{}'", settings.theme_name))?;

    let searcher = CatalogSearcher::new(settings.common, settings.entries)
        .with_web_shortcuts(settings.web)
        .with_max_results(settings.max_results);
    let launcher = CommandLauncher::new(settings.opener, settings.terminal);
    log::debug!(
        "opener: {:?}, terminal: {:?}",
        launcher.opener(),
        launcher.terminal()
    );

    let options = UiOptions {
        prompt: settings.prompt,
        reset_on_show: settings.reset_on_show,
    };
    let mut app = App::new(Arc::new(searcher), Arc::new(launcher))
        .with_options(options)
        .with_initial_query(settings.initial_query);
    app.set_theme(theme);
    Ok(app)
}
