use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve(cli)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    fn cli_with_file(contents: &str, extra: &[&str]) -> (tempfile::TempDir, CliArgs) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quickpick.toml");
        fs::write(&path, contents).unwrap();
        let mut args = vec![
            "quickpick".to_string(),
            "--no-config".to_string(),
            "--config".to_string(),
            path.display().to_string(),
        ];
        args.extend(extra.iter().map(|arg| arg.to_string()));
        (dir, CliArgs::parse_from(args))
    }

    #[test]
    fn file_values_are_loaded() {
        let (_dir, cli) = cli_with_file(
            r#"
[ui]
prompt = "Open"
theme = "light"
reset_on_show = true

[search]
max_results = 7

[[search.common]]
name = "Terminal"
path = "/usr/bin/xterm"
application = true
score = 5

[[search.entries]]
name = "notes.md"
path = "/home/me/notes.md"

[launcher]
opener = ["my-open"]
"#,
            &[],
        );

        let config = load(&cli).unwrap();

        assert_eq!(config.prompt, "Open");
        assert_eq!(config.theme_name, "light");
        assert!(config.reset_on_show);
        assert_eq!(config.max_results, 7);
        assert_eq!(config.common.len(), 1);
        assert!(config.common[0].is_application);
        assert_eq!(config.common[0].score, 5);
        assert_eq!(config.entries[0].name, "notes.md");
        assert!(!config.entries[0].is_application);
        assert_eq!(config.opener, vec!["my-open".to_string()]);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let (_dir, cli) = cli_with_file(
            "[ui]\nprompt = \"Open\"\n[search]\nmax_results = 7\n",
            &["--prompt", "Run", "--max-results", "3", "-q", "calc"],
        );

        let config = load(&cli).unwrap();

        assert_eq!(config.prompt, "Run");
        assert_eq!(config.max_results, 3);
        assert_eq!(config.initial_query, "calc");
    }

    #[test]
    fn zero_max_results_names_its_origin() {
        let (_dir, cli) = cli_with_file("[search]\nmax_results = 0\n", &[]);

        let err = load(&cli).unwrap_err().to_string();

        assert!(err.contains("search.max_results"), "{err}");
        assert!(err.contains("configuration key"), "{err}");
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let (_dir, cli) = cli_with_file("", &["--theme", "neon"]);

        let err = load(&cli).unwrap_err().to_string();

        assert!(err.contains("ui.theme"), "{err}");
        assert!(err.contains("--theme"), "{err}");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let cli = CliArgs::parse_from([
            "quickpick",
            "--no-config",
            "--config",
            "/nonexistent/quickpick.toml",
        ]);

        assert!(load(&cli).is_err());
    }
}
