use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    println!("Effective configuration:");
    println!("  Prompt: {}", config.prompt);
    println!("  UI theme: {}", config.theme_name);
    if !config.initial_query.is_empty() {
        println!("  Initial query: {}", config.initial_query);
    }
    println!("  Reset on show: {}", bool_to_word(config.reset_on_show));
    println!("  Log level: {}", config.log_level);
    println!("  Max results: {}", config.max_results);
    println!("  Common entries: {}", config.common.len());
    println!("  Catalog entries: {}", config.entries.len());
    if config.web.is_empty() {
        println!("  Web shortcuts: (none)");
    } else {
        let prefixes: Vec<&str> = config.web.iter().map(|web| web.prefix.as_str()).collect();
        println!("  Web shortcuts: {}", prefixes.join(", "));
    }
    println!("  Opener: {}", config.opener.join(" "));
    println!("  Terminal: {}", config.terminal.join(" "));
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::super::sample;
    use super::*;

    #[test]
    fn bool_to_word_matches_expectations() {
        assert_eq!(bool_to_word(true), "yes");
        assert_eq!(bool_to_word(false), "no");
    }

    #[test]
    fn summary_prints_without_panic() {
        print_summary(&sample());
    }
}
