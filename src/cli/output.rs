use anyhow::Result;
use quickpick::SessionOutcome;

/// Print the opened path, or nothing when the overlay was dismissed.
pub(crate) fn print_selection(outcome: &SessionOutcome) {
    if let Some(path) = &outcome.launched {
        println!("{path}");
    }
}

pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_includes_launched_path_and_query() {
        let outcome = SessionOutcome {
            launched: Some("/apps/calc".into()),
            query: "calc".into(),
        };

        let json = format_outcome_json(&outcome).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["launched"], "/apps/calc");
        assert_eq!(value["query"], "calc");
    }

    #[test]
    fn dismissed_session_serializes_null_path() {
        let outcome = SessionOutcome::default();

        let value: Value = serde_json::from_str(&format_outcome_json(&outcome).unwrap()).unwrap();
        assert!(value["launched"].is_null());
    }
}
