use super::RESULT_PREFIX;
use crate::types::Match;

/// Prefixes that force an expression to be evaluated.
const PREFIXES: [&str; 2] = ["calc:", "="];
const OPERATORS: &[char] = &['+', '-', '*', '/', '^', '(', 'x', '×', '÷'];

/// Evaluate `query` as arithmetic, returning an informational `result:` entry.
///
/// Without a prefix the query must contain a digit and an operator. Anything
/// that fails to parse yields `None` so the caller can fall back to matching.
pub(super) fn evaluate(query: &str, score: i64) -> Option<Match> {
    let query = query.trim();
    let expression = PREFIXES
        .iter()
        .find_map(|prefix| query.strip_prefix(prefix))
        .unwrap_or(query)
        .trim();

    let has_digit = expression.chars().any(|ch| ch.is_ascii_digit());
    let has_operator = expression.contains(OPERATORS);
    if !has_digit || !has_operator {
        return None;
    }

    let normalized = expression
        .replace(['x', '×'], "*")
        .replace('÷', "/")
        .replace(',', ".");
    let value = meval::eval_str(&normalized).ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(Match::application(
        format!("= {value}"),
        format!("{RESULT_PREFIX}{value}"),
        score,
    ))
}
