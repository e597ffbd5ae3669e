//! Cheap textual checks run on canonical expressions before parsing.
//!
//! These rules only look at characters and their neighbours. Structural
//! problems (unbalanced parentheses, dangling operators, empty input) are
//! left to the parser.

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use super::errors::{CalcError, CalcResult};
use super::models::CanonicalExpression;

static CONSECUTIVE_OPERATORS: OnceLock<Regex> = OnceLock::new();
static MALFORMED_TOKENS: OnceLock<Regex> = OnceLock::new();
static CANONICAL_CHARSET: OnceLock<Regex> = OnceLock::new();

fn consecutive_operators() -> &'static Regex {
    CONSECUTIVE_OPERATORS
        .get_or_init(|| Regex::new(r"[+\-*/^%]{2,}").expect("Valid regex pattern"))
}

// A digit run running into letters, a doubled '*', or any foreign character.
fn malformed_tokens() -> &'static Regex {
    MALFORMED_TOKENS.get_or_init(|| {
        Regex::new(r"[0-9]+[a-zA-Z]+|\*\*|[^0-9+\-*/^%.()a-zA-Z]").expect("Valid regex pattern")
    })
}

fn canonical_charset() -> &'static Regex {
    CANONICAL_CHARSET
        .get_or_init(|| Regex::new(r"^[+\-*/%^cstCSTqLle.()0-9]*$").expect("Valid regex pattern"))
}

/// Checks the rules in order; the first one that fails decides the error.
pub fn validate(expr: &CanonicalExpression) -> CalcResult<()> {
    let text = expr.as_str();

    if consecutive_operators().is_match(text) {
        debug!("rejected {:?}: consecutive operators", text);
        return Err(CalcError::syntax("invalid expression: contains consecutive operators"));
    }

    if malformed_tokens().is_match(text) {
        debug!("rejected {:?}: invalid characters or operators", text);
        return Err(CalcError::syntax(
            "invalid expression: contains invalid characters or operators",
        ));
    }

    if !canonical_charset().is_match(text) {
        debug!("rejected {:?}: outside canonical charset", text);
        return Err(CalcError::syntax("invalid expression"));
    }

    Ok(())
}
