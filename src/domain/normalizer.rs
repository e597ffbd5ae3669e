//! Rewrites user-facing expressions into canonical form.
//!
//! Normalization is a chain of pure string rewrites applied in a fixed order:
//!
//! 1. function keywords become single-character markers (`asin` -> `S`)
//! 2. spaces are removed
//! 3. every `x` is replaced by the supplied numeral
//! 4. `e-` / `e+` become `/10^` / `*10^`
//!
//! Normalization never fails. Anything it produces that is not a valid
//! expression is rejected later by the validator or the parser.

use super::models::{CanonicalExpression, FunctionToken};

/// Runs the whole normalization chain.
///
/// # Examples
///
/// ```
/// use smartcalc::domain::normalize;
///
/// assert_eq!(normalize("asin(1) + sin(x)", "2").as_str(), "S(1)+s(2)");
/// assert_eq!(normalize("1e-10", "").as_str(), "1/10^10");
/// ```
pub fn normalize(raw: &str, x_value: &str) -> CanonicalExpression {
    let expr = substitute_keywords(raw);
    let expr = remove_spaces(&expr);
    let expr = substitute_variable(&expr, x_value);
    let expr = rewrite_exponents(&expr);
    CanonicalExpression::new(expr)
}

/// Replaces function keywords with their markers in one left-to-right scan.
///
/// At each position the longest keyword that matches wins, so `asin` is never
/// seen as `a` followed by `sin`.
pub fn substitute_keywords(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(ch) = rest.chars().next() {
        // FunctionToken::ALL lists longer keywords first
        let matched = FunctionToken::ALL
            .into_iter()
            .find(|func| rest.starts_with(func.keyword()));

        match matched {
            Some(func) => {
                out.push(func.marker());
                rest = &rest[func.keyword().len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}

pub fn remove_spaces(expr: &str) -> String {
    expr.replace(' ', "")
}

pub fn substitute_variable(expr: &str, x_value: &str) -> String {
    expr.replace('x', x_value)
}

/// Textual scientific-notation rewrite. A bare `e` is left alone.
pub fn rewrite_exponents(expr: &str) -> String {
    expr.replace("e-", "/10^").replace("e+", "*10^")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_become_markers() {
        assert_eq!(substitute_keywords("sqrt(4)"), "q(4)");
        assert_eq!(substitute_keywords("acos(1)asin(1)atan(1)"), "C(1)S(1)T(1)");
        assert_eq!(substitute_keywords("cos(1)sin(1)tan(1)"), "c(1)s(1)t(1)");
        assert_eq!(substitute_keywords("log(2)+ln(2)"), "L(2)+l(2)");
    }

    #[test]
    fn test_overlapping_keywords() {
        assert_eq!(normalize("asin(1)+sin(1)", "").as_str(), "S(1)+s(1)");
        assert_eq!(normalize("sin(1)+asin(1)", "").as_str(), "s(1)+S(1)");
        assert_eq!(normalize("acos(cos(0))", "").as_str(), "C(c(0))");
        assert_eq!(normalize("atan(tan(1))", "").as_str(), "T(t(1))");
    }

    #[test]
    fn test_canonical_input_is_unchanged() {
        let clean = [
            "2+3^3*2",
            "q(q(79))",
            "t(S(0.5))",
            "s(1)+c(1)-3*(-2)*(30%2)+s(1)",
            "(2+2)*L(100)/q(25)",
            "",
        ];
        for expr in clean {
            assert_eq!(normalize(expr, "").as_str(), expr);
        }
    }

    #[test]
    fn test_spaces_removed_after_keywords() {
        assert_eq!(normalize(" sqrt ( 144 ) ", "").as_str(), "q(144)");
        assert_eq!(normalize("42421135678 - 0.3423433132323", "").as_str(), "42421135678-0.3423433132323");
    }

    #[test]
    fn test_variable_substitution() {
        assert_eq!(normalize("x^2+x", "3").as_str(), "3^2+3");
        assert_eq!(normalize("sin(x)", "0.500000").as_str(), "s(0.500000)");
        assert_eq!(normalize("x", "").as_str(), "");
    }

    #[test]
    fn test_scientific_notation_rewrite() {
        assert_eq!(normalize("1e-10", "").as_str(), "1/10^10");
        assert_eq!(normalize("1e+10", "").as_str(), "1*10^10");
        assert_eq!(normalize("1e+10 + 1e-10", "").as_str(), "1*10^10+1/10^10");
    }

    #[test]
    fn test_bare_e_untouched() {
        assert_eq!(normalize("1e*10", "").as_str(), "1e*10");
        assert_eq!(normalize("e", "").as_str(), "e");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(substitute_keywords("π+sin(1)"), "π+s(1)");
    }
}
