//! Expansion of the display constants `pi` and `e`.
//!
//! The calculator display lets users type `pi` and a bare `e` for Euler's
//! number. Both are replaced with fixed decimal literals before the
//! expression reaches the engine, which only understands digits.

use crate::domain::{CalcError, CalcResult};

pub const PI_LITERAL: &str = "3.14159265359";
pub const E_LITERAL: &str = "2.71828182846";

/// Rejects display-level mistakes, then substitutes `pi` and bare `e`.
///
/// # Examples
///
/// ```
/// use smartcalc::application::expand_constants;
///
/// assert_eq!(expand_constants("2*pi").unwrap(), "2*3.14159265359");
/// assert_eq!(expand_constants("e^2").unwrap(), "2.71828182846^2");
/// // scientific notation keeps its `e`
/// assert_eq!(expand_constants("1e-3").unwrap(), "1e-3");
/// assert!(expand_constants("2pi").is_err());
/// ```
pub fn expand_constants(expr: &str) -> CalcResult<String> {
    check_closing_paren(expr)?;
    check_pi_neighbours(expr)?;
    let expr = expr.replace("pi", PI_LITERAL);
    Ok(expand_euler(&expr))
}

fn check_closing_paren(expr: &str) -> CalcResult<()> {
    let bytes = expr.as_bytes();
    if bytes
        .windows(2)
        .any(|pair| pair[0] == b')' && pair[1].is_ascii_alphabetic())
    {
        return Err(CalcError::syntax("closing parenthesis followed by a letter"));
    }
    Ok(())
}

// Only the first occurrence is inspected.
fn check_pi_neighbours(expr: &str) -> CalcResult<()> {
    let Some(index) = expr.find("pi") else {
        return Ok(());
    };
    let bytes = expr.as_bytes();
    let digit_before = index > 0 && bytes[index - 1].is_ascii_digit();
    let digit_after = bytes.get(index + 2).is_some_and(|b| b.is_ascii_digit());
    if digit_before || digit_after {
        return Err(CalcError::syntax("pi must not touch a digit"));
    }
    Ok(())
}

/// Replaces each `e` with [`E_LITERAL`] unless it sits between a digit and
/// a sign, as in `1e-10`.
fn expand_euler(expr: &str) -> String {
    let chars: Vec<char> = expr.chars().collect();
    let mut out = String::with_capacity(expr.len());

    for (i, &ch) in chars.iter().enumerate() {
        if ch != 'e' {
            out.push(ch);
            continue;
        }
        let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let before_sign = matches!(chars.get(i + 1), Some('+') | Some('-'));
        if after_digit && before_sign {
            out.push('e');
        } else {
            out.push_str(E_LITERAL);
        }
    }

    out
}
