//! Text rendering for calculator output.

use crate::application::{CreditReport, PlotPoint};

/// Formats an evaluation result for display.
///
/// Plain mode prints the shortest decimal that reads back as the same
/// value, never switching to exponent notation. Scientific mode prints
/// eight fractional digits followed by a signed exponent of at least two
/// digits.
///
/// # Examples
///
/// ```
/// use smartcalc::presentation::format_result;
///
/// assert_eq!(format_result(56.0, false), "56");
/// assert_eq!(format_result(0.25, false), "0.25");
/// assert_eq!(format_result(56.0, true), "5.60000000e+01");
/// ```
pub fn format_result(value: f64, scientific: bool) -> String {
    if !scientific || !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.8e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

/// Money amounts are shown with two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn render_credit(report: &CreditReport) -> String {
    let entries = report.entries();
    let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut lines = vec![format!("{} credit", report.kind())];
    for (label, value) in entries {
        lines.push(format!("  {:<width$}  {}", label, format_amount(value), width = width));
    }
    lines.join("\n")
}

/// One `x<TAB>y` line per point.
pub fn render_plot(points: &[PlotPoint], scientific: bool) -> String {
    points
        .iter()
        .map(|p| format!("{:.6}\t{}", p.x, format_result(p.y, scientific)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnnuityPayments, DifferentiatedPayments};

    #[test]
    fn test_plain_results() {
        assert_eq!(format_result(4.0, false), "4");
        assert_eq!(format_result(-4.0, false), "-4");
        assert_eq!(format_result(0.1, false), "0.1");
        assert_eq!(format_result(1e10, false), "10000000000");
        assert_eq!(format_result(1e-10, false), "0.0000000001");
    }

    #[test]
    fn test_scientific_results() {
        assert_eq!(format_result(0.0, true), "0.00000000e+00");
        assert_eq!(format_result(-1234.5, true), "-1.23450000e+03");
        assert_eq!(format_result(1e-10, true), "1.00000000e-10");
        assert_eq!(format_result(1.5e120, true), "1.50000000e+120");
    }

    #[test]
    fn test_non_finite_results_print_plainly() {
        assert_eq!(format_result(f64::INFINITY, true), "inf");
        assert_eq!(format_result(f64::NEG_INFINITY, false), "-inf");
        assert_eq!(format_result(f64::NAN, true), "NaN");
    }

    #[test]
    fn test_amounts() {
        assert_eq!(format_amount(8884.878867834166), "8884.88");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_render_credit() {
        let report = CreditReport::Annuity(AnnuityPayments {
            monthly_payment: 100.0,
            overpay: 20.0,
            total_repayment: 1200.0,
        });
        let text = render_credit(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Annuity credit");
        assert_eq!(lines[1], "  Monthly Payment  100.00");
        assert_eq!(lines[2], "  Overpayment      20.00");
        assert_eq!(lines[3], "  Total Repayment  1200.00");

        let report = CreditReport::Differentiated(DifferentiatedPayments::default());
        assert_eq!(render_credit(&report).lines().count(), 5);
    }

    #[test]
    fn test_render_plot() {
        let points = [PlotPoint { x: -1.0, y: 1.0 }, PlotPoint { x: 0.5, y: 0.25 }];
        assert_eq!(render_plot(&points, false), "-1.000000\t1\n0.500000\t0.25");
        assert_eq!(render_plot(&[], false), "");
    }
}
