//! Loan amortization formulas.
//!
//! Both calculators take validated [`CreditInputs`] and reject any result
//! whose headline figures collapse to zero or overflow.

use log::warn;

use super::errors::{CreditError, CreditResult};
use super::models::{AnnuityPayments, CreditInputs, DifferentiatedPayments};

/// Fixed monthly payment schedule.
///
/// # Examples
///
/// ```
/// use smartcalc::domain::{annuity, CreditInputs};
///
/// let inputs = CreditInputs::new(100000.0, 12.0, 12.0).unwrap();
/// let payments = annuity(&inputs).unwrap();
/// assert!((payments.monthly_payment - 8884.88).abs() < 0.01);
/// ```
pub fn annuity(inputs: &CreditInputs) -> CreditResult<AnnuityPayments> {
    inputs.validate()?;

    let rate = inputs.monthly_rate();
    let growth = (1.0 + rate).powf(inputs.duration_months);
    let monthly_payment = inputs.principal * rate * growth / (growth - 1.0);
    let total_repayment = monthly_payment * inputs.duration_months;
    let overpay = total_repayment - inputs.principal;

    check_headlines("annuity", &[monthly_payment, overpay, total_repayment])?;
    Ok(AnnuityPayments {
        monthly_payment,
        overpay,
        total_repayment,
    })
}

/// Constant principal portion with interest charged on the remaining balance.
///
/// A fractional duration is treated as that many started months: the loop
/// runs `ceil(duration_months)` times.
pub fn differentiated(inputs: &CreditInputs) -> CreditResult<DifferentiatedPayments> {
    inputs.validate()?;

    let rate = inputs.monthly_rate();
    let monthly_principal = inputs.principal / inputs.duration_months;
    let months = inputs.duration_months.ceil() as u64;

    let mut first_month_payment = 0.0;
    let mut last_month_payment = 0.0;
    let mut total_repayment = 0.0;

    for month in 0..months {
        let balance = inputs.principal - monthly_principal * month as f64;
        let payment = monthly_principal + balance * rate;
        if month == 0 {
            first_month_payment = payment;
        }
        last_month_payment = payment;
        total_repayment += payment;
    }
    let overpay = total_repayment - inputs.principal;

    check_headlines(
        "differentiated",
        &[first_month_payment, last_month_payment, overpay, total_repayment],
    )?;
    Ok(DifferentiatedPayments {
        first_month_payment,
        last_month_payment,
        overpay,
        total_repayment,
    })
}

fn check_headlines(kind: &str, values: &[f64]) -> CreditResult<()> {
    if values.iter().any(|v| *v == 0.0 || !v.is_finite()) {
        warn!("{} credit produced a degenerate result: {:?}", kind, values);
        return Err(CreditError::Calculation(format!(
            "{} credit produced an invalid result",
            kind
        )));
    }
    Ok(())
}
