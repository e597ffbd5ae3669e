use smartcalc::domain::{calculate, credit_annuity, credit_differentiated};
use smartcalc::{Calculator, CreditKind, Settings};

const TOLERANCE: f64 = 1e-9;

fn assert_evaluates(cases: &[(&str, f64)]) {
    for &(input, expected) in cases {
        let (value, err) = calculate(input, "");
        assert!(err.is_none(), "{:?} failed: {:?}", input, err);
        assert!(
            (value - expected).abs() < TOLERANCE,
            "Expected {:?} to be close to {}, got {}",
            input,
            expected,
            value
        );
    }
}

#[test]
fn test_simple_expressions() {
    assert_evaluates(&[
        ("0/7", 0.0),
        ("42421135678 - 0.3423433132323", 42421135678.0 - 0.3423433132323),
        ("2+3^3*2", 56.0),
        ("-(2+2)", -4.0),
        ("(1-2)+4", 3.0),
        ("2*(-2-2)", -8.0),
        ("-(9-2)", -7.0),
        ("-1-3", -4.0),
        ("1-3", -2.0),
        ("1000+333-123.23", 1000.0 + 333.0 - 123.23),
        ("5*5+10/2", 30.0),
        ("3*3^3-10", 71.0),
        ("(2+2)*(3-1)", 8.0),
        ("sqrt(144)", 12.0),
        ("1.2345*1000-1234", 1.2345 * 1000.0 - 1234.0),
        ("1000/2*4", 2000.0),
        ("-4+6/2-3", -4.0),
        ("1e+10", 1e10),
        ("1e-10", 1e-10),
    ]);
}

#[test]
fn test_function_expressions() {
    let one = 1f64;
    assert_evaluates(&[
        ("-(7+(4+c(1)))", -(7.0 + (4.0 + one.cos()))),
        ("-(c(c(2)))", -(2f64.cos().cos())),
        ("s(1)+c(1)-3*(-2)*(30%2)+s(1)", 2.0 * one.sin() + one.cos()),
        ("1+c(2)+(5-10)", 1.0 + 2f64.cos() - 5.0),
        ("c(4)+s(5)", 4f64.cos() + 5f64.sin()),
        (
            "s(1)+c(1)-3+2*(-2)+3^3-l(10)",
            one.sin() + one.cos() - 3.0 - 4.0 + 27.0 - 10f64.ln(),
        ),
        ("t(7)", 7f64.tan()),
        ("S(1)", std::f64::consts::FRAC_PI_2),
        ("T(2)", 2f64.atan()),
        ("L(2)", 2f64.log10()),
        ("q(q(79))", 79f64.sqrt().sqrt()),
        ("t(S(0.5))", 0.5f64.asin().tan()),
        ("l(10)", std::f64::consts::LN_10),
        ("s(4)", 4f64.sin()),
        ("t(45)", 45f64.tan()),
        ("S(0.5)+C(0.5)", std::f64::consts::FRAC_PI_2),
    ]);
}

#[test]
fn test_complex_expressions() {
    assert_evaluates(&[
        ("2+3*(4-1)^2/3", 11.0),
        ("q(16) + (5^2 - 3*3)/3", 4.0 + 16.0 / 3.0),
        ("l(20) * s(1) + c(0.5)^2", 20f64.ln() * 1f64.sin() + 0.5f64.cos().powi(2)),
        ("(2+2)*L(100)/q(25)", 1.6),
        ("-4 + t(45) - 5^3 + l(3)", -4.0 + 45f64.tan() - 125.0 + 3f64.ln()),
        ("c(C(0.5)) + s(S(0.5))", 1.0),
        ("T(1)*4", std::f64::consts::PI),
        ("l(7) * L(1000)", 7f64.ln() * 3.0),
        ("4 * (3 + 5 * (2 - 7)^2) / 2 - 10", 246.0),
        ("(1 + 2*3^2) * (sqrt(49) - ln(1))", 133.0),
        ("3^3^2 / (2^5)", 19683.0 / 32.0),
        ("1e+10 + 1e-10 - (2^30)", 1e10 + 1e-10 - 1073741824.0),
        ("q(100) + c(0) + t(0)", 11.0),
        ("2^(1/3)", 2f64.powf(1.0 / 3.0)),
    ]);
}

#[test]
fn test_invalid_expressions() {
    let cases = [
        "5c",
        "(((1+2))",
        "7/0",
        "^Cc",
        "1e*10",
        "^99",
        "--4-5",
        "8++2",
        "-(-(-(-(-(5+9*)))))",
        "",
        "5++2",
        "1/0",
        "^++2",
        "2(3^2",
        "q(-16)",
    ];

    for input in cases {
        let (value, err) = calculate(input, "");
        assert!(err.is_some(), "Expected {:?} to fail, got {}", input, value);
        assert_eq!(value, 0.0, "{:?} should report 0.0 with its error", input);
    }
}

#[test]
fn test_long_flat_expressions() {
    let sum = vec!["1"; 200_000].join("+");
    assert_eq!(calculate(&sum, ""), (200_000.0, None));

    let tower = vec!["1"; 1_000].join("^");
    assert_eq!(calculate(&tower, ""), (1.0, None));
}

#[test]
fn test_variable_substitution() {
    assert_eq!(calculate("x^2+1", "3"), (10.0, None));
    assert_eq!(calculate("sin(x)", "0"), (0.0, None));
}

#[test]
fn test_calculator_with_constants() {
    let calc = Calculator::new(Settings::default());
    assert!((calc.evaluate("2*pi").unwrap() - 6.28318530718).abs() < TOLERANCE);
    assert!((calc.evaluate("e^2").unwrap() - 2.71828182846f64.powi(2)).abs() < TOLERANCE);
    assert!(calc.evaluate("(1+2)pi").is_err());
}

#[test]
fn test_credit_reference_loans() {
    let (annuity, err) = credit_annuity(100000.0, 12.0, 12.0);
    assert!(err.is_none());
    assert!((annuity.monthly_payment - 8884.88).abs() < 0.01);
    assert!((annuity.total_repayment - 106618.55).abs() < 0.01);
    assert!((annuity.overpay - 6618.55).abs() < 0.01);

    let (differentiated, err) = credit_differentiated(120000.0, 12.0, 12.0);
    assert!(err.is_none());
    assert!((differentiated.first_month_payment - 11200.0).abs() < 1e-6);
    assert!((differentiated.last_month_payment - 10100.0).abs() < 1e-6);
    assert!((differentiated.overpay - 7800.0).abs() < 1e-6);
    assert!((differentiated.total_repayment - 127800.0).abs() < 1e-6);
}

#[test]
fn test_credit_through_calculator() {
    let calc = Calculator::default();
    let kind: CreditKind = "differentiated".parse().unwrap();
    let report = calc.credit(kind, 120000.0, 12.0, 12.0).unwrap();
    assert_eq!(report.kind(), CreditKind::Differentiated);
    assert!(calc.credit(kind, 120000.0, -12.0, 12.0).is_err());
}
