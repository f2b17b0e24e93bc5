use quadroots_core::Outcome;

/// Significant digits shown for each root.
const PRECISION: i32 = 6;

/// Renders an outcome as a single human-readable line.
#[must_use]
pub fn text(outcome: &Outcome) -> String {
    match *outcome {
        Outcome::NoSolution => "No solution".to_owned(),
        Outcome::InfiniteSolutions => "Infinite number of solutions".to_owned(),
        Outcome::OneRoot(x) => format!("x={}", number(x)),
        Outcome::TwoRoots(x1, x2) => format!("x1={} x2={}", number(x1), number(x2)),
    }
}

/// Renders an outcome as a JSON object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn json(outcome: &Outcome) -> Result<String, serde_json::Error> {
    serde_json::to_string(outcome)
}

/// Formats a number with six significant digits and no trailing zeros.
///
/// Switches to exponent notation for very small or very large magnitudes,
/// the same way C's `%g` does.
#[must_use]
pub fn number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string().to_lowercase();
    }

    // Rounding to the shown precision can carry into the next power of ten,
    // so the exponent is taken from the rounded scientific form.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_trailing_zeros(mantissa),
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_owned()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_outcomes() {
        assert_eq!(text(&Outcome::NoSolution), "No solution");
        assert_eq!(
            text(&Outcome::InfiniteSolutions),
            "Infinite number of solutions"
        );
        assert_eq!(text(&Outcome::OneRoot(-2.0)), "x=-2");
        assert_eq!(
            text(&Outcome::TwoRoots(-0.585_786_437_6, -3.414_213_562)),
            "x1=-0.585786 x2=-3.41421"
        );
    }

    #[test]
    fn numbers_use_six_significant_digits() {
        assert_eq!(number(-10.898_979_485_566_356), "-10.899");
        assert_eq!(number(-1.101_020_514_433_644), "-1.10102");
        assert_eq!(number(-0.6), "-0.6");
        assert_eq!(number(-5.0 / 3.0), "-1.66667");
        assert_eq!(number(12.0), "12");
        assert_eq!(number(123_456.0), "123456");
    }

    #[test]
    fn numbers_switch_to_exponent_notation() {
        assert_eq!(number(1_234_567.0), "1.23457e+06");
        assert_eq!(number(0.000_012_5), "1.25e-05");
        assert_eq!(number(0.000_1), "0.0001");
    }

    #[test]
    fn numbers_at_the_ends_of_the_range() {
        assert_eq!(number(f64::MAX), "1.79769e+308");
        assert_eq!(number(-f64::MIN_POSITIVE), "-2.22507e-308");
        assert_eq!(number(5e-324), "4.94066e-324");
    }

    #[test]
    fn special_values() {
        assert_eq!(number(0.0), "0");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(f64::NEG_INFINITY), "-inf");
        assert_eq!(number(f64::NAN), "nan");
    }

    #[test]
    fn json_is_tagged_by_kind() {
        assert_eq!(
            json(&Outcome::TwoRoots(1.0, -1.0)).expect("serializes"),
            r#"{"kind":"two_roots","roots":[1.0,-1.0]}"#
        );
        assert_eq!(
            json(&Outcome::OneRoot(-2.0)).expect("serializes"),
            r#"{"kind":"one_root","roots":-2.0}"#
        );
        assert_eq!(
            json(&Outcome::NoSolution).expect("serializes"),
            r#"{"kind":"no_solution"}"#
        );
    }
}
