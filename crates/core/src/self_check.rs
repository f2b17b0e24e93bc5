//! A fixed table of example equations the solver must reproduce.
//!
//! The expected roots are recorded to six significant digits, so a case
//! passes when the computed outcome matches within [`MAX_RELATIVE`].

use approx::relative_eq;
use tracing::warn;

use crate::{Config, Outcome, solve_raw};

/// Relative tolerance used to compare computed roots against the table.
pub const MAX_RELATIVE: f64 = 1e-5;

/// One example equation and its expected outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    /// The coefficients `[a, b, c]`.
    pub coefficients: [f64; 3],

    /// The outcome the solver should produce.
    pub expected: Outcome,
}

const fn case(a: f64, b: f64, c: f64, expected: Outcome) -> Case {
    Case {
        coefficients: [a, b, c],
        expected,
    }
}

/// The example equations, in the order they are reported.
pub const CASES: [Case; 10] = [
    case(1.0, 4.0, 2.0, Outcome::TwoRoots(-0.585_786, -3.414_21)),
    case(0.0, 0.0, 0.0, Outcome::InfiniteSolutions),
    case(0.0, 0.0, 1.0, Outcome::NoSolution),
    case(1.0, 1.0, 1.0, Outcome::NoSolution),
    case(1.0, 12.0, 12.0, Outcome::TwoRoots(-1.101_02, -10.899)),
    case(2.0, 5.0, 3.0, Outcome::TwoRoots(-1.0, -1.5)),
    case(12.0, 23.0, 11.0, Outcome::TwoRoots(-0.916_667, -1.0)),
    case(1.0, 4.0, 4.0, Outcome::OneRoot(-2.0)),
    case(3.0, 65.0, 32.0, Outcome::TwoRoots(-0.504_033, -21.162_6)),
    case(0.0, 5.0, 3.0, Outcome::OneRoot(-0.6)),
];

/// The result of checking a single case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseResult {
    /// 1-based position of the case in [`CASES`].
    pub number: usize,
    pub case: Case,
    pub actual: Outcome,
    pub passed: bool,
}

/// Results for every case in [`CASES`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub results: Vec<CaseResult>,
}

impl Report {
    /// Returns true if every case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }

    /// Returns the cases that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|result| !result.passed)
    }
}

/// Runs every case in [`CASES`] under the given config.
#[must_use]
pub fn run(config: &Config) -> Report {
    let results = CASES
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let [a, b, c] = case.coefficients;
            let actual = solve_raw(a, b, c, config);
            let passed = relative_eq!(actual, case.expected, max_relative = MAX_RELATIVE);
            if !passed {
                warn!(
                    number = index + 1,
                    a,
                    b,
                    c,
                    expected = ?case.expected,
                    ?actual,
                    "self-check case failed"
                );
            }
            CaseResult {
                number: index + 1,
                case: *case,
                actual,
                passed,
            }
        })
        .collect();

    Report { results }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::LinearForm;

    #[test]
    fn passes_with_default_config() {
        let report = run(&Config::default());
        assert_eq!(report.results.len(), CASES.len());
        let failures: Vec<_> = report.failures().collect();
        assert!(report.all_passed(), "failures: {failures:?}");
    }

    #[test]
    fn passes_with_loose_tolerance() {
        let config = Config::new(1e-4, LinearForm::Corrected).expect("valid tolerance");
        assert!(run(&config).all_passed());
    }

    #[test]
    fn numbers_cases_from_one() {
        let report = run(&Config::default());
        let numbers: Vec<_> = report.results.iter().map(|r| r.number).collect();
        assert_eq!(numbers, (1..=CASES.len()).collect::<Vec<_>>());
    }

    #[test]
    fn swapped_linear_form_fails_only_the_linear_case() {
        let config = Config::default().with_linear_form(LinearForm::Swapped);
        let report = run(&config);

        assert!(!report.all_passed());
        let failed: Vec<_> = report.failures().map(|r| r.case.coefficients).collect();
        assert_eq!(failed, vec![[0.0, 5.0, 3.0]]);
    }
}
