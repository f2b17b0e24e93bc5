//! Root classification for quadratic and degenerate linear equations.
//!
//! # Algorithm
//!
//! A value counts as zero when its magnitude is strictly below the configured
//! tolerance (see [`Config::is_zero`]).
//!
//! 1. If `a` is zero the equation is linear, `b·x + c = 0`, and is handed to
//!    [`solve_linear`].
//! 2. Otherwise the discriminant `D = b² − 4ac` decides the outcome:
//!    a zero `D` gives one root `−b / 2a`, a negative `D` gives none, and a
//!    positive `D` gives two roots `(−b ± √D) / 2a`.
//!
//! The tolerance is an absolute threshold applied to both `a` and `D`.
//!
//! # Numerics
//!
//! If `b²` or `4ac` overflows, the coefficients are divided by the largest
//! magnitude among them before classifying. This preserves the sign of `D`
//! and the roots, and the tolerance is rescaled to match.
//!
//! Two roots are computed as `q / a` and `c / q` with
//! `q = −(b + sign(b)·√D) / 2`, which avoids cancellation when `4ac` is small
//! next to `b²`. A root whose magnitude exceeds `f64::MAX` is reported as a
//! signed infinity.

use tracing::{debug, trace};

use crate::{Coefficients, Config, LinearForm, Outcome};

/// Returns the discriminant `b² − 4ac`.
#[must_use]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Classifies and solves `a·x² + b·x + c = 0`.
#[must_use]
pub fn solve(coefficients: &Coefficients, config: &Config) -> Outcome {
    let (a, b, c) = (coefficients.a(), coefficients.b(), coefficients.c());

    if config.is_zero(a) {
        trace!(a, "leading coefficient is zero, solving as linear");
        let outcome = solve_linear(b, c, config);
        debug!(a, b, c, ?outcome, "solved linear equation");
        return outcome;
    }

    let d = discriminant(a, b, c);
    let outcome = if d.is_finite() {
        solve_quadratic(a, b, c, d, config.tolerance())
    } else {
        let scale = a.abs().max(b.abs()).max(c.abs());
        let (a, b, c) = (a / scale, b / scale, c / scale);
        let d = discriminant(a, b, c);
        trace!(scale, discriminant = d, "discriminant overflowed, rescaled");
        solve_quadratic(a, b, c, d, config.tolerance() / scale / scale)
    };

    debug!(a, b, c, discriminant = d, ?outcome, "solved quadratic equation");
    outcome
}

/// Classifies a quadratic with a non-zero leading coefficient and a finite
/// discriminant `d`.
fn solve_quadratic(a: f64, b: f64, c: f64, d: f64, tolerance: f64) -> Outcome {
    // The rescaled tolerance may underflow to zero.
    if d == 0.0 || d.abs() < tolerance {
        trace!(discriminant = d, "discriminant is zero, repeated root");
        return Outcome::OneRoot(-b / a / 2.0);
    }
    if d < 0.0 {
        trace!(discriminant = d, "discriminant is negative, no real roots");
        return Outcome::NoSolution;
    }

    trace!(discriminant = d, "discriminant is positive, two roots");
    let sqrt_d = d.sqrt();
    if b.is_sign_negative() {
        // q = (−b + √D) / 2
        let q = 0.5 * sqrt_d - 0.5 * b;
        Outcome::TwoRoots(q / a, c / q)
    } else {
        // q = (−b − √D) / 2
        let q = -0.5 * b - 0.5 * sqrt_d;
        Outcome::TwoRoots(c / q, q / a)
    }
}

/// Classifies and solves the linear equation `b·x + c = 0`.
///
/// The root formula follows [`Config::linear_form`].
#[must_use]
pub fn solve_linear(b: f64, c: f64, config: &Config) -> Outcome {
    if config.is_zero(b) {
        return if config.is_zero(c) {
            Outcome::InfiniteSolutions
        } else {
            Outcome::NoSolution
        };
    }

    match config.linear_form() {
        LinearForm::Corrected => Outcome::OneRoot(-c / b),
        LinearForm::Swapped => Outcome::OneRoot(-b / c),
    }
}

/// Solves `a·x² + b·x + c = 0` from raw values.
///
/// Callers are expected to have validated their input already.
///
/// # Panics
///
/// Panics if any coefficient is `NaN` or infinite.
#[must_use]
pub fn solve_raw(a: f64, b: f64, c: f64, config: &Config) -> Outcome {
    match Coefficients::new(a, b, c) {
        Ok(coefficients) => solve(&coefficients, config),
        Err(err) => panic!("contract violation: {err}"),
    }
}
