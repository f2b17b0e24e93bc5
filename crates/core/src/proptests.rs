//! Property-based tests for root classification.

use proptest::prelude::*;

use crate::{Coefficients, Config, Outcome, solve};

// Strategy for magnitudes well clear of the default tolerance
fn magnitude() -> impl Strategy<Value = f64> {
    0.1f64..100.0
}

// Strategy for values that are clearly non-zero, of either sign
fn nonzero() -> impl Strategy<Value = f64> {
    (magnitude(), any::<bool>()).prop_map(|(m, negative)| if negative { -m } else { m })
}

// Strategy for values the default config treats as zero
fn tiny() -> impl Strategy<Value = f64> {
    -0.9e-8f64..0.9e-8
}

fn eq(a: f64, b: f64, c: f64) -> Coefficients {
    Coefficients::new(a, b, c).expect("strategies produce finite values")
}

/// Residual tolerance scaled to the size of the terms being summed.
fn residual_tol(eq: &Coefficients, x: f64) -> f64 {
    1e-9 * (eq.a().abs() * x * x + eq.b().abs() * x.abs() + eq.c().abs() + 1.0)
}

proptest! {
    #[test]
    fn two_roots_satisfy_equation(a in nonzero(), b in -100.0f64..100.0, c in -100.0f64..100.0) {
        let config = Config::default();
        let eq = eq(a, b, c);
        prop_assume!(eq.discriminant() > config.tolerance());

        let Outcome::TwoRoots(x1, x2) = solve(&eq, &config) else {
            return Err(TestCaseError::fail("expected two roots"));
        };
        prop_assert!(x1 != x2);
        prop_assert!(eq.evaluate(x1).abs() <= residual_tol(&eq, x1));
        prop_assert!(eq.evaluate(x2).abs() <= residual_tol(&eq, x2));
    }

    #[test]
    fn repeated_root_is_vertex(a in nonzero(), r in -10.0f64..10.0) {
        // (x - r)² scaled by a has a zero discriminant up to rounding.
        let eq = eq(a, -2.0 * a * r, a * r * r);
        let config = Config::default();
        prop_assume!(config.is_zero(eq.discriminant()));

        prop_assert_eq!(solve(&eq, &config), Outcome::OneRoot(-eq.b() / a / 2.0));
    }

    #[test]
    fn negative_discriminant_has_no_roots(
        a in magnitude(),
        c in magnitude(),
        k in -0.9f64..0.9,
        flip in any::<bool>(),
    ) {
        let sign = if flip { -1.0 } else { 1.0 };
        let b = k * 2.0 * (a * c).sqrt();
        let eq = eq(sign * a, b, sign * c);

        prop_assert_eq!(solve(&eq, &Config::default()), Outcome::NoSolution);
    }

    #[test]
    fn large_coefficients_give_finite_roots(
        a in nonzero(),
        b in nonzero(),
        c in nonzero(),
        exponent in 150i32..300,
    ) {
        // Scaling every coefficient by the same power of ten keeps the roots
        // but pushes b² - 4ac past f64::MAX.
        let scale = 10f64.powi(exponent);
        let small_eq = eq(a, b, c);
        let small = solve(&small_eq, &Config::default());
        let large = solve(&eq(a * scale, b * scale, c * scale), &Config::default());

        prop_assert!(large.roots().iter().all(|x| x.is_finite()));
        // Well away from a double root, so rounding in the scaling stays small.
        if small_eq.discriminant() > 1.0 {
            prop_assert_eq!(large.root_count(), Some(2));
            for (x, y) in small.roots().into_iter().zip(large.roots()) {
                prop_assert!((x - y).abs() <= 1e-9 * x.abs().max(1.0));
            }
        }
    }

    #[test]
    fn linear_root_is_minus_c_over_b(a in tiny(), b in nonzero(), c in -100.0f64..100.0) {
        prop_assert_eq!(solve(&eq(a, b, c), &Config::default()), Outcome::OneRoot(-c / b));
    }

    #[test]
    fn all_zero_is_infinite(a in tiny(), b in tiny(), c in tiny()) {
        prop_assert_eq!(solve(&eq(a, b, c), &Config::default()), Outcome::InfiniteSolutions);
    }

    #[test]
    fn nonzero_constant_is_unsolvable(a in tiny(), b in tiny(), c in nonzero()) {
        prop_assert_eq!(solve(&eq(a, b, c), &Config::default()), Outcome::NoSolution);
    }
}
