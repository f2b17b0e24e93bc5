use approx::{AbsDiffEq, RelativeEq};

/// The real solution set of an equation.
///
/// When two roots are present, the first uses `+√D` and the second `−√D`
/// in the quadratic formula.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "roots", rename_all = "snake_case")
)]
pub enum Outcome {
    /// No real value satisfies the equation.
    NoSolution,

    /// Every real value satisfies the equation.
    InfiniteSolutions,

    /// Exactly one real root, or a repeated root.
    OneRoot(f64),

    /// Two distinct real roots.
    TwoRoots(f64, f64),
}

impl Outcome {
    /// Returns the number of roots, or `None` if there are infinitely many.
    #[must_use]
    pub fn root_count(&self) -> Option<usize> {
        match self {
            Outcome::NoSolution => Some(0),
            Outcome::InfiniteSolutions => None,
            Outcome::OneRoot(_) => Some(1),
            Outcome::TwoRoots(..) => Some(2),
        }
    }

    /// Returns the listed roots in order.
    ///
    /// Empty for both [`Outcome::NoSolution`] and [`Outcome::InfiniteSolutions`].
    #[must_use]
    pub fn roots(&self) -> Vec<f64> {
        match *self {
            Outcome::NoSolution | Outcome::InfiniteSolutions => Vec::new(),
            Outcome::OneRoot(x) => vec![x],
            Outcome::TwoRoots(x1, x2) => vec![x1, x2],
        }
    }

    /// Returns true if at least one real value satisfies the equation.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        !matches!(self, Outcome::NoSolution)
    }
}

/// Outcomes are equal when they share a variant and their roots are equal
/// within `epsilon`.
impl AbsDiffEq for Outcome {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (Outcome::NoSolution, Outcome::NoSolution)
            | (Outcome::InfiniteSolutions, Outcome::InfiniteSolutions) => true,
            (Outcome::OneRoot(x), Outcome::OneRoot(y)) => x.abs_diff_eq(y, epsilon),
            (Outcome::TwoRoots(x1, x2), Outcome::TwoRoots(y1, y2)) => {
                x1.abs_diff_eq(y1, epsilon) && x2.abs_diff_eq(y2, epsilon)
            }
            _ => false,
        }
    }
}

impl RelativeEq for Outcome {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        match (self, other) {
            (Outcome::NoSolution, Outcome::NoSolution)
            | (Outcome::InfiniteSolutions, Outcome::InfiniteSolutions) => true,
            (Outcome::OneRoot(x), Outcome::OneRoot(y)) => x.relative_eq(y, epsilon, max_relative),
            (Outcome::TwoRoots(x1, x2), Outcome::TwoRoots(y1, y2)) => {
                x1.relative_eq(y1, epsilon, max_relative)
                    && x2.relative_eq(y2, epsilon, max_relative)
            }
            _ => false,
        }
    }
}
