use std::fmt;

use thiserror::Error;

/// Names one of the three coefficients of `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    A,
    B,
    C,
}

impl Coefficient {
    /// All coefficients in the order they are read.
    pub const ALL: [Coefficient; 3] = [Coefficient::A, Coefficient::B, Coefficient::C];
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Coefficient::A => "a",
            Coefficient::B => "b",
            Coefficient::C => "c",
        };
        f.write_str(name)
    }
}

/// Error returned when a coefficient is not a finite number.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("coefficient {name} must be finite, got {value}")]
pub struct CoefficientError {
    pub name: Coefficient,
    pub value: f64,
}

/// The coefficients of `a·x² + b·x + c = 0`.
///
/// All three values are guaranteed finite, so solving never has to
/// deal with `NaN` or infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    /// Creates a coefficient triple.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first coefficient that is `NaN` or infinite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, CoefficientError> {
        for (name, value) in Coefficient::ALL.into_iter().zip([a, b, c]) {
            if !value.is_finite() {
                return Err(CoefficientError { name, value });
            }
        }
        Ok(Self { a, b, c })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the discriminant `b² − 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        crate::discriminant(self.a, self.b, self.c)
    }

    /// Evaluates `a·x² + b·x + c` at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

impl TryFrom<[f64; 3]> for Coefficients {
    type Error = CoefficientError;

    fn try_from([a, b, c]: [f64; 3]) -> Result<Self, Self::Error> {
        Self::new(a, b, c)
    }
}
