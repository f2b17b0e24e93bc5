use thiserror::Error;

/// Tolerance used when no other value is configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Selects how the root of the linear equation `b·x + c = 0` is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinearForm {
    /// The root `−c / b`.
    #[default]
    Corrected,

    /// The root `−b / c`, with numerator and denominator swapped.
    ///
    /// Reproduces results recorded by earlier releases of the solver.
    /// A zero `c` yields a non-finite root.
    Swapped,
}

/// Configuration for the root classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    linear_form: LinearForm,
}

/// Errors that can occur when validating a classifier config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and strictly positive, got {0}")]
    Tolerance(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            linear_form: LinearForm::default(),
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite, zero, or negative.
    pub fn new(tolerance: f64, linear_form: LinearForm) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance(tolerance));
        }
        Ok(Self {
            tolerance,
            linear_form,
        })
    }

    /// Returns a copy of this config using a different tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite, zero, or negative.
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(tolerance, self.linear_form)
    }

    /// Returns a copy of this config using a different linear form.
    #[must_use]
    pub fn with_linear_form(self, linear_form: LinearForm) -> Self {
        Self {
            linear_form,
            ..self
        }
    }

    /// Returns the zero tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the linear root form.
    #[must_use]
    pub fn linear_form(&self) -> LinearForm {
        self.linear_form
    }

    /// Returns true if `value` lies strictly within the tolerance of zero.
    #[must_use]
    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() < self.tolerance
    }
}
