//! Real root classification for equations of the form `a·x² + b·x + c = 0`.
//!
//! This crate defines the types and the solver the console front end builds on:
//!
//! - [`Coefficients`] — a validated, finite `(a, b, c)` triple
//! - [`Config`] — the zero tolerance and the [`LinearForm`] to use
//! - [`Outcome`] — zero, one, two, or infinitely many real roots
//! - [`solve`] — classifies and solves an equation
//! - [`self_check`] — a fixed table of example equations the solver must reproduce
//!
//! # Example
//!
//! ```
//! use quadroots_core::{Coefficients, Config, Outcome, solve};
//!
//! let eq = Coefficients::new(1.0, 4.0, 4.0).unwrap();
//! assert_eq!(solve(&eq, &Config::default()), Outcome::OneRoot(-2.0));
//! ```

mod coefficients;
mod config;
mod outcome;
mod solve;

pub mod self_check;

#[cfg(test)]
mod proptests;

pub use coefficients::{Coefficient, CoefficientError, Coefficients};
pub use config::{Config, ConfigError, DEFAULT_TOLERANCE, LinearForm};
pub use outcome::Outcome;
pub use solve::{discriminant, solve, solve_linear, solve_raw};
