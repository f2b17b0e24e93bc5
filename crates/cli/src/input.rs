use std::{collections::VecDeque, io::BufRead};

use quadroots_core::{Coefficient, CoefficientError, Coefficients};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading coefficients.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing coefficient {name}")]
    Missing { name: Coefficient },

    #[error("coefficient {name} is not a number: {token:?}")]
    Parse { name: Coefficient, token: String },

    #[error(transparent)]
    NonFinite(#[from] CoefficientError),
}

/// Reads `a`, `b`, and `c` as whitespace-separated numbers.
///
/// Values may be spread across several lines. Reading stops after the third
/// value, and the first missing, malformed, or non-finite value aborts the read.
///
/// # Errors
///
/// Returns an error if the reader fails or any coefficient is invalid.
pub fn read_coefficients<R: BufRead>(reader: R) -> Result<Coefficients, InputError> {
    let mut tokens = Tokens::new(reader);

    let a = read_value(&mut tokens, Coefficient::A)?;
    let b = read_value(&mut tokens, Coefficient::B)?;
    let c = read_value(&mut tokens, Coefficient::C)?;

    Ok(Coefficients::new(a, b, c)?)
}

/// Reads one coefficient, rejecting it before the next token is consumed.
fn read_value<R: BufRead>(
    tokens: &mut Tokens<R>,
    name: Coefficient,
) -> Result<f64, InputError> {
    let token = tokens.next_token()?.ok_or(InputError::Missing { name })?;
    let Ok(value) = token.parse::<f64>() else {
        return Err(InputError::Parse { name, token });
    };
    if !value.is_finite() {
        return Err(CoefficientError { name, value }.into());
    }
    debug!(%name, value, "read coefficient");
    Ok(value)
}

/// Splits a reader into whitespace-separated tokens, one line at a time.
struct Tokens<R> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>, std::io::Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            let words = self.line.split_whitespace().map(str::to_owned);
            self.pending.extend(words);
        }
    }
}
