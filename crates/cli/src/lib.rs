//! Console front end for the `quadroots` solver.
//!
//! [`run`] drives one session: it checks the solver against its example
//! table, prompts for `a b c`, reads them, and prints the result. The binary
//! only parses arguments, installs logging, and maps errors to exit codes.

mod args;
mod error;
mod input;

pub mod format;

use std::io::{BufRead, Write};

use quadroots_core::{Config, Outcome, self_check, solve};
use tracing::info;

pub use args::{Args, LinearFormArg, OutputFormat};
pub use error::Error;
pub use input::{InputError, read_coefficients};

const BANNER: &str = "Quadratic equation solver";
const PROMPT: &str = "Give a b c to solve ax^2+bx+c=0";

/// Runs one solver session, reading from `input` and writing to `out`.
///
/// In text mode the self-check lines, banner, and prompt precede the result.
/// In JSON mode only the result object is written.
///
/// # Errors
///
/// Returns an error if the config is invalid, the input is invalid, or
/// writing the output fails.
pub fn run<R, W>(args: &Args, input: R, out: &mut W) -> Result<Outcome, Error>
where
    R: BufRead,
    W: Write,
{
    let config = args.config()?;
    let text = args.format == OutputFormat::Text;

    if !args.skip_self_check {
        check_solver(&config, text, out)?;
    }

    if text {
        writeln!(out, "{BANNER}").map_err(Error::Output)?;
        writeln!(out, "{PROMPT}").map_err(Error::Output)?;
        out.flush().map_err(Error::Output)?;
    }

    let coefficients = read_coefficients(input)?;
    let outcome = solve(&coefficients, &config);
    info!(?outcome, "solved");

    let line = match args.format {
        OutputFormat::Text => format::text(&outcome),
        OutputFormat::Json => format::json(&outcome)?,
    };
    writeln!(out, "{line}").map_err(Error::Output)?;

    Ok(outcome)
}

/// Runs the example table and reports each case when `print` is set.
///
/// A failing case is reported but does not stop the session.
fn check_solver<W: Write>(config: &Config, print: bool, out: &mut W) -> Result<(), Error> {
    let report = self_check::run(config);
    info!(passed = report.all_passed(), "self-check finished");

    if print {
        for result in &report.results {
            let status = if result.passed { "OK" } else { "ERROR" };
            writeln!(out, "Test number {} - {status}", result.number).map_err(Error::Output)?;
        }
    }
    Ok(())
}
