use clap::{Parser, ValueEnum};
use quadroots_core::{Config, ConfigError, DEFAULT_TOLERANCE, LinearForm};
use tracing::Level;

/// Solve a·x² + b·x + c = 0 for its real roots.
///
/// Reads `a b c` from standard input after checking the solver against
/// its built-in example table.
#[derive(Parser, Debug, Clone)]
#[command(name = "quadroots", version)]
pub struct Args {
    /// Values with magnitude below this are treated as zero
    #[arg(long, value_name = "EPS", default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Formula used for the root of a linear equation
    #[arg(long, value_enum, default_value_t = LinearFormArg::Corrected)]
    pub linear_form: LinearFormArg,

    /// Do not run the example table before reading input
    #[arg(long)]
    pub skip_self_check: bool,

    /// Output format for the result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            linear_form: LinearFormArg::Corrected,
            skip_self_check: false,
            format: OutputFormat::Text,
            verbose: 0,
        }
    }
}

impl Args {
    /// Builds the solver config described by these arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and strictly positive.
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.tolerance, self.linear_form.into())
    }

    /// Returns the maximum log level selected by `-v` flags.
    #[must_use]
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearFormArg {
    /// x = -c / b
    Corrected,
    /// x = -b / c, matching results from earlier releases
    Swapped,
}

impl From<LinearFormArg> for LinearForm {
    fn from(arg: LinearFormArg) -> Self {
        match arg {
            LinearFormArg::Corrected => LinearForm::Corrected,
            LinearFormArg::Swapped => LinearForm::Swapped,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable result line
    Text,
    /// A single JSON object
    Json,
}
