//! tempconv library
//!
//! Command line temperature conversion between Celsius, Fahrenheit and Kelvin.
//!
//! The crate is split into two stages that run in sequence:
//! - Argument validation (`cli::args`), a strict gate producing a
//!   [`ConversionRequest`] or a [`UsageError`]
//! - Conversion arithmetic (`engine::convert`), which cannot fail
//!
//! # Example
//!
//! ```
//! use tempconv::run;
//!
//! let args = vec!["-c".to_string(), "-f".to_string(), "100".to_string()];
//! let result = run(&args).expect("valid arguments");
//! assert_eq!(result.to_string(), "100.0 Celsius = 212.0 Fahrenheit");
//! ```

pub mod cli;
pub mod engine;
pub mod logging;
pub mod version;

use std::fmt;
use thiserror::Error;

pub use cli::args::{validate, ConversionRequest};
pub use engine::convert::convert;

/// A supported temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    /// Every supported scale, in flag order.
    pub const ALL: [Scale; 3] = [Scale::Celsius, Scale::Fahrenheit, Scale::Kelvin];

    /// Look up a scale by its lowercase command line flag (`-c`, `-f`, `-k`).
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-c" => Some(Scale::Celsius),
            "-f" => Some(Scale::Fahrenheit),
            "-k" => Some(Scale::Kelvin),
            _ => None,
        }
    }

    /// The command line flag selecting this scale.
    pub fn flag(&self) -> &'static str {
        match self {
            Scale::Celsius => "-c",
            Scale::Fahrenheit => "-f",
            Scale::Kelvin => "-k",
        }
    }

    /// Full English name, as shown in the result line.
    pub fn name(&self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
            Scale::Kelvin => "Kelvin",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single conversion, kept only for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub source: Scale,
    pub target: Scale,
    pub input_value: f64,
    pub output_value: f64,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            cli::output::format_number(self.input_value),
            self.source,
            cli::output::format_number(self.output_value),
            self.target
        )
    }
}

/// Errors raised while validating command line arguments.
///
/// Every variant is a user input error. The two structural failures
/// (`TypeShape`, `UnknownScaleFlag`) share one message but stay distinct kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// No arguments at all
    #[error("No arguments supplied")]
    NoArguments,

    /// Wrong number of arguments (anything other than three)
    #[error("{}", arity_message(.supplied))]
    Arity { supplied: usize },

    /// Arguments are not (flag, flag, number) by shape
    #[error("Invalid Set of Arguments")]
    TypeShape,

    /// A flag position holds something other than `-c`, `-f` or `-k`
    #[error("Invalid Set of Arguments")]
    UnknownScaleFlag { flag: String },

    /// Source and target flags are the same
    #[error("No point in converting to the same scale")]
    IdenticalScale,
}

fn arity_message(supplied: &usize) -> &'static str {
    if *supplied < 3 {
        "Too few arguments supplied."
    } else {
        "Too many arguments supplied."
    }
}

/// Validate raw arguments and run the conversion.
///
/// This is the main entry point: `args` excludes the program name.
pub fn run(args: &[String]) -> Result<ConversionResult, UsageError> {
    let request = validate(args)?;
    Ok(request.execute())
}
