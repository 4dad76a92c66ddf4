//! Argument validation for tempconv.
//!
//! The command line is strictly positional: `<from-flag> <to-flag> <value>`.
//! Validation runs as a pipeline of stages, each taking the previous
//! stage's output by value and returning a new one:
//!
//! 1. arity: exactly three arguments
//! 2. case folding: flags are case-insensitive
//! 3. shape: two non-numbers followed by a number
//! 4. flags: the two non-numbers are distinct known scale flags
//!
//! Any failing stage ends validation with a [`UsageError`].

use std::env;

use crate::engine::convert::convert;
use crate::{ConversionResult, Scale, UsageError};

/// A validated conversion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub source: Scale,
    pub target: Scale,
    pub value: f64,
}

impl ConversionRequest {
    /// Validate the process arguments (excluding the program name)
    pub fn parse() -> Result<Self, UsageError> {
        let args: Vec<String> = env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        Self::parse_from(&args)
    }

    /// Validate arguments from a slice (for testing)
    pub fn parse_from(args: &[String]) -> Result<Self, UsageError> {
        validate(args)
    }

    /// Run the conversion described by this request.
    pub fn execute(&self) -> ConversionResult {
        ConversionResult {
            source: self.source,
            target: self.target,
            input_value: self.value,
            output_value: convert(self.source, self.target, self.value),
        }
    }
}

/// Arguments that passed the shape check but whose flags are not yet known
/// to be legal.
#[derive(Debug, Clone, PartialEq)]
struct ShapedArgs {
    from: String,
    to: String,
    value: f64,
}

/// Validate raw command line arguments into a [`ConversionRequest`].
pub fn validate(args: &[String]) -> Result<ConversionRequest, UsageError> {
    let args = check_arity(args)?;
    let args = fold_case(args);
    let shaped = check_shape(args)?;
    let request = check_flags(shaped)?;

    tracing::debug!(
        source = %request.source,
        target = %request.target,
        value = request.value,
        "arguments validated"
    );
    Ok(request)
}

fn check_arity(args: &[String]) -> Result<[&str; 3], UsageError> {
    match args {
        [] => {
            tracing::debug!("rejected: no arguments");
            Err(UsageError::NoArguments)
        }
        [from, to, value] => Ok([from.as_str(), to.as_str(), value.as_str()]),
        _ => {
            tracing::debug!(supplied = args.len(), "rejected: wrong argument count");
            Err(UsageError::Arity {
                supplied: args.len(),
            })
        }
    }
}

/// ASCII-only folding: `-K` becomes `-k`, the Kelvin sign (U+212A) stays as is.
fn fold_case(args: [&str; 3]) -> [String; 3] {
    args.map(str::to_ascii_lowercase)
}

fn check_shape(args: [String; 3]) -> Result<ShapedArgs, UsageError> {
    match (
        parse_number(&args[0]),
        parse_number(&args[1]),
        parse_number(&args[2]),
    ) {
        (None, None, Some(value)) => {
            let [from, to, _] = args;
            Ok(ShapedArgs { from, to, value })
        }
        _ => {
            tracing::debug!(?args, "rejected: arguments are not <flag> <flag> <number>");
            Err(UsageError::TypeShape)
        }
    }
}

fn check_flags(args: ShapedArgs) -> Result<ConversionRequest, UsageError> {
    if args.from == args.to {
        tracing::debug!(flag = %args.from, "rejected: same scale on both sides");
        return Err(UsageError::IdenticalScale);
    }

    let source = lookup_flag(&args.from)?;
    let target = lookup_flag(&args.to)?;

    Ok(ConversionRequest {
        source,
        target,
        value: args.value,
    })
}

fn lookup_flag(flag: &str) -> Result<Scale, UsageError> {
    Scale::from_flag(flag).ok_or_else(|| {
        tracing::debug!(flag, "rejected: unknown scale flag");
        UsageError::UnknownScaleFlag {
            flag: flag.to_string(),
        }
    })
}

/// Parse a number the way the command line accepts it.
///
/// Surrounding ASCII whitespace is ignored; signs, exponents, `inf`,
/// `infinity` and `nan` are accepted.
pub fn parse_number(arg: &str) -> Option<f64> {
    arg.trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<f64>()
        .ok()
}
