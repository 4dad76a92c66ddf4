//! tempconv CLI entry point
//!
//! Converts a temperature between Celsius, Fahrenheit and Kelvin:
//! `tempconv -c -f 20`.

use tempconv::cli::output::format_abort;
use tempconv::logging::{self, LogConfig};
use tempconv::version::get_build_info;
use tempconv::ConversionRequest;

use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init(&LogConfig::from_env());
    tracing::debug!(build = %get_build_info(), "starting");

    let request = match ConversionRequest::parse() {
        Ok(request) => request,
        Err(e) => {
            println!("{}", format_abort(&e));
            return ExitCode::from(1);
        }
    };

    println!("{}", request.execute());
    ExitCode::SUCCESS
}
