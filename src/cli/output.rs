//! Output formatting for tempconv.
//!
//! Renders numbers, the usage banner, and the text printed when validation
//! aborts. Numbers use twelve significant digits with trailing zeros
//! removed, so `-459.66999999999996` prints as `-459.67` and whole numbers
//! keep a `.0` suffix.

use crate::version::get_build_info;
use crate::{Scale, UsageError};

/// Significant digits kept when rendering a number
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Printed after the usage banner and error message on abort
pub const TERMINATION_NOTICE: &str = "Application Terminating";

/// Render a number for display.
///
/// Magnitudes below `1e-4` or at least `1e12` switch to exponent form
/// (`1e+16`, `1.5e-07`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Round to the significant digits first; the exponent of the rounded
    // value picks the notation.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let precision = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        let fixed = format!("{:.*}", precision, value);
        let trimmed = trim_fraction(&fixed);
        if trimmed.contains('.') {
            trimmed.to_string()
        } else {
            format!("{}.0", trimmed)
        }
    }
}

/// Strip trailing zeros (and a dangling point) from a decimal fraction.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Usage banner shown when validation fails.
///
/// Opens with a blank line and names the running version in its header.
pub fn usage() -> String {
    let header = format!("tempconv {} - Temperature Converter", get_build_info().version);
    let mut banner = String::from("\n");

    banner.push_str(&header);
    banner.push('\n');
    banner.push_str(&"-".repeat(header.len()));
    banner.push('\n');
    banner.push_str("USAGE: tempconv [from units] [to units] [value]\n\n");
    banner.push_str("Units:\n");
    banner.push_str("------\n");
    for scale in Scale::ALL {
        banner.push_str(&format!(
            "{} or {} = {}\n",
            scale.flag(),
            scale.flag().to_uppercase(),
            scale
        ));
    }
    banner.push_str("\nExample:\n");
    banner.push_str("--------\n");
    banner.push_str("To convert 20 Celsius to Fahrenheit\n");
    banner.push_str("tempconv -c -f 20\n");

    banner
}

/// Full text printed when validation aborts: banner, reason, notice.
pub fn format_abort(error: &UsageError) -> String {
    format!("{}\n{}\n{}", usage(), error, TERMINATION_NOTICE)
}
