//! Conversion integration tests.
//!
//! Checks the rendered result line for the documented scenarios.

use tempconv::{run, ConversionResult, Scale};

fn convert_line(values: &[&str]) -> String {
    let args: Vec<String> = values.iter().map(|s| s.to_string()).collect();
    run(&args).unwrap().to_string()
}

#[test]
fn test_celsius_to_fahrenheit_line() {
    assert_eq!(convert_line(&["-c", "-f", "0"]), "0.0 Celsius = 32.0 Fahrenheit");
}

#[test]
fn test_fahrenheit_to_celsius_line() {
    assert_eq!(
        convert_line(&["-f", "-c", "212"]),
        "212.0 Fahrenheit = 100.0 Celsius"
    );
}

#[test]
fn test_celsius_to_kelvin_line() {
    assert_eq!(convert_line(&["-c", "-k", "0"]), "0.0 Celsius = 273.15 Kelvin");
}

#[test]
fn test_kelvin_to_fahrenheit_line() {
    assert_eq!(
        convert_line(&["-k", "-f", "0"]),
        "0.0 Kelvin = -459.67 Fahrenheit"
    );
}

#[test]
fn test_fahrenheit_to_kelvin_line() {
    assert_eq!(
        convert_line(&["-f", "-k", "32"]),
        "32.0 Fahrenheit = 273.15 Kelvin"
    );
}

#[test]
fn test_kelvin_to_celsius_line() {
    assert_eq!(
        convert_line(&["-K", "-C", "373.15"]),
        "373.15 Kelvin = 100.0 Celsius"
    );
}

#[test]
fn test_result_fields() {
    let args: Vec<String> = ["-c", "-f", "-40"].iter().map(|s| s.to_string()).collect();
    let result = run(&args).unwrap();
    assert_eq!(
        result,
        ConversionResult {
            source: Scale::Celsius,
            target: Scale::Fahrenheit,
            input_value: -40.0,
            output_value: -40.0,
        }
    );
}
