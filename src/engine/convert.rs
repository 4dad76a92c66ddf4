//! Temperature conversion arithmetic.
//!
//! Every conversion pivots through Celsius: the source value is first
//! expressed in Celsius, then in the target scale. For the four pairs that
//! involve Celsius one leg is the identity, so the composed formulas are
//! exactly the direct ones:
//!
//! ```text
//! From          To Fahrenheit           To Celsius        To Kelvin
//! Fahrenheit    F                       (F-32)*(5/9)      (F-32)*(5/9)+273.15
//! Celsius       (C*(9/5))+32            C                 C+273.15
//! Kelvin        (K-273.15)*(9/5)+32     K-273.15          K
//! ```

use crate::Scale;

/// Offset between Kelvin and Celsius.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Offset between Fahrenheit and Celsius zero points.
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

const CELSIUS_TO_FAHRENHEIT: f64 = 9.0 / 5.0;
const FAHRENHEIT_TO_CELSIUS: f64 = 5.0 / 9.0;

/// Express a value given in `scale` in Celsius.
pub fn to_celsius(scale: Scale, value: f64) -> f64 {
    match scale {
        Scale::Celsius => value,
        Scale::Fahrenheit => (value - FAHRENHEIT_OFFSET) * FAHRENHEIT_TO_CELSIUS,
        Scale::Kelvin => value - KELVIN_OFFSET,
    }
}

/// Express a Celsius value in `scale`.
pub fn from_celsius(scale: Scale, celsius: f64) -> f64 {
    match scale {
        Scale::Celsius => celsius,
        Scale::Fahrenheit => celsius * CELSIUS_TO_FAHRENHEIT + FAHRENHEIT_OFFSET,
        Scale::Kelvin => celsius + KELVIN_OFFSET,
    }
}

/// Convert `value` from `source` to `target`.
///
/// Validated requests never have `source == target`; if it happens anyway
/// the value is returned untouched rather than pushed through the pivot.
pub fn convert(source: Scale, target: Scale, value: f64) -> f64 {
    if source == target {
        return value;
    }

    let converted = from_celsius(target, to_celsius(source, value));
    tracing::trace!(%source, %target, value, converted, "converted temperature");
    converted
}
