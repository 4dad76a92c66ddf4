//! Conversion engine.
//!
//! Pure temperature arithmetic, run only on validated requests.

pub mod convert;
