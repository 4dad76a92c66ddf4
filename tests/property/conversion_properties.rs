use proptest::prelude::*;
use tempconv::engine::convert::{from_celsius, to_celsius};
use tempconv::{convert, validate, Scale, UsageError};

fn scale() -> impl Strategy<Value = Scale> {
    prop_oneof![
        Just(Scale::Celsius),
        Just(Scale::Fahrenheit),
        Just(Scale::Kelvin),
    ]
}

fn distinct_scales() -> impl Strategy<Value = (Scale, Scale)> {
    (scale(), scale()).prop_filter("scales must differ", |(a, b)| a != b)
}

proptest! {
    #[test]
    fn round_trip_returns_original(
        (a, b) in distinct_scales(),
        v in -1.0e6f64..1.0e6,
    ) {
        let back = convert(b, a, convert(a, b, v));
        let tolerance = 1e-9 * v.abs().max(1.0);
        prop_assert!(
            (back - v).abs() <= tolerance,
            "{} -> {} -> {}: {} came back as {}",
            a, b, a, v, back
        );
    }

    #[test]
    fn fahrenheit_kelvin_pivots_through_celsius(v in -1.0e6f64..1.0e6) {
        prop_assert_eq!(
            convert(Scale::Fahrenheit, Scale::Kelvin, v),
            convert(Scale::Celsius, Scale::Kelvin, convert(Scale::Fahrenheit, Scale::Celsius, v))
        );
        prop_assert_eq!(
            convert(Scale::Kelvin, Scale::Fahrenheit, v),
            convert(Scale::Celsius, Scale::Fahrenheit, convert(Scale::Kelvin, Scale::Celsius, v))
        );
    }

    #[test]
    fn every_conversion_is_celsius_composition(
        (a, b) in distinct_scales(),
        v in -1.0e6f64..1.0e6,
    ) {
        prop_assert_eq!(convert(a, b, v), from_celsius(b, to_celsius(a, v)));
    }

    #[test]
    fn validated_value_matches_input(
        (a, b) in distinct_scales(),
        v in -1.0e6f64..1.0e6,
    ) {
        let args = vec![a.flag().to_uppercase(), b.flag().to_string(), v.to_string()];
        let request = validate(&args).unwrap();
        prop_assert_eq!(request.source, a);
        prop_assert_eq!(request.target, b);
        prop_assert_eq!(request.value, v);
    }

    #[test]
    fn wrong_arity_is_rejected(n in 1usize..10) {
        prop_assume!(n != 3);
        let args = vec!["-c".to_string(); n];
        prop_assert_eq!(validate(&args), Err(UsageError::Arity { supplied: n }));
    }
}
