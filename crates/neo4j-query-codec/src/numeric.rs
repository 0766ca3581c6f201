use neo4j_query_types::{Error, IntegerPolicy, IntegerValue, Result};

/// Parses an `Integer` payload: always a decimal string on the wire, so
/// that 64-bit range survives JSON's double-precision number type.
pub fn parse_integer(text: &str, policy: IntegerPolicy) -> Result<IntegerValue> {
    IntegerValue::from_decimal(text, policy)
        .map_err(|e| Error::protocol(format!("invalid Integer payload {text:?}: {e}")))
}

/// Parses a `Float` payload: a decimal string, possibly exponent form,
/// possibly `NaN`/`Infinity`/`-Infinity`.
pub fn parse_float(text: &str) -> Result<f64> {
    match text {
        "NaN" => Ok(f64::NAN),
        "Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        _ => text
            .parse::<f64>()
            .map_err(|e| Error::protocol(format!("invalid Float payload {text:?}: {e}"))),
    }
}

/// Inverse of [`parse_float`]: canonical textual form for the `Float` tag.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        let mut s = format!("{value}");
        if !s.contains('.') && !s.contains('e') && !s.contains('E') {
            s.push_str(".0");
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lossless_integer() {
        let v = parse_integer("42", IntegerPolicy::LosslessInteger).unwrap();
        assert_eq!(v, IntegerValue::Lossless(42));
    }

    #[test]
    fn rejects_non_decimal_integer() {
        assert!(parse_integer("4.2", IntegerPolicy::LosslessInteger).is_err());
    }

    #[test]
    fn parses_float_exponent_form() {
        assert_eq!(parse_float("1.5e3").unwrap(), 1500.0);
    }

    #[test]
    fn parses_special_float_values() {
        assert!(parse_float("NaN").unwrap().is_nan());
        assert_eq!(parse_float("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_float("-Infinity").unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn format_float_round_trips_whole_numbers_with_dot() {
        assert_eq!(format_float(42.0), "42.0");
    }
}
