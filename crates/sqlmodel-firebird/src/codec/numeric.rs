//! Client-side numeric conversion.
//!
//! Only used when the driver cannot convert decimals itself, and for the
//! NUMERIC(18, 9) storage behind intervals.

#![allow(clippy::result_large_err)]

use rust_decimal::{Decimal, RoundingStrategy};
use sqlmodel_core::{ConversionError, ConversionErrorKind, Error, Result, TypeError, Value};

use crate::types::NumericSpec;

/// Exact conversion to a declared `(precision, scale)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericCodec {
    pub precision: Option<u8>,
    pub scale: Option<u8>,
    pub return_scale: Option<u8>,
    pub type_name: &'static str,
}

impl NumericCodec {
    pub fn new(spec: &NumericSpec, type_name: &'static str) -> Self {
        Self {
            precision: spec.precision,
            scale: spec.scale,
            return_scale: spec.return_scale(),
            type_name,
        }
    }

    /// Round to the declared scale and reject values needing more digits
    /// than the declared precision.
    ///
    /// An unspecified scale is not treated as zero: `NUMERIC(p)` keeps the
    /// fractional digits of its input and only the significant digit count
    /// is checked.
    pub fn encode(&self, value: Value) -> Result<Value> {
        let mut d = to_decimal(&value, self.type_name)?;
        if let Some(scale) = self.scale {
            d = d.round_dp_with_strategy(u32::from(scale), RoundingStrategy::MidpointAwayFromZero);
        }
        if let Some(precision) = self.precision {
            let needed = required_digits(&d, self.scale);
            if needed > u32::from(precision) {
                return Err(Error::Conversion(ConversionError::new(
                    ConversionErrorKind::PrecisionOverflow,
                    self.type_name,
                    format!(
                        "value {} needs {} digits, precision is {}",
                        d, needed, precision
                    ),
                )));
            }
        }
        if let Some(scale) = self.scale {
            d.rescale(u32::from(scale));
        }
        Ok(Value::Decimal(d))
    }

    /// Always yields an exact decimal. Exact inputs are returned as they
    /// are; binary floats are rounded to the return scale if one is set.
    pub fn decode(&self, value: Value) -> Result<Value> {
        let from_float = matches!(value, Value::Float(_) | Value::Double(_));
        let mut d = to_decimal(&value, self.type_name)?;
        if let (true, Some(scale)) = (from_float, self.return_scale) {
            d = d.round_dp_with_strategy(u32::from(scale), RoundingStrategy::MidpointAwayFromZero);
            d.rescale(u32::from(scale));
        }
        Ok(Value::Decimal(d))
    }
}

/// Conversion to binary floating point. Never produces a decimal.
pub fn to_float(value: Value) -> Result<Value> {
    match value {
        Value::Float(_) | Value::Double(_) => Ok(value),
        Value::Text(ref s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| shape_error("floating point number", &value)),
        other => other
            .as_f64()
            .map(Value::Double)
            .ok_or_else(|| shape_error("approximate numeric", &other)),
    }
}

fn to_decimal(value: &Value, type_name: &'static str) -> Result<Decimal> {
    match value {
        Value::Decimal(d) => Ok(*d),
        Value::SmallInt(v) => Ok(Decimal::from(*v)),
        Value::Int(v) => Ok(Decimal::from(*v)),
        Value::BigInt(v) => Ok(Decimal::from(*v)),
        Value::Int128(v) => Decimal::try_from_i128_with_scale(*v, 0)
            .map_err(|e| out_of_range(type_name, format!("{} does not fit: {}", v, e))),
        Value::Double(v) => Decimal::try_from(*v)
            .map_err(|e| out_of_range(type_name, format!("{} is not representable: {}", v, e))),
        Value::Float(v) => Decimal::try_from(*v)
            .map_err(|e| out_of_range(type_name, format!("{} is not representable: {}", v, e))),
        Value::Text(s) => {
            let s = s.trim();
            Decimal::from_str_exact(s)
                .or_else(|_| Decimal::from_scientific(s))
                .map_err(|_| shape_error("decimal string", value))
        }
        other => Err(shape_error("exact numeric", other)),
    }
}

/// Digits needed to store `d`: integer digits plus the declared scale, or
/// the significant digits when no scale is declared.
fn required_digits(d: &Decimal, scale: Option<u8>) -> u32 {
    match scale {
        Some(s) => {
            let int_part = d.trunc().mantissa().unsigned_abs();
            let int_digits = if int_part == 0 { 0 } else { digit_count(int_part) };
            int_digits + u32::from(s)
        }
        None => digit_count(d.normalize().mantissa().unsigned_abs()),
    }
}

fn digit_count(mut n: u128) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

pub(crate) fn shape_error(expected: &'static str, value: &Value) -> Error {
    Error::Type(TypeError {
        expected,
        actual: value.type_name().to_string(),
        column: None,
        rust_type: None,
    })
}

pub(crate) fn out_of_range(type_name: &'static str, message: String) -> Error {
    Error::Conversion(ConversionError::new(
        ConversionErrorKind::OutOfRange,
        type_name,
        message,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn codec(precision: u8, scale: u8) -> NumericCodec {
        NumericCodec::new(
            &NumericSpec {
                precision: Some(precision),
                scale: Some(scale),
                decimal_return_scale: None,
            },
            "NUMERIC",
        )
    }

    #[test]
    fn test_encode_rounds_and_pads_to_scale() {
        let c = codec(10, 2);
        assert_eq!(
            c.encode(Value::Decimal(dec("1.005"))).unwrap(),
            Value::Decimal(dec("1.01"))
        );
        let Value::Decimal(d) = c.encode(Value::Int(3)).unwrap() else {
            panic!("expected decimal");
        };
        assert_eq!(d.to_string(), "3.00");
        assert_eq!(
            c.encode(Value::Text(" -2.5 ".into())).unwrap(),
            Value::Decimal(dec("-2.50"))
        );
    }

    #[test]
    fn test_encode_overflow_is_an_error() {
        let c = codec(4, 2);
        assert!(c.encode(Value::Decimal(dec("99.99"))).is_ok());
        let err = c.encode(Value::Decimal(dec("100.00"))).unwrap_err();
        assert!(err.is_precision_overflow());
        // Rounding can push a value over the limit
        let err = c.encode(Value::Decimal(dec("99.995"))).unwrap_err();
        assert!(err.is_precision_overflow());
    }

    #[test]
    fn test_precision_without_scale_counts_significant_digits() {
        let c = NumericCodec::new(
            &NumericSpec {
                precision: Some(16),
                scale: None,
                decimal_return_scale: None,
            },
            "DECFLOAT",
        );
        assert!(c.encode(Value::Decimal(dec("1234567890.123456"))).is_ok());
        assert!(c.encode(Value::Decimal(dec("12345678901.123456"))).is_err());
    }

    #[test]
    fn test_decode_is_exact() {
        let c = codec(18, 4);
        let Value::Decimal(d) = c.decode(Value::Text("0.1".into())).unwrap() else {
            panic!("expected decimal");
        };
        assert_eq!(d.to_string(), "0.1");
        let Value::Decimal(d) = c.decode(Value::Double(0.25)).unwrap() else {
            panic!("expected decimal");
        };
        assert_eq!(d.to_string(), "0.2500");
        assert_eq!(
            c.decode(Value::BigInt(5)).unwrap(),
            Value::Decimal(dec("5"))
        );
        let err = c.decode(Value::Bytes(vec![1])).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
    }

    #[test]
    fn test_return_scale_only_rounds_floats() {
        let c = NumericCodec::new(
            &NumericSpec {
                precision: Some(10),
                scale: Some(4),
                decimal_return_scale: Some(1),
            },
            "NUMERIC",
        );
        let stored = c.encode(Value::Decimal(dec("12.3456"))).unwrap();
        assert_eq!(stored, Value::Decimal(dec("12.3456")));
        assert_eq!(c.decode(stored.clone()).unwrap(), stored);
        assert_eq!(
            c.decode(Value::BigInt(12)).unwrap(),
            Value::Decimal(dec("12"))
        );
        let Value::Decimal(d) = c.decode(Value::Double(12.3456)).unwrap() else {
            panic!("expected decimal");
        };
        assert_eq!(d.to_string(), "12.3");
    }

    #[test]
    fn test_unspecified_scale_keeps_fraction() {
        let c = NumericCodec::new(
            &NumericSpec {
                precision: Some(5),
                scale: None,
                decimal_return_scale: None,
            },
            "NUMERIC",
        );
        assert_eq!(
            c.encode(Value::Decimal(dec("12.5"))).unwrap(),
            Value::Decimal(dec("12.5"))
        );
    }

    #[test]
    fn test_to_float_never_yields_decimal() {
        assert_eq!(
            to_float(Value::Decimal(dec("1.5"))).unwrap(),
            Value::Double(1.5)
        );
        assert_eq!(to_float(Value::Float(2.0)).unwrap(), Value::Float(2.0));
        assert_eq!(to_float(Value::Int(7)).unwrap(), Value::Double(7.0));
        assert!(to_float(Value::Bool(true)).is_err());
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(10_u128.pow(19)), 20);
    }
}
