//! Parameters of the approximate and exact numeric families.

#![allow(clippy::result_large_err)]

use sqlmodel_core::{ConfigError, ConfigErrorKind, Error, Result};

/// Largest precision Firebird accepts for NUMERIC/DECIMAL.
pub const MAX_NUMERIC_PRECISION: u8 = 38;

/// Precision and scale of the NUMERIC(18, 9) column backing an interval.
pub const INTERVAL_PRECISION: u8 = 18;
pub const INTERVAL_SCALE: u8 = 9;

/// FLOAT, DOUBLE PRECISION and REAL. These have no scale dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatSpec {
    /// Binary precision in bits, as in `FLOAT(p)`
    pub precision: Option<u8>,
}

impl FloatSpec {
    /// Single precision unless more than 24 bits were asked for.
    pub fn is_single(&self) -> bool {
        self.precision.is_none_or(|p| p <= 24)
    }
}

/// DECIMAL, NUMERIC and DECFLOAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericSpec {
    pub precision: Option<u8>,
    pub scale: Option<u8>,
    /// Scale binary floats are rounded to when decoded as decimals;
    /// falls back to `scale`
    pub decimal_return_scale: Option<u8>,
}

impl NumericSpec {
    /// NUMERIC(18, 9), the storage of an interval.
    pub const fn interval_storage() -> Self {
        Self {
            precision: Some(INTERVAL_PRECISION),
            scale: Some(INTERVAL_SCALE),
            decimal_return_scale: None,
        }
    }

    /// Check a NUMERIC/DECIMAL declaration.
    pub fn validate_fixed(&self) -> Result<()> {
        if let Some(p) = self.precision {
            if p == 0 || p > MAX_NUMERIC_PRECISION {
                return Err(invalid(format!(
                    "precision must be between 1 and {}, got {}",
                    MAX_NUMERIC_PRECISION, p
                )));
            }
        }
        if let (Some(p), Some(s)) = (self.precision, self.scale) {
            if s > p {
                return Err(invalid(format!(
                    "scale {} exceeds precision {}",
                    s, p
                )));
            }
        }
        Ok(())
    }

    /// Check a DECFLOAT declaration: only 16 and 34 digits exist.
    pub fn validate_decfloat(&self) -> Result<()> {
        match self.precision {
            None | Some(16 | 34) => Ok(()),
            Some(p) => Err(invalid(format!(
                "DECFLOAT precision must be 16 or 34, got {}",
                p
            ))),
        }
    }

    /// Scale a float coming back from the driver is rounded to.
    pub fn return_scale(&self) -> Option<u8> {
        self.decimal_return_scale.or(self.scale)
    }

    /// Bytes of the scaled integer Firebird stores for this precision.
    pub fn fixed_byte_length(&self) -> u32 {
        match self.precision {
            Some(1..=4) => 2,
            Some(5..=9) => 4,
            None | Some(10..=18) => 8,
            Some(_) => 16,
        }
    }

    pub fn render(&self, keyword: &str) -> String {
        match (self.precision, self.scale) {
            (Some(p), Some(s)) => format!("{}({}, {})", keyword, p, s),
            (Some(p), None) => format!("{}({})", keyword, p),
            (None, Some(s)) => format!("{}({}, {})", keyword, INTERVAL_PRECISION, s),
            (None, None) => keyword.to_string(),
        }
    }
}

fn invalid(message: String) -> Error {
    Error::Config(ConfigError::new(ConfigErrorKind::InvalidParameter, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_fixed() {
        let ok = NumericSpec {
            precision: Some(18),
            scale: Some(4),
            decimal_return_scale: None,
        };
        assert!(ok.validate_fixed().is_ok());
        assert!(NumericSpec::default().validate_fixed().is_ok());

        let bad = NumericSpec {
            precision: Some(4),
            scale: Some(6),
            decimal_return_scale: None,
        };
        assert!(bad.validate_fixed().is_err());

        let too_wide = NumericSpec {
            precision: Some(39),
            ..NumericSpec::default()
        };
        assert!(too_wide.validate_fixed().is_err());
    }

    #[test]
    fn test_validate_decfloat() {
        for p in [None, Some(16), Some(34)] {
            let spec = NumericSpec {
                precision: p,
                ..NumericSpec::default()
            };
            assert!(spec.validate_decfloat().is_ok());
        }
        let spec = NumericSpec {
            precision: Some(20),
            ..NumericSpec::default()
        };
        assert!(spec.validate_decfloat().is_err());
    }

    #[test]
    fn test_byte_lengths() {
        let with = |p| NumericSpec {
            precision: Some(p),
            ..NumericSpec::default()
        };
        assert_eq!(with(4).fixed_byte_length(), 2);
        assert_eq!(with(9).fixed_byte_length(), 4);
        assert_eq!(with(18).fixed_byte_length(), 8);
        assert_eq!(with(38).fixed_byte_length(), 16);
        assert_eq!(NumericSpec::interval_storage().fixed_byte_length(), 8);
    }

    #[test]
    fn test_render_and_return_scale() {
        let spec = NumericSpec::interval_storage();
        assert_eq!(spec.render("NUMERIC"), "NUMERIC(18, 9)");
        assert_eq!(spec.return_scale(), Some(9));
        let spec = NumericSpec {
            decimal_return_scale: Some(2),
            ..spec
        };
        assert_eq!(spec.return_scale(), Some(2));
        assert_eq!(NumericSpec::default().render("DECFLOAT"), "DECFLOAT");
    }

    #[test]
    fn test_float_width() {
        assert!(FloatSpec::default().is_single());
        assert!(
            !FloatSpec {
                precision: Some(53)
            }
            .is_single()
        );
    }
}
