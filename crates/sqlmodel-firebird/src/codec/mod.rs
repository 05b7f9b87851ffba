//! Scalar codecs.
//!
//! A `Codec` is a pair of pure conversions between the host value and the
//! value the driver sends or receives. Codecs are plain tagged values:
//! they hold no state, can be cloned, compared and shared freely, and the
//! interval codec is built by composing a transform over the numeric one.
//!
//! `Value::Null` maps to `Value::Null` in both directions for every codec.

#![allow(clippy::result_large_err)]

pub mod interval;
pub mod numeric;

use sqlmodel_core::{Error, Result, Value};

use crate::types::{FbType, NumericSpec, TypeFamily, TypeKind};

pub use interval::{days_to_duration, duration_to_days};
pub use numeric::NumericCodec;

/// Host/storage conversion for one column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Codec {
    /// Returns its input unchanged
    Identity,
    /// Binary BLOB content: byte strings only
    Bytes,
    /// Exact decimal at a declared precision and scale
    Numeric(NumericCodec),
    /// Binary floating point
    Float,
    /// `Transform` applied in front of (encode) and behind (decode) an
    /// inner codec
    Compose(Box<Codec>, Transform),
}

/// Conversion layered over an inner codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Duration to fractional days and back
    IntervalDays,
}

impl Transform {
    /// Type tag reported in errors raised underneath this transform.
    pub const fn type_name(self) -> &'static str {
        match self {
            Transform::IntervalDays => "INTERVAL",
        }
    }

    fn encode(self, value: Value) -> Result<Value> {
        match (self, value) {
            (Transform::IntervalDays, Value::Interval(d)) => {
                duration_to_days(d).map(Value::Decimal)
            }
            (Transform::IntervalDays, other) => {
                Err(numeric::shape_error("duration", &other))
            }
        }
    }

    fn decode(self, value: Value) -> Result<Value> {
        match (self, value) {
            (Transform::IntervalDays, Value::Decimal(d)) => {
                days_to_duration(d).map(Value::Interval)
            }
            (Transform::IntervalDays, other) => {
                Err(numeric::shape_error("decimal days", &other))
            }
        }
    }

    fn claim(self, err: Error) -> Error {
        match err {
            Error::Conversion(mut e) => {
                e.type_name = self.type_name();
                Error::Conversion(e)
            }
            other => other,
        }
    }
}

impl Codec {
    /// The client-side codec for a column type.
    pub fn for_type(ty: &FbType) -> Codec {
        match ty.kind().family() {
            TypeFamily::ExactNumeric => Codec::Numeric(NumericCodec::new(
                &ty.numeric_spec().unwrap_or_default(),
                ty.kind().render_tag(),
            )),
            TypeFamily::ApproxNumeric => Codec::Float,
            TypeFamily::Interval => Codec::interval(),
            TypeFamily::Blob if ty.kind() == TypeKind::Blob => Codec::Bytes,
            _ => Codec::Identity,
        }
    }

    /// NUMERIC(18, 9) days behind a duration.
    pub fn interval() -> Codec {
        Codec::Compose(
            Box::new(Codec::Numeric(NumericCodec::new(
                &NumericSpec::interval_storage(),
                Transform::IntervalDays.type_name(),
            ))),
            Transform::IntervalDays,
        )
    }

    pub const fn is_identity(&self) -> bool {
        matches!(self, Codec::Identity)
    }

    /// Host value to storage value.
    pub fn encode(&self, value: Value) -> Result<Value> {
        if matches!(value, Value::Null | Value::Default) {
            return Ok(value);
        }
        match self {
            Codec::Identity => Ok(value),
            Codec::Bytes => match value {
                Value::Bytes(_) => Ok(value),
                other => Err(numeric::shape_error("bytes", &other)),
            },
            Codec::Numeric(c) => c.encode(value),
            Codec::Float => numeric::to_float(value),
            Codec::Compose(inner, transform) => {
                let staged = transform.encode(value)?;
                inner.encode(staged).map_err(|e| transform.claim(e))
            }
        }
    }

    /// Storage value to host value.
    pub fn decode(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        match self {
            Codec::Identity => Ok(value),
            Codec::Bytes => match value {
                Value::Bytes(_) => Ok(value),
                other => Err(numeric::shape_error("bytes", &other)),
            },
            Codec::Numeric(c) => c.decode(value),
            Codec::Float => numeric::to_float(value),
            Codec::Compose(inner, transform) => {
                let staged = inner.decode(value).map_err(|e| transform.claim(e))?;
                transform.decode(staged)
            }
        }
    }
}
