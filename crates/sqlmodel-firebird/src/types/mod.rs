//! Firebird column types.
//!
//! This module provides:
//! - `TypeKind`, the catalog of Firebird type categories and their keywords
//! - family specs (`StringTypeSpec`, `FloatSpec`, `NumericSpec`, `BlobSpec`)
//! - `TypeParams`, the uniform parameter bag callers hand in
//! - `FbType`, one parameterized column type, implementing `ColumnType`
//!
//! # Example
//!
//! ```rust
//! use sqlmodel_firebird::types::{FbType, TypeKind, TypeParams};
//! use sqlmodel_core::ColumnType;
//!
//! let ty = FbType::from_params(TypeKind::VarChar, &TypeParams::new().length(20).charset("UTF8"))?;
//! assert_eq!(ty.sql_name(), "VARCHAR(20) CHARACTER SET UTF8");
//! # Ok::<(), sqlmodel_core::Error>(())
//! ```

#![allow(clippy::result_large_err)]

pub mod blob;
pub mod numeric;
pub mod string;

use serde::{Deserialize, Serialize};
use sqlmodel_core::{ColumnType, ConfigError, ConfigErrorKind, Error, Result, SqlType};

use crate::charset::Charset;

pub use blob::{BlobSpec, SUBTYPE_BINARY, SUBTYPE_TEXT};
pub use numeric::{FloatSpec, INTERVAL_PRECISION, INTERVAL_SCALE, NumericSpec};
pub use string::StringTypeSpec;

/// Firebird type categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Char,
    VarChar,
    Binary,
    VarBinary,
    NChar,
    NVarChar,
    Float,
    Double,
    DecFloat,
    Real,
    Decimal,
    Numeric,
    Date,
    Time,
    Timestamp,
    SmallInt,
    Integer,
    BigInt,
    Int128,
    Boolean,
    /// BLOB SUB_TYPE 0
    Blob,
    /// BLOB SUB_TYPE 1
    Text,
    /// Duration stored as NUMERIC(18, 9) days
    Interval,
}

/// How values of a kind are represented and converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    String,
    ExactNumeric,
    ApproxNumeric,
    Temporal,
    Integer,
    Boolean,
    Blob,
    Interval,
}

impl TypeKind {
    pub const ALL: [TypeKind; 23] = [
        TypeKind::Char,
        TypeKind::VarChar,
        TypeKind::Binary,
        TypeKind::VarBinary,
        TypeKind::NChar,
        TypeKind::NVarChar,
        TypeKind::Float,
        TypeKind::Double,
        TypeKind::DecFloat,
        TypeKind::Real,
        TypeKind::Decimal,
        TypeKind::Numeric,
        TypeKind::Date,
        TypeKind::Time,
        TypeKind::Timestamp,
        TypeKind::SmallInt,
        TypeKind::Integer,
        TypeKind::BigInt,
        TypeKind::Int128,
        TypeKind::Boolean,
        TypeKind::Blob,
        TypeKind::Text,
        TypeKind::Interval,
    ];

    /// Keyword tag the SQL generator dispatches on. Both BLOB kinds share
    /// `"BLOB"`; the subtype tells them apart.
    pub const fn render_tag(self) -> &'static str {
        match self {
            TypeKind::Char => "CHAR",
            TypeKind::VarChar => "VARCHAR",
            TypeKind::Binary => "BINARY",
            TypeKind::VarBinary => "VARBINARY",
            TypeKind::NChar => "NCHAR",
            TypeKind::NVarChar => "NVARCHAR",
            TypeKind::Float => "FLOAT",
            TypeKind::Double => "DOUBLE_PRECISION",
            TypeKind::DecFloat => "DECFLOAT",
            TypeKind::Real => "REAL",
            TypeKind::Decimal => "DECIMAL",
            TypeKind::Numeric => "NUMERIC",
            TypeKind::Date => "DATE",
            TypeKind::Time => "TIME",
            TypeKind::Timestamp => "TIMESTAMP",
            TypeKind::SmallInt => "SMALLINT",
            TypeKind::Integer => "INTEGER",
            TypeKind::BigInt => "BIGINT",
            TypeKind::Int128 => "INT128",
            TypeKind::Boolean => "BOOLEAN",
            TypeKind::Blob | TypeKind::Text => "BLOB",
            TypeKind::Interval => "INTERVAL",
        }
    }

    pub const fn family(self) -> TypeFamily {
        match self {
            TypeKind::Char
            | TypeKind::VarChar
            | TypeKind::Binary
            | TypeKind::VarBinary
            | TypeKind::NChar
            | TypeKind::NVarChar => TypeFamily::String,
            TypeKind::Float | TypeKind::Double | TypeKind::Real => TypeFamily::ApproxNumeric,
            TypeKind::DecFloat | TypeKind::Decimal | TypeKind::Numeric => TypeFamily::ExactNumeric,
            TypeKind::Date | TypeKind::Time | TypeKind::Timestamp => TypeFamily::Temporal,
            TypeKind::SmallInt | TypeKind::Integer | TypeKind::BigInt | TypeKind::Int128 => {
                TypeFamily::Integer
            }
            TypeKind::Boolean => TypeFamily::Boolean,
            TypeKind::Blob | TypeKind::Text => TypeFamily::Blob,
            TypeKind::Interval => TypeFamily::Interval,
        }
    }

    /// BLOB subtype stored for this kind.
    pub const fn blob_subtype(self) -> Option<u8> {
        match self {
            TypeKind::Blob => Some(SUBTYPE_BINARY),
            TypeKind::Text => Some(SUBTYPE_TEXT),
            _ => None,
        }
    }

    /// Parse a type name as written in DDL or reported by the engine's
    /// system tables (`VARYING`, `INT64`, `BLOB SUB_TYPE 1`, ...). A
    /// parenthesized suffix such as `(20)` is ignored.
    pub fn from_name(name: &str) -> Option<TypeKind> {
        let base = name.split('(').next().unwrap_or_default();
        let normalized = base
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        let kind = match normalized.as_str() {
            "CHAR" | "CHARACTER" | "TEXT" => TypeKind::Char,
            "VARCHAR" | "VARYING" | "CSTRING" | "CHAR VARYING" | "CHARACTER VARYING" => {
                TypeKind::VarChar
            }
            "BINARY" => TypeKind::Binary,
            "VARBINARY" | "BINARY VARYING" => TypeKind::VarBinary,
            "NCHAR" | "NATIONAL CHAR" | "NATIONAL CHARACTER" => TypeKind::NChar,
            "NVARCHAR" | "NCHAR VARYING" | "NATIONAL CHAR VARYING"
            | "NATIONAL CHARACTER VARYING" => TypeKind::NVarChar,
            "FLOAT" => TypeKind::Float,
            "DOUBLE" | "DOUBLE PRECISION" | "D_FLOAT" => TypeKind::Double,
            "REAL" => TypeKind::Real,
            "DECFLOAT" => TypeKind::DecFloat,
            "DECIMAL" | "DEC" => TypeKind::Decimal,
            "NUMERIC" => TypeKind::Numeric,
            "DATE" => TypeKind::Date,
            "TIME" => TypeKind::Time,
            "TIMESTAMP" => TypeKind::Timestamp,
            "SMALLINT" | "SHORT" => TypeKind::SmallInt,
            "INTEGER" | "INT" | "LONG" => TypeKind::Integer,
            "BIGINT" | "INT64" | "QUAD" => TypeKind::BigInt,
            "INT128" => TypeKind::Int128,
            "BOOLEAN" => TypeKind::Boolean,
            "BLOB" | "BLOB SUB_TYPE 0" | "BLOB SUB_TYPE BINARY" => TypeKind::Blob,
            "BLOB SUB_TYPE 1" | "BLOB SUB_TYPE TEXT" => TypeKind::Text,
            "INTERVAL" => TypeKind::Interval,
            _ => return None,
        };
        Some(kind)
    }
}

/// Uniform parameter bag for constructing any column type.
///
/// Fields a type family does not have are dropped when the bag is turned
/// into a type, so one bag can be passed across families.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeParams {
    pub length: Option<u32>,
    pub precision: Option<u8>,
    pub scale: Option<u8>,
    pub charset: Option<String>,
    pub collation: Option<String>,
    pub segment_size: Option<u32>,
    pub decimal_return_scale: Option<u8>,
}

impl TypeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn scale(mut self, scale: u8) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    pub fn collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    pub fn segment_size(mut self, segment_size: u32) -> Self {
        self.segment_size = Some(segment_size);
        self
    }

    pub fn decimal_return_scale(mut self, scale: u8) -> Self {
        self.decimal_return_scale = Some(scale);
        self
    }
}

/// Family-specific parameters of an `FbType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    String(StringTypeSpec),
    Float(FloatSpec),
    Exact(NumericSpec),
    Blob(BlobSpec),
    /// Types without parameters (temporal, integer, boolean, interval)
    Scalar,
}

/// Storage metadata of a column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageInfo {
    /// Bytes the value occupies in a record (8 for a BLOB id)
    pub byte_length: u32,
    /// BLOB subtype, for the two BLOB kinds
    pub subtype: Option<u8>,
    /// DDL rendering of the stored type
    pub render_name: String,
}

/// One parameterized Firebird column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FbType {
    kind: TypeKind,
    spec: TypeSpec,
}

impl FbType {
    /// Build a type from a parameter bag.
    ///
    /// Applies defaults for omitted parameters (unspecified, never zero),
    /// drops parameters the family lacks, and rejects conflicting
    /// charsets on BINARY/VARBINARY/NCHAR/NVARCHAR.
    pub fn from_params(kind: TypeKind, params: &TypeParams) -> Result<Self> {
        let spec = match kind.family() {
            TypeFamily::String => {
                let base = match kind {
                    TypeKind::Char => StringTypeSpec::char(params.length),
                    TypeKind::VarChar => StringTypeSpec::varchar(params.length),
                    TypeKind::Binary => StringTypeSpec::binary(params.length),
                    TypeKind::VarBinary => StringTypeSpec::varbinary(params.length),
                    TypeKind::NChar => StringTypeSpec::nchar(params.length),
                    _ => StringTypeSpec::nvarchar(params.length),
                };
                ignore_unsupported(kind, "precision", params.precision.is_some());
                ignore_unsupported(kind, "scale", params.scale.is_some());
                ignore_unsupported(kind, "segment_size", params.segment_size.is_some());
                ignore_unsupported(
                    kind,
                    "decimal_return_scale",
                    params.decimal_return_scale.is_some(),
                );
                TypeSpec::String(
                    base.with_charset(params.charset.as_deref())?
                        .with_collation(params.collation.as_deref()),
                )
            }
            TypeFamily::ApproxNumeric => {
                ignore_unsupported(kind, "length", params.length.is_some());
                ignore_unsupported(kind, "scale", params.scale.is_some());
                ignore_unsupported(kind, "charset", params.charset.is_some());
                ignore_unsupported(kind, "collation", params.collation.is_some());
                ignore_unsupported(kind, "segment_size", params.segment_size.is_some());
                // Floats decode to floats, never to decimals
                ignore_unsupported(
                    kind,
                    "decimal_return_scale",
                    params.decimal_return_scale.is_some(),
                );
                TypeSpec::Float(FloatSpec {
                    precision: params.precision,
                })
            }
            TypeFamily::ExactNumeric => {
                ignore_unsupported(kind, "length", params.length.is_some());
                ignore_unsupported(kind, "charset", params.charset.is_some());
                ignore_unsupported(kind, "collation", params.collation.is_some());
                ignore_unsupported(kind, "segment_size", params.segment_size.is_some());
                TypeSpec::Exact(exact_spec(
                    kind,
                    params.precision,
                    params.scale,
                    params.decimal_return_scale,
                )?)
            }
            TypeFamily::Blob => {
                ignore_unsupported(kind, "length", params.length.is_some());
                ignore_unsupported(kind, "precision", params.precision.is_some());
                ignore_unsupported(kind, "scale", params.scale.is_some());
                ignore_unsupported(
                    kind,
                    "decimal_return_scale",
                    params.decimal_return_scale.is_some(),
                );
                if kind == TypeKind::Text {
                    TypeSpec::Blob(BlobSpec::text(
                        params.segment_size,
                        params.charset.as_deref(),
                        params.collation.as_deref(),
                    )?)
                } else {
                    ignore_unsupported(kind, "charset", params.charset.is_some());
                    ignore_unsupported(kind, "collation", params.collation.is_some());
                    TypeSpec::Blob(BlobSpec::binary(params.segment_size))
                }
            }
            TypeFamily::Temporal
            | TypeFamily::Integer
            | TypeFamily::Boolean
            | TypeFamily::Interval => {
                ignore_unsupported(kind, "length", params.length.is_some());
                ignore_unsupported(kind, "precision", params.precision.is_some());
                ignore_unsupported(kind, "scale", params.scale.is_some());
                ignore_unsupported(kind, "charset", params.charset.is_some());
                ignore_unsupported(kind, "collation", params.collation.is_some());
                ignore_unsupported(kind, "segment_size", params.segment_size.is_some());
                ignore_unsupported(
                    kind,
                    "decimal_return_scale",
                    params.decimal_return_scale.is_some(),
                );
                TypeSpec::Scalar
            }
        };
        Ok(Self { kind, spec })
    }

    /// Type with every parameter unspecified.
    pub fn new(kind: TypeKind) -> Result<Self> {
        Self::from_params(kind, &TypeParams::default())
    }

    pub fn interval() -> Self {
        Self {
            kind: TypeKind::Interval,
            spec: TypeSpec::Scalar,
        }
    }

    /// Adapt a generic model type to the matching Firebird type.
    pub fn from_sql_type(sql_type: &SqlType) -> Result<Self> {
        let params = TypeParams::new();
        match sql_type {
            SqlType::SmallInt => Self::new(TypeKind::SmallInt),
            SqlType::Integer => Self::new(TypeKind::Integer),
            SqlType::BigInt => Self::new(TypeKind::BigInt),
            SqlType::Real => Self::new(TypeKind::Real),
            SqlType::Double => Self::new(TypeKind::Double),
            SqlType::Numeric { precision, scale } => Self::from_params(
                TypeKind::Numeric,
                &params.precision(*precision).scale(*scale),
            ),
            SqlType::Decimal { precision, scale } => Self::from_params(
                TypeKind::Decimal,
                &params.precision(*precision).scale(*scale),
            ),
            SqlType::Boolean => Self::new(TypeKind::Boolean),
            SqlType::Char(len) => Self::from_params(TypeKind::Char, &params.length(*len)),
            SqlType::VarChar(len) => Self::from_params(TypeKind::VarChar, &params.length(*len)),
            SqlType::Text => Self::new(TypeKind::Text),
            SqlType::Binary(len) => Self::from_params(TypeKind::Binary, &params.length(*len)),
            SqlType::VarBinary(len) => {
                Self::from_params(TypeKind::VarBinary, &params.length(*len))
            }
            SqlType::Blob => Self::new(TypeKind::Blob),
            SqlType::Date => Self::new(TypeKind::Date),
            SqlType::Time => Self::new(TypeKind::Time),
            SqlType::Timestamp => Self::new(TypeKind::Timestamp),
            SqlType::Interval => Ok(Self::interval()),
            SqlType::Custom(name) => {
                let kind = TypeKind::from_name(name).ok_or_else(|| unknown_type(name))?;
                Self::new(kind)
            }
        }
    }

    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    pub const fn spec(&self) -> &TypeSpec {
        &self.spec
    }

    /// Whether decoded values come back as exact decimals. Fixed per
    /// family: exact numerics always, everything else never.
    pub const fn returns_decimal(&self) -> bool {
        matches!(self.kind.family(), TypeFamily::ExactNumeric)
    }

    pub fn subtype(&self) -> Option<u8> {
        match &self.spec {
            TypeSpec::Blob(blob) => Some(blob.subtype()),
            _ => None,
        }
    }

    /// Numeric parameters used for client-side exact conversion.
    pub fn numeric_spec(&self) -> Option<NumericSpec> {
        match (&self.spec, self.kind) {
            (TypeSpec::Exact(spec), _) => Some(*spec),
            (_, TypeKind::Interval) => Some(NumericSpec::interval_storage()),
            _ => None,
        }
    }

    /// Storage metadata. `default_charset` sizes strings that do not
    /// declare a charset of their own.
    pub fn storage(&self, default_charset: Option<&Charset>) -> StorageInfo {
        let byte_length = match (&self.spec, self.kind) {
            (TypeSpec::String(s), _) => s.byte_length(default_charset),
            (TypeSpec::Float(f), TypeKind::Float) => {
                if f.is_single() {
                    4
                } else {
                    8
                }
            }
            (TypeSpec::Float(_), TypeKind::Real) => 4,
            (TypeSpec::Float(_), _) => 8,
            (TypeSpec::Exact(n), TypeKind::DecFloat) => {
                if n.precision == Some(16) {
                    8
                } else {
                    16
                }
            }
            (TypeSpec::Exact(n), _) => n.fixed_byte_length(),
            (TypeSpec::Blob(_), _) => 8,
            (TypeSpec::Scalar, kind) => match kind {
                TypeKind::Boolean => 1,
                TypeKind::SmallInt => 2,
                TypeKind::Integer | TypeKind::Date | TypeKind::Time => 4,
                TypeKind::Int128 => 16,
                _ => 8,
            },
        };
        StorageInfo {
            byte_length,
            subtype: self.subtype(),
            render_name: self.sql_name(),
        }
    }
}

impl ColumnType for FbType {
    fn length(&self) -> Option<u32> {
        match &self.spec {
            TypeSpec::String(s) => s.length,
            _ => None,
        }
    }

    fn set_length(&mut self, length: Option<u32>) {
        match &mut self.spec {
            TypeSpec::String(s) => s.length = length,
            _ => ignore_unsupported(self.kind, "length", length.is_some()),
        }
    }

    fn precision_scale(&self) -> (Option<u8>, Option<u8>) {
        match &self.spec {
            TypeSpec::Float(f) => (f.precision, None),
            TypeSpec::Exact(n) => (n.precision, n.scale),
            _ if self.kind == TypeKind::Interval => (Some(INTERVAL_PRECISION), Some(INTERVAL_SCALE)),
            _ => (None, None),
        }
    }

    fn set_precision_scale(&mut self, precision: Option<u8>, scale: Option<u8>) -> Result<()> {
        let kind = self.kind;
        match &mut self.spec {
            TypeSpec::Float(f) => {
                ignore_unsupported(kind, "scale", scale.is_some());
                f.precision = precision;
            }
            TypeSpec::Exact(n) => {
                *n = exact_spec(kind, precision, scale, n.decimal_return_scale)?;
            }
            _ => ignore_unsupported(kind, "precision", precision.is_some() || scale.is_some()),
        }
        Ok(())
    }

    fn charset(&self) -> Option<&str> {
        match &self.spec {
            TypeSpec::String(s) => s.charset().map(Charset::as_str),
            TypeSpec::Blob(b) => b.charset().map(Charset::as_str),
            _ => None,
        }
    }

    fn set_charset(&mut self, charset: Option<&str>) -> Result<()> {
        let kind = self.kind;
        match &mut self.spec {
            TypeSpec::String(s) => s.set_charset(charset),
            TypeSpec::Blob(b) => {
                let applied = b.set_charset(charset)?;
                ignore_unsupported(kind, "charset", !applied && charset.is_some());
                Ok(())
            }
            _ => {
                ignore_unsupported(kind, "charset", charset.is_some());
                Ok(())
            }
        }
    }

    fn collation(&self) -> Option<&str> {
        match &self.spec {
            TypeSpec::String(s) => s.collation.as_deref(),
            TypeSpec::Blob(b) => b.collation(),
            _ => None,
        }
    }

    fn set_collation(&mut self, collation: Option<&str>) {
        let kind = self.kind;
        match &mut self.spec {
            TypeSpec::String(s) => s.collation = collation.map(str::to_string),
            TypeSpec::Blob(b) => {
                let applied = b.set_collation(collation);
                ignore_unsupported(kind, "collation", !applied && collation.is_some());
            }
            _ => ignore_unsupported(kind, "collation", collation.is_some()),
        }
    }

    fn render_tag(&self) -> &'static str {
        self.kind.render_tag()
    }

    fn sql_name(&self) -> String {
        match (&self.spec, self.kind) {
            (TypeSpec::String(s), kind) => s.render(kind.render_tag()),
            (TypeSpec::Float(f), TypeKind::Float) => match f.precision {
                Some(p) => format!("FLOAT({})", p),
                None => "FLOAT".to_string(),
            },
            (TypeSpec::Float(_), TypeKind::Real) => "REAL".to_string(),
            (TypeSpec::Float(_), _) => "DOUBLE PRECISION".to_string(),
            (TypeSpec::Exact(n), TypeKind::DecFloat) => match n.precision {
                Some(p) => format!("DECFLOAT({})", p),
                None => "DECFLOAT".to_string(),
            },
            (TypeSpec::Exact(n), kind) => n.render(kind.render_tag()),
            (TypeSpec::Blob(b), _) => b.render(),
            (TypeSpec::Scalar, TypeKind::Interval) => NumericSpec::interval_storage().render("NUMERIC"),
            (TypeSpec::Scalar, kind) => kind.render_tag().to_string(),
        }
    }
}

/// Validated parameters of an exact numeric. DECFLOAT has no scale; one
/// supplied is dropped.
fn exact_spec(
    kind: TypeKind,
    precision: Option<u8>,
    scale: Option<u8>,
    decimal_return_scale: Option<u8>,
) -> Result<NumericSpec> {
    let decfloat = kind == TypeKind::DecFloat;
    if decfloat {
        ignore_unsupported(kind, "scale", scale.is_some());
    }
    let spec = NumericSpec {
        precision,
        scale: if decfloat { None } else { scale },
        decimal_return_scale,
    };
    if decfloat {
        spec.validate_decfloat()?;
    } else {
        spec.validate_fixed()?;
    }
    Ok(spec)
}

fn ignore_unsupported(kind: TypeKind, parameter: &'static str, supplied: bool) {
    if supplied {
        tracing::debug!(
            type_tag = kind.render_tag(),
            parameter,
            "Dropping parameter the type does not support"
        );
    }
}

fn unknown_type(name: &str) -> Error {
    Error::Config(ConfigError::new(
        ConfigErrorKind::UnknownType,
        format!("unknown Firebird type '{}'", name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_scale_is_dropped() {
        let with_scale =
            FbType::from_params(TypeKind::Float, &TypeParams::new().precision(53).scale(4))
                .unwrap();
        let without = FbType::from_params(TypeKind::Float, &TypeParams::new().precision(53))
            .unwrap();
        assert_eq!(with_scale, without);
        assert_eq!(with_scale.precision_scale(), (Some(53), None));
        assert_eq!(with_scale.sql_name(), "FLOAT(53)");
    }

    #[test]
    fn test_decfloat_scale_is_dropped() {
        let with_scale =
            FbType::from_params(TypeKind::DecFloat, &TypeParams::new().precision(16).scale(2))
                .unwrap();
        let without =
            FbType::from_params(TypeKind::DecFloat, &TypeParams::new().precision(16)).unwrap();
        assert_eq!(with_scale, without);
        assert_eq!(with_scale.precision_scale(), (Some(16), None));
        assert_eq!(with_scale.sql_name(), "DECFLOAT(16)");
    }

    #[test]
    fn test_set_precision_scale_validates() {
        let mut decimal = FbType::from_params(
            TypeKind::Decimal,
            &TypeParams::new().precision(10).scale(2),
        )
        .unwrap();
        assert!(decimal.set_precision_scale(Some(4), Some(6)).is_err());
        assert!(decimal.set_precision_scale(Some(39), None).is_err());
        assert_eq!(decimal.sql_name(), "DECIMAL(10, 2)");
        decimal.set_precision_scale(Some(12), Some(4)).unwrap();
        assert_eq!(decimal.sql_name(), "DECIMAL(12, 4)");

        let mut decfloat = FbType::new(TypeKind::DecFloat).unwrap();
        assert!(decfloat.set_precision_scale(Some(20), None).is_err());
        assert_eq!(decfloat.sql_name(), "DECFLOAT");
        decfloat.set_precision_scale(Some(34), Some(3)).unwrap();
        assert_eq!(decfloat.precision_scale(), (Some(34), None));

        let mut float = FbType::new(TypeKind::Float).unwrap();
        float.set_precision_scale(Some(53), Some(2)).unwrap();
        assert_eq!(float.precision_scale(), (Some(53), None));
    }

    #[test]
    fn test_foreign_parameters_are_dropped() {
        let extras = TypeParams::new()
            .collation("UNICODE_CI")
            .segment_size(80)
            .decimal_return_scale(2);
        for kind in [TypeKind::Integer, TypeKind::Double, TypeKind::Boolean] {
            assert_eq!(
                FbType::from_params(kind, &extras).unwrap(),
                FbType::new(kind).unwrap(),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn test_numeric_defaults_are_unspecified() {
        let ty = FbType::new(TypeKind::Numeric).unwrap();
        assert_eq!(ty.precision_scale(), (None, None));
        assert!(ty.returns_decimal());
        assert_eq!(ty.sql_name(), "NUMERIC");

        let ty = FbType::new(TypeKind::Double).unwrap();
        assert!(!ty.returns_decimal());
        assert_eq!(ty.sql_name(), "DOUBLE PRECISION");
    }

    #[test]
    fn test_binary_charset_rules() {
        assert!(FbType::new(TypeKind::Binary).is_ok());
        assert!(
            FbType::from_params(TypeKind::Binary, &TypeParams::new().charset("OCTETS")).is_ok()
        );
        let err = FbType::from_params(TypeKind::Binary, &TypeParams::new().charset("UTF8"))
            .unwrap_err();
        assert!(err.is_charset_conflict());

        let mut ty = FbType::from_params(TypeKind::NVarChar, &TypeParams::new().length(10))
            .unwrap();
        assert_eq!(ty.charset(), Some("ISO8859_1"));
        assert!(ty.set_charset(Some("WIN1252")).unwrap_err().is_charset_conflict());
        assert_eq!(ty.sql_name(), "NVARCHAR(10)");
    }

    #[test]
    fn test_blob_kinds_share_tag_but_not_subtype() {
        let bin = FbType::new(TypeKind::Blob).unwrap();
        let text = FbType::new(TypeKind::Text).unwrap();
        assert_eq!(bin.render_tag(), text.render_tag());
        assert_eq!(bin.subtype(), Some(SUBTYPE_BINARY));
        assert_eq!(text.subtype(), Some(SUBTYPE_TEXT));
    }

    #[test]
    fn test_text_blob_keeps_charset_binary_drops_it() {
        let params = TypeParams::new()
            .segment_size(80)
            .charset("UTF8")
            .collation("UNICODE");
        let text = FbType::from_params(TypeKind::Text, &params).unwrap();
        assert_eq!(text.charset(), Some("UTF8"));
        assert_eq!(text.collation(), Some("UNICODE"));

        let bin = FbType::from_params(TypeKind::Blob, &params).unwrap();
        assert_eq!(bin.charset(), None);
        assert_eq!(bin.sql_name(), "BLOB SUB_TYPE BINARY SEGMENT SIZE 80");
    }

    #[test]
    fn test_interval_renders_as_storage() {
        let ty = FbType::interval();
        assert_eq!(ty.sql_name(), "NUMERIC(18, 9)");
        assert_eq!(ty.render_tag(), "INTERVAL");
        assert_eq!(ty.precision_scale(), (Some(18), Some(9)));
        assert_eq!(ty.numeric_spec(), Some(NumericSpec::interval_storage()));
        assert_eq!(ty.storage(None).byte_length, 8);
    }

    #[test]
    fn test_storage_lengths() {
        let utf8 = Charset::new("UTF8").unwrap();
        let cases = [
            (TypeKind::SmallInt, 2),
            (TypeKind::Integer, 4),
            (TypeKind::BigInt, 8),
            (TypeKind::Int128, 16),
            (TypeKind::Float, 4),
            (TypeKind::Double, 8),
            (TypeKind::Real, 4),
            (TypeKind::DecFloat, 16),
            (TypeKind::Boolean, 1),
            (TypeKind::Date, 4),
            (TypeKind::Time, 4),
            (TypeKind::Timestamp, 8),
            (TypeKind::Blob, 8),
        ];
        for (kind, len) in cases {
            assert_eq!(
                FbType::new(kind).unwrap().storage(Some(&utf8)).byte_length,
                len,
                "{kind:?}"
            );
        }
        let varchar =
            FbType::from_params(TypeKind::VarChar, &TypeParams::new().length(10)).unwrap();
        assert_eq!(varchar.storage(Some(&utf8)).byte_length, 40);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(TypeKind::from_name("varchar(20)"), Some(TypeKind::VarChar));
        assert_eq!(TypeKind::from_name("VARYING"), Some(TypeKind::VarChar));
        assert_eq!(TypeKind::from_name("INT64"), Some(TypeKind::BigInt));
        assert_eq!(TypeKind::from_name("double  precision"), Some(TypeKind::Double));
        assert_eq!(TypeKind::from_name("BLOB SUB_TYPE 1"), Some(TypeKind::Text));
        assert_eq!(TypeKind::from_name("blob sub_type binary"), Some(TypeKind::Blob));
        assert_eq!(TypeKind::from_name("GEOMETRY"), None);
    }

    #[test]
    fn test_from_sql_type() {
        assert_eq!(
            FbType::from_sql_type(&SqlType::Interval).unwrap().kind(),
            TypeKind::Interval
        );
        assert_eq!(
            FbType::from_sql_type(&SqlType::Text).unwrap().subtype(),
            Some(SUBTYPE_TEXT)
        );
        let bin = FbType::from_sql_type(&SqlType::Binary(16)).unwrap();
        assert_eq!(bin.sql_name(), "BINARY(16)");
        let num = FbType::from_sql_type(&SqlType::Numeric {
            precision: 10,
            scale: 2,
        })
        .unwrap();
        assert_eq!(num.sql_name(), "NUMERIC(10, 2)");
        assert_eq!(
            FbType::from_sql_type(&SqlType::Custom("DECFLOAT")).unwrap().kind(),
            TypeKind::DecFloat
        );
        let err = FbType::from_sql_type(&SqlType::Custom("GEOMETRY")).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError {
                kind: ConfigErrorKind::UnknownType,
                ..
            })
        ));
    }
}
