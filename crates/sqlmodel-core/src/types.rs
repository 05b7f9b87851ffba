//! SQL type definitions and the column-type contract dialects implement.

use crate::Result;

/// Dialect-independent SQL data types used by models.
///
/// Dialects adapt these to their own column types before rendering DDL or
/// converting values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlType {
    // Integer types
    SmallInt,
    Integer,
    BigInt,

    // Floating point
    Real,
    Double,

    // Fixed precision
    Numeric { precision: u8, scale: u8 },
    Decimal { precision: u8, scale: u8 },

    // Boolean
    Boolean,

    // String types
    Char(u32),
    VarChar(u32),
    Text,

    // Binary types
    Binary(u32),
    VarBinary(u32),
    Blob,

    // Date/time types
    Date,
    Time,
    Timestamp,
    Interval,

    // Custom type name
    Custom(&'static str),
}

impl SqlType {
    /// Get the SQL type name for this type.
    pub fn sql_name(&self) -> String {
        match self {
            SqlType::SmallInt => "SMALLINT".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::BigInt => "BIGINT".to_string(),
            SqlType::Real => "REAL".to_string(),
            SqlType::Double => "DOUBLE PRECISION".to_string(),
            SqlType::Numeric { precision, scale } => format!("NUMERIC({}, {})", precision, scale),
            SqlType::Decimal { precision, scale } => format!("DECIMAL({}, {})", precision, scale),
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Char(len) => format!("CHAR({})", len),
            SqlType::VarChar(len) => format!("VARCHAR({})", len),
            SqlType::Text => "TEXT".to_string(),
            SqlType::Binary(len) => format!("BINARY({})", len),
            SqlType::VarBinary(len) => format!("VARBINARY({})", len),
            SqlType::Blob => "BLOB".to_string(),
            SqlType::Date => "DATE".to_string(),
            SqlType::Time => "TIME".to_string(),
            SqlType::Timestamp => "TIMESTAMP".to_string(),
            SqlType::Interval => "INTERVAL".to_string(),
            SqlType::Custom(name) => name.to_string(),
        }
    }

    /// Check if this type is numeric.
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            SqlType::SmallInt
                | SqlType::Integer
                | SqlType::BigInt
                | SqlType::Real
                | SqlType::Double
                | SqlType::Numeric { .. }
                | SqlType::Decimal { .. }
        )
    }

    /// Check if this type is text-based.
    pub const fn is_text(&self) -> bool {
        matches!(self, SqlType::Char(_) | SqlType::VarChar(_) | SqlType::Text)
    }

    /// Check if this type is a date/time type.
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            SqlType::Date | SqlType::Time | SqlType::Timestamp | SqlType::Interval
        )
    }
}

/// A column type a dialect can render into DDL and bind casts.
///
/// Accessors for dimensions a type does not have return `None`, and the
/// matching setters leave the type unchanged. `set_precision_scale` and
/// `set_charset` are fallible: a rejected value leaves the type as it was.
pub trait ColumnType {
    /// Declared length (characters for text, bytes for binary).
    fn length(&self) -> Option<u32>;

    fn set_length(&mut self, length: Option<u32>);

    /// Declared `(precision, scale)`; either part may be unspecified.
    fn precision_scale(&self) -> (Option<u8>, Option<u8>);

    #[allow(clippy::result_large_err)]
    fn set_precision_scale(&mut self, precision: Option<u8>, scale: Option<u8>) -> Result<()>;

    /// Character set name, if the type has one.
    fn charset(&self) -> Option<&str>;

    #[allow(clippy::result_large_err)]
    fn set_charset(&mut self, charset: Option<&str>) -> Result<()>;

    fn collation(&self) -> Option<&str>;

    fn set_collation(&mut self, collation: Option<&str>);

    /// Keyword tag the SQL generator dispatches on (e.g. `"BINARY"` vs `"CHAR"`).
    fn render_tag(&self) -> &'static str;

    /// Full type rendering for DDL, e.g. `VARCHAR(20) CHARACTER SET UTF8`.
    fn sql_name(&self) -> String;
}
