//! Error types for SQLModel type conversion.

use std::fmt;

/// The primary error type for all SQLModel operations.
#[derive(Debug)]
pub enum Error {
    /// Value shape does not match what the column type expects
    Type(TypeError),
    /// Value has the right shape but cannot be converted losslessly
    Conversion(ConversionError),
    /// Configuration errors (type construction, dialect setup)
    Config(ConfigError),
    /// Custom error with message
    Custom(String),
}

#[derive(Debug)]
pub struct TypeError {
    pub expected: &'static str,
    pub actual: String,
    pub column: Option<String>,
    pub rust_type: Option<&'static str>,
}

#[derive(Debug)]
pub struct ConversionError {
    pub kind: ConversionErrorKind,
    /// Rendering tag of the column type being converted (e.g. "NUMERIC", "INTERVAL")
    pub type_name: &'static str,
    pub column: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// Exact numeric value needs more digits than the declared precision
    PrecisionOverflow,
    /// Value does not fit the host representation
    OutOfRange,
    /// Number of values does not match the number of columns
    ColumnCount,
}

#[derive(Debug)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// A fixed-charset type received a different charset
    CharsetConflict,
    /// Charset name is not a valid identifier
    InvalidCharset,
    /// Type name is not known to the dialect
    UnknownType,
    /// Parameter value is not valid for the type
    InvalidParameter,
}

impl Error {
    /// Is this a precision overflow raised while encoding an exact numeric?
    pub fn is_precision_overflow(&self) -> bool {
        matches!(
            self,
            Error::Conversion(ConversionError {
                kind: ConversionErrorKind::PrecisionOverflow,
                ..
            })
        )
    }

    /// Is this a charset conflict raised while constructing a column type?
    pub fn is_charset_conflict(&self) -> bool {
        matches!(
            self,
            Error::Config(ConfigError {
                kind: ConfigErrorKind::CharsetConflict,
                ..
            })
        )
    }

    /// Did a value fail to convert (as opposed to a setup problem)?
    pub fn is_conversion_failure(&self) -> bool {
        matches!(self, Error::Type(_) | Error::Conversion(_))
    }

    /// Attach a column name to a conversion failure that does not have one yet.
    #[must_use]
    pub fn with_column(mut self, name: &str) -> Self {
        match &mut self {
            Error::Type(e) if e.column.is_none() => e.column = Some(name.to_string()),
            Error::Conversion(e) if e.column.is_none() => e.column = Some(name.to_string()),
            _ => {}
        }
        self
    }

    /// Column name attached to this error, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Error::Type(e) => e.column.as_deref(),
            Error::Conversion(e) => e.column.as_deref(),
            _ => None,
        }
    }
}

impl ConversionError {
    pub fn new(
        kind: ConversionErrorKind,
        type_name: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            type_name,
            column: None,
            message: message.into(),
        }
    }
}

impl ConfigError {
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Type(e) => {
                if let Some(col) = &e.column {
                    write!(
                        f,
                        "Type error in column '{}': expected {}, found {}",
                        col, e.expected, e.actual
                    )
                } else {
                    write!(f, "Type error: expected {}, found {}", e.expected, e.actual)
                }
            }
            Error::Conversion(e) => write!(f, "Conversion error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e.message),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => e
                .source
                .as_deref()
                .map(|err| err as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(col) = &self.column {
            write!(
                f,
                "expected {} for column '{}', found {}",
                self.expected, col, self.actual
            )
        } else {
            write!(f, "expected {}, found {}", self.expected, self.actual)
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.column {
            Some(col) => write!(f, "{} column '{}': {}", self.type_name, col, self.message),
            None => write!(f, "{}: {}", self.type_name, self.message),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<TypeError> for Error {
    fn from(err: TypeError) -> Self {
        Error::Type(err)
    }
}

impl From<ConversionError> for Error {
    fn from(err: ConversionError) -> Self {
        Error::Conversion(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

/// Result type alias for SQLModel operations.
pub type Result<T> = std::result::Result<T, Error>;
