//! Firebird character set names.
//!
//! Character sets are metadata only: the driver transcodes text, this
//! crate just carries the name into DDL and uses it to size string storage.

#![allow(clippy::result_large_err)]

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlmodel_core::{ConfigError, ConfigErrorKind, Error, Result};

/// Character set of BINARY/VARBINARY.
pub const BINARY_CHARSET: &str = "OCTETS";

/// Character set of NCHAR/NVARCHAR.
pub const NATIONAL_CHARSET: &str = "ISO8859_1";

fn charset_name_pattern() -> std::result::Result<&'static Regex, &'static regex::Error> {
    static PATTERN: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Z][A-Z0-9_]*$"))
        .as_ref()
}

/// A validated, upper-cased Firebird character set name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Charset(String);

impl Charset {
    /// Parse a charset name. Names are case-insensitive.
    pub fn new(name: &str) -> Result<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let pattern = charset_name_pattern().map_err(|e| {
            Error::Config(ConfigError {
                kind: ConfigErrorKind::InvalidCharset,
                message: "charset name pattern failed to compile".to_string(),
                source: Some(Box::new(e.clone())),
            })
        })?;
        if !pattern.is_match(&upper) {
            return Err(Error::Config(ConfigError::new(
                ConfigErrorKind::InvalidCharset,
                format!("invalid character set name '{}'", name),
            )));
        }
        Ok(Self(upper))
    }

    pub fn octets() -> Self {
        Self(BINARY_CHARSET.to_string())
    }

    pub fn national() -> Self {
        Self(NATIONAL_CHARSET.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Maximum bytes one character occupies in storage.
    pub fn bytes_per_char(&self) -> u32 {
        match self.0.as_str() {
            "UTF8" => 4,
            "UNICODE_FSS" => 3,
            "SJIS_0208" | "EUCJ_0208" | "GB_2312" | "KSC_5601" | "BIG_5" | "GBK" | "CP943C" => 2,
            _ => 1,
        }
    }

    pub fn is_octets(&self) -> bool {
        self.0 == BINARY_CHARSET
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Charset {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Charset::new(&value)
    }
}

impl From<Charset> for String {
    fn from(value: Charset) -> Self {
        value.0
    }
}
