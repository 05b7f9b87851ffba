//! Parameters of the CHAR/VARCHAR family.
//!
//! BINARY, VARBINARY, NCHAR and NVARCHAR are not separate types: they are
//! CHAR/VARCHAR with the character set pinned to `OCTETS` or `ISO8859_1`.

#![allow(clippy::result_large_err)]

use sqlmodel_core::{ConfigError, ConfigErrorKind, Error, Result};

use crate::charset::Charset;

/// Length, character set and collation of a string column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTypeSpec {
    pub length: Option<u32>,
    charset: Option<Charset>,
    pub collation: Option<String>,
    pub fixed_length: bool,
    charset_fixed: bool,
}

impl StringTypeSpec {
    const fn free(length: Option<u32>, fixed_length: bool) -> Self {
        Self {
            length,
            charset: None,
            collation: None,
            fixed_length,
            charset_fixed: false,
        }
    }

    fn pinned(length: Option<u32>, fixed_length: bool, charset: Charset) -> Self {
        Self {
            length,
            charset: Some(charset),
            collation: None,
            fixed_length,
            charset_fixed: true,
        }
    }

    /// `CHAR(n)`.
    pub const fn char(length: Option<u32>) -> Self {
        Self::free(length, true)
    }

    /// `VARCHAR(n)`.
    pub const fn varchar(length: Option<u32>) -> Self {
        Self::free(length, false)
    }

    /// `CHAR(n) CHARACTER SET OCTETS`.
    pub fn binary(length: Option<u32>) -> Self {
        Self::pinned(length, true, Charset::octets())
    }

    /// `VARCHAR(n) CHARACTER SET OCTETS`.
    pub fn varbinary(length: Option<u32>) -> Self {
        Self::pinned(length, false, Charset::octets())
    }

    /// `CHAR(n) CHARACTER SET ISO8859_1`.
    pub fn nchar(length: Option<u32>) -> Self {
        Self::pinned(length, true, Charset::national())
    }

    /// `VARCHAR(n) CHARACTER SET ISO8859_1`.
    pub fn nvarchar(length: Option<u32>) -> Self {
        Self::pinned(length, false, Charset::national())
    }

    pub fn charset(&self) -> Option<&Charset> {
        self.charset.as_ref()
    }

    /// Whether the character set is part of the type and cannot be overridden.
    pub fn is_charset_fixed(&self) -> bool {
        self.charset_fixed
    }

    /// Set or clear the character set.
    ///
    /// On a pinned type, `None` and the pinned charset itself are accepted
    /// and leave the type unchanged; anything else is a charset conflict.
    pub fn set_charset(&mut self, name: Option<&str>) -> Result<()> {
        let requested = name.map(Charset::new).transpose()?;
        if !self.charset_fixed {
            self.charset = requested;
            return Ok(());
        }
        match (requested, &self.charset) {
            (None, _) => Ok(()),
            (Some(req), Some(pinned)) if &req == pinned => Ok(()),
            (Some(req), pinned) => Err(Error::Config(ConfigError::new(
                ConfigErrorKind::CharsetConflict,
                format!(
                    "character set is fixed to {}, got {}",
                    pinned.as_ref().map_or("<none>", Charset::as_str),
                    req
                ),
            ))),
        }
    }

    /// Builder form of [`set_charset`](Self::set_charset).
    pub fn with_charset(mut self, name: Option<&str>) -> Result<Self> {
        self.set_charset(name)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_collation(mut self, collation: Option<&str>) -> Self {
        self.collation = collation.map(str::to_string);
        self
    }

    /// Storage bytes: declared characters times the widest encoding of the
    /// effective character set.
    pub fn byte_length(&self, default_charset: Option<&Charset>) -> u32 {
        let chars = self.length.unwrap_or(1);
        let per_char = self
            .charset
            .as_ref()
            .or(default_charset)
            .map_or(1, Charset::bytes_per_char);
        chars.saturating_mul(per_char)
    }

    /// Render with the given keyword. Pinned charsets are implied by the
    /// keyword and not repeated.
    pub fn render(&self, keyword: &str) -> String {
        let mut sql = match self.length {
            Some(len) => format!("{}({})", keyword, len),
            None => keyword.to_string(),
        };
        if let (Some(cs), false) = (&self.charset, self.charset_fixed) {
            sql.push_str(" CHARACTER SET ");
            sql.push_str(cs.as_str());
        }
        if let Some(collation) = &self.collation {
            sql.push_str(" COLLATE ");
            sql.push_str(collation);
        }
        sql
    }
}
