//! Firebird dialect configuration.
//!
//! Describes what the driver underneath can do and the connection
//! defaults that affect type metadata.

#![allow(clippy::result_large_err)]

use serde::{Deserialize, Serialize};
use sqlmodel_core::Result;

use crate::capability::DriverCapabilities;
use crate::charset::Charset;

/// Firebird dialect configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FbDialectConfig {
    /// Driver converts DECIMAL/NUMERIC/DECFLOAT and floats itself (default: true)
    pub native_decimal: bool,
    /// Connection character set, used to size strings without their own
    pub default_charset: Option<Charset>,
}

impl Default for FbDialectConfig {
    fn default() -> Self {
        Self {
            native_decimal: true,
            default_charset: None,
        }
    }
}

impl FbDialectConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the driver converts numerics natively.
    pub fn native_decimal(mut self, native: bool) -> Self {
        self.native_decimal = native;
        self
    }

    /// Set the connection character set.
    pub fn default_charset(mut self, name: &str) -> Result<Self> {
        self.default_charset = Some(Charset::new(name)?);
        Ok(self)
    }

    /// Capabilities codec selection is negotiated against.
    pub const fn capabilities(&self) -> DriverCapabilities {
        DriverCapabilities {
            native_decimal: self.native_decimal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = FbDialectConfig::new()
            .native_decimal(false)
            .default_charset("utf8")
            .unwrap();

        assert!(!config.native_decimal);
        assert_eq!(config.default_charset.as_ref().map(Charset::as_str), Some("UTF8"));
        assert!(!config.capabilities().native_decimal);
    }

    #[test]
    fn test_defaults() {
        let config = FbDialectConfig::default();
        assert!(config.native_decimal);
        assert!(config.default_charset.is_none());
        assert!(FbDialectConfig::new().default_charset("not a charset").is_err());
    }

    #[test]
    fn test_serde() {
        let config: FbDialectConfig =
            serde_json::from_str(r#"{"default_charset": "win1252"}"#).unwrap();
        assert!(config.native_decimal);
        assert_eq!(config.default_charset.unwrap().as_str(), "WIN1252");

        assert!(serde_json::from_str::<FbDialectConfig>(r#"{"default_charset": "1x"}"#).is_err());

        let json = serde_json::to_string(&FbDialectConfig::new().native_decimal(false)).unwrap();
        assert_eq!(json, r#"{"native_decimal":false,"default_charset":null}"#);
    }
}
