//! Type registry.
//!
//! Maps each type category to its codec, storage metadata and rendering
//! name. A registry is built once from an `FbDialectConfig` and is
//! read-only afterwards, so it can be shared across threads without
//! locking.

#![allow(clippy::result_large_err)]

use std::sync::{Arc, OnceLock};

use sqlmodel_core::{ConfigError, ConfigErrorKind, Error, Result, SqlType, Value};

use crate::capability::{Conversion, DriverCapabilities, codec_for, conversion_for};
use crate::charset::Charset;
use crate::codec::Codec;
use crate::config::FbDialectConfig;
use crate::types::{FbType, StorageInfo, TypeFamily, TypeKind, TypeParams};

/// Catalog entry for one type category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub kind: TypeKind,
    /// Keyword tag the SQL generator dispatches on
    pub render_tag: &'static str,
    pub family: TypeFamily,
    /// Default BLOB subtype
    pub subtype: Option<u8>,
    pub conversion: Conversion,
}

/// A column type resolved to everything needed to move its values.
#[derive(Debug, Clone, PartialEq)]
pub struct CodecBinding {
    pub fb_type: FbType,
    pub codec: Codec,
    native: bool,
    pub storage: StorageInfo,
}

impl CodecBinding {
    /// Driver converts values of this type itself; the codec is `Identity`.
    pub const fn is_native(&self) -> bool {
        self.native
    }

    pub fn subtype(&self) -> Option<u8> {
        self.storage.subtype
    }

    pub fn encode(&self, value: Value) -> Result<Value> {
        self.codec.encode(value)
    }

    pub fn decode(&self, value: Value) -> Result<Value> {
        self.codec.decode(value)
    }
}

/// Registry of Firebird column types.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    config: FbDialectConfig,
    caps: DriverCapabilities,
    catalog: Vec<KindInfo>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new(FbDialectConfig::default())
    }
}

impl TypeRegistry {
    /// Build a registry for the given configuration.
    #[must_use]
    pub fn new(config: FbDialectConfig) -> Self {
        let caps = config.capabilities();
        let catalog: Vec<KindInfo> = TypeKind::ALL
            .iter()
            .map(|&kind| KindInfo {
                kind,
                render_tag: kind.render_tag(),
                family: kind.family(),
                subtype: kind.blob_subtype(),
                conversion: conversion_for(kind, &caps),
            })
            .collect();

        tracing::debug!(
            kinds = catalog.len(),
            native_decimal = caps.native_decimal,
            default_charset = config.default_charset.as_ref().map(Charset::as_str),
            "Firebird type registry populated"
        );

        Self {
            config,
            caps,
            catalog,
        }
    }

    /// Process-wide registry built from the default configuration.
    pub fn shared() -> Arc<TypeRegistry> {
        static SHARED: OnceLock<Arc<TypeRegistry>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(TypeRegistry::default())))
    }

    pub fn config(&self) -> &FbDialectConfig {
        &self.config
    }

    pub const fn capabilities(&self) -> DriverCapabilities {
        self.caps
    }

    /// All type categories, in catalog order.
    pub fn kinds(&self) -> &[KindInfo] {
        &self.catalog
    }

    #[must_use]
    pub fn kind_info(&self, kind: TypeKind) -> Option<&KindInfo> {
        self.catalog.iter().find(|info| info.kind == kind)
    }

    /// Construct the type for `kind` from `params` and bind its codec.
    pub fn lookup(&self, kind: TypeKind, params: &TypeParams) -> Result<CodecBinding> {
        let fb_type = FbType::from_params(kind, params)?;
        Ok(self.resolve(fb_type))
    }

    /// Like [`lookup`](Self::lookup), by type name (`VARCHAR`, `INT64`, ...).
    pub fn lookup_name(&self, name: &str, params: &TypeParams) -> Result<CodecBinding> {
        let kind = TypeKind::from_name(name).ok_or_else(|| {
            Error::Config(ConfigError::new(
                ConfigErrorKind::UnknownType,
                format!("unknown Firebird type '{}'", name),
            ))
        })?;
        self.lookup(kind, params)
    }

    /// Bind a codec to a type the caller already built.
    pub fn resolve(&self, fb_type: FbType) -> CodecBinding {
        let codec = codec_for(&fb_type, &self.caps);
        let native = conversion_for(fb_type.kind(), &self.caps) == Conversion::Native;
        let storage = fb_type.storage(self.config.default_charset.as_ref());
        CodecBinding {
            fb_type,
            codec,
            native,
            storage,
        }
    }

    /// Bind the Firebird type a generic model type maps to.
    pub fn adapt(&self, sql_type: &SqlType) -> Result<CodecBinding> {
        FbType::from_sql_type(sql_type).map(|ty| self.resolve(ty))
    }
}
