//! Firebird dialect type coercion for SQLModel Rust.
//!
//! `sqlmodel-firebird` is the **type layer** of the Firebird dialect. It
//! decides how every Firebird column type is rendered, sized and converted
//! between the values an application works with and the values the driver
//! sends and receives.
//!
//! # Role In The Architecture
//!
//! - Implements `sqlmodel-core::ColumnType` for Firebird column types
//! - Sits between the SQL generator (which renders `FbType`s) and the
//!   statement executor (which moves bound values)
//! - Owns no connection; all operations are synchronous and pure
//!
//! It provides:
//!
//! - Character set names (`charset`)
//! - Parameterized column types with Firebird's rules (`types`)
//! - Scalar codecs, including durations stored as NUMERIC(18, 9) days (`codec`)
//! - Negotiation of which conversions the driver does natively (`capability`)
//! - A read-only registry binding types to codecs (`registry`)
//! - The bind/result pipeline running codecs per column (`pipeline`)
//!
//! # Example
//!
//! ```rust
//! use chrono::TimeDelta;
//! use rust_decimal::Decimal;
//! use sqlmodel_core::Value;
//! use sqlmodel_firebird::{ColumnBinding, TypeKind, TypeParams, TypeRegistry, bind_value};
//!
//! let registry = TypeRegistry::shared();
//! let elapsed = ColumnBinding::new(
//!     "elapsed",
//!     registry.lookup(TypeKind::Interval, &TypeParams::new())?,
//! );
//!
//! let bound = bind_value(&elapsed, Value::Interval(TimeDelta::seconds(129_600)))?;
//! assert_eq!(bound, Value::Decimal(Decimal::new(1_500_000_000, 9)));
//! # Ok::<(), sqlmodel_core::Error>(())
//! ```

pub mod capability;
pub mod charset;
pub mod codec;
pub mod config;
pub mod pipeline;
pub mod registry;
pub mod types;

pub use capability::{Conversion, DriverCapabilities, codec_for, conversion_for};
pub use charset::Charset;
pub use codec::{Codec, NumericCodec, Transform};
pub use config::FbDialectConfig;
pub use pipeline::{ColumnBinding, bind_params, bind_value, decode_row, decode_value};
pub use registry::{CodecBinding, KindInfo, TypeRegistry};
pub use types::{FbType, StorageInfo, TypeFamily, TypeKind, TypeParams, TypeSpec};
