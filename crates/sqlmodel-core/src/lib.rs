//! Core types and traits for SQLModel Rust.
//!
//! This crate provides the foundations dialect crates build on:
//!
//! - `Value` for dynamically-typed bind parameters and result columns
//! - `Row` for result rows sharing column metadata
//! - `SqlType` and the `ColumnType` contract for dialect column types
//! - `Error` for type, conversion and configuration failures

pub mod error;
pub mod row;
pub mod types;
pub mod value;

pub use error::{
    ConfigError, ConfigErrorKind, ConversionError, ConversionErrorKind, Error, Result, TypeError,
};
pub use row::{ColumnInfo, Row};
pub use types::{ColumnType, SqlType};
pub use value::Value;
