//! Bind and result pipeline.
//!
//! Runs the encode half of each column's codec on parameters before they
//! reach the executor and the decode half on raw values the executor
//! yields. Native bindings are passed through without touching the codec.

#![allow(clippy::result_large_err)]

use sqlmodel_core::{ConversionError, ConversionErrorKind, Error, Result, Row, Value};

use crate::registry::CodecBinding;

/// A named column (or parameter) and its resolved type.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBinding {
    pub name: String,
    pub binding: CodecBinding,
}

impl ColumnBinding {
    pub fn new(name: impl Into<String>, binding: CodecBinding) -> Self {
        Self {
            name: name.into(),
            binding,
        }
    }

    fn type_tag(&self) -> &'static str {
        self.binding.fb_type.kind().render_tag()
    }
}

/// Encode one parameter for the driver.
pub fn bind_value(column: &ColumnBinding, value: Value) -> Result<Value> {
    if column.binding.is_native() {
        return Ok(value);
    }
    tracing::trace!(
        column = %column.name,
        type_tag = column.type_tag(),
        "Encoding bind parameter"
    );
    column
        .binding
        .encode(value)
        .map_err(|e| e.with_column(&column.name))
}

/// Encode a full parameter list, one value per column binding.
pub fn bind_params(columns: &[ColumnBinding], values: Vec<Value>) -> Result<Vec<Value>> {
    check_arity(columns.len(), values.len())?;
    columns
        .iter()
        .zip(values)
        .map(|(column, value)| bind_value(column, value))
        .collect()
}

/// Decode one raw value from the driver.
pub fn decode_value(column: &ColumnBinding, value: Value) -> Result<Value> {
    if column.binding.is_native() {
        return Ok(value);
    }
    tracing::trace!(
        column = %column.name,
        type_tag = column.type_tag(),
        "Decoding result value"
    );
    column
        .binding
        .decode(value)
        .map_err(|e| e.with_column(&column.name))
}

/// Decode a raw row. The result shares the input row's column metadata.
pub fn decode_row(columns: &[ColumnBinding], row: Row) -> Result<Row> {
    let (info, values) = row.into_parts();
    check_arity(columns.len(), values.len())?;
    let decoded = columns
        .iter()
        .zip(values)
        .map(|(column, value)| decode_value(column, value))
        .collect::<Result<Vec<_>>>()?;
    Ok(Row::with_columns(info, decoded))
}

fn check_arity(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    Err(Error::Conversion(ConversionError::new(
        ConversionErrorKind::ColumnCount,
        "ROW",
        format!("expected {} values, got {}", expected, actual),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;

    use crate::config::FbDialectConfig;
    use crate::registry::TypeRegistry;
    use crate::types::{TypeKind, TypeParams};

    fn column(registry: &TypeRegistry, name: &str, kind: TypeKind, params: TypeParams) -> ColumnBinding {
        ColumnBinding::new(name, registry.lookup(kind, &params).unwrap())
    }

    #[test]
    fn test_native_values_pass_through() {
        let registry = TypeRegistry::default();
        let col = column(&registry, "price", TypeKind::Numeric, TypeParams::new().precision(4).scale(2));
        // The driver does the range check for native decimals
        let v = Value::Decimal(Decimal::from(123_456));
        assert_eq!(bind_value(&col, v.clone()).unwrap(), v);
        assert_eq!(decode_value(&col, v.clone()).unwrap(), v);
    }

    #[test]
    fn test_errors_carry_column_name() {
        let registry = TypeRegistry::default();
        let col = column(&registry, "payload", TypeKind::Blob, TypeParams::new());
        let err = bind_value(&col, Value::Text("hi".into())).unwrap_err();
        assert_eq!(err.column(), Some("payload"));
        assert!(err.to_string().contains("payload"));

        let col = column(&registry, "elapsed", TypeKind::Interval, TypeParams::new());
        let err = bind_value(&col, Value::Interval(TimeDelta::days(10_000_000_000))).unwrap_err();
        assert!(err.is_precision_overflow());
        assert_eq!(err.column(), Some("elapsed"));
    }

    #[test]
    fn test_bind_params() {
        let registry = TypeRegistry::new(FbDialectConfig::new().native_decimal(false));
        let columns = vec![
            column(&registry, "id", TypeKind::Integer, TypeParams::new()),
            column(&registry, "amount", TypeKind::Decimal, TypeParams::new().precision(9).scale(2)),
            column(&registry, "elapsed", TypeKind::Interval, TypeParams::new()),
        ];
        let bound = bind_params(
            &columns,
            vec![
                Value::Int(1),
                Value::Text("12.345".into()),
                Value::Interval(TimeDelta::hours(36)),
            ],
        )
        .unwrap();
        assert_eq!(
            bound,
            vec![
                Value::Int(1),
                Value::Decimal(Decimal::from_str("12.35").unwrap()),
                Value::Decimal(Decimal::from_str("1.5").unwrap()),
            ]
        );

        let err = bind_params(&columns, vec![Value::Int(1)]).unwrap_err();
        assert!(matches!(
            err,
            Error::Conversion(ConversionError {
                kind: ConversionErrorKind::ColumnCount,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_row_keeps_columns() {
        let registry = TypeRegistry::default();
        let columns = vec![
            column(&registry, "name", TypeKind::VarChar, TypeParams::new().length(20)),
            column(&registry, "elapsed", TypeKind::Interval, TypeParams::new()),
            column(&registry, "data", TypeKind::Blob, TypeParams::new()),
        ];
        let row = Row::new(
            vec!["name".into(), "elapsed".into(), "data".into()],
            vec![
                Value::Text("a".into()),
                Value::Decimal(Decimal::from_str("0.5").unwrap()),
                Value::Null,
            ],
        );
        let info = row.column_info();
        let decoded = decode_row(&columns, row).unwrap();
        assert!(Arc::ptr_eq(&info, &decoded.column_info()));
        assert_eq!(decoded.get(0), Some(&Value::Text("a".into())));
        assert_eq!(
            decoded.get_by_name("elapsed"),
            Some(&Value::Interval(TimeDelta::hours(12)))
        );
        assert_eq!(decoded.get(2), Some(&Value::Null));

        let short = Row::new(vec!["name".into()], vec![Value::Text("a".into())]);
        assert!(decode_row(&columns, short).is_err());
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let registry = TypeRegistry::default();
        let col = column(&registry, "data", TypeKind::Blob, TypeParams::new());
        let err = decode_value(&col, Value::Int(3)).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
        assert_eq!(err.column(), Some("data"));
    }
}
