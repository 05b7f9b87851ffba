use std::str::FromStr;

use chrono::TimeDelta;
use rust_decimal::Decimal;
use sqlmodel_core::{Error, Row, Value};

#[test]
fn row_typed_access() {
    let row = Row::new(
        vec!["id".into(), "price".into(), "elapsed".into(), "note".into()],
        vec![
            Value::BigInt(7),
            Value::Decimal(Decimal::from_str("19.99").unwrap()),
            Value::Interval(TimeDelta::minutes(90)),
            Value::Null,
        ],
    );

    assert_eq!(row.get_named::<i64>("id").unwrap(), 7);
    assert_eq!(
        row.get_named::<Decimal>("price").unwrap(),
        Decimal::from_str("19.99").unwrap()
    );
    assert_eq!(
        row.get_named::<TimeDelta>("elapsed").unwrap(),
        TimeDelta::minutes(90)
    );

    let err = row.get_named::<String>("note").unwrap_err();
    assert_eq!(err.column(), Some("note"));
    assert!(matches!(err, Error::Type(_)));

    let err = row.get_named::<i64>("missing").unwrap_err();
    assert!(err.to_string().contains("missing"));
}

#[test]
fn values_serialize_as_json() {
    let values = vec![
        Value::Null,
        Value::Int(1),
        Value::Decimal(Decimal::from_str("0.10").unwrap()),
        Value::Text("x".into()),
        Value::Interval(TimeDelta::seconds(-90)),
    ];
    let json = serde_json::to_string(&values).unwrap();
    let back: Vec<Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, values);
}
