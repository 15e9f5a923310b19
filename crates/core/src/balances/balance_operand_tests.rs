//! Unit tests for operand coercion.

use super::*;
use crate::errors::{Error, OperandError};
use rust_decimal_macros::dec;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_operand_value_coercion() {
    assert_eq!(OperandValue::from(42).to_decimal("amount").unwrap(), dec!(42));
    assert_eq!(OperandValue::from(-7i64).to_decimal("amount").unwrap(), dec!(-7));
    assert_eq!(OperandValue::from(u64::MAX).to_decimal("amount").unwrap(), dec!(18446744073709551615));
    assert_eq!(OperandValue::from("0.5").to_decimal("amount").unwrap(), dec!(0.5));
    assert_eq!(OperandValue::from(" 5.10 ").to_decimal("amount").unwrap(), dec!(5.1));
    assert_eq!(OperandValue::from("1e3").to_decimal("amount").unwrap(), dec!(1000));
    assert_eq!(OperandValue::from(dec!(3.21)).to_decimal("amount").unwrap(), dec!(3.21));
}

#[test]
fn test_operand_value_rejects_non_numeric_text() {
    for text in ["", "  ", "fasd", "1.2.3", "five"] {
        let err = OperandValue::from(text).to_decimal("usd_value").unwrap_err();
        match err {
            Error::InvalidOperand(OperandError::InvalidValue { key, .. }) => {
                assert_eq!(key, "usd_value")
            }
            other => panic!("unexpected error for {:?}: {:?}", text, other),
        }
    }
}

#[test]
fn test_operand_value_rejects_out_of_range_integer() {
    let err = OperandValue::from(i128::MAX).to_decimal("amount").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidOperand(OperandError::InvalidValue { .. })
    ));
}

#[test]
fn test_balance_operand_from_balance() {
    let balance = Balance::new(dec!(1), dec!(2));
    assert_eq!(BalanceOperand::from(balance).into_balance().unwrap(), balance);
    assert_eq!(BalanceOperand::from(&balance).into_balance().unwrap(), balance);
}

#[test]
fn test_balance_operand_from_maps() {
    let expected = Balance::new(dec!(5), dec!(6));

    let hash_map: HashMap<String, OperandValue> = HashMap::from([
        ("amount".to_string(), OperandValue::Integer(5)),
        ("usd_value".to_string(), OperandValue::Text("6".to_string())),
    ]);
    assert_eq!(BalanceOperand::from(hash_map).into_balance().unwrap(), expected);

    let btree_map = BTreeMap::from([("amount", "5"), ("usd_value", "6")]);
    assert_eq!(BalanceOperand::from(btree_map).into_balance().unwrap(), expected);
}

#[test]
fn test_balance_operand_from_json_object() {
    let operand = BalanceOperand::try_from(json!({"amount": 5, "usd_value": "6.25"})).unwrap();
    assert_eq!(
        operand,
        BalanceOperand::Fields(BTreeMap::from([
            ("amount".to_string(), OperandValue::Integer(5)),
            ("usd_value".to_string(), OperandValue::Text("6.25".to_string())),
        ]))
    );
    assert_eq!(operand.into_balance().unwrap(), Balance::new(dec!(5), dec!(6.25)));
}

#[test]
fn test_balance_operand_rejects_non_object_json() {
    let cases = [
        (json!(5), "number"),
        (json!("5"), "string"),
        (json!([5, 6]), "array"),
        (json!(null), "null"),
        (json!(true), "bool"),
    ];
    for (value, kind) in cases {
        assert_eq!(
            BalanceOperand::try_from(value).unwrap_err(),
            Error::InvalidOperand(OperandError::UnsupportedType(kind.to_string()))
        );
    }
}

#[test]
fn test_balance_operand_rejects_json_floats_and_non_numbers() {
    let float = BalanceOperand::try_from(json!({"amount": 1.5, "usd_value": "2"}));
    assert!(matches!(
        float,
        Err(Error::InvalidOperand(OperandError::InvalidValue { ref key, .. })) if key == "amount"
    ));

    let nested = BalanceOperand::try_from(json!({"amount": "1", "usd_value": {"v": 2}}));
    assert!(matches!(
        nested,
        Err(Error::InvalidOperand(OperandError::InvalidValue { ref key, .. })) if key == "usd_value"
    ));
}

#[test]
fn test_fields_with_wrong_key_set_are_rejected() {
    let operand = BalanceOperand::from([("amount", 1), ("usd_value", 2), ("price", 3)]);
    assert_eq!(
        operand.into_balance().unwrap_err(),
        Error::InvalidOperand(OperandError::InvalidKeys {
            found: vec![
                "amount".to_string(),
                "price".to_string(),
                "usd_value".to_string()
            ]
        })
    );

    let empty: BTreeMap<String, OperandValue> = BTreeMap::new();
    assert!(BalanceOperand::from(empty).into_balance().is_err());
}
