//! Right-hand operands accepted by the coercing balance arithmetic.
//!
//! A [`BalanceOperand`] is either a typed [`Balance`] or a raw
//! `{amount, usd_value}` mapping whose values are integers, numeric strings
//! or decimals. Every other shape is rejected when converting into the
//! operand, before any arithmetic happens.

use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use super::balance_model::Balance;
use crate::constants::{AMOUNT_KEY, USD_VALUE_KEY};
use crate::errors::{Error, OperandError, Result};

/// A single loosely-typed value under `amount` or `usd_value`.
#[derive(Debug, Clone, PartialEq)]
pub enum OperandValue {
    Integer(i128),
    Text(String),
    Decimal(Decimal),
}

impl OperandValue {
    /// Coerces the value to an exact decimal. `key` is only used for error reporting.
    pub fn to_decimal(&self, key: &str) -> Result<Decimal> {
        match self {
            OperandValue::Decimal(value) => Ok(*value),
            OperandValue::Integer(value) => Decimal::from_i128(*value)
                .ok_or_else(|| invalid_value(key, format!("integer {} is out of range", value))),
            OperandValue::Text(text) => parse_numeric_text(text)
                .ok_or_else(|| invalid_value(key, format!("'{}' is not a numeric string", text))),
        }
    }
}

/// Parses plain or scientific decimal notation without rounding.
fn parse_numeric_text(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

fn invalid_value(key: &str, reason: String) -> Error {
    debug!("Rejected balance operand value under '{}': {}", key, reason);
    Error::InvalidOperand(OperandError::InvalidValue {
        key: key.to_string(),
        reason,
    })
}

macro_rules! integer_operand_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for OperandValue {
                fn from(value: $t) -> Self {
                    OperandValue::Integer(i128::from(value))
                }
            }
        )*
    };
}

integer_operand_value!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<&str> for OperandValue {
    fn from(value: &str) -> Self {
        OperandValue::Text(value.to_string())
    }
}

impl From<String> for OperandValue {
    fn from(value: String) -> Self {
        OperandValue::Text(value)
    }
}

impl From<Decimal> for OperandValue {
    fn from(value: Decimal) -> Self {
        OperandValue::Decimal(value)
    }
}

impl From<&Decimal> for OperandValue {
    fn from(value: &Decimal) -> Self {
        OperandValue::Decimal(*value)
    }
}

/// Accepted right-hand sides of [`Balance::checked_add`] and [`Balance::checked_sub`].
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceOperand {
    Balance(Balance),
    Fields(BTreeMap<String, OperandValue>),
}

impl BalanceOperand {
    /// Resolves the operand to a typed balance.
    ///
    /// A `Fields` operand must carry exactly the `amount` and `usd_value`
    /// keys and both values must coerce to decimals.
    pub fn into_balance(self) -> Result<Balance> {
        match self {
            BalanceOperand::Balance(balance) => Ok(balance),
            BalanceOperand::Fields(fields) => balance_from_fields(&fields),
        }
    }
}

fn balance_from_fields(fields: &BTreeMap<String, OperandValue>) -> Result<Balance> {
    match (fields.get(AMOUNT_KEY), fields.get(USD_VALUE_KEY)) {
        (Some(amount), Some(usd_value)) if fields.len() == 2 => Ok(Balance::new(
            amount.to_decimal(AMOUNT_KEY)?,
            usd_value.to_decimal(USD_VALUE_KEY)?,
        )),
        _ => {
            let found: Vec<String> = fields.keys().cloned().collect();
            debug!("Rejected balance operand with keys {:?}", found);
            Err(Error::InvalidOperand(OperandError::InvalidKeys { found }))
        }
    }
}

impl From<Balance> for BalanceOperand {
    fn from(balance: Balance) -> Self {
        BalanceOperand::Balance(balance)
    }
}

impl From<&Balance> for BalanceOperand {
    fn from(balance: &Balance) -> Self {
        BalanceOperand::Balance(*balance)
    }
}

impl<K, V> From<BTreeMap<K, V>> for BalanceOperand
where
    K: Into<String>,
    V: Into<OperandValue>,
{
    fn from(fields: BTreeMap<K, V>) -> Self {
        BalanceOperand::Fields(fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> From<HashMap<K, V>> for BalanceOperand
where
    K: Into<String>,
    V: Into<OperandValue>,
{
    fn from(fields: HashMap<K, V>) -> Self {
        BalanceOperand::Fields(fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for BalanceOperand
where
    K: Into<String>,
    V: Into<OperandValue>,
{
    fn from(fields: [(K, V); N]) -> Self {
        BalanceOperand::Fields(fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl TryFrom<Value> for BalanceOperand {
    type Error = Error;

    /// Only JSON objects are accepted. Values must be integers or strings;
    /// binary floating point numbers are rejected.
    fn try_from(value: Value) -> Result<Self> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                let kind = json_kind(&other);
                debug!("Rejected balance operand of type {}", kind);
                return Err(Error::InvalidOperand(OperandError::UnsupportedType(
                    kind.to_string(),
                )));
            }
        };

        let mut fields = BTreeMap::new();
        for (key, value) in object {
            let operand_value = match value {
                Value::String(text) => OperandValue::Text(text),
                Value::Number(number) => match (number.as_i64(), number.as_u64()) {
                    (Some(i), _) => OperandValue::Integer(i128::from(i)),
                    (None, Some(u)) => OperandValue::Integer(i128::from(u)),
                    _ => {
                        return Err(invalid_value(
                            &key,
                            format!(
                                "floating point number {} is not accepted, use a numeric string",
                                number
                            ),
                        ))
                    }
                },
                other => {
                    return Err(invalid_value(
                        &key,
                        format!("{} is not a number", json_kind(&other)),
                    ))
                }
            };
            fields.insert(key, operand_value);
        }
        Ok(BalanceOperand::Fields(fields))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
