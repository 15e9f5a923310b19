//! Wire and native representations of balances and balance sheets.
//!
//! The serialized forms render every decimal as its exact string; the
//! native ("dict") forms keep decimal-typed leaves for callers that need
//! further arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::balance_model::Balance;
use crate::assets::AssetIdentifier;
use crate::constants::{AMOUNT_KEY, USD_VALUE_KEY};
use crate::errors::{Error, Result, ValidationError};

/// Native form of a balance, keyed by `amount` and `usd_value`.
///
/// This is itself a valid operand for [`Balance::checked_add`].
pub type BalanceDict = BTreeMap<&'static str, Decimal>;

/// Wire form of a [`Balance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedBalance {
    pub amount: String,
    pub usd_value: String,
}

/// Wire form of a [`BalanceSheet`](super::BalanceSheet), keyed by asset identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SerializedBalanceSheet {
    pub assets: BTreeMap<String, SerializedBalance>,
    pub liabilities: BTreeMap<String, SerializedBalance>,
}

/// Native form of a [`BalanceSheet`](super::BalanceSheet) with decimal-typed leaves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BalanceSheetDict {
    pub assets: BTreeMap<String, BalanceDict>,
    pub liabilities: BTreeMap<String, BalanceDict>,
}

pub(crate) fn balance_dict(balance: &Balance) -> BalanceDict {
    BTreeMap::from([
        (AMOUNT_KEY, balance.amount),
        (USD_VALUE_KEY, balance.usd_value),
    ])
}

pub(crate) fn serialize_entries<A: AssetIdentifier>(
    entries: &BTreeMap<A, Balance>,
) -> BTreeMap<String, SerializedBalance> {
    entries
        .iter()
        .map(|(asset, balance)| (asset.identifier(), balance.serialize()))
        .collect()
}

pub(crate) fn dict_entries<A: AssetIdentifier>(
    entries: &BTreeMap<A, Balance>,
) -> BTreeMap<String, BalanceDict> {
    entries
        .iter()
        .map(|(asset, balance)| (asset.identifier(), balance.to_dict()))
        .collect()
}

pub(crate) fn deserialize_entries<A: AssetIdentifier>(
    entries: &BTreeMap<String, SerializedBalance>,
) -> Result<BTreeMap<A, Balance>> {
    let mut result = BTreeMap::new();
    for (identifier, serialized) in entries {
        let asset = A::from_identifier(identifier)?;
        if result.insert(asset, Balance::try_from(serialized)?).is_some() {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Duplicate asset identifier '{}'",
                identifier
            ))));
        }
    }
    Ok(result)
}

fn parse_field(key: &str, value: &str) -> Result<Decimal> {
    if value.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(key.to_string())));
    }
    Ok(Decimal::from_str_exact(value)?)
}

impl TryFrom<&SerializedBalance> for Balance {
    type Error = Error;

    fn try_from(serialized: &SerializedBalance) -> Result<Self> {
        Ok(Balance::new(
            parse_field(AMOUNT_KEY, &serialized.amount)?,
            parse_field(USD_VALUE_KEY, &serialized.usd_value)?,
        ))
    }
}

impl TryFrom<SerializedBalance> for Balance {
    type Error = Error;

    fn try_from(serialized: SerializedBalance) -> Result<Self> {
        Balance::try_from(&serialized)
    }
}
