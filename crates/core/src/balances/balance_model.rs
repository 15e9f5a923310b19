//! Single-asset balance: a quantity and its fiat-equivalent value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::balance_operand::BalanceOperand;
use super::balance_serialization::{balance_dict, BalanceDict, SerializedBalance};
use crate::errors::{Error, Result};

/// Quantity of one asset together with its USD value.
///
/// Both components are exact decimals. On the wire a balance is the object
/// `{"amount": "<decimal>", "usd_value": "<decimal>"}` with string-rendered
/// decimals, so no precision is lost through binary floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Balance {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub usd_value: Decimal,
}

impl Balance {
    /// The additive identity, also the implicit balance of an absent sheet entry.
    pub const ZERO: Balance = Balance {
        amount: Decimal::ZERO,
        usd_value: Decimal::ZERO,
    };

    pub fn new(amount: Decimal, usd_value: Decimal) -> Self {
        Balance { amount, usd_value }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero() && self.usd_value.is_zero()
    }

    /// Adds a balance or an `{amount, usd_value}` mapping.
    ///
    /// Mapping values may be integers, numeric strings or decimals. Any other
    /// operand shape, key set or value fails with [`Error::InvalidOperand`].
    pub fn checked_add<O>(&self, rhs: O) -> Result<Balance>
    where
        O: TryInto<BalanceOperand>,
        Error: From<O::Error>,
    {
        let operand: BalanceOperand = rhs.try_into()?;
        self.combine(&operand.into_balance()?, Decimal::checked_add, "addition")
    }

    /// Subtracts a balance or an `{amount, usd_value}` mapping.
    ///
    /// Same operand rules as [`Balance::checked_add`].
    pub fn checked_sub<O>(&self, rhs: O) -> Result<Balance>
    where
        O: TryInto<BalanceOperand>,
        Error: From<O::Error>,
    {
        let operand: BalanceOperand = rhs.try_into()?;
        self.combine(&operand.into_balance()?, Decimal::checked_sub, "subtraction")
    }

    /// `self = self + rhs`. On error `self` is left unchanged.
    pub fn try_add_assign<O>(&mut self, rhs: O) -> Result<()>
    where
        O: TryInto<BalanceOperand>,
        Error: From<O::Error>,
    {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// `self = self - rhs`. On error `self` is left unchanged.
    pub fn try_sub_assign<O>(&mut self, rhs: O) -> Result<()>
    where
        O: TryInto<BalanceOperand>,
        Error: From<O::Error>,
    {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    fn combine(
        &self,
        other: &Balance,
        op: fn(Decimal, Decimal) -> Option<Decimal>,
        name: &str,
    ) -> Result<Balance> {
        let amount = op(self.amount, other.amount)
            .ok_or_else(|| Error::Arithmetic(format!("Balance amount {} overflowed", name)))?;
        let usd_value = op(self.usd_value, other.usd_value)
            .ok_or_else(|| Error::Arithmetic(format!("Balance usd_value {} overflowed", name)))?;
        Ok(Balance { amount, usd_value })
    }

    /// Wire form with exact decimal strings.
    pub fn serialize(&self) -> SerializedBalance {
        SerializedBalance {
            amount: self.amount.to_string(),
            usd_value: self.usd_value.to_string(),
        }
    }

    /// Native form with decimal values.
    pub fn to_dict(&self) -> BalanceDict {
        balance_dict(self)
    }
}

// Operators on typed balances cannot fail on operand shape. Like the
// `Decimal` operators they panic on overflow; use `checked_add`/`checked_sub`
// to get an error instead.

impl Add for Balance {
    type Output = Balance;

    fn add(self, rhs: Balance) -> Balance {
        Balance {
            amount: self.amount + rhs.amount,
            usd_value: self.usd_value + rhs.usd_value,
        }
    }
}

impl Add<&Balance> for Balance {
    type Output = Balance;

    fn add(self, rhs: &Balance) -> Balance {
        self + *rhs
    }
}

impl Sub for Balance {
    type Output = Balance;

    fn sub(self, rhs: Balance) -> Balance {
        Balance {
            amount: self.amount - rhs.amount,
            usd_value: self.usd_value - rhs.usd_value,
        }
    }
}

impl Sub<&Balance> for Balance {
    type Output = Balance;

    fn sub(self, rhs: &Balance) -> Balance {
        self - *rhs
    }
}

impl Neg for Balance {
    type Output = Balance;

    fn neg(self) -> Balance {
        Balance {
            amount: -self.amount,
            usd_value: -self.usd_value,
        }
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Balance) {
        *self = *self + rhs;
    }
}

impl AddAssign<&Balance> for Balance {
    fn add_assign(&mut self, rhs: &Balance) {
        *self = *self + rhs;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Balance) {
        *self = *self - rhs;
    }
}

impl SubAssign<&Balance> for Balance {
    fn sub_assign(&mut self, rhs: &Balance) {
        *self = *self - rhs;
    }
}

impl Sum for Balance {
    fn sum<I: Iterator<Item = Balance>>(iter: I) -> Balance {
        iter.fold(Balance::ZERO, |acc, balance| acc + balance)
    }
}

impl<'a> Sum<&'a Balance> for Balance {
    fn sum<I: Iterator<Item = &'a Balance>>(iter: I) -> Balance {
        iter.fold(Balance::ZERO, |acc, balance| acc + balance)
    }
}
