//! Multi-asset balance sheet: asset-keyed balances split into assets and liabilities.

use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::balance_model::Balance;
use super::balance_serialization::{
    deserialize_entries, dict_entries, serialize_entries, BalanceSheetDict,
    SerializedBalanceSheet,
};
use crate::assets::{Asset, AssetIdentifier};
use crate::errors::{Error, Result};

/// Per-asset balances of one side of a sheet.
pub type AssetBalances<A = Asset> = BTreeMap<A, Balance>;

/// Assets and liabilities, each mapping an asset identifier to a [`Balance`].
///
/// A key is present only when some contribution exists for that asset.
/// Arithmetic keeps the union of the operands' keys and never prunes zero or
/// negative results, so a sheet holding a zero balance for an asset is not
/// equal to a sheet without that asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSheet<A: AssetIdentifier = Asset> {
    pub assets: AssetBalances<A>,
    pub liabilities: AssetBalances<A>,
}

impl<A: AssetIdentifier> Default for BalanceSheet<A> {
    fn default() -> Self {
        BalanceSheet {
            assets: BTreeMap::new(),
            liabilities: BTreeMap::new(),
        }
    }
}

impl<A: AssetIdentifier> BalanceSheet<A> {
    pub fn new(assets: AssetBalances<A>, liabilities: AssetBalances<A>) -> Self {
        BalanceSheet {
            assets,
            liabilities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.liabilities.is_empty()
    }

    /// Adds `balance` to the asset entry, inserting the key when absent.
    pub fn accumulate_asset(&mut self, asset: A, balance: Balance) {
        *self.assets.entry(asset).or_default() += balance;
    }

    /// Adds `balance` to the liability entry, inserting the key when absent.
    pub fn accumulate_liability(&mut self, asset: A, balance: Balance) {
        *self.liabilities.entry(asset).or_default() += balance;
    }

    /// Per-key sum of both sides. Fails instead of panicking on decimal overflow.
    pub fn checked_add(&self, rhs: &BalanceSheet<A>) -> Result<BalanceSheet<A>> {
        Ok(BalanceSheet {
            assets: checked_merge(&self.assets, &rhs.assets, Decimal::checked_add)?,
            liabilities: checked_merge(
                &self.liabilities,
                &rhs.liabilities,
                Decimal::checked_add,
            )?,
        })
    }

    /// Per-key difference of both sides. Fails instead of panicking on decimal overflow.
    pub fn checked_sub(&self, rhs: &BalanceSheet<A>) -> Result<BalanceSheet<A>> {
        Ok(BalanceSheet {
            assets: checked_merge(&self.assets, &rhs.assets, Decimal::checked_sub)?,
            liabilities: checked_merge(
                &self.liabilities,
                &rhs.liabilities,
                Decimal::checked_sub,
            )?,
        })
    }

    /// Wire form: identifiers as strings, decimals as exact strings.
    pub fn serialize(&self) -> SerializedBalanceSheet {
        SerializedBalanceSheet {
            assets: serialize_entries(&self.assets),
            liabilities: serialize_entries(&self.liabilities),
        }
    }

    /// Native form: identifiers as strings, decimals left as decimals.
    pub fn to_dict(&self) -> BalanceSheetDict {
        BalanceSheetDict {
            assets: dict_entries(&self.assets),
            liabilities: dict_entries(&self.liabilities),
        }
    }
}

fn merge_into<A: AssetIdentifier>(
    target: &mut AssetBalances<A>,
    other: &AssetBalances<A>,
    negate: bool,
) {
    for (asset, balance) in other {
        let entry = target.entry(asset.clone()).or_default();
        if negate {
            *entry -= balance;
        } else {
            *entry += balance;
        }
    }
}

fn checked_merge<A: AssetIdentifier>(
    left: &AssetBalances<A>,
    right: &AssetBalances<A>,
    op: fn(Decimal, Decimal) -> Option<Decimal>,
) -> Result<AssetBalances<A>> {
    let mut result = left.clone();
    for (asset, balance) in right {
        let entry = result.entry(asset.clone()).or_default();
        match (op(entry.amount, balance.amount), op(entry.usd_value, balance.usd_value)) {
            (Some(amount), Some(usd_value)) => *entry = Balance::new(amount, usd_value),
            _ => {
                return Err(Error::Arithmetic(format!("Balance of {:?} overflowed", asset)))
            }
        }
    }
    Ok(result)
}

impl<A: AssetIdentifier> TryFrom<&SerializedBalanceSheet> for BalanceSheet<A> {
    type Error = Error;

    fn try_from(serialized: &SerializedBalanceSheet) -> Result<Self> {
        Ok(BalanceSheet {
            assets: deserialize_entries(&serialized.assets)?,
            liabilities: deserialize_entries(&serialized.liabilities)?,
        })
    }
}

impl<A: AssetIdentifier> TryFrom<SerializedBalanceSheet> for BalanceSheet<A> {
    type Error = Error;

    fn try_from(serialized: SerializedBalanceSheet) -> Result<Self> {
        BalanceSheet::try_from(&serialized)
    }
}

impl<A: AssetIdentifier> AddAssign<&BalanceSheet<A>> for BalanceSheet<A> {
    fn add_assign(&mut self, rhs: &BalanceSheet<A>) {
        merge_into(&mut self.assets, &rhs.assets, false);
        merge_into(&mut self.liabilities, &rhs.liabilities, false);
    }
}

impl<A: AssetIdentifier> AddAssign for BalanceSheet<A> {
    fn add_assign(&mut self, rhs: BalanceSheet<A>) {
        *self += &rhs;
    }
}

impl<A: AssetIdentifier> SubAssign<&BalanceSheet<A>> for BalanceSheet<A> {
    fn sub_assign(&mut self, rhs: &BalanceSheet<A>) {
        merge_into(&mut self.assets, &rhs.assets, true);
        merge_into(&mut self.liabilities, &rhs.liabilities, true);
    }
}

impl<A: AssetIdentifier> SubAssign for BalanceSheet<A> {
    fn sub_assign(&mut self, rhs: BalanceSheet<A>) {
        *self -= &rhs;
    }
}

impl<A: AssetIdentifier> Add for BalanceSheet<A> {
    type Output = BalanceSheet<A>;

    fn add(mut self, rhs: BalanceSheet<A>) -> BalanceSheet<A> {
        self += &rhs;
        self
    }
}

impl<A: AssetIdentifier> Add<&BalanceSheet<A>> for BalanceSheet<A> {
    type Output = BalanceSheet<A>;

    fn add(mut self, rhs: &BalanceSheet<A>) -> BalanceSheet<A> {
        self += rhs;
        self
    }
}

impl<A: AssetIdentifier> Add for &BalanceSheet<A> {
    type Output = BalanceSheet<A>;

    fn add(self, rhs: Self) -> BalanceSheet<A> {
        self.clone() + rhs
    }
}

impl<A: AssetIdentifier> Sub for BalanceSheet<A> {
    type Output = BalanceSheet<A>;

    fn sub(mut self, rhs: BalanceSheet<A>) -> BalanceSheet<A> {
        self -= &rhs;
        self
    }
}

impl<A: AssetIdentifier> Sub<&BalanceSheet<A>> for BalanceSheet<A> {
    type Output = BalanceSheet<A>;

    fn sub(mut self, rhs: &BalanceSheet<A>) -> BalanceSheet<A> {
        self -= rhs;
        self
    }
}

impl<A: AssetIdentifier> Sub for &BalanceSheet<A> {
    type Output = BalanceSheet<A>;

    fn sub(self, rhs: Self) -> BalanceSheet<A> {
        self.clone() - rhs
    }
}

impl<A: AssetIdentifier> Neg for BalanceSheet<A> {
    type Output = BalanceSheet<A>;

    fn neg(self) -> BalanceSheet<A> {
        BalanceSheet {
            assets: self.assets.into_iter().map(|(a, b)| (a, -b)).collect(),
            liabilities: self.liabilities.into_iter().map(|(a, b)| (a, -b)).collect(),
        }
    }
}

impl<A: AssetIdentifier> Sum for BalanceSheet<A> {
    fn sum<I: Iterator<Item = BalanceSheet<A>>>(iter: I) -> BalanceSheet<A> {
        let mut count = 0usize;
        let total = iter.fold(BalanceSheet::default(), |acc, sheet| {
            count += 1;
            acc + sheet
        });
        debug!(
            "Aggregated {} balance sheets into {} asset and {} liability entries",
            count,
            total.assets.len(),
            total.liabilities.len()
        );
        total
    }
}

impl<'a, A: AssetIdentifier + 'a> Sum<&'a BalanceSheet<A>> for BalanceSheet<A> {
    fn sum<I: Iterator<Item = &'a BalanceSheet<A>>>(iter: I) -> BalanceSheet<A> {
        iter.cloned().sum()
    }
}
