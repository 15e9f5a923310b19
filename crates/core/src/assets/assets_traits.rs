use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::Result;

/// Contract for types used as keys of a [`BalanceSheet`](crate::balances::BalanceSheet).
///
/// Identity resolution lives outside this crate; an identifier only has to
/// be orderable, hashable and convertible to and from its canonical
/// external string form (e.g. a currency or token symbol).
pub trait AssetIdentifier: Clone + Ord + Hash + Debug {
    /// Canonical string form used as the serialization key.
    fn identifier(&self) -> String;

    /// Rebuilds the identifier from its canonical string form.
    fn from_identifier(identifier: &str) -> Result<Self>;
}

impl AssetIdentifier for String {
    fn identifier(&self) -> String {
        self.clone()
    }

    fn from_identifier(identifier: &str) -> Result<Self> {
        Ok(identifier.to_string())
    }
}
