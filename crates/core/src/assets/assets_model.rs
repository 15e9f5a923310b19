//! Asset identifier model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::assets_traits::AssetIdentifier;
use crate::errors::{Error, Result, ValidationError};

/// Opaque asset identifier (e.g. `USD`, `ETH`).
///
/// The symbol is kept exactly as given; two assets are equal iff their
/// symbols are byte-equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Asset(String);

impl Asset {
    /// Creates an asset from its symbol. Empty or whitespace-only symbols are rejected.
    pub fn new(symbol: impl Into<String>) -> Result<Self> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Asset symbol cannot be empty".to_string(),
            )));
        }
        Ok(Asset(symbol))
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Asset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Asset::new(s)
    }
}

impl TryFrom<String> for Asset {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Asset::new(value)
    }
}

impl From<Asset> for String {
    fn from(asset: Asset) -> Self {
        asset.0
    }
}

impl AsRef<str> for Asset {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AssetIdentifier for Asset {
    fn identifier(&self) -> String {
        self.0.clone()
    }

    fn from_identifier(identifier: &str) -> Result<Self> {
        Asset::new(identifier)
    }
}
