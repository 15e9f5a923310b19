//! Balance Sheet Core - exact-decimal balances and asset-keyed balance sheets.
//!
//! This crate contains the value objects consumed by reporting and
//! accounting layers: a single-asset [`Balance`] and a multi-asset
//! [`BalanceSheet`]. It performs no I/O, price lookups or asset
//! resolution; identifiers come in through the [`AssetIdentifier`] trait.

pub mod assets;
pub mod balances;
pub mod constants;
pub mod errors;

// Re-export common types from asset and balance modules
pub use assets::*;
pub use balances::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
