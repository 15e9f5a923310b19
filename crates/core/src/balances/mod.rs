//! Balances module - single-asset balances, balance sheets and their
//! serialized and native representations.

mod balance_model;
mod balance_operand;
mod balance_serialization;
mod balance_sheet_model;

pub use balance_model::Balance;
pub use balance_operand::{BalanceOperand, OperandValue};
pub use balance_serialization::{
    BalanceDict, BalanceSheetDict, SerializedBalance, SerializedBalanceSheet,
};
pub use balance_sheet_model::{AssetBalances, BalanceSheet};

#[cfg(test)]
mod balance_operand_tests;
