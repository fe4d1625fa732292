//! Core wallet struct.

use kata_types::Bitcoin;
use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// An in-memory bitcoin balance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    balance: Bitcoin,
}

impl Wallet {
    /// Create an empty wallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wallet holding `balance`.
    pub fn with_balance(balance: Bitcoin) -> Self {
        Self { balance }
    }

    /// Current balance.
    pub fn balance(&self) -> Bitcoin {
        self.balance
    }

    /// Add `amount` to the balance.
    ///
    /// Deposits are not validated: a negative amount lowers the balance.
    pub fn deposit(&mut self, amount: Bitcoin) {
        self.balance += amount;
        tracing::debug!(%amount, balance = %self.balance, "deposit");
    }

    /// Take `amount` out of the wallet.
    ///
    /// Fails with [`WalletError::InsufficientFunds`] when `amount` exceeds
    /// the balance, in which case the balance is unchanged.
    pub fn withdraw(&mut self, amount: Bitcoin) -> Result<(), WalletError> {
        if amount > self.balance {
            tracing::warn!(
                requested = %amount,
                available = %self.balance,
                "withdrawal rejected: insufficient funds"
            );
            return Err(WalletError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        tracing::debug!(%amount, balance = %self.balance, "withdraw");
        Ok(())
    }
}
