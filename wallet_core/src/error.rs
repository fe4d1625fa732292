use kata_types::Bitcoin;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("cannot withdraw {requested}, only {available} available")]
    InsufficientFunds {
        requested: Bitcoin,
        available: Bitcoin,
    },
}
