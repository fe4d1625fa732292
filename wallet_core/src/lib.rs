//! Wallet core library.
//!
//! A [`Wallet`] holds a single [`Bitcoin`](kata_types::Bitcoin) balance.
//! Deposits always succeed; a withdrawal larger than the balance is
//! rejected with [`WalletError::InsufficientFunds`] and leaves the balance
//! untouched.
//!
//! `Wallet` mutates through `&mut self`. Share one across threads by
//! wrapping it in a `Mutex`.

pub mod error;
pub mod wallet;

pub use error::WalletError;
pub use wallet::Wallet;
