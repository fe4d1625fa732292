#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use kata_types::Bitcoin;
use kata_wallet_core::{Wallet, WalletError};

#[derive(Arbitrary, Debug)]
enum Op {
    Deposit(i64),
    Withdraw(i64),
}

// Arbitrary deposit/withdraw sequences must never panic, and a rejected
// withdrawal must leave the balance exactly as it was.
fuzz_target!(|input: (i64, Vec<Op>)| {
    let (initial, ops) = input;
    let mut wallet = Wallet::with_balance(Bitcoin::from(initial));

    for op in ops {
        match op {
            Op::Deposit(units) => wallet.deposit(units.into()),
            Op::Withdraw(units) => {
                let before = wallet.balance();
                let amount = Bitcoin::from(units);
                match wallet.withdraw(amount) {
                    Ok(()) => assert!(amount <= before),
                    Err(WalletError::InsufficientFunds { requested, available }) => {
                        assert_eq!(requested, amount);
                        assert_eq!(available, before);
                        assert_eq!(wallet.balance(), before);
                    }
                }
            }
        }
    }
});
