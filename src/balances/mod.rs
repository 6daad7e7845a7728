use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ledger::{AccountId, Amount};

#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    #[error("insufficient funds in account {account}")]
    InsufficientFunds { account: AccountId },
}

/// The external component holding the underlying asset.
///
/// Ledger operations call `debit` before committing any mutation: a failed
/// debit aborts the whole operation, so the ledger never records a transfer
/// the holder refused. Both calls are synchronous and complete before the
/// operation returns.
pub trait BalanceHolder {
    fn debit(&mut self, account: &AccountId, amount: Amount) -> Result<(), BalanceError>;
    fn credit(&mut self, account: &AccountId, amount: Amount);
}

/// In-memory balance holder keyed by account id.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryBalances {
    accounts: BTreeMap<AccountId, Amount>,
}

impl MemoryBalances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `amount` new units in `account`.
    pub fn mint(&mut self, account: &AccountId, amount: Amount) {
        *self.accounts.entry(account.clone()).or_default() += amount;
    }

    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.accounts.get(account).copied().unwrap_or_default()
    }
}

impl BalanceHolder for MemoryBalances {
    fn debit(&mut self, account: &AccountId, amount: Amount) -> Result<(), BalanceError> {
        let balance =
            self.accounts
                .get_mut(account)
                .ok_or_else(|| BalanceError::InsufficientFunds {
                    account: account.clone(),
                })?;
        if *balance < amount {
            return Err(BalanceError::InsufficientFunds {
                account: account.clone(),
            });
        }
        *balance -= amount;
        Ok(())
    }

    fn credit(&mut self, account: &AccountId, amount: Amount) {
        *self.accounts.entry(account.clone()).or_default() += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_and_transfer() {
        let mut balances = MemoryBalances::new();
        balances.mint(&"alice".to_string(), 1_000);
        balances.debit(&"alice".to_string(), 400).unwrap();
        balances.credit(&"bob".to_string(), 400);
        assert_eq!(balances.balance_of(&"alice".to_string()), 600);
        assert_eq!(balances.balance_of(&"bob".to_string()), 400);
    }

    #[test]
    fn debit_rejects_shortfalls() {
        let mut balances = MemoryBalances::new();
        balances.mint(&"alice".to_string(), 100);
        assert!(balances.debit(&"alice".to_string(), 101).is_err());
        assert!(balances.debit(&"nobody".to_string(), 1).is_err());
        // the failed debit left the balance untouched
        assert_eq!(balances.balance_of(&"alice".to_string()), 100);
    }
}
