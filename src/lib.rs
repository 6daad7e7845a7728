//! Stake-weighted dividend ledger with checkpointed history.
//!
//! This crate exposes the building blocks of a dividend-paying staking pool:
//!
//! * [`ledger`] — pool state, participant accounts, and the staking,
//!   distribution, withdrawal, and administration operations.
//! * [`accrual`] — the scaled-accumulator math that makes a distribution
//!   O(1) regardless of participant count.
//! * [`checkpoint`] — append-only `(epoch, value)` history series answering
//!   point-in-time queries in O(log n).
//! * [`balances`] — the external balance-holder interface the ledger debits
//!   and credits, plus an in-memory implementation.
//!
//! The modules are intentionally small and focused so that host applications
//! (token components, sale schedulers, RPC frontends, …) can drive the ledger
//! without pulling in bespoke plumbing of their own.

pub mod accrual;
pub mod balances;
pub mod checkpoint;
pub mod ledger;

pub use accrual::DIVIDEND_SCALE;
pub use balances::{BalanceError, BalanceHolder, MemoryBalances};
pub use checkpoint::{Checkpoint, CheckpointError, CheckpointSeries, Epoch};
pub use ledger::{
    AccountId, Amount, DividendLedger, LedgerError, LedgerEvent, LedgerSnapshot,
    ParticipantAccount, TaxPolicy, UNIT,
};
