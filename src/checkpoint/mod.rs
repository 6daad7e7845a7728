use serde::{Deserialize, Serialize};

use crate::ledger::Amount;

pub type Epoch = u64;

#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("epoch {epoch} precedes the last recorded epoch {last}")]
    NonMonotonicEpoch { epoch: Epoch, last: Epoch },
}

/// A single recorded `(epoch, value)` pair.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub value: Amount,
}

/// Append-only history of a value over epochs.
///
/// Entries hold strictly increasing epochs; recording a second value within
/// the same epoch overwrites the latest entry instead of appending a
/// duplicate. Entries are never deleted, so the series answers point-in-time
/// queries for the full lifetime of the ledger.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckpointSeries {
    entries: Vec<Checkpoint>,
}

impl CheckpointSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` as of `epoch`.
    ///
    /// Fails if `epoch` is older than the last recorded epoch; the clock must
    /// not move backward within one series.
    pub fn record(&mut self, epoch: Epoch, value: Amount) -> Result<(), CheckpointError> {
        if let Some(last) = self.entries.last_mut() {
            if epoch < last.epoch {
                return Err(CheckpointError::NonMonotonicEpoch {
                    epoch,
                    last: last.epoch,
                });
            }
            if epoch == last.epoch {
                last.value = value;
                return Ok(());
            }
        }
        self.entries.push(Checkpoint { epoch, value });
        Ok(())
    }

    /// The value as of `epoch`: the most recent entry with an epoch at or
    /// before it, or zero if the series had not started yet.
    ///
    /// Binary search, O(log n) in the number of checkpoints; equivalent to a
    /// linear scan over the entries.
    pub fn value_at(&self, epoch: Epoch) -> Amount {
        let idx = self.entries.partition_point(|c| c.epoch <= epoch);
        if idx == 0 {
            0
        } else {
            self.entries[idx - 1].value
        }
    }

    /// The most recently recorded checkpoint, if any.
    pub fn latest(&self) -> Option<&Checkpoint> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
