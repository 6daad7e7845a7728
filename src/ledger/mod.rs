use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::accrual;
use crate::balances::{BalanceError, BalanceHolder};
use crate::checkpoint::{CheckpointError, CheckpointSeries, Epoch};

pub type AccountId = String;
pub type Amount = u64;

/// One whole token expressed in minimal units.
pub const UNIT: Amount = 100_000_000;

/// Basis-point denominator; tax and fee rates are integers out of 10000.
pub const MAX_BP: u32 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger is not active yet")]
    NotActive,
    #[error("amount must be greater than zero")]
    ZeroAmount,
    #[error("must unstake at least one whole token")]
    BelowMinimum,
    #[error("cannot unstake more than the staked principal")]
    ExceedsPrincipal,
    #[error("cannot take more dividends than accrued")]
    ExceedsDividends,
    #[error("cannot distribute while the pool holds no principal")]
    EmptyPool,
    #[error("account {account} is already registered")]
    AlreadyRegistered { account: AccountId },
    #[error("amount does not cover the registration fee of {fee}")]
    InsufficientRegistrationFee { fee: Amount },
    #[error("rate {bp} exceeds the {MAX_BP} basis point maximum")]
    InvalidBasisPoints { bp: u32 },
    #[error("referred registration fee must not be below the base fee")]
    InvalidFeeSchedule,
    #[error("caller is not the ledger owner")]
    Unauthorized,
    #[error("arithmetic overflow in pool accounting")]
    Overflow,
    #[error(transparent)]
    Balance(#[from] BalanceError),
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

/// Tax applied to `amount` at `bp` basis points, rounded down.
pub fn tax_amount(amount: Amount, bp: u32) -> Amount {
    (amount as u128 * bp as u128 / MAX_BP as u128) as Amount
}

/// Tax rates and registration fee schedule.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxPolicy {
    pub stake_tax_bp: u32,
    pub unstake_tax_bp: u32,
    pub registration_fee_with_referrer: Amount,
    pub registration_fee_without_referrer: Amount,
}

impl TaxPolicy {
    pub fn registration_fee(&self, with_referrer: bool) -> Amount {
        if with_referrer {
            self.registration_fee_with_referrer
        } else {
            self.registration_fee_without_referrer
        }
    }

    /// Portion of the referred fee paid out to the referrer.
    pub fn referral_share(&self) -> Amount {
        self.registration_fee_with_referrer - self.registration_fee_without_referrer
    }

    fn validate(&self) -> Result<(), LedgerError> {
        for bp in [self.stake_tax_bp, self.unstake_tax_bp] {
            if bp > MAX_BP {
                return Err(LedgerError::InvalidBasisPoints { bp });
            }
        }
        if self.registration_fee_with_referrer < self.registration_fee_without_referrer {
            return Err(LedgerError::InvalidFeeSchedule);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantAccount {
    /// Currently staked amount, eligible for proportional dividends.
    pub principal: Amount,
    /// Dividends credited by settlement but not yet withdrawn or reinvested.
    pub settled_dividends: Amount,
    /// Accumulator value observed at the last settlement.
    pub dividend_baseline: u128,
    /// Set once the one-time registration fee has been paid; survives a full
    /// unstake.
    pub registered: bool,
    pub referrer: Option<AccountId>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    Registered {
        participant: AccountId,
        referrer: Option<AccountId>,
        fee: Amount,
        epoch: Epoch,
    },
    Staked {
        participant: AccountId,
        amount: Amount,
        tax: Amount,
        epoch: Epoch,
    },
    Unstaked {
        participant: AccountId,
        amount: Amount,
        tax: Amount,
        epoch: Epoch,
    },
    Distributed {
        from: AccountId,
        amount: Amount,
        epoch: Epoch,
    },
    DividendsWithdrawn {
        participant: AccountId,
        amount: Amount,
        epoch: Epoch,
    },
    DividendsReinvested {
        participant: AccountId,
        amount: Amount,
        epoch: Epoch,
    },
}

/// Point-in-time view of the ledger with an auditable state root.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub epoch: Epoch,
    pub total_principal: Amount,
    pub total_distributed: Amount,
    pub participant_count: u64,
    pub accounts: BTreeMap<AccountId, ParticipantAccount>,
    pub events: Vec<LedgerEvent>,
    #[serde(with = "serde_root")]
    pub state_root: [u8; 32],
}

/// Stake-weighted dividend pool.
///
/// Owns every participant account and checkpoint sequence; all interaction
/// goes through the operations below. Distributions advance a pool-wide
/// scaled accumulator instead of touching each account, so `distribute` is
/// O(1) regardless of participant count; per-account accrual is computed
/// lazily at settlement time.
///
/// Every operation validates its inputs (activity window, epoch
/// monotonicity, amount bounds, overflow, external debit) before mutating
/// anything, so a failed operation leaves the pool, the balance holder, and
/// all checkpoint sequences unchanged. Operations take `&mut self`; a
/// multi-threaded host serializes them by holding exclusive access to the
/// ledger.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DividendLedger {
    owner: AccountId,
    policy: TaxPolicy,
    start_epoch: Option<Epoch>,
    last_epoch: Epoch,
    total_principal: Amount,
    dividend_accumulator: u128,
    total_distributed: Amount,
    participant_count: u64,
    accounts: BTreeMap<AccountId, ParticipantAccount>,
    account_history: BTreeMap<AccountId, CheckpointSeries>,
    pool_history: CheckpointSeries,
    events: Vec<LedgerEvent>,
}

impl DividendLedger {
    pub fn new(owner: AccountId, policy: TaxPolicy) -> Result<Self, LedgerError> {
        policy.validate()?;
        Ok(Self {
            owner,
            policy,
            start_epoch: None,
            last_epoch: 0,
            total_principal: 0,
            dividend_accumulator: 0,
            total_distributed: 0,
            participant_count: 0,
            accounts: BTreeMap::new(),
            account_history: BTreeMap::new(),
            pool_history: CheckpointSeries::new(),
            events: Vec::new(),
        })
    }

    // ---- queries ---------------------------------------------------------

    /// Dividends accrued and not yet withdrawn or reinvested. Pure: calling
    /// it never changes what a later call returns.
    pub fn pending_dividends(&self, participant: &AccountId) -> Amount {
        match self.accounts.get(participant) {
            Some(account) => {
                account.settled_dividends
                    + accrual::accrued_since(
                        account.principal,
                        self.dividend_accumulator,
                        account.dividend_baseline,
                    )
            }
            None => 0,
        }
    }

    pub fn stake_value(&self, participant: &AccountId) -> Amount {
        self.accounts
            .get(participant)
            .map(|a| a.principal)
            .unwrap_or_default()
    }

    pub fn total_staked(&self) -> Amount {
        self.total_principal
    }

    pub fn total_distributed(&self) -> Amount {
        self.total_distributed
    }

    pub fn participant_count(&self) -> u64 {
        self.participant_count
    }

    pub fn is_registered(&self, participant: &AccountId) -> bool {
        self.accounts
            .get(participant)
            .map(|a| a.registered)
            .unwrap_or(false)
    }

    pub fn is_active(&self, epoch: Epoch) -> bool {
        matches!(self.start_epoch, Some(start) if epoch >= start)
    }

    /// The participant's principal as of `epoch`.
    pub fn stake_value_at(&self, participant: &AccountId, epoch: Epoch) -> Amount {
        self.account_history
            .get(participant)
            .map(|series| series.value_at(epoch))
            .unwrap_or_default()
    }

    /// The pool total as of `epoch`.
    pub fn total_staked_at(&self, epoch: Epoch) -> Amount {
        self.pool_history.value_at(epoch)
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn policy(&self) -> &TaxPolicy {
        &self.policy
    }

    // ---- operations ------------------------------------------------------

    /// Pay the one-time registration fee from the participant's external
    /// balance. With a referrer the fee is higher and the referrer receives
    /// the difference over the base fee; the owner collects the rest.
    pub fn register<B: BalanceHolder>(
        &mut self,
        balances: &mut B,
        epoch: Epoch,
        participant: &AccountId,
        referrer: Option<&AccountId>,
    ) -> Result<(), LedgerError> {
        self.ensure_active(epoch)?;
        self.ensure_epoch(epoch)?;
        self.ensure_not_registered(participant)?;
        let fee = self.policy.registration_fee(referrer.is_some());
        balances.debit(participant, fee)?;
        self.route_registration_fee(balances, referrer, fee);
        let account = self.accounts.entry(participant.clone()).or_default();
        account.registered = true;
        account.referrer = referrer.cloned();
        self.events.push(LedgerEvent::Registered {
            participant: participant.clone(),
            referrer: referrer.cloned(),
            fee,
            epoch,
        });
        self.last_epoch = epoch;
        Ok(())
    }

    /// Move `amount` from the participant's external balance into staked
    /// principal. The stake tax is carved out of `amount` and routed to the
    /// owner; only the remainder earns dividends.
    pub fn stake<B: BalanceHolder>(
        &mut self,
        balances: &mut B,
        epoch: Epoch,
        participant: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_active(epoch)?;
        self.ensure_epoch(epoch)?;
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let tax = tax_amount(amount, self.policy.stake_tax_bp);
        let net = amount - tax;
        let new_total = self
            .total_principal
            .checked_add(net)
            .ok_or(LedgerError::Overflow)?;
        balances.debit(participant, amount)?;
        if tax > 0 {
            balances.credit(&self.owner, tax);
        }
        self.add_principal(participant, net, epoch, new_total)?;
        self.events.push(LedgerEvent::Staked {
            participant: participant.clone(),
            amount,
            tax,
            epoch,
        });
        self.last_epoch = epoch;
        log::debug!("{participant} staked {amount} (tax {tax})");
        Ok(())
    }

    /// Registration and stake in one transfer: the applicable fee is carved
    /// out of `amount` itself and the remainder is staked under the usual
    /// stake-tax rules.
    pub fn register_and_stake<B: BalanceHolder>(
        &mut self,
        balances: &mut B,
        epoch: Epoch,
        participant: &AccountId,
        amount: Amount,
        referrer: Option<&AccountId>,
    ) -> Result<(), LedgerError> {
        self.ensure_active(epoch)?;
        self.ensure_epoch(epoch)?;
        self.ensure_not_registered(participant)?;
        let fee = self.policy.registration_fee(referrer.is_some());
        if amount < fee {
            return Err(LedgerError::InsufficientRegistrationFee { fee });
        }
        let staked = amount - fee;
        if staked == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let tax = tax_amount(staked, self.policy.stake_tax_bp);
        let net = staked - tax;
        let new_total = self
            .total_principal
            .checked_add(net)
            .ok_or(LedgerError::Overflow)?;
        balances.debit(participant, amount)?;
        self.route_registration_fee(balances, referrer, fee);
        if tax > 0 {
            balances.credit(&self.owner, tax);
        }
        let account = self.accounts.entry(participant.clone()).or_default();
        account.registered = true;
        account.referrer = referrer.cloned();
        self.add_principal(participant, net, epoch, new_total)?;
        self.events.push(LedgerEvent::Registered {
            participant: participant.clone(),
            referrer: referrer.cloned(),
            fee,
            epoch,
        });
        self.events.push(LedgerEvent::Staked {
            participant: participant.clone(),
            amount: staked,
            tax,
            epoch,
        });
        self.last_epoch = epoch;
        Ok(())
    }

    /// Return `amount` of principal to the participant's external balance,
    /// minus the unstake tax. Settled dividends are untouched.
    pub fn unstake<B: BalanceHolder>(
        &mut self,
        balances: &mut B,
        epoch: Epoch,
        participant: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_active(epoch)?;
        self.ensure_epoch(epoch)?;
        if amount < UNIT {
            return Err(LedgerError::BelowMinimum);
        }
        if amount > self.stake_value(participant) {
            return Err(LedgerError::ExceedsPrincipal);
        }
        let tax = tax_amount(amount, self.policy.unstake_tax_bp);
        let accumulator = self.dividend_accumulator;
        let account = self
            .accounts
            .get_mut(participant)
            .ok_or(LedgerError::ExceedsPrincipal)?;
        settle(account, accumulator);
        account.principal -= amount;
        let remaining = account.principal;
        self.total_principal -= amount;
        if remaining == 0 {
            self.participant_count -= 1;
        }
        self.record_checkpoints(participant, remaining, epoch)?;
        balances.credit(participant, amount - tax);
        if tax > 0 {
            balances.credit(&self.owner, tax);
        }
        self.events.push(LedgerEvent::Unstaked {
            participant: participant.clone(),
            amount,
            tax,
            epoch,
        });
        self.last_epoch = epoch;
        log::debug!("{participant} unstaked {amount} (tax {tax})");
        Ok(())
    }

    /// Distribute `amount` from `from`'s external balance proportionally
    /// across all staked principal.
    ///
    /// Advances the scaled accumulator by `amount / total_principal`; the
    /// fractional remainder below `1/DIVIDEND_SCALE` per unit is forfeited.
    /// While the pool holds no principal the accumulator is frozen and
    /// distribution is rejected.
    pub fn distribute<B: BalanceHolder>(
        &mut self,
        balances: &mut B,
        epoch: Epoch,
        from: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_active(epoch)?;
        self.ensure_epoch(epoch)?;
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if self.total_principal == 0 {
            return Err(LedgerError::EmptyPool);
        }
        let new_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        balances.debit(from, amount)?;
        self.dividend_accumulator += accrual::accumulator_delta(amount, self.total_principal);
        self.total_distributed = new_distributed;
        self.events.push(LedgerEvent::Distributed {
            from: from.clone(),
            amount,
            epoch,
        });
        self.last_epoch = epoch;
        log::info!(
            "distributed {amount} across {} units of principal",
            self.total_principal
        );
        Ok(())
    }

    /// Withdraw accrued dividends to the participant's external balance.
    pub fn withdraw<B: BalanceHolder>(
        &mut self,
        balances: &mut B,
        epoch: Epoch,
        participant: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_active(epoch)?;
        self.ensure_epoch(epoch)?;
        if amount > self.pending_dividends(participant) {
            return Err(LedgerError::ExceedsDividends);
        }
        if amount == 0 {
            return Ok(());
        }
        let accumulator = self.dividend_accumulator;
        let account = self
            .accounts
            .get_mut(participant)
            .ok_or(LedgerError::ExceedsDividends)?;
        settle(account, accumulator);
        account.settled_dividends -= amount;
        balances.credit(participant, amount);
        self.events.push(LedgerEvent::DividendsWithdrawn {
            participant: participant.clone(),
            amount,
            epoch,
        });
        self.last_epoch = epoch;
        Ok(())
    }

    /// Move accrued dividends back into staked principal. Reinvestment is
    /// exempt from the stake tax.
    pub fn reinvest(
        &mut self,
        epoch: Epoch,
        participant: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_active(epoch)?;
        self.ensure_epoch(epoch)?;
        if amount > self.pending_dividends(participant) {
            return Err(LedgerError::ExceedsDividends);
        }
        if amount == 0 {
            return Ok(());
        }
        let new_total = self
            .total_principal
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let accumulator = self.dividend_accumulator;
        let account = self
            .accounts
            .get_mut(participant)
            .ok_or(LedgerError::ExceedsDividends)?;
        settle(account, accumulator);
        account.settled_dividends -= amount;
        self.add_principal(participant, amount, epoch, new_total)?;
        self.events.push(LedgerEvent::DividendsReinvested {
            participant: participant.clone(),
            amount,
            epoch,
        });
        self.last_epoch = epoch;
        Ok(())
    }

    // ---- administration --------------------------------------------------

    pub fn set_stake_tax(&mut self, caller: &AccountId, bp: u32) -> Result<(), LedgerError> {
        self.ensure_owner(caller)?;
        if bp > MAX_BP {
            return Err(LedgerError::InvalidBasisPoints { bp });
        }
        self.policy.stake_tax_bp = bp;
        log::info!("stake tax set to {bp}bp");
        Ok(())
    }

    pub fn set_unstake_tax(&mut self, caller: &AccountId, bp: u32) -> Result<(), LedgerError> {
        self.ensure_owner(caller)?;
        if bp > MAX_BP {
            return Err(LedgerError::InvalidBasisPoints { bp });
        }
        self.policy.unstake_tax_bp = bp;
        log::info!("unstake tax set to {bp}bp");
        Ok(())
    }

    pub fn set_registration_fees(
        &mut self,
        caller: &AccountId,
        with_referrer: Amount,
        without_referrer: Amount,
    ) -> Result<(), LedgerError> {
        self.ensure_owner(caller)?;
        if with_referrer < without_referrer {
            return Err(LedgerError::InvalidFeeSchedule);
        }
        self.policy.registration_fee_with_referrer = with_referrer;
        self.policy.registration_fee_without_referrer = without_referrer;
        Ok(())
    }

    /// Arm or move the epoch at which operations become permitted.
    pub fn set_start_epoch(&mut self, caller: &AccountId, epoch: Epoch) -> Result<(), LedgerError> {
        self.ensure_owner(caller)?;
        self.start_epoch = Some(epoch);
        log::info!("ledger start epoch set to {epoch}");
        Ok(())
    }

    // ---- snapshot & persistence ------------------------------------------

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            epoch: self.last_epoch,
            total_principal: self.total_principal,
            total_distributed: self.total_distributed,
            participant_count: self.participant_count,
            accounts: self.accounts.clone(),
            events: self.events.clone(),
            state_root: compute_state_root(
                &self.accounts,
                self.total_principal,
                self.dividend_accumulator,
                self.total_distributed,
            ),
        }
    }

    /// Serialize the full ledger, including both checkpoint index maps, so
    /// state and history can be reconstructed exactly on restart.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    // ---- internals -------------------------------------------------------

    fn ensure_active(&self, epoch: Epoch) -> Result<(), LedgerError> {
        if self.is_active(epoch) {
            Ok(())
        } else {
            Err(LedgerError::NotActive)
        }
    }

    /// Validated up front so a checkpoint append can never fail after a
    /// mutation has begun.
    fn ensure_epoch(&self, epoch: Epoch) -> Result<(), LedgerError> {
        if epoch < self.last_epoch {
            return Err(CheckpointError::NonMonotonicEpoch {
                epoch,
                last: self.last_epoch,
            }
            .into());
        }
        Ok(())
    }

    fn ensure_owner(&self, caller: &AccountId) -> Result<(), LedgerError> {
        if caller == &self.owner {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }

    fn ensure_not_registered(&self, participant: &AccountId) -> Result<(), LedgerError> {
        if self.is_registered(participant) {
            return Err(LedgerError::AlreadyRegistered {
                account: participant.clone(),
            });
        }
        Ok(())
    }

    fn route_registration_fee<B: BalanceHolder>(
        &self,
        balances: &mut B,
        referrer: Option<&AccountId>,
        fee: Amount,
    ) {
        match referrer {
            Some(referrer) => {
                let share = self.policy.referral_share();
                if share > 0 {
                    balances.credit(referrer, share);
                }
                balances.credit(&self.owner, fee - share);
            }
            None => balances.credit(&self.owner, fee),
        }
    }

    /// Settle, then grow the participant's principal and the pool total, and
    /// checkpoint both at `epoch`. `new_total` must be the pre-checked sum.
    fn add_principal(
        &mut self,
        participant: &AccountId,
        net: Amount,
        epoch: Epoch,
        new_total: Amount,
    ) -> Result<(), LedgerError> {
        let accumulator = self.dividend_accumulator;
        let account = self.accounts.entry(participant.clone()).or_default();
        settle(account, accumulator);
        let was_zero = account.principal == 0;
        account.principal += net;
        let principal = account.principal;
        if was_zero && principal > 0 {
            self.participant_count += 1;
        }
        self.total_principal = new_total;
        self.record_checkpoints(participant, principal, epoch)
    }

    /// Both sequences are recorded under the same logical epoch so
    /// "participant share of pool at epoch E" stays consistent.
    fn record_checkpoints(
        &mut self,
        participant: &AccountId,
        principal: Amount,
        epoch: Epoch,
    ) -> Result<(), LedgerError> {
        self.account_history
            .entry(participant.clone())
            .or_default()
            .record(epoch, principal)?;
        self.pool_history.record(epoch, self.total_principal)?;
        Ok(())
    }
}

/// Crystallize dividends accrued since the last settlement and advance the
/// baseline. Must run before any mutation of the account's principal;
/// otherwise accrual attributable to the old principal would leak into the
/// new principal's share.
fn settle(account: &mut ParticipantAccount, accumulator: u128) {
    let accrued = accrual::accrued_since(
        account.principal,
        accumulator,
        account.dividend_baseline,
    );
    account.settled_dividends += accrued;
    account.dividend_baseline = accumulator;
}

fn compute_state_root(
    accounts: &BTreeMap<AccountId, ParticipantAccount>,
    total_principal: Amount,
    dividend_accumulator: u128,
    total_distributed: Amount,
) -> [u8; 32] {
    let mut leaves: Vec<[u8; 32]> = Vec::with_capacity(accounts.len() + 1);
    for (id, account) in accounts {
        let mut hasher = Sha256::new();
        hasher.update(b"acct");
        hasher.update(id.as_bytes());
        hasher.update(account.principal.to_le_bytes());
        hasher.update(account.settled_dividends.to_le_bytes());
        hasher.update(account.dividend_baseline.to_le_bytes());
        hasher.update([account.registered as u8]);
        leaves.push(hasher.finalize().into());
    }
    let mut hasher = Sha256::new();
    hasher.update(b"pool");
    hasher.update(total_principal.to_le_bytes());
    hasher.update(dividend_accumulator.to_le_bytes());
    hasher.update(total_distributed.to_le_bytes());
    leaves.push(hasher.finalize().into());
    build_merkle(leaves)
}

fn build_merkle(mut leaves: Vec<[u8; 32]>) -> [u8; 32] {
    if leaves.is_empty() {
        return Sha256::digest(b"divpool-empty").into();
    }
    while leaves.len() > 1 {
        let mut next = Vec::with_capacity((leaves.len() + 1) / 2);
        for chunk in leaves.chunks(2) {
            let mut hasher = Sha256::new();
            hasher.update(b"node");
            hasher.update(chunk[0]);
            if chunk.len() == 2 {
                hasher.update(chunk[1]);
            } else {
                hasher.update(chunk[0]);
            }
            next.push(hasher.finalize().into());
        }
        leaves = next;
    }
    leaves[0]
}

pub(crate) mod serde_root {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 32], D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        let bytes = hex::decode(&encoded).map_err(D::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| D::Error::custom("state root must be 32 bytes"))
    }
}
