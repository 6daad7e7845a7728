use crate::ledger::Amount;

/// Precision of the pool-wide dividend accumulator: dividend-per-unit values
/// are carried scaled by 10^12 so integer division keeps twelve decimal
/// places of precision.
pub const DIVIDEND_SCALE: u128 = 1_000_000_000_000;

/// Scaled accumulator growth for distributing `amount` across
/// `total_principal` units of stake.
///
/// Floor division: the sub-unit remainder (less than `1/DIVIDEND_SCALE` per
/// unit of principal) is forfeited, not tracked. Callers must guarantee
/// `total_principal > 0`.
pub fn accumulator_delta(amount: Amount, total_principal: Amount) -> u128 {
    debug_assert!(total_principal > 0);
    amount as u128 * DIVIDEND_SCALE / total_principal as u128
}

/// Dividends accrued by `principal` units of stake since `baseline` was
/// captured from the accumulator.
///
/// The product cannot overflow u128: an account's principal never exceeds the
/// pool total at the time growth is added, so
/// `principal * (accumulator - baseline)` is bounded by the sum of all
/// distributed amounts times `DIVIDEND_SCALE`.
pub fn accrued_since(principal: Amount, accumulator: u128, baseline: u128) -> Amount {
    debug_assert!(accumulator >= baseline);
    (principal as u128 * (accumulator - baseline) / DIVIDEND_SCALE) as Amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_scales_by_total_principal() {
        // 100 distributed over 1000 units = 0.1 per unit
        assert_eq!(accumulator_delta(100, 1_000), DIVIDEND_SCALE / 10);
        assert_eq!(accumulator_delta(100, 100), DIVIDEND_SCALE);
    }

    #[test]
    fn delta_floors_sub_unit_remainders() {
        // 100 over 3 units: 33.33…3 per unit, remainder forfeited
        let delta = accumulator_delta(100, 3);
        assert_eq!(delta, 100 * DIVIDEND_SCALE / 3);
        assert_eq!(accrued_since(3, delta, 0), 99);
    }

    #[test]
    fn accrual_is_proportional_to_principal() {
        let delta = accumulator_delta(100, 2_000);
        assert_eq!(accrued_since(1_500, delta, 0), 75);
        assert_eq!(accrued_since(500, delta, 0), 25);
    }

    #[test]
    fn accrual_only_counts_growth_past_the_baseline() {
        let first = accumulator_delta(100, 1_000);
        let second = first + accumulator_delta(50, 1_000);
        assert_eq!(accrued_since(400, second, first), 20);
        assert_eq!(accrued_since(400, second, second), 0);
    }

    #[test]
    fn large_values_stay_in_range() {
        let total = u64::MAX;
        let delta = accumulator_delta(u64::MAX, total);
        assert_eq!(delta, DIVIDEND_SCALE);
        assert_eq!(accrued_since(total, delta, 0), u64::MAX);
    }
}
