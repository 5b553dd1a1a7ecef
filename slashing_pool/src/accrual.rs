multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::RAY_PRECISION;
use common_errors::{ERROR_BORROW_CAP_EXCEEDED, ERROR_POSITION_NOT_FOUND};
use common_structs::{ClosureReason, DebtPosition};

use crate::{cache::Cache, storage, utils};

/// Lazy interest accrual over the FIFO debt queue.
///
/// Positions are appended with `end_timestamp = now + borrow_duration` and the duration never
/// changes, so queue order is expiry order and expired positions are always at the head.
#[multiversx_sc::module]
pub trait AccrualModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Opens a state-changing operation.
    ///
    /// **Process**:
    /// 1. Loads the pool state into a `Cache`, which holds the pool until it is dropped.
    /// 2. Rejects the call if another operation is already in progress.
    /// 3. Catches the accrual up to the current block timestamp.
    ///
    /// Every mutating endpoint starts here, lender syncs and the endpoint's own effect come after.
    fn begin_operation(&self) -> Cache<Self> {
        let mut cache = Cache::new(self);
        self.reentrancy_guard(cache.operation_ongoing);
        self.global_sync(&mut cache);
        cache
    }

    /// Realizes all interest owed up to `cache.timestamp` into `cumulative_reward_per_share`.
    ///
    /// **Process**:
    /// 1. Walks the queue from its head. Vacated slots are skipped.
    /// 2. For each expired position, accrues `cumulative_interest_per_second` up to the position's
    ///    end timestamp, then closes it (its interest has been fully streamed).
    /// 3. Stops at the first live position and accrues the remaining partial interval.
    /// 4. Spreads the realized interest over the share supply, or parks it as undistributed
    ///    rewards when no share exists.
    ///
    /// Idempotent for a given timestamp.
    fn global_sync(&self, cache: &mut Cache<Self>) {
        let mut new_rewards = self.ray_zero();

        while cache.queue_start < cache.queue_end {
            let slot = cache.queue_start;
            let slot_mapper = self.debt_queue(slot);

            if slot_mapper.is_empty() {
                cache.queue_start += 1;
                continue;
            }

            let position = slot_mapper.get();
            if !position.is_expired(cache.timestamp) {
                break;
            }

            if position.end_timestamp > cache.last_update_timestamp {
                let elapsed = position.end_timestamp - cache.last_update_timestamp;
                new_rewards +=
                    &self.calc_interest_over(&cache.cumulative_interest_per_second, elapsed);
                cache.last_update_timestamp = position.end_timestamp;
            }

            self.close_position(
                cache,
                slot,
                &position,
                ClosureReason::Expired,
                &self.ray_zero(),
            );
            cache.queue_start += 1;
        }

        if cache.timestamp > cache.last_update_timestamp {
            let elapsed = cache.timestamp - cache.last_update_timestamp;
            new_rewards += &self.calc_interest_over(&cache.cumulative_interest_per_second, elapsed);
            cache.last_update_timestamp = cache.timestamp;
        }

        self.distribute_rewards(cache, &new_rewards);
    }

    fn distribute_rewards(
        &self,
        cache: &mut Cache<Self>,
        new_rewards: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        if *new_rewards == self.ray_zero() {
            return;
        }

        if cache.has_shares() {
            let reward_per_share = self.div_down(new_rewards, &cache.total_shares, RAY_PRECISION);
            cache.cumulative_reward_per_share += &reward_per_share;
        } else {
            cache.undistributed_rewards += new_rewards;
        }
    }

    /// Builds a position starting now with an empty slash record.
    fn new_position(
        &self,
        cache: &Cache<Self>,
        debtor: &ManagedAddress,
        designated_verifier: &ManagedAddress,
        principal_amount: ManagedDecimal<Self::Api, NumDecimals>,
        interest_per_second: ManagedDecimal<Self::Api, NumDecimals>,
        max_liveness: ManagedDecimal<Self::Api, NumDecimals>,
        max_corruption: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> DebtPosition<Self::Api> {
        DebtPosition {
            debtor: debtor.clone(),
            designated_verifier: designated_verifier.clone(),
            principal_amount,
            interest_per_second,
            start_timestamp: cache.timestamp,
            end_timestamp: cache.timestamp + cache.params.borrow_duration,
            slash_amount: cache.zero.clone(),
            max_slashable_amount_per_liveness: max_liveness,
            max_slashable_amount_per_corruption: max_corruption,
        }
    }

    /// Appends `position` at the queue tail and adds it to the aggregates.
    ///
    /// # Returns
    /// - `u64`: The slot holding the position.
    fn open_position(&self, cache: &mut Cache<Self>, position: &DebtPosition<Self::Api>) -> u64 {
        let slot = cache.queue_end;
        cache.queue_end += 1;

        self.debt_queue(slot).set(position);
        self.debtor_slot(&position.debtor).set(slot);

        cache.borrowed_liquidity += &position.principal_amount;
        cache.cumulative_interest_per_second += &position.interest_per_second;

        slot
    }

    /// Vacates `slot`, drops the debtor lookup and removes the position from the aggregates.
    fn close_position(
        &self,
        cache: &mut Cache<Self>,
        slot: u64,
        position: &DebtPosition<Self::Api>,
        reason: ClosureReason,
        outstanding_interest: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.debt_queue(slot).clear();
        self.debtor_slot(&position.debtor).clear();

        cache.borrowed_liquidity -= &position.principal_amount;
        cache.cumulative_interest_per_second -= &position.interest_per_second;

        self.position_closed_event(&position.debtor, slot, reason, outstanding_interest);
    }

    /// Prepaid interest not yet streamed to lenders, RAY-based.
    fn outstanding_interest(
        &self,
        cache: &Cache<Self>,
        position: &DebtPosition<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_interest_over(
            &position.interest_per_second,
            position.remaining_seconds(cache.timestamp),
        )
    }

    /// Loads the open position of `debtor`.
    ///
    /// # Returns
    /// - `(u64, DebtPosition<Self::Api>)`: The queue slot and the position.
    fn get_open_position(&self, debtor: &ManagedAddress) -> (u64, DebtPosition<Self::Api>) {
        let slot_mapper = self.debtor_slot(debtor);
        require!(!slot_mapper.is_empty(), ERROR_POSITION_NOT_FOUND);

        let slot = slot_mapper.get();
        (slot, self.debt_queue(slot).get())
    }

    /// Prices `principal` against the current pool, assuming it joins the borrowed liquidity.
    ///
    /// **Process**:
    /// 1. Checks that `borrowed_liquidity + principal` stays within the borrowable liquidity.
    /// 2. Reads the yearly rate for that utilization and the requested caps.
    /// 3. Converts it into an interest stream and the interest due over a full borrow duration.
    ///
    /// # Returns
    /// - `(interest_per_second, interest_for_duration)`: Both RAY-based.
    fn price_position(
        &self,
        cache: &Cache<Self>,
        principal: &ManagedDecimal<Self::Api, NumDecimals>,
        max_liveness: &ManagedDecimal<Self::Api, NumDecimals>,
        max_corruption: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let total_borrowable = cache.total_borrowable();
        let total_borrowed = cache.borrowed_liquidity.clone() + principal.clone();
        require!(
            total_borrowed <= total_borrowable,
            ERROR_BORROW_CAP_EXCEEDED
        );

        let annual_rate = self.calc_borrow_rate(
            &total_borrowable,
            &total_borrowed,
            max_liveness,
            max_corruption,
            &cache.rate_model,
        );
        let interest_per_second = self.calc_interest_per_second(principal, &annual_rate);
        let interest_for_duration =
            self.calc_interest_over(&interest_per_second, cache.params.borrow_duration);

        (interest_per_second, interest_for_duration)
    }
}
