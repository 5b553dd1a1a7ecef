multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::RAY_PRECISION;
use common_structs::{DebtPosition, LenderPosition, PoolSnapshot};

use crate::storage;

/// The ViewModule provides read-only endpoints over the stored pool state.
///
/// Values reflect the last committed operation. Call `catchUp` first to realize the interest
/// accrued since then.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Returns the open position of `debtor`, if any.
    #[view(getDebtor)]
    fn get_debtor(&self, debtor: ManagedAddress) -> Option<DebtPosition<Self::Api>> {
        let slot_mapper = self.debtor_slot(&debtor);
        if slot_mapper.is_empty() {
            return None;
        }

        Some(self.debt_queue(slot_mapper.get()).get())
    }

    /// Returns the designated verifier of `debtor`'s open position, if any.
    #[view(getDesignatedVerifier)]
    fn get_designated_verifier(&self, debtor: ManagedAddress) -> Option<ManagedAddress> {
        self.get_debtor(debtor)
            .map(|position| position.designated_verifier)
    }

    /// Returns the reward checkpoint of `lender`. Unknown lenders get an empty checkpoint.
    #[view(getLender)]
    fn get_lender(&self, lender: ManagedAddress) -> LenderPosition<Self::Api> {
        let lender_mapper = self.lender(&lender);
        if lender_mapper.is_empty() {
            return LenderPosition::new(
                self.cumulative_reward_per_share().get(),
                self.params().get().asset_decimals,
            );
        }

        lender_mapper.get()
    }

    /// Realized rewards plus what the committed `cumulative_reward_per_share` already owes
    /// to `lender`'s shares.
    #[view(getPendingRewards)]
    fn get_pending_rewards(
        &self,
        lender: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let asset_decimals = self.params().get().asset_decimals;
        let position = self.get_lender(lender.clone());
        let shares = self.get_share_balance_view(lender);

        let delta = self.cumulative_reward_per_share().get()
            - position.cumulative_reward_per_share_last_update.clone();
        let unsynced = self.mul_down(&delta, &shares, RAY_PRECISION);

        position.earned_balance + self.rescale_down(&unsynced, asset_decimals)
    }

    #[view(getShareBalance)]
    fn get_share_balance_view(
        &self,
        holder: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let balance_mapper = self.share_balance(&holder);
        if balance_mapper.is_empty() {
            return self.to_decimal(BigUint::zero(), self.params().get().asset_decimals);
        }

        balance_mapper.get()
    }

    /// Projects the upfront interest of a position opened now, assuming the rate stays constant.
    ///
    /// The rate is read at the utilization the pool would have with `principal` borrowed.
    /// This is an estimate, not a quote: it ignores interest not yet caught up and the borrow cap.
    ///
    /// # Arguments
    /// - `principal`, `max_liveness`, `max_corruption`: Raw asset units.
    /// - `duration`: Seconds.
    #[view(getExpectedInterest)]
    fn get_expected_interest(
        &self,
        principal: BigUint,
        duration: u64,
        max_liveness: BigUint,
        max_corruption: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let asset_decimals = self.params().get().asset_decimals;
        let principal = self.to_decimal(principal, asset_decimals);

        let total_borrowable = self.get_total_borrowable();
        let total_borrowed = self.borrowed_liquidity().get() + principal.clone();
        let annual_rate = self.calc_borrow_rate(
            &total_borrowable,
            &total_borrowed,
            &self.to_decimal(max_liveness, asset_decimals),
            &self.to_decimal(max_corruption, asset_decimals),
            &self.rate_model().get(),
        );

        let interest_per_second = self.calc_interest_per_second(&principal, &annual_rate);
        let interest = self.calc_interest_over(&interest_per_second, duration);

        self.rescale_up(&interest, asset_decimals)
    }

    /// Interest `debtor` would be refunded if the position were terminated at this block.
    #[view(getOutstandingInterest)]
    fn get_outstanding_interest(
        &self,
        debtor: ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let asset_decimals = self.params().get().asset_decimals;

        match self.get_debtor(debtor) {
            Some(position) => {
                let remaining = position.remaining_seconds(self.blockchain().get_block_timestamp());
                let outstanding = self.calc_interest_over(&position.interest_per_second, remaining);
                self.rescale_down(&outstanding, asset_decimals)
            },
            None => self.to_decimal(BigUint::zero(), asset_decimals),
        }
    }

    /// `assumed_liquidity * max_borrow_ratio`, rounded down.
    #[view(getTotalBorrowable)]
    fn get_total_borrowable(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let params = self.params().get();
        let borrowable = self.mul_down(
            &self.assumed_liquidity().get(),
            &params.max_borrow_ratio,
            RAY_PRECISION,
        );

        self.rescale_down(&borrowable, params.asset_decimals)
    }

    /// Yearly rate at the current utilization, without any slash-risk premium.
    #[view(getBorrowRate)]
    fn get_borrow_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let zero = self.to_decimal(BigUint::zero(), self.params().get().asset_decimals);

        self.calc_borrow_rate(
            &self.get_total_borrowable(),
            &self.borrowed_liquidity().get(),
            &zero,
            &zero,
            &self.rate_model().get(),
        )
    }

    #[view(getPoolState)]
    fn get_pool_state(&self) -> PoolSnapshot<Self::Api> {
        PoolSnapshot {
            assumed_liquidity: self.assumed_liquidity().get(),
            borrowed_liquidity: self.borrowed_liquidity().get(),
            total_borrowable: self.get_total_borrowable(),
            total_shares: self.total_shares().get(),
            cumulative_interest_per_second: self.cumulative_interest_per_second().get(),
            cumulative_reward_per_share: self.cumulative_reward_per_share().get(),
            undistributed_rewards: self.undistributed_rewards().get(),
            last_update_timestamp: self.last_update_timestamp().get(),
            queue_start: self.queue_start().get(),
            queue_end: self.queue_end().get(),
        }
    }
}
