multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{DebtPosition, LenderPosition, PoolParams, RateModelParams};

/// The Storage trait provides on-chain storage mappers and view functions
/// for accessing the core state variables of the slashing pool.
#[multiversx_sc::module]
pub trait Storage {
    /// Returns the pool configuration.
    ///
    /// # Returns
    /// - `PoolParams<Self::Api>`: Asset, borrow duration, ratios, minimum deposit and treasury.
    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<PoolParams<Self::Api>>;

    /// Returns the interest rate curve used to price new positions.
    #[view(getRateModel)]
    #[storage_mapper("rate_model")]
    fn rate_model(&self) -> SingleValueMapper<RateModelParams<Self::Api>>;

    /// Total liquidity backing the outstanding shares.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Amount in the asset decimals.
    #[view(getAssumedLiquidity)]
    #[storage_mapper("assumed_liquidity")]
    fn assumed_liquidity(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Sum of the principal of every open debt position.
    #[view(getBorrowedLiquidity)]
    #[storage_mapper("borrowed_liquidity")]
    fn borrowed_liquidity(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Sum of `interest_per_second` across open positions (RAY-based).
    #[view(getCumulativeInterestPerSecond)]
    #[storage_mapper("cumulative_interest_per_second")]
    fn cumulative_interest_per_second(
        &self,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Lifetime reward earned per unit of share (RAY-based, never decreases).
    #[view(getCumulativeRewardPerShare)]
    #[storage_mapper("cumulative_reward_per_share")]
    fn cumulative_reward_per_share(
        &self,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Timestamp up to which interest has been realized into rewards.
    #[view(getLastUpdateTimestamp)]
    #[storage_mapper("last_update_timestamp")]
    fn last_update_timestamp(&self) -> SingleValueMapper<u64>;

    #[view(getTotalShares)]
    #[storage_mapper("total_shares")]
    fn total_shares(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("share_balance")]
    fn share_balance(
        &self,
        holder: &ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("lender")]
    fn lender(&self, lender: &ManagedAddress) -> SingleValueMapper<LenderPosition<Self::Api>>;

    /// Interest realized while no share existed (RAY-based), claimable by the treasury.
    #[view(getUndistributedRewards)]
    #[storage_mapper("undistributed_rewards")]
    fn undistributed_rewards(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Debt queue slots. A cleared slot is a vacated position.
    #[storage_mapper("debt_queue")]
    fn debt_queue(&self, slot: u64) -> SingleValueMapper<DebtPosition<Self::Api>>;

    /// First slot that may still hold an unexpired position.
    #[view(getQueueStart)]
    #[storage_mapper("queue_start")]
    fn queue_start(&self) -> SingleValueMapper<u64>;

    /// Next free slot at the queue tail.
    #[view(getQueueEnd)]
    #[storage_mapper("queue_end")]
    fn queue_end(&self) -> SingleValueMapper<u64>;

    /// Debtor to queue slot lookup. Empty when the debtor has no open position.
    #[storage_mapper("debtor_slot")]
    fn debtor_slot(&self, debtor: &ManagedAddress) -> SingleValueMapper<u64>;

    /// Addresses allowed to call `slash`.
    #[view(getReporters)]
    #[storage_mapper("reporters")]
    fn reporters(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("operation_ongoing")]
    fn operation_ongoing(&self) -> SingleValueMapper<bool>;
}
