use common_constants::RAY_PRECISION;
use common_structs::{PoolParams, RateModelParams};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of the pool aggregates, loaded from storage when an operation begins.
///
/// **Scope**: Liquidity totals, the accrual indexes, the queue cursors and the configuration
/// needed by every state-changing endpoint.
///
/// **Goal**: Let the catch-up walk and the operation itself work on one in-memory copy that
/// is written back exactly once.
///
/// **Fields**:
/// - Liquidity and share totals use the pool asset decimals.
/// - `cumulative_interest_per_second`, `cumulative_reward_per_share` and `undistributed_rewards` are RAY-based.
/// - Timestamps are in seconds since the Unix epoch.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub assumed_liquidity: ManagedDecimal<C::Api, NumDecimals>,
    pub borrowed_liquidity: ManagedDecimal<C::Api, NumDecimals>,
    pub total_shares: ManagedDecimal<C::Api, NumDecimals>,
    pub cumulative_interest_per_second: ManagedDecimal<C::Api, NumDecimals>,
    pub cumulative_reward_per_share: ManagedDecimal<C::Api, NumDecimals>,
    pub undistributed_rewards: ManagedDecimal<C::Api, NumDecimals>,
    pub last_update_timestamp: u64,
    pub queue_start: u64,
    pub queue_end: u64,
    /// The timestamp of the current block.
    pub timestamp: u64,
    pub params: PoolParams<C::Api>,
    pub rate_model: RateModelParams<C::Api>,
    /// Zero in the pool asset decimals.
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
    /// Whether another operation held the pool when this one started.
    pub operation_ongoing: bool,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Reads the pool state and marks the pool as busy until the cache is dropped.
    pub fn new(sc_ref: &'a C) -> Self {
        let params = sc_ref.params().get();
        let operation_ongoing = sc_ref.operation_ongoing().get();
        sc_ref.operation_ongoing().set(true);

        Cache {
            zero: sc_ref.to_decimal(BigUint::zero(), params.asset_decimals),
            assumed_liquidity: sc_ref.assumed_liquidity().get(),
            borrowed_liquidity: sc_ref.borrowed_liquidity().get(),
            total_shares: sc_ref.total_shares().get(),
            cumulative_interest_per_second: sc_ref.cumulative_interest_per_second().get(),
            cumulative_reward_per_share: sc_ref.cumulative_reward_per_share().get(),
            undistributed_rewards: sc_ref.undistributed_rewards().get(),
            last_update_timestamp: sc_ref.last_update_timestamp().get(),
            queue_start: sc_ref.queue_start().get(),
            queue_end: sc_ref.queue_end().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            rate_model: sc_ref.rate_model().get(),
            params,
            operation_ongoing,
            sc_ref,
        }
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Commits the mutable aggregates and releases the pool.
    fn drop(&mut self) {
        self.sc_ref.assumed_liquidity().set(&self.assumed_liquidity);
        self.sc_ref.borrowed_liquidity().set(&self.borrowed_liquidity);
        self.sc_ref.total_shares().set(&self.total_shares);
        self.sc_ref
            .cumulative_interest_per_second()
            .set(&self.cumulative_interest_per_second);
        self.sc_ref
            .cumulative_reward_per_share()
            .set(&self.cumulative_reward_per_share);
        self.sc_ref
            .undistributed_rewards()
            .set(&self.undistributed_rewards);
        self.sc_ref
            .last_update_timestamp()
            .set(self.last_update_timestamp);
        self.sc_ref.queue_start().set(self.queue_start);
        self.sc_ref.queue_end().set(self.queue_end);
        self.sc_ref.operation_ongoing().clear();
    }
}

impl<C> Cache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule,
{
    /// Converts a raw `BigUint` into a `ManagedDecimal` with the pool asset decimals.
    pub fn get_decimal_value(
        &self,
        value: &BigUint<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(value.clone(), self.params.asset_decimals)
    }

    /// Liquidity that may back debt: `floor(assumed_liquidity * max_borrow_ratio)`.
    pub fn total_borrowable(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        let borrowable = self.sc_ref.mul_down(
            &self.assumed_liquidity,
            &self.params.max_borrow_ratio,
            RAY_PRECISION,
        );
        self.sc_ref
            .rescale_down(&borrowable, self.params.asset_decimals)
    }

    /// Converts a RAY-based amount into the asset decimals, rounding down.
    pub fn to_asset_down(
        &self,
        value: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.rescale_down(value, self.params.asset_decimals)
    }

    /// Converts a RAY-based amount into the asset decimals, rounding up.
    pub fn to_asset_up(
        &self,
        value: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.rescale_up(value, self.params.asset_decimals)
    }

    pub fn has_shares(&self) -> bool {
        self.total_shares > self.zero
    }

    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        self.params.asset_id == *asset
    }
}
