#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod accrual;
pub mod cache;
pub mod config;
pub mod debt;
pub mod liquidity;
pub mod rewards;
pub mod slashing;
pub mod storage;
pub mod utils;
pub mod view;

pub use common_errors::*;
pub use common_events::*;

use common_constants::{FIRST_QUEUE_SLOT, MAX_BORROW_DURATION};

#[multiversx_sc::contract]
pub trait SlashingPool:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + utils::UtilsModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + liquidity::LiquidityModule
    + debt::DebtModule
    + slashing::SlashingModule
    + config::ConfigModule
    + view::ViewModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes a slashing pool for a single asset.
    ///
    /// **Process**:
    /// 1. Validates and stores the pool configuration and the rate curve.
    /// 2. Starts every aggregate at zero and the debt queue at its first slot.
    /// 3. Records the current block timestamp as the last accrual time.
    ///
    /// ### Parameters
    /// - `asset`: The pool asset.
    /// - `asset_decimals`: Decimals of the asset, shares use the same.
    /// - `treasury`: Receives the treasury half of every slash and undistributed rewards.
    /// - `min_deposit`: Minimum deposit, raw asset units.
    /// - `borrow_duration`: Lifetime of a position in seconds, at most ten years.
    /// - `max_borrow_ratio`: Share of the assumed liquidity that may be borrowed (RAY, at most 1).
    /// - `max_slashable_ratio`: Multiple of the outstanding interest a position's slashes may reach (RAY).
    /// - Rate curve parameters, all RAY-based.
    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
        treasury: ManagedAddress,
        min_deposit: BigUint,
        borrow_duration: u64,
        max_borrow_ratio: BigUint,
        max_slashable_ratio: BigUint,
        base_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        optimal_utilization: BigUint,
        max_rate: BigUint,
        liveness_premium: BigUint,
        corruption_premium: BigUint,
    ) {
        require!(!treasury.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(
            borrow_duration > 0 && borrow_duration <= MAX_BORROW_DURATION,
            ERROR_INVALID_BORROW_DURATION
        );

        self.params().set(PoolParams {
            asset_id: asset,
            asset_decimals,
            borrow_duration,
            max_borrow_ratio: self.build_ratio(max_borrow_ratio, Some(self.ray())),
            max_slashable_ratio: self.build_ratio(max_slashable_ratio, None),
            min_deposit: self.to_decimal(min_deposit, asset_decimals),
            treasury,
        });

        let rate_model = self.build_rate_model(
            base_rate,
            slope1,
            slope2,
            optimal_utilization,
            max_rate,
            liveness_premium,
            corruption_premium,
        );
        self.rate_model().set(rate_model);

        let zero = self.to_decimal(BigUint::zero(), asset_decimals);
        self.assumed_liquidity().set(&zero);
        self.borrowed_liquidity().set(&zero);
        self.total_shares().set(&zero);

        self.cumulative_interest_per_second().set(self.ray_zero());
        self.cumulative_reward_per_share().set(self.ray_zero());
        self.undistributed_rewards().set(self.ray_zero());

        self.queue_start().set(FIRST_QUEUE_SLOT);
        self.queue_end().set(FIRST_QUEUE_SLOT);

        let timestamp = self.blockchain().get_block_timestamp();
        self.last_update_timestamp().set(timestamp);

        self.set_paused(false);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
