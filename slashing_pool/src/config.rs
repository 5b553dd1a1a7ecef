multiversx_sc::imports!();

use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_INVALID_RATE_MODEL, ERROR_INVALID_RATIO, ERROR_NOTHING_TO_CLAIM,
    ERROR_REPORTER_ALREADY_ADDED, ERROR_REPORTER_NOT_FOUND,
};
use common_structs::RateModelParams;

use crate::{accrual, storage, utils};

/// Owner-only configuration of the pool.
///
/// The asset, the borrow duration and both ratios are fixed at deployment. Changing the
/// rate model only affects positions priced afterwards.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Sets the minimum deposit, raw asset units.
    #[only_owner]
    #[endpoint(setMinDeposit)]
    fn set_min_deposit(&self, min_deposit: BigUint) {
        let mut params = self.params().get();
        params.min_deposit = self.to_decimal(min_deposit, params.asset_decimals);

        self.update_min_deposit_event(&params.min_deposit);
        self.params().set(&params);
    }

    /// Sets the address receiving the treasury half of every slash.
    #[only_owner]
    #[endpoint(setTreasury)]
    fn set_treasury(&self, treasury: ManagedAddress) {
        require!(!treasury.is_zero(), ERROR_ADDRESS_IS_ZERO);

        self.params().update(|params| params.treasury = treasury.clone());
        self.update_treasury_event(&treasury);
    }

    /// Replaces the rate curve. All arguments are RAY-based.
    #[only_owner]
    #[endpoint(setRateModel)]
    fn set_rate_model(
        &self,
        base_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        optimal_utilization: BigUint,
        max_rate: BigUint,
        liveness_premium: BigUint,
        corruption_premium: BigUint,
    ) {
        let rate_model = self.build_rate_model(
            base_rate,
            slope1,
            slope2,
            optimal_utilization,
            max_rate,
            liveness_premium,
            corruption_premium,
        );

        self.update_rate_model_event(&rate_model);
        self.rate_model().set(&rate_model);
    }

    #[only_owner]
    #[endpoint(addReporter)]
    fn add_reporter(&self, reporter: ManagedAddress) {
        require!(!reporter.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(
            self.reporters().insert(reporter.clone()),
            ERROR_REPORTER_ALREADY_ADDED
        );

        self.reporter_added_event(&reporter);
    }

    #[only_owner]
    #[endpoint(removeReporter)]
    fn remove_reporter(&self, reporter: ManagedAddress) {
        require!(
            self.reporters().swap_remove(&reporter),
            ERROR_REPORTER_NOT_FOUND
        );

        self.reporter_removed_event(&reporter);
    }

    /// Sends the interest realized while no share existed to the treasury.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The amount sent, in the asset decimals.
    #[only_owner]
    #[endpoint(claimUndistributedRewards)]
    fn claim_undistributed_rewards(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = self.begin_operation();

        let amount = cache.to_asset_down(&cache.undistributed_rewards);
        require!(amount > cache.zero, ERROR_NOTHING_TO_CLAIM);

        cache.undistributed_rewards -= &amount.rescale(common_constants::RAY_PRECISION);

        let treasury = cache.params.treasury.clone();
        self.send_asset(&cache, &amount, &treasury);

        self.claim_undistributed_rewards_event(&treasury, &amount);
        self.emit_pool_update(&cache);

        amount
    }

    fn build_rate_model(
        &self,
        base_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        optimal_utilization: BigUint,
        max_rate: BigUint,
        liveness_premium: BigUint,
        corruption_premium: BigUint,
    ) -> RateModelParams<Self::Api> {
        let rate_model = RateModelParams {
            base_rate: self.to_decimal_ray(base_rate),
            slope1: self.to_decimal_ray(slope1),
            slope2: self.to_decimal_ray(slope2),
            optimal_utilization: self.to_decimal_ray(optimal_utilization),
            max_rate: self.to_decimal_ray(max_rate),
            liveness_premium: self.to_decimal_ray(liveness_premium),
            corruption_premium: self.to_decimal_ray(corruption_premium),
        };

        require!(
            self.is_valid_rate_model(&rate_model),
            ERROR_INVALID_RATE_MODEL
        );

        rate_model
    }

    /// Converts a RAY-based ratio, rejecting zero and anything above `max`.
    fn build_ratio(
        &self,
        ratio: BigUint,
        max: Option<ManagedDecimal<Self::Api, NumDecimals>>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let ratio = self.to_decimal_ray(ratio);
        require!(ratio > self.ray_zero(), ERROR_INVALID_RATIO);

        if let Some(max) = max {
            require!(ratio <= max, ERROR_INVALID_RATIO);
        }

        ratio
    }
}
