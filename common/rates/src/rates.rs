#![no_std]
use common_constants::{RAY_PRECISION, SECONDS_PER_YEAR};
use common_structs::RateModelParams;

multiversx_sc::imports!();

/// The InterestRates module prices slashable debt.
///
/// **Scope**: Pure functions from pool utilization and requested slash exposure to a yearly
/// rate, and from a yearly rate to a per-second interest stream.
///
/// **Goal**: Keep the rate curve stateless so it can be swapped by the owner without touching
/// any open position (positions freeze their `interest_per_second` at origination).
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Calculates the yearly borrow rate for a new or reopened position.
    ///
    /// **Formula**:
    /// - `u = min(total_borrowed / total_borrowable, 1)`, `u = 1` when nothing is borrowable.
    /// - If `u < optimal_utilization`: `base_rate + u * slope1 / optimal_utilization`.
    /// - Otherwise: `base_rate + slope1 + (u - optimal_utilization) * slope2 / (1 - optimal_utilization)`.
    /// - Risk premium: `(max_liveness * liveness_premium + max_corruption * corruption_premium) / total_borrowable`.
    /// - The sum is capped at `max_rate`.
    ///
    /// # Arguments
    /// - `total_borrowable`: Liquidity that may back debt (`assumed * max_borrow_ratio`), asset decimals.
    /// - `total_borrowed`: Borrowed liquidity including the principal being priced, asset decimals.
    /// - `max_liveness`, `max_corruption`: Requested per-event slash caps, asset decimals.
    /// - `params`: The rate curve.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Yearly rate (RAY-based).
    fn calc_borrow_rate(
        &self,
        total_borrowable: &ManagedDecimal<Self::Api, NumDecimals>,
        total_borrowed: &ManagedDecimal<Self::Api, NumDecimals>,
        max_liveness: &ManagedDecimal<Self::Api, NumDecimals>,
        max_corruption: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &RateModelParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let nothing_borrowable = total_borrowable.into_raw_units() == &BigUint::zero();

        let utilization = if nothing_borrowable {
            self.ray()
        } else {
            let ratio = self.div_half_up(total_borrowed, total_borrowable, RAY_PRECISION);
            self.get_min(ratio, self.ray())
        };

        let curve_rate = if utilization < params.optimal_utilization {
            let slope_contribution = self.div_half_up(
                &self.mul_half_up(&utilization, &params.slope1, RAY_PRECISION),
                &params.optimal_utilization,
                RAY_PRECISION,
            );
            params.base_rate.clone() + slope_contribution
        } else {
            let excess_utilization = utilization - params.optimal_utilization.clone();
            let slope_contribution = self.div_half_up(
                &self.mul_half_up(&excess_utilization, &params.slope2, RAY_PRECISION),
                &(self.ray() - params.optimal_utilization.clone()),
                RAY_PRECISION,
            );
            params.base_rate.clone() + params.slope1.clone() + slope_contribution
        };

        let risk_premium = if nothing_borrowable {
            self.ray_zero()
        } else {
            let exposure = self.mul_half_up(max_liveness, &params.liveness_premium, RAY_PRECISION)
                + self.mul_half_up(max_corruption, &params.corruption_premium, RAY_PRECISION);
            self.div_half_up(&exposure, total_borrowable, RAY_PRECISION)
        };

        self.get_min(curve_rate + risk_premium, params.max_rate.clone())
    }

    /// Converts a principal and a yearly rate into a RAY-based per-second interest stream.
    ///
    /// `interest_per_second = floor(amount * annual_rate / SECONDS_PER_YEAR)`
    fn calc_interest_per_second(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        annual_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let yearly_interest = self.mul_down(amount, annual_rate, RAY_PRECISION);
        self.div_down(
            &yearly_interest,
            &self.to_decimal(BigUint::from(SECONDS_PER_YEAR), 0),
            RAY_PRECISION,
        )
    }

    /// Interest streamed by `interest_per_second` over `seconds`, RAY based and exact.
    fn calc_interest_over(
        &self,
        interest_per_second: &ManagedDecimal<Self::Api, NumDecimals>,
        seconds: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_down(
            interest_per_second,
            &self.to_decimal(BigUint::from(seconds), 0),
            RAY_PRECISION,
        )
    }

    /// Checks the shape of a rate curve before it is stored.
    fn is_valid_rate_model(&self, params: &RateModelParams<Self::Api>) -> bool {
        params.optimal_utilization > self.ray_zero()
            && params.optimal_utilization < self.ray()
            && params.base_rate <= params.max_rate
    }
}
