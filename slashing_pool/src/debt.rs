multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::RAY_PRECISION;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_CAP_DECREASED, ERROR_DUPLICATE_POSITION,
    ERROR_EXCEEDS_SLASHED, ERROR_INSUFFICIENT_PAYMENT, ERROR_OUTSTANDING_SLASH,
    ERROR_TERMINATION_NOT_ALLOWED,
};
use common_structs::ClosureReason;

use crate::{accrual, storage, utils};

/// Debt position lifecycle: origination, increase, termination and slash top-ups.
///
/// Borrowing does not move the principal. A position reserves slashable liquidity for the
/// debtor, who prepays the interest of the whole borrow duration at origination.
#[multiversx_sc::module]
pub trait DebtModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Opens a slashable debt position for the caller.
    ///
    /// **Process**:
    /// 1. Catches the pool up.
    /// 2. Rejects the call if the caller already has an open position or if the principal does
    ///    not fit under `assumed_liquidity * max_borrow_ratio`.
    /// 3. Prices the position at the post-borrow utilization and the requested caps.
    /// 4. Collects `ceil(interest_per_second * borrow_duration)` from the payment and refunds the rest.
    /// 5. Appends the position at the queue tail.
    ///
    /// # Arguments
    /// - `designated_verifier`: Identity allowed to counter-sign slash reports for this position.
    /// - `amount`: Principal, raw asset units.
    /// - `max_liveness`, `max_corruption`: Per-event slash caps, raw asset units.
    ///
    /// # Payment
    /// - The pool asset, covering at least the upfront interest.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The upfront interest collected.
    #[payable]
    #[endpoint(borrow)]
    fn borrow(
        &self,
        designated_verifier: ManagedAddress,
        amount: BigUint,
        max_liveness: BigUint,
        max_corruption: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let mut cache = self.begin_operation();
        require!(
            self.debtor_slot(&caller).is_empty(),
            ERROR_DUPLICATE_POSITION
        );

        let principal = cache.get_decimal_value(&amount);
        require!(principal > cache.zero, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let max_liveness = cache.get_decimal_value(&max_liveness);
        let max_corruption = cache.get_decimal_value(&max_corruption);

        let (interest_per_second, interest_for_duration) =
            self.price_position(&cache, &principal, &max_liveness, &max_corruption);
        let upfront_interest = cache.to_asset_up(&interest_for_duration);

        let payment = self.get_payment_amount(&cache);
        require!(payment >= upfront_interest, ERROR_INSUFFICIENT_PAYMENT);

        let position = self.new_position(
            &cache,
            &caller,
            &designated_verifier,
            principal,
            interest_per_second,
            max_liveness,
            max_corruption,
        );
        let slot = self.open_position(&mut cache, &position);

        self.refund_excess(&cache, &payment, &upfront_interest, &caller);

        self.borrow_event(slot, &upfront_interest, &position);
        self.emit_pool_update(&cache);

        upfront_interest
    }

    /// Grows the caller's position by `amount` and restarts its borrow duration.
    ///
    /// **Process**:
    /// 1. Requires no outstanding slash and caps that do not decrease.
    /// 2. Closes the old position, keeping its outstanding (prepaid, unstreamed) interest as credit.
    /// 3. Prices the combined principal. If the credit covers the new requirement, the new
    ///    position streams the credit itself over the new duration and nothing is collected.
    ///    Otherwise the caller pays the shortfall.
    /// 4. Reopens the position at the queue tail with the same designated verifier.
    ///
    /// # Payment
    /// - The pool asset, covering at least the shortfall.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The amount collected.
    #[payable]
    #[endpoint(increaseDebt)]
    fn increase_debt(
        &self,
        amount: BigUint,
        max_liveness: BigUint,
        max_corruption: BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let mut cache = self.begin_operation();
        let (slot, old_position) = self.get_open_position(&caller);

        let additional = cache.get_decimal_value(&amount);
        let max_liveness = cache.get_decimal_value(&max_liveness);
        let max_corruption = cache.get_decimal_value(&max_corruption);

        require!(
            !old_position.has_outstanding_slash(),
            ERROR_OUTSTANDING_SLASH
        );
        require!(
            old_position.caps_cover(&max_liveness, &max_corruption),
            ERROR_CAP_DECREASED
        );

        let credit = self.outstanding_interest(&cache, &old_position);
        self.close_position(
            &mut cache,
            slot,
            &old_position,
            ClosureReason::Replaced,
            &credit,
        );

        let principal = old_position.principal_amount.clone() + additional;
        let (curve_interest_per_second, interest_for_duration) =
            self.price_position(&cache, &principal, &max_liveness, &max_corruption);

        let (interest_per_second, due) = if credit >= interest_for_duration {
            let duration = self.to_decimal(BigUint::from(cache.params.borrow_duration), 0);
            (
                self.div_down(&credit, &duration, RAY_PRECISION),
                cache.zero.clone(),
            )
        } else {
            let shortfall = interest_for_duration - credit.clone();
            (curve_interest_per_second, cache.to_asset_up(&shortfall))
        };

        let payment = self.get_payment_amount(&cache);
        require!(payment >= due, ERROR_INSUFFICIENT_PAYMENT);

        let position = self.new_position(
            &cache,
            &caller,
            &old_position.designated_verifier,
            principal,
            interest_per_second,
            max_liveness,
            max_corruption,
        );
        let new_slot = self.open_position(&mut cache, &position);

        self.refund_excess(&cache, &payment, &due, &caller);

        self.increase_debt_event(new_slot, &credit, &due, &position);
        self.emit_pool_update(&cache);

        due
    }

    /// Closes `debtor`'s position and refunds its outstanding interest to the debtor.
    ///
    /// Permissionless, but only allowed once
    /// `assumed_liquidity <= outstanding_interest * max_slashable_ratio`.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The refunded interest.
    #[endpoint(terminate)]
    fn terminate(&self, debtor: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = self.begin_operation();
        let (slot, position) = self.get_open_position(&debtor);

        let outstanding = self.outstanding_interest(&cache, &position);
        let slashable_headroom = self.mul_down(
            &outstanding,
            &cache.params.max_slashable_ratio,
            RAY_PRECISION,
        );
        require!(
            cache.assumed_liquidity.rescale(RAY_PRECISION) <= slashable_headroom,
            ERROR_TERMINATION_NOT_ALLOWED
        );

        self.close_position(
            &mut cache,
            slot,
            &position,
            ClosureReason::Terminated,
            &outstanding,
        );

        let refund = cache.to_asset_down(&outstanding);
        self.send_asset(&cache, &refund, &debtor);

        self.emit_pool_update(&cache);

        refund
    }

    /// Pays back part or all of the slash recorded on the caller's position.
    ///
    /// # Payment
    /// - The pool asset, at most the recorded slash amount. It restores the assumed liquidity.
    #[payable]
    #[endpoint(topUpSlashAmount)]
    fn top_up_slash_amount(&self) {
        let caller = self.blockchain().get_caller();

        let mut cache = self.begin_operation();
        let amount = self.get_payment_amount(&cache);
        require!(amount > cache.zero, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let (slot, mut position) = self.get_open_position(&caller);
        require!(amount <= position.slash_amount, ERROR_EXCEEDS_SLASHED);

        position.slash_amount -= &amount;
        self.debt_queue(slot).set(&position);
        cache.assumed_liquidity += &amount;

        self.top_up_slash_event(&caller, &amount, &position.slash_amount);
        self.emit_pool_update(&cache);
    }
}
