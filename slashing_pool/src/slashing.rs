multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::RAY_PRECISION;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_LIQUIDITY, ERROR_NOT_REPORTER,
    ERROR_SLASH_CAP_EXCEEDED,
};
use common_structs::{ClosureReason, SlashType};

use crate::{accrual, storage, utils};

#[multiversx_sc::module]
pub trait SlashingModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Applies a verified slash report against `debtor`'s position.
    ///
    /// **Process**:
    /// 1. Only registered reporters may call. The report itself is verified upstream.
    /// 2. Requires `amount < assumed_liquidity` and `amount` strictly below the position's cap
    ///    for `slash_type`.
    /// 3. Liquidation check: when `outstanding_interest * max_slashable_ratio` no longer covers
    ///    `slash_amount + amount`, the position is force-closed and its outstanding interest is
    ///    released into the assumed liquidity. The slash is not recorded on the vacated position.
    ///    Otherwise the slash is added to the position's `slash_amount`.
    /// 4. Removes `amount` from the assumed liquidity and pays `floor(amount / 2)` to `recipient`,
    ///    the remainder to the treasury.
    ///
    /// # Returns
    /// - `bool`: Whether the position was liquidated.
    #[endpoint(slash)]
    fn slash(
        &self,
        slash_type: SlashType,
        debtor: ManagedAddress,
        amount: BigUint,
        recipient: ManagedAddress,
    ) -> bool {
        let caller = self.blockchain().get_caller();
        require!(self.reporters().contains(&caller), ERROR_NOT_REPORTER);

        let mut cache = self.begin_operation();
        let amount = cache.get_decimal_value(&amount);

        require!(amount > cache.zero, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(
            amount < cache.assumed_liquidity,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        let (slot, mut position) = self.get_open_position(&debtor);
        require!(
            amount < *position.slash_cap(slash_type),
            ERROR_SLASH_CAP_EXCEEDED
        );

        let outstanding = self.outstanding_interest(&cache, &position);
        let backing = self.mul_down(
            &outstanding,
            &cache.params.max_slashable_ratio,
            RAY_PRECISION,
        );
        let exposure = position.slash_amount.clone() + amount.clone();
        let liquidated = backing < exposure.rescale(RAY_PRECISION);

        if liquidated {
            self.close_position(
                &mut cache,
                slot,
                &position,
                ClosureReason::Liquidated,
                &outstanding,
            );
            let released = cache.to_asset_down(&outstanding);
            cache.assumed_liquidity += &released;
        } else {
            position.slash_amount = exposure;
            self.debt_queue(slot).set(&position);
        }

        cache.assumed_liquidity -= &amount;

        let recipient_share = cache.get_decimal_value(&(amount.into_raw_units() / 2u64));
        let treasury_share = amount.clone() - recipient_share.clone();
        let treasury = cache.params.treasury.clone();

        self.send_asset(&cache, &recipient_share, &recipient);
        self.send_asset(&cache, &treasury_share, &treasury);

        self.slash_event(&caller, &debtor, slash_type, &amount, &recipient, liquidated);
        self.emit_pool_update(&cache);

        liquidated
    }
}
