multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{cache::Cache, storage};

use common_errors::{ERROR_INVALID_ASSET, ERROR_REENTRANT_CALL};

/// The `UtilsModule` trait provides helpers shared by every pool endpoint.
///
/// **Scope**: Event emission, standardized asset transfers, payment retrieval and validation,
/// and the re-entrancy guard.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Fails if another pool operation is still in progress in this transaction.
    #[inline(always)]
    fn reentrancy_guard(&self, operation_ongoing: bool) {
        require!(!operation_ongoing, ERROR_REENTRANT_CALL);
    }

    /// Emits an event logging the pool aggregates after an operation.
    #[inline(always)]
    fn emit_pool_update(&self, cache: &Cache<Self>) {
        self.update_pool_state_event(
            cache.timestamp,
            &cache.assumed_liquidity,
            &cache.borrowed_liquidity,
            &cache.total_shares,
            &cache.cumulative_interest_per_second,
            &cache.cumulative_reward_per_share,
            &cache.undistributed_rewards,
        );
    }

    /// Transfers the pool asset to `to`. Zero amounts are skipped.
    ///
    /// # Arguments
    /// - `cache`: Pool state, providing the asset.
    /// - `amount`: Amount in the asset decimals.
    /// - `to`: Recipient address.
    ///
    /// # Returns
    /// - `EgldOrEsdtTokenPayment<Self::Api>`: The payment that was sent.
    #[inline]
    fn send_asset(
        &self,
        cache: &Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(
            cache.params.asset_id.clone(),
            0,
            amount.into_raw_units().clone(),
        );

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Retrieves the payment sent with the call, in the pool asset decimals.
    ///
    /// A call without payment yields zero. Any non-empty payment must be the pool asset.
    fn get_payment_amount(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        if amount == BigUint::zero() {
            return cache.zero.clone();
        }

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);

        cache.get_decimal_value(&amount)
    }

    /// Sends back whatever part of `paid` exceeds `required`.
    fn refund_excess(
        &self,
        cache: &Cache<Self>,
        paid: &ManagedDecimal<Self::Api, NumDecimals>,
        required: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) {
        if paid > required {
            let excess = paid.clone() - required.clone();
            self.send_asset(cache, &excess, to);
        }
    }
}
