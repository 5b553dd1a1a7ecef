multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_AMOUNT_BELOW_MIN_DEPOSIT,
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_EMPTY_SHARE_SUPPLY, ERROR_INSUFFICIENT_SHARES,
    ERROR_SELF_TRANSFER, ERROR_ZERO_SHARES_MINTED,
};

use crate::{accrual, rewards, storage, utils};

#[multiversx_sc::module]
pub trait LiquidityModule:
    storage::Storage
    + utils::UtilsModule
    + accrual::AccrualModule
    + rewards::RewardsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Deposits the pool asset and mints shares to `recipient` (the caller by default).
    ///
    /// **Process**:
    /// 1. Catches the pool up and syncs the recipient's rewards.
    /// 2. Mints `amount` shares on the first deposit, otherwise a pro-rata amount against the
    ///    assumed liquidity (floored by a small constant when the pool is nearly empty).
    /// 3. Adds `amount` to the assumed liquidity.
    ///
    /// # Payment
    /// - The pool asset, at least the configured minimum deposit.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Minted shares.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(
        &self,
        recipient: OptionalValue<ManagedAddress>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        let recipient = recipient.into_option().unwrap_or_else(|| caller.clone());

        let mut cache = self.begin_operation();
        let amount = self.get_payment_amount(&cache);

        require!(amount > cache.zero, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(
            amount >= cache.params.min_deposit,
            ERROR_AMOUNT_BELOW_MIN_DEPOSIT
        );

        self.lender_sync(&cache, &recipient);

        let shares = self.calc_shares_for_deposit(&cache, &amount);
        require!(shares > cache.zero, ERROR_ZERO_SHARES_MINTED);

        self.mint_shares(&mut cache, &recipient, &shares);
        cache.assumed_liquidity += &amount;

        self.deposit_event(&caller, &recipient, &amount, &shares);
        self.emit_pool_update(&cache);

        shares
    }

    /// Burns `shares` and pays out their share of the assumed liquidity.
    ///
    /// # Arguments
    /// - `shares`: Raw share amount to burn.
    /// - `claim_rewards`: Also pays out the realized rewards when true.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The withdrawn liquidity, rewards excluded.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        shares: BigUint,
        claim_rewards: bool,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let caller = self.blockchain().get_caller();
        let mut cache = self.begin_operation();
        let shares = cache.get_decimal_value(&shares);

        require!(shares > cache.zero, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(cache.has_shares(), ERROR_EMPTY_SHARE_SUPPLY);

        self.lender_sync(&cache, &caller);
        require!(
            shares <= self.get_share_balance(&cache, &caller),
            ERROR_INSUFFICIENT_SHARES
        );

        let amount = self.calc_withdraw_amount(&cache, &shares);

        if claim_rewards {
            self.claim_lender_rewards(&cache, &caller);
        }

        self.burn_shares(&mut cache, &caller, &shares);
        cache.assumed_liquidity -= &amount;

        self.send_asset(&cache, &amount, &caller);

        self.withdraw_event(&caller, &shares, &amount);
        self.emit_pool_update(&cache);

        amount
    }

    /// Pays out the caller's realized rewards.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The claimed amount, possibly zero.
    #[endpoint(claimRewards)]
    fn claim_rewards(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let caller = self.blockchain().get_caller();
        let cache = self.begin_operation();

        self.lender_sync(&cache, &caller);
        let amount = self.claim_lender_rewards(&cache, &caller);

        self.emit_pool_update(&cache);

        amount
    }

    /// Moves shares between two holders, syncing both reward checkpoints first.
    #[endpoint(transferShares)]
    fn transfer_shares(&self, to: ManagedAddress, shares: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(!to.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(caller != to, ERROR_SELF_TRANSFER);

        let cache = self.begin_operation();
        let shares = cache.get_decimal_value(&shares);
        require!(shares > cache.zero, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        self.lender_sync(&cache, &caller);
        self.lender_sync(&cache, &to);

        let from_balance = self.get_share_balance(&cache, &caller);
        require!(shares <= from_balance, ERROR_INSUFFICIENT_SHARES);

        let to_balance = self.get_share_balance(&cache, &to);
        self.share_balance(&caller)
            .set(&(from_balance - shares.clone()));
        self.share_balance(&to).set(&(to_balance + shares.clone()));

        self.transfer_shares_event(&caller, &to, &shares);
        self.emit_pool_update(&cache);
    }

    /// Realizes all interest up to now and refreshes the reward checkpoint of each given lender.
    ///
    /// Permissionless. Useful to read fresh values through the views.
    #[endpoint(catchUp)]
    fn catch_up(&self, lenders: MultiValueEncoded<ManagedAddress>) {
        let cache = self.begin_operation();

        for lender in lenders {
            self.lender_sync(&cache, &lender);
        }

        self.emit_pool_update(&cache);
    }
}
