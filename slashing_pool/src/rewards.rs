multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::{ASSUMED_LIQUIDITY_FLOOR, RAY_PRECISION};
use common_errors::{ERROR_INSUFFICIENT_POOL_BALANCE, ERROR_INSUFFICIENT_SHARES};
use common_structs::LenderPosition;

use crate::{cache::Cache, storage, utils};

/// Lender reward ledger and the pool share book.
#[multiversx_sc::module]
pub trait RewardsModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Brings a lender's reward checkpoint up to the cached `cumulative_reward_per_share`.
    ///
    /// `earned = floor((cumulative_reward_per_share - last_update) * share_balance)`
    ///
    /// Must run after the catch-up and before any change to the lender's share balance.
    /// Running it twice in the same operation earns nothing the second time.
    fn lender_sync(
        &self,
        cache: &Cache<Self>,
        lender: &ManagedAddress,
    ) -> LenderPosition<Self::Api> {
        let lender_mapper = self.lender(lender);
        let mut position = if lender_mapper.is_empty() {
            LenderPosition::new(
                cache.cumulative_reward_per_share.clone(),
                cache.params.asset_decimals,
            )
        } else {
            lender_mapper.get()
        };

        let shares = self.get_share_balance(cache, lender);
        if shares > cache.zero {
            let delta = cache.cumulative_reward_per_share.clone()
                - position.cumulative_reward_per_share_last_update.clone();
            let earned = self.mul_down(&delta, &shares, RAY_PRECISION);
            position.earned_balance += &cache.to_asset_down(&earned);
        }

        position.cumulative_reward_per_share_last_update =
            cache.cumulative_reward_per_share.clone();
        lender_mapper.set(&position);

        position
    }

    /// Pays out the lender's realized rewards and resets them to zero.
    ///
    /// Fails if the pool holds less of the asset than the claimed amount, which means the
    /// liquidity accounting is already broken.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: The claimed amount.
    fn claim_lender_rewards(
        &self,
        cache: &Cache<Self>,
        lender: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let lender_mapper = self.lender(lender);
        if lender_mapper.is_empty() {
            return cache.zero.clone();
        }

        let mut position = lender_mapper.get();
        let amount = position.earned_balance.clone();
        if amount == cache.zero {
            return amount;
        }

        let pool_balance = self
            .blockchain()
            .get_sc_balance(&cache.params.asset_id, 0);
        require!(
            cache.get_decimal_value(&pool_balance) >= amount,
            ERROR_INSUFFICIENT_POOL_BALANCE
        );

        position.earned_balance = cache.zero.clone();
        lender_mapper.set(&position);

        self.send_asset(cache, &amount, lender);
        self.claim_rewards_event(lender, &amount);

        amount
    }

    fn get_share_balance(
        &self,
        cache: &Cache<Self>,
        holder: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let balance_mapper = self.share_balance(holder);
        if balance_mapper.is_empty() {
            cache.zero.clone()
        } else {
            balance_mapper.get()
        }
    }

    /// Shares minted for a deposit of `amount`.
    ///
    /// The first deposit mints 1:1. Later deposits mint
    /// `floor(amount * total_shares / max(assumed_liquidity, ASSUMED_LIQUIDITY_FLOOR))`.
    fn calc_shares_for_deposit(
        &self,
        cache: &Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if !cache.has_shares() {
            return amount.clone();
        }

        let floor = cache.get_decimal_value(&BigUint::from(ASSUMED_LIQUIDITY_FLOOR));
        let backing = self.get_max(cache.assumed_liquidity.clone(), floor);
        let numerator = self.mul_down(amount, &cache.total_shares, RAY_PRECISION);
        let shares = self.div_down(&numerator, &backing, RAY_PRECISION);

        cache.to_asset_down(&shares)
    }

    /// Asset amount redeemed by `shares`: `floor(shares * assumed_liquidity / total_shares)`.
    fn calc_withdraw_amount(
        &self,
        cache: &Cache<Self>,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let numerator = self.mul_down(shares, &cache.assumed_liquidity, RAY_PRECISION);
        let amount = self.div_down(&numerator, &cache.total_shares, RAY_PRECISION);

        cache.to_asset_down(&amount)
    }

    fn mint_shares(
        &self,
        cache: &mut Cache<Self>,
        holder: &ManagedAddress,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let balance = self.get_share_balance(cache, holder) + shares.clone();
        self.share_balance(holder).set(&balance);
        cache.total_shares += shares;
    }

    fn burn_shares(
        &self,
        cache: &mut Cache<Self>,
        holder: &ManagedAddress,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let balance = self.get_share_balance(cache, holder);
        require!(*shares <= balance, ERROR_INSUFFICIENT_SHARES);

        self.share_balance(holder).set(&(balance - shares.clone()));
        cache.total_shares -= shares;
    }
}
