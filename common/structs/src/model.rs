#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Immutable pool configuration plus the owner-tunable minimum deposit and treasury.
///
/// Ratios are RAY based, `min_deposit` is expressed in the asset decimals.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PoolParams<M: ManagedTypeApi> {
    pub asset_id: EgldOrEsdtTokenIdentifier<M>,
    pub asset_decimals: usize,
    pub borrow_duration: u64,
    pub max_borrow_ratio: ManagedDecimal<M, NumDecimals>,
    pub max_slashable_ratio: ManagedDecimal<M, NumDecimals>,
    pub min_deposit: ManagedDecimal<M, NumDecimals>,
    pub treasury: ManagedAddress<M>,
}

/// Parameters of the yearly borrow rate curve, all RAY based.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RateModelParams<M: ManagedTypeApi> {
    pub base_rate: ManagedDecimal<M, NumDecimals>,
    pub slope1: ManagedDecimal<M, NumDecimals>,
    pub slope2: ManagedDecimal<M, NumDecimals>,
    pub optimal_utilization: ManagedDecimal<M, NumDecimals>,
    pub max_rate: ManagedDecimal<M, NumDecimals>,
    /// Yearly premium charged per unit of liveness exposure over the borrowable liquidity.
    pub liveness_premium: ManagedDecimal<M, NumDecimals>,
    /// Yearly premium charged per unit of corruption exposure over the borrowable liquidity.
    pub corruption_premium: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlashType {
    Liveness,
    Corruption,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClosureReason {
    /// Reached its end timestamp while the pool caught up.
    Expired,
    /// Closed through `terminate`, outstanding interest refunded to the debtor.
    Terminated,
    /// Force-closed by a slash, outstanding interest released to the lenders.
    Liquidated,
    /// Closed by `increaseDebt` and reopened at the queue tail.
    Replaced,
}

/// A slashable debt position, stored in the FIFO debt queue.
///
/// `principal_amount`, `slash_amount` and the two caps use the asset decimals.
/// `interest_per_second` is RAY based.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct DebtPosition<M: ManagedTypeApi> {
    pub debtor: ManagedAddress<M>,
    pub designated_verifier: ManagedAddress<M>,
    pub principal_amount: ManagedDecimal<M, NumDecimals>,
    pub interest_per_second: ManagedDecimal<M, NumDecimals>,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub slash_amount: ManagedDecimal<M, NumDecimals>,
    pub max_slashable_amount_per_liveness: ManagedDecimal<M, NumDecimals>,
    pub max_slashable_amount_per_corruption: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> DebtPosition<M> {
    pub fn slash_cap(&self, slash_type: SlashType) -> &ManagedDecimal<M, NumDecimals> {
        match slash_type {
            SlashType::Liveness => &self.max_slashable_amount_per_liveness,
            SlashType::Corruption => &self.max_slashable_amount_per_corruption,
        }
    }

    pub fn is_expired(&self, timestamp: u64) -> bool {
        self.end_timestamp <= timestamp
    }

    /// Seconds of prepaid interest left at `timestamp`.
    pub fn remaining_seconds(&self, timestamp: u64) -> u64 {
        self.end_timestamp.saturating_sub(timestamp)
    }

    pub fn has_outstanding_slash(&self) -> bool {
        self.slash_amount.into_raw_units() > &BigUint::zero()
    }

    pub fn caps_cover(
        &self,
        max_liveness: &ManagedDecimal<M, NumDecimals>,
        max_corruption: &ManagedDecimal<M, NumDecimals>,
    ) -> bool {
        *max_liveness >= self.max_slashable_amount_per_liveness
            && *max_corruption >= self.max_slashable_amount_per_corruption
    }
}

/// Per-lender reward checkpoint.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LenderPosition<M: ManagedTypeApi> {
    /// RAY based, last observed `cumulative_reward_per_share`.
    pub cumulative_reward_per_share_last_update: ManagedDecimal<M, NumDecimals>,
    /// Realized rewards ready to claim, in the asset decimals.
    pub earned_balance: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> LenderPosition<M> {
    pub fn new(
        cumulative_reward_per_share: ManagedDecimal<M, NumDecimals>,
        asset_decimals: usize,
    ) -> Self {
        LenderPosition {
            cumulative_reward_per_share_last_update: cumulative_reward_per_share,
            earned_balance: ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals),
        }
    }
}

/// Read-only view of the pool aggregates.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PoolSnapshot<M: ManagedTypeApi> {
    pub assumed_liquidity: ManagedDecimal<M, NumDecimals>,
    pub borrowed_liquidity: ManagedDecimal<M, NumDecimals>,
    pub total_borrowable: ManagedDecimal<M, NumDecimals>,
    pub total_shares: ManagedDecimal<M, NumDecimals>,
    pub cumulative_interest_per_second: ManagedDecimal<M, NumDecimals>,
    pub cumulative_reward_per_share: ManagedDecimal<M, NumDecimals>,
    pub undistributed_rewards: ManagedDecimal<M, NumDecimals>,
    pub last_update_timestamp: u64,
    pub queue_start: u64,
    pub queue_end: u64,
}
