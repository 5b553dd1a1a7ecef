#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("claim_rewards")]
    fn claim_rewards_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("transfer_shares")]
    fn transfer_shares_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] slot: u64,
        #[indexed] upfront_interest: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] position: &DebtPosition<Self::Api>,
    );

    // `paid` is the shortfall collected after crediting the old outstanding interest
    #[event("increase_debt")]
    fn increase_debt_event(
        &self,
        #[indexed] slot: u64,
        #[indexed] credited_interest: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] paid: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] position: &DebtPosition<Self::Api>,
    );

    #[event("position_closed")]
    fn position_closed_event(
        &self,
        #[indexed] debtor: &ManagedAddress,
        #[indexed] slot: u64,
        #[indexed] reason: ClosureReason,
        #[indexed] outstanding_interest: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("slash")]
    fn slash_event(
        &self,
        #[indexed] reporter: &ManagedAddress,
        #[indexed] debtor: &ManagedAddress,
        #[indexed] slash_type: SlashType,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] liquidated: bool,
    );

    #[event("top_up_slash")]
    fn top_up_slash_event(
        &self,
        #[indexed] debtor: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] remaining_slash: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("update_pool_state")]
    fn update_pool_state_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] assumed_liquidity: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] borrowed_liquidity: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] total_shares: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] cumulative_interest_per_second: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] cumulative_reward_per_share: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] undistributed_rewards: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("update_rate_model")]
    fn update_rate_model_event(&self, #[indexed] params: &RateModelParams<Self::Api>);

    #[event("update_min_deposit")]
    fn update_min_deposit_event(
        &self,
        #[indexed] min_deposit: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("update_treasury")]
    fn update_treasury_event(&self, #[indexed] treasury: &ManagedAddress);

    #[event("reporter_added")]
    fn reporter_added_event(&self, #[indexed] reporter: &ManagedAddress);

    #[event("reporter_removed")]
    fn reporter_removed_event(&self, #[indexed] reporter: &ManagedAddress);

    #[event("claim_undistributed_rewards")]
    fn claim_undistributed_rewards_event(
        &self,
        #[indexed] treasury: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );
}
