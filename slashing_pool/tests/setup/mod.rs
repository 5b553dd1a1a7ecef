use crate::{constants::*, proxys::*};

use common_structs::{DebtPosition, LenderPosition, PoolSnapshot, SlashType};
use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedDecimal, MultiValueEncoded,
        NumDecimals, ReturnsNewManagedAddress, ReturnsResult, TestAddress, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};
use slashing_pool::storage::Storage;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(SLASHING_POOL_PATH, slashing_pool::ContractBuilder);

    blockchain
}

/// Raw units of `amount` whole tokens.
pub fn tokens(amount: u128) -> BigUint<StaticApi> {
    BigUint::from(amount * ONE_TOKEN)
}

/// RAY-based ratio of `percent` percent.
pub fn ray_percent(percent: u128) -> BigUint<StaticApi> {
    BigUint::from(RAY / 100 * percent)
}

pub fn raw(value: u128) -> BigUint<StaticApi> {
    BigUint::from(value)
}

pub fn assert_raw(value: &ManagedDecimal<StaticApi, NumDecimals>, expected: u128) {
    assert_eq!(value.into_raw_units(), &BigUint::<StaticApi>::from(expected));
}

pub struct SlashingPoolTestState {
    pub world: ScenarioWorld,
    pub pool_sc: ManagedAddress<StaticApi>,
}

impl SlashingPoolTestState {
    pub fn new() -> Self {
        Self::with_ratios(MAX_BORROW_RATIO, MAX_SLASHABLE_RATIO)
    }

    /// Deploys a pool with custom borrow and slashable ratios, in percent of RAY.
    pub fn with_ratios(max_borrow_ratio: u128, max_slashable_ratio: u128) -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let pool_sc = setup_pool(&mut world, max_borrow_ratio, max_slashable_ratio);

        let mut state = Self { world, pool_sc };
        state.add_reporter(REPORTER_ADDRESS);
        state
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Liquidity
    pub fn deposit(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .deposit(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_for(
        &mut self,
        from: &TestAddress,
        recipient: &TestAddress,
        amount: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .deposit(OptionalValue::Some(recipient.to_managed_address()))
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn deposit_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .deposit(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn empty_deposit_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .deposit(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(
        &mut self,
        from: &TestAddress,
        shares: BigUint<StaticApi>,
        claim_rewards: bool,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .withdraw(shares, claim_rewards)
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_error(
        &mut self,
        from: &TestAddress,
        shares: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .withdraw(shares, false)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn claim_rewards(&mut self, from: &TestAddress) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .claim_rewards()
            .returns(ReturnsResult)
            .run()
    }

    pub fn transfer_shares(
        &mut self,
        from: &TestAddress,
        to: &TestAddress,
        shares: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .transfer_shares(to.to_managed_address(), shares)
            .run();
    }

    pub fn transfer_shares_error(
        &mut self,
        from: &TestAddress,
        to: ManagedAddress<StaticApi>,
        shares: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .transfer_shares(to, shares)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn catch_up(&mut self, lenders: &[TestAddress]) {
        let mut addresses = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
        for lender in lenders {
            addresses.push(lender.to_managed_address());
        }

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .catch_up(addresses)
            .run();
    }

    // Debt
    pub fn borrow(
        &mut self,
        debtor: &TestAddress,
        amount: BigUint<StaticApi>,
        max_liveness: BigUint<StaticApi>,
        max_corruption: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(debtor.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .borrow(VERIFIER_ADDRESS, amount, max_liveness, max_corruption)
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_error(
        &mut self,
        debtor: &TestAddress,
        amount: BigUint<StaticApi>,
        max_liveness: BigUint<StaticApi>,
        max_corruption: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(debtor.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .borrow(VERIFIER_ADDRESS, amount, max_liveness, max_corruption)
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn increase_debt(
        &mut self,
        debtor: &TestAddress,
        amount: BigUint<StaticApi>,
        max_liveness: BigUint<StaticApi>,
        max_corruption: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(debtor.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .increase_debt(amount, max_liveness, max_corruption)
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ReturnsResult)
            .run()
    }

    pub fn increase_debt_error(
        &mut self,
        debtor: &TestAddress,
        amount: BigUint<StaticApi>,
        max_liveness: BigUint<StaticApi>,
        max_corruption: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(debtor.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .increase_debt(amount, max_liveness, max_corruption)
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn terminate(
        &mut self,
        caller: &TestAddress,
        debtor: &TestAddress,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(caller.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .terminate(debtor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn terminate_error(
        &mut self,
        caller: &TestAddress,
        debtor: &TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(caller.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .terminate(debtor.to_managed_address())
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn top_up_slash_amount(&mut self, debtor: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(debtor.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .top_up_slash_amount()
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn top_up_slash_amount_error(
        &mut self,
        debtor: &TestAddress,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(debtor.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .top_up_slash_amount()
            .single_esdt(&STAKE_TOKEN.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Slashing
    pub fn slash(
        &mut self,
        slash_type: SlashType,
        debtor: &TestAddress,
        amount: BigUint<StaticApi>,
    ) -> bool {
        self.world
            .tx()
            .from(REPORTER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .slash(
                slash_type,
                debtor.to_managed_address(),
                amount,
                WHISTLEBLOWER_ADDRESS.to_managed_address(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn slash_error(
        &mut self,
        reporter: &TestAddress,
        slash_type: SlashType,
        debtor: &TestAddress,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(reporter.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .slash(
                slash_type,
                debtor.to_managed_address(),
                amount,
                WHISTLEBLOWER_ADDRESS.to_managed_address(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Owner
    pub fn add_reporter(&mut self, reporter: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .add_reporter(reporter.to_managed_address())
            .run();
    }

    pub fn add_reporter_error(
        &mut self,
        reporter: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .add_reporter(reporter)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn remove_reporter(&mut self, reporter: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .remove_reporter(reporter.to_managed_address())
            .run();
    }

    pub fn remove_reporter_error(&mut self, reporter: TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .remove_reporter(reporter.to_managed_address())
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_rate_model(&mut self, rates: [u128; 7]) {
        let [base, slope1, slope2, optimal, max, liveness, corruption] = rates;
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .set_rate_model(
                ray_percent(base),
                ray_percent(slope1),
                ray_percent(slope2),
                ray_percent(optimal),
                ray_percent(max),
                ray_percent(liveness),
                ray_percent(corruption),
            )
            .run();
    }

    pub fn set_rate_model_error(&mut self, rates: [u128; 7], error_message: &[u8]) {
        let [base, slope1, slope2, optimal, max, liveness, corruption] = rates;
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .set_rate_model(
                ray_percent(base),
                ray_percent(slope1),
                ray_percent(slope2),
                ray_percent(optimal),
                ray_percent(max),
                ray_percent(liveness),
                ray_percent(corruption),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_min_deposit(&mut self, min_deposit: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .set_min_deposit(min_deposit)
            .run();
    }

    pub fn set_treasury_error(
        &mut self,
        treasury: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .set_treasury(treasury)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn claim_undistributed_rewards(&mut self) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .claim_undistributed_rewards()
            .returns(ReturnsResult)
            .run()
    }

    pub fn claim_undistributed_rewards_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .claim_undistributed_rewards()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .unpause_endpoint()
            .run();
    }

    /// Marks the pool as busy, as if an operation were still running.
    pub fn lock_pool(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pool_sc.clone())
            .whitebox(slashing_pool::contract_obj, |sc| {
                sc.operation_ongoing().set(true);
            });
    }

    // Views
    pub fn get_debtor(&mut self, debtor: &TestAddress) -> Option<DebtPosition<StaticApi>> {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .get_debtor(debtor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_designated_verifier(
        &mut self,
        debtor: &TestAddress,
    ) -> Option<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .get_designated_verifier(debtor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_lender(&mut self, lender: &TestAddress) -> LenderPosition<StaticApi> {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .get_lender(lender.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_pending_rewards(
        &mut self,
        lender: &TestAddress,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .get_pending_rewards(lender.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_share_balance(
        &mut self,
        holder: &TestAddress,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .get_share_balance_view(holder.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_expected_interest(
        &mut self,
        principal: BigUint<StaticApi>,
        duration: u64,
        max_liveness: BigUint<StaticApi>,
        max_corruption: BigUint<StaticApi>,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .get_expected_interest(principal, duration, max_liveness, max_corruption)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_outstanding_interest(
        &mut self,
        debtor: &TestAddress,
    ) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .get_outstanding_interest(debtor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_borrow_rate(&mut self) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .get_borrow_rate()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_pool_state(&mut self) -> PoolSnapshot<StaticApi> {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .get_pool_state()
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_reporter(&mut self, reporter: &TestAddress) -> bool {
        let reporters = self
            .world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .reporters()
            .returns(ReturnsResult)
            .run();

        let reporter = reporter.to_managed_address();
        reporters.into_iter().any(|address| address == reporter)
    }

    pub fn is_paused(&mut self) -> bool {
        self.world
            .query()
            .to(self.pool_sc.clone())
            .typed(proxy_slashing_pool::SlashingPoolProxy)
            .paused_status()
            .returns(ReturnsResult)
            .run()
    }

    // Balances
    pub fn check_balance(&mut self, address: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .check_account(*address)
            .esdt_balance(STAKE_TOKEN, amount);
    }

    pub fn check_pool_balance(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .check_account(self.pool_sc.clone())
            .esdt_balance(STAKE_TOKEN, amount);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(TREASURY_ADDRESS).nonce(1);
    world.account(REPORTER_ADDRESS).nonce(1);
    world.account(VERIFIER_ADDRESS).nonce(1);
    world.account(WHISTLEBLOWER_ADDRESS).nonce(1);

    for account in [LENDER_A, LENDER_B, LENDER_C, DEBTOR_A, DEBTOR_B, DEBTOR_C] {
        world
            .account(account)
            .nonce(1)
            .esdt_balance(STAKE_TOKEN, tokens(INITIAL_BALANCE))
            .esdt_balance(OTHER_TOKEN, tokens(INITIAL_BALANCE));
    }
}

pub fn setup_pool(
    world: &mut ScenarioWorld,
    max_borrow_ratio: u128,
    max_slashable_ratio: u128,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_slashing_pool::SlashingPoolProxy)
        .init(
            EgldOrEsdtTokenIdentifier::esdt(STAKE_TOKEN.to_token_identifier()),
            STAKE_DECIMALS,
            TREASURY_ADDRESS,
            raw(MIN_DEPOSIT),
            BORROW_DURATION,
            ray_percent(max_borrow_ratio),
            ray_percent(max_slashable_ratio),
            ray_percent(BASE_RATE),
            ray_percent(SLOPE1),
            ray_percent(SLOPE2),
            ray_percent(OPTIMAL_UTILIZATION),
            ray_percent(MAX_RATE),
            ray_percent(LIVENESS_PREMIUM),
            ray_percent(CORRUPTION_PREMIUM),
        )
        .code(SLASHING_POOL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

/// Deploys a pool with the given borrow ratio (RAY raw units) and borrow duration, expecting
/// `init` to fail with `error_message`.
pub fn setup_pool_error(
    world: &mut ScenarioWorld,
    max_borrow_ratio: BigUint<StaticApi>,
    borrow_duration: u64,
    error_message: &[u8],
) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_slashing_pool::SlashingPoolProxy)
        .init(
            EgldOrEsdtTokenIdentifier::esdt(STAKE_TOKEN.to_token_identifier()),
            STAKE_DECIMALS,
            TREASURY_ADDRESS,
            raw(MIN_DEPOSIT),
            borrow_duration,
            max_borrow_ratio,
            ray_percent(MAX_SLASHABLE_RATIO),
            ray_percent(BASE_RATE),
            ray_percent(SLOPE1),
            ray_percent(SLOPE2),
            ray_percent(OPTIMAL_UTILIZATION),
            ray_percent(MAX_RATE),
            ray_percent(LIVENESS_PREMIUM),
            ray_percent(CORRUPTION_PREMIUM),
        )
        .code(SLASHING_POOL_PATH)
        .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
        .run();
}

/// RAY-based interest per second for a yearly interest of `yearly_interest_ray` (RAY raw units).
pub fn interest_per_second(yearly_interest_ray: u128) -> u128 {
    yearly_interest_ray / SECONDS_PER_YEAR as u128
}

/// Asset raw units of a RAY-based amount, rounded down.
pub fn ray_to_asset_down(value: u128) -> u128 {
    value / RAY_TO_ASSET
}

/// Asset raw units of a RAY-based amount, rounded up.
pub fn ray_to_asset_up(value: u128) -> u128 {
    value.div_ceil(RAY_TO_ASSET)
}
