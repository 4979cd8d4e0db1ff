// Hook Dispatch
//
// A pool with a hook address gets a before/after callback around each
// mutating operation. Every callback must answer with its own name as a
// Symbol; anything else aborts the operation before it commits.

use belugaswap_math::PoolError;
use soroban_sdk::{contractclient, Address, Env, Symbol, U256};

use crate::types::{BalanceDelta, ModifyLiquidityParams, PoolKey, SwapParams};

#[allow(dead_code)]
#[contractclient(name = "HooksClient")]
pub trait Hooks {
    fn before_initialize(env: Env, caller: Address, key: PoolKey, sqrt_price_x96: U256) -> Symbol;

    fn after_initialize(
        env: Env,
        caller: Address,
        key: PoolKey,
        sqrt_price_x96: U256,
        tick: i32,
    ) -> Symbol;

    fn before_modify_liquidity(
        env: Env,
        caller: Address,
        key: PoolKey,
        params: ModifyLiquidityParams,
    ) -> Symbol;

    fn after_modify_liquidity(
        env: Env,
        caller: Address,
        key: PoolKey,
        params: ModifyLiquidityParams,
        delta: BalanceDelta,
    ) -> Symbol;

    fn before_swap(env: Env, caller: Address, key: PoolKey, params: SwapParams) -> Symbol;

    fn after_swap(
        env: Env,
        caller: Address,
        key: PoolKey,
        params: SwapParams,
        delta: BalanceDelta,
    ) -> Symbol;
}

/// Calls the hooks of one pool on behalf of one caller
///
/// A pool without hooks makes every call a no-op.
pub struct HookDispatcher<'a> {
    env: &'a Env,
    client: Option<HooksClient<'a>>,
    caller: &'a Address,
    key: &'a PoolKey,
}

impl<'a> HookDispatcher<'a> {
    pub fn new(env: &'a Env, caller: &'a Address, key: &'a PoolKey) -> Self {
        Self {
            env,
            client: key.hooks.as_ref().map(|hooks| HooksClient::new(env, hooks)),
            caller,
            key,
        }
    }

    pub fn before_initialize(&self, sqrt_price_x96: &U256) -> Result<(), PoolError> {
        match &self.client {
            Some(client) => self.check(
                client.try_before_initialize(self.caller, self.key, sqrt_price_x96),
                "before_initialize",
            ),
            None => Ok(()),
        }
    }

    pub fn after_initialize(&self, sqrt_price_x96: &U256, tick: i32) -> Result<(), PoolError> {
        match &self.client {
            Some(client) => self.check(
                client.try_after_initialize(self.caller, self.key, sqrt_price_x96, &tick),
                "after_initialize",
            ),
            None => Ok(()),
        }
    }

    pub fn before_modify_liquidity(&self, params: &ModifyLiquidityParams) -> Result<(), PoolError> {
        match &self.client {
            Some(client) => self.check(
                client.try_before_modify_liquidity(self.caller, self.key, params),
                "before_modify_liquidity",
            ),
            None => Ok(()),
        }
    }

    pub fn after_modify_liquidity(
        &self,
        params: &ModifyLiquidityParams,
        delta: &BalanceDelta,
    ) -> Result<(), PoolError> {
        match &self.client {
            Some(client) => self.check(
                client.try_after_modify_liquidity(self.caller, self.key, params, delta),
                "after_modify_liquidity",
            ),
            None => Ok(()),
        }
    }

    pub fn before_swap(&self, params: &SwapParams) -> Result<(), PoolError> {
        match &self.client {
            Some(client) => self.check(
                client.try_before_swap(self.caller, self.key, params),
                "before_swap",
            ),
            None => Ok(()),
        }
    }

    pub fn after_swap(&self, params: &SwapParams, delta: &BalanceDelta) -> Result<(), PoolError> {
        match &self.client {
            Some(client) => self.check(
                client.try_after_swap(self.caller, self.key, params, delta),
                "after_swap",
            ),
            None => Ok(()),
        }
    }

    fn check<E1, E2>(&self, result: Result<Result<Symbol, E1>, E2>, name: &str) -> Result<(), PoolError> {
        match result {
            Ok(Ok(ack)) if ack == Symbol::new(self.env, name) => Ok(()),
            Ok(Ok(_)) => Err(PoolError::InvalidHookResponse),
            // The call trapped, or its return value was not a Symbol
            Ok(Err(_)) | Err(_) => Err(PoolError::HookCallFailed),
        }
    }
}
