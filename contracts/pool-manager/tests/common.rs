#![allow(dead_code)]

use belugaswap_math::{constants::*, get_sqrt_price_at_tick, U256 as NativeU256};
use belugaswap_pool_manager::convert::to_host;
use belugaswap_pool_manager::types::*;
use belugaswap_pool_manager::{PoolManager, PoolManagerClient};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, testutils::Address as _, Address, Env, Symbol, U256,
};

// Test constants
pub const FEE: u32 = 3_000; // 0.30%
pub const TICK_SPACING: i32 = 60;
pub const L: i128 = 1_000_000_000_000_000_000;

/// Register the manager with a fresh admin
pub fn setup(env: &Env) -> (PoolManagerClient<'_>, Address) {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let manager_id = env.register(PoolManager, (admin.clone(),));
    let client = PoolManagerClient::new(env, &manager_id);

    (client, admin)
}

/// Two generated addresses in canonical order
pub fn currencies(env: &Env) -> (Address, Address) {
    let a = Address::generate(env);
    let b = Address::generate(env);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn pool_key(env: &Env, fee: u32, tick_spacing: i32, hooks: Option<Address>) -> PoolKey {
    let (currency0, currency1) = currencies(env);
    PoolKey {
        currency0,
        currency1,
        fee,
        tick_spacing,
        hooks,
    }
}

/// Host sqrt price at `tick`
pub fn price(env: &Env, tick: i32) -> U256 {
    to_host(env, get_sqrt_price_at_tick(tick).unwrap())
}

pub fn host(env: &Env, value: &str) -> U256 {
    to_host(env, NativeU256::from_dec_str(value).unwrap())
}

pub fn q96(env: &Env) -> U256 {
    U256::from_u128(env, 1u128 << 96)
}

pub fn min_limit(env: &Env) -> U256 {
    to_host(env, MIN_SQRT_PRICE + NativeU256::one())
}

pub fn max_limit(env: &Env) -> U256 {
    to_host(env, MAX_SQRT_PRICE - NativeU256::one())
}

/// Initialize a pool at price 1:1 and add `L` over [-600, 600)
pub fn setup_pool(env: &Env, client: &PoolManagerClient, key: &PoolKey) -> Address {
    let caller = Address::generate(env);
    client.initialize(&caller, key, &q96(env));
    client.modify_liquidity(&caller, key, &liquidity(-600, 600, L));
    caller
}

pub fn liquidity(tick_lower: i32, tick_upper: i32, liquidity_delta: i128) -> ModifyLiquidityParams {
    ModifyLiquidityParams {
        tick_lower,
        tick_upper,
        liquidity_delta,
    }
}

pub fn swap_params(zero_for_one: bool, amount_specified: i128, limit: U256) -> SwapParams {
    SwapParams {
        zero_for_one,
        amount_specified,
        sqrt_price_limit_x96: limit,
    }
}

/// Everything a failed call must leave untouched
pub fn snapshot(client: &PoolManagerClient, key: &PoolKey) -> (PoolState, soroban_sdk::Vec<i32>, TickInfo, TickInfo) {
    (
        client.get_pool_state(key),
        client.get_initialized_ticks(key),
        client.get_tick_info(key, &-600),
        client.get_tick_info(key, &600),
    )
}

// ============================================================
// HOOK TEST DOUBLES
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum HookKey {
    /// Answer this callback with a wrong acknowledgement
    Reject(Symbol),
    /// Trap inside this callback
    Fail(Symbol),
    /// Number of successful calls to this callback
    Calls(Symbol),
}

/// Hook that acknowledges every callback unless told otherwise
#[contract]
pub struct MockHooks;

fn respond(env: &Env, name: &str) -> Symbol {
    let name = Symbol::new(env, name);
    if env.storage().instance().has(&HookKey::Fail(name.clone())) {
        panic!("hook failure");
    }

    let calls_key = HookKey::Calls(name.clone());
    let calls: u32 = env.storage().instance().get(&calls_key).unwrap_or(0);
    env.storage().instance().set(&calls_key, &(calls + 1));

    if env.storage().instance().has(&HookKey::Reject(name.clone())) {
        return symbol_short!("nope");
    }
    name
}

#[contractimpl]
impl MockHooks {
    pub fn set_reject(env: Env, name: Symbol) {
        env.storage().instance().set(&HookKey::Reject(name), &true);
    }

    pub fn set_fail(env: Env, name: Symbol) {
        env.storage().instance().set(&HookKey::Fail(name), &true);
    }

    pub fn calls(env: Env, name: Symbol) -> u32 {
        env.storage().instance().get(&HookKey::Calls(name)).unwrap_or(0)
    }

    pub fn before_initialize(env: Env, _caller: Address, _key: PoolKey, _sqrt_price_x96: U256) -> Symbol {
        respond(&env, "before_initialize")
    }

    pub fn after_initialize(env: Env, _caller: Address, _key: PoolKey, _sqrt_price_x96: U256, _tick: i32) -> Symbol {
        respond(&env, "after_initialize")
    }

    pub fn before_modify_liquidity(
        env: Env,
        _caller: Address,
        _key: PoolKey,
        _params: ModifyLiquidityParams,
    ) -> Symbol {
        respond(&env, "before_modify_liquidity")
    }

    pub fn after_modify_liquidity(
        env: Env,
        _caller: Address,
        _key: PoolKey,
        _params: ModifyLiquidityParams,
        _delta: BalanceDelta,
    ) -> Symbol {
        respond(&env, "after_modify_liquidity")
    }

    pub fn before_swap(env: Env, _caller: Address, _key: PoolKey, _params: SwapParams) -> Symbol {
        respond(&env, "before_swap")
    }

    pub fn after_swap(env: Env, _caller: Address, _key: PoolKey, _params: SwapParams, _delta: BalanceDelta) -> Symbol {
        respond(&env, "after_swap")
    }
}

pub fn register_mock_hooks(env: &Env) -> (Address, MockHooksClient<'_>) {
    let id = env.register(MockHooks, ());
    let client = MockHooksClient::new(env, &id);
    (id, client)
}

pub use reentrant::{ReentrantHooks, ReentrantHooksClient};

mod reentrant {
    use super::*;

    /// Hook that calls back into the manager from before_swap
    #[contract]
    pub struct ReentrantHooks;

    #[contractimpl]
    impl ReentrantHooks {
        pub fn __constructor(env: Env, manager: Address) {
            env.storage().instance().set(&symbol_short!("manager"), &manager);
        }

        pub fn before_initialize(env: Env, _caller: Address, _key: PoolKey, _sqrt_price_x96: U256) -> Symbol {
            Symbol::new(&env, "before_initialize")
        }

        pub fn after_initialize(env: Env, _caller: Address, _key: PoolKey, _sqrt_price_x96: U256, _tick: i32) -> Symbol {
            Symbol::new(&env, "after_initialize")
        }

        pub fn before_modify_liquidity(
            env: Env,
            _caller: Address,
            _key: PoolKey,
            _params: ModifyLiquidityParams,
        ) -> Symbol {
            Symbol::new(&env, "before_modify_liquidity")
        }

        pub fn after_modify_liquidity(
            env: Env,
            _caller: Address,
            _key: PoolKey,
            _params: ModifyLiquidityParams,
            _delta: BalanceDelta,
        ) -> Symbol {
            Symbol::new(&env, "after_modify_liquidity")
        }

        pub fn before_swap(env: Env, _caller: Address, key: PoolKey, params: SwapParams) -> Symbol {
            let manager: Address = env.storage().instance().get(&symbol_short!("manager")).unwrap();
            PoolManagerClient::new(&env, &manager).swap(&env.current_contract_address(), &key, &params);
            Symbol::new(&env, "before_swap")
        }

        pub fn after_swap(env: Env, _caller: Address, _key: PoolKey, _params: SwapParams, _delta: BalanceDelta) -> Symbol {
            Symbol::new(&env, "after_swap")
        }
    }
}
