mod common;

use belugaswap_math::{constants::*, PoolError};
use belugaswap_pool_manager::storage::accrue_protocol_fees;
use belugaswap_pool_manager::types::BalanceDelta;
use common::*;
use soroban_sdk::{testutils::Address as _, testutils::Events, Address, Env, IntoVal, Symbol};

#[test]
fn test_exact_input_within_range() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = setup_pool(&env, &client, &key);

    let delta = client.swap(
        &caller,
        &key,
        &swap_params(true, 1_000_000_000_000_000, min_limit(&env)),
    );

    assert_eq!(
        delta,
        BalanceDelta {
            amount0: 1_000_000_000_000_000,
            amount1: -996_006_981_039_903,
        }
    );

    let state = client.get_pool_state(&key);
    assert_eq!(state.sqrt_price_x96, host(&env, "79149250711305166342700278159"));
    assert!(state.sqrt_price_x96 < q96(&env));
    assert_eq!(state.tick, -20);
    assert_eq!(state.liquidity, L as u128);
    assert_eq!(state.fee_growth_global_0_x64, 55_340_232_221_128);
    assert_eq!(state.fee_growth_global_1_x64, 0);
}

#[test]
fn test_exact_output() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = setup_pool(&env, &client, &key);

    let delta = client.swap(
        &caller,
        &key,
        &swap_params(false, -1_000_000_000_000_000, max_limit(&env)),
    );

    assert_eq!(delta.amount0, -1_000_000_000_000_000);
    assert_eq!(delta.amount1, 1_004_013_040_121_367);

    let state = client.get_pool_state(&key);
    assert_eq!(state.sqrt_price_x96, host(&env, "79307469984248586179723674011"));
    assert_eq!(state.tick, 20);
}

#[test]
fn test_swap_into_empty_region_stops_at_limit() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = setup_pool(&env, &client, &key);

    let delta = client.swap(
        &caller,
        &key,
        &swap_params(false, 100_000_000_000_000_000_000, price(&env, 1200)),
    );

    // Far less than the specified input could be used
    assert_eq!(delta.amount0, -29_553_010_879_137_169);
    assert_eq!(delta.amount1, 30_544_622_242_640_681);

    let state = client.get_pool_state(&key);
    assert_eq!(state.sqrt_price_x96, price(&env, 1200));
    assert_eq!(state.tick, 1200);
    assert_eq!(state.liquidity, 0);
    assert_eq!(state.fee_growth_global_1_x64, 1_690_346_488_014_404);

    // Crossed tick keeps its liquidity and records the fees below it
    let crossed = client.get_tick_info(&key, &600);
    assert_eq!(crossed.liquidity_net, -L);
    assert_eq!(crossed.fee_growth_outside_1_x64, 1_690_346_488_014_404);

    // Swapping back re-enters the range
    client.swap(&caller, &key, &swap_params(true, 1_000, price(&env, 540)));
    assert_eq!(client.get_liquidity(&key), L as u128);
}

#[test]
fn test_fee_growth_inside_after_swap() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = setup_pool(&env, &client, &key);

    client.swap(
        &caller,
        &key,
        &swap_params(true, 1_000_000_000_000_000, min_limit(&env)),
    );

    assert_eq!(
        client.get_fee_growth_inside(&key, &-600, &600),
        (55_340_232_221_128, 0)
    );
    // No fees were earned outside the only range
    assert_eq!(client.get_fee_growth_inside(&key, &600, &1200), (0, 0));
    assert_eq!(
        client.try_get_fee_growth_inside(&key, &-601, &600),
        Err(Ok(PoolError::TickMisaligned))
    );
}

#[test]
fn test_fee_growth_inside_unknown_pool() {
    let env = Env::default();
    let (client, _) = setup(&env);

    // Zero spacing can never be initialized
    let malformed = pool_key(&env, FEE, 0, None);
    assert_eq!(
        client.try_get_fee_growth_inside(&malformed, &-600, &600),
        Err(Ok(PoolError::PoolNotInitialized))
    );

    let missing = pool_key(&env, FEE, TICK_SPACING, None);
    assert_eq!(
        client.try_get_fee_growth_inside(&missing, &-601, &600),
        Err(Ok(PoolError::PoolNotInitialized))
    );
}

// ============================================================
// FEES
// ============================================================

#[test]
fn test_protocol_fee_is_split_off() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = setup_pool(&env, &client, &key);

    client.set_protocol_fee(&key, &1_000);
    assert_eq!(client.get_pool_state(&key).protocol_fee, 1_000);

    let delta = client.swap(
        &caller,
        &key,
        &swap_params(true, 1_000_000_000_000_000, min_limit(&env)),
    );
    assert_eq!(delta.amount0, 1_000_000_000_000_000);
    assert_eq!(delta.amount1, -995_011_965_097_726);

    assert_eq!(client.get_protocol_fees_accrued(&key.currency0), 1_000_000_000_000);
    assert_eq!(client.get_protocol_fees_accrued(&key.currency1), 0);
    assert_eq!(client.get_pool_state(&key).fee_growth_global_0_x64, 55_284_891_988_907);
}

#[test]
fn test_protocol_fee_accrual_overflow_discards_swap() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = setup_pool(&env, &client, &key);
    client.set_protocol_fee(&key, &1_000);

    env.as_contract(&client.address, || {
        accrue_protocol_fees(&env, &key.currency0, u128::MAX - 10).unwrap();
    });
    let before = snapshot(&client, &key);

    // Accrues 1e12 on top of an almost full counter
    assert_eq!(
        client.try_swap(
            &caller,
            &key,
            &swap_params(true, 1_000_000_000_000_000, min_limit(&env))
        ),
        Err(Ok(PoolError::AmountOverflow))
    );
    assert_eq!(snapshot(&client, &key), before);
    assert_eq!(client.get_protocol_fees_accrued(&key.currency0), u128::MAX - 10);
}

#[test]
fn test_protocol_fee_bounds() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    setup_pool(&env, &client, &key);

    assert_eq!(
        client.try_set_protocol_fee(&key, &(MAX_PROTOCOL_FEE + 1)),
        Err(Ok(PoolError::ProtocolFeeTooLarge))
    );

    let missing = pool_key(&env, FEE, TICK_SPACING, None);
    assert_eq!(
        client.try_set_protocol_fee(&missing, &1),
        Err(Ok(PoolError::PoolNotInitialized))
    );
}

#[test]
fn test_dynamic_fee_set_by_hook() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let (hooks, _) = register_mock_hooks(&env);
    let key = pool_key(&env, DYNAMIC_FEE_FLAG, TICK_SPACING, Some(hooks.clone()));
    let caller = setup_pool(&env, &client, &key);

    client.update_dynamic_lp_fee(&key, &FEE);
    assert_eq!(client.get_pool_state(&key).lp_fee, FEE);

    // Required the hook's authorization
    let auths = env.auths();
    assert_eq!(auths[0].0, hooks);

    // Same result as a static 0.30% pool
    let delta = client.swap(
        &caller,
        &key,
        &swap_params(true, 1_000_000_000_000_000, min_limit(&env)),
    );
    assert_eq!(delta.amount1, -996_006_981_039_903);
}

#[test]
fn test_dynamic_fee_errors() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let (hooks, _) = register_mock_hooks(&env);

    let static_key = pool_key(&env, FEE, TICK_SPACING, Some(hooks.clone()));
    setup_pool(&env, &client, &static_key);
    assert_eq!(
        client.try_update_dynamic_lp_fee(&static_key, &FEE),
        Err(Ok(PoolError::NotDynamicFee))
    );

    let no_hooks = pool_key(&env, DYNAMIC_FEE_FLAG, TICK_SPACING, None);
    assert_eq!(
        client.try_update_dynamic_lp_fee(&no_hooks, &FEE),
        Err(Ok(PoolError::NotDynamicFee))
    );

    let dynamic_key = pool_key(&env, DYNAMIC_FEE_FLAG, TICK_SPACING, Some(hooks));
    setup_pool(&env, &client, &dynamic_key);
    assert_eq!(
        client.try_update_dynamic_lp_fee(&dynamic_key, &(MAX_LP_FEE + 1)),
        Err(Ok(PoolError::LpFeeTooLarge))
    );
}

// ============================================================
// QUOTE
// ============================================================

#[test]
fn test_quote_matches_swap_and_changes_nothing() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = setup_pool(&env, &client, &key);
    let params = swap_params(false, 100_000_000_000_000_000_000, price(&env, 1200));
    let before = snapshot(&client, &key);

    let quote = client.quote_swap(&key, &params);
    assert_eq!(quote.amount0, -29_553_010_879_137_169);
    assert_eq!(quote.amount1, 30_544_622_242_640_681);
    assert_eq!(quote.tick, 1200);
    assert_eq!(quote.liquidity, 0);
    assert_eq!(quote.ticks_crossed, 1);
    assert_eq!(snapshot(&client, &key), before);

    let delta = client.swap(&caller, &key, &params);
    assert_eq!((delta.amount0, delta.amount1), (quote.amount0, quote.amount1));
    assert_eq!(client.get_pool_state(&key).sqrt_price_x96, quote.sqrt_price_x96);
}

#[test]
fn test_quote_reports_errors() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);

    assert_eq!(
        client.try_quote_swap(&key, &swap_params(true, 1, min_limit(&env))),
        Err(Ok(PoolError::PoolNotInitialized))
    );

    setup_pool(&env, &client, &key);
    assert_eq!(
        client.try_quote_swap(&key, &swap_params(true, 0, min_limit(&env))),
        Err(Ok(PoolError::SwapAmountCannotBeZero))
    );
}

// ============================================================
// VALIDATION
// ============================================================

#[test]
fn test_swap_validation() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = setup_pool(&env, &client, &key);
    let before = snapshot(&client, &key);

    assert_eq!(
        client.try_swap(&caller, &key, &swap_params(true, 0, min_limit(&env))),
        Err(Ok(PoolError::SwapAmountCannotBeZero))
    );
    assert_eq!(
        client.try_swap(&caller, &key, &swap_params(true, 1_000, price(&env, 60))),
        Err(Ok(PoolError::PriceLimitAlreadyExceeded))
    );
    assert_eq!(
        client.try_swap(&caller, &key, &swap_params(false, 1_000, price(&env, -60))),
        Err(Ok(PoolError::PriceLimitAlreadyExceeded))
    );
    assert_eq!(
        client.try_swap(&caller, &key, &swap_params(true, 1_000, price(&env, MIN_TICK))),
        Err(Ok(PoolError::PriceLimitOutOfBounds))
    );
    assert_eq!(
        client.try_swap(&caller, &key, &swap_params(false, 1_000, price(&env, MAX_TICK))),
        Err(Ok(PoolError::PriceLimitOutOfBounds))
    );

    assert_eq!(snapshot(&client, &key), before);
}

#[test]
fn test_swap_requires_initialized_unpaused_pool() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = Address::generate(&env);
    let params = swap_params(true, 1_000, min_limit(&env));

    assert_eq!(
        client.try_swap(&caller, &key, &params),
        Err(Ok(PoolError::PoolNotInitialized))
    );

    setup_pool(&env, &client, &key);
    client.set_paused(&key, &true);
    assert!(client.is_paused(&key));
    assert_eq!(
        client.try_swap(&caller, &key, &params),
        Err(Ok(PoolError::PoolPaused))
    );

    // Quotes still work while paused
    assert!(client.try_quote_swap(&key, &params).is_ok());

    client.set_paused(&key, &false);
    client.swap(&caller, &key, &params);
}

#[test]
fn test_swap_emits_event() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let key = pool_key(&env, FEE, TICK_SPACING, None);
    let caller = setup_pool(&env, &client, &key);

    client.swap(
        &caller,
        &key,
        &swap_params(true, 1_000_000_000_000_000, min_limit(&env)),
    );

    let events = env.events().all();
    let (contract, topics, _) = events.last().unwrap();
    assert_eq!(contract, client.address);
    let name: Symbol = topics.get(0).unwrap().into_val(&env);
    assert_eq!(name, Symbol::new(&env, "swap"));
}
