//! Full pool lifecycle on an in-memory ledger.
//!
//! Seeds a TETH/TKIPU pool, adds liquidity from a second account, swaps in
//! both directions, and withdraws everything, logging each step.
//!
//! ```text
//! cargo run --example swap_lifecycle
//! cargo run --example swap_lifecycle -- path/to/engine.toml
//! RUST_LOG=pairswap=debug cargo run --example swap_lifecycle
//! ```

use pairswap::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const E18: u128 = 1_000_000_000_000_000_000;

fn units(n: u128) -> Amount {
    Amount::new(n * E18)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    let spender = config.engine_address;

    let teth = Address::repeat_byte(0xe7);
    let tkipu = Address::repeat_byte(0x4b);
    let owner = Address::repeat_byte(0x01);
    let lp = Address::repeat_byte(0x02);

    let mut ledger = InMemoryLedger::new();
    ledger.register(teth, "Token ETH", "TETH", Decimals::MAX);
    ledger.register(tkipu, "Token KIPU", "TKIPU", Decimals::MAX);
    for (holder, amount) in [(owner, 1_000), (lp, 500)] {
        for token in [teth, tkipu] {
            ledger.mint(&token, &holder, units(amount))?;
            ledger.approve(&token, &holder, &spender, Amount::MAX)?;
        }
    }

    let clock = SystemClock;
    let deadline = clock.now().plus_secs(600);
    let mut engine = SwapEngine::with_system_clock(config, ledger)?;

    // Seed at 1 TETH = 2 TKIPU.
    let seed = AddLiquidity::exact(teth, tkipu, units(100), units(200), owner, deadline);
    let deposit = engine.add_liquidity(&owner, &seed)?;
    info!(shares = %deposit.shares, "pool seeded");
    info!(price = %engine.spot_price(&teth, &tkipu)?, "TETH in TKIPU");

    // A second provider offers 50 TETH and up to 150 TKIPU; the ratio takes 100.
    let top_up = AddLiquidity {
        token_a: teth,
        token_b: tkipu,
        amount_a_desired: units(50),
        amount_b_desired: units(150),
        amount_a_min: units(45),
        amount_b_min: units(90),
        to: lp,
        deadline,
    };
    let deposit = engine.add_liquidity(&lp, &top_up)?;
    info!(
        amount_a = %deposit.amount_a,
        amount_b = %deposit.amount_b,
        shares = %deposit.shares,
        "second provider joined"
    );

    for (token_in, token_out) in [(teth, tkipu), (tkipu, teth)] {
        let quote = pairswap::math::quote_output(
            units(10),
            engine.reserve(&token_in, &token_out),
            engine.reserve(&token_out, &token_in),
        )?;
        let min_out = min_output_with_tolerance(quote, BasisPoints::new(50))?;
        let swap = SwapExactIn::single_hop(units(10), min_out, token_in, token_out, owner, deadline);
        let outcome = engine.swap_exact_tokens_for_tokens(&owner, &swap)?;
        info!(%token_in, amount_out = %outcome.amount_out, "swapped 10 units");
    }

    match engine.swap_exact_tokens_for_tokens(
        &owner,
        &SwapExactIn::single_hop(units(10), units(1_000), teth, tkipu, owner, deadline),
    ) {
        Err(err) => info!(%err, "oversized minimum rejected"),
        Ok(_) => return Err("slippage guard did not trigger".into()),
    }

    for holder in [owner, lp] {
        let shares = engine.share_balance_of(&holder);
        let request = RemoveLiquidity {
            token_a: teth,
            token_b: tkipu,
            shares,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to: holder,
            deadline,
        };
        let withdrawal = engine.remove_liquidity(&holder, &request)?;
        info!(
            %holder,
            amount_a = %withdrawal.amount_a,
            amount_b = %withdrawal.amount_b,
            "withdrew"
        );
    }

    info!(
        reserve_teth = %engine.reserve(&teth, &tkipu),
        reserve_tkipu = %engine.reserve(&tkipu, &teth),
        total_shares = %engine.total_shares(),
        "pool drained"
    );
    println!("{}", serde_json::to_string_pretty(&engine.take_events())?);
    Ok(())
}
