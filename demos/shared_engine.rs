//! Several threads trading against one pool through a `SharedEngine`.
//!
//! ```text
//! cargo run --example shared_engine
//! ```

use std::thread;

use pairswap::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const E18: u128 = 1_000_000_000_000_000_000;
const TRADERS: u8 = 4;
const ROUNDS: usize = 10;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = EngineConfig::default();
    let spender = config.engine_address;
    let (teth, tkipu) = (Address::repeat_byte(0xe7), Address::repeat_byte(0x4b));
    let trader = |i: u8| Address::repeat_byte(0x10 + i);

    let mut ledger = InMemoryLedger::new();
    for token in [teth, tkipu] {
        ledger.register(token, "Token", "TKN", Decimals::MAX);
        for i in 0..TRADERS {
            ledger.mint(&token, &trader(i), Amount::new(1_000 * E18))?;
            ledger.approve(&token, &trader(i), &spender, Amount::MAX)?;
        }
    }

    let clock = ManualClock::new(Timestamp::new(0));
    let deadline = Timestamp::new(3_600);
    let shared = SharedEngine::new(SwapEngine::new(config, ledger, clock.clone())?);
    shared.add_liquidity(
        &trader(0),
        &AddLiquidity::exact(
            teth,
            tkipu,
            Amount::new(500 * E18),
            Amount::new(500 * E18),
            trader(0),
            deadline,
        ),
    )?;

    let handles: Vec<_> = (0..TRADERS)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                let (token_in, token_out) = if i % 2 == 0 { (teth, tkipu) } else { (tkipu, teth) };
                let mut received = Amount::ZERO;
                for _ in 0..ROUNDS {
                    let req = SwapExactIn::single_hop(
                        Amount::new(E18),
                        Amount::ONE,
                        token_in,
                        token_out,
                        trader(i),
                        deadline,
                    );
                    if let Ok(outcome) = shared.swap_exact_tokens_for_tokens(&trader(i), &req) {
                        received = received.checked_add(&outcome.amount_out).unwrap_or(received);
                    }
                }
                (i, received)
            })
        })
        .collect();

    for handle in handles {
        let (i, received) = handle.join().map_err(|_| "trader thread panicked")?;
        println!("trader {i} received {received}");
    }

    // Past the deadline every call is rejected.
    clock.advance(3_601);
    let late = SwapExactIn::single_hop(Amount::new(E18), Amount::ONE, teth, tkipu, trader(0), deadline);
    if let Err(err) = shared.swap_exact_tokens_for_tokens(&trader(0), &late) {
        info!(%err, "late swap rejected");
    }

    shared.with(|engine| {
        println!(
            "reserves: {} TETH / {} TKIPU, price {}",
            engine.reserve(&teth, &tkipu),
            engine.reserve(&tkipu, &teth),
            engine
                .spot_price(&teth, &tkipu)
                .map_or_else(|e| e.to_string(), |p| p.to_string()),
        );
        println!("events recorded: {}", engine.events().len());
    });
    Ok(())
}
