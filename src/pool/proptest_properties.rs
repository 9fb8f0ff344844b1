//! Property-based tests for engine invariants.
//!
//! 1. **First deposit**: shares equal `isqrt(a * b)`, reserves equal deposits.
//! 2. **Later deposits**: shares equal `floor(total * amount_a / reserve_a)`
//!    for the fitted amounts, whatever the desired ratio.
//! 3. **Round trip**: deposit then full withdrawal returns at most the input.
//! 4. **Swap bounds**: output is below the out-reserve and `k` never shrinks.
//! 5. **Swap reversibility**: A→B→A returns at most the original input.
//! 6. **Slippage**: a minimum above the quote fails and changes nothing.
//! 7. **Accounting**: after any operation sequence, reserves equal the
//!    engine's ledger balances and share balances sum to the supply.

use proptest::prelude::*;

use super::SwapEngine;
use crate::clock::ManualClock;
use crate::config::EngineConfig;
use crate::domain::{
    AddLiquidity, Address, Amount, Decimals, RemoveLiquidity, SwapExactIn, Timestamp,
};
use crate::error::AmmError;
use crate::ledger::InMemoryLedger;
use crate::math::{isqrt, quote_output, CheckedArithmetic};
use crate::traits::AssetLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const DEADLINE: Timestamp = Timestamp::new(1_000);

fn teth() -> Address {
    Address::repeat_byte(0x01)
}

fn tkipu() -> Address {
    Address::repeat_byte(0x02)
}

fn actor(i: u8) -> Address {
    Address::repeat_byte(0xa0 + i)
}

type Engine = SwapEngine<InMemoryLedger, ManualClock>;

/// Engine whose actors each hold `funding` of both assets, fully approved.
fn make_engine(funding: u128) -> Engine {
    let config = EngineConfig::default();
    let spender = config.engine_address;
    let mut ledger = InMemoryLedger::new();
    for token in [teth(), tkipu()] {
        ledger.register(token, "Token", "TKN", Decimals::MAX);
        for i in 0..3 {
            let Ok(()) = ledger.mint(&token, &actor(i), Amount::new(funding)) else {
                panic!("mint");
            };
            let Ok(()) = ledger.approve(&token, &actor(i), &spender, Amount::MAX) else {
                panic!("approve");
            };
        }
    }
    let Ok(engine) = SwapEngine::new(config, ledger, ManualClock::new(Timestamp::new(0))) else {
        panic!("engine");
    };
    engine
}

fn seed(engine: &mut Engine, a: u128, b: u128) -> Amount {
    let req = AddLiquidity::exact(
        teth(),
        tkipu(),
        Amount::new(a),
        Amount::new(b),
        actor(0),
        DEADLINE,
    );
    let Ok(dep) = engine.add_liquidity(&actor(0), &req) else {
        panic!("seed deposit");
    };
    dep.shares
}

fn swap_req(amount_in: u128, min_out: Amount, token_in: Address, token_out: Address) -> SwapExactIn {
    SwapExactIn::single_hop(
        Amount::new(amount_in),
        min_out,
        token_in,
        token_out,
        actor(1),
        DEADLINE,
    )
}

fn assert_accounting(engine: &Engine) -> Result<(), TestCaseError> {
    let holder = engine.engine_address();
    prop_assert_eq!(
        engine.ledger().balance_of(&teth(), &holder),
        Ok(engine.reserve(&teth(), &tkipu()))
    );
    prop_assert_eq!(
        engine.ledger().balance_of(&tkipu(), &holder),
        Ok(engine.reserve(&tkipu(), &teth()))
    );
    prop_assert_eq!(
        engine.share_token().sum_of_balances(),
        Ok(engine.total_shares())
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Deposit sizes from dust to a billion 18-decimal units.
fn deposit_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000_000_000_000_000_000u128
}

#[derive(Debug, Clone)]
enum Op {
    Add { actor: u8, a: u128, b: u128 },
    Remove { actor: u8, per_mille: u16 },
    Swap { actor: u8, a_to_b: bool, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..3, 1u128..1_000_000_000_000u128, 1u128..1_000_000_000_000u128)
            .prop_map(|(actor, a, b)| Op::Add { actor, a, b }),
        (0u8..3, 1u16..=1_000u16).prop_map(|(actor, per_mille)| Op::Remove { actor, per_mille }),
        (0u8..3, any::<bool>(), 1u128..1_000_000_000_000u128)
            .prop_map(|(actor, a_to_b, amount)| Op::Swap { actor, a_to_b, amount }),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_first_deposit_mints_sqrt(a in deposit_strategy(), b in deposit_strategy()) {
        let mut engine = make_engine(u128::MAX / 4);
        let shares = seed(&mut engine, a, b);
        let Ok(product) = Amount::new(a).safe_mul(&Amount::new(b)) else {
            panic!("256-bit product");
        };
        prop_assert_eq!(shares, isqrt(product));
        prop_assert_eq!(engine.reserve(&teth(), &tkipu()), Amount::new(a));
        prop_assert_eq!(engine.reserve(&tkipu(), &teth()), Amount::new(b));
    }

    #[test]
    fn prop_later_deposit_mints_on_a_side(
        a in deposit_strategy(),
        b in deposit_strategy(),
        desired_a in deposit_strategy(),
        desired_b in deposit_strategy(),
    ) {
        let mut engine = make_engine(u128::MAX / 4);
        let total = seed(&mut engine, a, b);
        let req = AddLiquidity {
            token_a: teth(),
            token_b: tkipu(),
            amount_a_desired: Amount::new(desired_a),
            amount_b_desired: Amount::new(desired_b),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to: actor(2),
            deadline: DEADLINE,
        };
        match engine.add_liquidity(&actor(2), &req) {
            Ok(dep) => {
                let Ok(expected) = total.mul_div(&dep.amount_a, &Amount::new(a)) else {
                    panic!("fits");
                };
                prop_assert_eq!(dep.shares, expected);
                prop_assert!(dep.amount_a <= Amount::new(desired_a));
                prop_assert!(dep.amount_b <= Amount::new(desired_b));
                prop_assert_eq!(engine.share_balance_of(&actor(2)), expected);
                assert_accounting(&engine)?;
            }
            Err(err) => {
                // Fitting can floor one side to nothing on a lopsided pool.
                prop_assert_eq!(err, AmmError::ZeroLiquidity);
                prop_assert_eq!(engine.total_shares(), total);
            }
        }
    }

    #[test]
    fn prop_round_trip_never_profits(a in deposit_strategy(), b in deposit_strategy()) {
        let mut engine = make_engine(u128::MAX / 4);
        let shares = seed(&mut engine, a, b);
        let req = RemoveLiquidity {
            token_a: teth(),
            token_b: tkipu(),
            shares,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to: actor(0),
            deadline: DEADLINE,
        };
        let Ok(w) = engine.remove_liquidity(&actor(0), &req) else {
            panic!("withdraw");
        };
        prop_assert!(w.amount_a <= Amount::new(a));
        prop_assert!(w.amount_b <= Amount::new(b));
        prop_assert!(engine.reserve(&teth(), &tkipu()).is_zero());
        prop_assert!(engine.reserve(&tkipu(), &teth()).is_zero());
        prop_assert!(engine.total_shares().is_zero());
    }

    #[test]
    fn prop_swap_bounded_and_k_grows(
        a in deposit_strategy(),
        b in deposit_strategy(),
        amount_in in 1u128..1_000_000_000_000_000_000_000u128,
    ) {
        let mut engine = make_engine(u128::MAX / 4);
        seed(&mut engine, a, b);
        let Ok(quoted) = quote_output(Amount::new(amount_in), Amount::new(a), Amount::new(b)) else {
            panic!("quote");
        };
        let req = swap_req(amount_in, Amount::ONE, teth(), tkipu());
        match engine.swap_exact_tokens_for_tokens(&actor(1), &req) {
            Ok(out) => {
                prop_assert_eq!(out.amount_out, quoted);
                prop_assert!(out.amount_out < Amount::new(b));
                let (Ok(k_before), Ok(k_after)) = (
                    Amount::new(a).safe_mul(&Amount::new(b)),
                    engine
                        .reserve(&teth(), &tkipu())
                        .safe_mul(&engine.reserve(&tkipu(), &teth())),
                ) else {
                    panic!("k fits in 256 bits");
                };
                prop_assert!(k_after >= k_before);
            }
            Err(err) => {
                // Only a zero quote can miss a minimum of one unit.
                prop_assert_eq!(err, AmmError::SlippageExceeded);
                prop_assert!(quoted.is_zero());
            }
        }
    }

    #[test]
    fn prop_swap_reversibility(
        a in deposit_strategy(),
        b in deposit_strategy(),
        per_mille in 1u128..=100u128,
    ) {
        let mut engine = make_engine(u128::MAX / 4);
        seed(&mut engine, a, b);
        let amount_in = (a * per_mille / 1_000).max(1);
        let Ok(first) = engine.swap_exact_tokens_for_tokens(
            &actor(1),
            &swap_req(amount_in, Amount::ONE, teth(), tkipu()),
        ) else {
            return Ok(());
        };
        let Some(received) = first.amount_out.to_u128() else {
            panic!("fits u128");
        };
        let Ok(back) = engine.swap_exact_tokens_for_tokens(
            &actor(1),
            &swap_req(received, Amount::ONE, tkipu(), teth()),
        ) else {
            return Ok(());
        };
        prop_assert!(back.amount_out <= Amount::new(amount_in));
    }

    #[test]
    fn prop_slippage_leaves_state(
        a in deposit_strategy(),
        b in deposit_strategy(),
        amount_in in 1u128..1_000_000_000_000_000_000_000u128,
    ) {
        let mut engine = make_engine(u128::MAX / 4);
        seed(&mut engine, a, b);
        let Ok(quoted) = quote_output(Amount::new(amount_in), Amount::new(a), Amount::new(b)) else {
            panic!("quote");
        };
        let Ok(too_high) = quoted.safe_add(&Amount::ONE) else {
            panic!("fits");
        };
        let events = engine.events().len();
        let req = swap_req(amount_in, too_high, teth(), tkipu());
        prop_assert_eq!(
            engine.swap_exact_tokens_for_tokens(&actor(1), &req),
            Err(AmmError::SlippageExceeded)
        );
        prop_assert_eq!(engine.reserve(&teth(), &tkipu()), Amount::new(a));
        prop_assert_eq!(engine.reserve(&tkipu(), &teth()), Amount::new(b));
        prop_assert_eq!(engine.events().len(), events);
    }

    #[test]
    fn prop_accounting_holds_over_sequences(
        ops in proptest::collection::vec(op_strategy(), 1..40),
    ) {
        let mut engine = make_engine(1_000_000_000_000_000u128);
        for op in ops {
            let before = engine.total_shares();
            let result = match op {
                Op::Add { actor: who, a, b } => {
                    let req = AddLiquidity {
                        token_a: teth(),
                        token_b: tkipu(),
                        amount_a_desired: Amount::new(a),
                        amount_b_desired: Amount::new(b),
                        amount_a_min: Amount::ZERO,
                        amount_b_min: Amount::ZERO,
                        to: actor(who),
                        deadline: DEADLINE,
                    };
                    engine.add_liquidity(&actor(who), &req).map(|dep| {
                        assert!(engine.total_shares() > before);
                        dep.shares
                    })
                }
                Op::Remove { actor: who, per_mille } => {
                    let held = engine.share_balance_of(&actor(who));
                    let Ok(shares) =
                        held.mul_div(&Amount::from(u64::from(per_mille)), &Amount::new(1_000))
                    else {
                        panic!("fits");
                    };
                    let req = RemoveLiquidity {
                        token_a: teth(),
                        token_b: tkipu(),
                        shares,
                        amount_a_min: Amount::ZERO,
                        amount_b_min: Amount::ZERO,
                        to: actor(who),
                        deadline: DEADLINE,
                    };
                    engine.remove_liquidity(&actor(who), &req).map(|_| shares)
                }
                Op::Swap { actor: who, a_to_b, amount } => {
                    let (token_in, token_out) =
                        if a_to_b { (teth(), tkipu()) } else { (tkipu(), teth()) };
                    let req = SwapExactIn::single_hop(
                        Amount::new(amount),
                        Amount::ONE,
                        token_in,
                        token_out,
                        actor(who),
                        DEADLINE,
                    );
                    engine
                        .swap_exact_tokens_for_tokens(&actor(who), &req)
                        .map(|out| out.amount_out)
                }
            };
            if result.is_err() {
                prop_assert_eq!(engine.total_shares(), before);
            }
            assert_accounting(&engine)?;
        }
    }
}
