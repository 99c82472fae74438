//! Тесты симулятора эквити (crate::equity).
//!
//! Статистические проверки идут с фиксированным seed, поэтому
//! они детерминированы; допуски заложены под шум Монте-Карло.

use poker_advisor::domain::card::{Card, Rank, Suit};
use poker_advisor::equity::{
    estimate_win_probability, estimate_with_config, shard_sizes, simulate_remaining,
    EquityError, EquityTally, NEUTRAL_EQUITY,
};
use poker_advisor::infra::{DeterministicRng, SimulationConfig, SystemRng};

use Rank::*;
use Suit::*;

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn pocket_aces_preflop_is_about_85_percent() {
    let hole = [c(Ace, Spades), c(Ace, Hearts)];
    let mut rng = DeterministicRng::from_u64(7);

    let equity = estimate_win_probability(&hole, &[], 20_000, &mut rng).unwrap();
    assert!((83.0..=87.0).contains(&equity), "AA equity = {equity}");
}

#[test]
fn seven_two_offsuit_is_an_underdog() {
    let hole = [c(Seven, Clubs), c(Two, Diamonds)];
    let mut rng = DeterministicRng::from_u64(11);

    let equity = estimate_win_probability(&hole, &[], 10_000, &mut rng).unwrap();
    assert!((28.0..=38.0).contains(&equity), "72o equity = {equity}");
}

#[test]
fn nut_royal_on_river_always_wins() {
    let hole = [c(Ace, Spades), c(King, Spades)];
    let board = [c(Queen, Spades), c(Jack, Spades), c(Ten, Spades), c(Two, Clubs), c(Three, Diamonds)];
    let mut rng = DeterministicRng::from_u64(1);

    let equity = estimate_win_probability(&hole, &board, 500, &mut rng).unwrap();
    assert_eq!(equity, 100.0);
}

#[test]
fn royal_on_board_always_splits() {
    let hole = [c(Two, Clubs), c(Three, Diamonds)];
    let board = [c(Ten, Spades), c(Jack, Spades), c(Queen, Spades), c(King, Spades), c(Ace, Spades)];
    let mut rng = DeterministicRng::from_u64(1);

    let equity = estimate_win_probability(&hole, &board, 500, &mut rng).unwrap();
    assert_eq!(equity, 50.0);
}

#[test]
fn same_seed_gives_identical_estimate() {
    let hole = [c(King, Hearts), c(Queen, Hearts)];
    let board = [c(Jack, Hearts), c(Four, Clubs), c(Nine, Spades)];

    let mut r1 = DeterministicRng::from_u64(42);
    let mut r2 = DeterministicRng::from_u64(42);
    let a = estimate_win_probability(&hole, &board, 2_000, &mut r1).unwrap();
    let b = estimate_win_probability(&hole, &board, 2_000, &mut r2).unwrap();

    assert_eq!(a, b);
}

#[test]
fn unseeded_runs_agree_within_sampling_noise() {
    let hole = [c(Ace, Clubs), c(King, Diamonds)];

    let a = estimate_win_probability(&hole, &[], 10_000, &mut SystemRng).unwrap();
    let b = estimate_win_probability(&hole, &[], 10_000, &mut SystemRng).unwrap();

    assert!((a - b).abs() < 4.0, "a = {a}, b = {b}");
}

#[test]
fn result_stays_in_percent_range() {
    let hole = [c(Five, Hearts), c(Six, Hearts)];
    let board = [c(Seven, Hearts), c(Eight, Clubs)];
    let mut rng = DeterministicRng::from_u64(3);

    for samples in [1, 2, 17, 300] {
        let e = estimate_win_probability(&hole, &board, samples, &mut rng).unwrap();
        assert!((0.0..=100.0).contains(&e));
    }
}

#[test]
fn short_deck_falls_back_to_neutral() {
    let hole = [c(Ace, Spades), c(Ace, Hearts)];
    // Нужно 2 + 5 = 7 карт, даём 3.
    let mut remaining = vec![c(Two, Clubs), c(Three, Clubs), c(Four, Clubs)];
    let mut rng = DeterministicRng::from_u64(5);

    let equity = simulate_remaining(&hole, &[], &mut remaining, 100, &mut rng).unwrap();
    assert_eq!(equity, NEUTRAL_EQUITY);
}

#[test]
fn contract_violations_are_errors() {
    let mut rng = DeterministicRng::from_u64(0);

    let one = [c(Ace, Spades)];
    assert_eq!(
        estimate_win_probability(&one, &[], 10, &mut rng),
        Err(EquityError::WrongHoleCount(1))
    );

    let hole = [c(Ace, Spades), c(King, Spades)];
    let six = [
        c(Two, Clubs),
        c(Three, Clubs),
        c(Four, Clubs),
        c(Five, Clubs),
        c(Six, Clubs),
        c(Seven, Clubs),
    ];
    assert_eq!(
        estimate_win_probability(&hole, &six, 10, &mut rng),
        Err(EquityError::TooManyBoardCards(6))
    );

    let dup_board = [c(Ace, Spades), c(Two, Clubs), c(Three, Clubs)];
    assert_eq!(
        estimate_win_probability(&hole, &dup_board, 10, &mut rng),
        Err(EquityError::DuplicateCard(c(Ace, Spades)))
    );

    assert_eq!(
        estimate_win_probability(&hole, &[], 0, &mut rng),
        Err(EquityError::ZeroSamples)
    );
}

//
// ---- накопитель и шардинг ----
//

#[test]
fn tally_counts_ties_as_half() {
    let t = EquityTally { wins: 3, ties: 2, losses: 5 };
    assert_eq!(t.total(), 10);
    assert_eq!(t.score(), 4.0);
    assert_eq!(t.percent(), 40.0);
    assert_eq!(EquityTally::default().percent(), 0.0);

    let merged = t.merge(EquityTally { wins: 1, ties: 0, losses: 0 });
    assert_eq!(merged, EquityTally { wins: 4, ties: 2, losses: 5 });
}

#[test]
fn shard_sizes_cover_all_samples() {
    assert_eq!(shard_sizes(10, 3), vec![4, 3, 3]);
    assert_eq!(shard_sizes(2000, 1), vec![2000]);
    assert_eq!(shard_sizes(3, 8), vec![1, 1, 1]);
    assert_eq!(shard_sizes(20_000, 8).iter().sum::<u32>(), 20_000);
}

#[test]
fn sharded_seeded_estimate_is_reproducible() {
    let hole = [c(Ace, Spades), c(Ace, Hearts)];
    let cfg = SimulationConfig {
        samples: 8_000,
        shards: 4,
        seed: Some(99),
    };

    let a = estimate_with_config(&hole, &[], &cfg).unwrap();
    let b = estimate_with_config(&hole, &[], &cfg).unwrap();
    assert_eq!(a, b);
    assert!((82.0..=88.0).contains(&a), "AA sharded equity = {a}");
}

#[test]
fn config_validation_surfaces_as_error() {
    let hole = [c(Ace, Spades), c(Ace, Hearts)];
    let cfg = SimulationConfig {
        samples: 100,
        shards: 0,
        seed: None,
    };
    assert!(matches!(
        estimate_with_config(&hole, &[], &cfg),
        Err(EquityError::InvalidConfig(_))
    ));
}
