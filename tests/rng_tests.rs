//! RNG tests for poker-advisor
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отсутствие повторяющихся карт после shuffle
//! - стабильность и независимость seed'ов шардов
//! - загрузку SimulationConfig из JSON

use poker_advisor::domain::deck::Deck;
use poker_advisor::equity::{RandomSource, DEFAULT_SAMPLES};
use poker_advisor::infra::{DeterministicRng, RngSeed, SimulationConfig, SystemRng};

fn make_u64_seed(a: u64) -> [u8; 32] {
    let mut s = [0u8; 32];
    s[..8].copy_from_slice(&a.to_le_bytes());
    s
}

//
// TEST 1 – DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(make_u64_seed(123));
    let mut r2 = DeterministicRng::from_seed(make_u64_seed(123));

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 – different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_u64(111);
    let mut r2 = DeterministicRng::from_u64(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 – no duplicate cards after shuffle
//
#[test]
fn deck_shuffle_keeps_all_cards() {
    let mut deck = Deck::standard_52();
    let mut rng = SystemRng;
    rng.shuffle(&mut deck.cards);

    let mut idx: Vec<u8> = deck.cards.iter().map(|c| c.index()).collect();
    idx.sort_unstable();
    idx.dedup();

    assert_eq!(idx.len(), 52, "Shuffled deck must contain 52 unique cards");
}

//
// TEST 4 – shard seeds: stable, distinct, domain-separated
//
#[test]
fn shard_seeds_are_stable_and_distinct() {
    let base = RngSeed::from_u64(42);

    assert_eq!(base.derive_shard(0), base.derive_shard(0));
    assert_ne!(base.derive_shard(0), base.derive_shard(1));
    assert_ne!(base.derive_shard(0), base);
    assert_ne!(base.derive_shard(0), RngSeed::from_u64(43).derive_shard(0));
}

#[test]
fn rng_seed_to_rng_is_reproducible() {
    let seed = RngSeed::from_bytes(make_u64_seed(7)).derive_shard(3);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();
    seed.to_rng().shuffle(&mut a);
    seed.to_rng().shuffle(&mut b);

    assert_eq!(a, b);
}

//
// TEST 5 – SimulationConfig
//
#[test]
fn simulation_config_defaults_and_json() {
    let cfg = SimulationConfig::default();
    assert_eq!(cfg.samples, DEFAULT_SAMPLES);
    assert_eq!(cfg.shards, 1);
    assert_eq!(cfg.seed, None);

    let cfg = SimulationConfig::from_json_str(r#"{ "samples": 20000, "seed": 9 }"#).unwrap();
    assert_eq!(cfg.samples, 20_000);
    assert_eq!(cfg.shards, 1);
    assert_eq!(cfg.seed, Some(9));

    assert!(SimulationConfig::from_json_str(r#"{ "samples": 0 }"#).is_err());
    assert!(SimulationConfig::from_json_str("not json").is_err());
}

#[test]
fn simulation_config_from_file() {
    let path = std::env::temp_dir().join(format!("poker_advisor_cfg_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "samples": 500, "shards": 2 }"#).unwrap();

    let cfg = SimulationConfig::from_json_file(&path).unwrap();
    assert_eq!(cfg, SimulationConfig { samples: 500, shards: 2, seed: None });

    std::fs::remove_file(&path).unwrap();
    assert!(SimulationConfig::from_json_file(&path).is_err());
}
