use rayon::prelude::*;

use crate::domain::card::Card;
use crate::infra::config::SimulationConfig;
use crate::infra::rng::SystemRng;
use crate::infra::rng_seed::RngSeed;

use super::errors::EquityError;
use super::simulator::{remaining_deck, run_playouts, validate_known, NEUTRAL_EQUITY};
use super::tally::EquityTally;

/// Оценка эквити по конфигу: розыгрыши делятся на `shards` частей,
/// каждая считается в пуле rayon со своим RNG, накопители складываются.
///
/// С `seed` каждый шард получает `RngSeed::derive_shard(i)`, и результат
/// воспроизводим при тех же `samples`/`shards`/`seed`.
pub fn estimate_with_config(
    hole: &[Card],
    board: &[Card],
    config: &SimulationConfig,
) -> Result<f64, EquityError> {
    validate_known(hole, board)?;
    config.validate().map_err(EquityError::InvalidConfig)?;

    let deck = remaining_deck(hole, board);
    let plan = shard_sizes(config.samples, config.shards);
    let base_seed = config.seed.map(RngSeed::from_u64);

    let tallies: Option<Vec<EquityTally>> = plan
        .par_iter()
        .enumerate()
        .map(|(i, &n)| {
            let mut remaining = deck.clone();
            match &base_seed {
                Some(seed) => {
                    let mut rng = seed.derive_shard(i as u64).to_rng();
                    run_playouts(hole, board, &mut remaining, n, &mut rng)
                }
                None => run_playouts(hole, board, &mut remaining, n, &mut SystemRng),
            }
        })
        .collect();

    let equity = match tallies {
        Some(parts) => parts
            .into_iter()
            .fold(EquityTally::default(), EquityTally::merge)
            .percent(),
        None => NEUTRAL_EQUITY,
    };

    log::debug!(
        "equity: samples={} shards={} seeded={} -> {:.2}%",
        config.samples,
        plan.len(),
        base_seed.is_some(),
        equity
    );
    Ok(equity)
}

/// Разбить `samples` на не более чем `shards` непустых частей.
/// Остаток раздаётся первым шардам по одному.
pub fn shard_sizes(samples: u32, shards: usize) -> Vec<u32> {
    let shards = (shards.max(1) as u32).min(samples.max(1));
    let base = samples / shards;
    let extra = samples % shards;
    (0..shards)
        .map(|i| base + u32::from(i < extra))
        .filter(|&n| n > 0)
        .collect()
}
