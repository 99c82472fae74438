use std::cmp::Ordering;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::eval::evaluator::{evaluate_unchecked, first_duplicate};

use super::errors::EquityError;
use super::tally::EquityTally;
use super::RandomSource;

/// Нейтральная оценка, если колоды не хватает на раздачу.
pub const NEUTRAL_EQUITY: f64 = 50.0;

/// Оценить вероятность выигрыша (в процентах) против случайной руки.
///
/// `samples` раз перемешиваем оставшуюся колоду, сдаём сопернику 2 карты
/// и докладываем борд до 5 карт. Победа = 1, сплит = 0.5.
pub fn estimate_win_probability<R: RandomSource>(
    hole: &[Card],
    board: &[Card],
    samples: u32,
    rng: &mut R,
) -> Result<f64, EquityError> {
    validate_known(hole, board)?;
    let mut remaining = remaining_deck(hole, board);
    simulate_remaining(hole, board, &mut remaining, samples, rng)
}

/// То же, но колоду оставшихся карт передаёт вызывающий.
///
/// Если в ней меньше карт, чем нужно на раздачу, возвращаем 50%
/// и пишем предупреждение в лог.
pub fn simulate_remaining<R: RandomSource>(
    hole: &[Card],
    board: &[Card],
    remaining: &mut [Card],
    samples: u32,
    rng: &mut R,
) -> Result<f64, EquityError> {
    validate_counts(hole, board)?;
    if samples == 0 {
        return Err(EquityError::ZeroSamples);
    }

    let equity = match run_playouts(hole, board, remaining, samples, rng) {
        Some(tally) => tally.percent(),
        None => NEUTRAL_EQUITY,
    };
    log::debug!(
        "equity: hole={:?} board={} samples={} -> {:.2}%",
        hole.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        board.len(),
        samples,
        equity
    );
    Ok(equity)
}

/// Основной цикл розыгрышей. `None` – колоды не хватает.
pub(crate) fn run_playouts<R: RandomSource>(
    hole: &[Card],
    board: &[Card],
    remaining: &mut [Card],
    samples: u32,
    rng: &mut R,
) -> Option<EquityTally> {
    let missing = 5usize.saturating_sub(board.len());
    let needed = 2 + missing;
    if remaining.len() < needed {
        log::warn!(
            "not enough cards for simulation: need {}, have {}; falling back to {}%",
            needed,
            remaining.len(),
            NEUTRAL_EQUITY
        );
        return None;
    }

    // Буферы рук: [карманные | известный борд | добор].
    // Известная часть заполняется один раз, добор перезаписывается.
    let mut hero: Vec<Card> = hole.iter().chain(board).copied().collect();
    hero.extend_from_slice(&remaining[2..needed]);
    let mut villain = hero.clone();
    let tail = hero.len() - missing;

    let mut tally = EquityTally::default();
    for _ in 0..samples {
        rng.shuffle(remaining);

        villain[0] = remaining[0];
        villain[1] = remaining[1];
        for i in 0..missing {
            hero[tail + i] = remaining[2 + i];
            villain[tail + i] = remaining[2 + i];
        }

        let ours = evaluate_unchecked(&hero).key;
        let theirs = evaluate_unchecked(&villain).key;
        match ours.cmp(&theirs) {
            Ordering::Greater => tally.wins += 1,
            Ordering::Equal => tally.ties += 1,
            Ordering::Less => tally.losses += 1,
        }
    }

    Some(tally)
}

/// Колода без известных карт.
pub fn remaining_deck(hole: &[Card], board: &[Card]) -> Vec<Card> {
    let mut known = Vec::with_capacity(hole.len() + board.len());
    known.extend_from_slice(hole);
    known.extend_from_slice(board);
    Deck::without(&known).into_cards()
}

/// Проверка контракта: 2 карманные, 0..5 на борде, без повторов.
pub fn validate_known(hole: &[Card], board: &[Card]) -> Result<(), EquityError> {
    validate_counts(hole, board)?;

    let mut known = Vec::with_capacity(hole.len() + board.len());
    known.extend_from_slice(hole);
    known.extend_from_slice(board);
    match first_duplicate(&known) {
        Some(card) => Err(EquityError::DuplicateCard(card)),
        None => Ok(()),
    }
}

fn validate_counts(hole: &[Card], board: &[Card]) -> Result<(), EquityError> {
    if hole.len() != 2 {
        return Err(EquityError::WrongHoleCount(hole.len()));
    }
    if board.len() > 5 {
        return Err(EquityError::TooManyBoardCards(board.len()));
    }
    Ok(())
}
