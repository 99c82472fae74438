use crate::domain::card::{Card, Rank};

use super::combinations::FiveOf;
use super::errors::EvalError;
use super::hand_rank::{HandCategory, HandResult};
use super::lookup_tables::{detect_straight, rank_to_bit, straight_kickers, RankMask};

/// Главная функция: лучшая 5-карточная рука из 5–7 различных карт.
///
/// Проверяет контракт (количество карт, отсутствие дублей) и
/// возвращает ошибку вместо тихой неверной классификации.
pub fn evaluate(cards: &[Card]) -> Result<HandResult, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::WrongCardCount(cards.len()));
    }
    if let Some(card) = first_duplicate(cards) {
        return Err(EvalError::DuplicateCard(card));
    }
    Ok(evaluate_unchecked(cards))
}

/// Вычислить лучшую руку из hole + board (для подписи "ваша лучшая рука").
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandResult, EvalError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate(&all_cards)
}

/// Без проверок: вызывающий гарантирует 5–7 различных карт.
/// Используется симулятором, который собирает руки исключением из колоды.
pub fn evaluate_unchecked(cards: &[Card]) -> HandResult {
    debug_assert!((5..=7).contains(&cards.len()));

    let mut best: Option<HandResult> = None;
    for [a, b, c, d, e] in FiveOf::new(cards.len()) {
        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
        let r = evaluate_five(&five);
        if best.map_or(true, |best_r| r.key > best_r.key) {
            best = Some(r);
        }
    }

    // Пустой перебор возможен только при нарушении контракта.
    best.unwrap_or(HandResult::new(HandCategory::HighCard, [0; 5]))
}

/// Первая повторная карта (проверка через 52-битную маску).
pub fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen: u64 = 0;
    for card in cards {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Some(*card);
        }
        seen |= bit;
    }
    None
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_five(cards: &[Card; 5]) -> HandResult {
    let first_suit = cards[0].suit;
    let is_flush = cards.iter().all(|c| c.suit == first_suit);

    // Подсчёт рангов.
    let mut rank_counts = [0u8; 15]; // индексы 0..14, но используем 2..14
    let mut rank_mask: RankMask = 0;
    for card in cards.iter() {
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let straight_high = detect_straight(rank_mask);

    // Группы (count, rank) по убыванию количества, затем ранга.
    // Порядок задаёт явный ключ сортировки, а не порядок обхода.
    let mut groups = [(0u8, 0u8); 5];
    let mut len = 0;
    for r_val in (2u8..=14).rev() {
        let c = rank_counts[r_val as usize];
        if c > 0 {
            groups[len] = (c, r_val);
            len += 1;
        }
    }
    let groups = &mut groups[..len];
    groups.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    // Кикеры: ранги групп в порядке значимости, пустые слоты = 0.
    let mut kickers = [0u8; 5];
    for (slot, (_, rank)) in kickers.iter_mut().zip(groups.iter()) {
        *slot = *rank;
    }

    let mut pattern = [0u8; 5];
    for (slot, (count, _)) in pattern.iter_mut().zip(groups.iter()) {
        *slot = *count;
    }
    let pattern = &pattern[..len];

    if is_flush {
        if let Some(high) = straight_high {
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandResult::new(category, straight_kickers(high));
        }
    }

    match (pattern, straight_high) {
        ([4, 1], _) => HandResult::new(HandCategory::FourOfAKind, kickers),
        ([3, 2], _) => HandResult::new(HandCategory::FullHouse, kickers),
        _ if is_flush => HandResult::new(HandCategory::Flush, kickers),
        (_, Some(high)) => HandResult::new(HandCategory::Straight, straight_kickers(high)),
        ([3, 1, 1], _) => HandResult::new(HandCategory::ThreeOfAKind, kickers),
        ([2, 2, 1], _) => HandResult::new(HandCategory::TwoPair, kickers),
        ([2, 1, 1, 1], _) => HandResult::new(HandCategory::OnePair, kickers),
        _ => HandResult::new(HandCategory::HighCard, kickers),
    }
}
