//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use poker_advisor::domain::*;

#[test]
fn card_parsing_accepts_letters_digits_and_symbols() {
    assert_eq!("Ah".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!("td".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!("10♥".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!("K♠".parse::<Card>().unwrap(), Card::new(Rank::King, Suit::Spades));
    assert_eq!(" 7c ".parse::<Card>().unwrap(), Card::new(Rank::Seven, Suit::Clubs));
}

#[test]
fn card_parsing_rejects_garbage() {
    assert!("".parse::<Card>().is_err());
    assert!("h".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
    assert!("11s".parse::<Card>().is_err());
}

#[test]
fn card_display_round_trips_short_form() {
    let card = Card::new(Rank::Ten, Suit::Diamonds);
    assert_eq!(card.to_string(), "Td");
    assert_eq!(Card::new(Rank::Seven, Suit::Clubs).to_string(), "7c");
}

#[test]
fn parse_cards_collects_or_fails() {
    let cards = parse_cards(&["Ah", "Kd"]).unwrap();
    assert_eq!(cards.len(), 2);
    assert!(parse_cards(&["Ah", "Zz"]).is_err());
}

#[test]
fn rank_values_are_two_to_fourteen() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Jack.value(), 11);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::from_value(13), Some(Rank::King));
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
}

#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    let indices: HashSet<u8> = deck.cards.iter().map(|c| c.index()).collect();
    assert_eq!(indices.len(), 52);
    assert!(indices.iter().all(|&i| i < 52));
}

#[test]
fn deck_without_known_cards() {
    let known = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Two, Suit::Clubs),
    ];
    let deck = Deck::without(&known);
    assert_eq!(deck.len(), 49);
    assert!(known.iter().all(|k| !deck.cards.contains(k)));
}

#[test]
fn chips_parse_or_zero() {
    assert_eq!(Chips::parse_or_zero("1000"), Chips(1000.0));
    assert_eq!(Chips::parse_or_zero(" 250 "), Chips(250.0));
    assert_eq!(Chips::parse_or_zero("12.9"), Chips(12.9));
    assert_eq!(Chips::parse_or_zero(".5"), Chips(0.5));
    assert_eq!(Chips::parse_or_zero("1e3"), Chips(1000.0));
    assert_eq!(Chips::parse_or_zero(""), Chips::ZERO);
    assert_eq!(Chips::parse_or_zero("abc"), Chips::ZERO);
    assert_eq!(Chips::parse_or_zero("-50"), Chips::ZERO);
    assert_eq!(Chips::parse_or_zero("."), Chips::ZERO);
}

#[test]
fn chips_parse_takes_leading_number() {
    assert_eq!(Chips::parse_or_zero("100abc"), Chips(100.0));
    assert_eq!(Chips::parse_or_zero("12.5 chips"), Chips(12.5));
    assert_eq!(Chips::parse_or_zero("7e"), Chips(7.0));
    assert_eq!(Chips::parse_or_zero("3.5.1"), Chips(3.5));
    assert_eq!(Chips::parse_or_zero("$100"), Chips::ZERO);
}

#[test]
fn chips_keep_fractions_and_floor_only_when_scaled() {
    assert_eq!(Chips::new(0.5), Chips(0.5));
    assert_eq!(Chips::new(-3.0), Chips::ZERO);
    assert_eq!(Chips::new(f64::NAN), Chips::ZERO);
    assert!(!Chips(0.5).is_zero());

    assert_eq!(Chips(15.0).scaled_floor(0.5), Chips(7.0));
    assert_eq!(Chips(15.5).scaled_floor(2.5), Chips(38.0));
    assert_eq!(Chips(15.5).scaled_floor(3.5), Chips(54.0));
    assert_eq!(Chips(99.9).scaled_floor(1.0), Chips(99.0));
    assert_eq!(Chips(10.0).min(Chips(2.5)), Chips(2.5));
}
