use serde::{Deserialize, Serialize};

use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Все категории от слабейшей к сильнейшей.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Литеральный тег для фронта (фронт сам переводит его в текст).
    pub const fn tag(self) -> &'static str {
        match self {
            HandCategory::HighCard => "HIGH_CARD",
            HandCategory::OnePair => "ONE_PAIR",
            HandCategory::TwoPair => "TWO_PAIR",
            HandCategory::ThreeOfAKind => "THREE_OF_A_KIND",
            HandCategory::Straight => "STRAIGHT",
            HandCategory::Flush => "FLUSH",
            HandCategory::FullHouse => "FULL_HOUSE",
            HandCategory::FourOfAKind => "FOUR_OF_A_KIND",
            HandCategory::StraightFlush => "STRAIGHT_FLUSH",
            HandCategory::RoyalFlush => "ROYAL_FLUSH",
        }
    }

    /// Английское название категории.
    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    fn from_id(id: u8) -> Option<HandCategory> {
        HandCategory::ALL.get(id as usize).copied()
    }
}

/// Результат оценки: категория + ключ сравнения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    pub category: HandCategory,
    pub key: HandRank,
}

impl HandResult {
    pub fn new(category: HandCategory, kickers: [u8; 5]) -> Self {
        Self {
            category,
            key: HandRank::from_category_and_kickers(category, kickers),
        }
    }
}

impl HandRank {
    /// Собрать HandRank из категории и 5 кикеров (от старшего к младшему).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][k0:4][k1:4][k2:4][k3:4][k4:4]
    /// Кикер – значение ранга 1..14 (1 = туз в колесе), 0 = пустой слот.
    pub fn from_category_and_kickers(category: HandCategory, kickers: [u8; 5]) -> Self {
        let cat_bits = (category as u32) & 0x0F;
        let value = kickers
            .iter()
            .fold(cat_bits, |acc, &k| (acc << 4) | (k as u32 & 0x0F));

        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> HandCategory {
        let cat_id = ((self.0 >> 20) & 0x0F) as u8;
        HandCategory::from_id(cat_id).unwrap_or(HandCategory::HighCard)
    }

    /// Достать 5 кикеров (от старшего к младшему) из HandRank.
    pub fn kickers(&self) -> [u8; 5] {
        [
            ((self.0 >> 16) & 0x0F) as u8,
            ((self.0 >> 12) & 0x0F) as u8,
            ((self.0 >> 8) & 0x0F) as u8,
            ((self.0 >> 4) & 0x0F) as u8,
            (self.0 & 0x0F) as u8,
        ]
    }
}
