use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки симулятора эквити (нарушение контракта вызывающей стороной).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EquityError {
    #[error("нужно ровно 2 карманные карты, передано {0}")]
    WrongHoleCount(usize),

    #[error("на борде не может быть больше 5 карт, передано {0}")]
    TooManyBoardCards(usize),

    #[error("карта {0} встречается больше одного раза")]
    DuplicateCard(Card),

    #[error("количество розыгрышей должно быть >= 1")]
    ZeroSamples,

    #[error("некорректная конфигурация симуляции: {0}")]
    InvalidConfig(String),
}
