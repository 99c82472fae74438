use thiserror::Error;

use crate::domain::card::Card;

/// Ошибки оценки руки: нарушение контракта вызывающей стороной.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("для оценки нужно от 5 до 7 карт, передано {0}")]
    WrongCardCount(usize),

    #[error("карта {0} встречается больше одного раза")]
    DuplicateCard(Card),
}
