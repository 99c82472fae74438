use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::equity::EquityError;
use crate::eval::EvalError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Игрок не выбрал ровно две свои карты.
    #[error("Please select 2 cards for yourself.")]
    SelectTwoCards,

    /// Карты не разобрались, повторяются или их слишком много.
    #[error("Invalid cards: {0}")]
    InvalidCards(String),

    /// Внутренняя ошибка.
    #[error("Error during analysis: {0}")]
    Internal(String),
}

impl ApiError {
    /// Сообщение для пользователя.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<EquityError> for ApiError {
    fn from(err: EquityError) -> Self {
        match err {
            EquityError::WrongHoleCount(_) => ApiError::SelectTwoCards,
            EquityError::TooManyBoardCards(_) | EquityError::DuplicateCard(_) => {
                ApiError::InvalidCards(err.to_string())
            }
            EquityError::ZeroSamples | EquityError::InvalidConfig(_) => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<EvalError> for ApiError {
    fn from(err: EvalError) -> Self {
        ApiError::InvalidCards(err.to_string())
    }
}
