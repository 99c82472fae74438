use serde::{Deserialize, Serialize};

use crate::advice::{Action, Recommendation};
use crate::domain::chips::Chips;
use crate::eval::{HandCategory, HandResult};

/// DTO рекомендации: тег действия + диапазон суммы (только Bet/Raise).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecommendationDto {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_min: Option<Chips>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_max: Option<Chips>,
}

impl From<Recommendation> for RecommendationDto {
    fn from(r: Recommendation) -> Self {
        Self {
            action: r.action.tag().to_string(),
            amount_min: r.amount_min,
            amount_max: r.amount_max,
        }
    }
}

impl RecommendationDto {
    pub fn is(&self, action: Action) -> bool {
        self.action == action.tag()
    }
}

/// Лучшая рука игрока: тег категории (для локализации на фронте) и
/// английское название.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestHandDto {
    pub tag: String,
    pub label: String,
}

impl From<HandCategory> for BestHandDto {
    fn from(category: HandCategory) -> Self {
        Self {
            tag: category.tag().to_string(),
            label: category.label().to_string(),
        }
    }
}

impl From<HandResult> for BestHandDto {
    fn from(result: HandResult) -> Self {
        result.category.into()
    }
}

/// Ответ на запрос анализа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResponse {
    /// Вероятность выигрыша, 0..100.
    pub win_probability: f64,
    pub recommendation: RecommendationDto,
    /// Есть, только если известно >= 5 карт (карманные + борд).
    pub best_hand: Option<BestHandDto>,
}
