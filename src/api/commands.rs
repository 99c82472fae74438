use serde::{Deserialize, Serialize};

use crate::advice::{recommend, BettingContext};
use crate::domain::card::{parse_cards, Card};
use crate::domain::chips::Chips;
use crate::equity::{estimate_with_config, simulator::validate_known};
use crate::eval::evaluate_best_hand;
use crate::infra::config::SimulationConfig;

use super::dto::{AnalysisResponse, BestHandDto};
use super::errors::ApiError;

/// Сумма, как её прислал клиент: число или строка из поля ввода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Пустое, нечисловое или отрицательное значение → 0.
    pub fn to_chips(&self) -> Chips {
        match self {
            AmountInput::Number(v) => Chips::new(*v),
            AmountInput::Text(s) => Chips::parse_or_zero(s),
        }
    }
}

fn amount_or_zero(input: &Option<AmountInput>) -> Chips {
    input.as_ref().map_or(Chips::ZERO, AmountInput::to_chips)
}

/// Запрос анализа раздачи.
///
/// Карты – строки вида "Ah", "10♥", "Td".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisRequest {
    pub hole_cards: Vec<String>,
    pub board_cards: Vec<String>,
    pub pot_size: Option<AmountInput>,
    pub amount_to_call: Option<AmountInput>,
    pub stack_size: Option<AmountInput>,
}

impl AnalysisRequest {
    pub fn betting_context(&self) -> BettingContext {
        BettingContext::new(
            amount_or_zero(&self.pot_size),
            amount_or_zero(&self.amount_to_call),
            amount_or_zero(&self.stack_size),
        )
    }

    /// Разобрать и проверить карты: ровно 2 своих, до 5 на борде, без повторов.
    pub fn parse_cards(&self) -> Result<(Vec<Card>, Vec<Card>), ApiError> {
        if self.hole_cards.len() != 2 {
            return Err(ApiError::SelectTwoCards);
        }
        let hole = parse_cards(self.hole_cards.as_slice()).map_err(ApiError::InvalidCards)?;
        let board = parse_cards(self.board_cards.as_slice()).map_err(ApiError::InvalidCards)?;
        validate_known(&hole, &board)?;
        Ok((hole, board))
    }
}

/// Полный анализ: эквити → подпись лучшей руки → рекомендация.
pub fn analyze(
    request: &AnalysisRequest,
    config: &SimulationConfig,
) -> Result<AnalysisResponse, ApiError> {
    let (hole, board) = request.parse_cards()?;

    let win_probability = estimate_with_config(&hole, &board, config)?;

    let best_hand = if hole.len() + board.len() >= 5 {
        Some(BestHandDto::from(evaluate_best_hand(&hole, &board)?))
    } else {
        None
    };

    let ctx = request.betting_context();
    let recommendation = recommend(win_probability, &ctx);

    log::info!(
        "analysis: equity={:.1}% action={} pot={} to_call={} stack={}",
        win_probability,
        recommendation.action,
        ctx.pot,
        ctx.to_call,
        ctx.stack
    );

    Ok(AnalysisResponse {
        win_probability,
        recommendation: recommendation.into(),
        best_hand,
    })
}

/// Разбор JSON-запроса + анализ.
pub fn analyze_json(raw: &str, config: &SimulationConfig) -> Result<AnalysisResponse, ApiError> {
    let request: AnalysisRequest =
        serde_json::from_str(raw).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    analyze(&request, config)
}
