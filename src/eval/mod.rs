//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate(cards) -> Result<HandResult, EvalError>` – 5..7 карт
//!   `evaluate_best_hand(hole, board)` – то же для hole + board

pub mod combinations;
pub mod errors;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use errors::EvalError;
pub use evaluator::{evaluate, evaluate_best_hand, evaluate_five, evaluate_unchecked};
pub use hand_rank::{HandCategory, HandResult};
