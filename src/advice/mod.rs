//! Движок рекомендаций: эквити + банк/ставка/стек → действие.

pub mod recommendation;

pub use recommendation::{
    recommend, Action, BettingContext, Recommendation, BET_THRESHOLD, RAISE_THRESHOLD,
};
