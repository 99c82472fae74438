//! Покерный советник (хедз-ап Texas Hold'em).
//!
//! Три связанных части ядра:
//! - `eval` – лучшая 5-карточная рука из 5–7 карт и ключ сравнения;
//! - `equity` – вероятность выигрыша методом Монте-Карло против случайной руки;
//! - `advice` – действие (Check/Bet/Call/Raise/Fold/AllIn) по эквити и ставкам.
//!
//! `api` собирает их в один вызов `analyze`, `infra` даёт RNG и конфиг.

pub mod advice;
pub mod api;
pub mod domain;
pub mod equity;
pub mod eval;
pub mod infra;

pub use advice::{recommend, Action, BettingContext, Recommendation};
pub use equity::{estimate_win_probability, RandomSource, DEFAULT_SAMPLES};
pub use eval::{evaluate, HandCategory, HandResult};
