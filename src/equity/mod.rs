//! Симулятор эквити (Монте-Карло, хедз-ап против случайной руки).
//!
//! Основные функции:
//!   - `estimate_win_probability` – последовательно, RNG передаётся явно
//!   - `estimate_with_config` – по конфигу, с шардингом на rayon

pub mod errors;
pub mod parallel;
pub mod simulator;
pub mod tally;

pub use errors::EquityError;
pub use parallel::{estimate_with_config, shard_sizes};
pub use simulator::{estimate_win_probability, simulate_remaining, NEUTRAL_EQUITY};
pub use tally::EquityTally;

/// Количество розыгрышей по умолчанию.
pub const DEFAULT_SAMPLES: u32 = 2000;

/// RNG интерфейс для симулятора.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
