//! Инфраструктурный слой вокруг ядра:
//! - RNG-реализации для симулятора;
//! - seed'ы и их вывод для шардов;
//! - конфигурация симуляции.

pub mod config;
pub mod rng;
pub mod rng_seed;

pub use config::SimulationConfig;
pub use rng::*;
pub use rng_seed::RngSeed;
