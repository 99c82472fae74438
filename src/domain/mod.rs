//! Доменная модель: карты, колода, фишки, ранг руки.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
