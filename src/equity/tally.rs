use serde::{Deserialize, Serialize};

/// Накопитель исходов розыгрышей.
///
/// Слияние – простое сложение, поэтому шарды можно считать
/// независимо и сводить в любом порядке.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EquityTally {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl EquityTally {
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Очки: победа = 1, сплит = 0.5.
    pub fn score(&self) -> f64 {
        self.wins as f64 + 0.5 * self.ties as f64
    }

    /// Эквити в процентах [0, 100]. Пустой накопитель – 0.
    pub fn percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.score() / total as f64 * 100.0
    }

    pub fn merge(self, other: EquityTally) -> EquityTally {
        EquityTally {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            losses: self.losses + other.losses,
        }
    }
}
