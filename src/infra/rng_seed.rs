//! RngSeed – доменный seed для RNG симулятора.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32], можно собрать из u64)
//!   - детерминированно выводить независимые seed'ы для шардов:
//!         shard = H(domain || base || shard_index)
//!   - создавать DeterministicRng из seed
//!
//! Нужен для параллельной симуляции: каждый поток получает свой RNG,
//! а результат при фиксированном seed воспроизводим.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed для шарда с номером `shard_index`.
    pub fn derive_shard(&self, shard_index: u64) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"POKER_ADVISOR_EQUITY_V1");
        hasher.update(self.bytes);
        hasher.update(shard_index.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
