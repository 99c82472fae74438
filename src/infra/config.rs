use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::equity::DEFAULT_SAMPLES;

/// Настройки симуляции эквити.
///
/// Читается из JSON (все поля необязательные), например:
/// `{ "samples": 20000, "shards": 8, "seed": 42 }`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Сколько раздач разыгрываем.
    pub samples: u32,
    /// На сколько независимых шардов делим розыгрыши (1 = последовательно).
    pub shards: usize,
    /// Базовый seed. `None` – системный RNG, результат не воспроизводим.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            shards: 1,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.samples == 0 {
            return Err("SimulationConfig: samples = 0".into());
        }
        if self.shards == 0 {
            return Err("SimulationConfig: shards = 0".into());
        }
        Ok(())
    }

    /// Загрузить конфиг из JSON-файла.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        let cfg: SimulationConfig =
            serde_json::from_str(raw).map_err(|e| format!("invalid config: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Пресет с фиксированным seed (тесты, реплей).
    pub fn seeded(samples: u32, seed: u64) -> Self {
        Self {
            samples,
            shards: 1,
            seed: Some(seed),
        }
    }
}
