use serde::{Deserialize, Serialize};

/// Ранг руки (ключ сравнения). Заполняется модулем eval.
///
/// Сравнение двух рук = обычное сравнение чисел.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);
