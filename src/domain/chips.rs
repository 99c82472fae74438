use core::fmt;

use serde::{Deserialize, Serialize};

/// Количество фишек. Обёртка над f64, чтобы не путать с обычными числами.
///
/// Банк, ставка к коллу и стек – всегда неотрицательные; "не задано" = 0.
/// Дробные суммы допустимы, округление вниз делается только для
/// рассчитанных размеров бета/рейза.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Chips(pub f64);

impl Chips {
    pub const ZERO: Chips = Chips(0.0);

    /// Отрицательное, NaN или бесконечность → 0.
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            Chips(amount)
        } else {
            Chips::ZERO
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 <= 0.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Разбор пользовательского ввода: берётся ведущее число
    /// ("100abc" → 100, "12.5 chips" → 12.5). Пустая строка, мусор или
    /// отрицательное число дают 0.
    pub fn parse_or_zero(input: &str) -> Chips {
        let trimmed = input.trim_start();
        let prefix = &trimmed[..numeric_prefix_len(trimmed)];
        match prefix.parse::<f64>() {
            Ok(v) => Chips::new(v),
            Err(_) => Chips::ZERO,
        }
    }

    /// floor(self * factor).
    pub fn scaled_floor(self, factor: f64) -> Chips {
        Chips::new((self.0 * factor).floor())
    }

    pub fn min(self, other: Chips) -> Chips {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }
}

/// Длина ведущего числа: [+-]цифры[.цифры][e[+-]цифры].
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_end = digits(i);
    let mut end = int_end;
    let mut seen_digits = int_end > i;

    if end < b.len() && b[end] == b'.' {
        let frac_end = digits(end + 1);
        if frac_end > end + 1 || seen_digits {
            seen_digits |= frac_end > end + 1;
            end = frac_end;
        }
    }
    if !seen_digits {
        return 0;
    }

    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut j = end + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_end = digits(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
