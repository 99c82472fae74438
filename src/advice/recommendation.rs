use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Порог эквити для вэлью-бета, когда ставки нет.
pub const BET_THRESHOLD: f64 = 60.0;
/// Порог эквити для рейза против ставки.
pub const RAISE_THRESHOLD: f64 = 70.0;

/// Рекомендуемое действие.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Check,
    Bet,
    Call,
    Raise,
    Fold,
    AllIn,
}

impl Action {
    /// Литеральный тег для фронта.
    pub const fn tag(self) -> &'static str {
        match self {
            Action::Check => "Check",
            Action::Bet => "Bet",
            Action::Call => "Call",
            Action::Raise => "Raise",
            Action::Fold => "Fold",
            Action::AllIn => "AllIn",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Ставочный контекст: банк, сколько нужно доставить, наш стек.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BettingContext {
    pub pot: Chips,
    pub to_call: Chips,
    pub stack: Chips,
}

impl BettingContext {
    pub fn new(pot: Chips, to_call: Chips, stack: Chips) -> Self {
        Self { pot, to_call, stack }
    }

    /// Безубыточное эквити колла (pot odds), в процентах:
    /// to_call / (pot + 2 * to_call) * 100.
    ///
    /// Банк уже включает ставку соперника, плюс наш колл.
    pub fn required_equity(&self) -> f64 {
        let denom = self.pot.as_f64() + 2.0 * self.to_call.as_f64();
        if denom <= 0.0 {
            return 0.0;
        }
        self.to_call.as_f64() / denom * 100.0
    }
}

/// Рекомендация. Суммы есть только у Bet и Raise.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_min: Option<Chips>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_max: Option<Chips>,
}

impl Recommendation {
    /// Действие без суммы (Check / Call / Fold / AllIn).
    pub fn plain(action: Action) -> Self {
        Self {
            action,
            amount_min: None,
            amount_max: None,
        }
    }

    /// Действие с диапазоном размера (Bet / Raise).
    pub fn sized(action: Action, min: Chips, max: Chips) -> Self {
        Self {
            action,
            amount_min: Some(min),
            amount_max: Some(max),
        }
    }

    pub fn amount_range(&self) -> Option<(Chips, Chips)> {
        self.amount_min.zip(self.amount_max)
    }
}

/// Перевести эквити + ставочный контекст в действие.
///
/// Дерево решений (первая подходящая ветка):
/// 1. Ставки нет: equity > 60 и есть банк и стек → Bet 50%..100% банка
///    (каждая граница не больше стека), иначе Check.
/// 2. Есть ставка:
///    - колл съедает весь стек → AllIn, если equity > pot odds, иначе Fold;
///    - equity > 70 → Raise 2.5x..3.5x ставки (AllIn, если даже 2.5x
///      больше стека);
///    - equity > pot odds → Call;
///    - иначе Fold.
pub fn recommend(win_probability: f64, ctx: &BettingContext) -> Recommendation {
    let BettingContext { pot, to_call, stack } = *ctx;

    if to_call.is_zero() {
        if win_probability > BET_THRESHOLD && !pot.is_zero() && !stack.is_zero() {
            let min = pot.scaled_floor(0.5).min(stack);
            let max = pot.scaled_floor(1.0).min(stack);
            return Recommendation::sized(Action::Bet, min, max);
        }
        return Recommendation::plain(Action::Check);
    }

    let required = ctx.required_equity();

    if to_call >= stack {
        return if win_probability > required {
            Recommendation::plain(Action::AllIn)
        } else {
            Recommendation::plain(Action::Fold)
        };
    }

    if win_probability > RAISE_THRESHOLD {
        let raise_min = to_call.scaled_floor(2.5);
        let raise_max = to_call.scaled_floor(3.5);
        if raise_min > stack {
            return Recommendation::plain(Action::AllIn);
        }
        return Recommendation::sized(Action::Raise, raise_min.min(stack), raise_max.min(stack));
    }

    if win_probability > required {
        return Recommendation::plain(Action::Call);
    }

    Recommendation::plain(Action::Fold)
}
