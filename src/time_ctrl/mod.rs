// src/time_ctrl/mod.rs
//! Вспомогательный модуль контроля времени.
//!
//! Здесь собираем:
//! - правила (`TimingRules`);
//! - часы (`Clock`, `SystemClock`, `ManualClock`);
//! - проверку, какой из таймеров комнаты уже сработал (`due_timer`).
//!
//! Все таймеры рекомендательные: их можно пропустить, инварианты от этого не ломаются.

pub mod clock;
pub mod time_rules;

pub use clock::{Clock, ManualClock, SystemClock};
pub use time_rules::{TimingProfile, TimingRules};

use crate::domain::{GameState, Phase};

/// Какой таймер сработал к моменту `now_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueTimer {
    /// Ничего не просрочено.
    None,
    /// Пора закончить раздачу и перейти в Playing.
    DealSettled,
    /// Текущий ход просрочен.
    TurnExpired,
    /// Пауза между раундами закончилась.
    RoundBreakOver,
}

/// Проверить таймеры снэпшота.
pub fn due_timer(state: &GameState, now_ms: u64) -> DueTimer {
    let reached = |deadline: Option<u64>| deadline.is_some_and(|ts| now_ms >= ts);

    match state.phase {
        Phase::Dealing if reached(state.deal_ready_at) => DueTimer::DealSettled,
        Phase::Playing if reached(state.turn_deadline) => DueTimer::TurnExpired,
        Phase::RoundBreak if reached(state.next_round_at) => DueTimer::RoundBreakOver,
        _ => DueTimer::None,
    }
}
