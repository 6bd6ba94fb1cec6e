// src/time_ctrl/time_rules.rs
//! Конфигурация тайминга комнаты.
//!
//! Здесь описываем только "правила", без состояния и без привязки к конкретной комнате.

use serde::{Deserialize, Serialize};

/// Профиль тайминга.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimingProfile {
    /// 1.5 сек на раздачу, 60 сек на ход, без паузы между раундами.
    Standard,
    /// Вечеринка: то же самое + пауза 5 сек между раундами.
    Party,
    /// Без таймаута хода (локальные тесты, CLI).
    Untimed,
}

/// Правила тайминга для одной комнаты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingRules {
    /// Сколько миллисекунд фаза Dealing держится до перехода в Playing.
    pub settle_delay_ms: u64,
    /// Таймаут хода (None: без таймаута).
    pub turn_timeout_secs: Option<u32>,
    /// Пауза между раундами (None: раунд ждёт явного `next_round` в фазе RoundEnd).
    pub round_break_secs: Option<u32>,
}

impl TimingRules {
    /// Строгий конструктор.
    pub const fn new(
        settle_delay_ms: u64,
        turn_timeout_secs: Option<u32>,
        round_break_secs: Option<u32>,
    ) -> Self {
        Self {
            settle_delay_ms,
            turn_timeout_secs,
            round_break_secs,
        }
    }

    pub const fn standard() -> Self {
        Self::new(1_500, Some(60), None)
    }

    pub const fn party() -> Self {
        Self::new(1_500, Some(60), Some(5))
    }

    pub const fn untimed() -> Self {
        Self::new(0, None, None)
    }

    pub const fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Standard => Self::standard(),
            TimingProfile::Party => Self::party(),
            TimingProfile::Untimed => Self::untimed(),
        }
    }

    /// Дедлайн хода, отсчитанный от `now_ms`.
    pub fn turn_deadline_from(&self, now_ms: u64) -> Option<u64> {
        self.turn_timeout_secs
            .map(|secs| now_ms.saturating_add(u64::from(secs) * 1_000))
    }

    /// Момент автоматического старта следующего раунда.
    pub fn next_round_from(&self, now_ms: u64) -> Option<u64> {
        self.round_break_secs
            .map(|secs| now_ms.saturating_add(u64::from(secs) * 1_000))
    }
}
