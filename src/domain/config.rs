//! Конфигурация партии: сколько раундов, сколько жизней, из какого пула тянем карты.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{CardValue, CARD_MAX, CARD_MIN};
use crate::domain::game::GameMode;
use crate::time_ctrl::TimingRules;

/// Ошибки конфигурации.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Некорректный JSON конфигурации: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Пустой пул карт: {min}..={max}")]
    EmptyPool { min: CardValue, max: CardValue },

    #[error("Количество раундов должно быть больше нуля")]
    ZeroRounds,

    #[error("Количество жизней должно быть больше нуля")]
    ZeroLives,
}

/// Правила одной партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub coop_max_rounds: u32,
    pub versus_max_rounds: u32,
    /// Стартовый (и максимальный) запас жизней в coop.
    pub starting_lives: u32,
    pub card_min: CardValue,
    pub card_max: CardValue,
    #[serde(default = "TimingRules::standard")]
    pub timing: TimingRules,
}

impl GameConfig {
    /// Стандартные правила: coop 10 раундов, versus 8, 3 жизни, карты 1..=100.
    pub fn standard() -> Self {
        Self {
            coop_max_rounds: 10,
            versus_max_rounds: 8,
            starting_lives: 3,
            card_min: CARD_MIN,
            card_max: CARD_MAX,
            timing: TimingRules::standard(),
        }
    }

    /// Разобрать и сразу провалидировать конфиг из JSON.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_min == 0 || self.card_min > self.card_max {
            return Err(ConfigError::EmptyPool {
                min: self.card_min,
                max: self.card_max,
            });
        }
        if self.coop_max_rounds == 0 || self.versus_max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        Ok(())
    }

    pub fn max_rounds(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Coop => self.coop_max_rounds,
            GameMode::Versus => self.versus_max_rounds,
        }
    }

    /// Размер пула.
    pub fn pool_size(&self) -> usize {
        (self.card_max as usize + 1).saturating_sub(self.card_min as usize)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
