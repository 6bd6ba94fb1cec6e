use serde::{Deserialize, Serialize};

use crate::domain::card::CardValue;
use crate::domain::game::{GameMode, GameOverReason, Winner};
use crate::domain::PlayerId;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEventKind {
    /// Партия началась.
    GameStarted {
        mode: GameMode,
        players: Vec<PlayerId>,
    },

    /// Розданы руки на раунд.
    RoundDealt {
        round: u32,
        hands: Vec<(PlayerId, Vec<CardValue>)>,
    },

    /// Игрок выложил карту.
    CardPlayed {
        player_id: PlayerId,
        value: CardValue,
    },

    /// Ход оказался «разрезом».
    Cut {
        cutter: PlayerId,
        cut_player: PlayerId,
        lower_cards: Vec<CardValue>,
    },

    /// Coop: команда потеряла жизни.
    LivesLost { amount: u32, remaining: u32 },

    /// Карты ушли в сброс.
    CardsDiscarded {
        player_id: PlayerId,
        cards: Vec<CardValue>,
    },

    /// Versus: игрок выбыл.
    PlayerEliminated { player_id: PlayerId },

    /// Время хода истекло.
    TurnTimedOut { round: u32 },

    /// Все руки пусты, раунд закрыт.
    RoundCompleted { round: u32 },

    /// Партия закончена.
    GameOver {
        winner: Option<Winner>,
        reason: GameOverReason,
    },
}

/// Событие партии с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn last(&self) -> Option<&GameEventKind> {
        self.events.last().map(|e| &e.kind)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
