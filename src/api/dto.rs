use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardValue, GameMode, Phase, PlayerId, RoomCode, Winner};

/// Кто смотрит на комнату.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Viewer {
    /// Общий экран.
    Tv,
    /// Устройство ведущего.
    Host,
    /// Телефон конкретного игрока.
    Player(PlayerId),
}

impl Viewer {
    /// Видит ли зритель руку этого игрока.
    pub fn can_see_hand(&self, owner: &str) -> bool {
        matches!(self, Viewer::Player(id) if id == owner)
    }
}

/// DTO игрока в комнате.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub display_name: String,
    pub is_host: bool,
    pub connected: bool,
    pub is_eliminated: bool,
    /// Сколько карт на руке (видно всем).
    pub cards_left: usize,
    /// Сами карты – только владельцу или после конца партии.
    pub hand: Option<Vec<CardValue>>,
}

/// DTO комнаты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomViewDto {
    pub room_code: RoomCode,
    pub mode: GameMode,
    pub phase: Phase,
    pub round: u32,
    pub max_rounds: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub played_cards: Vec<Card>,
    pub players: Vec<PlayerViewDto>,
    pub last_cut_player: Option<PlayerId>,
    pub last_cutter_player: Option<PlayerId>,
    pub winner: Option<Winner>,
    /// Причина конца партии в текстовом виде.
    pub game_over_reason: Option<String>,
    pub version: u64,
    pub turn_deadline: Option<u64>,
    pub next_round_at: Option<u64>,
}

/// Краткая строка комнаты для списка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomSummaryDto {
    pub room_code: RoomCode,
    pub mode: GameMode,
    pub phase: Phase,
    pub round: u32,
    pub players: usize,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Обновлённое состояние комнаты.
    RoomState(RoomViewDto),

    /// Комната закрыта; последний снэпшот.
    RoomClosed(RoomViewDto),
}
