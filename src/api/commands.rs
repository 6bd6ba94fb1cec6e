use serde::{Deserialize, Serialize};

use crate::domain::{CardValue, GameMode, PlayerId, PlayerSeed, RoomCode};

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`ReadMyMindOperation`),
/// которые Linera экспонирует наружу, и в тела polling-запросов off-chain.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Открыть комнату (код выдаёт лобби).
    OpenRoom(OpenRoomCommand),

    /// Закрыть комнату.
    CloseRoom(CloseRoomCommand),

    /// Операция над партией в конкретной комнате.
    RoomCommand(RoomCommand),
}

/// Открыть комнату в фазе Waiting.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenRoomCommand {
    pub room_code: RoomCode,
    pub mode: GameMode,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloseRoomCommand {
    pub room_code: RoomCode,
}

/// Команды, которые относятся к партии в существующей комнате.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomCommand {
    /// Начать партию с текущим составом.
    StartGame(StartGameCommand),

    /// Пропустить задержку раздачи.
    CompleteDeal { room_code: RoomCode },

    /// Игрок выкладывает карту.
    PlayCard(PlayCardCommand),

    /// Следующий раунд.
    NextRound { room_code: RoomCode },

    /// Сбросить партию в Waiting.
    ResetGame { room_code: RoomCode },

    /// Холостой «тик»: применить сработавшие таймеры.
    Tick { room_code: RoomCode },
}

impl RoomCommand {
    pub fn room_code(&self) -> &str {
        match self {
            RoomCommand::StartGame(cmd) => &cmd.room_code,
            RoomCommand::PlayCard(cmd) => &cmd.room_code,
            RoomCommand::CompleteDeal { room_code }
            | RoomCommand::NextRound { room_code }
            | RoomCommand::ResetGame { room_code }
            | RoomCommand::Tick { room_code } => room_code,
        }
    }
}

/// Старт партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartGameCommand {
    pub room_code: RoomCode,
    pub mode: GameMode,
    /// Подключённые игроки в порядке рассадки.
    pub players: Vec<PlayerSeed>,
}

/// Ход игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayCardCommand {
    pub room_code: RoomCode,
    pub player_id: PlayerId,
    pub card: CardValue,
}
