use crate::domain::{CardValue, GameMode, Phase, PlayerId};

use thiserror::Error;

/// Причины, по которым движок отклоняет операцию.
///
/// Публичные операции (`play_card`, `next_round`, ...) превращают любую из них
/// в no-op: устаревший или повторный запрос клиента не должен портить состояние.
/// `try_*`-варианты отдают причину наружу.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Операция недоступна в фазе {actual:?} (ожидалась {expected:?})")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("Игрок {0} не найден в комнате")]
    PlayerNotFound(PlayerId),

    #[error("Игрок {0} уже выбыл")]
    PlayerEliminated(PlayerId),

    #[error("У игрока {player_id} нет карты {value}")]
    CardNotInHand { player_id: PlayerId, value: CardValue },

    #[error("Недостаточно игроков для режима {mode:?}: {got}")]
    NotEnoughPlayers { mode: GameMode, got: usize },

    #[error("Игрок {0} указан дважды")]
    DuplicatePlayer(PlayerId),

    #[error("Ни один таймер ещё не сработал")]
    NothingDue,
}
