use std::collections::HashSet;

use crate::domain::{CardValue, GameMode, GameState, Phase, PlayerSeed};
use crate::engine::errors::EngineError;

/// Комната должна быть в нужной фазе.
pub fn ensure_phase(state: &GameState, expected: Phase) -> Result<(), EngineError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(EngineError::WrongPhase {
            expected,
            actual: state.phase,
        })
    }
}

/// Проверка, может ли игрок выложить эту карту при текущем состоянии комнаты.
pub fn validate_play(
    state: &GameState,
    player_id: &str,
    value: CardValue,
) -> Result<(), EngineError> {
    ensure_phase(state, Phase::Playing)?;

    let player = state
        .player(player_id)
        .ok_or_else(|| EngineError::PlayerNotFound(player_id.to_string()))?;

    if player.is_eliminated {
        return Err(EngineError::PlayerEliminated(player_id.to_string()));
    }

    if !player.holds(value) {
        return Err(EngineError::CardNotInHand {
            player_id: player_id.to_string(),
            value,
        });
    }

    Ok(())
}

/// Проверка состава игроков перед стартом партии.
pub fn validate_start(mode: GameMode, players: &[PlayerSeed]) -> Result<(), EngineError> {
    let min_players = match mode {
        GameMode::Coop => 1,
        GameMode::Versus => 2,
    };
    if players.len() < min_players {
        return Err(EngineError::NotEnoughPlayers {
            mode,
            got: players.len(),
        });
    }

    let mut seen = HashSet::with_capacity(players.len());
    for seed in players {
        if !seen.insert(seed.id.as_str()) {
            return Err(EngineError::DuplicatePlayer(seed.id.clone()));
        }
    }

    Ok(())
}
