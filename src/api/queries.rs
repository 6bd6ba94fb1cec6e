use serde::{Deserialize, Serialize};

use crate::domain::{GameState, Phase, Player, RoomCode};

use super::dto::{PlayerViewDto, RoomSummaryDto, RoomViewDto, Viewer};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние комнаты глазами конкретного зрителя.
    GetRoom { room_code: RoomCode, viewer: Viewer },

    /// Получить список комнат.
    ListRooms,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Room(RoomViewDto),
    Rooms(Vec<RoomSummaryDto>),
}

/// Сформировать DTO комнаты для зрителя.
///
/// Руки видны только владельцу; после GameOver вскрываются для всех.
pub fn build_room_view(room_code: &str, state: &GameState, viewer: &Viewer) -> RoomViewDto {
    let reveal_all = state.phase == Phase::GameOver;

    RoomViewDto {
        room_code: room_code.to_string(),
        mode: state.mode,
        phase: state.phase,
        round: state.round,
        max_rounds: state.max_rounds,
        lives: state.lives,
        max_lives: state.max_lives,
        played_cards: state.played_cards.clone(),
        players: build_players_dto(&state.players, viewer, reveal_all),
        last_cut_player: state.last_cut_player.clone(),
        last_cutter_player: state.last_cutter_player.clone(),
        winner: state.winner.clone(),
        game_over_reason: state.game_over_reason.as_ref().map(|r| r.to_string()),
        version: state.version,
        turn_deadline: state.turn_deadline,
        next_round_at: state.next_round_at,
    }
}

/// Краткая сводка комнаты.
pub fn build_room_summary(room_code: &str, state: &GameState) -> RoomSummaryDto {
    RoomSummaryDto {
        room_code: room_code.to_string(),
        mode: state.mode,
        phase: state.phase,
        round: state.round,
        players: state.players.len(),
    }
}

/// Собрать DTO игроков.
fn build_players_dto(players: &[Player], viewer: &Viewer, reveal_all: bool) -> Vec<PlayerViewDto> {
    players
        .iter()
        .map(|p| {
            let show_cards = reveal_all || viewer.can_see_hand(&p.id);

            PlayerViewDto {
                player_id: p.id.clone(),
                display_name: p.name.clone(),
                is_host: p.is_host,
                connected: p.connected,
                is_eliminated: p.is_eliminated,
                cards_left: p.hand.len(),
                hand: if show_cards {
                    Some(p.hand.iter().copied().collect())
                } else {
                    None
                },
            }
        })
        .collect()
}
