//! Исполнение команд и запросов поверх `RoomManager`.

use crate::domain::GameState;
use crate::engine::{RandomSource, RoomManager};
use crate::time_ctrl::Clock;

use super::commands::{Command, RoomCommand};
use super::dto::{CommandResponse, Viewer};
use super::errors::ApiError;
use super::queries::{build_room_summary, build_room_view, Query, QueryResponse};

/// Выполнить команду.
///
/// Устаревшие действия игроков (не та фаза, чужая карта) не считаются ошибкой:
/// комната просто возвращается без изменений.
pub fn execute_command<R: RandomSource, C: Clock>(
    manager: &RoomManager<R, C>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::OpenRoom(cmd) => {
            let state = manager.open_room(&cmd.room_code, cmd.mode)?;
            Ok(room_state(&cmd.room_code, &state, &Viewer::Host))
        }

        Command::CloseRoom(cmd) => {
            let state = manager.close_room(&cmd.room_code)?;
            Ok(CommandResponse::RoomClosed(build_room_view(
                &cmd.room_code,
                &state,
                &Viewer::Host,
            )))
        }

        Command::RoomCommand(cmd) => {
            let code = cmd.room_code().to_string();
            let (state, viewer) = match cmd {
                RoomCommand::StartGame(c) => {
                    (manager.start_game(&code, c.mode, &c.players)?, Viewer::Host)
                }
                RoomCommand::CompleteDeal { .. } => (manager.complete_deal(&code)?, Viewer::Host),
                RoomCommand::PlayCard(c) => (
                    manager.play_card(&code, &c.player_id, c.card)?,
                    Viewer::Player(c.player_id),
                ),
                RoomCommand::NextRound { .. } => (manager.next_round(&code)?, Viewer::Host),
                RoomCommand::ResetGame { .. } => (manager.reset_game(&code)?, Viewer::Host),
                RoomCommand::Tick { .. } => (manager.tick(&code)?, Viewer::Tv),
            };
            Ok(room_state(&code, &state, &viewer))
        }
    }
}

/// Выполнить запрос "только чтение".
pub fn execute_query<R: RandomSource, C: Clock>(
    manager: &RoomManager<R, C>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetRoom { room_code, viewer } => {
            let state = manager
                .snapshot(&room_code)
                .ok_or_else(|| ApiError::RoomNotFound(room_code.clone()))?;
            Ok(QueryResponse::Room(build_room_view(&room_code, &state, &viewer)))
        }

        Query::ListRooms => {
            let rooms = manager
                .room_codes()
                .into_iter()
                .filter_map(|code| {
                    manager
                        .snapshot(&code)
                        .map(|state| build_room_summary(&code, &state))
                })
                .collect();
            Ok(QueryResponse::Rooms(rooms))
        }
    }
}

/// JSON-вход / JSON-выход, как у polling-эндпоинтов комнаты.
pub fn execute_command_json<R: RandomSource, C: Clock>(
    manager: &RoomManager<R, C>,
    raw: &str,
) -> Result<String, ApiError> {
    let command: Command = serde_json::from_str(raw)?;
    let response = execute_command(manager, command)?;
    serde_json::to_string(&response).map_err(|e| ApiError::Internal(e.to_string()))
}

fn room_state(code: &str, state: &GameState, viewer: &Viewer) -> CommandResponse {
    CommandResponse::RoomState(build_room_view(code, state, viewer))
}
