//! Главный модуль приложения Read My Mind на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем contract/service с нашим ReadMyMindState.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;
pub mod time_ctrl;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};
use crate::state::ReadMyMindState;

/// Операции (внешние команды), которые модуль принимает.
///
/// Для простоты: одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ReadMyMindOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera.
/// Комнаты независимы, межцепочечных сообщений пока нет.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ReadMyMindMessage {}

/// Запросы к сервису (read-only).
pub type ReadMyMindQuery = Query;

/// Ответы на запросы.
pub type ReadMyMindResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct ReadMyMindAbi;

impl ContractAbi for ReadMyMindAbi {
    type Operation = ReadMyMindOperation;
    type Response = ();
}

impl ServiceAbi for ReadMyMindAbi {
    type Query = ReadMyMindQuery;
    type QueryResponse = ReadMyMindResponse;
}

/// Экспортируем тип состояния, чтобы contract.rs и service.rs могли его использовать.
pub type Storage = ReadMyMindState;
