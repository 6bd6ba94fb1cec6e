//! Внешний API движка Read My Mind.
//!
//! Здесь описываются:
//! - команды (commands.rs): всё, что меняет состояние комнаты;
//! - запросы (queries.rs): только чтение;
//! - DTO (dto.rs): удобные структуры для TV / ведущего / телефонов;
//! - ошибки (errors.rs): то, что видит клиент;
//! - исполнение (handler.rs): прогон команд через `RoomManager`.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod handler;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use handler::*;
pub use queries::*;
