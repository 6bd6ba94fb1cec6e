use serde::{Deserialize, Serialize};

use crate::domain::RoomCode;
use crate::engine::{EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Комната не найдена.
    RoomNotFound(RoomCode),

    /// Комната с таким кодом уже открыта.
    RoomAlreadyExists(RoomCode),

    /// Ошибка движка.
    EngineError(String),

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::RoomNotFound(code) => ApiError::RoomNotFound(code),
            ManagerError::RoomAlreadyExists(code) => ApiError::RoomAlreadyExists(code),
            ManagerError::Engine(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
