//! Доменная модель Read My Mind: карты, игроки, снэпшот комнаты, история, конфиг.

pub mod card;
pub mod config;
pub mod deck;
pub mod game;
pub mod history;
pub mod player;

// Идентификаторы приходят от лобби, движок их не генерирует.
pub type PlayerId = String;
pub type RoomCode = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use config::*;
pub use deck::*;
pub use game::*;
pub use history::*;
pub use player::*;
