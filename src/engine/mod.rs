//! Движок Read My Mind: раздача, поиск «разреза», последствия, фазы комнаты.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `start_game` – новая партия (Waiting → Dealing)
//!   - `play_card` – игрок выкладывает карту
//!   - `next_round` – следующий раунд после RoundEnd/RoundBreak
//!   - `reset_game` – обратно в Waiting
//!   - `tick` – сработавшие таймеры (раздача, таймаут хода, пауза)

pub mod dealer;
pub mod errors;
pub mod game_loop;
pub mod outcome;
pub mod resolver;
pub mod room_manager;
pub mod validation;

pub use dealer::{deal, deal_round};
pub use errors::EngineError;
pub use game_loop::GameEngine;
pub use outcome::{apply_cut, apply_timeout, CutOutcome};
pub use resolver::{resolve, CutResolution, LowerCard};
pub use room_manager::{EngineFactory, ManagerError, RoomManager};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
