// src/engine/room_manager.rs

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use tracing::info;

use crate::domain::{CardValue, GameMode, GameState, PlayerSeed, RoomCode};
use crate::engine::{EngineError, GameEngine, RandomSource};
use crate::time_ctrl::Clock;

/// Ошибки уровня менеджера комнат (над контроллером одной партии).
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Комната с таким кодом не найдена.
    #[error("Комната {0} не найдена")]
    RoomNotFound(RoomCode),

    /// Комната с таким кодом уже открыта.
    #[error("Комната {0} уже существует")]
    RoomAlreadyExists(RoomCode),

    /// Проброшенная ошибка из движка (EngineError).
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Фабрика контроллеров: по коду комнаты собрать GameEngine (конфиг, RNG, часы).
pub type EngineFactory<R, C> = Box<dyn Fn(&str) -> GameEngine<R, C> + Send + Sync>;

/// Внутренний объект: контроллер комнаты + её текущий снэпшот.
struct ManagedRoom<R: RandomSource, C: Clock> {
    engine: GameEngine<R, C>,
    state: GameState,
}

/// Менеджер комнат:
/// - хранит комнаты по коду;
/// - у каждой комнаты свой мьютекс, поэтому операции над ОДНОЙ комнатой идут
///   строго по очереди, а разные комнаты друг другу не мешают;
/// - после каждой операции заменяет снэпшот целиком.
pub struct RoomManager<R: RandomSource, C: Clock> {
    rooms: RwLock<HashMap<RoomCode, Arc<Mutex<ManagedRoom<R, C>>>>>,
    factory: EngineFactory<R, C>,
}

impl<R: RandomSource, C: Clock> RoomManager<R, C> {
    /// Создать пустой менеджер.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&str) -> GameEngine<R, C> + Send + Sync + 'static,
    {
        Self {
            rooms: RwLock::new(HashMap::new()),
            factory: Box::new(factory),
        }
    }

    /// Открыть комнату в фазе Waiting.
    pub fn open_room(&self, code: &str, mode: GameMode) -> Result<GameState, ManagerError> {
        let mut rooms = self.rooms.write();
        if rooms.contains_key(code) {
            return Err(ManagerError::RoomAlreadyExists(code.to_string()));
        }

        let engine = (self.factory)(code);
        let state = engine.initial_state(mode);
        rooms.insert(
            code.to_string(),
            Arc::new(Mutex::new(ManagedRoom {
                engine,
                state: state.clone(),
            })),
        );

        info!(room = code, ?mode, "room opened");
        Ok(state)
    }

    /// Закрыть комнату. Возвращает последний снэпшот.
    pub fn close_room(&self, code: &str) -> Result<GameState, ManagerError> {
        let slot = self
            .rooms
            .write()
            .remove(code)
            .ok_or_else(|| ManagerError::RoomNotFound(code.to_string()))?;

        info!(room = code, "room closed");
        let room = slot.lock();
        Ok(room.state.clone())
    }

    /// Есть ли комната с таким кодом.
    pub fn has_room(&self, code: &str) -> bool {
        self.rooms.read().contains_key(code)
    }

    /// Коды всех открытых комнат (по алфавиту).
    pub fn room_codes(&self) -> Vec<RoomCode> {
        let mut codes: Vec<RoomCode> = self.rooms.read().keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.rooms.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.read().is_empty()
    }

    /// Текущий снэпшот комнаты.
    pub fn snapshot(&self, code: &str) -> Option<GameState> {
        let slot = self.slot(code).ok()?;
        let room = slot.lock();
        Some(room.state.clone())
    }

    /// Выполнить операцию над комнатой под её мьютексом.
    ///
    /// Замыкание получает контроллер и текущий снэпшот, возвращает новый снэпшот.
    pub fn with_room<F>(&self, code: &str, op: F) -> Result<GameState, ManagerError>
    where
        F: FnOnce(&mut GameEngine<R, C>, &GameState) -> GameState,
    {
        self.try_with_room(code, |engine, state| Ok(op(engine, state)))
    }

    /// То же, но операция может отказать; при отказе снэпшот не меняется.
    pub fn try_with_room<F>(&self, code: &str, op: F) -> Result<GameState, ManagerError>
    where
        F: FnOnce(&mut GameEngine<R, C>, &GameState) -> Result<GameState, EngineError>,
    {
        let slot = self.slot(code)?;
        let mut room = slot.lock();

        let ManagedRoom { engine, state } = &mut *room;
        let next = op(engine, state)?;
        *state = next;

        Ok(state.clone())
    }

    pub fn start_game(
        &self,
        code: &str,
        mode: GameMode,
        players: &[PlayerSeed],
    ) -> Result<GameState, ManagerError> {
        self.with_room(code, |engine, state| engine.start_game(state, mode, players))
    }

    pub fn complete_deal(&self, code: &str) -> Result<GameState, ManagerError> {
        self.with_room(code, |engine, state| engine.complete_deal(state))
    }

    pub fn play_card(
        &self,
        code: &str,
        player_id: &str,
        value: CardValue,
    ) -> Result<GameState, ManagerError> {
        self.with_room(code, |engine, state| engine.play_card(state, player_id, value))
    }

    pub fn next_round(&self, code: &str) -> Result<GameState, ManagerError> {
        self.with_room(code, |engine, state| engine.next_round(state))
    }

    pub fn reset_game(&self, code: &str) -> Result<GameState, ManagerError> {
        self.with_room(code, |engine, state| engine.reset_game(state))
    }

    pub fn tick(&self, code: &str) -> Result<GameState, ManagerError> {
        self.with_room(code, |engine, state| engine.tick(state))
    }

    /// Прогнать таймеры во всех комнатах. Возвращает коды комнат, где что-то сработало.
    pub fn tick_all(&self) -> Vec<RoomCode> {
        let mut changed = Vec::new();
        for code in self.room_codes() {
            let before = self.snapshot(&code).map(|s| s.version);
            if let Ok(after) = self.tick(&code) {
                if before != Some(after.version) {
                    changed.push(code);
                }
            }
        }
        changed
    }

    fn slot(&self, code: &str) -> Result<Arc<Mutex<ManagedRoom<R, C>>>, ManagerError> {
        self.rooms
            .read()
            .get(code)
            .cloned()
            .ok_or_else(|| ManagerError::RoomNotFound(code.to_string()))
    }
}
