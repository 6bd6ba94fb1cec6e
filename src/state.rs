use linera_sdk::views::{linera_views, MapView, RegisterView, RootView, ViewError, ViewStorageContext};

use crate::domain::{GameState, RoomCode};

/// Глобальное состояние приложения Read My Mind на Linera.
///
/// Важное:
/// - одна комната = один снэпшот GameState, заменяется целиком;
/// - операции контракта над цепочкой исполняются по одной, так что
///   сериализация на комнату получается даром.
#[derive(RootView)]
#[view(context = ViewStorageContext)]
pub struct ReadMyMindState {
    /// Все комнаты.
    ///
    /// Ключ: код комнаты,
    /// Значение: последний снэпшот партии.
    pub rooms: MapView<RoomCode, GameState>,

    /// Сколько партий доиграно до GameOver (для статистики / мониторинга).
    pub total_games_finished: RegisterView<u64>,
}

impl ReadMyMindState {
    /// Загрузить снэпшот комнаты.
    pub async fn load_room(&self, code: &RoomCode) -> Result<Option<GameState>, ViewError> {
        self.rooms.get(code).await
    }

    /// Сохранить новый снэпшот. Старее сохранённого не пишем.
    pub fn store_room(
        &mut self,
        code: &RoomCode,
        previous: Option<&GameState>,
        next: &GameState,
    ) -> Result<(), ViewError> {
        match store_decision(previous, next) {
            StoreDecision::Skip => return Ok(()),
            StoreDecision::StoreFinished => {
                let total = *self.total_games_finished.get();
                self.total_games_finished.set(total + 1);
            }
            StoreDecision::Store => {}
        }

        self.rooms.insert(code, next.clone())
    }
}

/// Что делать с новым снэпшотом комнаты.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreDecision {
    /// Версия не новее сохранённой.
    Skip,
    /// Записать.
    Store,
    /// Записать и засчитать доигранную партию.
    StoreFinished,
}

/// Решить, писать ли `next` поверх `previous`.
pub fn store_decision(previous: Option<&GameState>, next: &GameState) -> StoreDecision {
    if previous.is_some_and(|prev| prev.version >= next.version) {
        return StoreDecision::Skip;
    }

    if next.is_over() && !previous.is_some_and(|prev| prev.is_over()) {
        StoreDecision::StoreFinished
    } else {
        StoreDecision::Store
    }
}
