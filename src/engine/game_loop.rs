use tracing::{debug, info};

use crate::domain::{
    Card, CardValue, Deck, GameConfig, GameEventKind, GameMode, GameOverReason, GameState, Phase,
    Player, PlayerSeed, Winner,
};
use crate::engine::dealer::deal_round;
use crate::engine::errors::EngineError;
use crate::engine::outcome::{apply_cut, apply_timeout, finish_game};
use crate::engine::resolver::resolve;
use crate::engine::validation::{ensure_phase, validate_play, validate_start};
use crate::engine::RandomSource;
use crate::time_ctrl::{due_timer, Clock, DueTimer};

/// Контроллер фаз одной комнаты.
///
/// Сам состояние не хранит: каждая операция принимает текущий снэпшот и
/// возвращает новый. Внутри только правила, RNG и часы.
///
/// Waiting → Dealing → Playing → RoundEnd/RoundBreak → Playing → ... → GameOver.
pub struct GameEngine<R: RandomSource, C: Clock> {
    config: GameConfig,
    pool: Deck,
    rng: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> GameEngine<R, C> {
    pub fn new(config: GameConfig, rng: R, clock: C) -> Self {
        let pool = Deck::range(config.card_min, config.card_max);
        Self {
            config,
            pool,
            rng,
            clock,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Пустая комната в Waiting для заданного режима.
    pub fn initial_state(&self, mode: GameMode) -> GameState {
        GameState::waiting(
            mode,
            self.config.max_rounds(mode),
            self.config.starting_lives,
        )
    }

    // ------------------------------------------------------------------
    // start_game
    // ------------------------------------------------------------------

    /// Waiting → Dealing. Иначе no-op.
    pub fn start_game(
        &mut self,
        state: &GameState,
        mode: GameMode,
        players: &[PlayerSeed],
    ) -> GameState {
        let result = self.try_start_game(state, mode, players);
        or_unchanged(state, "start_game", result)
    }

    pub fn try_start_game(
        &mut self,
        state: &GameState,
        mode: GameMode,
        players: &[PlayerSeed],
    ) -> Result<GameState, EngineError> {
        ensure_phase(state, Phase::Waiting)?;
        validate_start(mode, players)?;

        let now = self.clock.now_ms();
        let mut next = self.initial_state(mode);
        next.players = players.iter().map(Player::from_seed).collect();
        next.phase = Phase::Dealing;
        next.deal_ready_at = Some(now.saturating_add(self.config.timing.settle_delay_ms));
        next.history.push(GameEventKind::GameStarted {
            mode,
            players: players.iter().map(|p| p.id.clone()).collect(),
        });

        info!(?mode, players = players.len(), "game started");

        Ok(commit(state, next))
    }

    // ------------------------------------------------------------------
    // complete_deal
    // ------------------------------------------------------------------

    /// Dealing → Playing: раздать руки текущего раунда.
    ///
    /// Обычно вызывается через `tick` после задержки, но задержку можно пропустить.
    pub fn complete_deal(&mut self, state: &GameState) -> GameState {
        let result = self.try_complete_deal(state);
        or_unchanged(state, "complete_deal", result)
    }

    pub fn try_complete_deal(&mut self, state: &GameState) -> Result<GameState, EngineError> {
        ensure_phase(state, Phase::Dealing)?;

        let mut next = state.clone();
        next.deal_ready_at = None;
        self.deal_into(&mut next);

        Ok(commit(state, next))
    }

    // ------------------------------------------------------------------
    // play_card
    // ------------------------------------------------------------------

    /// Выложить карту. Неверная фаза, неизвестный игрок или чужая карта: no-op.
    pub fn play_card(&mut self, state: &GameState, player_id: &str, value: CardValue) -> GameState {
        let result = self.try_play_card(state, player_id, value);
        or_unchanged(state, "play_card", result)
    }

    pub fn try_play_card(
        &mut self,
        state: &GameState,
        player_id: &str,
        value: CardValue,
    ) -> Result<GameState, EngineError> {
        validate_play(state, player_id, value)?;

        // Разрез считаем по рукам ДО того, как карта покинет руку.
        let resolution = resolve(value, player_id, &state.players);

        let now = self.clock.now_ms();
        let mut next = state.clone();

        if let Some(player) = next.player_mut(player_id) {
            player.hand.remove(&value);
        }
        next.played_cards
            .push(Card::played(value, player_id.to_string(), now));
        next.history.push(GameEventKind::CardPlayed {
            player_id: player_id.to_string(),
            value,
        });

        if resolution.has_cut {
            next.last_cut_player = resolution.cut_player_id.clone();
            next.last_cutter_player = Some(player_id.to_string());
            let outcome = apply_cut(&mut next, player_id, value, &resolution);
            debug!(
                cutter = player_id,
                lower = resolution.lower_count(),
                value,
                ?outcome,
                "cut"
            );
        } else {
            next.last_cut_player = None;
            next.last_cutter_player = None;
        }

        self.settle_after_action(&mut next, now);

        Ok(commit(state, next))
    }

    // ------------------------------------------------------------------
    // next_round
    // ------------------------------------------------------------------

    /// RoundEnd/RoundBreak → Playing (или GameOver, если раунды кончились).
    pub fn next_round(&mut self, state: &GameState) -> GameState {
        let result = self.try_next_round(state);
        or_unchanged(state, "next_round", result)
    }

    pub fn try_next_round(&mut self, state: &GameState) -> Result<GameState, EngineError> {
        if !state.phase.is_between_rounds() {
            return Err(EngineError::WrongPhase {
                expected: Phase::RoundEnd,
                actual: state.phase,
            });
        }

        let mut next = state.clone();
        next.next_round_at = None;

        let new_round = state.round + 1;
        if new_round > state.max_rounds {
            match state.mode {
                GameMode::Coop => {
                    finish_game(&mut next, Some(Winner::Team), GameOverReason::AllRoundsCleared)
                }
                GameMode::Versus => {
                    finish_game(&mut next, None, GameOverReason::RoundLimitReached)
                }
            }
            return Ok(commit(state, next));
        }

        next.round = new_round;
        next.played_cards.clear();
        next.discarded_cards.clear();
        next.last_cut_player = None;
        next.last_cutter_player = None;
        self.deal_into(&mut next);

        Ok(commit(state, next))
    }

    // ------------------------------------------------------------------
    // reset_game
    // ------------------------------------------------------------------

    /// Из любой фазы: новая пустая комната в Waiting с тем же режимом.
    pub fn reset_game(&mut self, state: &GameState) -> GameState {
        info!(mode = ?state.mode, "game reset");
        let next = self.initial_state(state.mode);
        commit(state, next)
    }

    // ------------------------------------------------------------------
    // tick
    // ------------------------------------------------------------------

    /// Применить сработавший таймер: конец раздачи, таймаут хода, конец паузы.
    pub fn tick(&mut self, state: &GameState) -> GameState {
        match self.try_tick(state) {
            Ok(next) => next,
            Err(EngineError::NothingDue) => state.clone(),
            Err(err) => {
                debug!(op = "tick", %err, "ignored stale action");
                state.clone()
            }
        }
    }

    pub fn try_tick(&mut self, state: &GameState) -> Result<GameState, EngineError> {
        let now = self.clock.now_ms();

        match due_timer(state, now) {
            DueTimer::None => Err(EngineError::NothingDue),
            DueTimer::DealSettled => self.try_complete_deal(state),
            DueTimer::RoundBreakOver => self.try_next_round(state),
            DueTimer::TurnExpired => {
                let mut next = state.clone();
                apply_timeout(&mut next, &mut self.rng);
                next.last_cut_player = None;
                next.last_cutter_player = None;
                self.settle_after_action(&mut next, now);
                Ok(commit(state, next))
            }
        }
    }

    // ------------------------------------------------------------------
    // внутреннее
    // ------------------------------------------------------------------

    /// Раздать руки раунда `state.round` и перейти в Playing.
    fn deal_into(&mut self, state: &mut GameState) {
        let hands = deal_round(&mut self.rng, &self.pool, &mut state.players, state.round);
        state.history.push(GameEventKind::RoundDealt {
            round: state.round,
            hands,
        });
        state.phase = Phase::Playing;
        state.turn_deadline = self.config.timing.turn_deadline_from(self.clock.now_ms());

        info!(round = state.round, players = state.active_count(), "round dealt");
    }

    /// После хода/таймаута: закрыть раунд, если все руки пусты, иначе перезапустить таймер.
    fn settle_after_action(&self, state: &mut GameState, now: u64) {
        if state.phase != Phase::Playing {
            return;
        }

        if state.cards_remaining() > 0 {
            state.turn_deadline = self.config.timing.turn_deadline_from(now);
            return;
        }

        state.turn_deadline = None;
        state.history.push(GameEventKind::RoundCompleted { round: state.round });

        match self.config.timing.next_round_from(now) {
            Some(at) => {
                state.phase = Phase::RoundBreak;
                state.next_round_at = Some(at);
            }
            None => state.phase = Phase::RoundEnd,
        }

        info!(round = state.round, phase = ?state.phase, "round completed");
    }
}

/// Зафиксировать новый снэпшот: версия строго растёт.
fn commit(prev: &GameState, mut next: GameState) -> GameState {
    next.version = prev.version + 1;
    next
}

/// Отклонённая операция превращается в no-op.
fn or_unchanged(
    state: &GameState,
    op: &'static str,
    result: Result<GameState, EngineError>,
) -> GameState {
    match result {
        Ok(next) => next,
        Err(err) => {
            debug!(op, %err, "ignored stale action");
            state.clone()
        }
    }
}
