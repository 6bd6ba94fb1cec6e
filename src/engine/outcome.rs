//! Последствия «разреза» и таймаута по режимам игры.
//!
//! Coop: жизни списываются по КОЛИЧЕСТВУ младших карт у всех остальных,
//! а руки подрезаются у всех, у кого такие карты были.
//! Versus: вылетают «резавший» и «разрезанный», кроме случая двух игроков,
//! где вылетает только «резавший», а второй объявляется победителем.
//!
//! Функции работают над рабочей копией снэпшота, которую держит контроллер фаз.

use tracing::info;

use crate::domain::{
    CardValue, GameEventKind, GameMode, GameOverReason, GameState, Phase, PlayerId, Winner,
};
use crate::engine::resolver::CutResolution;
use crate::engine::RandomSource;

/// Что произошло после «разреза».
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CutOutcome {
    /// Coop: жизни списаны, младшие карты ушли в сброс.
    LivesLost { amount: u32, remaining: u32 },
    /// Versus, двое за столом: вылетел «резавший».
    CutterEliminated { cutter: PlayerId, survivor: PlayerId },
    /// Versus, трое и больше: вылетели оба.
    BothEliminated { cutter: PlayerId, cut_player: PlayerId },
}

/// Применить последствия «разреза».
///
/// Вызывается только при `resolution.has_cut`. Сыгранная карта к этому моменту
/// уже должна лежать на столе.
pub fn apply_cut(
    state: &mut GameState,
    cutter: &str,
    played_value: CardValue,
    resolution: &CutResolution,
) -> CutOutcome {
    let cut_player = resolution.cut_player_id.clone().unwrap_or_default();

    state.history.push(GameEventKind::Cut {
        cutter: cutter.to_string(),
        cut_player: cut_player.clone(),
        lower_cards: resolution.lower_values(),
    });

    match state.mode {
        GameMode::Coop => apply_coop_cut(state, cutter, played_value, resolution),
        GameMode::Versus => apply_versus_cut(state, cutter, cut_player),
    }
}

fn apply_coop_cut(
    state: &mut GameState,
    cutter: &str,
    played_value: CardValue,
    resolution: &CutResolution,
) -> CutOutcome {
    // Жизни: по числу младших карт, а не по числу игроков.
    let amount = resolution.lower_count() as u32;
    state.lives = state.lives.saturating_sub(amount);

    state.history.push(GameEventKind::LivesLost {
        amount,
        remaining: state.lives,
    });

    // Подрезка: у каждого остального активного игрока уходят все карты ниже сыгранной.
    let mut discarded: Vec<(PlayerId, Vec<CardValue>)> = Vec::new();
    for player in state
        .players
        .iter_mut()
        .filter(|p| p.is_active() && p.id != cutter)
    {
        let keep = player.hand.split_off(&played_value);
        let dropped: Vec<CardValue> = std::mem::replace(&mut player.hand, keep)
            .into_iter()
            .collect();
        if !dropped.is_empty() {
            discarded.push((player.id.clone(), dropped));
        }
    }

    for (player_id, cards) in discarded {
        state.discarded_cards.extend(cards.iter().copied());
        state
            .history
            .push(GameEventKind::CardsDiscarded { player_id, cards });
    }

    if state.lives == 0 {
        finish_game(state, None, GameOverReason::LivesExhausted);
    }

    CutOutcome::LivesLost {
        amount,
        remaining: state.lives,
    }
}

fn apply_versus_cut(state: &mut GameState, cutter: &str, cut_player: PlayerId) -> CutOutcome {
    // Считаем ДО применения последствий, «резавший» ещё в игре.
    let active_before = state.active_count();

    if active_before == 2 {
        eliminate(state, cutter);
        finish_game(
            state,
            Some(Winner::Player(cut_player.clone())),
            GameOverReason::CutterEliminated {
                cutter: cutter.to_string(),
            },
        );
        return CutOutcome::CutterEliminated {
            cutter: cutter.to_string(),
            survivor: cut_player,
        };
    }

    eliminate(state, cutter);
    eliminate(state, &cut_player);
    check_last_survivor(state);

    CutOutcome::BothEliminated {
        cutter: cutter.to_string(),
        cut_player,
    }
}

/// Время хода истекло.
///
/// Coop: минус одна жизнь. Versus: вылетает случайный активный игрок.
pub fn apply_timeout<R: RandomSource>(state: &mut GameState, rng: &mut R) {
    state.history.push(GameEventKind::TurnTimedOut { round: state.round });

    match state.mode {
        GameMode::Coop => {
            state.lives = state.lives.saturating_sub(1);
            state.history.push(GameEventKind::LivesLost {
                amount: 1,
                remaining: state.lives,
            });
            if state.lives == 0 {
                finish_game(state, None, GameOverReason::LivesExhausted);
            }
        }
        GameMode::Versus => {
            let mut candidates: Vec<PlayerId> =
                state.active_players().map(|p| p.id.clone()).collect();
            if candidates.is_empty() {
                return;
            }
            // Стабильный порядок перед перемешиванием, чтобы сиды воспроизводились.
            candidates.sort();
            rng.shuffle(&mut candidates);
            eliminate(state, &candidates[0]);
            check_last_survivor(state);
        }
    }
}

/// Выбить игрока: флаг + рука в сброс.
fn eliminate(state: &mut GameState, player_id: &str) {
    let Some(player) = state.player_mut(player_id) else {
        return;
    };
    if player.is_eliminated {
        return;
    }
    let cleared = player.eliminate();
    state.discarded_cards.extend(cleared.iter().copied());
    state.history.push(GameEventKind::PlayerEliminated {
        player_id: player_id.to_string(),
    });
}

/// Versus: если остался ровно один игрок: он победил.
fn check_last_survivor(state: &mut GameState) {
    let remaining: Vec<PlayerId> = state.active_players().map(|p| p.id.clone()).collect();
    match remaining.as_slice() {
        [survivor] => finish_game(
            state,
            Some(Winner::Player(survivor.clone())),
            GameOverReason::LastSurvivor,
        ),
        [] => finish_game(state, None, GameOverReason::LastSurvivor),
        _ => {}
    }
}

/// Перевести комнату в GameOver.
pub fn finish_game(state: &mut GameState, winner: Option<Winner>, reason: GameOverReason) {
    info!(?winner, %reason, round = state.round, "game over");

    state.phase = Phase::GameOver;
    state.winner = winner.clone();
    state.game_over_reason = Some(reason.clone());
    state.turn_deadline = None;
    state.next_round_at = None;
    state.deal_ready_at = None;
    state.history.push(GameEventKind::GameOver { winner, reason });
}
