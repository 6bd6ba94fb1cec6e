// tests/outcome_tests.rs
//
// Последствия «разреза» и таймаута: coop (жизни, подрезка) и versus (вылеты).

use read_my_mind_engine::domain::{
    config::GameConfig,
    game::{GameMode, GameOverReason, GameState, Phase, Winner},
    history::GameEventKind,
    player::Player,
};
use read_my_mind_engine::engine::{
    apply_cut, apply_timeout, resolve, CutOutcome, GameEngine,
};
use read_my_mind_engine::infra::{DeterministicRng, NoShuffleRng};
use read_my_mind_engine::time_ctrl::{ManualClock, TimingRules};

fn player_with(id: &str, cards: &[u8]) -> Player {
    let mut p = Player::new(id, format!("Player {id}"), false);
    p.hand = cards.iter().copied().collect();
    p
}

/// Комната в фазе Playing с заранее заданными руками.
fn playing_state(mode: GameMode, hands: &[(&str, &[u8])]) -> GameState {
    let mut state = GameState::waiting(mode, 10, 3);
    state.phase = Phase::Playing;
    state.players = hands.iter().map(|(id, cards)| player_with(id, cards)).collect();
    state
}

fn engine() -> GameEngine<NoShuffleRng, ManualClock> {
    let mut config = GameConfig::standard();
    config.timing = TimingRules::untimed();
    GameEngine::new(config, NoShuffleRng, ManualClock::starting_at(0))
}

fn hand_of(state: &GameState, id: &str) -> Vec<u8> {
    state
        .player(id)
        .map(|p| p.hand.iter().copied().collect())
        .unwrap_or_default()
}

//
// Coop
//
#[test]
fn coop_cut_costs_one_life_per_lower_card() {
    // A играет 10, у остальных на руках 3 и 7: минус 2 жизни.
    let state = playing_state(
        GameMode::Coop,
        &[("a", &[10]), ("b", &[3]), ("c", &[7, 20])],
    );
    let mut eng = engine();

    let next = eng.play_card(&state, "a", 10);

    assert_eq!(next.lives, 1);
    assert_eq!(hand_of(&next, "b"), Vec::<u8>::new());
    assert_eq!(hand_of(&next, "c"), vec![20]);
    assert_eq!(next.discarded_cards, vec![3, 7]);
    assert_eq!(next.last_cut_player.as_deref(), Some("b"));
    assert_eq!(next.last_cutter_player.as_deref(), Some("a"));
    assert_eq!(next.phase, Phase::Playing);
    assert!(next.players.iter().all(|p| !p.is_eliminated));
}

#[test]
fn coop_losing_last_life_ends_game() {
    let mut state = playing_state(
        GameMode::Coop,
        &[("a", &[50]), ("b", &[10, 60]), ("c", &[20])],
    );
    state.lives = 2;
    let mut eng = engine();

    let next = eng.play_card(&state, "a", 50);

    assert_eq!(next.lives, 0);
    assert_eq!(next.phase, Phase::GameOver);
    assert_eq!(next.winner, None);
    assert_eq!(next.game_over_reason, Some(GameOverReason::LivesExhausted));
    assert_eq!(next.turn_deadline, None);
}

#[test]
fn coop_lives_never_go_below_zero() {
    let mut state = playing_state(
        GameMode::Coop,
        &[("a", &[90]), ("b", &[1, 2, 3, 4, 5])],
    );
    state.lives = 1;
    let mut eng = engine();

    let next = eng.play_card(&state, "a", 90);

    assert_eq!(next.lives, 0);
    assert!(next.is_over());
}

#[test]
fn coop_own_lower_cards_stay_in_hand() {
    let state = playing_state(GameMode::Coop, &[("a", &[4, 30]), ("b", &[10, 40])]);
    let mut eng = engine();

    let next = eng.play_card(&state, "a", 30);

    assert_eq!(next.lives, 2);
    assert_eq!(hand_of(&next, "a"), vec![4]);
    assert_eq!(hand_of(&next, "b"), vec![40]);
}

#[test]
fn coop_cut_that_empties_all_hands_closes_round() {
    let state = playing_state(GameMode::Coop, &[("a", &[40]), ("b", &[12])]);
    let mut eng = engine();

    let next = eng.play_card(&state, "a", 40);

    assert_eq!(next.lives, 2);
    assert_eq!(next.cards_remaining(), 0);
    assert_eq!(next.phase, Phase::RoundEnd);
}

#[test]
fn apply_cut_reports_outcome_and_writes_history() {
    let mut state = playing_state(GameMode::Coop, &[("a", &[10]), ("b", &[3, 8])]);
    let resolution = resolve(10, "a", &state.players);
    if let Some(p) = state.player_mut("a") {
        p.hand.remove(&10);
    }

    let outcome = apply_cut(&mut state, "a", 10, &resolution);

    assert_eq!(outcome, CutOutcome::LivesLost { amount: 2, remaining: 1 });
    let kinds: Vec<&GameEventKind> = state.history.events.iter().map(|e| &e.kind).collect();
    assert!(matches!(kinds[0], GameEventKind::Cut { cutter, cut_player, lower_cards }
        if cutter == "a" && cut_player == "b" && lower_cards == &vec![3, 8]));
    assert!(matches!(kinds[1], GameEventKind::LivesLost { amount: 2, remaining: 1 }));
    assert!(matches!(kinds[2], GameEventKind::CardsDiscarded { player_id, .. } if player_id == "b"));
}

//
// Versus
//
#[test]
fn versus_two_players_cutter_is_eliminated_and_other_wins() {
    // A держит 5 и играет 9, у B есть 3: вылетает A, B побеждает.
    let state = playing_state(GameMode::Versus, &[("a", &[5, 9]), ("b", &[3])]);
    let mut eng = engine();

    let next = eng.play_card(&state, "a", 9);

    let a = next.player("a").expect("a");
    let b = next.player("b").expect("b");
    assert!(a.is_eliminated);
    assert!(!b.is_eliminated);
    assert_eq!(next.phase, Phase::GameOver);
    assert_eq!(next.winner, Some(Winner::Player("b".to_string())));
    assert_eq!(
        next.game_over_reason,
        Some(GameOverReason::CutterEliminated {
            cutter: "a".to_string()
        })
    );
}

#[test]
fn versus_two_survivors_of_bigger_table_use_two_player_rule() {
    // C уже выбыл раньше; активных двое, правило двух игроков.
    let mut state = playing_state(
        GameMode::Versus,
        &[("a", &[50]), ("b", &[20]), ("c", &[])],
    );
    state.players[2].is_eliminated = true;
    let mut eng = engine();

    let next = eng.play_card(&state, "a", 50);

    assert_eq!(next.winner, Some(Winner::Player("b".to_string())));
    // Выбывший раньше так и остаётся выбывшим.
    assert!(next.player("c").expect("c").is_eliminated);
}

#[test]
fn versus_general_case_eliminates_both_and_game_goes_on() {
    let state = playing_state(
        GameMode::Versus,
        &[("a", &[20]), ("b", &[15]), ("c", &[8]), ("d", &[4])],
    );
    let mut eng = engine();

    let next = eng.play_card(&state, "c", 8);

    assert!(next.player("c").expect("c").is_eliminated);
    assert!(next.player("d").expect("d").is_eliminated);
    assert!(next.player("d").expect("d").hand.is_empty());
    assert!(next.discarded_cards.contains(&4));
    assert_eq!(next.active_count(), 2);
    assert_eq!(next.phase, Phase::Playing);
    assert_eq!(next.winner, None);
    assert_eq!(next.last_cut_player.as_deref(), Some("d"));
}

#[test]
fn versus_last_survivor_wins() {
    let state = playing_state(
        GameMode::Versus,
        &[("a", &[20]), ("c", &[8]), ("d", &[4])],
    );
    let mut eng = engine();

    let next = eng.play_card(&state, "c", 8);

    assert_eq!(next.active_count(), 1);
    assert_eq!(next.phase, Phase::GameOver);
    assert_eq!(next.winner, Some(Winner::Player("a".to_string())));
    assert_eq!(next.game_over_reason, Some(GameOverReason::LastSurvivor));
}

#[test]
fn versus_cut_never_touches_lives() {
    let state = playing_state(
        GameMode::Versus,
        &[("a", &[20]), ("b", &[15]), ("c", &[8]), ("d", &[4])],
    );
    let mut eng = engine();

    let next = eng.play_card(&state, "a", 20);

    assert_eq!(next.lives, state.lives);
}

//
// Таймаут
//
#[test]
fn coop_timeout_costs_one_life() {
    let mut state = playing_state(GameMode::Coop, &[("a", &[10]), ("b", &[20])]);
    let mut rng = DeterministicRng::from_seed(1);

    apply_timeout(&mut state, &mut rng);

    assert_eq!(state.lives, 2);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(hand_of(&state, "a"), vec![10]);
}

#[test]
fn coop_timeout_on_last_life_ends_game() {
    let mut state = playing_state(GameMode::Coop, &[("a", &[10])]);
    state.lives = 1;
    let mut rng = DeterministicRng::from_seed(1);

    apply_timeout(&mut state, &mut rng);

    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.game_over_reason, Some(GameOverReason::LivesExhausted));
}

#[test]
fn versus_timeout_eliminates_exactly_one_active_player() {
    let mut state = playing_state(
        GameMode::Versus,
        &[("a", &[10]), ("b", &[20]), ("c", &[30])],
    );
    let mut rng = DeterministicRng::from_seed(5);

    apply_timeout(&mut state, &mut rng);

    assert_eq!(state.active_count(), 2);
    let out: Vec<&Player> = state.players.iter().filter(|p| p.is_eliminated).collect();
    assert_eq!(out.len(), 1);
    assert!(out[0].hand.is_empty());
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn versus_timeout_with_two_players_leaves_a_winner() {
    let mut state = playing_state(GameMode::Versus, &[("a", &[10]), ("b", &[20])]);
    // Без перемешивания первым по id выбывает "a".
    let mut rng = NoShuffleRng;

    apply_timeout(&mut state, &mut rng);

    assert!(state.player("a").expect("a").is_eliminated);
    assert_eq!(state.winner, Some(Winner::Player("b".to_string())));
    assert_eq!(state.game_over_reason, Some(GameOverReason::LastSurvivor));
}

#[test]
fn versus_timeout_is_reproducible_for_same_seed() {
    let base = playing_state(
        GameMode::Versus,
        &[("a", &[10]), ("b", &[20]), ("c", &[30]), ("d", &[40])],
    );

    let mut first = base.clone();
    let mut second = base.clone();
    apply_timeout(&mut first, &mut DeterministicRng::from_seed(77));
    apply_timeout(&mut second, &mut DeterministicRng::from_seed(77));

    assert_eq!(first, second);
}
