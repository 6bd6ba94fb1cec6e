// src/bin/read_my_mind_dev_cli.rs
//
// Прогон одной coop- и одной versus-партии с ботами. Всё детерминированно:
// seed фиксирован, часы ручные.

use read_my_mind_engine::domain::{GameConfig, GameMode, GameState, Phase, PlayerId, PlayerSeed};
use read_my_mind_engine::engine::{GameEngine, RandomSource};
use read_my_mind_engine::infra::{init_tracing, DeterministicRng, RngSeed};
use read_my_mind_engine::time_ctrl::{ManualClock, TimingRules};

/// Каждый какой ход бот «ошибается» и играет не самую младшую карту стола.
const MISTAKE_EVERY: u32 = 7;

fn main() {
    init_tracing("info");

    println!("=== READ MY MIND DEV CLI ===\n");

    let seed = RngSeed::from_u64(2024);
    for (idx, mode) in [GameMode::Coop, GameMode::Versus].into_iter().enumerate() {
        run_game(mode, seed.derive("DEV", idx as u64));
        println!();
    }
}

fn run_game(mode: GameMode, seed: RngSeed) {
    println!("--- Партия {:?} ---", mode);

    let clock = ManualClock::starting_at(0);
    let mut config = GameConfig::standard();
    config.timing = TimingRules::untimed();

    let mut engine = GameEngine::new(config, seed.to_rng(), clock.clone());
    let mut bot_rng = DeterministicRng::from_seed(7);

    let players = vec![
        PlayerSeed::new("1", "Аня", true),
        PlayerSeed::new("2", "Борис", false),
        PlayerSeed::new("3", "Вика", false),
        PlayerSeed::new("4", "Гоша", false),
    ];

    let mut state = engine.initial_state(mode);
    state = engine.start_game(&state, mode, &players);
    state = engine.complete_deal(&state);

    let mut moves: u32 = 0;
    loop {
        match state.phase {
            Phase::Playing => {
                moves += 1;
                let Some((player_id, card)) = pick_move(&state, moves, &mut bot_rng) else {
                    println!("  Нет ходов, выходим.");
                    break;
                };
                state = engine.play_card(&state, &player_id, card);
                print_move(&state, &player_id, card);
            }
            Phase::RoundEnd | Phase::RoundBreak => {
                println!("  Раунд {} закрыт.", state.round);
                state = engine.next_round(&state);
                if state.phase == Phase::Playing {
                    print_hands(&state);
                }
            }
            Phase::GameOver => break,
            Phase::Waiting | Phase::Dealing => {
                println!("  Неожиданная фаза {:?}", state.phase);
                break;
            }
        }
    }

    println!(
        "Итог: победитель={:?}, причина={}, раунд={}, жизни={}, событий={}",
        state.winner,
        state
            .game_over_reason
            .as_ref()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string()),
        state.round,
        state.lives,
        state.history.len()
    );
}

/// Бот: обычно играет младшую карту стола, но иногда ошибается.
fn pick_move<R: RandomSource>(
    state: &GameState,
    moves: u32,
    rng: &mut R,
) -> Option<(PlayerId, u8)> {
    let mut holders: Vec<(u8, PlayerId)> = state
        .active_players()
        .filter_map(|p| p.lowest_card().map(|c| (c, p.id.clone())))
        .collect();
    holders.sort();

    if moves % MISTAKE_EVERY == 0 && holders.len() > 1 {
        let mut rest = holders.split_off(1);
        rng.shuffle(&mut rest);
        return rest.into_iter().next().map(|(c, id)| (id, c));
    }

    holders.into_iter().next().map(|(c, id)| (id, c))
}

fn print_move(state: &GameState, player_id: &str, card: u8) {
    let name = state
        .player(player_id)
        .map(|p| p.name.as_str())
        .unwrap_or("?");

    match (&state.last_cutter_player, &state.last_cut_player) {
        (Some(_), Some(cut)) => println!(
            "  {} → {:02}  ✂ разрез! пострадал {}, жизни={}",
            name, card, cut, state.lives
        ),
        _ => println!("  {} → {:02}", name, card),
    }
}

fn print_hands(state: &GameState) {
    println!("  Раунд {}:", state.round);
    for p in state.active_players() {
        let hand: Vec<String> = p.hand.iter().map(|c| format!("{:02}", c)).collect();
        println!("    {:<6} [{}]", p.name, hand.join(" "));
    }
}
