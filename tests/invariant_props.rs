// tests/invariant_props.rs
//
// Свойства, которые держатся при ЛЮБОЙ последовательности ходов:
// уникальность номиналов, учёт карт раунда, границы жизней, вылеты.

use std::collections::HashSet;

use proptest::prelude::*;

use read_my_mind_engine::domain::{
    config::GameConfig,
    game::{GameMode, GameState, Phase, Winner},
    history::GameEventKind,
    player::PlayerSeed,
    PlayerId,
};
use read_my_mind_engine::engine::GameEngine;
use read_my_mind_engine::infra::DeterministicRng;
use read_my_mind_engine::time_ctrl::{ManualClock, TimingRules};

fn seeds(n: usize) -> Vec<PlayerSeed> {
    (1..=n)
        .map(|i| PlayerSeed::new(format!("p{i}"), format!("Player {i}"), i == 1))
        .collect()
}

/// Руки, розданные в текущем раунде (последнее событие RoundDealt).
fn dealt_this_round(state: &GameState) -> Vec<(PlayerId, Vec<u8>)> {
    state
        .history
        .events
        .iter()
        .rev()
        .find_map(|e| match &e.kind {
            GameEventKind::RoundDealt { hands, .. } => Some(hands.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

fn check_invariants(prev: &GameState, next: &GameState) -> Result<(), TestCaseError> {
    let all = next.all_card_values();
    let set: HashSet<u8> = all.iter().copied().collect();
    prop_assert_eq!(set.len(), all.len(), "duplicate values {:?}", all);

    // Каждая розданная карта либо в руке владельца, либо на столе от его имени,
    // либо в сбросе.
    if next.phase != Phase::Waiting {
        let dealt = dealt_this_round(next);
        let total: usize = dealt.iter().map(|(_, h)| h.len()).sum();
        prop_assert_eq!(all.len(), total);

        for (pid, cards) in &dealt {
            let owner = next.player(pid);
            prop_assert!(owner.is_some());
            for c in cards {
                let held = owner.is_some_and(|p| p.holds(*c));
                let played = next
                    .played_cards
                    .iter()
                    .any(|pc| pc.value == *c && pc.player_id.as_deref() == Some(pid.as_str()));
                let discarded = next.discarded_cards.contains(c);
                prop_assert!(held || played || discarded, "card {} of {} vanished", c, pid);
            }
            if let Some(p) = owner {
                prop_assert!(p.hand.iter().all(|c| cards.contains(c)));
            }
        }
    }

    prop_assert!(next.lives <= next.max_lives);
    prop_assert!(next.version >= prev.version);
    if next != prev {
        prop_assert_eq!(next.version, prev.version + 1);
    }

    match next.mode {
        GameMode::Coop => {
            prop_assert!(next.players.iter().all(|p| !p.is_eliminated));
        }
        GameMode::Versus => {
            prop_assert_eq!(next.lives, next.max_lives);
            // Выбывшие не возвращаются и рук не держат.
            for p in &prev.players {
                if p.is_eliminated {
                    let now = next.player(&p.id);
                    prop_assert!(now.is_some_and(|n| n.is_eliminated));
                }
            }
            prop_assert!(next
                .players
                .iter()
                .filter(|p| p.is_eliminated)
                .all(|p| p.hand.is_empty()));
            if let Some(Winner::Player(id)) = &next.winner {
                prop_assert!(next.player(id).is_some_and(|p| !p.is_eliminated));
            }
        }
    }

    if next.phase == Phase::Playing {
        prop_assert!(next.cards_remaining() > 0);
        for p in next.active_players() {
            prop_assert!(p.hand.len() <= next.round as usize);
        }
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_play_keeps_invariants(
        versus in any::<bool>(),
        players in 2usize..=6,
        seed in any::<u64>(),
        moves in prop::collection::vec((any::<u8>(), any::<u8>(), any::<bool>()), 1..300),
    ) {
        let mode = if versus { GameMode::Versus } else { GameMode::Coop };
        let mut config = GameConfig::standard();
        config.timing = TimingRules::untimed();
        let mut eng = GameEngine::new(config, DeterministicRng::from_seed(seed), ManualClock::starting_at(0));

        let s0 = eng.initial_state(mode);
        let s1 = eng.start_game(&s0, mode, &seeds(players));
        let mut state = eng.complete_deal(&s1);
        check_invariants(&s1, &state)?;

        for (who, which, bogus) in moves {
            let next = match state.phase {
                Phase::Playing => {
                    let holders: Vec<_> = state
                        .active_players()
                        .filter(|p| !p.hand.is_empty())
                        .collect();
                    let p = holders[who as usize % holders.len()];
                    let card = if bogus {
                        // Не своя / не существующая карта: обязан быть no-op.
                        which
                    } else {
                        let idx = which as usize % p.hand.len();
                        *p.hand.iter().nth(idx).unwrap_or(&0)
                    };
                    let pid = p.id.clone();
                    let next = eng.play_card(&state, &pid, card);
                    if bogus && !state.player(&pid).is_some_and(|p| p.holds(card)) {
                        prop_assert_eq!(&next, &state);
                    }
                    next
                }
                Phase::RoundEnd | Phase::RoundBreak => eng.next_round(&state),
                Phase::GameOver => break,
                Phase::Waiting | Phase::Dealing => {
                    prop_assert!(false, "unexpected phase {:?}", state.phase);
                    unreachable!()
                }
            };
            check_invariants(&state, &next)?;
            state = next;
        }
    }

    #[test]
    fn lowest_first_coop_never_loses_lives(
        players in 1usize..=8,
        seed in any::<u64>(),
    ) {
        let mut config = GameConfig::standard();
        config.timing = TimingRules::untimed();
        let mut eng = GameEngine::new(config, DeterministicRng::from_seed(seed), ManualClock::starting_at(0));

        let s0 = eng.initial_state(GameMode::Coop);
        let s1 = eng.start_game(&s0, GameMode::Coop, &seeds(players));
        let mut state = eng.complete_deal(&s1);

        while !state.is_over() {
            state = match state.phase {
                Phase::Playing => {
                    let lowest = state
                        .active_players()
                        .filter_map(|p| p.lowest_card().map(|c| (c, p.id.clone())))
                        .min();
                    prop_assert!(lowest.is_some());
                    let (value, owner) = lowest.unwrap_or_default();
                    eng.play_card(&state, &owner, value)
                }
                _ => eng.next_round(&state),
            };
            prop_assert!(state.last_cut_player.is_none());
        }

        prop_assert_eq!(state.lives, 3);
        prop_assert_eq!(state.winner, Some(Winner::Team));
    }
}
