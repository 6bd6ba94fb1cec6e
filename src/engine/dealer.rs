//! Раздача: тянем уникальные номиналы из пула без возвращения.

use std::collections::BTreeSet;

use tracing::warn;

use crate::domain::{CardValue, Deck, Player, PlayerId};
use crate::engine::RandomSource;

/// Вытянуть `count` уникальных значений из `pool`, которых нет в `already_used`.
///
/// Результат отсортирован по возрастанию. Если пул исчерпан, возвращаем
/// меньше карт, но никогда не дубликаты.
pub fn deal<R: RandomSource>(
    rng: &mut R,
    pool: &Deck,
    count: usize,
    already_used: &BTreeSet<CardValue>,
) -> Vec<CardValue> {
    let mut deck = pool.clone();
    deck.remove_cards(already_used);
    rng.shuffle(&mut deck.cards);

    let mut hand = deck.draw_n(count);
    hand.sort_unstable();

    if hand.len() < count {
        warn!(
            requested = count,
            dealt = hand.len(),
            used = already_used.len(),
            "card pool exhausted, dealing a short hand"
        );
    }

    hand
}

/// Раздать раунд: каждому активному игроку по `round` карт.
///
/// Все вызовы `deal` делят одно множество «уже использовано в этом раунде»,
/// поэтому руки никогда не пересекаются. Выбывшие игроки карт не получают.
pub fn deal_round<R: RandomSource>(
    rng: &mut R,
    pool: &Deck,
    players: &mut [Player],
    round: u32,
) -> Vec<(PlayerId, Vec<CardValue>)> {
    let mut used: BTreeSet<CardValue> = BTreeSet::new();
    let mut dealt = Vec::with_capacity(players.len());

    for player in players.iter_mut().filter(|p| p.is_active()) {
        let hand = deal(rng, pool, round as usize, &used);
        used.extend(hand.iter().copied());
        player.hand = hand.iter().copied().collect();
        dealt.push((player.id.clone(), hand));
    }

    dealt
}
