use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::{CardValue, CARD_MAX, CARD_MIN};

/// Числовой пул, из которого тянутся карты.
/// В домене это просто упорядоченный список доступных номиналов.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<CardValue>,
}

impl Deck {
    /// Стандартный пул 1..=100 в порядке возрастания.
    pub fn standard_100() -> Self {
        Self::range(CARD_MIN, CARD_MAX)
    }

    /// Пул `min..=max`.
    pub fn range(min: CardValue, max: CardValue) -> Self {
        Deck {
            cards: (min..=max).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять n карт сверху (меньше, если пул кончился).
    pub fn draw_n(&mut self, n: usize) -> Vec<CardValue> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            } else {
                break;
            }
        }
        taken
    }

    /// Убрать из пула уже использованные значения.
    pub fn remove_cards(&mut self, to_remove: &BTreeSet<CardValue>) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
