//! Поиск «разреза»: сыграна карта, хотя у кого-то на руках есть младше.

use serde::{Deserialize, Serialize};

use crate::domain::{CardValue, Player, PlayerId};

/// Карта ниже сыгранной, всё ещё лежащая в чужой руке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LowerCard {
    pub holder: PlayerId,
    pub value: CardValue,
}

/// Результат проверки хода.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CutResolution {
    pub has_cut: bool,
    /// Владелец минимальной из младших карт.
    pub cut_player_id: Option<PlayerId>,
    /// Все младшие карты у всех остальных активных игроков, по возрастанию.
    pub lower_cards: Vec<LowerCard>,
}

impl CutResolution {
    pub fn lower_count(&self) -> usize {
        self.lower_cards.len()
    }

    pub fn lower_values(&self) -> Vec<CardValue> {
        self.lower_cards.iter().map(|c| c.value).collect()
    }
}

/// Проверить ход `playing_player_id` картой `played_value`.
///
/// Смотрим руки всех остальных невыбывших игроков. Вызывать нужно ДО того,
/// как карта уйдёт из руки игрока. Чистая функция.
///
/// При равных значениях (невозможно, пока раздача уникальна) «разрезанным»
/// считается игрок с меньшим id.
pub fn resolve(played_value: CardValue, playing_player_id: &str, players: &[Player]) -> CutResolution {
    let mut lower_cards: Vec<LowerCard> = players
        .iter()
        .filter(|p| p.is_active() && p.id != playing_player_id)
        .flat_map(|p| {
            p.hand
                .range(..played_value)
                .map(move |&value| LowerCard {
                    holder: p.id.clone(),
                    value,
                })
        })
        .collect();

    lower_cards.sort_by(|a, b| a.value.cmp(&b.value).then_with(|| a.holder.cmp(&b.holder)));

    let cut_player_id = lower_cards.first().map(|c| c.holder.clone());

    CutResolution {
        has_cut: !lower_cards.is_empty(),
        cut_player_id,
        lower_cards,
    }
}
