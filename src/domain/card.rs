use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Номинал карты. Все значения в комнате уникальны.
pub type CardValue = u8;

/// Минимальный номинал в стандартном пуле.
pub const CARD_MIN: CardValue = 1;

/// Максимальный номинал в стандартном пуле.
pub const CARD_MAX: CardValue = 100;

/// Карта на столе.
///
/// Пока карта в руке, `player_id == None`. Как только карта сыграна,
/// запоминаем, кто её выложил и когда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub value: CardValue,
    pub player_id: Option<PlayerId>,
    /// Момент розыгрыша (unix ms).
    pub played_at: Option<u64>,
}

impl Card {
    /// Карта, которая ещё лежит в руке.
    pub const fn in_hand(value: CardValue) -> Self {
        Self {
            value,
            player_id: None,
            played_at: None,
        }
    }

    /// Карта, выложенная игроком на стол.
    pub fn played(value: CardValue, player_id: PlayerId, played_at: u64) -> Self {
        Self {
            value,
            player_id: Some(player_id),
            played_at: Some(played_at),
        }
    }

    pub fn is_played(&self) -> bool {
        self.player_id.is_some()
    }
}

impl fmt::Display for Card {
    /// Формат вида `07`, `42`, `100`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.value)
    }
}

/// Парсинг строки вида "7", "42", "100".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: CardValue = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid card value: {s}"))?;

        if !(CARD_MIN..=CARD_MAX).contains(&value) {
            return Err(format!("Card value out of range: {value}"));
        }

        Ok(Card::in_hand(value))
    }
}
