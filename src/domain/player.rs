use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::CardValue;
use crate::domain::PlayerId;

/// То, что лобби передаёт движку при старте игры.
/// ID выдаёт лобби, не движок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSeed {
    pub id: PlayerId,
    pub name: String,
    pub is_host: bool,
}

impl PlayerSeed {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, is_host: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_host,
        }
    }
}

/// Игрок в контексте конкретной партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Карты в руке. BTreeSet сразу даёт уникальность и сортировку по возрастанию.
    pub hand: BTreeSet<CardValue>,
    /// Выбыл ли игрок (только versus, в coop всегда false).
    pub is_eliminated: bool,
    pub is_host: bool,
    pub connected: bool,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, is_host: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hand: BTreeSet::new(),
            is_eliminated: false,
            is_host,
            connected: true,
        }
    }

    pub fn from_seed(seed: &PlayerSeed) -> Self {
        Self::new(seed.id.clone(), seed.name.clone(), seed.is_host)
    }

    /// Участвует ли игрок в текущем раунде.
    pub fn is_active(&self) -> bool {
        !self.is_eliminated
    }

    pub fn holds(&self, value: CardValue) -> bool {
        self.hand.contains(&value)
    }

    /// Младшая карта в руке.
    pub fn lowest_card(&self) -> Option<CardValue> {
        self.hand.iter().next().copied()
    }

    /// Выбыть: рука очищается, сброшенные значения возвращаются вызывающему.
    pub fn eliminate(&mut self) -> Vec<CardValue> {
        self.is_eliminated = true;
        std::mem::take(&mut self.hand).into_iter().collect()
    }
}
