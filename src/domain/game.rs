use core::fmt;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardValue};
use crate::domain::history::GameHistory;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Режим игры. Фиксируется на всю партию.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Общие жизни, без вылетов.
    #[default]
    Coop,
    /// Каждый сам за себя, вылеты за «разрез».
    Versus,
}

/// Фаза комнаты. В каждый момент комната ровно в одной фазе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Phase {
    Waiting,
    Dealing,
    Playing,
    RoundBreak,
    RoundEnd,
    GameOver,
}

impl Phase {
    /// Раунд закрыт и ждёт `next_round`.
    pub fn is_between_rounds(self) -> bool {
        matches!(self, Phase::RoundEnd | Phase::RoundBreak)
    }
}

/// Победитель партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Winner {
    /// Coop: команда прошла все раунды.
    Team,
    /// Versus: конкретный игрок.
    Player(PlayerId),
}

/// Почему партия закончилась.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOverReason {
    /// Coop: жизни кончились.
    LivesExhausted,
    /// Versus: остался один игрок.
    LastSurvivor,
    /// Versus, двое за столом: тот, кто «разрезал», вылетает.
    CutterEliminated { cutter: PlayerId },
    /// Coop: пройдены все раунды.
    AllRoundsCleared,
    /// Versus: раунды кончились, а выживших больше одного.
    RoundLimitReached,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::LivesExhausted => write!(f, "lives exhausted"),
            GameOverReason::LastSurvivor => write!(f, "last survivor"),
            GameOverReason::CutterEliminated { cutter } => {
                write!(f, "{cutter} cut and was eliminated")
            }
            GameOverReason::AllRoundsCleared => write!(f, "all rounds cleared"),
            GameOverReason::RoundLimitReached => write!(f, "round limit reached"),
        }
    }
}

/// Снэпшот комнаты. Каждая операция берёт текущий снэпшот и отдаёт новый.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub mode: GameMode,
    pub phase: Phase,
    /// Номер раунда, с 1.
    pub round: u32,
    pub max_rounds: u32,

    /// Карты на столе в порядке розыгрыша. Чистится в начале раунда.
    pub played_cards: Vec<Card>,
    /// Карты, выбывшие из игры (coop-подрезка, очищенные руки вылетевших).
    pub discarded_cards: Vec<CardValue>,

    pub players: Vec<Player>,

    /// Жизни (имеют смысл только в coop).
    pub lives: u32,
    pub max_lives: u32,

    /// Кого «разрезали» последним ходом.
    pub last_cut_player: Option<PlayerId>,
    /// Кто «разрезал» последним ходом.
    pub last_cutter_player: Option<PlayerId>,

    pub winner: Option<Winner>,
    pub game_over_reason: Option<GameOverReason>,

    /// Монотонный счётчик принятых операций.
    pub version: u64,

    /// Таймеры (unix ms). Носят рекомендательный характер.
    pub deal_ready_at: Option<u64>,
    pub turn_deadline: Option<u64>,
    pub next_round_at: Option<u64>,

    pub history: GameHistory,
}

impl GameState {
    /// Пустая комната в фазе Waiting.
    pub fn waiting(mode: GameMode, max_rounds: u32, max_lives: u32) -> Self {
        Self {
            mode,
            phase: Phase::Waiting,
            round: 1,
            max_rounds,
            played_cards: Vec::new(),
            discarded_cards: Vec::new(),
            players: Vec::new(),
            lives: max_lives,
            max_lives,
            last_cut_player: None,
            last_cutter_player: None,
            winner: None,
            game_over_reason: None,
            version: 0,
            deal_ready_at: None,
            turn_deadline: None,
            next_round_at: None,
            history: GameHistory::new(),
        }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    /// Сколько карт ещё на руках у активных игроков.
    pub fn cards_remaining(&self) -> usize {
        self.active_players().map(|p| p.hand.len()).sum()
    }

    /// Все карты в руках активных игроков, по возрастанию.
    pub fn cards_in_hands(&self) -> Vec<CardValue> {
        let all: BTreeSet<CardValue> = self
            .active_players()
            .flat_map(|p| p.hand.iter().copied())
            .collect();
        all.into_iter().collect()
    }

    /// Младшая карта на руках у активных игроков.
    pub fn lowest_card_in_hands(&self) -> Option<CardValue> {
        self.active_players().filter_map(|p| p.lowest_card()).min()
    }

    /// Все значения, которые сейчас где-то лежат: руки + стол + сброс.
    /// Дубликаты здесь означают нарушение инварианта уникальности.
    pub fn all_card_values(&self) -> Vec<CardValue> {
        let mut out: Vec<CardValue> = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter().copied())
            .collect();
        out.extend(self.played_cards.iter().map(|c| c.value));
        out.extend(self.discarded_cards.iter().copied());
        out
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
