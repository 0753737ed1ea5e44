//! Turn records and the append-only game log.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::dice::{DieRoll, MovementOption};
use crate::player::PlayerId;

/// The outcome of one resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based roll index across the whole game.
    pub turn: u64,
    /// The player whose turn it was.
    pub player: PlayerId,
    /// The die roll.
    pub roll: DieRoll,
    /// The movement option drawn with the roll.
    pub option: MovementOption,
    /// Position before the turn.
    pub before: Position,
    /// Position after the turn.
    pub after: Position,
}

impl TurnRecord {
    /// Whether the turn changed the player's position.
    pub fn moved(&self) -> bool {
        self.before != self.after
    }

    /// Whether this turn landed on the goal.
    pub fn is_winning(&self) -> bool {
        self.after.is_goal()
    }
}

/// Ordered record of every turn in a game, in turn order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameLog {
    records: Vec<TurnRecord>,
}

impl GameLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: TurnRecord) {
        self.records.push(record);
    }

    /// All records, in turn order.
    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    /// Iterate over records in turn order.
    pub fn iter(&self) -> std::slice::Iter<'_, TurnRecord> {
        self.records.iter()
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&TurnRecord> {
        self.records.last()
    }

    /// Records for a single player.
    pub fn for_player(&self, player: PlayerId) -> Vec<&TurnRecord> {
        self.records.iter().filter(|r| r.player == player).collect()
    }

    /// How many turns drew the given option.
    pub fn count_option(&self, option: MovementOption) -> usize {
        self.records.iter().filter(|r| r.option == option).count()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no turn has been played.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a GameLog {
    type Item = &'a TurnRecord;
    type IntoIter = std::slice::Iter<'a, TurnRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
