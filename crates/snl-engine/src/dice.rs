//! Die rolls, movement options, and the per-turn random event stream.
//!
//! Every turn consumes exactly one [`GameEvent`]: a d6 roll followed by a
//! uniformly chosen [`MovementOption`]. The option is drawn independently of
//! the roll and of the board, so snakes and ladders are not tied to tiles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, SnlResult};

/// Number of faces on the game die.
pub const DIE_SIDES: u8 = 6;

/// The value of a single d6 roll (1-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieRoll(u8);

impl DieRoll {
    /// Create a roll, rejecting values outside 1-6.
    pub fn new(value: u8) -> SnlResult<Self> {
        if !(1..=DIE_SIDES).contains(&value) {
            return Err(GameError::InvalidRoll(value));
        }
        Ok(Self(value))
    }

    /// The face value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DieRoll {
    type Error = GameError;

    fn try_from(value: u8) -> SnlResult<Self> {
        Self::new(value)
    }
}

impl From<DieRoll> for u8 {
    fn from(roll: DieRoll) -> Self {
        roll.0
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a turn's roll does to the player's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementOption {
    /// The player stays put.
    NoPlay,
    /// The player climbs forward by the roll.
    Ladder,
    /// The player slides back by the roll.
    Snake,
}

impl MovementOption {
    /// All options, in draw order.
    pub const ALL: [Self; 3] = [Self::NoPlay, Self::Ladder, Self::Snake];
}

impl std::fmt::Display for MovementOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPlay => write!(f, "No Play"),
            Self::Ladder => write!(f, "Ladder"),
            Self::Snake => write!(f, "Snake"),
        }
    }
}

/// One draw from the event stream: the roll and the option it is played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameEvent {
    /// The die roll.
    pub roll: DieRoll,
    /// The movement option.
    pub option: MovementOption,
}

impl GameEvent {
    /// Build an event from a raw die value and an option.
    pub fn new(roll: u8, option: MovementOption) -> SnlResult<Self> {
        Ok(Self {
            roll: DieRoll::new(roll)?,
            option,
        })
    }
}

/// A source of turn events.
///
/// A game owns exactly one source and every player's turn draws from it in
/// turn order. Implementations must never branch the stream per player.
pub trait EventSource {
    /// Produce the next event, advancing the stream by one.
    fn next_event(&mut self) -> GameEvent;
}

/// Seeded pseudo-random event stream.
#[derive(Debug, Clone)]
pub struct DiceEvents {
    rng: StdRng,
    seed: u64,
}

impl DiceEvents {
    /// Create a stream from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a stream from a freshly drawn seed. The seed stays available
    /// through [`DiceEvents::seed`] so the run can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EventSource for DiceEvents {
    fn next_event(&mut self) -> GameEvent {
        // Roll first, then option.
        let roll = DieRoll(self.rng.random_range(1..=DIE_SIDES));
        let option = MovementOption::ALL[self.rng.random_range(0..MovementOption::ALL.len())];
        GameEvent { roll, option }
    }
}
