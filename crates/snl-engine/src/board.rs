//! Board squares.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, SnlResult};

/// The winning square. Players must land on it exactly.
pub const BOARD_END: u8 = 100;

/// A square on the 100-square board, from 0 (off the board) to 100 (goal).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// The starting square every player begins on.
    pub const START: Self = Self(0);
    /// The goal square.
    pub const GOAL: Self = Self(BOARD_END);

    /// Create a position, rejecting anything past the goal.
    pub fn new(square: u8) -> SnlResult<Self> {
        if square > BOARD_END {
            return Err(GameError::InvalidPosition(square));
        }
        Ok(Self(square))
    }

    /// Wrap a square already known to be on the board.
    pub(crate) fn from_square(square: u8) -> Self {
        debug_assert!(square <= BOARD_END);
        Self(square.min(BOARD_END))
    }

    /// The square number.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this is the goal square.
    pub fn is_goal(self) -> bool {
        self == Self::GOAL
    }
}

impl TryFrom<u8> for Position {
    type Error = GameError;

    fn try_from(square: u8) -> SnlResult<Self> {
        Self::new(square)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(Position::new(0), Ok(Position::START));
        assert_eq!(Position::new(100), Ok(Position::GOAL));
        assert_eq!(Position::new(101), Err(GameError::InvalidPosition(101)));
    }

    #[test]
    fn goal_check() {
        assert!(Position::GOAL.is_goal());
        assert!(!Position::START.is_goal());
        assert!(!Position::new(99).unwrap().is_goal());
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let pos: Position = serde_json::from_str("42").unwrap();
        assert_eq!(pos.value(), 42);
        assert!(serde_json::from_str::<Position>("150").is_err());
    }
}
