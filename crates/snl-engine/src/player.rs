//! Players and their board state.

use serde::{Deserialize, Serialize};

use crate::board::Position;

/// Identifies a player by seat number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player (and the only one in single-player games).
    pub const ONE: Self = Self(1);
    /// The second player in two-player games.
    pub const TWO: Self = Self(2);

    /// The seat number.
    pub fn seat(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player taking part in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Who this is.
    pub id: PlayerId,
    /// Current square.
    pub position: Position,
}

impl Player {
    /// A player at the starting square.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            position: Position::START,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(PlayerId::ONE.to_string(), "Player 1");
        assert_eq!(PlayerId::TWO.to_string(), "Player 2");
    }

    #[test]
    fn starts_at_zero() {
        let player = Player::new(PlayerId::TWO);
        assert_eq!(player.id.seat(), 2);
        assert_eq!(player.position, Position::START);
    }
}
