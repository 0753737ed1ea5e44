//! Configuration for a game run.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, SnlResult};
use crate::player::PlayerId;

/// Turn cap applied unless a game is explicitly unbounded.
pub const DEFAULT_MAX_TURNS: u64 = 10_000;

/// How many players take part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// One player racing to the goal.
    #[default]
    Single,
    /// Two players alternating turns on a shared event stream.
    TwoPlayer,
}

impl GameMode {
    /// The seats taking part, in turn order.
    pub fn players(self) -> &'static [PlayerId] {
        match self {
            Self::Single => &[PlayerId::ONE],
            Self::TwoPlayer => &[PlayerId::ONE, PlayerId::TWO],
        }
    }

    /// The player who owns the given 1-based roll index.
    pub fn player_for_turn(self, turn: u64) -> PlayerId {
        let seats = self.players();
        let count = seats.len() as u64;
        seats[(turn.saturating_sub(1) % count) as usize]
    }
}

impl std::str::FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> SnlResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" | "1" => Ok(Self::Single),
            "two-player" | "two" | "2" => Ok(Self::TwoPlayer),
            _ => Err(GameError::UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::TwoPlayer => write!(f, "two-player"),
        }
    }
}

/// Configuration for a game run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Single- or two-player.
    pub mode: GameMode,
    /// RNG seed. `None` draws a fresh seed, which is reported in the result.
    pub seed: Option<u64>,
    /// Stop after this many turns without a winner. `None` = no cap.
    pub max_turns: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Single,
            seed: None,
            max_turns: Some(DEFAULT_MAX_TURNS),
        }
    }
}

impl GameConfig {
    /// Set the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the RNG seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the turn cap.
    pub fn with_max_turns(mut self, max_turns: u64) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Remove the turn cap. The game then runs until someone wins.
    pub fn unbounded(mut self) -> Self {
        self.max_turns = None;
        self
    }

    /// Check the configuration before any turn is played.
    pub fn validate(&self) -> SnlResult<()> {
        check_max_turns(self.max_turns)
    }
}

/// Reject a turn cap that would stop a game before its first turn.
pub(crate) fn check_max_turns(max_turns: Option<u64>) -> SnlResult<()> {
    if max_turns == Some(0) {
        return Err(GameError::InvalidConfig(
            "max_turns must be at least 1".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GameMode::Single);
        assert_eq!(config.seed, None);
        assert_eq!(config.max_turns, Some(DEFAULT_MAX_TURNS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let config = GameConfig::default()
            .with_mode(GameMode::TwoPlayer)
            .with_seed(7)
            .with_max_turns(50);
        assert_eq!(config.mode, GameMode::TwoPlayer);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_turns, Some(50));
        assert_eq!(config.unbounded().max_turns, None);
    }

    #[test]
    fn zero_cap_rejected() {
        let config = GameConfig::default().with_max_turns(0);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn parse_mode() {
        assert_eq!("single".parse::<GameMode>(), Ok(GameMode::Single));
        assert_eq!("Two-Player".parse::<GameMode>(), Ok(GameMode::TwoPlayer));
        assert_eq!("2".parse::<GameMode>(), Ok(GameMode::TwoPlayer));
        assert_eq!(
            "three".parse::<GameMode>(),
            Err(GameError::UnknownMode("three".into()))
        );
    }

    #[test]
    fn unknown_mode_keeps_original_text() {
        assert_eq!(
            " Three ".parse::<GameMode>(),
            Err(GameError::UnknownMode(" Three ".into()))
        );
        let err = "Three".parse::<GameMode>().unwrap_err();
        assert!(err.to_string().contains("'Three'"));
    }

    #[test]
    fn mode_display_round_trips() {
        for mode in [GameMode::Single, GameMode::TwoPlayer] {
            assert_eq!(mode.to_string().parse::<GameMode>(), Ok(mode));
        }
    }

    #[test]
    fn turn_parity() {
        assert_eq!(GameMode::TwoPlayer.player_for_turn(1), PlayerId::ONE);
        assert_eq!(GameMode::TwoPlayer.player_for_turn(2), PlayerId::TWO);
        assert_eq!(GameMode::TwoPlayer.player_for_turn(7), PlayerId::ONE);
        assert_eq!(GameMode::Single.player_for_turn(8), PlayerId::ONE);
    }
}
