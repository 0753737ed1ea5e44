//! Error types for the game engine.

/// Errors raised while configuring or driving a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The mode selector was not one of the supported modes.
    #[error("unknown game mode: '{0}' (expected 'single' or 'two-player')")]
    UnknownMode(String),

    /// The game configuration is malformed.
    #[error("invalid game config: {0}")]
    InvalidConfig(String),

    /// A die value outside 1-6 was supplied.
    #[error("invalid die roll: {0} (expected 1-6)")]
    InvalidRoll(u8),

    /// A board position beyond the final square was supplied.
    #[error("invalid position: {0} (expected 0-100)")]
    InvalidPosition(u8),

    /// A turn was requested after the game had already finished.
    #[error("game is already over")]
    GameOver,
}

/// Convenience result type for engine operations.
pub type SnlResult<T> = Result<T, GameError>;
