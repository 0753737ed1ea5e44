//! Game engine for the Snake & Ladder turn simulation.
//!
//! A game is a race to square 100 on a linear board. Each turn rolls a d6 and
//! draws a movement option (no play, ladder, or snake) independently of the
//! roll. Ladders that would overshoot the goal are void, snakes stop at square
//! 0, and a player must land on 100 exactly to win. In two-player games both
//! players consume one shared event stream, alternating by roll index.
//!
//! The engine only produces structured records ([`GameResult`], [`GameLog`],
//! [`TurnRecord`]); rendering them is left to the caller.

/// The board and its squares.
pub mod board;
/// Configuration types for game runs.
pub mod config;
/// Die rolls, movement options, and event sources.
pub mod dice;
/// Error types for the engine.
pub mod error;
/// The turn loop and game results.
pub mod game;
/// Turn records and the game log.
pub mod game_log;
/// Players and seat identifiers.
pub mod player;
/// Turn resolution rules.
pub mod resolve;

/// Re-exports of board types.
pub use board::{BOARD_END, Position};
/// Re-exports of configuration types.
pub use config::{DEFAULT_MAX_TURNS, GameConfig, GameMode};
/// Re-exports of dice and event types.
pub use dice::{DiceEvents, DieRoll, EventSource, GameEvent, MovementOption};
/// Re-exports of [`error::GameError`] and [`error::SnlResult`].
pub use error::{GameError, SnlResult};
/// Re-exports of the game loop types.
pub use game::{Game, GameResult, GameState, Outcome, play};
/// Re-exports of log types.
pub use game_log::{GameLog, TurnRecord};
/// Re-exports of player types.
pub use player::{Player, PlayerId};
/// Re-export of [`resolve::resolve`].
pub use resolve::resolve;
