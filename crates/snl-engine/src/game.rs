//! The turn loop.
//!
//! A [`Game`] owns its players, its event source, and its log for the
//! lifetime of one run. Each turn draws one event from the shared source,
//! resolves it against the player who owns that roll index, and appends a
//! [`TurnRecord`]. The game finishes the moment a player lands exactly on
//! square 100, or when the configured turn cap is hit.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::config::{GameConfig, GameMode, check_max_turns};
use crate::dice::{DiceEvents, EventSource, GameEvent};
use crate::error::{GameError, SnlResult};
use crate::game_log::{GameLog, TurnRecord};
use crate::player::{Player, PlayerId};
use crate::resolve::resolve;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A player landed exactly on the goal.
    Won {
        /// The winning player.
        winner: PlayerId,
    },
    /// The turn cap was reached before anyone won.
    TurnLimitReached {
        /// The cap that was hit.
        limit: u64,
    },
}

/// Where the turn loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Turns are still being played.
    InProgress,
    /// No further turns will be played.
    Finished(Outcome),
}

/// Everything a finished run hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The mode the game was played in.
    pub mode: GameMode,
    /// Every turn, in order.
    pub log: GameLog,
    /// How the game ended.
    pub outcome: Outcome,
    /// Number of dice rolls made across all players.
    pub total_rolls: u64,
    /// The seed of the event stream, when it came from [`DiceEvents`].
    pub seed: Option<u64>,
    /// Final board state of every player.
    pub players: Vec<Player>,
}

impl GameResult {
    /// The winner, if the game did not stop at the turn cap.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            Outcome::Won { winner } => Some(winner),
            Outcome::TurnLimitReached { .. } => None,
        }
    }
}

/// A single run of the game.
#[derive(Debug)]
pub struct Game<S = DiceEvents> {
    mode: GameMode,
    players: Vec<Player>,
    source: S,
    log: GameLog,
    state: GameState,
    turn: u64,
    max_turns: Option<u64>,
    seed: Option<u64>,
}

impl Game<DiceEvents> {
    /// Create a game driven by a seeded dice stream.
    pub fn new(config: GameConfig) -> SnlResult<Self> {
        config.validate()?;
        let source = match config.seed {
            Some(seed) => DiceEvents::new(seed),
            None => DiceEvents::from_entropy(),
        };
        let seed = source.seed();
        let mut game = Self::build(config.mode, source, config.max_turns);
        game.seed = Some(seed);
        Ok(game)
    }
}

impl<S: EventSource> Game<S> {
    /// Create a game that draws its events from `source`.
    pub fn with_source(mode: GameMode, source: S, max_turns: Option<u64>) -> SnlResult<Self> {
        check_max_turns(max_turns)?;
        Ok(Self::build(mode, source, max_turns))
    }

    fn build(mode: GameMode, source: S, max_turns: Option<u64>) -> Self {
        Self {
            mode,
            players: mode.players().iter().copied().map(Player::new).collect(),
            source,
            log: GameLog::new(),
            state: GameState::InProgress,
            turn: 0,
            max_turns,
            seed: None,
        }
    }

    /// Draw the next event from the source and play it.
    pub fn step(&mut self) -> SnlResult<TurnRecord> {
        self.ensure_in_progress()?;
        let event = self.source.next_event();
        Ok(self.resolve_turn(event))
    }

    /// Play a turn with an externally supplied event, bypassing the source.
    pub fn play_turn(&mut self, event: GameEvent) -> SnlResult<TurnRecord> {
        self.ensure_in_progress()?;
        Ok(self.resolve_turn(event))
    }

    /// Play until the game finishes.
    pub fn run(mut self) -> GameResult {
        loop {
            if let GameState::Finished(outcome) = self.state {
                return GameResult {
                    mode: self.mode,
                    log: self.log,
                    outcome,
                    total_rolls: self.turn,
                    seed: self.seed,
                    players: self.players,
                };
            }
            let event = self.source.next_event();
            self.resolve_turn(event);
        }
    }

    fn ensure_in_progress(&self) -> SnlResult<()> {
        match self.state {
            GameState::InProgress => Ok(()),
            GameState::Finished(_) => Err(GameError::GameOver),
        }
    }

    fn resolve_turn(&mut self, event: GameEvent) -> TurnRecord {
        self.turn += 1;
        let id = self.mode.player_for_turn(self.turn);
        let turn = self.turn;
        let player = self.player_mut(id);
        let before = player.position;
        let after = resolve(before, event.roll, event.option);
        player.position = after;

        let record = TurnRecord {
            turn,
            player: id,
            roll: event.roll,
            option: event.option,
            before,
            after,
        };
        log::debug!(
            "turn {turn}: {id} rolled {} with {}, {before} -> {after}",
            event.roll,
            event.option
        );
        self.log.push(record);

        if after.is_goal() {
            log::info!("{id} wins after {turn} rolls");
            self.state = GameState::Finished(Outcome::Won { winner: id });
        } else if let Some(limit) = self.max_turns
            && turn >= limit
        {
            log::warn!("no winner after {limit} turns, stopping");
            self.state = GameState::Finished(Outcome::TurnLimitReached { limit });
        }
        record
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        let index = usize::from(id.seat().saturating_sub(1));
        &mut self.players[index]
    }

    /// The mode this game is played in.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current state of the turn loop.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whether turns can still be played.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    /// Number of turns played so far.
    pub fn turns(&self) -> u64 {
        self.turn
    }

    /// The log so far.
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// All players in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A single player's state.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// A player's current square.
    pub fn position(&self, id: PlayerId) -> Option<Position> {
        self.player(id).map(|p| p.position)
    }

    /// The seed of the event stream, when known.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Configure, play, and return a complete game.
pub fn play(config: GameConfig) -> SnlResult<GameResult> {
    Ok(Game::new(config)?.run())
}
