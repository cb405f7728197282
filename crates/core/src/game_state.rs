//! Game state module - one 2048 session
//!
//! Ties the board to its random source and implements the per-input protocol
//! a front end follows: shift, spawn on change, then report win/loss.
//! The engine never locks out input; terminal states are reported, not enforced.

use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::rng::SimpleRng;
use crate::snapshot::BoardSnapshot;
use crate::types::*;

/// Session status derived from the board after each command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    /// Some tile reached `WIN_VALUE`; play may continue
    Won,
    /// Board is full with no adjacent equal tiles
    Over,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Message a front end shows after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusMessage {
    None,
    Won,
    GameOver,
    TryAnotherDirection,
}

impl StatusMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusMessage::None => "",
            StatusMessage::Won => "win",
            StatusMessage::GameOver => "ending",
            StatusMessage::TryAnotherDirection => "change direction",
        }
    }
}

/// Result of applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The shift moved or merged at least one tile
    pub changed: bool,
    /// A new tile was placed after the shift
    pub spawned: bool,
    pub status: GameStatus,
    pub message: StatusMessage,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    merge_rule: MergeRule,
    status: GameStatus,
    started: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Changed moves in the current episode.
    moves: u32,
}

impl GameState {
    /// Create a session with an empty board; call [`GameState::start`] to seed it
    pub fn new(config: GameConfig) -> Self {
        let seed = config.resolve_seed();
        debug!("new session: seed={} merge_rule={}", seed, config.merge_rule.as_str());
        Self {
            board: Board::new(),
            rng: SimpleRng::new(seed),
            merge_rule: config.merge_rule,
            status: GameStatus::Playing,
            started: false,
            episode_id: 0,
            moves: 0,
        }
    }

    /// Create a session with a fixed seed and the default merge rule
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig::with_seed(seed))
    }

    /// Create a session around an existing board (already started)
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let mut state = Self::new(config);
        state.board = board;
        state.started = true;
        state.status = Self::evaluate(&state.board);
        state
    }

    /// Place the opening tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.place_opening_tiles();
    }

    /// Returns true if every opening tile was placed
    fn place_opening_tiles(&mut self) -> bool {
        self.started = true;
        let placed = (0..INITIAL_TILES)
            .filter(|_| self.board.spawn_random_tile(&mut self.rng))
            .count();
        self.status = Self::evaluate(&self.board);
        debug!(
            "episode {} started with {} tiles",
            self.episode_id, placed
        );
        placed == INITIAL_TILES
    }

    /// Clear the board and start a new episode, continuing the RNG sequence.
    ///
    /// Returns true if every opening tile was placed.
    pub fn restart(&mut self) -> bool {
        self.board.reset();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.moves = 0;
        let spawned = self.place_opening_tiles();
        info!("restarted: episode {}", self.episode_id);
        spawned
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn merge_rule(&self) -> MergeRule {
        self.merge_rule
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Cell value at (row, col), None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Zero the board without spawning; the session counts as not started
    pub fn reset(&mut self) {
        self.board.reset();
        self.started = false;
        self.moves = 0;
        self.status = GameStatus::Playing;
    }

    /// Shift with the session's merge rule. Does not spawn.
    pub fn shift(&mut self, direction: Direction) -> bool {
        self.board.shift_with(direction, self.merge_rule)
    }

    /// Spawn one tile using the session's RNG
    pub fn spawn_random_tile(&mut self) -> bool {
        self.board.spawn_random_tile(&mut self.rng)
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    pub fn has_won(&self) -> bool {
        self.board.has_won()
    }

    /// Apply one command and report what happened
    pub fn apply_action(&mut self, action: GameAction) -> MoveOutcome {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::Restart => {
                let before = self.board;
                let spawned = self.restart();
                MoveOutcome {
                    changed: self.board != before,
                    spawned,
                    status: self.status,
                    message: StatusMessage::None,
                }
            }
        }
    }

    fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let before = self.status;
        let changed = self.shift(direction);

        let (spawned, message) = if changed {
            self.moves = self.moves.wrapping_add(1);
            let spawned = self.spawn_random_tile();
            let message = if self.has_won() {
                StatusMessage::Won
            } else if self.is_game_over() {
                StatusMessage::GameOver
            } else {
                StatusMessage::None
            };
            (spawned, message)
        } else if self.is_game_over() {
            (false, StatusMessage::GameOver)
        } else {
            (false, StatusMessage::TryAnotherDirection)
        };

        self.status = Self::evaluate(&self.board);
        if self.status != before {
            info!(
                "episode {}: {:?} -> {:?} after {} moves",
                self.episode_id, before, self.status, self.moves
            );
        }

        MoveOutcome {
            changed,
            spawned,
            status: self.status,
            message,
        }
    }

    fn evaluate(board: &Board) -> GameStatus {
        if board.has_won() {
            GameStatus::Won
        } else if board.is_game_over() {
            GameStatus::Over
        } else {
            GameStatus::Playing
        }
    }

    /// Fill `out` without allocating
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.cells = self.board.rows();
        out.empty = self.board.empty_count() as u8;
        out.max_tile = self.board.max_tile();
        out.won = self.board.has_won();
        out.game_over = self.board.is_game_over();
        out.episode_id = self.episode_id;
        out.moves = self.moves;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
