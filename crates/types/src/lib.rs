//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, console driver, benchmarks).
//!
//! # Board Dimensions
//!
//! The 2048 board is a fixed 4x4 grid:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//! - **Cells**: 16, each either empty (`0`) or a power of two
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 4 | Side length of the board |
//! | `CELL_COUNT` | 16 | Total number of cells |
//! | `SPAWN_VALUE` | 2 | Value of every newly spawned tile |
//! | `WIN_VALUE` | 2048 | Tile value that counts as a win |
//! | `INITIAL_TILES` | 2 | Tiles spawned when a game starts |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, MergeRule, BOARD_SIZE, WIN_VALUE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Parse a console command
//! let action = GameAction::from_str("w").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(MergeRule::default(), MergeRule::Cascade);
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(WIN_VALUE, 2048);
//! ```

/// Side length of the board (4 rows, 4 columns)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Value written into a cell by a random spawn
pub const SPAWN_VALUE: Cell = 2;

/// A board holding exactly this value in some cell has been won
pub const WIN_VALUE: Cell = 2048;

/// Number of tiles spawned when a game starts or restarts
pub const INITIAL_TILES: usize = 2;

/// A cell on the game board
///
/// - `0`: Empty cell
/// - `2, 4, 8, ...`: Tile holding that value
pub type Cell = u32;

/// The four shift directions
///
/// Each direction names the board edge tiles slide towards:
/// - **Up**: columns, towards row 0
/// - **Down**: columns, towards row 3
/// - **Left**: rows, towards column 0
/// - **Right**: rows, towards column 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order the on-screen buttons were laid out
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Left,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or the `w`/`a`/`s`/`d` keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("D"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to capitalized label (matches the button captions)
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

/// Discrete commands a caller can feed into a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the board in a direction
    Move(Direction),
    /// Clear the board and start a new game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("R"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" | "r" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    /// Convert to lowercase command string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "up",
            GameAction::Move(Direction::Down) => "down",
            GameAction::Move(Direction::Left) => "left",
            GameAction::Move(Direction::Right) => "right",
            GameAction::Restart => "restart",
        }
    }
}

/// How merges interact within a single shift
///
/// - **Cascade** (default): each source cell is checked once against whatever
///   sits next to it after sliding, including a freshly merged cell, so
///   `[4, 4, 8, 0]` shifted left becomes `[16, 0, 0, 0]`. This is the
///   historical sequencing of the button-driven game.
/// - **SingleMerge**: a cell produced by a merge cannot merge again in the same
///   shift, so `[4, 4, 8, 0]` becomes `[8, 8, 0, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergeRule {
    #[default]
    Cascade,
    SingleMerge,
}

impl MergeRule {
    /// Parse merge rule from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" | "single-merge" | "singlemerge" => Some(MergeRule::SingleMerge),
            "cascade" => Some(MergeRule::Cascade),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MergeRule::SingleMerge => "single",
            MergeRule::Cascade => "cascade",
        }
    }
}
