//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 board engine and the session that drives it.
//! It has **zero dependencies** on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Any front end can drive it (console, GUI, headless)
//! - **Allocation-free**: Shifts, spawns, and snapshots work on fixed arrays
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with shift/merge, random spawn, and win/loss checks
//! - [`game_state`]: One session: board + RNG + status protocol
//! - [`rng`]: Reseedable LCG for tile spawns
//! - [`snapshot`]: Read-only view for rendering
//! - [`tile`]: Value to label/style-key mapping for front ends
//! - [`config`]: Session configuration (seed, merge rule)
//!
//! # Game Rules
//!
//! - **Shift**: every row (Left/Right) or column (Up/Down) slides towards the
//!   edge; equal neighbours merge into one tile of double value
//! - **Spawn**: after a shift that changed the board, one `2` appears on a
//!   uniformly chosen empty cell
//! - **Win**: some tile equals 2048 (play may continue)
//! - **Game over**: no empty cell and no orthogonally adjacent equal pair
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameState, StatusMessage};
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//! assert!(board.shift(Direction::Left));
//! assert_eq!(board.get(0, 0), Some(4));
//!
//! let mut game = GameState::with_seed(12345);
//! game.start();
//! let outcome = game.apply_action(GameAction::Move(Direction::Up));
//! if !outcome.changed {
//!     assert_eq!(outcome.message, StatusMessage::TryAnotherDirection);
//! }
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game_state::{GameState, GameStatus, MoveOutcome, StatusMessage};
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
pub use tile::{tile_label, tile_rank, TileStyleKey};
