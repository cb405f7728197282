//! 2048 (workspace facade crate).
//!
//! Exposes `tui_2048::{core,types}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub mod view;
