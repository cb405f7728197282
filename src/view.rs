//! GameView: maps a `BoardSnapshot` into console text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use crate::core::{tile_label, BoardSnapshot, TileStyleKey};

/// Plain-text renderer for the 4x4 grid.
pub struct GameView {
    /// Columns per cell, right-aligned.
    cell_w: usize,
    /// Shown for cells whose style key is `Empty`.
    empty: char,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for a 4-digit tile plus a separating space.
        Self {
            cell_w: 5,
            empty: '.',
        }
    }
}

impl GameView {
    pub fn new(cell_w: usize, empty: char) -> Self {
        Self { cell_w, empty }
    }

    /// Render the grid into an existing buffer, one line per row.
    ///
    /// Callers can reuse the buffer across frames.
    pub fn render_into(&self, snap: &BoardSnapshot, out: &mut String) {
        out.clear();
        for row in &snap.cells {
            for &value in row {
                let label = match TileStyleKey::for_value(value) {
                    TileStyleKey::Empty => self.empty.to_string(),
                    key if key.is_winning() => format!("*{}", tile_label(value)),
                    _ => tile_label(value),
                };
                // Writing into a String cannot fail.
                let _ = write!(out, "{:>width$}", label, width = self.cell_w);
            }
            out.push('\n');
        }
    }

    pub fn render(&self, snap: &BoardSnapshot) -> String {
        let mut out = String::new();
        self.render_into(snap, &mut out);
        out
    }
}
