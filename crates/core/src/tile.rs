//! Tile display mapping.
//!
//! Front ends look up a label and a style key per cell value. Nothing in the
//! board engine depends on this module.

use log::warn;

use crate::types::{Cell, WIN_VALUE};

/// log2 of a tile value: `Some(0)` for empty, `Some(n)` for `2^n`,
/// `None` for anything that is not a power of two >= 2.
pub fn tile_rank(value: Cell) -> Option<u8> {
    match value {
        0 => Some(0),
        1 => None,
        v if v.is_power_of_two() => Some(v.trailing_zeros() as u8),
        _ => None,
    }
}

/// Text shown on a cell (empty string for an empty cell)
pub fn tile_label(value: Cell) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Style bucket for a cell value
///
/// One key per tile value up to the win tile. Larger tiles share `Beyond`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileStyleKey {
    Empty,
    T2,
    T4,
    T8,
    T16,
    T32,
    T64,
    T128,
    T256,
    T512,
    T1024,
    T2048,
    Beyond,
}

impl TileStyleKey {
    const BY_RANK: [TileStyleKey; 12] = [
        TileStyleKey::Empty,
        TileStyleKey::T2,
        TileStyleKey::T4,
        TileStyleKey::T8,
        TileStyleKey::T16,
        TileStyleKey::T32,
        TileStyleKey::T64,
        TileStyleKey::T128,
        TileStyleKey::T256,
        TileStyleKey::T512,
        TileStyleKey::T1024,
        TileStyleKey::T2048,
    ];

    /// Map a cell value to its style key.
    ///
    /// Malformed values render as empty.
    pub fn for_value(value: Cell) -> Self {
        match tile_rank(value) {
            Some(rank) => Self::BY_RANK
                .get(rank as usize)
                .copied()
                .unwrap_or(TileStyleKey::Beyond),
            None => {
                warn!("unknown tile value {}, rendering as empty", value);
                TileStyleKey::Empty
            }
        }
    }

    /// True only for the tile holding exactly `WIN_VALUE`
    pub fn is_winning(&self) -> bool {
        *self == Self::for_value(WIN_VALUE)
    }
}
