use crate::types::{Cell, BOARD_SIZE};

/// Read-only view of a session, filled once per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub empty: u8,
    pub max_tile: Cell,
    pub won: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub moves: u32,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        self.empty = (BOARD_SIZE * BOARD_SIZE) as u8;
        self.max_tile = 0;
        self.won = false;
        self.game_over = false;
        self.episode_id = 0;
        self.moves = 0;
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
            empty: 0,
            max_tile: 0,
            won: false,
            game_over: false,
            episode_id: 0,
            moves: 0,
        };
        s.clear();
        s
    }
}
