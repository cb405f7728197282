//! Board module - manages the 4x4 game grid
//!
//! The board is a 4x4 grid where each cell is either empty (`0`) or a tile
//! holding a power of two. Uses a flat array, row-major (`row * 4 + col`).
//!
//! All four shift directions run through one line-traversal routine. A
//! direction only decides which cells form a line and in which order they are
//! visited; step 0 of every line is the cell on the target edge.

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::rng::SimpleRng;
use crate::types::{Cell, Direction, MergeRule, BOARD_SIZE, CELL_COUNT, SPAWN_VALUE, WIN_VALUE};

/// Flat indices of one line, ordered from the target edge outward
type Line = [usize; BOARD_SIZE];

/// The game board - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * BOARD_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Create a board from explicit rows (top row first)
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [0; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Flat indices of line `line` for a shift towards `direction`
    #[inline(always)]
    fn line(direction: Direction, line: usize) -> Line {
        let last = BOARD_SIZE - 1;
        let mut out = [0; BOARD_SIZE];
        for (step, slot) in out.iter_mut().enumerate() {
            let (row, col) = match direction {
                Direction::Left => (line, step),
                Direction::Right => (line, last - step),
                Direction::Up => (step, line),
                Direction::Down => (last - step, line),
            };
            *slot = row * BOARD_SIZE + col;
        }
        out
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Zero every cell
    pub fn reset(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Copy of the grid as rows (top row first)
    pub fn rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE]);
        }
        out
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 0).count()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Shift every line towards `direction` using the default merge rule.
    ///
    /// Returns true if any cell changed.
    pub fn shift(&mut self, direction: Direction) -> bool {
        self.shift_with(direction, MergeRule::default())
    }

    /// Shift every line towards `direction`.
    ///
    /// Each line is swept once, from the cell next to the edge outward. A
    /// tile first slides through empty cells, then gets exactly one chance to
    /// merge with its edge-ward neighbour. The sweep is never repeated.
    pub fn shift_with(&mut self, direction: Direction, rule: MergeRule) -> bool {
        let mut changed = false;
        for l in 0..BOARD_SIZE {
            let line = Self::line(direction, l);
            changed |= self.shift_line(&line, rule);
        }
        trace!(
            "shift {} ({}): changed={}",
            direction.as_str(),
            rule.as_str(),
            changed
        );
        changed
    }

    fn shift_line(&mut self, line: &Line, rule: MergeRule) -> bool {
        let mut changed = false;
        // Marks line slots that already received a merge during this sweep.
        let mut merged = [false; BOARD_SIZE];

        for src in 1..BOARD_SIZE {
            if self.cells[line[src]] == 0 {
                continue;
            }

            let mut k = src;
            while k > 0 && self.cells[line[k - 1]] == 0 {
                self.cells[line[k - 1]] = self.cells[line[k]];
                self.cells[line[k]] = 0;
                k -= 1;
                changed = true;
            }

            if k == 0 {
                continue;
            }

            let blocked = rule == MergeRule::SingleMerge && merged[k - 1];
            if !blocked && self.cells[line[k - 1]] == self.cells[line[k]] {
                self.cells[line[k - 1]] *= 2;
                self.cells[line[k]] = 0;
                merged[k - 1] = true;
                changed = true;
            }
        }

        changed
    }

    /// Would a shift towards `direction` change anything? Leaves the board untouched.
    pub fn can_shift(&self, direction: Direction, rule: MergeRule) -> bool {
        let mut scratch = *self;
        scratch.shift_with(direction, rule)
    }

    /// Place a `SPAWN_VALUE` tile on a uniformly chosen empty cell.
    ///
    /// Returns false (and leaves the board untouched) when no cell is empty.
    pub fn spawn_random_tile(&mut self, rng: &mut SimpleRng) -> bool {
        let empty: ArrayVec<usize, CELL_COUNT> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == 0)
            .map(|(i, _)| i)
            .collect();

        if empty.is_empty() {
            debug!("spawn skipped: board is full");
            return false;
        }

        let pick = rng.next_range(empty.len() as u32) as usize;
        let idx = empty[pick];
        self.cells[idx] = SPAWN_VALUE;
        debug!(
            "spawned {} at ({}, {}), empty slot {} of {}",
            SPAWN_VALUE,
            idx / BOARD_SIZE,
            idx % BOARD_SIZE,
            pick,
            empty.len()
        );
        true
    }

    /// True when the board is full and no two orthogonal neighbours match
    pub fn is_game_over(&self) -> bool {
        if self.cells.iter().any(|&c| c == 0) {
            return false;
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let here = self.cells[row * BOARD_SIZE + col];
                if row + 1 < BOARD_SIZE && here == self.cells[(row + 1) * BOARD_SIZE + col] {
                    return false;
                }
                if col + 1 < BOARD_SIZE && here == self.cells[row * BOARD_SIZE + col + 1] {
                    return false;
                }
            }
        }

        true
    }

    /// True when some cell holds exactly `WIN_VALUE`
    pub fn has_won(&self) -> bool {
        self.cells.iter().any(|&c| c == WIN_VALUE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(row: [Cell; 4]) -> Board {
        Board::from_rows([row, [0; 4], [0; 4], [0; 4]])
    }

    fn first_row(board: &Board) -> [Cell; 4] {
        board.rows()[0]
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 3), Some(3));
        assert_eq!(Board::index(1, 0), Some(4));
        assert_eq!(Board::index(3, 3), Some(15));
        assert_eq!(Board::index(4, 0), None);
        assert_eq!(Board::index(0, 4), None);
    }

    #[test]
    fn test_line_orders_start_at_target_edge() {
        assert_eq!(Board::line(Direction::Left, 1), [4, 5, 6, 7]);
        assert_eq!(Board::line(Direction::Right, 1), [7, 6, 5, 4]);
        assert_eq!(Board::line(Direction::Up, 2), [2, 6, 10, 14]);
        assert_eq!(Board::line(Direction::Down, 2), [14, 10, 6, 2]);
    }

    #[test]
    fn test_pair_merges_left() {
        let mut board = row_board([2, 2, 0, 0]);
        assert!(board.shift(Direction::Left));
        assert_eq!(first_row(&board), [4, 0, 0, 0]);
    }

    #[test]
    fn test_slide_through_gaps() {
        let mut board = row_board([0, 0, 0, 8]);
        assert!(board.shift(Direction::Left));
        assert_eq!(first_row(&board), [8, 0, 0, 0]);

        let mut board = row_board([4, 0, 2, 0]);
        assert!(board.shift(Direction::Right));
        assert_eq!(first_row(&board), [0, 0, 4, 2]);
    }

    #[test]
    fn test_four_equal_tiles_make_two_pairs() {
        for rule in [MergeRule::SingleMerge, MergeRule::Cascade] {
            let mut board = row_board([2, 2, 2, 2]);
            assert!(board.shift_with(Direction::Left, rule));
            assert_eq!(first_row(&board), [4, 4, 0, 0]);
        }
    }

    #[test]
    fn test_three_equal_tiles_merge_nearest_edge() {
        let mut board = row_board([2, 2, 2, 0]);
        board.shift(Direction::Left);
        assert_eq!(first_row(&board), [4, 2, 0, 0]);

        let mut board = row_board([0, 2, 2, 2]);
        board.shift(Direction::Right);
        assert_eq!(first_row(&board), [0, 0, 2, 4]);
    }

    #[test]
    fn test_merged_cell_does_not_merge_again() {
        let mut board = row_board([4, 4, 8, 0]);
        assert!(board.shift_with(Direction::Left, MergeRule::SingleMerge));
        assert_eq!(first_row(&board), [8, 8, 0, 0]);
    }

    #[test]
    fn test_cascade_lets_merged_cell_merge_again() {
        let mut board = row_board([4, 4, 8, 0]);
        assert!(board.shift_with(Direction::Left, MergeRule::Cascade));
        assert_eq!(first_row(&board), [16, 0, 0, 0]);

        let mut board = row_board([2, 2, 4, 8]);
        board.shift_with(Direction::Left, MergeRule::Cascade);
        assert_eq!(first_row(&board), [16, 0, 0, 0]);
    }

    #[test]
    fn test_columns_shift_up_and_down() {
        let mut board = Board::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0]]);
        assert!(board.shift_with(Direction::Up, MergeRule::SingleMerge));
        assert_eq!(
            board.rows(),
            [[4, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );

        assert!(board.shift_with(Direction::Down, MergeRule::SingleMerge));
        assert_eq!(
            board.rows(),
            [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [8, 0, 0, 0]]
        );

        // Default rule: the fresh 4 at the top merges with the trailing 4.
        let mut board = Board::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0]]);
        assert!(board.shift(Direction::Up));
        assert_eq!(
            board.rows(),
            [[8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
    }

    #[test]
    fn test_default_shift_lets_merged_cell_merge_again() {
        let mut board = row_board([4, 4, 8, 0]);
        assert!(board.shift(Direction::Left));
        assert_eq!(first_row(&board), [16, 0, 0, 0]);

        let mut board = row_board([0, 8, 4, 4]);
        assert!(board.shift(Direction::Right));
        assert_eq!(first_row(&board), [0, 0, 0, 16]);
    }

    #[test]
    fn test_no_change_reports_false() {
        let mut board = row_board([2, 4, 0, 0]);
        assert!(!board.shift(Direction::Left));
        assert_eq!(first_row(&board), [2, 4, 0, 0]);

        let mut empty = Board::new();
        for dir in Direction::ALL {
            assert!(!empty.shift(dir));
        }
    }

    #[test]
    fn test_can_shift_does_not_mutate() {
        let board = row_board([2, 2, 0, 0]);
        assert!(board.can_shift(Direction::Left, MergeRule::SingleMerge));
        assert!(board.can_shift(Direction::Down, MergeRule::SingleMerge));
        assert!(!board.can_shift(Direction::Up, MergeRule::SingleMerge));
        assert_eq!(first_row(&board), [2, 2, 0, 0]);
    }

    #[test]
    fn test_spawn_fills_only_empty_cells() {
        let mut board = Board::new();
        let mut rng = SimpleRng::new(3);
        for n in 1..=CELL_COUNT {
            assert!(board.spawn_random_tile(&mut rng));
            assert_eq!(board.empty_count(), CELL_COUNT - n);
        }
        assert!(board.cells().iter().all(|&c| c == SPAWN_VALUE));
        assert!(!board.spawn_random_tile(&mut rng));
    }

    #[test]
    fn test_game_over_detection() {
        let stuck = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(stuck.is_game_over());

        let vertical_pair =
            Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 32]]);
        assert!(!vertical_pair.is_game_over());

        let mut with_gap = stuck;
        with_gap.set(2, 2, 0);
        assert!(!with_gap.is_game_over());
    }

    #[test]
    fn test_has_won() {
        let mut board = Board::new();
        assert!(!board.has_won());
        board.set(3, 1, 1024);
        assert!(!board.has_won());
        board.set(0, 0, WIN_VALUE);
        assert!(board.has_won());
    }
}
