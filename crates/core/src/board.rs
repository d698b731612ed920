//! Board module - manages the game grid
//!
//! The board is a 5x5 grid where each cell can be empty or hold a bead owned
//! by one of the two players. Uses a flat array for cache locality and
//! zero-allocation. Coordinates: (x, y) with x running left to right and y
//! top to bottom; storage is row-major (`y * BOARD_SIZE + x`).
//!
//! Besides occupancy the board tracks the single removal-highlight marker
//! (the bead staged for a trade). The marker is display bookkeeping only and
//! has no rule effect.

use arrayvec::ArrayVec;

use crate::types::{Cell, Coord, Player, ShiftDirection, BOARD_SIZE, CELL_COUNT};

/// Edge length as a flat-index stride
const STRIDE: usize = BOARD_SIZE as usize;

/// The game board - 5x5 cells plus the removal-highlight marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (`y * BOARD_SIZE + x`)
    cells: [Cell; CELL_COUNT],
    /// Cell currently staged for removal, if any
    highlight: Option<Coord>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            highlight: None,
        }
    }

    /// Get the cell at a coordinate
    #[inline]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Set the cell at a coordinate
    #[inline]
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// Check whether a cell is empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// The player owning the bead at a coordinate, if any
    pub fn owner(&self, coord: Coord) -> Option<Player> {
        self.get(coord)
    }

    /// Number of beads the given player has on the board
    pub fn count_owned(&self, player: Player) -> u8 {
        self.cells.iter().filter(|&&c| c == Some(player)).count() as u8
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_none()).count() as u8
    }

    /// True when no empty cell remains
    pub fn is_saturated(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// The orthogonal neighbours of a cell.
    ///
    /// Border cells have fewer than four, which is why they can never be
    /// enclosed.
    pub fn orthogonal_neighbors(&self, coord: Coord) -> ArrayVec<Coord, 4> {
        const DELTAS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
        let mut neighbors = ArrayVec::new();
        for (dx, dy) in DELTAS {
            if let Some(n) = Coord::try_new(i32::from(coord.x) + dx, i32::from(coord.y) + dy) {
                neighbors.push(n);
            }
        }
        neighbors
    }

    /// True iff all four orthogonal neighbours of `coord` are owned by
    /// `player`. Always false on the border, where a full ring cannot exist.
    pub fn is_enclosed_by(&self, coord: Coord, player: Player) -> bool {
        if coord.on_border() {
            return false;
        }
        self.orthogonal_neighbors(coord)
            .iter()
            .all(|&n| self.owner(n) == Some(player))
    }

    /// True iff both cells hold beads and the owners differ
    pub fn opposed_pair(&self, a: Coord, b: Coord) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(p), Some(q)) => p != q,
            _ => false,
        }
    }

    /// Stage a cell for removal
    pub fn highlight(&mut self, coord: Coord) {
        self.highlight = Some(coord);
    }

    /// Drop the removal-staging marker
    pub fn clear_highlight(&mut self) {
        self.highlight = None;
    }

    /// The cell currently staged for removal, if any
    pub fn highlighted(&self) -> Option<Coord> {
        self.highlight
    }

    fn row_empty(&self, y: u8) -> bool {
        let start = (y as usize) * STRIDE;
        self.cells[start..start + STRIDE].iter().all(|c| c.is_none())
    }

    fn col_empty(&self, x: u8) -> bool {
        (0..BOARD_SIZE).all(|y| self.is_empty(Coord::new(x, y)))
    }

    /// Whether the whole board may move one step in `direction`: the edge
    /// being vacated into must be fully empty
    pub fn can_shift(&self, direction: ShiftDirection) -> bool {
        match direction {
            ShiftDirection::Up => self.row_empty(0),
            ShiftDirection::Down => self.row_empty(BOARD_SIZE - 1),
            ShiftDirection::Left => self.col_empty(0),
            ShiftDirection::Right => self.col_empty(BOARD_SIZE - 1),
        }
    }

    /// Move every row/column one step toward the vacated edge, preserving
    /// relative order and leaving the far edge entirely empty.
    ///
    /// Panics unless `can_shift(direction)` holds; callers must check first.
    pub fn shift(&mut self, direction: ShiftDirection) {
        assert!(
            self.can_shift(direction),
            "shift {direction:?} without an empty edge to vacate into"
        );
        match direction {
            ShiftDirection::Up => {
                // Rows 1..5 move to rows 0..4; the bottom row empties.
                self.cells.copy_within(STRIDE..CELL_COUNT, 0);
                self.clear_row(BOARD_SIZE - 1);
            }
            ShiftDirection::Down => {
                self.cells.copy_within(0..CELL_COUNT - STRIDE, STRIDE);
                self.clear_row(0);
            }
            ShiftDirection::Left => {
                for y in 0..STRIDE {
                    let start = y * STRIDE;
                    self.cells.copy_within(start + 1..start + STRIDE, start);
                    self.cells[start + STRIDE - 1] = None;
                }
            }
            ShiftDirection::Right => {
                for y in 0..STRIDE {
                    let start = y * STRIDE;
                    self.cells.copy_within(start..start + STRIDE - 1, start + 1);
                    self.cells[start] = None;
                }
            }
        }
    }

    fn clear_row(&mut self, y: u8) {
        let start = (y as usize) * STRIDE;
        for cell in &mut self.cells[start..start + STRIDE] {
            *cell = None;
        }
    }

    /// Empty every cell and drop the highlight
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.highlight = None;
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
