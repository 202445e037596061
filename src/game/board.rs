use crate::error::MoveError;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Smallest dimension on which four in a row is possible.
pub const MIN_DIMENSION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A cell coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the standard dimensions
    pub fn new() -> Self {
        Self::with_size(COLS, ROWS)
    }

    /// Create an empty board of `width` columns by `height` rows.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is below [`MIN_DIMENSION`].
    pub fn with_size(width: usize, height: usize) -> Self {
        assert!(
            width >= MIN_DIMENSION && height >= MIN_DIMENSION,
            "board must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {width}x{height}"
        );
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Cell lookup that tolerates off-board coordinates
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.get(row, col))
    }

    /// Bottommost empty row in `col`, or `None` when the column is full.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside the board.
    pub fn find_landing_row(&self, col: usize) -> Option<usize> {
        assert!(col < self.width, "column {col} out of range for width {}", self.width);
        (0..self.height).rev().find(|&row| self.get(row, col).is_empty())
    }

    /// Write `player` into an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied; pieces never move once placed.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        let idx = self.index(row, col);
        assert!(
            self.cells[idx].is_empty(),
            "cell ({row}, {col}) is already occupied"
        );
        self.cells[idx] = player.to_cell();
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.width || self.find_landing_row(col).is_none()
    }

    /// Drop a piece in a column, returns where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Position, MoveError> {
        if col >= self.width {
            return Err(MoveError::ColumnOutOfRange {
                column: col,
                width: self.width,
            });
        }

        let row = self
            .find_landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.place(row, col, player);
        Ok(Position::new(row, col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "position ({row}, {col}) outside {}x{} board",
            self.width,
            self.height
        );
        row * self.width + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
