//! Board state: the 14x14 grid as seen by one player.
//!
//! The wire format is a text block of `BOARD_HEIGHT + 2` rows of
//! `BOARD_WIDTH + 2` characters. The outer row/column on each side is a
//! border and is ignored.
//!
//! ```text
//! ################
//! #..............#     '.'       empty
//! #....o.........#     own mark  Own
//! #...ooo........#     other     Other
//! ...
//! ################
//! ```

use std::fmt;

use crate::error::{MalformedBoardError, PlacementError};
use crate::pattern::Pattern;
use crate::search::Placement;
use crate::{Cell, Coord, BOARD_HEIGHT, BOARD_WIDTH};

/// Border character used by `render`.
const BORDER: char = '#';

const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Grid of cells, indexed `[y][x]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    /// Create an empty board.
    #[inline]
    pub fn new() -> Board {
        Board {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Parse a wire board. `own_mark` cells become `Own`, `'.'` becomes
    /// `Empty`, anything else is `Other`.
    pub fn parse(raw: &str, own_mark: char) -> Result<Board, MalformedBoardError> {
        let rows: Vec<&str> = raw.lines().collect();
        if rows.len() < BOARD_HEIGHT + 2 {
            return Err(MalformedBoardError::TooFewRows {
                expected: BOARD_HEIGHT + 2,
                found: rows.len(),
            });
        }

        let mut board = Board::new();
        for (y, row) in rows[1..=BOARD_HEIGHT].iter().enumerate() {
            let found = row.chars().count();
            if found < BOARD_WIDTH + 2 {
                return Err(MalformedBoardError::RowTooShort {
                    row: y + 1,
                    expected: BOARD_WIDTH + 2,
                    found,
                });
            }
            for (x, ch) in row.chars().skip(1).take(BOARD_WIDTH).enumerate() {
                board.cells[y][x] = match ch {
                    '.' => Cell::Empty,
                    c if c == own_mark => Cell::Own,
                    _ => Cell::Other,
                };
            }
        }
        Ok(board)
    }

    /// Render back into the wire format, drawing `Own` with `own_mark` and
    /// `Other` with `other_mark`.
    pub fn render(&self, own_mark: char, other_mark: char) -> String {
        let mut out = String::with_capacity((BOARD_WIDTH + 3) * (BOARD_HEIGHT + 2));
        let border_row: String = std::iter::repeat(BORDER).take(BOARD_WIDTH + 2).collect();

        out.push_str(&border_row);
        out.push('\n');
        for row in &self.cells {
            out.push(BORDER);
            for cell in row {
                out.push(match cell {
                    Cell::Empty => '.',
                    Cell::Own => own_mark,
                    Cell::Other => other_mark,
                });
            }
            out.push(BORDER);
            out.push('\n');
        }
        out.push_str(&border_row);
        out
    }

    /// Get the cell at `(x, y)`. Panics if off the board.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    /// Get the cell at `(x, y)`, or None if off the board.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Set the cell at `(x, y)`. Panics if off the board.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }

    /// Count cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    // ========== Neighborhoods ==========

    fn offsets(
        x: usize,
        y: usize,
        deltas: &'static [(isize, isize); 4],
    ) -> impl Iterator<Item = (usize, usize)> {
        deltas.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < BOARD_WIDTH && ny < BOARD_HEIGHT).then_some((nx, ny))
        })
    }

    /// On-board cells sharing an edge with `(x, y)`.
    pub fn orthogonal_neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        Self::offsets(x, y, &ORTHOGONAL)
    }

    /// On-board cells touching `(x, y)` only at a corner.
    pub fn diagonal_neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        Self::offsets(x, y, &DIAGONAL)
    }

    // ========== Legality ==========

    /// True if the pattern with its top-left at `(x, y)` does not fit
    /// inside the board.
    #[inline]
    pub fn is_out_of_bounds(&self, pattern: &Pattern, x: usize, y: usize) -> bool {
        x + pattern.width() > BOARD_WIDTH || y + pattern.height() > BOARD_HEIGHT
    }

    /// True if any filled cell of the pattern lands on an occupied cell.
    /// Cells that fall off the board count as occupied.
    pub fn is_overlapping(&self, pattern: &Pattern, x: usize, y: usize) -> bool {
        pattern
            .cells()
            .any(|(ox, oy)| self.get(x + ox, y + oy) != Some(Cell::Empty))
    }

    /// True if any filled cell of the pattern shares an edge with an `Own` cell.
    pub fn is_adjacent_to_own(&self, pattern: &Pattern, x: usize, y: usize) -> bool {
        pattern.cells().any(|(ox, oy)| {
            Self::orthogonal_neighbors(x + ox, y + oy).any(|(nx, ny)| self.cells[ny][nx] == Cell::Own)
        })
    }

    /// Run all placement checks (bounds, overlap, adjacency) in order.
    pub fn check(&self, pattern: &Pattern, x: usize, y: usize) -> Result<(), PlacementError> {
        if self.is_out_of_bounds(pattern, x, y) {
            Err(PlacementError::OutOfBounds)
        } else if self.is_overlapping(pattern, x, y) {
            Err(PlacementError::Overlapping)
        } else if self.is_adjacent_to_own(pattern, x, y) {
            Err(PlacementError::AdjacentToOwn)
        } else {
            Ok(())
        }
    }

    /// Mark every filled cell of the pattern as `Own`.
    /// Does NOT validate - caller must ensure the placement is legal.
    pub fn commit(&mut self, pattern: &Pattern, x: usize, y: usize) {
        for (ox, oy) in pattern.cells() {
            self.cells[y + oy][x + ox] = Cell::Own;
        }
    }

    /// Validate and commit a placement. The board is unchanged on error.
    pub fn place(&mut self, placement: &Placement) -> Result<(), PlacementError> {
        let pattern = placement.pattern();
        let (x, y) = (placement.x as usize, placement.y as usize);
        self.check(&pattern, x, y)?;
        self.commit(&pattern, x, y);
        Ok(())
    }

    /// Iterate all coordinates in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_HEIGHT)
            .flat_map(|y| (0..BOARD_WIDTH).map(move |x| Coord::new(x as u8, y as u8)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, "  ")?;
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::Own => 'O',
                    Cell::Other => 'X',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
