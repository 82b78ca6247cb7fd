use std::fmt;

use crate::error::MoveError;

pub const HEIGHT: usize = 6;
pub const WIDTH: usize = 7;

/// Number of same-marker cells in a line that wins the game.
const CONNECT: usize = 4;

/// Unit steps (row, column) along the four axes in both signs.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Color identifier written into the grid for each dropped disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker(String);

impl Marker {
    pub fn new(color: impl Into<String>) -> Self {
        Marker(color.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Single character used when drawing the board as text.
    pub fn symbol(&self) -> char {
        self.0.chars().next().unwrap_or('?')
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row-major cell storage. Row 0 is the top, row `HEIGHT - 1` the bottom.
pub type Grid = [[Option<Marker>; WIDTH]; HEIGHT];

/// Board state. The bottom `fill[c]` cells of column `c` are occupied and
/// every cell above them is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    fill: [usize; WIDTH],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: Grid::default(),
            fill: [0; WIDTH],
        }
    }

    /// Get the cell at a specific position.
    ///
    /// # Panics
    ///
    /// Panics if `row >= HEIGHT` or `column >= WIDTH`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Marker> {
        assert!(
            row < HEIGHT && column < WIDTH,
            "cell ({row}, {column}) is outside the {HEIGHT}x{WIDTH} board"
        );
        self.cells[row][column].as_ref()
    }

    /// Number of disks stacked in `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column >= WIDTH`.
    pub fn fill_count(&self, column: usize) -> usize {
        assert!(column < WIDTH, "column index {column} out of range");
        self.fill[column]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> bool {
        self.fill_count(column) == HEIGHT
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.fill.iter().all(|&count| count == HEIGHT)
    }

    /// Total number of disks on the board.
    pub fn disk_count(&self) -> usize {
        self.fill.iter().sum()
    }

    /// Drop a disk in a column, returns the row where it landed.
    pub fn drop_disk(&mut self, marker: &Marker, column: usize) -> Result<usize, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::InvalidColumn { column });
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull { column });
        }

        self.fill[column] += 1;
        let row = HEIGHT - self.fill[column];
        self.cells[row][column] = Some(marker.clone());
        tracing::trace!(%marker, column, row, "disk dropped");
        Ok(row)
    }

    /// Whether `marker` owns four consecutive cells along any axis.
    ///
    /// Every matching cell is treated as the last cell of a run and the three
    /// cells behind it are inspected, so each run is found at its far end.
    pub fn has_connected_four(&self, marker: &Marker) -> bool {
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                if self.cells[row][column].as_ref() != Some(marker) {
                    continue;
                }
                let connected = DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.run_behind(row, column, dr, dc, marker));
                if connected {
                    return true;
                }
            }
        }
        false
    }

    /// Checks the `CONNECT - 1` cells at `(row, column) - k * (dr, dc)`.
    fn run_behind(&self, row: usize, column: usize, dr: isize, dc: isize, marker: &Marker) -> bool {
        (1..CONNECT as isize).all(|k| {
            let r = row as isize - k * dr;
            let c = column as isize - k * dc;
            if r < 0 || c < 0 || r >= HEIGHT as isize || c >= WIDTH as isize {
                return false;
            }
            self.cells[r as usize][c as usize].as_ref() == Some(marker)
        })
    }

    /// Empty every cell and zero every column count.
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(None);
        }
        self.fill = [0; WIDTH];
    }

    /// Owned copy of the grid for renderers.
    pub fn snapshot(&self) -> Grid {
        self.cells.clone()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
