// grid.rs - Fixed-size grid for Conway's Game of Life

use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::config::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, Layout};
use crate::error::GridError;

/// Offsets of the Moore neighborhood, as `(dx, dy)`.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A bounded W×H grid of cells. Cells outside the grid are always dead, so the
/// universe does not wrap around at the edges.
///
/// The next generation is written into `scratch` and then swapped with
/// `cells`, so a step never reads a cell it has already overwritten.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: u32,
    cells: Vec<bool>,    // Current generation, row-major
    scratch: Vec<bool>,  // Next generation, reused across steps
}

impl Grid {
    /// Create an all-dead grid with the default cell size.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_cell_size(width, height, CELL_SIZE)
    }

    pub fn with_cell_size(width: usize, height: usize, cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");

        Self {
            width,
            height,
            cell_size,
            cells: vec![false; width * height],
            scratch: vec![false; width * height],
        }
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self::with_cell_size(layout.grid_width(), layout.grid_height(), layout.cell_size)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Cells outside the grid read as dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    pub fn set_alive(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let i = self.index(x, y);
        self.cells[i] = true;
        Ok(())
    }

    /// Map a pixel position to the cell that covers it.
    pub fn cell_at_pixel(&self, px: i32, py: i32) -> Option<(usize, usize)> {
        let px = usize::try_from(px).ok()?;
        let py = usize::try_from(py).ok()?;
        let size = self.cell_size as usize;
        let (x, y) = (px / size, py / size);

        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Set the cell under a pixel alive. Setting a live cell leaves it alive.
    ///
    /// Pixels outside the grid are ignored; returns whether a cell was hit.
    pub fn toggle_cell_alive(&mut self, px: i32, py: i32) -> bool {
        let Some((x, y)) = self.cell_at_pixel(px, py) else {
            log::trace!("ignoring pointer at ({px}, {py}) outside the grid");
            return false;
        };

        let i = self.index(x, y);
        self.cells[i] = true;
        true
    }

    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for (dx, dy) in NEIGHBORS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };

            if self.is_alive(nx, ny) {
                count += 1;
            }
        }

        count
    }

    /// Advance one generation (B3/S23).
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = self.index(x, y);
                let next = match (self.cells[i], self.live_neighbors(x, y)) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };
                self.scratch[i] = next;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

/// One line per row, `o` for a live cell and `.` for a dead one.
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(if self.is_alive(x, y) { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<bool>> = Vec::new();

        for (n, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row = line
                .chars()
                .map(|ch| match ch {
                    'o' | 'O' => Ok(true),
                    '.' => Ok(false),
                    _ => Err(GridError::UnexpectedChar { ch, line: n + 1 }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(GridError::RaggedRows {
                        line: n + 1,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }

            rows.push(row);
        }

        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };

        let mut grid = Grid::new(first.len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                if alive {
                    grid.set_alive(x, y)?;
                }
            }
        }

        Ok(grid)
    }
}
