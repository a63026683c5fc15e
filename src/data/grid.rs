use crate::data::cell::{Cell, State};
use crate::error::{Error, Result};
use log::{debug, trace};
use rand::Rng;
use std::fmt;

/// A `(row, column)` pair, both from zero.
pub type Coord = (usize, usize);

/// Position of a cell in the flat, row-major cell storage of a [`Grid`].
#[derive(PartialEq, Eq, Debug, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct GridIdx(pub usize);

#[derive(Debug)]
pub struct Grid {
    /* Addressed by from-zero (i, j) notation, where i is row number, j is column number
     * such that given the following shows coordinates for cells in a 3 x 3 grid:
     *
     * [ (0,0) (0,1) (0,2) ]
     * [ (1,0) (1,1) (1,2) ]
     * [ (2,0) (2,1) (2,2) ]
     *
     * stored flat, (i, j) living at i * cols + j.
     */
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    neighbours: Vec<Vec<GridIdx>>, // Cache of where the neighbours are for each cell
}

impl Grid {
    /// Creates a grid of `rows` x `cols` dead cells.
    pub fn new(rows: usize, cols: usize) -> Result<Grid> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        let cells = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| Cell::new(i, j)))
            .collect();
        let neighbours = neighbour_idxs(rows, cols);
        debug!("Created {}x{} grid", rows, cols);
        Ok(Grid {
            cells,
            rows,
            cols,
            neighbours,
        })
    }

    /// Creates a grid where each cell is independently alive with probability `density`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Grid> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        let mut grid = Grid::new(rows, cols)?;
        for cell in grid.cells.iter_mut() {
            if rng.gen_bool(density) {
                cell.toggle();
            }
        }
        debug!(
            "Seeded {} live cells at density {}",
            grid.alive_count(),
            density
        );
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat index of `(row, col)`, or `OutOfBounds` if it is not on the grid.
    pub fn idx(&self, row: usize, col: usize) -> Result<GridIdx> {
        if row < self.rows && col < self.cols {
            Ok(GridIdx(row * self.cols + col))
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get_idx(&self, idx: &GridIdx) -> Option<&Cell> {
        self.cells.get(idx.0)
    }

    pub fn get_idx_mut(&mut self, idx: &GridIdx) -> Option<&mut Cell> {
        self.cells.get_mut(idx.0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell> {
        let GridIdx(idx) = self.idx(row, col)?;
        Ok(&self.cells[idx])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell> {
        let GridIdx(idx) = self.idx(row, col)?;
        Ok(&mut self.cells[idx])
    }

    pub fn state(&self, row: usize, col: usize) -> Result<State> {
        self.cell(row, col).map(Cell::state)
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        self.cell_mut(row, col).map(Cell::toggle)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive()).count()
    }

    /// Coordinates of every live cell, in row-major order.
    pub fn alive_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|c| c.alive())
            .map(|c| (c.row(), c.col()))
            .collect()
    }

    /// Coordinates of the Moore neighbours of `(row, col)` that fall within the inclusive
    /// `row_limits` and `col_limits`. Positions off the edge are dropped, never wrapped.
    ///
    /// Neighbours come out in row-major order of their offsets: (-1,-1), (-1,0), (-1,1),
    /// (0,-1), (0,1), (1,-1), (1,0), (1,1).
    pub fn neighbours(
        row: usize,
        col: usize,
        row_limits: (usize, usize),
        col_limits: (usize, usize),
    ) -> Vec<Coord> {
        let mut v = Vec::with_capacity(8);
        for di in -1..=1 {
            for dj in -1..=1 {
                if di == 0 && dj == 0 {
                    continue;
                }
                let (i, j) = match (row.checked_add_signed(di), col.checked_add_signed(dj)) {
                    (Some(i), Some(j)) => (i, j),
                    _ => continue,
                };
                if row_limits.0 <= i
                    && i <= row_limits.1
                    && col_limits.0 <= j
                    && j <= col_limits.1
                {
                    v.push((i, j));
                }
            }
        }
        v
    }

    /// Advances the grid by one generation, returning how many cells changed.
    ///
    /// Every neighbour count is taken from the generation being replaced; the changes are
    /// only applied once all of them are known.
    pub fn advance(&mut self) -> usize {
        let changes: Vec<GridIdx> = {
            let cells = &self.cells;
            self.neighbours
                .iter()
                .zip(cells.iter())
                .enumerate()
                .filter_map(|(idx, (neighbours, cell))| {
                    let alives = neighbours
                        .iter()
                        .filter(|&&GridIdx(n)| cells[n].alive())
                        .count();
                    if cell.next_state(alives) != cell.state() {
                        Some(GridIdx(idx))
                    } else {
                        None
                    }
                })
                .collect()
        };
        for &GridIdx(idx) in &changes {
            self.cells[idx].toggle();
        }
        trace!("Advanced generation, {} cells changed", changes.len());
        changes.len()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                let c = if cell.alive() { '\u{25cf}' } else { ' ' };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn neighbour_idxs(rows: usize, cols: usize) -> Vec<Vec<GridIdx>> {
    (0..rows)
        .flat_map(|i| (0..cols).map(move |j| (i, j)))
        .map(|(i, j)| {
            Grid::neighbours(i, j, (0, rows - 1), (0, cols - 1))
                .into_iter()
                .map(|(ni, nj)| GridIdx(ni * cols + nj))
                .collect()
        })
        .collect()
}
