//! Seeds for grids: a size plus the cells that start out alive.

use crate::data::grid::{Coord, Grid, GridIdx};
use crate::error::{Error, Result};
use log::debug;

// Plaintext drawings of the built-in patterns, `O` alive and `.` dead.
const PRESETS: &[(&str, &[&str])] = &[
    ("glider", &[".O.", "..O", "OOO"]),
    ("block", &["OO", "OO"]),
    ("blinker", &["OOO"]),
    ("toad", &[".OOO", "OOO."]),
    ("beacon", &["OO..", "OO..", "..OO", "..OO"]),
    ("r-pentomino", &[".OO", "OO.", ".O."]),
    (
        "pulsar",
        &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    ),
    (
        "gosper-glider-gun",
        &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    ),
];

// Dead cells left around a preset on every side.
const PRESET_MARGIN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    size: (usize, usize),
    points: Vec<Coord>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, size: (usize, usize), points: Vec<Coord>) -> Pattern {
        Pattern {
            name: name.into(),
            size,
            points,
        }
    }

    /// Reads a pattern drawn one grid row per line: `O` or `*` for alive, `.` or a space for
    /// dead. Lines starting with `!` are comments. The size is the number of drawn lines by
    /// the longest of them.
    pub fn from_plaintext(name: impl Into<String>, lines: &[&str]) -> Result<Pattern> {
        let mut points = Vec::new();
        let mut rows = 0;
        let mut cols = 0;
        for (line_no, line) in lines.iter().enumerate() {
            if line.starts_with('!') {
                continue;
            }
            let mut width = 0;
            for (j, ch) in line.chars().enumerate() {
                match ch {
                    'O' | '*' => points.push((rows, j)),
                    '.' | ' ' => {}
                    _ => {
                        return Err(Error::InvalidPatternChar {
                            line: line_no + 1,
                            ch,
                        })
                    }
                }
                width = j + 1;
            }
            cols = cols.max(width);
            rows += 1;
        }
        Ok(Pattern::new(name, (rows, cols), points))
    }

    /// Looks up one of the built-in patterns by name, ignoring case.
    pub fn preset(name: &str) -> Result<Pattern> {
        let lower = name.to_lowercase();
        let (preset_name, lines) = PRESETS
            .iter()
            .find(|(n, _)| *n == lower)
            .ok_or_else(|| Error::UnknownPattern(name.to_owned()))?;
        Ok(Pattern::from_plaintext(*preset_name, lines)?.padded(PRESET_MARGIN))
    }

    /// Names of the built-in patterns.
    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(n, _)| *n)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Grows the pattern by `margin` dead cells on every side.
    pub fn padded(self, margin: usize) -> Pattern {
        let points = self
            .points
            .into_iter()
            .map(|(i, j)| (i + margin, j + margin))
            .collect();
        Pattern {
            name: self.name,
            size: (self.size.0 + 2 * margin, self.size.1 + 2 * margin),
            points,
        }
    }

    /// Builds a grid of this pattern's size and toggles each of its points.
    pub fn seed(&self) -> Result<Grid> {
        let (rows, cols) = self.size;
        let mut grid = Grid::new(rows, cols)?;
        self.stamp(&mut grid, (0, 0))?;
        Ok(grid)
    }

    /// Toggles each point, shifted by `offset`, on an existing grid. If any shifted point is off
    /// the grid nothing is toggled.
    pub fn stamp(&self, grid: &mut Grid, offset: Coord) -> Result<()> {
        let idxs = self
            .points
            .iter()
            .map(|&(i, j)| {
                grid.idx(i.saturating_add(offset.0), j.saturating_add(offset.1))
            })
            .collect::<Result<Vec<GridIdx>>>()?;
        for idx in idxs {
            if let Some(cell) = grid.get_idx_mut(&idx) {
                cell.toggle();
            }
        }
        debug!(
            "Stamped {} ({} points) at {:?}",
            self.name,
            self.points.len(),
            offset
        );
        Ok(())
    }
}
