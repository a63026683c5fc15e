pub mod cell;
pub mod grid;
pub mod pattern;

pub use self::cell::{Cell, State};
pub use self::grid::{Coord, Grid, GridIdx};
pub use self::pattern::Pattern;
