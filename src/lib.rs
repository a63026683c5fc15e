//! Conway's game of life on a bounded grid.
//!
//! [`data::Grid`] holds the cells and advances them a generation at a time,
//! [`data::Pattern`] seeds grids and [`simulation::Simulation`] gates advancing
//! behind a pause flag for whatever is driving the display.

pub mod data;
pub mod error;
pub mod simulation;

pub use error::{Error, Result};
