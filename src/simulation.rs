use crate::data::Grid;
use crate::error::Result;
use log::debug;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

/// Owns a grid and decides when it advances.
///
/// A driver calls [`Simulation::tick`] once per frame; the grid only moves while the
/// simulation is running. [`Simulation::step`] advances a single generation no matter what.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    run_state: RunState,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Simulation {
        Simulation {
            grid,
            run_state: RunState::default(),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pause(&mut self) {
        self.set_run_state(RunState::Paused)
    }

    pub fn resume(&mut self) {
        self.set_run_state(RunState::Running)
    }

    pub fn toggle_pause(&mut self) {
        match self.run_state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
    }

    fn set_run_state(&mut self, run_state: RunState) {
        if self.run_state != run_state {
            debug!(
                "{:?} -> {:?} at generation {}",
                self.run_state, run_state, self.generation
            );
            self.run_state = run_state;
        }
    }

    /// Advances one generation if running. Returns whether the grid advanced.
    pub fn tick(&mut self) -> bool {
        match self.run_state {
            RunState::Running => {
                self.step();
                true
            }
            RunState::Paused => false,
        }
    }

    /// Advances one generation regardless of the run state, returning how many cells changed.
    pub fn step(&mut self) -> usize {
        let changed = self.grid.advance();
        self.generation += 1;
        changed
    }

    /// Flips a cell, e.g. in response to a click.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid.toggle(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Pattern, State};
    use crate::error::Error;

    fn blinker() -> Simulation {
        Simulation::new(Pattern::preset("blinker").unwrap().seed().unwrap())
    }

    #[test]
    fn test_starts_running() {
        let sim = blinker();
        assert_eq!(sim.run_state(), RunState::Running);
        assert!(!sim.is_paused());
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_tick_when_running() {
        let mut sim = blinker();
        let start = sim.grid().alive_cells();
        assert!(sim.tick());
        assert_eq!(sim.generation(), 1);
        assert_ne!(sim.grid().alive_cells(), start);
        assert!(sim.tick());
        assert_eq!(sim.grid().alive_cells(), start);
    }

    #[test]
    fn test_tick_when_paused() {
        let mut sim = blinker();
        let start = sim.grid().alive_cells();
        sim.pause();
        for _ in 0..3 {
            assert!(!sim.tick());
        }
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().alive_cells(), start);
    }

    #[test]
    fn test_step_ignores_pause() {
        let mut sim = blinker();
        sim.pause();
        assert_eq!(sim.step(), 4);
        assert_eq!(sim.generation(), 1);
        assert!(sim.is_paused());
    }

    #[test]
    fn test_toggle_pause() {
        let mut sim = blinker();
        sim.toggle_pause();
        assert_eq!(sim.run_state(), RunState::Paused);
        sim.toggle_pause();
        assert_eq!(sim.run_state(), RunState::Running);
        sim.resume();
        assert_eq!(sim.run_state(), RunState::Running);
    }

    #[test]
    fn test_toggle_cell() {
        let mut sim = Simulation::new(Grid::new(4, 4).unwrap());
        sim.toggle_cell(3, 3).unwrap();
        assert_eq!(sim.grid().state(3, 3).unwrap(), State::Alive);
        assert!(matches!(
            sim.toggle_cell(4, 0),
            Err(Error::OutOfBounds { row: 4, col: 0, .. })
        ));
        assert_eq!(sim.grid().alive_count(), 1);
    }
}
