#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum State {
    Dead,
    Alive,
}

#[derive(Debug, Clone)]
pub struct Cell {
    row: usize,
    col: usize,
    state: State,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            state: State::Dead,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Wraps state
    pub fn alive(&self) -> bool {
        self.state == State::Alive
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }

    // Returns the next state given a number of alive neighbours
    // https://en.wikipedia.org/wiki/Conway%27s_Game_of_Life#Rules
    pub fn next_state(&self, alive_neighbours: usize) -> State {
        match (self.state, alive_neighbours) {
            (_, 3) => State::Alive,
            (State::Alive, 2) => State::Alive,
            _ => State::Dead,
        }
    }
}
