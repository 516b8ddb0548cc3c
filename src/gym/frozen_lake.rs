use std::fmt;

use crate::env::{Environment, Transition};

const SIDE: usize = 4;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Square {
    Start,
    Frozen,
    Hole,
    Goal,
}

impl Square {
    fn is_terminal(self) -> bool {
        matches!(self, Self::Hole | Self::Goal)
    }

    fn symbol(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Frozen => 'F',
            Self::Hole => 'H',
            Self::Goal => 'G',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

impl Action {
    fn from_index(i: usize) -> Self {
        match i {
            0 => Self::Left,
            1 => Self::Down,
            2 => Self::Right,
            3 => Self::Up,
            _ => panic!("Invalid action index: {i}"),
        }
    }
}

/// The 4x4 non-slippery frozen lake from Python [gymnasium](https://gymnasium.farama.org/)
///
/// The agent starts in the top-left corner and navigates toward the goal in the
/// bottom-right corner. Falling into a hole ends the episode with no reward;
/// reaching the goal ends it with reward 1. Moving into the edge of the lake
/// leaves the position unchanged. Transitions are fully deterministic.
///
/// Intended for use with a [`QTableAgent`](crate::algo::tabular::QTableAgent).
pub struct FrozenLake {
    map: [Square; SIDE * SIDE],
    pos: usize,
}

impl FrozenLake {
    pub fn new() -> Self {
        use Square::{Frozen as F, Goal, Hole as H, Start};
        let map = [
            Start, F, F, F, //
            F, H, F, H, //
            F, F, F, H, //
            H, F, F, Goal,
        ];
        Self { map, pos: 0 }
    }

    /// The position after applying an action, with edge moves clamped in place
    fn target(&self, action: Action) -> usize {
        match action {
            Action::Left if self.pos % SIDE != 0 => self.pos - 1,
            Action::Down if self.pos < SIDE * (SIDE - 1) => self.pos + SIDE,
            Action::Right if self.pos % SIDE != SIDE - 1 => self.pos + 1,
            Action::Up if self.pos >= SIDE => self.pos - SIDE,
            _ => self.pos,
        }
    }
}

impl Default for FrozenLake {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for FrozenLake {
    fn num_states(&self) -> usize {
        self.map.len()
    }

    fn num_actions(&self) -> usize {
        4
    }

    fn reset(&mut self) -> usize {
        self.pos = 0;
        self.pos
    }

    fn step(&mut self, action: usize) -> Transition {
        self.pos = self.target(Action::from_index(action));
        let square = self.map[self.pos];
        Transition {
            next_state: self.pos,
            reward: if square == Square::Goal { 1.0 } else { 0.0 },
            terminal: square.is_terminal(),
        }
    }
}

impl fmt::Display for FrozenLake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                let i = row * SIDE + col;
                if i == self.pos {
                    write!(f, "[{}]", self.map[i].symbol())?;
                } else {
                    write!(f, " {} ", self.map[i].symbol())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
