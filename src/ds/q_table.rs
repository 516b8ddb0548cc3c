use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A dense table of action value estimates, indexed by `(state, action)`
///
/// The shape is fixed at construction and every entry starts at zero. Entries are
/// only ever written through the indexing operators, so the table stays finite as
/// long as the written values are.
pub struct QTable {
    values: Vec<f32>,
    states: usize,
    actions: usize,
}

impl QTable {
    /// Construct a zero-initialized table with the given shape
    ///
    /// **Panics** if either dimension is zero
    pub fn new(states: usize, actions: usize) -> Self {
        assert!(states > 0 && actions > 0, "Table shape must be nonzero");
        Self {
            values: vec![0.0; states * actions],
            states,
            actions,
        }
    }

    /// The table shape as `(num_states, num_actions)`
    pub fn shape(&self) -> (usize, usize) {
        (self.states, self.actions)
    }

    /// The value row for a given state, one entry per action
    pub fn row(&self, state: usize) -> &[f32] {
        let start = state * self.actions;
        &self.values[start..start + self.actions]
    }

    /// The maximum value in a state's row
    pub fn row_max(&self, state: usize) -> f32 {
        self.row(state)
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Whether every entry is a finite number
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl Index<(usize, usize)> for QTable {
    type Output = f32;

    fn index(&self, (state, action): (usize, usize)) -> &f32 {
        &self.values[state * self.actions + action]
    }
}

impl IndexMut<(usize, usize)> for QTable {
    fn index_mut(&mut self, (state, action): (usize, usize)) -> &mut f32 {
        &mut self.values[state * self.actions + action]
    }
}

impl fmt::Display for QTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in 0..self.states {
            write!(f, "[")?;
            for (i, value) in self.row(state).iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:8.5}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
