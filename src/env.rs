use rand::{Rng, RngCore};

/// The result of a single environment step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// The state of the environment after the action was applied
    pub next_state: usize,
    /// The reward received for the step
    pub reward: f32,
    /// Whether `next_state` ends the episode
    pub terminal: bool,
}

/// Represents a Markov decision process, defining the dynamics of an environment
/// in which an agent can operate.
///
/// This base trait represents the common case of a discrete-time MDP with one agent,
/// a finite state space, and a finite action space. States and actions are plain
/// indices (`0..num_states` and `0..num_actions`) so that tabular agents can store
/// values densely.
pub trait Environment {
    /// Number of discrete states, fixed for the lifetime of the environment
    fn num_states(&self) -> usize;

    /// Number of discrete actions, fixed for the lifetime of the environment
    ///
    /// Must be at least 1.
    fn num_actions(&self) -> usize;

    /// Reset the environment to an initial state
    ///
    /// The returned state must not be terminal.
    ///
    /// **Returns** the starting state
    fn reset(&mut self) -> usize;

    /// Update the environment in response to an action taken by an agent
    ///
    /// **Returns** the resulting [`Transition`]
    fn step(&mut self, action: usize) -> Transition;

    /// Sample a uniformly random action using the provided random source
    ///
    /// The random source is passed in by the caller so that runs are reproducible
    /// from a seed.
    fn sample_action(&self, rng: &mut dyn RngCore) -> usize {
        rng.gen_range(0..self.num_actions())
    }
}
