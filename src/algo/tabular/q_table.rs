use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    assert_interval,
    ds::QTable,
    env::{Environment, Transition},
    exploration::{Choice, GreedyFallback},
};

use super::Outcome;

/// Configuration for the [`QTableAgent`]
pub struct QTableAgentConfig {
    /// Learning rate - must be in the interval `[0,1]`
    pub alpha: f32,
    /// Discount factor - must be in the interval `[0,1]`
    pub gamma: f32,
    /// Seed for the agent's random source, or `None` to seed from entropy
    pub seed: Option<u64>,
}

impl Default for QTableAgentConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            gamma: 0.9,
            seed: None,
        }
    }
}

/// A Q-learning agent that learns its environment with a dense value table
///
/// The agent applies the one-step temporal-difference update after every step and
/// follows a [`GreedyFallback`] policy: it exploits as soon as a state's row holds
/// a positive value and explores randomly until then. All randomness flows through
/// an owned seedable source, so a seeded agent in a deterministic environment is
/// fully reproducible.
pub struct QTableAgent {
    q_table: QTable,
    policy: GreedyFallback,
    alpha: f32,
    gamma: f32,
    rng: StdRng,
    episode: u32,
}

impl QTableAgent {
    /// Initialize a new `QTableAgent` for a given environment
    ///
    /// The value table takes its shape from the environment and starts at zero.
    ///
    /// **Panics** if `alpha` or `gamma` is not in the interval `[0,1]`
    pub fn new(env: &impl Environment, config: QTableAgentConfig) -> Self {
        assert_interval!(config.alpha, 0.0, 1.0);
        assert_interval!(config.gamma, 0.0, 1.0);
        Self {
            q_table: QTable::new(env.num_states(), env.num_actions()),
            policy: GreedyFallback,
            alpha: config.alpha,
            gamma: config.gamma,
            rng: config
                .seed
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            episode: 0,
        }
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Choose an action for the current state
    fn act(&mut self, env: &impl Environment, state: usize) -> usize {
        match self.policy.choose(self.q_table.row(state)) {
            Choice::Exploit(action) => action,
            Choice::Explore => env.sample_action(&mut self.rng),
        }
    }

    /// Update the value table from a single step
    fn learn(&mut self, state: usize, action: usize, transition: &Transition) {
        let q_value = self.q_table[(state, action)];
        let max_next_q = self.q_table.row_max(transition.next_state);
        let new_q_value = transition.reward + self.gamma * max_next_q;
        self.q_table[(state, action)] = (1.0 - self.alpha) * q_value + self.alpha * new_q_value;
    }

    /// Run one episode in the given environment
    ///
    /// Resets the environment, then alternates action selection and value updates
    /// until the environment reports a terminal transition. The update is applied
    /// on every step including the terminal one, where the bootstrap term reads
    /// the terminal state's row.
    ///
    /// **Returns** [`Outcome::Success`] if any step paid a nonzero reward
    pub fn go(&mut self, env: &mut impl Environment) -> Outcome {
        let mut state = env.reset();
        let mut outcome = Outcome::Failure;
        let mut steps = 0u32;

        loop {
            let action = self.act(env, state);
            let transition = env.step(action);
            self.learn(state, action, &transition);
            state = transition.next_state;
            steps += 1;

            if transition.reward != 0.0 {
                outcome = Outcome::Success;
            }
            if transition.terminal {
                break;
            }
        }

        self.episode += 1;
        debug!("episode {} ended after {steps} steps: {outcome}", self.episode);
        outcome
    }

    /// Run `episodes` episodes and collect one [`Outcome`] per episode, in order
    pub fn train(&mut self, env: &mut impl Environment, episodes: u32) -> Vec<Outcome> {
        let outcomes: Vec<_> = (0..episodes).map(|_| self.go(env)).collect();
        let successes = outcomes.iter().filter(|o| o.is_success()).count();
        info!("trained {episodes} episodes: {successes} successes");
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{env::tests::TwoArmedBandit, gym::FrozenLake};

    /// Three states in a line, one action. The last step into the terminal sink
    /// pays reward 1.
    struct Chain {
        pos: usize,
    }

    impl Environment for Chain {
        fn num_states(&self) -> usize {
            3
        }

        fn num_actions(&self) -> usize {
            1
        }

        fn reset(&mut self) -> usize {
            self.pos = 0;
            self.pos
        }

        fn step(&mut self, _action: usize) -> Transition {
            self.pos += 1;
            Transition {
                next_state: self.pos,
                reward: if self.pos == 2 { 1.0 } else { 0.0 },
                terminal: self.pos == 2,
            }
        }
    }

    #[test]
    fn one_outcome_per_episode() {
        let mut env = TwoArmedBandit;
        let mut agent = QTableAgent::new(&env, QTableAgentConfig::default());
        let outcomes = agent.train(&mut env, 10);
        assert_eq!(outcomes.len(), 10, "Exactly one outcome per episode");
    }

    #[test]
    fn table_shape_from_env() {
        let env = FrozenLake::new();
        let agent = QTableAgent::new(&env, QTableAgentConfig::default());
        assert_eq!(agent.q_table().shape(), (16, 4), "Shape supplied by the env");
    }

    #[test]
    fn zero_alpha_never_updates() {
        let mut env = TwoArmedBandit;
        let config = QTableAgentConfig {
            alpha: 0.0,
            seed: Some(3),
            ..Default::default()
        };
        let mut agent = QTableAgent::new(&env, config);
        agent.train(&mut env, 50);
        for state in 0..2 {
            assert_eq!(
                agent.q_table().row(state),
                [0.0, 0.0],
                "Zero learning rate leaves the table untouched"
            );
        }
    }

    #[test]
    fn zero_gamma_ignores_downstream_values() {
        let mut env = Chain { pos: 0 };
        let config = QTableAgentConfig {
            alpha: 0.5,
            gamma: 0.0,
            seed: Some(3),
        };
        let mut agent = QTableAgent::new(&env, config);
        agent.train(&mut env, 20);

        // The rewarded step converges toward its immediate reward, and nothing
        // propagates back to the first step.
        assert!(
            (agent.q_table()[(1, 0)] - 1.0).abs() < 1e-4,
            "Rewarded step learns its immediate reward"
        );
        assert_eq!(
            agent.q_table()[(0, 0)],
            0.0,
            "Unrewarded step picks up no discounted value"
        );
    }

    #[test]
    fn discounted_value_propagates_back() {
        let mut env = Chain { pos: 0 };
        let config = QTableAgentConfig {
            alpha: 0.5,
            gamma: 0.9,
            seed: Some(3),
        };
        let mut agent = QTableAgent::new(&env, config);
        agent.train(&mut env, 200);

        assert!(
            (agent.q_table()[(1, 0)] - 1.0).abs() < 1e-4,
            "Rewarded step converges to its reward"
        );
        assert!(
            (agent.q_table()[(0, 0)] - 0.9).abs() < 1e-3,
            "First step converges to the discounted reward"
        );
    }

    #[test]
    fn seeded_runs_are_identical() {
        let run = || {
            let mut env = FrozenLake::new();
            let config = QTableAgentConfig {
                seed: Some(7),
                ..Default::default()
            };
            let mut agent = QTableAgent::new(&env, config);
            let outcomes = agent.train(&mut env, 200);
            (outcomes, agent)
        };

        let (outcomes_a, agent_a) = run();
        let (outcomes_b, agent_b) = run();

        assert_eq!(outcomes_a, outcomes_b, "Outcome sequences match");
        for state in 0..16 {
            assert_eq!(
                agent_a.q_table().row(state),
                agent_b.q_table().row(state),
                "Value tables match entrywise"
            );
        }
    }

    #[test]
    fn bandit_converges_to_the_paying_arm() {
        let mut env = TwoArmedBandit;
        let config = QTableAgentConfig {
            alpha: 0.5,
            gamma: 0.9,
            seed: Some(42),
        };
        let mut agent = QTableAgent::new(&env, config);
        let outcomes = agent.train(&mut env, 100);

        assert!(
            (agent.q_table()[(0, 0)] - 1.0).abs() < 1e-3,
            "The paying arm's value converges to its reward"
        );
        assert_eq!(
            agent.q_table()[(0, 1)],
            0.0,
            "The empty arm never accrues value"
        );
        assert!(
            outcomes[50..].iter().all(|o| o.is_success()),
            "Outcome tail is all Success once the paying arm is preferred"
        );
        assert!(agent.q_table().is_finite(), "Table stays finite");
    }

    #[test]
    fn frozen_lake_learns_a_route() {
        let mut env = FrozenLake::new();
        let config = QTableAgentConfig {
            seed: Some(11),
            ..Default::default()
        };
        let mut agent = QTableAgent::new(&env, config);
        let outcomes = agent.train(&mut env, 1000);

        assert!(agent.q_table().is_finite(), "Table stays finite");
        assert!(
            outcomes[900..].iter().all(|o| o.is_success()),
            "A deterministic lake is solved by the end of training"
        );
    }
}
