/// Exploration policy result
pub enum Choice {
    /// Take a random action
    Explore,
    /// Take the chosen action
    Exploit(usize),
}

mod greedy_fallback;

pub use greedy_fallback::GreedyFallback;
