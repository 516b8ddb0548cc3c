use super::Choice;

/// Greedy policy with a random fallback for unvisited states
///
/// If any value in the row is strictly greater than zero, exploit the action with
/// the maximum value, breaking ties toward the lowest action index. Otherwise
/// explore with a random action.
///
/// This is not epsilon-greedy: exploration happens only while a row is all zeros
/// (or otherwise non-positive), which for zero-initialized tables means only
/// before the state has ever received a positive update. The rule assumes a
/// non-negative reward convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyFallback;

impl GreedyFallback {
    /// Invoke the policy on a state's value row
    ///
    /// `values` must be non-empty.
    pub fn choose(&self, values: &[f32]) -> Choice {
        // Iterator::max_by keeps the last maximal element, so scan by hand to
        // keep the first.
        let mut best = 0;
        for (i, &value) in values.iter().enumerate() {
            if value > values[best] {
                best = i;
            }
        }

        if values[best] > 0.0 {
            Choice::Exploit(best)
        } else {
            Choice::Explore
        }
    }
}
