/// Implemented RL algorithms
pub mod algo;

/// Data structures
pub mod ds;

/// Environment
pub mod env;

/// Exploration policies
pub mod exploration;

/// Training environments
pub mod gym;

/// Terminal visualization
#[cfg(feature = "viz")]
pub mod viz;

mod util;
