pub mod evolution;
pub mod leveling;

pub use evolution::{try_evolve, EvolutionReport};
pub use leveling::level_up;
