pub mod engine;
pub mod state;

pub use engine::{resolve_attack, Battle};
pub use state::{
    BattleEvent, BattleOutcome, BattlePhase, CaptureAttempt, EventBus, FleeAttempt, ItemUse,
};

#[cfg(test)]
mod tests;
