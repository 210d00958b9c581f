//! Creature Combat & Progression Engine
//!
//! A synchronous, deterministic core for a creature-collecting RPG:
//! elemental type matchups, turn-based battles with capture and flee,
//! effort-value growth, cubic experience leveling, and staged evolution
//! with per-line special rules. Presentation, pacing, and persistence
//! formats live with the caller; every random draw goes through an
//! injectable [`EngineRng`] so outcomes can be scripted in tests.

pub mod bag;
pub mod battle;
pub mod creature;
pub mod effort;
pub mod errors;
pub mod generate;
pub mod progression;
pub mod rng;
pub mod species;
pub mod types;
pub mod world;

// Core battle engine types.
pub use battle::engine::{resolve_attack, Battle};
pub use battle::state::{
    BattleEvent, BattleOutcome, BattlePhase, CaptureAttempt, EventBus, FleeAttempt, ItemUse,
};

// Core runtime types.
pub use bag::Bag;
pub use creature::{Creature, CreatureState, Efficiency, VictoryGains};
pub use effort::{EffortTracker, StatGains};
pub use progression::{level_up, try_evolve, EvolutionReport};
pub use rng::EngineRng;

// Static data access.
pub use species::{all_species_lines, species_line, EvolutionRule, SpeciesLine};
pub use types::{type_chart, ElementType, TypeChart};

// Generation and world collaborators.
pub use generate::{level_for_stage, spawn_batch, spawn_wild, StarterOffering};
pub use world::{CreatureStore, EncounterSupply, JsonFileStore, MemoryStore, WildPool};

// Crate-specific error and result types.
pub use errors::{
    BattleStateError, EfficiencyError, EngineError, EngineResult, SpeciesDataError,
    SpeciesDataResult,
};
