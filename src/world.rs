use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::creature::{Creature, CreatureState};
use crate::errors::EngineResult;
use crate::generate::spawn_wild;
use crate::rng::EngineRng;

/// Source of wild creatures for encounters.
pub trait EncounterSupply {
    /// Remove and return a random wild creature, if any remain.
    fn take_random_wild(&mut self, rng: &mut EngineRng) -> EngineResult<Option<Creature>>;

    /// Put a creature back, after a failed capture or a fled encounter.
    fn return_to_wild(&mut self, creature: Creature);
}

/// Destination for captured creatures.
pub trait CreatureStore {
    fn save_creature(&mut self, owner: &str, creature: &Creature) -> EngineResult<()>;
}

/// In-memory wild population that tops itself up as it drains.
///
/// Whenever the pool is about to hand out a creature with four or fewer
/// left, it first restocks with freshly generated wilds so the world
/// never runs dry.
pub struct WildPool {
    creatures: Vec<Creature>,
}

const REPLENISH_AT: usize = 4;
const REPLENISH_COUNT: usize = 8;

impl WildPool {
    pub fn new(creatures: Vec<Creature>) -> Self {
        WildPool { creatures }
    }

    /// Start with one freshly generated wild per species line.
    pub fn populated(rng: &mut EngineRng) -> EngineResult<Self> {
        Ok(WildPool {
            creatures: crate::generate::spawn_batch(rng)?,
        })
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    fn replenish(&mut self, rng: &mut EngineRng) -> EngineResult<()> {
        while self.creatures.len() < REPLENISH_COUNT {
            self.creatures.push(spawn_wild(rng)?);
        }
        Ok(())
    }
}

impl EncounterSupply for WildPool {
    fn take_random_wild(&mut self, rng: &mut EngineRng) -> EngineResult<Option<Creature>> {
        if self.creatures.len() <= REPLENISH_AT {
            self.replenish(rng)?;
        }
        if self.creatures.is_empty() {
            return Ok(None);
        }
        let index = rng.roll(0..self.creatures.len() as u32, "encounter pick") as usize;
        Ok(Some(self.creatures.swap_remove(index)))
    }

    fn return_to_wild(&mut self, mut creature: Creature) {
        // Whatever happened in the encounter, a returned creature roams
        // free again.
        creature.state = CreatureState::Wild;
        self.creatures.push(creature);
    }
}

/// Keeps captures in memory, grouped by owner.
#[derive(Debug, Default)]
pub struct MemoryStore {
    captures: HashMap<String, Vec<Creature>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn captures_of(&self, owner: &str) -> &[Creature] {
        self.captures.get(owner).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl CreatureStore for MemoryStore {
    fn save_creature(&mut self, owner: &str, creature: &Creature) -> EngineResult<()> {
        self.captures
            .entry(owner.to_string())
            .or_default()
            .push(creature.clone());
        Ok(())
    }
}

/// Persists captures as one pretty-printed JSON file per owner.
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            directory: directory.into(),
        }
    }

    fn owner_path(&self, owner: &str) -> PathBuf {
        self.directory.join(format!("{}.json", owner))
    }

    pub fn load_captures(&self, owner: &str) -> EngineResult<Vec<Creature>> {
        let path = self.owner_path(owner);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl CreatureStore for JsonFileStore {
    fn save_creature(&mut self, owner: &str, creature: &Creature) -> EngineResult<()> {
        let mut captures = self.load_captures(owner)?;
        captures.push(creature.clone());
        fs::create_dir_all(&self.directory)?;
        let contents = serde_json::to_string_pretty(&captures)?;
        fs::write(self.owner_path(owner), contents)?;
        Ok(())
    }
}
