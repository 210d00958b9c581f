use crate::creature::Creature;
use crate::errors::EngineResult;
use crate::rng::EngineRng;
use crate::species::{all_species_lines, species_line, SpeciesLine};

/// Pet names handed out to freshly generated creatures.
const PET_NAMES: &[&str] = &[
    "Jean-Luc",
    "Jean-Paul",
    "Jean-Pierre",
    "Jean-Claude",
    "Jean-Michel",
    "Jean-Jacques",
    "Jean-Baptiste",
    "Jean-Marie",
];

/// Roll a level appropriate for a creature found at the given stage.
pub fn level_for_stage(stage: u32, rng: &mut EngineRng) -> u32 {
    match stage {
        1 => rng.roll(1..10, "stage 1 level"),
        2 => rng.roll(12..20, "stage 2 level"),
        3 => rng.roll(25..36, "stage 3 level"),
        _ => rng.roll(40..50, "stage 4+ level"),
    }
}

/// Generate a wild stage-1 creature from a random species line.
pub fn spawn_wild(rng: &mut EngineRng) -> EngineResult<Creature> {
    let lines: Vec<&'static SpeciesLine> = all_species_lines().collect();
    let line = rng.pick(&lines, "wild species");
    let level = level_for_stage(1, rng);
    build_creature(line, level, rng)
}

/// Generate one stage-1 creature per species line, each at a freshly
/// rolled stage-1 level.
pub fn spawn_batch(rng: &mut EngineRng) -> EngineResult<Vec<Creature>> {
    all_species_lines()
        .map(|line| {
            let level = level_for_stage(1, rng);
            build_creature(line, level, rng)
        })
        .collect()
}

fn build_creature(
    line: &SpeciesLine,
    level: u32,
    rng: &mut EngineRng,
) -> EngineResult<Creature> {
    let name = line.name_for_stage(1)?.to_string();
    let hp_max = rng.roll(10..31, "wild hp") + 3 * level;
    let strength = rng.roll(2..31, "wild strength") + 3 * level;
    let defense = rng.roll(2..21, "wild defense") + 3 * level;
    let speed = rng.roll(2..31, "wild speed") + 3 * level;

    let mut creature = Creature::new(
        name,
        line.base_name.clone(),
        hp_max,
        strength,
        defense,
        speed,
        line.base_types.clone(),
        level,
        1,
    );

    // Cumulative xp consistent with the level: somewhere past the
    // threshold that was just crossed, short of the next one.
    let lo = level * level * level;
    let hi = (level + 1) * (level + 1) * (level + 1);
    creature.seed_xp(rng.roll(lo..hi, "seeded xp") as u64);
    creature.pet_name = rng.pick(PET_NAMES, "pet name").to_string();

    Ok(creature)
}

/// Cycles through the three classic starters, one per call.
///
/// Owned by the caller rather than hidden in module state, so two
/// independent worlds each get their own rotation.
#[derive(Debug, Default)]
pub struct StarterOffering {
    next: usize,
}

const STARTERS: [&str; 3] = ["Bulbasaur", "Charmander", "Squirtle"];
const STARTER_LEVEL: u32 = 5;

impl StarterOffering {
    pub fn new() -> Self {
        StarterOffering::default()
    }

    /// Species name the next call to [`offer`](Self::offer) will produce.
    pub fn upcoming(&self) -> &'static str {
        STARTERS[self.next]
    }

    /// Generate the next starter in the rotation at the fixed starter
    /// level and advance the cycle.
    pub fn offer(&mut self, rng: &mut EngineRng) -> EngineResult<Creature> {
        let line = species_line(STARTERS[self.next])?;
        self.next = (self.next + 1) % STARTERS.len();
        build_creature(line, STARTER_LEVEL, rng)
    }
}
