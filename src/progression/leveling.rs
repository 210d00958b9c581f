use crate::creature::Creature;
use crate::rng::EngineRng;

/// Consume the cubic level curve and return how many levels were gained.
///
/// The loop walks a working copy of the creature's xp: each pass requires
/// `level^3` xp at the level it is leaving. Stored xp is never reduced.
/// When at least one level is gained, the whole batch is applied as a
/// single stat boost, rolled independently per stat.
pub fn level_up(creature: &mut Creature, rng: &mut EngineRng) -> u32 {
    let mut level = creature.level as u64;
    let mut xp = creature.xp();
    let mut gained: u32 = 0;

    while xp >= level * level * level {
        xp -= level * level * level;
        level += 1;
        gained += 1;
    }

    if gained > 0 {
        apply_level_boost(creature, gained, rng);
    }

    gained
}

/// Each stat grows by a uniform amount in `[5n, 15n)` for `n` levels.
fn apply_level_boost(creature: &mut Creature, levels: u32, rng: &mut EngineRng) {
    creature.level += levels;
    creature.strength += rng.roll(levels * 5..levels * 15, "level boost strength");
    creature.defense += rng.roll(levels * 5..levels * 15, "level boost defense");
    creature.speed += rng.roll(levels * 5..levels * 15, "level boost speed");
    creature.hp_max += rng.roll(levels * 5..levels * 15, "level boost hp");
}
