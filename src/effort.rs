use crate::creature::Creature;
use crate::rng::EngineRng;
use serde::{Deserialize, Serialize};

/// Hidden effort-value accumulators carried by every creature.
///
/// Battle wins feed the accumulators; every 4 whole points in a category
/// convert into +1 permanent stat, keeping the remainder. The xp category
/// is special: it feeds straight back into the creature's experience total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortTracker {
    pub hp: u32,
    pub strength: u32,
    pub defense: u32,
    pub speed: u32,
    pub xp: u64,
}

/// Permanent increases produced by one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatGains {
    pub hp_max: u32,
    pub strength: u32,
    pub defense: u32,
    pub speed: u32,
    pub xp: u64,
}

impl StatGains {
    pub fn is_zero(&self) -> bool {
        *self == StatGains::default()
    }
}

/// Scaling divisor for effort gains: tougher enemies pay out more.
pub fn effort_divisor(enemy_level: u32, actor_level: u32) -> u32 {
    if enemy_level > actor_level {
        6
    } else if enemy_level == actor_level {
        9
    } else {
        12
    }
}

impl EffortTracker {
    /// Award effort points for defeating `enemy`. Each tracked quantity
    /// draws a uniform amount in `[2r, 4r)` where `r = ceil(stat / divisor)`.
    /// Requires the enemy's stats and xp to be positive, which creature
    /// construction guarantees.
    pub fn accumulate(&mut self, enemy: &Creature, actor_level: u32, rng: &mut EngineRng) {
        let divisor = effort_divisor(enemy.level, actor_level);

        let range_of = |stat: u32| -> u32 { (stat as f64 / divisor as f64).ceil() as u32 };

        let r_hp = range_of(enemy.hp_max);
        let r_strength = range_of(enemy.strength);
        let r_defense = range_of(enemy.defense);
        let r_speed = range_of(enemy.speed);
        let r_xp = (enemy.xp() as f64 / divisor as f64).ceil() as u64;

        self.hp += rng.roll(r_hp * 2..r_hp * 4, "effort hp");
        self.strength += rng.roll(r_strength * 2..r_strength * 4, "effort strength");
        self.defense += rng.roll(r_defense * 2..r_defense * 4, "effort defense");
        self.speed += rng.roll(r_speed * 2..r_speed * 4, "effort speed");
        self.xp += rng.roll((r_xp * 2) as u32..(r_xp * 4) as u32, "effort xp") as u64;
    }

    /// Convert accumulated points above the conversion threshold into
    /// permanent stat increases, keeping each remainder. Calling this when
    /// every accumulator is at or below the threshold changes nothing.
    pub fn normalize(&mut self) -> StatGains {
        let mut gains = StatGains::default();

        if self.hp > 4 {
            gains.hp_max = self.hp / 4;
            self.hp %= 4;
        }
        if self.strength > 4 {
            gains.strength = self.strength / 4;
            self.strength %= 4;
        }
        if self.defense > 4 {
            gains.defense = self.defense / 4;
            self.defense %= 4;
        }
        if self.speed > 4 {
            gains.speed = self.speed / 4;
            self.speed %= 4;
        }
        if self.xp > 4 {
            gains.xp = self.xp / 4;
            self.xp %= 4;
        }

        gains
    }
}
