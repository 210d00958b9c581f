use crate::effort::{EffortTracker, StatGains};
use crate::errors::{EfficiencyError, EngineResult};
use crate::progression::evolution::{try_evolve, EvolutionReport};
use crate::progression::leveling::level_up;
use crate::rng::EngineRng;
use crate::types::{type_chart, ElementType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a creature roams free or belongs to a trainer. Fleeing is only
/// possible against a Wild opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureState {
    Wild,
    Domesticated,
}

/// Effectiveness tag for an attack's type multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Efficiency {
    SuperEffective,
    VeryEffective,
    Effective,
    NotVeryEffective,
    NoEffect,
}

impl Efficiency {
    /// Map a chart multiplier to its tag. The chart's value domain makes
    /// every other multiplier unreachable; seeing one means corrupt data.
    pub fn from_multiplier(multiplier: f64) -> Result<Efficiency, EfficiencyError> {
        match multiplier {
            m if m == 4.0 => Ok(Efficiency::SuperEffective),
            m if m == 2.0 => Ok(Efficiency::VeryEffective),
            m if m == 1.0 => Ok(Efficiency::Effective),
            m if m == 0.5 || m == 0.25 => Ok(Efficiency::NotVeryEffective),
            m if m == 0.0 => Ok(Efficiency::NoEffect),
            other => Err(EfficiencyError::UnknownMultiplier(other)),
        }
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Efficiency::SuperEffective => "Super effective attack",
            Efficiency::VeryEffective => "Very effective attack",
            Efficiency::Effective => "Effective attack",
            Efficiency::NotVeryEffective => "Not so effective attack",
            Efficiency::NoEffect => "Impossible to attack",
        };
        write!(f, "{}", text)
    }
}

/// Everything a victory changed on the winning creature, reported so the
/// battle layer can emit the matching events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VictoryGains {
    pub xp_gained: u64,
    pub effort: StatGains,
    pub levels_gained: u32,
    pub evolution: Option<EvolutionReport>,
}

/// The aggregate creature record: identity, live stats, typing,
/// progression, and the owned effort tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Current display name; changes on evolution.
    pub name: String,
    /// Base-form name, the key into the species line table. Never changes.
    original_name: String,
    pub pet_name: String,
    hp: u32,
    pub hp_max: u32,
    pub strength: u32,
    pub defense: u32,
    pub speed: u32,
    /// 1 or 2 elemental types; never empty.
    pub types: Vec<ElementType>,
    pub level: u32,
    /// Cumulative experience; only ever grows.
    xp: u64,
    /// 1-based position in the evolution line.
    pub stage: u32,
    pub state: CreatureState,
    pub effort: EffortTracker,
}

impl Creature {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        original_name: impl Into<String>,
        hp_max: u32,
        strength: u32,
        defense: u32,
        speed: u32,
        types: Vec<ElementType>,
        level: u32,
        stage: u32,
    ) -> Self {
        Creature {
            name: name.into(),
            original_name: original_name.into(),
            pet_name: "Jean-Luc".to_string(),
            hp: hp_max,
            hp_max,
            strength,
            defense,
            speed,
            types,
            level,
            xp: 1,
            stage,
            state: CreatureState::Wild,
            effort: EffortTracker::default(),
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Set current HP directly, clamped to the maximum.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.hp_max);
    }

    /// Seed the cumulative xp of a freshly generated creature.
    pub(crate) fn seed_xp(&mut self, xp: u64) {
        self.xp = xp;
    }

    pub fn gain_xp(&mut self, amount: u64) {
        self.xp += amount;
    }

    /// Restore HP without exceeding the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.hp_max);
    }

    /// Subtract damage from current HP, stopping at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Damage multiplier of an attack of `attack_type` against `enemy`.
    pub fn attack_multiplier(&self, attack_type: ElementType, enemy: &Creature) -> f64 {
        type_chart().multiplier(attack_type, &enemy.types)
    }

    /// Multiplier plus its descriptive tag for UI text.
    pub fn attack_efficiency(
        &self,
        attack_type: ElementType,
        enemy: &Creature,
    ) -> EngineResult<(f64, Efficiency)> {
        let multiplier = self.attack_multiplier(attack_type, enemy);
        let efficiency = Efficiency::from_multiplier(multiplier)?;
        Ok((multiplier, efficiency))
    }

    /// Experience awarded for defeating `enemy`. Trainer-owned enemies of
    /// a higher level pay out slightly more than wild ones.
    pub fn xp_gained(&self, enemy: &Creature) -> u64 {
        let divisor = if enemy.level > self.level {
            match enemy.state {
                CreatureState::Wild => 6,
                CreatureState::Domesticated => 5,
            }
        } else if enemy.level < self.level {
            9
        } else {
            7
        };
        100 * enemy.level as u64 / divisor
    }

    /// Apply everything a victory over `enemy` grants: experience, effort
    /// values, any level-ups, and one evolution check — in that order.
    pub fn apply_victory_xp(
        &mut self,
        enemy: &Creature,
        rng: &mut EngineRng,
    ) -> EngineResult<VictoryGains> {
        let xp_gained = self.xp_gained(enemy);
        self.xp += xp_gained;

        self.effort.accumulate(enemy, self.level, rng);
        let effort = self.effort.normalize();
        self.hp_max += effort.hp_max;
        self.strength += effort.strength;
        self.defense += effort.defense;
        self.speed += effort.speed;
        self.xp += effort.xp;

        let levels_gained = level_up(self, rng);
        let evolution = try_evolve(self, rng)?;

        Ok(VictoryGains {
            xp_gained,
            effort,
            levels_gained,
            evolution,
        })
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Creature : {}", self.name)?;
        writeln!(f, "Level : {}", self.level)?;
        writeln!(f, "XP : {}", self.xp)?;
        writeln!(f, "HP : {}/{}", self.hp, self.hp_max)?;
        writeln!(f, "Strength : {}", self.strength)?;
        writeln!(f, "Defense : {}", self.defense)?;
        writeln!(f, "Speed : {}", self.speed)?;
        let type_names: Vec<String> = self.types.iter().map(|t| t.to_string()).collect();
        writeln!(f, "Type(s) : {}", type_names.join(" / "))
    }
}
