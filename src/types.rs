use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Elemental types carried by creatures and attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dark,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Normal => "normal",
            ElementType::Fighting => "fighting",
            ElementType::Flying => "flying",
            ElementType::Poison => "poison",
            ElementType::Ground => "ground",
            ElementType::Rock => "rock",
            ElementType::Bug => "bug",
            ElementType::Ghost => "ghost",
            ElementType::Fire => "fire",
            ElementType::Water => "water",
            ElementType::Grass => "grass",
            ElementType::Electric => "electric",
            ElementType::Psychic => "psychic",
            ElementType::Ice => "ice",
            ElementType::Dark => "dark",
        };
        write!(f, "{}", name)
    }
}

use ElementType::*;

/// Non-neutral chart entries as (attack, defend, multiplier).
/// Every pair absent from this table is neutral (1.0).
const CHART_ENTRIES: &[(ElementType, ElementType, f64)] = &[
    (Normal, Rock, 0.5),
    (Normal, Ghost, 0.0),
    (Fighting, Normal, 2.0),
    (Fighting, Rock, 2.0),
    (Fighting, Ice, 2.0),
    (Fighting, Dark, 2.0),
    (Fighting, Flying, 0.5),
    (Fighting, Poison, 0.5),
    (Fighting, Bug, 0.5),
    (Fighting, Psychic, 0.5),
    (Fighting, Ghost, 0.0),
    (Flying, Fighting, 2.0),
    (Flying, Bug, 2.0),
    (Flying, Grass, 2.0),
    (Flying, Rock, 0.5),
    (Flying, Electric, 0.5),
    (Poison, Grass, 2.0),
    (Poison, Bug, 2.0),
    (Poison, Poison, 0.5),
    (Poison, Ground, 0.5),
    (Poison, Rock, 0.5),
    (Poison, Ghost, 0.5),
    (Ground, Poison, 2.0),
    (Ground, Rock, 2.0),
    (Ground, Fire, 2.0),
    (Ground, Electric, 2.0),
    (Ground, Grass, 0.5),
    (Ground, Bug, 0.5),
    (Ground, Flying, 0.0),
    (Rock, Flying, 2.0),
    (Rock, Bug, 2.0),
    (Rock, Fire, 2.0),
    (Rock, Ice, 2.0),
    (Rock, Fighting, 0.5),
    (Rock, Ground, 0.5),
    (Bug, Grass, 2.0),
    (Bug, Psychic, 2.0),
    (Bug, Dark, 2.0),
    (Bug, Fighting, 0.5),
    (Bug, Flying, 0.5),
    (Bug, Poison, 0.5),
    (Bug, Ghost, 0.5),
    (Bug, Fire, 0.5),
    (Ghost, Ghost, 2.0),
    (Ghost, Psychic, 2.0),
    (Ghost, Normal, 0.0),
    (Ghost, Dark, 0.5),
    (Fire, Bug, 2.0),
    (Fire, Grass, 2.0),
    (Fire, Ice, 2.0),
    (Fire, Rock, 0.5),
    (Fire, Fire, 0.5),
    (Fire, Water, 0.5),
    (Water, Ground, 2.0),
    (Water, Rock, 2.0),
    (Water, Fire, 2.0),
    (Water, Water, 0.5),
    (Water, Grass, 0.5),
    (Grass, Ground, 2.0),
    (Grass, Rock, 2.0),
    (Grass, Water, 2.0),
    (Grass, Flying, 0.5),
    (Grass, Poison, 0.5),
    (Grass, Bug, 0.5),
    (Grass, Fire, 0.5),
    (Grass, Grass, 0.5),
    (Electric, Flying, 2.0),
    (Electric, Water, 2.0),
    (Electric, Electric, 0.5),
    (Electric, Grass, 0.5),
    (Electric, Ground, 0.0),
    (Psychic, Fighting, 2.0),
    (Psychic, Poison, 2.0),
    (Psychic, Psychic, 0.5),
    (Psychic, Dark, 0.0),
    (Ice, Flying, 2.0),
    (Ice, Ground, 2.0),
    (Ice, Grass, 2.0),
    (Ice, Water, 0.5),
    (Ice, Ice, 0.5),
    (Ice, Fire, 0.5),
    (Dark, Ghost, 2.0),
    (Dark, Psychic, 2.0),
    (Dark, Fighting, 0.5),
    (Dark, Dark, 0.5),
];

/// Immutable damage-multiplier table for (attacking type, defending type)
/// pairs. Built once at first use and never mutated.
#[derive(Debug)]
pub struct TypeChart {
    entries: HashMap<(ElementType, ElementType), f64>,
}

static TYPE_CHART: LazyLock<TypeChart> = LazyLock::new(TypeChart::builtin);

/// Access the process-wide type chart.
pub fn type_chart() -> &'static TypeChart {
    &TYPE_CHART
}

impl TypeChart {
    fn builtin() -> Self {
        let entries = CHART_ENTRIES
            .iter()
            .map(|&(attack, defend, mult)| ((attack, defend), mult))
            .collect();
        TypeChart { entries }
    }

    /// Multiplier for a single defending type. Pairs absent from the chart
    /// are neutral; the silent 1.0 default is deliberate policy.
    pub fn single_multiplier(&self, attack: ElementType, defend: ElementType) -> f64 {
        self.entries.get(&(attack, defend)).copied().unwrap_or(1.0)
    }

    /// Multiplier against a full defending type list. Dual-type defenders
    /// combine by multiplying the two individual lookups.
    pub fn multiplier(&self, attack: ElementType, defend_types: &[ElementType]) -> f64 {
        defend_types
            .iter()
            .map(|&defend| self.single_multiplier(attack, defend))
            .product()
    }
}

/// All element types, in chart order. Tests sweep this to cover the full
/// value domain.
pub const ALL_TYPES: [ElementType; 15] = [
    Normal, Fighting, Flying, Poison, Ground, Rock, Bug, Ghost, Fire, Water, Grass, Electric,
    Psychic, Ice, Dark,
];
