use crate::creature::Creature;
use crate::errors::EngineResult;
use crate::rng::EngineRng;
use crate::species::{species_line, EvolutionRule, SpeciesLine};
use crate::types::ElementType;

/// What an evolution changed, reported so the caller can announce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionReport {
    pub previous_form: String,
    pub new_form: String,
    pub new_types: Vec<ElementType>,
}

/// Check evolution eligibility once and transition if the check passes.
///
/// Called once per XP-gain event, not per frame: each call in the eligible
/// window re-rolls an independent 40% chance, and the stage ceiling forces
/// the transition regardless of luck.
pub fn try_evolve(
    creature: &mut Creature,
    rng: &mut EngineRng,
) -> EngineResult<Option<EvolutionReport>> {
    let line = species_line(creature.original_name())?;

    if creature.stage >= line.total_stages {
        return Ok(None);
    }

    let level = creature.level;
    let eligible = match (line.total_stages, creature.stage) {
        (3, 1) => window_or_forced(level, 10, 20, rng),
        (3, 2) => window_or_forced(level, 22, 32, rng),
        (2, 1) => window_or_forced(level, 17, 25, rng),
        _ => false,
    };

    if !eligible {
        return Ok(None);
    }

    advance_stage(creature, line, rng).map(Some)
}

/// Inside `[window_start, ceiling)` evolution is a 40% roll; at or above
/// the ceiling it is forced. Below the window nothing happens and no roll
/// is consumed.
fn window_or_forced(level: u32, window_start: u32, ceiling: u32, rng: &mut EngineRng) -> bool {
    if (window_start..ceiling).contains(&level) {
        rng.roll(0..100, "evolution luck") > 60
    } else {
        level >= ceiling
    }
}

fn advance_stage(
    creature: &mut Creature,
    line: &SpeciesLine,
    rng: &mut EngineRng,
) -> EngineResult<EvolutionReport> {
    let previous_form = creature.name.clone();
    creature.stage += 1;

    let new_form = match &line.rule {
        EvolutionRule::SplitElemental(branches) => {
            let (element, branch_name) = rng.pick(branches, "elemental branch");
            creature.types.push(*element);
            creature.types.retain(|&t| t != ElementType::Normal);
            branch_name.clone()
        }
        _ => line.name_for_stage(creature.stage)?.to_string(),
    };
    creature.name = new_form.clone();

    match &line.rule {
        EvolutionRule::Generic => {
            if creature.types.len() == 1 {
                if let Some(sub_type) = line.sub_type_for(&new_form) {
                    creature.types.push(sub_type);
                }
            }
        }
        EvolutionRule::ReplaceUnlessNormal(replacement) => {
            if creature.types[0] != ElementType::Normal {
                creature.types = vec![*replacement];
            }
        }
        EvolutionRule::DualOverride(added, retained) => {
            if creature.types[0] == *retained {
                creature.types = vec![*added, *retained];
            }
        }
        EvolutionRule::SplitElemental(_) => {}
    }

    Ok(EvolutionReport {
        previous_form,
        new_form,
        new_types: creature.types.clone(),
    })
}
