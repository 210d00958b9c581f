use crate::errors::{SpeciesDataError, SpeciesDataResult};
use crate::types::ElementType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// How a line's type list changes when a creature evolves.
///
/// Resolved once at data-load time so evolution never needs scattered
/// name checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionRule {
    /// Resolve the new form name from the stage table; a single-typed
    /// creature gains the sub-type registered for the new form, if any.
    Generic,
    /// The line splits into elemental branches: one is picked uniformly,
    /// its element replaces Normal, and the creature takes the branch name.
    SplitElemental(Vec<(ElementType, String)>),
    /// Unless the primary type is Normal, the whole type list is replaced
    /// by the single given type.
    ReplaceUnlessNormal(ElementType),
    /// When the primary type matches the second element, the list becomes
    /// exactly the given pair.
    DualOverride(ElementType, ElementType),
}

/// One evolution line: the display name per stage plus typing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesLine {
    pub base_name: String,
    /// Display name per stage, index 0 = base form. Branching lines only
    /// list the base form; their branch names live in the rule.
    pub stages: Vec<String>,
    /// May differ from `stages.len()` for branching lines.
    pub total_stages: u32,
    pub base_types: Vec<ElementType>,
    /// Sub-type appended when a single-typed creature reaches the named form.
    pub sub_types: Vec<(String, ElementType)>,
    pub rule: EvolutionRule,
}

impl SpeciesLine {
    /// Display name for a 1-based stage.
    pub fn name_for_stage(&self, stage: u32) -> SpeciesDataResult<&str> {
        self.stages
            .get(stage.saturating_sub(1) as usize)
            .map(String::as_str)
            .ok_or_else(|| SpeciesDataError::StageOutOfRange {
                line: self.base_name.clone(),
                stage,
            })
    }

    /// Sub-type a single-typed creature gains at the named form, if any.
    pub fn sub_type_for(&self, form_name: &str) -> Option<ElementType> {
        self.sub_types
            .iter()
            .find(|(name, _)| name == form_name)
            .map(|&(_, element)| element)
    }
}

static SPECIES_TABLE: LazyLock<HashMap<String, SpeciesLine>> = LazyLock::new(|| {
    let lines: Vec<SpeciesLine> = ron::from_str(include_str!("../data/species.ron"))
        .expect("embedded species.ron must parse");
    lines
        .into_iter()
        .map(|line| (line.base_name.clone(), line))
        .collect()
});

/// Look up the evolution line for a base-form name.
pub fn species_line(original_name: &str) -> SpeciesDataResult<&'static SpeciesLine> {
    SPECIES_TABLE
        .get(original_name)
        .ok_or_else(|| SpeciesDataError::LineNotFound(original_name.to_string()))
}

/// All lines in the table, for wild generation and discovery listings.
pub fn all_species_lines() -> impl Iterator<Item = &'static SpeciesLine> {
    SPECIES_TABLE.values()
}
