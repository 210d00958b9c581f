use crate::creature::{Creature, CreatureState};
use crate::types::ElementType;

/// A builder for test creatures with plain defaults.
///
/// The name doubles as the base-form name, so pick one that exists in
/// the species table when the test reaches victory or evolution code.
pub struct TestCreatureBuilder {
    name: String,
    level: u32,
    hp_max: u32,
    strength: u32,
    defense: u32,
    speed: u32,
    types: Vec<ElementType>,
    state: CreatureState,
    current_hp: Option<u32>,
}

impl TestCreatureBuilder {
    pub fn new(name: &str, level: u32) -> Self {
        Self {
            name: name.to_string(),
            level,
            hp_max: 30,
            strength: 12,
            defense: 8,
            speed: 9,
            types: vec![ElementType::Normal],
            state: CreatureState::Wild,
            current_hp: None,
        }
    }

    pub fn with_stats(mut self, hp_max: u32, strength: u32, defense: u32, speed: u32) -> Self {
        self.hp_max = hp_max;
        self.strength = strength;
        self.defense = defense;
        self.speed = speed;
        self
    }

    pub fn with_types(mut self, types: Vec<ElementType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_state(mut self, state: CreatureState) -> Self {
        self.state = state;
        self
    }

    /// Current HP after building. Defaults to full.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> Creature {
        let mut creature = Creature::new(
            self.name.clone(),
            self.name,
            self.hp_max,
            self.strength,
            self.defense,
            self.speed,
            self.types,
            self.level,
            1,
        );
        creature.state = self.state;
        if let Some(hp) = self.current_hp {
            creature.set_hp(hp);
        }
        creature
    }
}
