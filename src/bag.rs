use serde::{Deserialize, Serialize};

/// The player's consumable inventory.
///
/// Counters only; the effects of spending an item live in the battle
/// engine, which decrements through the setters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    potions: u32,
    pokeballs: u32,
}

impl Default for Bag {
    fn default() -> Self {
        Bag {
            potions: 10,
            pokeballs: 15,
        }
    }
}

impl Bag {
    pub fn new(potions: u32, pokeballs: u32) -> Self {
        Bag { potions, pokeballs }
    }

    pub fn potions(&self) -> u32 {
        self.potions
    }

    pub fn pokeballs(&self) -> u32 {
        self.pokeballs
    }

    pub fn set_potions(&mut self, count: u32) {
        self.potions = count;
    }

    pub fn set_pokeballs(&mut self, count: u32) {
        self.pokeballs = count;
    }

    /// Spend one potion. Returns false when none are left.
    pub fn spend_potion(&mut self) -> bool {
        if self.potions == 0 {
            return false;
        }
        self.potions -= 1;
        true
    }

    /// Spend one pokeball. Returns false when none are left.
    pub fn spend_pokeball(&mut self) -> bool {
        if self.pokeballs == 0 {
            return false;
        }
        self.pokeballs -= 1;
        true
    }
}
