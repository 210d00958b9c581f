use serde::{Deserialize, Serialize};

use crate::creature::Efficiency;
use crate::types::ElementType;

/// Where the battle state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    TurnOrderPending,
    PlayerTurn,
    OpponentTurn,
    Resolved(BattleOutcome),
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    PlayerWon,
    OpponentWon,
    Escaped,
    Captured,
}

/// Result of a flee attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleeAttempt {
    /// Fleeing a trainer battle is never allowed.
    Blocked,
    /// The roll failed and the opponent got a free attack.
    Failed,
    Escaped,
}

/// Result of throwing a pokeball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureAttempt {
    Captured,
    /// The ball was spent but the creature broke free.
    Broke,
    /// No balls left; nothing happened, back to the menu.
    Back,
}

/// Result of using a consumable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemUse {
    Used,
    /// None left; nothing happened, back to the menu.
    Back,
}

/// Everything noteworthy that happens during battle resolution, captured
/// for the caller to render.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    AttackMissed {
        attacker: String,
    },
    AttackEffectiveness {
        efficiency: Efficiency,
    },
    CriticalHit {
        attacker: String,
    },
    DamageDealt {
        target: String,
        damage: u32,
        remaining_hp: u32,
    },
    Fainted {
        name: String,
    },
    XpGained {
        name: String,
        amount: u64,
    },
    LeveledUp {
        name: String,
        levels: u32,
        new_level: u32,
    },
    Evolved {
        previous_form: String,
        new_form: String,
        new_types: Vec<ElementType>,
    },
    FleeBlocked,
    FleeFailed,
    Escaped,
    CaptureFailed {
        name: String,
    },
    CaptureSucceeded {
        name: String,
    },
    OutOfPokeballs,
    PotionUsed {
        name: String,
        amount: u32,
        new_hp: u32,
    },
    OutOfPotions,
}

impl BattleEvent {
    /// Human-readable text for the event, or None for events the caller
    /// usually folds into surrounding text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::AttackMissed { attacker } => {
                Some(format!("{} missed its attack...", attacker))
            }
            BattleEvent::AttackEffectiveness { efficiency } => Some(efficiency.to_string()),
            BattleEvent::CriticalHit { attacker } => {
                Some(format!("Critical hit by {}!!", attacker))
            }
            BattleEvent::DamageDealt {
                target,
                damage,
                remaining_hp,
            } => Some(format!(
                "{} loses {} damage{} ({} HP left)",
                target,
                damage,
                if *damage == 1 { "" } else { "s" },
                remaining_hp
            )),
            BattleEvent::Fainted { name } => Some(format!("{} fainted!", name)),
            BattleEvent::XpGained { name, amount } => {
                Some(format!("{} gained {} XP", name, amount))
            }
            BattleEvent::LeveledUp {
                name, new_level, ..
            } => Some(format!("{} grew to level {}!", name, new_level)),
            BattleEvent::Evolved {
                previous_form,
                new_form,
                ..
            } => Some(format!("{} evolved into {}!", previous_form, new_form)),
            BattleEvent::FleeBlocked => {
                Some("You can't flee from a trainer battle!".to_string())
            }
            BattleEvent::FleeFailed => Some("Couldn't get away!".to_string()),
            BattleEvent::Escaped => Some("Got away safely!".to_string()),
            BattleEvent::CaptureFailed { name } => {
                Some(format!("Oh no! {} broke free!", name))
            }
            BattleEvent::CaptureSucceeded { name } => {
                Some(format!("Gotcha! {} was caught!", name))
            }
            BattleEvent::OutOfPokeballs => Some("No pokeballs left...".to_string()),
            BattleEvent::PotionUsed { name, new_hp, .. } => {
                Some(format!("{} was healed to {} HP", name, new_hp))
            }
            BattleEvent::OutOfPotions => Some("No potions left...".to_string()),
        }
    }
}

/// Collects the events of one resolved action for the caller to render
/// in order.
#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Print every event with formatted text, falling back to debug
    /// output for anything without one.
    pub fn print_formatted(&self) {
        for event in &self.events {
            match event.format() {
                Some(text) => println!("  {}", text),
                None => println!("  {:?}", event),
            }
        }
    }

    pub fn contains<F>(&self, predicate: F) -> bool
    where
        F: Fn(&BattleEvent) -> bool,
    {
        self.events.iter().any(predicate)
    }
}
