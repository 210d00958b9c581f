use crate::bag::Bag;
use crate::battle::state::{
    BattleEvent, BattleOutcome, BattlePhase, CaptureAttempt, EventBus, FleeAttempt, ItemUse,
};
use crate::creature::{Creature, CreatureState, VictoryGains};
use crate::errors::{BattleStateError, EngineResult};
use crate::rng::EngineRng;
use crate::types::ElementType;
use crate::world::CreatureStore;

const POTION_HEAL: u32 = 20;

/// One wild encounter or trainer battle over two creatures.
///
/// The battle exclusively borrows both combatants for its lifetime; the
/// caller drives it one menu action at a time and reads the outcome from
/// the phase. Counter-attacks the rules grant the opponent (after a
/// failed flee or a broken capture) happen inside the action that earned
/// them.
pub struct Battle<'a> {
    player: &'a mut Creature,
    opponent: &'a mut Creature,
    phase: BattlePhase,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a mut Creature, opponent: &'a mut Creature) -> Self {
        Battle {
            player,
            opponent,
            phase: BattlePhase::TurnOrderPending,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn player(&self) -> &Creature {
        self.player
    }

    pub fn opponent(&self) -> &Creature {
        self.opponent
    }

    /// Strictly greater speed takes the first turn; ties go to the
    /// opponent.
    pub fn is_player_first(&self) -> bool {
        self.player.speed > self.opponent.speed
    }

    /// Leave `TurnOrderPending` by comparing speeds.
    pub fn begin(&mut self) {
        if self.phase == BattlePhase::TurnOrderPending {
            self.phase = if self.is_player_first() {
                BattlePhase::PlayerTurn
            } else {
                BattlePhase::OpponentTurn
            };
        }
    }

    fn ensure_unresolved(&self) -> EngineResult<()> {
        match self.phase {
            BattlePhase::Resolved(_) => Err(BattleStateError::BattleAlreadyResolved.into()),
            _ => Ok(()),
        }
    }

    pub fn player_attack(
        &mut self,
        attack_type: ElementType,
        rng: &mut EngineRng,
        bus: &mut EventBus,
    ) -> EngineResult<()> {
        self.ensure_unresolved()?;
        if self.phase != BattlePhase::PlayerTurn {
            return Err(BattleStateError::OutOfTurn.into());
        }
        resolve_attack(self.player, self.opponent, attack_type, rng, bus)?;
        self.phase = if self.opponent.is_fainted() {
            BattlePhase::Resolved(BattleOutcome::PlayerWon)
        } else {
            BattlePhase::OpponentTurn
        };
        Ok(())
    }

    pub fn opponent_attack(&mut self, rng: &mut EngineRng, bus: &mut EventBus) -> EngineResult<()> {
        self.ensure_unresolved()?;
        if self.phase != BattlePhase::OpponentTurn {
            return Err(BattleStateError::OutOfTurn.into());
        }
        self.counter_attack(rng, bus)?;
        if self.outcome().is_none() {
            self.phase = BattlePhase::PlayerTurn;
        }
        Ok(())
    }

    /// Attempt to flee a wild encounter.
    ///
    /// Trainer battles block fleeing outright, before any roll. A flee
    /// roll of 1 fails and hands the opponent a free attack.
    pub fn run_away(
        &mut self,
        rng: &mut EngineRng,
        bus: &mut EventBus,
    ) -> EngineResult<FleeAttempt> {
        self.ensure_unresolved()?;
        if self.opponent.state == CreatureState::Domesticated {
            bus.push(BattleEvent::FleeBlocked);
            return Ok(FleeAttempt::Blocked);
        }
        if rng.roll(1..8, "flee chance") == 1 {
            bus.push(BattleEvent::FleeFailed);
            self.counter_attack(rng, bus)?;
            if self.outcome().is_none() {
                self.phase = BattlePhase::PlayerTurn;
            }
            return Ok(FleeAttempt::Failed);
        }
        bus.push(BattleEvent::Escaped);
        self.phase = BattlePhase::Resolved(BattleOutcome::Escaped);
        Ok(FleeAttempt::Escaped)
    }

    /// Throw a pokeball at the opponent.
    ///
    /// The ball is spent whether or not it works. The capture roll spans
    /// `1..=hp_max` and succeeds when it reaches current HP, so a worn
    /// down creature is strictly easier to catch. A broken capture hands
    /// the opponent a free attack; a successful one ends the battle and
    /// registers the creature with the store.
    pub fn throw_ball(
        &mut self,
        bag: &mut Bag,
        store: &mut dyn CreatureStore,
        owner: &str,
        rng: &mut EngineRng,
        bus: &mut EventBus,
    ) -> EngineResult<CaptureAttempt> {
        self.ensure_unresolved()?;
        if !bag.spend_pokeball() {
            bus.push(BattleEvent::OutOfPokeballs);
            return Ok(CaptureAttempt::Back);
        }
        let roll = rng.roll(1..self.opponent.hp_max + 1, "capture chance");
        if roll >= self.opponent.hp() {
            self.opponent.state = CreatureState::Domesticated;
            bus.push(BattleEvent::CaptureSucceeded {
                name: self.opponent.name.clone(),
            });
            store.save_creature(owner, self.opponent)?;
            self.phase = BattlePhase::Resolved(BattleOutcome::Captured);
            return Ok(CaptureAttempt::Captured);
        }
        bus.push(BattleEvent::CaptureFailed {
            name: self.opponent.name.clone(),
        });
        self.counter_attack(rng, bus)?;
        if self.outcome().is_none() {
            self.phase = BattlePhase::PlayerTurn;
        }
        Ok(CaptureAttempt::Broke)
    }

    /// Drink a potion: 20 HP, capped at the maximum. Running out sends
    /// the caller back to the menu without consuming the turn.
    pub fn use_potion(&mut self, bag: &mut Bag, bus: &mut EventBus) -> EngineResult<ItemUse> {
        self.ensure_unresolved()?;
        if !bag.spend_potion() {
            bus.push(BattleEvent::OutOfPotions);
            return Ok(ItemUse::Back);
        }
        self.player.heal(POTION_HEAL);
        bus.push(BattleEvent::PotionUsed {
            name: self.player.name.clone(),
            amount: POTION_HEAL,
            new_hp: self.player.hp(),
        });
        self.phase = BattlePhase::OpponentTurn;
        Ok(ItemUse::Used)
    }

    fn counter_attack(&mut self, rng: &mut EngineRng, bus: &mut EventBus) -> EngineResult<()> {
        // Single-typed opponents attack with their only type and leave
        // the rng untouched.
        let attack_type = if self.opponent.types.len() == 1 {
            self.opponent.types[0]
        } else {
            *rng.pick(&self.opponent.types, "opponent attack type")
        };
        resolve_attack(self.opponent, self.player, attack_type, rng, bus)?;
        if self.player.is_fainted() {
            self.phase = BattlePhase::Resolved(BattleOutcome::OpponentWon);
        }
        Ok(())
    }
}

/// Resolve one attack from `attacker` against `defender`.
///
/// Rolls, in order: miss chance `1..=8` (1 misses), then critical chance
/// `1..=255` (below half the attacker's speed crits). Raw damage is
/// `strength x multiplier - defense`; a raw hit that reaches the
/// defender's remaining HP fells it on the spot and pays out victory
/// gains to the attacker inside this call. A raw value the defense fully
/// absorbs still lands a minimum hit, 20 on a crit or 1 otherwise.
/// Damage is ceiling-rounded.
pub fn resolve_attack(
    attacker: &mut Creature,
    defender: &mut Creature,
    attack_type: ElementType,
    rng: &mut EngineRng,
    bus: &mut EventBus,
) -> EngineResult<Option<VictoryGains>> {
    if rng.roll(1..9, "miss chance") == 1 {
        bus.push(BattleEvent::AttackMissed {
            attacker: attacker.name.clone(),
        });
        return Ok(None);
    }

    let (multiplier, efficiency) = attacker.attack_efficiency(attack_type, defender)?;
    let raw = attacker.strength as f64 * multiplier - defender.defense as f64;
    // Half of an odd speed is fractional and the fraction counts.
    let critical = (rng.roll(1..256, "critical chance") as f64) < attacker.speed as f64 / 2.0;

    bus.push(BattleEvent::AttackEffectiveness { efficiency });

    let remaining = defender.hp();
    if raw > 0.0 && remaining as f64 - raw <= 0.0 {
        // Fells the defender: clamp to remaining HP and collect the
        // spoils before returning.
        defender.apply_damage(remaining);
        bus.push(BattleEvent::DamageDealt {
            target: defender.name.clone(),
            damage: remaining,
            remaining_hp: 0,
        });
        bus.push(BattleEvent::Fainted {
            name: defender.name.clone(),
        });

        let victor_name = attacker.name.clone();
        let gains = attacker.apply_victory_xp(defender, rng)?;
        bus.push(BattleEvent::XpGained {
            name: victor_name.clone(),
            amount: gains.xp_gained,
        });
        if gains.levels_gained > 0 {
            bus.push(BattleEvent::LeveledUp {
                name: victor_name,
                levels: gains.levels_gained,
                new_level: attacker.level,
            });
        }
        if let Some(report) = &gains.evolution {
            bus.push(BattleEvent::Evolved {
                previous_form: report.previous_form.clone(),
                new_form: report.new_form.clone(),
                new_types: report.new_types.clone(),
            });
        }
        return Ok(Some(gains));
    }

    // The crit tag only shows where the crit changed the damage; a
    // felling blow above stays untagged.
    let damage = if raw > 0.0 {
        let dealt = if critical {
            bus.push(BattleEvent::CriticalHit {
                attacker: attacker.name.clone(),
            });
            raw * 2.0
        } else {
            raw
        };
        dealt.ceil() as u32
    } else if critical {
        // Fully absorbed hit still lands something.
        bus.push(BattleEvent::CriticalHit {
            attacker: attacker.name.clone(),
        });
        20.min(remaining)
    } else {
        1
    };

    defender.apply_damage(damage);
    bus.push(BattleEvent::DamageDealt {
        target: defender.name.clone(),
        damage,
        remaining_hp: defender.hp(),
    });
    if defender.is_fainted() {
        bus.push(BattleEvent::Fainted {
            name: defender.name.clone(),
        });
    }

    Ok(None)
}
