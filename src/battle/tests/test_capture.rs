use crate::bag::Bag;
use crate::battle::engine::Battle;
use crate::battle::state::{BattleEvent, BattleOutcome, BattlePhase, CaptureAttempt, EventBus};
use crate::battle::tests::common::TestCreatureBuilder;
use crate::creature::CreatureState;
use crate::rng::EngineRng;
use crate::world::MemoryStore;
use pretty_assertions::assert_eq;

#[test]
fn no_pokeballs_goes_straight_back_to_the_menu() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10).build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 5).build();
    let player_hp = player.hp();
    let opponent_hp = opponent.hp();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    let mut bag = Bag::new(10, 0);
    let mut store = MemoryStore::new();
    let mut rng = EngineRng::scripted(vec![]);
    let mut bus = EventBus::new();

    let attempt = battle
        .throw_ball(&mut bag, &mut store, "ash", &mut rng, &mut bus)
        .unwrap();

    assert_eq!(attempt, CaptureAttempt::Back);
    assert_eq!(bag.pokeballs(), 0);
    assert_eq!(bag.potions(), 10);
    assert_eq!(rng.scripted_remaining(), 0);
    assert_eq!(battle.player().hp(), player_hp);
    assert_eq!(battle.opponent().hp(), opponent_hp);
    assert!(bus.contains(|e| matches!(e, BattleEvent::OutOfPokeballs)));
}

#[test]
fn capture_succeeds_when_the_roll_reaches_current_hp() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10).build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 5)
        .with_stats(30, 12, 8, 9)
        .with_hp(10)
        .build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    let mut bag = Bag::default();
    let mut store = MemoryStore::new();
    let mut rng = EngineRng::scripted(vec![10]);
    let mut bus = EventBus::new();

    let attempt = battle
        .throw_ball(&mut bag, &mut store, "ash", &mut rng, &mut bus)
        .unwrap();

    assert_eq!(attempt, CaptureAttempt::Captured);
    assert_eq!(bag.pokeballs(), 14);
    assert_eq!(battle.opponent().state, CreatureState::Domesticated);
    assert_eq!(battle.phase(), BattlePhase::Resolved(BattleOutcome::Captured));
    assert_eq!(store.captures_of("ash").len(), 1);
    assert_eq!(store.captures_of("ash")[0].name, "Pidgey");
    assert!(bus.contains(|e| matches!(e, BattleEvent::CaptureSucceeded { .. })));
}

#[test]
fn capture_below_current_hp_breaks_and_costs_the_ball() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10)
        .with_stats(40, 12, 4, 9)
        .build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 5)
        .with_stats(30, 10, 8, 9)
        .with_hp(10)
        .build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    let mut bag = Bag::default();
    let mut store = MemoryStore::new();
    // Roll 9 misses the 10 HP threshold; the opponent's free attack
    // consumes a miss roll and a critical roll.
    let mut rng = EngineRng::scripted(vec![9, 2, 255]);
    let mut bus = EventBus::new();

    let attempt = battle
        .throw_ball(&mut bag, &mut store, "ash", &mut rng, &mut bus)
        .unwrap();

    assert_eq!(attempt, CaptureAttempt::Broke);
    assert_eq!(bag.pokeballs(), 14);
    assert_eq!(battle.opponent().state, CreatureState::Wild);
    // Counter raw damage 10 - 4 = 6.
    assert_eq!(battle.player().hp(), 40 - 6);
    assert_eq!(battle.phase(), BattlePhase::PlayerTurn);
    assert_eq!(store.captures_of("ash").len(), 0);
    assert!(bus.contains(|e| matches!(e, BattleEvent::CaptureFailed { .. })));
}

#[test]
fn full_health_capture_needs_the_maximum_roll() {
    // At full HP only a roll of exactly hp_max can succeed, so chances
    // shrink as HP climbs.
    let mut player = TestCreatureBuilder::new("Pikachu", 10).build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 5)
        .with_stats(30, 10, 8, 9)
        .build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    let mut bag = Bag::default();
    let mut store = MemoryStore::new();
    let mut rng = EngineRng::scripted(vec![30]);
    let mut bus = EventBus::new();

    let attempt = battle
        .throw_ball(&mut bag, &mut store, "ash", &mut rng, &mut bus)
        .unwrap();

    assert_eq!(attempt, CaptureAttempt::Captured);
}
