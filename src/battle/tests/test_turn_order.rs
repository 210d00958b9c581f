use crate::battle::engine::Battle;
use crate::battle::state::{BattleEvent, BattleOutcome, BattlePhase, EventBus};
use crate::battle::tests::common::TestCreatureBuilder;
use crate::errors::{BattleStateError, EngineError};
use crate::rng::EngineRng;
use crate::types::ElementType;
use pretty_assertions::assert_eq;

#[test]
fn faster_player_opens_the_battle() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10)
        .with_stats(40, 12, 8, 20)
        .build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 10)
        .with_stats(40, 12, 8, 10)
        .build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    assert!(battle.is_player_first());
    battle.begin();
    assert_eq!(battle.phase(), BattlePhase::PlayerTurn);
}

#[test]
fn speed_tie_goes_to_the_opponent() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10)
        .with_stats(40, 12, 8, 15)
        .build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 10)
        .with_stats(40, 12, 8, 15)
        .build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    assert!(!battle.is_player_first());
    battle.begin();
    assert_eq!(battle.phase(), BattlePhase::OpponentTurn);
}

#[test]
fn attacks_alternate_until_someone_falls() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10)
        .with_stats(40, 15, 8, 20)
        .build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 10)
        .with_stats(40, 12, 8, 10)
        .build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    let mut bus = EventBus::new();

    // Player hits for 15 - 8 = 7, opponent counters for 12 - 8 = 4.
    let mut rng = EngineRng::scripted(vec![2, 255]);
    battle
        .player_attack(ElementType::Normal, &mut rng, &mut bus)
        .unwrap();
    assert_eq!(battle.phase(), BattlePhase::OpponentTurn);
    assert_eq!(battle.opponent().hp(), 33);

    let mut rng = EngineRng::scripted(vec![2, 255]);
    battle.opponent_attack(&mut rng, &mut bus).unwrap();
    assert_eq!(battle.phase(), BattlePhase::PlayerTurn);
    assert_eq!(battle.player().hp(), 36);
}

#[test]
fn attacking_out_of_turn_is_rejected() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10)
        .with_stats(40, 15, 8, 20)
        .build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 10)
        .with_stats(40, 12, 8, 10)
        .build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    assert_eq!(battle.phase(), BattlePhase::PlayerTurn);
    let mut bus = EventBus::new();

    // The opponent cannot jump in during the player's turn; the check
    // fires before any roll.
    let mut rng = EngineRng::scripted(vec![]);
    let err = battle.opponent_attack(&mut rng, &mut bus).unwrap_err();
    assert_eq!(err, EngineError::BattleState(BattleStateError::OutOfTurn));

    let mut rng = EngineRng::scripted(vec![2, 255]);
    battle
        .player_attack(ElementType::Normal, &mut rng, &mut bus)
        .unwrap();
    assert_eq!(battle.phase(), BattlePhase::OpponentTurn);

    // And the player cannot attack twice in a row.
    let mut rng = EngineRng::scripted(vec![]);
    let err = battle
        .player_attack(ElementType::Normal, &mut rng, &mut bus)
        .unwrap_err();
    assert_eq!(err, EngineError::BattleState(BattleStateError::OutOfTurn));
}

#[test]
fn felling_the_opponent_resolves_and_locks_the_battle() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10)
        .with_stats(40, 20, 8, 20)
        .build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 5)
        .with_stats(30, 12, 8, 9)
        .with_hp(5)
        .build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    let mut bus = EventBus::new();
    // Miss passes, no crit, then the five effort draws.
    let mut rng = EngineRng::scripted(vec![2, 255, 6, 2, 2, 2, 2]);

    battle
        .player_attack(ElementType::Normal, &mut rng, &mut bus)
        .unwrap();

    assert_eq!(battle.phase(), BattlePhase::Resolved(BattleOutcome::PlayerWon));
    assert_eq!(battle.outcome(), Some(BattleOutcome::PlayerWon));
    assert!(bus.contains(|e| matches!(e, BattleEvent::XpGained { .. })));

    // Any further action is a state error.
    let mut rng = EngineRng::scripted(vec![2, 255]);
    let err = battle
        .player_attack(ElementType::Normal, &mut rng, &mut bus)
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::BattleState(BattleStateError::BattleAlreadyResolved)
    );
}
