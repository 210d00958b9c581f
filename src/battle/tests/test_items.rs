use crate::bag::Bag;
use crate::battle::engine::Battle;
use crate::battle::state::{BattleEvent, BattlePhase, EventBus, ItemUse};
use crate::battle::tests::common::TestCreatureBuilder;
use pretty_assertions::assert_eq;

#[test]
fn potion_heals_twenty_and_passes_the_turn() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10)
        .with_stats(50, 12, 8, 9)
        .with_hp(15)
        .build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 5).build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    let mut bag = Bag::default();
    let mut bus = EventBus::new();

    let used = battle.use_potion(&mut bag, &mut bus).unwrap();

    assert_eq!(used, ItemUse::Used);
    assert_eq!(bag.potions(), 9);
    assert_eq!(battle.player().hp(), 35);
    assert_eq!(battle.phase(), BattlePhase::OpponentTurn);
    assert!(bus.contains(|e| matches!(e, BattleEvent::PotionUsed { new_hp: 35, .. })));
}

#[test]
fn potion_never_overheals() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10)
        .with_stats(50, 12, 8, 9)
        .with_hp(45)
        .build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 5).build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    let mut bag = Bag::default();
    let mut bus = EventBus::new();

    battle.use_potion(&mut bag, &mut bus).unwrap();

    assert_eq!(battle.player().hp(), 50);
}

#[test]
fn empty_potion_pouch_goes_back_without_a_turn() {
    let mut player = TestCreatureBuilder::new("Pikachu", 10)
        .with_hp(15)
        .build();
    let mut opponent = TestCreatureBuilder::new("Pidgey", 5).build();

    let mut battle = Battle::new(&mut player, &mut opponent);
    battle.begin();
    let phase_before = battle.phase();
    let mut bag = Bag::new(0, 15);
    let mut bus = EventBus::new();

    let used = battle.use_potion(&mut bag, &mut bus).unwrap();

    assert_eq!(used, ItemUse::Back);
    assert_eq!(bag.potions(), 0);
    assert_eq!(bag.pokeballs(), 15);
    assert_eq!(battle.player().hp(), 15);
    assert_eq!(battle.phase(), phase_before);
    assert!(bus.contains(|e| matches!(e, BattleEvent::OutOfPotions)));
}
