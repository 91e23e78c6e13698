use crate::events::BattleLogEvent;
use crate::tests::*;
use crate::triggers::run_trigger;
use crate::types::{Ability, Effect, ItemDef, StatusName, Target, TeamId, Trigger};

fn chain_ability(trigger: Trigger) -> Ability {
    Ability::new(
        trigger,
        vec![Effect::Status {
            target: Target::SelfUnit,
            status: StatusName::Chain,
            amount: 1.0,
        }],
    )
}

fn thorns_item(id: &str) -> ItemDef {
    ItemDef::new(id, id, "test item").with_ability(Ability::new(
        Trigger::OnAttack,
        vec![Effect::Status {
            target: Target::SelfUnit,
            status: StatusName::Thorns,
            amount: 2.0,
        }],
    ))
}

#[test]
fn own_ability_fires_before_item_abilities() {
    let mut unit = with_ability(
        test_unit(TeamId::A, "a1", 1, 5, 0, 0),
        chain_ability(Trigger::OnAttack),
    );
    unit.items.push(thorns_item("spiked_band"));
    let mut state = state_with(vec![unit]);

    run_trigger(&mut state, "a1", Trigger::OnAttack, None).unwrap();

    let statuses: Vec<StatusName> = state
        .log
        .iter()
        .filter_map(|e| match e {
            BattleLogEvent::Status { status, .. } => Some(*status),
            _ => None,
        })
        .collect();
    assert_eq!(statuses, vec![StatusName::Chain, StatusName::Thorns]);
}

#[test]
fn item_abilities_fire_even_without_an_own_ability() {
    let mut unit = test_unit(TeamId::A, "a1", 1, 5, 0, 0);
    unit.items.push(thorns_item("spiked_band"));
    let mut state = state_with(vec![unit]);

    run_trigger(&mut state, "a1", Trigger::OnAttack, None).unwrap();

    assert_eq!(state.unit("a1").unwrap().status(StatusName::Thorns), 2.0);
}

#[test]
fn mismatched_triggers_do_nothing() {
    let unit = with_ability(
        test_unit(TeamId::A, "a1", 1, 5, 0, 0),
        chain_ability(Trigger::OnFaint),
    );
    let mut state = state_with(vec![unit]);

    run_trigger(&mut state, "a1", Trigger::OnAttack, None).unwrap();

    assert_eq!(state.unit("a1").unwrap().status(StatusName::Chain), 0.0);
    assert_eq!(state.log.len(), 1); // just the start event
}

#[test]
fn chance_zero_never_fires_and_chance_one_always_fires() {
    let never = with_ability(
        test_unit(TeamId::A, "a1", 1, 5, 0, 0),
        chain_ability(Trigger::OnAttack).with_chance(0.0),
    );
    let always = with_ability(
        test_unit(TeamId::A, "a2", 1, 5, 0, 1),
        chain_ability(Trigger::OnAttack).with_chance(1.0),
    );
    let mut state = state_with(vec![never, always]);

    run_trigger(&mut state, "a1", Trigger::OnAttack, None).unwrap();
    run_trigger(&mut state, "a2", Trigger::OnAttack, None).unwrap();

    assert_eq!(state.unit("a1").unwrap().status(StatusName::Chain), 0.0);
    assert_eq!(state.unit("a2").unwrap().status(StatusName::Chain), 1.0);
}

#[test]
fn identical_invocations_roll_identically() {
    let build = || {
        let unit = with_ability(
            test_unit(TeamId::A, "a1", 1, 5, 0, 0),
            chain_ability(Trigger::OnAttack).with_chance(0.5),
        );
        let mut state = state_with(vec![unit]);
        state.turn = 7;
        state
    };

    let mut first = build();
    let mut second = build();
    run_trigger(&mut first, "a1", Trigger::OnAttack, None).unwrap();
    run_trigger(&mut second, "a1", Trigger::OnAttack, None).unwrap();

    // Same seed, turn, actor and trigger derive the same RNG stream, so
    // the coin flip lands the same way both times.
    assert_eq!(
        first.unit("a1").unwrap().status(StatusName::Chain),
        second.unit("a1").unwrap().status(StatusName::Chain)
    );
    assert_eq!(log_json(&first), log_json(&second));
}

#[test]
fn a_fainted_actor_can_still_run_its_trigger() {
    let mut unit = with_ability(
        test_unit(TeamId::A, "a1", 1, 5, 0, 0),
        Ability::new(
            Trigger::OnFaint,
            vec![Effect::Damage {
                target: Target::EnemyFront,
                amount: 2,
            }],
        ),
    );
    unit.alive = false;
    unit.hp = 0;
    let enemy = test_unit(TeamId::B, "b1", 1, 5, 0, 0);
    let mut state = state_with(vec![unit, enemy]);

    run_trigger(&mut state, "a1", Trigger::OnFaint, None).unwrap();

    assert_eq!(state.unit("b1").unwrap().hp, 3);
}
