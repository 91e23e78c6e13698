use crate::catalog::{get_item_def, get_unit_def, validate_catalog};
use crate::error::BattleError;
use crate::presets::team_presets;
use crate::types::Trigger;

#[test]
fn the_shipped_tables_validate() {
    validate_catalog().unwrap();
}

#[test]
fn unit_lookup_returns_the_full_definition() {
    let golem = get_unit_def("golem").unwrap();
    assert_eq!(golem.name, "Golem");
    assert_eq!(golem.tier, 3);
    assert_eq!(golem.base.hp, 6);
    assert_eq!(golem.base.atk, 2);
    assert_eq!(golem.ability.as_ref().unwrap().trigger, Trigger::OnHurt);
}

#[test]
fn item_lookup_returns_the_full_definition() {
    let charm = get_item_def("summon_charm").unwrap();
    assert_eq!(charm.name, "Summon charm");
    assert_eq!(charm.ability.as_ref().unwrap().trigger, Trigger::OnFaint);
}

#[test]
fn unknown_ids_are_errors_not_defaults() {
    assert!(matches!(
        get_unit_def("moon_whale"),
        Err(BattleError::UnknownUnit(id)) if id == "moon_whale"
    ));
    assert!(matches!(
        get_item_def("moon_whale"),
        Err(BattleError::UnknownItem(id)) if id == "moon_whale"
    ));
}

#[test]
fn lookups_hand_out_independent_copies() {
    let mut first = get_unit_def("wolf_pup").unwrap();
    first.base.atk = 99;
    first.name.push_str(" (mutated)");

    let second = get_unit_def("wolf_pup").unwrap();
    assert_eq!(second.base.atk, 2);
    assert_eq!(second.name, "Wolf pup");
}

#[test]
fn every_preset_roster_resolves_against_the_catalog() {
    for preset in team_presets() {
        for member in &preset.members {
            get_unit_def(member.def_id).unwrap();
            for item in &member.item_ids {
                get_item_def(item).unwrap();
            }
        }
    }
}
