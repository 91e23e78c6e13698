mod catalog;
mod triggers;

use std::collections::BTreeMap;

use crate::events::BattleLogEvent;
use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn test_def(id: &str, atk: i32, hp: i32) -> UnitDef {
    UnitDef::new(id, id, 1, &[], hp, atk)
}

/// A hand-built runtime unit with no ability and no items.
fn test_unit(team: TeamId, uid: &str, atk: i32, hp: i32, row: u8, col: u8) -> RuntimeUnit {
    RuntimeUnit {
        uid: uid.to_string(),
        team,
        def: test_def(uid, atk, hp),
        level: 1,
        pos: Position::new(row, col),
        atk,
        hp,
        base_hp: hp,
        base_atk: atk,
        speed: 1,
        alive: true,
        revived: false,
        statuses: BTreeMap::new(),
        items: Vec::new(),
    }
}

fn with_status(mut unit: RuntimeUnit, name: StatusName, amount: f64) -> RuntimeUnit {
    unit.statuses.insert(name, amount);
    unit
}

fn with_ability(mut unit: RuntimeUnit, ability: Ability) -> RuntimeUnit {
    unit.def.ability = Some(ability);
    unit
}

/// Assemble a battle state directly, bypassing the factory.
fn state_with(units: Vec<RuntimeUnit>) -> BattleState {
    let mut state = BattleState {
        seed: "test-seed".to_string(),
        turn: 0,
        team_a: TeamState::new(TeamId::A),
        team_b: TeamState::new(TeamId::B),
        spawn_seq: 0,
        log: vec![BattleLogEvent::Start],
    };
    for unit in units {
        state.team_mut(unit.team).units.push(unit);
    }
    state
}

fn spec(team: TeamId, def_id: &str, row: u8, col: u8) -> UnitSpec {
    UnitSpec {
        team,
        def_id: def_id.to_string(),
        level: 1,
        pos: Position::new(row, col),
        item_ids: Vec::new(),
    }
}

fn log_json(state: &BattleState) -> String {
    serde_json::to_string(&state.log).unwrap()
}

fn damage_events(log: &[BattleLogEvent]) -> Vec<(String, i32)> {
    log.iter()
        .filter_map(|e| match e {
            BattleLogEvent::Damage { target, amount, .. } => Some((target.clone(), *amount)),
            _ => None,
        })
        .collect()
}

fn final_winner(state: &BattleState) -> Winner {
    match state.log.last() {
        Some(BattleLogEvent::End { winner }) => *winner,
        other => panic!("log must end with an end event, got {:?}", other),
    }
}
