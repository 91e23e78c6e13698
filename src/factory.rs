//! Battle factory: turns roster specifications into initial runtime state.
//!
//! Uids are a pure function of (team, definition id, position, per-battle
//! sequence counter), so identical seed-and-roster inputs always rebuild
//! byte-identical state. The counter is owned by the battle, never ambient,
//! which keeps parallel battle construction safe without coordination.

use std::collections::BTreeSet;

use crate::catalog::{get_item_def, get_unit_def};
use crate::error::{BattleError, BattleResult};
use crate::events::BattleLogEvent;
use crate::types::{BattleState, Position, RuntimeUnit, TeamId, TeamState, UnitSpec};

/// Instantiate one runtime unit, deep-copying its definition and items out
/// of the catalog and consuming one sequence number.
pub fn spawn_unit(
    seq: &mut u32,
    team: TeamId,
    def_id: &str,
    level: u8,
    pos: Position,
    item_ids: &[String],
) -> BattleResult<RuntimeUnit> {
    let def = get_unit_def(def_id)?;
    let items = item_ids
        .iter()
        .map(|id| get_item_def(id))
        .collect::<BattleResult<Vec<_>>>()?;

    let uid = format!("{}-{}-{}{}-{}", team, def_id, pos.row, pos.col, *seq);
    *seq += 1;

    let base_hp = def.base.hp;
    let base_atk = def.base.atk;
    let speed = def.base.speed.unwrap_or(1);
    Ok(RuntimeUnit {
        uid,
        team,
        def,
        level,
        pos,
        atk: base_atk,
        hp: base_hp,
        base_hp,
        base_atk,
        speed,
        alive: true,
        revived: false,
        statuses: Default::default(),
        items,
    })
}

/// Construct the initial battle state from two rosters.
///
/// The log opens with a `start` event followed by one `spawn` event per
/// unit, all of team A (roster order) then all of team B. Position
/// collisions within a side are the caller's responsibility; use
/// [`check_roster_positions`] to detect them up front.
pub fn make_battle(
    seed: &str,
    team_a: &[UnitSpec],
    team_b: &[UnitSpec],
) -> BattleResult<BattleState> {
    let mut seq = 0;
    let mut state = BattleState {
        seed: seed.to_string(),
        turn: 0,
        team_a: TeamState::new(TeamId::A),
        team_b: TeamState::new(TeamId::B),
        spawn_seq: 0,
        log: vec![BattleLogEvent::Start],
    };

    for spec in team_a.iter().chain(team_b.iter()) {
        let unit = spawn_unit(
            &mut seq,
            spec.team,
            &spec.def_id,
            spec.level,
            spec.pos,
            &spec.item_ids,
        )?;
        state.team_mut(spec.team).units.push(unit);
    }
    state.spawn_seq = seq;

    for team in [TeamId::A, TeamId::B] {
        let spawns: Vec<BattleLogEvent> = state
            .team(team)
            .units
            .iter()
            .map(|u| BattleLogEvent::Spawn {
                unit: u.uid.clone(),
                team: u.team,
                row: u.pos.row,
                col: u.pos.col,
            })
            .collect();
        state.log.extend(spawns);
    }
    Ok(state)
}

/// Opt-in convenience check: rejects two roster entries of the same side
/// occupying the same row and column. The factory itself never runs this.
pub fn check_roster_positions(specs: &[UnitSpec]) -> BattleResult<()> {
    let mut occupied = BTreeSet::new();
    for spec in specs {
        if !occupied.insert((spec.team, spec.pos.row, spec.pos.col)) {
            return Err(BattleError::DuplicatePosition {
                team: spec.team,
                row: spec.pos.row,
                col: spec.pos.col,
            });
        }
    }
    Ok(())
}
