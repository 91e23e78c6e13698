//! Targeting resolver: maps selector keywords to concrete living units.
//!
//! All selection works over living units only and resolves by uid, so
//! callers can mutate state afterwards without holding borrows. Tie-breaks
//! are deterministic: front-most is lowest row then lowest column, and
//! back-most is highest row then lowest column (the asymmetric column
//! tie-break is intentional, pinned behavior).

use std::collections::BTreeSet;

use crate::rng::BattleRng;
use crate::types::{BattleState, Position, RuntimeUnit, Target, TeamId, BOARD_WIDTH};

/// Living units of one side, in roster order.
pub fn living_units(state: &BattleState, team: TeamId) -> Vec<&RuntimeUnit> {
    state.team(team).units.iter().filter(|u| u.alive).collect()
}

/// Uids of one side's living units, in roster order.
pub fn living_uids(state: &BattleState, team: TeamId) -> Vec<String> {
    living_units(state, team)
        .into_iter()
        .map(|u| u.uid.clone())
        .collect()
}

/// Lowest row, then lowest column.
pub fn front_most<'a>(units: &[&'a RuntimeUnit]) -> Option<&'a RuntimeUnit> {
    units.iter().copied().fold(None, |best, u| match best {
        None => Some(u),
        Some(b) => {
            if (u.pos.row, u.pos.col) < (b.pos.row, b.pos.col) {
                Some(u)
            } else {
                Some(b)
            }
        }
    })
}

/// Highest row, then lowest column.
pub fn back_most<'a>(units: &[&'a RuntimeUnit]) -> Option<&'a RuntimeUnit> {
    units.iter().copied().fold(None, |best, u| match best {
        None => Some(u),
        Some(b) => {
            if u.pos.row > b.pos.row || (u.pos.row == b.pos.row && u.pos.col < b.pos.col) {
                Some(u)
            } else {
                Some(b)
            }
        }
    })
}

/// Minimum hp, ties broken by first-encountered in roster order.
pub fn lowest_hp<'a>(units: &[&'a RuntimeUnit]) -> Option<&'a RuntimeUnit> {
    units.iter().copied().fold(None, |best, u| match best {
        None => Some(u),
        Some(b) => {
            if u.hp < b.hp {
                Some(u)
            } else {
                Some(b)
            }
        }
    })
}

/// Resolve a target keyword for the acting unit into concrete uids.
///
/// Misses are not errors: an empty list makes the effect a no-op. Random
/// selectors consume the RNG passed into the current effect resolution.
pub fn resolve_targets(
    state: &BattleState,
    actor_uid: &str,
    target: Target,
    rng: &mut BattleRng,
) -> Vec<String> {
    let Some(actor) = state.unit(actor_uid) else {
        return Vec::new();
    };
    let allies = living_units(state, actor.team);
    let enemies = living_units(state, actor.team.enemy());

    let one = |u: Option<&RuntimeUnit>| u.map(|u| vec![u.uid.clone()]).unwrap_or_default();

    match target {
        Target::SelfUnit => vec![actor.uid.clone()],
        Target::AllyFront => one(front_most(&allies)),
        Target::AllyRandom => one(rng.pick(&allies).copied()),
        Target::AllyLowestHp => one(lowest_hp(&allies)),
        Target::EnemyFront => one(front_most(&enemies)),
        Target::EnemyBack => one(back_most(&enemies)),
        Target::EnemyRandom => one(rng.pick(&enemies).copied()),
        Target::AllAllies => allies.iter().map(|u| u.uid.clone()).collect(),
        Target::AllEnemies => enemies.iter().map(|u| u.uid.clone()).collect(),
    }
}

/// First open column in the preferred row (left to right), falling back to
/// the opposite row. Occupancy counts dead units too, so summons never land
/// on a corpse. `None` when both rows are full.
pub fn find_summon_slot(state: &BattleState, team: TeamId, row_pref: u8) -> Option<Position> {
    let occupied: BTreeSet<(u8, u8)> = state
        .team(team)
        .units
        .iter()
        .map(|u| (u.pos.row, u.pos.col))
        .collect();

    let other_row = if row_pref == 0 { 1 } else { 0 };
    for row in [row_pref, other_row] {
        for col in 0..BOARD_WIDTH {
            if !occupied.contains(&(row, col)) {
                return Some(Position::new(row, col));
            }
        }
    }
    None
}
