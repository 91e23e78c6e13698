//! Effect applicator: executes a single effect against resolved targets,
//! mutating runtime state and appending log events.
//!
//! Damage flows shield-first: the target's shield absorbs up to its full
//! value, overflow carries into hp, and the damage event records the actual
//! hp lost. Thorns reflect as a fresh, independently-shielded damage
//! application that does not itself re-trigger thorns (single bounce).

use log::trace;

use crate::error::BattleResult;
use crate::rng::BattleRng;
use crate::targeting::{find_summon_slot, resolve_targets};
use crate::triggers::run_trigger;
use crate::types::{Effect, RuntimeUnit, StatusName, SummonRow, Trigger, HP_CAP};
use crate::{events::BattleLogEvent, types::BattleState};

/// Additive status application; repeated applications stack.
pub fn add_status(unit: &mut RuntimeUnit, name: StatusName, amount: f64) {
    let current = unit.status(name);
    unit.statuses.insert(name, current + amount);
}

/// Offset incoming damage against the unit's shield. Returns the overflow
/// that reaches hp; the shield is consumed, never partially refreshed.
pub fn consume_shield(unit: &mut RuntimeUnit, amount: i32) -> i32 {
    let shield = unit.status(StatusName::Shield);
    if shield <= 0.0 {
        return amount;
    }
    let remain = shield - f64::from(amount);
    if remain <= 0.0 {
        unit.statuses.remove(&StatusName::Shield);
        (-remain).max(0.0) as i32
    } else {
        unit.statuses.insert(StatusName::Shield, remain);
        0
    }
}

/// Apply damage to a living unit: shield first, then hp (floored at 0),
/// then thorns reflection, then the faint check.
pub fn apply_damage(
    state: &mut BattleState,
    target_uid: &str,
    amount: i32,
    source_uid: Option<&str>,
) -> BattleResult<()> {
    apply_damage_inner(state, target_uid, amount, source_uid, true)
}

fn apply_damage_inner(
    state: &mut BattleState,
    target_uid: &str,
    amount: i32,
    source_uid: Option<&str>,
    reflect_thorns: bool,
) -> BattleResult<()> {
    let Some(target) = state.unit_mut(target_uid) else {
        return Ok(());
    };
    if !target.alive {
        return Ok(());
    }
    let amount = consume_shield(target, amount);
    if amount <= 0 {
        return Ok(());
    }
    target.hp = (target.hp - amount).clamp(0, HP_CAP);
    state.log.push(BattleLogEvent::Damage {
        target: target_uid.to_string(),
        amount,
        source: source_uid.map(str::to_string),
    });

    if reflect_thorns {
        if let Some(source_uid) = source_uid {
            let source_alive = state.unit(source_uid).is_some_and(|u| u.alive);
            let thorns = state
                .unit(target_uid)
                .map_or(0.0, |u| u.status(StatusName::Thorns)) as i32;
            if source_alive && thorns > 0 {
                apply_damage_inner(state, source_uid, thorns, Some(target_uid), false)?;
            }
        }
    }

    if state.unit(target_uid).is_some_and(|u| u.hp <= 0) {
        faint(state, target_uid, source_uid)?;
    }
    Ok(())
}

/// Heal a living unit. The result never exceeds the unit's base hp and
/// never drops below its current hp (buffed hp stays the ceiling). Logged
/// only when hp actually changed.
pub fn heal(state: &mut BattleState, target_uid: &str, amount: i32, source_uid: Option<&str>) {
    let Some(target) = state.unit_mut(target_uid) else {
        return;
    };
    if !target.alive {
        return;
    }
    let before = target.hp;
    target.hp = (before + amount).min(target.base_hp).max(before);
    let healed = target.hp - before;
    if healed > 0 {
        state.log.push(BattleLogEvent::Heal {
            target: target_uid.to_string(),
            amount: healed,
            source: source_uid.map(str::to_string),
        });
    }
}

/// Remove a unit from play, or fire its one-shot revive instead.
pub fn faint(state: &mut BattleState, unit_uid: &str, by: Option<&str>) -> BattleResult<()> {
    let Some(unit) = state.unit_mut(unit_uid) else {
        return Ok(());
    };
    if !unit.alive {
        return Ok(());
    }
    let revive_pct = unit.status(StatusName::RevivePct);
    if revive_pct > 0.0 && !unit.revived {
        unit.revived = true;
        let hp = ((f64::from(unit.base_hp) * revive_pct).floor() as i32).max(1);
        unit.hp = hp;
        unit.statuses.remove(&StatusName::RevivePct);
        state.log.push(BattleLogEvent::Revive {
            unit: unit_uid.to_string(),
            hp,
        });
        return Ok(());
    }
    unit.alive = false;
    state.log.push(BattleLogEvent::Faint {
        unit: unit_uid.to_string(),
        by: by.map(str::to_string),
    });
    run_trigger(state, unit_uid, Trigger::OnFaint, by)
}

/// Summon units onto the caster's side, filling the preferred row left to
/// right and falling back to the other row. Fizzles silently when both rows
/// are full.
pub fn summon(
    state: &mut BattleState,
    spawner_uid: &str,
    unit_id: &str,
    count: u32,
    position: SummonRow,
) -> BattleResult<()> {
    let Some(spawner) = state.unit(spawner_uid) else {
        return Ok(());
    };
    let team = spawner.team;
    let spawner_uid = spawner_uid.to_string();

    for _ in 0..count {
        let Some(slot) = find_summon_slot(state, team, position.preferred_row()) else {
            return Ok(());
        };
        let spawned =
            crate::factory::spawn_unit(&mut state.spawn_seq, team, unit_id, 1, slot, &[])?;
        trace!("summon: {} spawns {} at {:?}", spawner_uid, spawned.uid, slot);
        state.log.push(BattleLogEvent::Summon {
            unit: spawner_uid.clone(),
            spawned_uid: spawned.uid.clone(),
            team,
            unit_id: unit_id.to_string(),
            row: slot.row,
            col: slot.col,
        });
        state.team_mut(team).units.push(spawned);
    }
    Ok(())
}

/// Execute one effect for the acting unit against its resolved targets.
pub fn apply_effect(
    state: &mut BattleState,
    actor_uid: &str,
    effect: &Effect,
    rng: &mut BattleRng,
) -> BattleResult<()> {
    // Summons have no target keyword; they always land on the caster's side.
    if let Effect::Summon {
        unit_id,
        count,
        position,
    } = effect
    {
        return summon(state, actor_uid, unit_id, *count, *position);
    }

    let Some(target_kw) = effect.target() else {
        return Ok(());
    };
    let targets = resolve_targets(state, actor_uid, target_kw, rng);

    for target_uid in targets {
        match effect {
            Effect::Buff { atk, hp, .. } => {
                if let Some(unit) = state.unit_mut(&target_uid) {
                    unit.atk += atk;
                    unit.hp = (unit.hp + hp).clamp(0, HP_CAP);
                }
                // Atk-only buffs stay silent in the log.
                if *hp != 0 {
                    state.log.push(BattleLogEvent::Heal {
                        target: target_uid,
                        amount: *hp,
                        source: Some(actor_uid.to_string()),
                    });
                }
            }
            Effect::Damage { amount, .. } => {
                apply_damage(state, &target_uid, *amount, Some(actor_uid))?;
            }
            Effect::Heal { amount, .. } => {
                heal(state, &target_uid, *amount, Some(actor_uid));
            }
            Effect::Shield { amount, .. } => {
                let total = if let Some(unit) = state.unit_mut(&target_uid) {
                    add_status(unit, StatusName::Shield, f64::from(*amount));
                    unit.status(StatusName::Shield)
                } else {
                    continue;
                };
                state.log.push(BattleLogEvent::Status {
                    target: target_uid,
                    status: StatusName::Shield,
                    amount: total,
                    note: None,
                });
            }
            Effect::Status { status, amount, .. } => {
                if let Some(unit) = state.unit_mut(&target_uid) {
                    add_status(unit, *status, *amount);
                } else {
                    continue;
                }
                state.log.push(BattleLogEvent::Status {
                    target: target_uid,
                    status: *status,
                    amount: *amount,
                    note: None,
                });
            }
            // Handled above; summons never reach the targeted path.
            Effect::Summon { .. } => {}
        }
    }
    Ok(())
}
