//! Turn engine: the deterministic combat loop.
//!
//! After the onStart pre-pass, sides alternate strictly A, B, A, B. Each
//! iteration selects the acting side's front-most living unit, ticks its
//! start-of-turn poison, executes one attack with its on-hit statuses, and
//! fires the onAttack trigger. The loop is bounded so a content bug can
//! only ever produce a draw, never a hang.

use log::debug;

use crate::effects::{add_status, apply_damage, heal};
use crate::error::BattleResult;
use crate::events::BattleLogEvent;
use crate::factory::make_battle;
use crate::targeting::{front_most, living_uids, living_units};
use crate::triggers::run_trigger;
use crate::types::{BattleState, StatusName, TeamId, Trigger, UnitSpec, Winner};

/// Termination guard: converts a never-ending matchup into a draw.
pub const DEFAULT_MAX_TURNS: u32 = 500;

/// Front-most living unit of one side, if any.
fn next_actor(state: &BattleState, side: TeamId) -> Option<String> {
    let units = living_units(state, side);
    front_most(&units).map(|u| u.uid.clone())
}

/// Start-of-turn poison tick: flat hp loss, bypassing shield, which can
/// faint the actor before it acts.
fn apply_start_of_turn(state: &mut BattleState, actor_uid: &str) -> BattleResult<()> {
    let Some(actor) = state.unit(actor_uid) else {
        return Ok(());
    };
    let poison = actor.status(StatusName::Poison) as i32;
    if poison > 0 && actor.alive {
        if let Some(actor) = state.unit_mut(actor_uid) {
            actor.hp = (actor.hp - poison).max(0);
        }
        state.log.push(BattleLogEvent::Damage {
            target: actor_uid.to_string(),
            amount: poison,
            source: None,
        });
        if state.unit(actor_uid).is_some_and(|u| u.hp <= 0) {
            crate::effects::faint(state, actor_uid, None)?;
        }
    }
    Ok(())
}

/// Run one battle to completion, appending events to the state's log and
/// terminating with exactly one `end` event.
pub fn simulate(state: &mut BattleState, max_turns: u32) -> BattleResult<()> {
    // onStart pre-pass over the initial rosters, team A then team B. Units
    // summoned during the pre-pass do not get their own onStart.
    for side in [TeamId::A, TeamId::B] {
        for uid in living_uids(state, side) {
            run_trigger(state, &uid, Trigger::OnStart, None)?;
        }
    }

    let mut side = TeamId::A;
    for t in 0..max_turns {
        state.turn = t + 1;
        if living_units(state, TeamId::A).is_empty() || living_units(state, TeamId::B).is_empty() {
            break;
        }

        // Strict alternation, except a side with no living unit forfeits
        // the slot without consuming an alternation step.
        let actor = match next_actor(state, side) {
            Some(uid) => uid,
            None => {
                side = side.enemy();
                match next_actor(state, side) {
                    Some(uid) => uid,
                    None => break,
                }
            }
        };
        debug!("turn {}: side {} acts with {}", state.turn, side, actor);

        apply_start_of_turn(state, &actor)?;
        if !state.unit(&actor).is_some_and(|u| u.alive) {
            side = side.enemy();
            continue;
        }

        // On-faint summons may have refilled the other side since the last
        // check; if it is still empty, pass without attacking.
        let defender = match next_actor(state, side.enemy()) {
            Some(uid) => uid,
            None => {
                side = side.enemy();
                continue;
            }
        };

        let (base, bonus) = match state.unit(&actor) {
            Some(u) => (u.atk.max(0), u.status(StatusName::AttackBonus) as i32),
            None => (0, 0),
        };
        let dmg = base + bonus;
        apply_damage(state, &defender, dmg, Some(&actor))?;
        state.log.push(BattleLogEvent::Attack {
            attacker: actor.clone(),
            defender: defender.clone(),
            amount: dmg,
        });

        let lifesteal = state.unit(&actor).map_or(0.0, |u| u.status(StatusName::LifestealPct));
        if lifesteal > 0.0 {
            let amount = (f64::from(dmg) * lifesteal).floor() as i32;
            if amount > 0 {
                heal(state, &actor, amount, Some(&actor));
            }
        }

        // Chain picks one further enemy through a fixed pseudo-index over
        // the turn counter, deliberately outside the seeded RNG.
        let chain = state.unit(&actor).map_or(0.0, |u| u.status(StatusName::Chain)) as i32;
        if chain > 0 {
            let others: Vec<String> = living_uids(state, side.enemy())
                .into_iter()
                .filter(|uid| *uid != defender)
                .collect();
            if !others.is_empty() {
                let idx = (t as usize * 9301 + 49297) % others.len();
                apply_damage(state, &others[idx], chain, Some(&actor))?;
            }
        }

        let poison_on_hit = state
            .unit(&actor)
            .map_or(0.0, |u| u.status(StatusName::PoisonOnHit));
        if poison_on_hit > 0.0 && state.unit(&defender).is_some_and(|u| u.alive) {
            if let Some(unit) = state.unit_mut(&defender) {
                add_status(unit, StatusName::Poison, poison_on_hit);
            }
            state.log.push(BattleLogEvent::Status {
                target: defender.clone(),
                status: StatusName::Poison,
                amount: poison_on_hit,
                note: None,
            });
        }

        run_trigger(state, &actor, Trigger::OnAttack, None)?;

        let on_attack_heal = state
            .unit(&actor)
            .map_or(0.0, |u| u.status(StatusName::OnAttackHeal)) as i32;
        if on_attack_heal > 0 {
            heal(state, &actor, on_attack_heal, Some(&actor));
        }

        side = side.enemy();
    }

    let a = living_units(state, TeamId::A).len();
    let b = living_units(state, TeamId::B).len();
    let winner = if a > 0 && b == 0 {
        Winner::A
    } else if b > 0 && a == 0 {
        Winner::B
    } else {
        Winner::Draw
    };
    debug!("battle over after {} turns: {:?}", state.turn, winner);
    state.log.push(BattleLogEvent::End { winner });
    Ok(())
}

/// Construct and fully resolve a battle in one call. A battle is a pure
/// function of (seed, rosters) to an event log.
pub fn resolve_battle(
    seed: &str,
    team_a: &[UnitSpec],
    team_b: &[UnitSpec],
) -> BattleResult<BattleState> {
    let mut state = make_battle(seed, team_a, team_b)?;
    simulate(&mut state, DEFAULT_MAX_TURNS)?;
    Ok(state)
}
