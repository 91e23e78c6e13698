//! Trigger dispatcher: fires a unit's own ability and its items' abilities
//! when a named trigger occurs.
//!
//! Each invocation derives a fresh RNG from `seed:turn:actorUid:trigger`,
//! shared by every ability fired within that invocation. Determinism is
//! therefore scoped to the exact invocation and independent of any other
//! trigger fired in the same turn.

use log::trace;

use crate::effects::apply_effect;
use crate::error::BattleResult;
use crate::rng::BattleRng;
use crate::types::{Ability, BattleState, Trigger};

/// Roll the activation chance (default: always fires), then run the effect
/// list in order. A failed roll never aborts or affects sibling abilities.
pub fn run_ability(
    state: &mut BattleState,
    actor_uid: &str,
    ability: &Ability,
    rng: &mut BattleRng,
) -> BattleResult<()> {
    if let Some(chance) = ability.chance {
        if !rng.chance(chance) {
            return Ok(());
        }
    }
    for effect in &ability.effects {
        apply_effect(state, actor_uid, effect, rng)?;
    }
    Ok(())
}

/// Fire the actor's ability if its trigger matches, then each of its items'
/// abilities in item order. `_other` is the counterpart unit for triggers
/// that have one (e.g. the killer on a faint); it is carried for the
/// contract but not consumed by any current ability.
pub fn run_trigger(
    state: &mut BattleState,
    actor_uid: &str,
    trigger: Trigger,
    _other: Option<&str>,
) -> BattleResult<()> {
    let key = format!(
        "{}:{}:{}:{}",
        state.seed,
        state.turn,
        actor_uid,
        trigger.as_str()
    );
    let mut rng = BattleRng::new(&key);

    let Some(actor) = state.unit(actor_uid) else {
        return Ok(());
    };
    let own = actor
        .def
        .ability
        .clone()
        .filter(|a| a.trigger == trigger);
    let from_items: Vec<Ability> = actor
        .items
        .iter()
        .filter_map(|item| item.ability.clone())
        .filter(|a| a.trigger == trigger)
        .collect();

    if own.is_some() || !from_items.is_empty() {
        trace!("trigger {} fires for {}", trigger.as_str(), actor_uid);
    }
    if let Some(ability) = own {
        run_ability(state, actor_uid, &ability, &mut rng)?;
    }
    for ability in from_items {
        run_ability(state, actor_uid, &ability, &mut rng)?;
    }
    Ok(())
}
