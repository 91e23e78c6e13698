//! Definition catalog: closed, process-wide-constant unit and item tables.
//!
//! Lookups hand out independent deep copies so runtime mutation (buffs)
//! can never corrupt the shared tables or leak across battles.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::{BattleError, BattleResult};
use crate::types::{Effect, ItemDef, UnitDef};

fn unit_index() -> &'static BTreeMap<String, UnitDef> {
    static INDEX: OnceLock<BTreeMap<String, UnitDef>> = OnceLock::new();
    INDEX.get_or_init(|| {
        crate::units::all_units()
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect()
    })
}

fn item_index() -> &'static BTreeMap<String, ItemDef> {
    static INDEX: OnceLock<BTreeMap<String, ItemDef>> = OnceLock::new();
    INDEX.get_or_init(|| {
        crate::items::all_items()
            .into_iter()
            .map(|i| (i.id.clone(), i))
            .collect()
    })
}

/// Deep copy of a unit definition. Unknown ids are a content bug and fail.
pub fn get_unit_def(id: &str) -> BattleResult<UnitDef> {
    unit_index()
        .get(id)
        .cloned()
        .ok_or_else(|| BattleError::UnknownUnit(id.to_string()))
}

/// Deep copy of an item definition. Unknown ids are a content bug and fail.
pub fn get_item_def(id: &str) -> BattleResult<ItemDef> {
    item_index()
        .get(id)
        .cloned()
        .ok_or_else(|| BattleError::UnknownItem(id.to_string()))
}

fn invalid(id: &str, reason: &str) -> BattleError {
    BattleError::InvalidCatalog {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}

fn check_effects(id: &str, effects: &[Effect]) -> BattleResult<()> {
    for effect in effects {
        if let Effect::Summon { unit_id, count, .. } = effect {
            if !unit_index().contains_key(unit_id) {
                return Err(invalid(id, "summon references an unknown unit"));
            }
            if *count == 0 {
                return Err(invalid(id, "summon count must be at least 1"));
            }
        }
    }
    Ok(())
}

/// Load-time validation of both tables: unique ids, tier in 1-5, ability
/// chance in [0, 1], summon references resolving to real units. Trigger,
/// target and status keywords are closed enums and need no runtime check.
pub fn validate_catalog() -> BattleResult<()> {
    let units = crate::units::all_units();
    let mut seen = BTreeMap::new();
    for unit in &units {
        if seen.insert(unit.id.clone(), ()).is_some() {
            return Err(invalid(&unit.id, "duplicate unit id"));
        }
        if !(1..=5).contains(&unit.tier) {
            return Err(invalid(&unit.id, "tier must be within 1-5"));
        }
        if let Some(ability) = &unit.ability {
            if let Some(chance) = ability.chance {
                if !(0.0..=1.0).contains(&chance) {
                    return Err(invalid(&unit.id, "ability chance must be within [0, 1]"));
                }
            }
            check_effects(&unit.id, &ability.effects)?;
        }
    }

    let items = crate::items::all_items();
    let mut seen = BTreeMap::new();
    for item in &items {
        if seen.insert(item.id.clone(), ()).is_some() {
            return Err(invalid(&item.id, "duplicate item id"));
        }
        if let Some(ability) = &item.ability {
            if let Some(chance) = ability.chance {
                if !(0.0..=1.0).contains(&chance) {
                    return Err(invalid(&item.id, "ability chance must be within [0, 1]"));
                }
            }
            check_effects(&item.id, &ability.effects)?;
        }
    }
    Ok(())
}
