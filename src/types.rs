//! Core data model: triggers, targets, statuses, effects, definitions and
//! runtime battle state.
//!
//! Catalog-owned types ([`UnitDef`], [`ItemDef`], [`Ability`], [`Effect`]) are
//! immutable once loaded; runtime entities own independent deep copies so
//! in-battle buffs can never corrupt the shared tables.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Columns per team side (0..7).
pub const BOARD_WIDTH: u8 = 8;
/// Rows per team side (0 = front, 1 = back).
pub const BOARD_HEIGHT: u8 = 2;
/// Hard ceiling on hp after buffs; damage floors at 0.
pub const HP_CAP: i32 = 9999;

/// The two sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    /// The opposing side.
    pub fn enemy(self) -> TeamId {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamId::A => write!(f, "A"),
            TeamId::B => write!(f, "B"),
        }
    }
}

/// Named combat event points that activate abilities.
///
/// `OnHurt` and `OnTurnStart` are valid catalog keywords but are not yet
/// wired into the turn loop; the engine dispatches `OnStart`, `OnAttack`
/// and `OnFaint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    OnStart,
    OnAttack,
    OnHurt,
    OnFaint,
    OnTurnStart,
}

impl Trigger {
    /// Keyword form, used in the per-invocation RNG key.
    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::OnStart => "onStart",
            Trigger::OnAttack => "onAttack",
            Trigger::OnHurt => "onHurt",
            Trigger::OnFaint => "onFaint",
            Trigger::OnTurnStart => "onTurnStart",
        }
    }
}

/// Target-selector keywords, resolved against living units at
/// effect-application time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    #[serde(rename = "self")]
    SelfUnit,
    AllyFront,
    AllyRandom,
    #[serde(rename = "allyLowestHP")]
    AllyLowestHp,
    EnemyFront,
    EnemyRandom,
    EnemyBack,
    AllAllies,
    AllEnemies,
}

/// Named status effects carried on a runtime unit.
///
/// Magnitudes are additive across applications, except shield (consumed
/// discretely by damage) and revivePct (consumed by the one-shot revive).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StatusName {
    Shield,
    Poison,
    Thorns,
    AttackBonus,
    Chain,
    LifestealPct,
    PoisonOnHit,
    OnAttackHeal,
    RevivePct,
}

/// Row preference for summoned units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummonRow {
    Front,
    Back,
}

impl SummonRow {
    pub fn preferred_row(self) -> u8 {
        match self {
            SummonRow::Front => 0,
            SummonRow::Back => 1,
        }
    }
}

/// A single effect inside an ability, applied in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Effect {
    /// Stat buff. Atk-only buffs are silent in the event log.
    #[serde(rename_all = "camelCase")]
    Buff {
        target: Target,
        #[serde(default)]
        atk: i32,
        #[serde(default)]
        hp: i32,
    },
    #[serde(rename_all = "camelCase")]
    Damage { target: Target, amount: i32 },
    #[serde(rename_all = "camelCase")]
    Heal { target: Target, amount: i32 },
    #[serde(rename_all = "camelCase")]
    Shield { target: Target, amount: i32 },
    #[serde(rename_all = "camelCase")]
    Status {
        target: Target,
        status: StatusName,
        amount: f64,
    },
    /// Summons always land on the caster's side; there is no target field.
    #[serde(rename_all = "camelCase")]
    Summon {
        unit_id: String,
        count: u32,
        position: SummonRow,
    },
}

impl Effect {
    /// The target keyword for targeted effects; `None` for summons.
    pub fn target(&self) -> Option<Target> {
        match self {
            Effect::Buff { target, .. }
            | Effect::Damage { target, .. }
            | Effect::Heal { target, .. }
            | Effect::Shield { target, .. }
            | Effect::Status { target, .. } => Some(*target),
            Effect::Summon { .. } => None,
        }
    }
}

/// A triggered ability: at most one per unit or item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub trigger: Trigger,
    /// Activation probability in [0, 1]; absent means always fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chance: Option<f64>,
    pub effects: Vec<Effect>,
}

impl Ability {
    pub fn new(trigger: Trigger, effects: Vec<Effect>) -> Self {
        Self {
            trigger,
            chance: None,
            effects,
        }
    }

    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = Some(chance);
        self
    }
}

/// Base combat stats of a unit definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    pub hp: i32,
    pub atk: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
}

/// Immutable catalog entry for a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDef {
    pub id: String,
    pub name: String,
    /// 1-5 rarity/cost classification, orthogonal to combat stats.
    pub tier: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tribe: Vec<String>,
    pub base: BaseStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<Ability>,
}

impl UnitDef {
    pub fn new(id: &str, name: &str, tier: u8, tribe: &[&str], hp: i32, atk: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            tier,
            tribe: tribe.iter().map(|t| t.to_string()).collect(),
            base: BaseStats {
                hp,
                atk,
                speed: None,
            },
            ability: None,
        }
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }
}

/// Immutable catalog entry for an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<Ability>,
}

impl ItemDef {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            ability: None,
        }
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }
}

/// Board position within one side's 2x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// One roster entry handed to the battle factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSpec {
    pub team: TeamId,
    pub def_id: String,
    pub level: u8,
    pub pos: Position,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_ids: Vec<String>,
}

/// The mutable combat entity. Owns a deep copy of its definition and its
/// resolved items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeUnit {
    pub uid: String,
    pub team: TeamId,
    pub def: UnitDef,
    pub level: u8,
    pub pos: Position,
    pub atk: i32,
    pub hp: i32,
    /// Baseline snapshot: ceiling for heals, reference for revive.
    pub base_hp: i32,
    pub base_atk: i32,
    pub speed: i32,
    pub alive: bool,
    /// One-shot flag: a unit can revive at most once per battle.
    pub revived: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub statuses: BTreeMap<StatusName, f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemDef>,
}

impl RuntimeUnit {
    /// Current magnitude of a status, 0 when absent.
    pub fn status(&self, name: StatusName) -> f64 {
        self.statuses.get(&name).copied().unwrap_or(0.0)
    }
}

/// One side's roster during a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamState {
    pub id: TeamId,
    pub units: Vec<RuntimeUnit>,
}

impl TeamState {
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            units: Vec::new(),
        }
    }
}

/// Winner discriminant of the terminal `end` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    A,
    B,
    Draw,
}

/// Full runtime state of one battle. Owned exclusively by one simulation;
/// the spawn sequence counter lives here so concurrent battles never share
/// ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleState {
    pub seed: String,
    pub turn: u32,
    pub team_a: TeamState,
    pub team_b: TeamState,
    /// Monotonic per-battle counter backing deterministic uids.
    pub spawn_seq: u32,
    pub log: Vec<crate::events::BattleLogEvent>,
}

impl BattleState {
    pub fn team(&self, id: TeamId) -> &TeamState {
        match id {
            TeamId::A => &self.team_a,
            TeamId::B => &self.team_b,
        }
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut TeamState {
        match id {
            TeamId::A => &mut self.team_a,
            TeamId::B => &mut self.team_b,
        }
    }

    /// Look up any unit, living or fainted, by uid.
    pub fn unit(&self, uid: &str) -> Option<&RuntimeUnit> {
        self.team_a
            .units
            .iter()
            .chain(self.team_b.units.iter())
            .find(|u| u.uid == uid)
    }

    pub fn unit_mut(&mut self, uid: &str) -> Option<&mut RuntimeUnit> {
        self.team_a
            .units
            .iter_mut()
            .chain(self.team_b.units.iter_mut())
            .find(|u| u.uid == uid)
    }
}
