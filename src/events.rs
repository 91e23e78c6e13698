//! The battle event log: the sole external contract of the engine.
//!
//! Events are appended in simulation order and consumed by presentation
//! layers as a replay script. Consumers key off the `t` discriminant and
//! must ignore event kinds they do not animate.

use serde::{Deserialize, Serialize};

use crate::types::{StatusName, TeamId, Winner};

/// One immutable, ordered record of a state transition during a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "camelCase")]
pub enum BattleLogEvent {
    /// Always the first entry of a log.
    Start,
    /// One per roster unit, all of team A (roster order) then all of team B.
    /// Presentation layers depend on this ordering for initial layout.
    #[serde(rename_all = "camelCase")]
    Spawn {
        unit: String,
        team: TeamId,
        row: u8,
        col: u8,
    },
    /// An attack strike. Appended after the damage events it caused.
    #[serde(rename_all = "camelCase")]
    Attack {
        attacker: String,
        defender: String,
        amount: i32,
    },
    /// Actual hp lost, after shield absorption. `source` is absent for
    /// start-of-turn poison ticks.
    #[serde(rename_all = "camelCase")]
    Damage {
        target: String,
        amount: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Heal {
        target: String,
        amount: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },
    /// Shield events carry the cumulative magnitude after the addition;
    /// other statuses carry the added magnitude.
    #[serde(rename_all = "camelCase")]
    Status {
        target: String,
        status: StatusName,
        amount: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Faint {
        unit: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        by: Option<String>,
    },
    /// Logged in place of a faint when the one-shot revive fires.
    #[serde(rename_all = "camelCase")]
    Revive { unit: String, hp: i32 },
    #[serde(rename_all = "camelCase")]
    Summon {
        unit: String,
        spawned_uid: String,
        team: TeamId,
        unit_id: String,
        row: u8,
        col: u8,
    },
    /// Always the last entry of a log.
    #[serde(rename_all = "camelCase")]
    End { winner: Winner },
}
