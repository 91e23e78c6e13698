//! Stock team presets consumed by roster UIs and the test suite.

use crate::types::{Position, TeamId, UnitSpec};

/// A named, ready-to-play roster template.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPreset {
    pub name: &'static str,
    pub members: Vec<PresetMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresetMember {
    pub def_id: &'static str,
    pub level: u8,
    pub row: u8,
    pub col: u8,
    pub item_ids: Vec<&'static str>,
}

impl TeamPreset {
    /// Convert into the factory's roster shape for the given side.
    pub fn roster(&self, team: TeamId) -> Vec<UnitSpec> {
        self.members
            .iter()
            .map(|m| UnitSpec {
                team,
                def_id: m.def_id.to_string(),
                level: m.level,
                pos: Position::new(m.row, m.col),
                item_ids: m.item_ids.iter().map(|i| i.to_string()).collect(),
            })
            .collect()
    }
}

fn member(def_id: &'static str, row: u8, col: u8) -> PresetMember {
    PresetMember {
        def_id,
        level: 1,
        row,
        col,
        item_ids: Vec::new(),
    }
}

pub fn team_presets() -> Vec<TeamPreset> {
    vec![
        TeamPreset {
            name: "beast brigade",
            members: vec![
                member("shield_rat", 0, 0),
                member("berserker", 0, 1),
                member("venom_frog", 0, 2),
                member("wolf_pup", 1, 0),
                member("tortoise", 1, 1),
                member("banner_captain", 1, 2),
                member("ranger", 1, 3),
            ],
        },
        TeamPreset {
            name: "mecha line",
            members: vec![
                member("steel_beetle", 0, 0),
                member("golem", 0, 1),
                member("war_golem", 0, 2),
                member("spark_bot", 1, 0),
                member("spark_bot", 1, 1),
                member("ranger", 1, 2),
                member("pyromancer", 1, 3),
            ],
        },
        TeamPreset {
            name: "undead rising",
            members: vec![
                member("bone_archer", 0, 0),
                member("necromancer", 0, 1),
                member("warlock", 0, 2),
                member("skeleton", 1, 0),
                member("skeleton", 1, 1),
                member("banner_captain", 1, 2),
                member("ranger", 1, 3),
            ],
        },
        TeamPreset {
            name: "mages only",
            members: vec![
                member("apprentice", 0, 0),
                member("pyromancer", 0, 1),
                member("warlock", 0, 2),
                member("necromancer", 1, 0),
                member("apprentice", 1, 1),
                member("banner_captain", 1, 2),
                member("ranger", 1, 3),
            ],
        },
        TeamPreset {
            name: "shields up",
            members: vec![
                member("steel_beetle", 0, 0),
                member("tortoise", 0, 1),
                member("golem", 0, 2),
                member("shield_rat", 1, 0),
                member("cleric", 1, 1),
                member("banner_captain", 1, 2),
                member("ranger", 1, 3),
            ],
        },
        TeamPreset {
            name: "ranged pressure",
            members: vec![
                member("ranger", 0, 0),
                member("bone_archer", 0, 1),
                member("pyromancer", 0, 2),
                member("cleric", 1, 0),
                member("apprentice", 1, 1),
                member("banner_captain", 1, 2),
                member("spark_bot", 1, 3),
            ],
        },
        TeamPreset {
            name: "assassin strike",
            members: vec![
                member("assassin", 0, 0),
                member("assassin", 0, 1),
                member("ranger", 0, 2),
                member("wolf_pup", 1, 0),
                member("cleric", 1, 1),
                member("banner_captain", 1, 2),
                member("spark_bot", 1, 3),
            ],
        },
        TeamPreset {
            name: "balanced seven",
            members: vec![
                member("shield_rat", 0, 0),
                member("ranger", 0, 1),
                member("venom_frog", 0, 2),
                member("wolf_pup", 1, 0),
                member("golem", 1, 1),
                member("banner_captain", 1, 2),
                member("pyromancer", 1, 3),
            ],
        },
        TeamPreset {
            name: "phoenix trial",
            members: vec![
                member("phoenix", 0, 0),
                member("golem", 0, 1),
                member("war_golem", 0, 2),
                member("pyromancer", 0, 3),
                member("cleric", 1, 0),
                member("apprentice", 1, 1),
                member("banner_captain", 1, 2),
                member("ranger", 1, 3),
            ],
        },
        TeamPreset {
            name: "starter gauntlet",
            members: vec![
                member("wolf_pup", 0, 0),
                member("shield_rat", 0, 1),
                member("bone_archer", 0, 2),
                member("apprentice", 1, 0),
                member("ranger", 1, 1),
                member("spark_bot", 1, 2),
                member("steel_beetle", 1, 3),
            ],
        },
        TeamPreset {
            name: "full army",
            members: vec![
                member("shield_rat", 0, 0),
                member("wolf_pup", 0, 1),
                member("berserker", 0, 2),
                member("tortoise", 0, 3),
                member("golem", 0, 4),
                member("war_golem", 0, 5),
                member("assassin", 0, 6),
                member("phoenix", 0, 7),
                member("ranger", 1, 0),
                member("bone_archer", 1, 1),
                member("pyromancer", 1, 2),
                member("warlock", 1, 3),
                member("necromancer", 1, 4),
                member("cleric", 1, 5),
                member("apprentice", 1, 6),
                member("banner_captain", 1, 7),
            ],
        },
    ]
}
