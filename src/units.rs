//! The unit definition table: pure data, no behavior.

use crate::types::{Ability, Effect, StatusName, SummonRow, Target, Trigger, UnitDef};

/// Every unit in the game, keyed by id through the catalog.
pub fn all_units() -> Vec<UnitDef> {
    vec![
        UnitDef::new("wolf_pup", "Wolf pup", 1, &["Beast"], 3, 2).with_ability(Ability::new(
            Trigger::OnStart,
            vec![Effect::Buff {
                target: Target::SelfUnit,
                atk: 1,
                hp: 0,
            }],
        )),
        UnitDef::new("shield_rat", "Shield rat", 1, &["Beast", "Guardian"], 3, 1).with_ability(
            Ability::new(
                Trigger::OnStart,
                vec![Effect::Shield {
                    target: Target::AllyFront,
                    amount: 2,
                }],
            ),
        ),
        UnitDef::new("spark_bot", "Spark bot", 1, &["Mech"], 3, 2).with_ability(Ability::new(
            Trigger::OnAttack,
            vec![Effect::Status {
                target: Target::SelfUnit,
                status: StatusName::Chain,
                amount: 1.0,
            }],
        )),
        UnitDef::new("bone_archer", "Bone archer", 1, &["Undead"], 2, 3).with_ability(
            Ability::new(
                Trigger::OnFaint,
                vec![Effect::Damage {
                    target: Target::EnemyFront,
                    amount: 2,
                }],
            ),
        ),
        UnitDef::new("apprentice", "Apprentice", 1, &["Mage"], 2, 2).with_ability(Ability::new(
            Trigger::OnStart,
            vec![Effect::Buff {
                target: Target::AllyRandom,
                atk: 1,
                hp: 0,
            }],
        )),
        UnitDef::new("berserker", "Berserker", 2, &["Beast"], 4, 3).with_ability(Ability::new(
            Trigger::OnHurt,
            vec![Effect::Buff {
                target: Target::SelfUnit,
                atk: 1,
                hp: 0,
            }],
        )),
        UnitDef::new("cleric", "Cleric", 2, &["Guardian", "Mage"], 3, 2).with_ability(
            Ability::new(
                Trigger::OnAttack,
                vec![Effect::Heal {
                    target: Target::AllyLowestHp,
                    amount: 2,
                }],
            ),
        ),
        UnitDef::new("venom_frog", "Venom frog", 2, &["Beast"], 3, 2).with_ability(Ability::new(
            Trigger::OnAttack,
            vec![Effect::Status {
                target: Target::EnemyFront,
                status: StatusName::Poison,
                amount: 1.0,
            }],
        )),
        UnitDef::new("steel_beetle", "Steel beetle", 2, &["Mech", "Guardian"], 4, 2).with_ability(
            Ability::new(
                Trigger::OnStart,
                vec![Effect::Shield {
                    target: Target::SelfUnit,
                    amount: 3,
                }],
            ),
        ),
        UnitDef::new("ranger", "Ranger", 2, &[], 3, 3).with_ability(Ability::new(
            Trigger::OnAttack,
            vec![Effect::Damage {
                target: Target::EnemyBack,
                amount: 1,
            }],
        )),
        UnitDef::new("necromancer", "Necromancer", 3, &["Undead", "Mage"], 3, 1).with_ability(
            Ability::new(
                Trigger::OnFaint,
                vec![Effect::Summon {
                    unit_id: "skeleton".to_string(),
                    count: 1,
                    position: SummonRow::Front,
                }],
            ),
        ),
        UnitDef::new("golem", "Golem", 3, &["Mech", "Guardian"], 6, 2).with_ability(Ability::new(
            Trigger::OnHurt,
            vec![Effect::Shield {
                target: Target::SelfUnit,
                amount: 2,
            }],
        )),
        UnitDef::new("assassin", "Assassin", 3, &[], 2, 4).with_ability(Ability::new(
            Trigger::OnAttack,
            vec![Effect::Damage {
                target: Target::EnemyBack,
                amount: 2,
            }],
        )),
        UnitDef::new("banner_captain", "Banner captain", 3, &["Guardian"], 3, 2).with_ability(
            Ability::new(
                Trigger::OnStart,
                vec![Effect::Buff {
                    target: Target::AllAllies,
                    atk: 1,
                    hp: 0,
                }],
            ),
        ),
        UnitDef::new("pyromancer", "Pyromancer", 4, &["Mage"], 3, 3).with_ability(Ability::new(
            Trigger::OnAttack,
            vec![Effect::Damage {
                target: Target::AllEnemies,
                amount: 1,
            }],
        )),
        UnitDef::new("tortoise", "Tortoise", 4, &["Beast", "Guardian"], 5, 1).with_ability(
            Ability::new(
                Trigger::OnStart,
                vec![Effect::Shield {
                    target: Target::AllAllies,
                    amount: 2,
                }],
            ),
        ),
        UnitDef::new("warlock", "Warlock", 4, &["Mage", "Undead"], 3, 3).with_ability(
            Ability::new(
                Trigger::OnStart,
                vec![Effect::Status {
                    target: Target::SelfUnit,
                    status: StatusName::LifestealPct,
                    amount: 0.5,
                }],
            ),
        ),
        UnitDef::new("war_golem", "War golem", 4, &["Mech"], 6, 3).with_ability(Ability::new(
            Trigger::OnStart,
            vec![Effect::Buff {
                target: Target::AllAllies,
                atk: 1,
                hp: 1,
            }],
        )),
        UnitDef::new("phoenix", "Phoenix", 5, &["Mage", "Beast"], 4, 4).with_ability(
            Ability::new(
                Trigger::OnFaint,
                vec![Effect::Status {
                    target: Target::SelfUnit,
                    status: StatusName::RevivePct,
                    amount: 0.5,
                }],
            ),
        ),
        UnitDef::new("skeleton", "Skeleton", 1, &["Undead"], 1, 1),
    ]
}
