//! The item definition table: pure data, no behavior.

use crate::types::{Ability, Effect, ItemDef, StatusName, SummonRow, Target, Trigger};

/// Every item in the game, keyed by id through the catalog.
pub fn all_items() -> Vec<ItemDef> {
    vec![
        ItemDef::new("apple", "Apple", "Buff: +1/+1 this battle").with_ability(Ability::new(
            Trigger::OnStart,
            vec![Effect::Buff {
                target: Target::SelfUnit,
                atk: 1,
                hp: 1,
            }],
        )),
        ItemDef::new("armor_plate", "Armor plate", "Gain shield(3)").with_ability(Ability::new(
            Trigger::OnStart,
            vec![Effect::Shield {
                target: Target::SelfUnit,
                amount: 3,
            }],
        )),
        ItemDef::new("venom_vial", "Venom vial", "Next hits apply poison(1)").with_ability(
            Ability::new(
                Trigger::OnStart,
                vec![Effect::Status {
                    target: Target::SelfUnit,
                    status: StatusName::PoisonOnHit,
                    amount: 1.0,
                }],
            ),
        ),
        ItemDef::new("spikes", "Spikes", "Thorns(1)").with_ability(Ability::new(
            Trigger::OnStart,
            vec![Effect::Status {
                target: Target::SelfUnit,
                status: StatusName::Thorns,
                amount: 1.0,
            }],
        )),
        ItemDef::new("war_banner", "War banner", "+1 atk to all allies").with_ability(
            Ability::new(
                Trigger::OnStart,
                vec![Effect::Buff {
                    target: Target::AllAllies,
                    atk: 1,
                    hp: 0,
                }],
            ),
        ),
        ItemDef::new("quick_glove", "Quick glove", "+1 attack bonus damage").with_ability(
            Ability::new(
                Trigger::OnStart,
                vec![Effect::Status {
                    target: Target::SelfUnit,
                    status: StatusName::AttackBonus,
                    amount: 1.0,
                }],
            ),
        ),
        ItemDef::new("leech_fang", "Leech fang", "Lifesteal 30%").with_ability(Ability::new(
            Trigger::OnStart,
            vec![Effect::Status {
                target: Target::SelfUnit,
                status: StatusName::LifestealPct,
                amount: 0.3,
            }],
        )),
        ItemDef::new("storm_rod", "Storm rod", "Chain(1) on attack").with_ability(Ability::new(
            Trigger::OnStart,
            vec![Effect::Status {
                target: Target::SelfUnit,
                status: StatusName::Chain,
                amount: 1.0,
            }],
        )),
        ItemDef::new("summon_charm", "Summon charm", "On faint, summon a Skeleton").with_ability(
            Ability::new(
                Trigger::OnFaint,
                vec![Effect::Summon {
                    unit_id: "skeleton".to_string(),
                    count: 1,
                    position: SummonRow::Front,
                }],
            ),
        ),
        ItemDef::new("healer_kit", "Healer kit", "Heal self 1 on attack").with_ability(
            Ability::new(
                Trigger::OnAttack,
                vec![Effect::Status {
                    target: Target::SelfUnit,
                    status: StatusName::OnAttackHeal,
                    amount: 1.0,
                }],
            ),
        ),
        ItemDef::new("guardian_oil", "Guardian oil", "Shield 1 to ally front").with_ability(
            Ability::new(
                Trigger::OnStart,
                vec![Effect::Shield {
                    target: Target::AllyFront,
                    amount: 1,
                }],
            ),
        ),
        ItemDef::new("arcane_focus", "Arcane focus", "Empower: +1 atk").with_ability(Ability::new(
            Trigger::OnStart,
            vec![Effect::Buff {
                target: Target::SelfUnit,
                atk: 1,
                hp: 0,
            }],
        )),
    ]
}
