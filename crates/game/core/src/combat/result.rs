//! Combat result types and attack resolution.

use crate::config::RulesConfig;
use crate::stats::{CombatSnapshot, Element, Multiplier};

use super::damage::{DamageType, ether_damage, physical_damage};
use super::dodge::{
    EtherDodgeParams, PhysicalDodgeParams, check_dodge, ether_dodge_chance, physical_dodge_chance,
};

/// What kind of attack is being resolved, with its caller-supplied modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    Physical {
        skill_modifier: i32,
        facing_bonus: i32,
    },
    Ether {
        ability_power: u32,
        /// Element of the ability; the defender's resistance to it scales
        /// `element_bonus`. `None` is non-elemental.
        element: Option<Element>,
        element_bonus: Multiplier,
        area_of_effect: bool,
    },
}

impl AttackKind {
    pub fn damage_type(&self) -> DamageType {
        match self {
            Self::Physical { .. } => DamageType::Physical,
            Self::Ether { .. } => DamageType::Ether,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackParams {
    pub kind: AttackKind,
    pub terrain_bonus: i32,
}

impl AttackParams {
    /// Plain weapon strike on neutral terrain.
    pub const fn basic() -> Self {
        Self {
            kind: AttackKind::Physical {
                skill_modifier: 0,
                facing_bonus: 0,
            },
            terrain_bonus: 0,
        }
    }
}

/// Random rolls consumed by one attack, each in `0..100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRolls {
    pub dodge: u32,
    pub crit: u32,
}

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackOutcome {
    /// The defender dodged.
    Dodged,
    /// Attack hit the target.
    Hit,
    /// Critical hit.
    Critical,
}

/// Result of a combat resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,

    /// Dodge chance the defender had, in percent.
    pub dodge_chance: u32,

    /// Damage dealt (None if dodged).
    pub damage: Option<u32>,
}

impl AttackResult {
    pub fn damage_dealt(&self) -> u32 {
        self.damage.unwrap_or(0)
    }
}

/// Resolve a complete attack: dodge check, crit check, then damage.
///
/// The attacker's accuracy stands in for dexterity and its ether control for
/// intelligence. Ether attacks fold the defender's resistance to their
/// element into the element bonus. A crit roll below the attacker's crit
/// chance multiplies damage by `config.crit_multiplier` before the damage cap.
pub fn resolve_attack(
    attacker: &CombatSnapshot,
    defender: &CombatSnapshot,
    params: &AttackParams,
    rolls: AttackRolls,
    config: &RulesConfig,
) -> AttackResult {
    // 1. Dodge
    let dodge_chance = match params.kind {
        AttackKind::Physical { facing_bonus, .. } => physical_dodge_chance(
            defender,
            &PhysicalDodgeParams {
                attacker_dex: attacker.derived.accuracy,
                terrain_bonus: params.terrain_bonus,
                facing_bonus,
            },
        ),
        AttackKind::Ether { area_of_effect, .. } => ether_dodge_chance(
            defender,
            &EtherDodgeParams {
                attacker_int: attacker.profile.ether_control,
                terrain_bonus: params.terrain_bonus,
                area_of_effect,
            },
        ),
    };

    if check_dodge(dodge_chance, rolls.dodge) {
        return AttackResult {
            outcome: AttackOutcome::Dodged,
            dodge_chance,
            damage: None,
        };
    }

    // 2. Critical
    let critical = rolls.crit < attacker.derived.crit_percent;
    let multiplier = critical.then_some(config.crit_multiplier);

    // 3. Damage
    let damage = match params.kind {
        AttackKind::Physical { skill_modifier, .. } => {
            physical_damage(&attacker.derived, &defender.derived, skill_modifier, multiplier)
        }
        AttackKind::Ether {
            ability_power,
            element,
            element_bonus,
            ..
        } => {
            let bonus = match element {
                Some(element) => defender.resist_adjusted(element, element_bonus),
                None => element_bonus,
            };
            ether_damage(&attacker.derived, &defender.derived, ability_power, bonus, multiplier)
        }
    };

    AttackResult {
        outcome: if critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        dodge_chance,
        damage: Some(damage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{RaceModifierSet, StatProfile};

    fn snapshot(value: u32) -> CombatSnapshot {
        CombatSnapshot::at_full(&StatProfile::uniform(value), &RaceModifierSet::BASELINE)
    }

    #[test]
    fn low_dodge_roll_avoids_damage() {
        let (attacker, defender) = (snapshot(10), snapshot(10));
        // AVD 25, AGI 10, DEX 15: 10 + 2 - 4.5 = 7.5%
        let result = resolve_attack(
            &attacker,
            &defender,
            &AttackParams::basic(),
            AttackRolls { dodge: 3, crit: 99 },
            &RulesConfig::default(),
        );

        assert_eq!(result.outcome, AttackOutcome::Dodged);
        assert_eq!(result.dodge_chance, 7);
        assert_eq!(result.damage_dealt(), 0);
    }

    #[test]
    fn hit_and_critical() {
        let (attacker, defender) = (snapshot(10), snapshot(10));
        let config = RulesConfig::default();

        let hit = resolve_attack(
            &attacker,
            &defender,
            &AttackParams::basic(),
            AttackRolls { dodge: 50, crit: 50 },
            &config,
        );
        assert_eq!(hit.outcome, AttackOutcome::Hit);
        assert_eq!(hit.damage, Some(25));

        // crit chance is 5%
        let crit = resolve_attack(
            &attacker,
            &defender,
            &AttackParams::basic(),
            AttackRolls { dodge: 50, crit: 4 },
            &config,
        );
        assert_eq!(crit.outcome, AttackOutcome::Critical);
        assert_eq!(crit.damage, Some(37));
    }

    #[test]
    fn ether_attack_uses_ether_formulas() {
        let (attacker, defender) = (snapshot(10), snapshot(10));
        let params = AttackParams {
            kind: AttackKind::Ether {
                ability_power: 10,
                element: None,
                element_bonus: Multiplier::ONE,
                area_of_effect: true,
            },
            terrain_bonus: 0,
        };

        let result = resolve_attack(
            &attacker,
            &defender,
            &params,
            AttackRolls { dodge: 40, crit: 99 },
            &RulesConfig::default(),
        );

        // 7.5 + 2 - 3 = 6.5%, halved to 3.25%
        assert_eq!(result.dodge_chance, 3);
        assert_eq!(result.damage, Some(36));
        assert_eq!(params.kind.damage_type(), DamageType::Ether);
    }

    #[test]
    fn defender_resistance_scales_element_bonus() {
        let attacker = snapshot(10);
        let warded = CombatSnapshot::at_full(
            &StatProfile::uniform(10),
            &RaceModifierSet::BASELINE.with_resistance(Element::Fire, 50),
        );
        let fire = AttackParams {
            kind: AttackKind::Ether {
                ability_power: 10,
                element: Some(Element::Fire),
                element_bonus: Multiplier(150),
                area_of_effect: false,
            },
            terrain_bonus: 0,
        };
        let rolls = AttackRolls { dodge: 99, crit: 99 };
        let config = RulesConfig::default();

        // (28 × 1.5 + 10) × 0.75 - 20 × 0.8 = 23
        assert_eq!(resolve_attack(&attacker, &warded, &fire, rolls, &config).damage, Some(23));
        // Unresisted: 52 × 1.5 - 16 = 62
        assert_eq!(resolve_attack(&attacker, &snapshot(10), &fire, rolls, &config).damage, Some(62));
    }
}
