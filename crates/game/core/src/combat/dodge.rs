//! Dodge chance calculations.
//!
//! Coefficients are evaluated in tenths of a percent so the result is exact;
//! the final percentage is truncated.

use crate::config::RulesConfig;
use crate::stats::CombatSnapshot;

/// Attacker-side inputs to a physical dodge check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalDodgeParams {
    /// Attacker dexterity (accuracy).
    pub attacker_dex: u32,
    /// Percentage points granted or removed by terrain.
    pub terrain_bonus: i32,
    /// Percentage points from attack direction (rear attacks are negative).
    pub facing_bonus: i32,
}

/// Attacker-side inputs to an ether dodge check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EtherDodgeParams {
    /// Attacker intelligence (ether control).
    pub attacker_int: u32,
    pub terrain_bonus: i32,
    pub area_of_effect: bool,
}

/// Physical dodge chance in percent.
///
/// ```text
/// clamp(AVD × 0.4 + AGI × 0.2 - DEX × 0.3 + terrain + facing, 0, 75)
/// ```
pub fn physical_dodge_chance(defender: &CombatSnapshot, params: &PhysicalDodgeParams) -> u32 {
    let tenths = i64::from(defender.derived.avoidance) * 4 + i64::from(defender.profile.agility) * 2
        - i64::from(params.attacker_dex) * 3
        + i64::from(params.terrain_bonus) * 10
        + i64::from(params.facing_bonus) * 10;

    clamp_tenths(tenths, RulesConfig::MAX_DODGE_PHYSICAL)
}

/// Ether dodge chance in percent.
///
/// ```text
/// clamp(AVD × 0.3 + AGI × 0.2 - INT × 0.3 + terrain, 0, 60)
/// ```
///
/// Area-of-effect halves the raw chance before the clamp.
pub fn ether_dodge_chance(defender: &CombatSnapshot, params: &EtherDodgeParams) -> u32 {
    let mut tenths = i64::from(defender.derived.avoidance) * 3
        + i64::from(defender.profile.agility) * 2
        - i64::from(params.attacker_int) * 3
        + i64::from(params.terrain_bonus) * 10;

    if params.area_of_effect {
        tenths /= 2;
    }

    clamp_tenths(tenths, RulesConfig::MAX_DODGE_ETHER)
}

/// A roll in `0..100` dodges when it falls below the chance.
pub fn check_dodge(chance: u32, roll: u32) -> bool {
    roll < chance
}

fn clamp_tenths(tenths: i64, max_percent: u32) -> u32 {
    (tenths.clamp(0, i64::from(max_percent) * 10) / 10) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{DerivedStats, RaceModifierSet, ResourcePools, StatProfile};

    fn defender(avoidance: u32, agility: u32) -> CombatSnapshot {
        let profile = StatProfile {
            agility,
            ..StatProfile::default()
        };
        let derived = DerivedStats {
            avoidance,
            ..DerivedStats::from_profile(&profile)
        };
        CombatSnapshot {
            profile,
            derived,
            pools: ResourcePools::at_max(&derived),
            resistances: Default::default(),
        }
    }

    #[test]
    fn physical_dodge_example() {
        let params = PhysicalDodgeParams {
            attacker_dex: 30,
            ..Default::default()
        };
        assert_eq!(physical_dodge_chance(&defender(40, 20), &params), 11);
    }

    #[test]
    fn physical_dodge_applies_terrain_and_facing() {
        let params = PhysicalDodgeParams {
            attacker_dex: 30,
            terrain_bonus: 5,
            facing_bonus: -10,
        };
        assert_eq!(physical_dodge_chance(&defender(40, 20), &params), 6);
    }

    #[test]
    fn dodge_chances_are_clamped() {
        let nimble = CombatSnapshot::at_full(&StatProfile::uniform(200), &RaceModifierSet::BASELINE);
        assert_eq!(physical_dodge_chance(&nimble, &PhysicalDodgeParams::default()), 75);
        assert_eq!(ether_dodge_chance(&nimble, &EtherDodgeParams::default()), 60);

        let clumsy = defender(0, 0);
        let params = PhysicalDodgeParams {
            attacker_dex: 50,
            terrain_bonus: -20,
            facing_bonus: 0,
        };
        assert_eq!(physical_dodge_chance(&clumsy, &params), 0);
    }

    #[test]
    fn area_of_effect_halves_before_clamp() {
        let target = CombatSnapshot::at_full(&StatProfile::uniform(10), &RaceModifierSet::BASELINE);
        let single = EtherDodgeParams::default();
        let area = EtherDodgeParams {
            area_of_effect: true,
            ..single
        };

        // AVD 25, AGI 10: 7.5 + 2.0 = 9.5%
        assert_eq!(ether_dodge_chance(&target, &single), 9);
        assert_eq!(ether_dodge_chance(&target, &area), 4);

        // 95% raw halves to 47.5%, under the 60% cap.
        assert_eq!(ether_dodge_chance(&defender(250, 100), &area), 47);
    }

    #[test]
    fn roll_below_chance_dodges() {
        assert!(check_dodge(11, 10));
        assert!(!check_dodge(11, 11));
        assert!(!check_dodge(0, 0));
    }
}
