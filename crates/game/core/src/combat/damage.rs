//! Damage calculation and application.

use crate::config::RulesConfig;
use crate::stats::{DerivedStats, Multiplier};

/// Damage category, selecting which attack and defense stats apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    /// Weapons and martial skills.
    Physical,
    /// Spells and ether abilities.
    Ether,
}

/// Largest damage a single hit may deal to `defender`: 60% of max HP, at least 1.
pub fn damage_cap(defender: &DerivedStats) -> u32 {
    let cap = u64::from(defender.max_hp) * u64::from(RulesConfig::DAMAGE_CAP_PERCENT) / 100;
    (cap as u32).max(1)
}

/// Physical damage.
///
/// ```text
/// max(ATK × 1.5 + skill_modifier - DEF × 0.8, 1), capped at 60% of target MaxHP
/// ```
///
/// A critical multiplier scales the value before the floor and cap.
pub fn physical_damage(
    attacker: &DerivedStats,
    defender: &DerivedStats,
    skill_modifier: i32,
    critical: Option<Multiplier>,
) -> u32 {
    let tenths = i64::from(attacker.attack) * 15 + i64::from(skill_modifier) * 10
        - i64::from(defender.defense) * 8;

    finish(tenths, 10, critical, defender)
}

/// Ether damage.
///
/// ```text
/// max((EATK × 1.5 + ability_power) × element_bonus - EDEF × 0.8, 1),
/// capped at 60% of target MaxHP
/// ```
///
/// `element_bonus` is supplied by the caller, typically already adjusted by
/// the target's racial resistance.
pub fn ether_damage(
    attacker: &DerivedStats,
    defender: &DerivedStats,
    ability_power: u32,
    element_bonus: Multiplier,
    critical: Option<Multiplier>,
) -> u32 {
    // tenths × hundredths = thousandths
    let base = i64::from(attacker.ether_attack) * 15 + i64::from(ability_power) * 10;
    let thousandths =
        base * i64::from(element_bonus.percent()) - i64::from(defender.ether_defense) * 800;

    finish(thousandths, 1000, critical, defender)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

fn finish(
    scaled: i64,
    denominator: i64,
    critical: Option<Multiplier>,
    defender: &DerivedStats,
) -> u32 {
    let scaled = match critical {
        Some(multiplier) => scaled.saturating_mul(i64::from(multiplier.percent())) / 100,
        None => scaled,
    };

    let whole = (scaled / denominator).clamp(1, i64::from(u32::MAX)) as u32;
    whole.min(damage_cap(defender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatProfile;

    fn stats(value: u32) -> DerivedStats {
        DerivedStats::from_profile(&StatProfile::uniform(value))
    }

    #[test]
    fn physical_damage_between_equals() {
        let even = stats(10);
        // 30 × 1.5 - 25 × 0.8 = 25
        assert_eq!(physical_damage(&even, &even, 0, None), 25);
        assert_eq!(physical_damage(&even, &even, 10, None), 35);
    }

    #[test]
    fn physical_damage_floor_and_cap() {
        assert_eq!(physical_damage(&stats(1), &stats(100), 0, None), 1);
        assert_eq!(physical_damage(&stats(1), &stats(100), -500, None), 1);

        let frail = stats(1);
        assert_eq!(damage_cap(&frail), 133);
        assert_eq!(physical_damage(&stats(100), &frail, 0, None), 133);
    }

    #[test]
    fn ether_damage_scales_with_element_bonus() {
        let even = stats(10);
        // (28 × 1.5 + 10) × 1.0 - 20 × 0.8 = 36
        assert_eq!(ether_damage(&even, &even, 10, Multiplier::ONE, None), 36);
        assert_eq!(ether_damage(&even, &even, 10, Multiplier::from_percent(150), None), 62);
        assert_eq!(ether_damage(&even, &even, 10, Multiplier::from_percent(0), None), 1);
    }

    #[test]
    fn critical_applies_before_cap() {
        let even = stats(10);
        let crit = Some(Multiplier::from_percent(150));
        assert_eq!(physical_damage(&even, &even, 0, crit), 37);
        assert_eq!(physical_damage(&stats(100), &stats(1), 0, crit), 133);
    }

    #[test]
    fn damage_stays_within_bounds() {
        for attacker in [1, 5, 20, 60, 150] {
            for defender in [1, 5, 20, 60, 150] {
                let (a, d) = (stats(attacker), stats(defender));
                for damage in [
                    physical_damage(&a, &d, 15, None),
                    ether_damage(&a, &d, 40, Multiplier::from_percent(175), None),
                ] {
                    assert!(damage >= 1);
                    assert!(damage <= damage_cap(&d));
                }
            }
        }
    }

    #[test]
    fn apply_damage_saturates() {
        assert_eq!(apply_damage(50, 20), 30);
        assert_eq!(apply_damage(10, 25), 0);
    }
}
