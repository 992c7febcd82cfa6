//! Derived Stats - combat statistics computed from the training profile.
//!
//! These are NOT stored - always recomputed from the profile and the race
//! modifiers whenever either changes. All coefficients are evaluated in exact
//! integer tenths so the same inputs produce the same snapshot everywhere.

use crate::config::RulesConfig;

use super::profile::StatProfile;
use super::race::{RaceModifierSet, RaceTable};

/// Derived combat statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// Maximum hit points.
    pub max_hp: u32,

    /// Maximum ether resource pool.
    pub max_resource: u32,

    /// Resource regained per regeneration tick.
    pub resource_regen: u32,

    /// Physical attack power.
    pub attack: u32,

    /// Physical damage reduction.
    pub defense: u32,

    /// Ether attack power.
    pub ether_attack: u32,

    /// Ether damage reduction.
    pub ether_defense: u32,

    /// Evasion rating feeding both dodge formulas.
    pub avoidance: u32,

    pub accuracy: u32,

    /// Critical strike chance in whole percent.
    pub crit_percent: u32,

    /// Tiles per move action.
    pub movement: u32,

    /// Maximum climbable height difference.
    pub jump: u32,

    /// Recovery time before action weight is added, in `[MIN_RT, MAX_RT]`.
    pub base_rt: u32,
}

impl DerivedStats {
    pub const MAX_MOVE: u32 = 7;
    pub const MAX_JUMP: u32 = 5;

    /// Compute derived stats from a profile and a race modifier set.
    ///
    /// Formulas (race scalars applied after the additive base, then truncated):
    /// - MaxHP: (200 + END × 15 + STA × 8) × hp
    /// - MaxResource: (100 + ETC × 20 + STA × 5) × resource
    /// - ResourceRegen: ETC × 0.8 × regen
    /// - Attack: (STR × 2.5 + SPD × 0.5) × attack
    /// - EtherAttack: (ETC × 2.5 + AGI × 0.3) × ether_attack
    /// - Defense: END × 2.0 + STA × 0.5
    /// - EtherDefense: ETC + END
    /// - Avoidance: (AGI × 1.5 + SPD) × avoidance
    /// - Accuracy: AGI + SPD × 0.5
    /// - CritPercent: SPD × 0.3 + AGI × 0.2
    /// - Move: min(4 + SPD / 15, 7)
    /// - Jump: min(2 + STR / 20, 5)
    /// - BaseRT: clamp(100 - SPD / 5, 80, 150)
    pub fn derive(profile: &StatProfile, race: &RaceModifierSet) -> Self {
        let strength = u64::from(profile.strength);
        let speed = u64::from(profile.speed);
        let agility = u64::from(profile.agility);
        let endurance = u64::from(profile.endurance);
        let stamina = u64::from(profile.stamina);
        let ether = u64::from(profile.ether_control);

        Self {
            max_hp: race.hp.apply(200 + endurance * 15 + stamina * 8, 1),
            max_resource: race.resource.apply(100 + ether * 20 + stamina * 5, 1),
            resource_regen: race.regen.apply(ether * 8, 10),
            attack: race.attack.apply(strength * 25 + speed * 5, 10),
            ether_attack: race.ether_attack.apply(ether * 25 + agility * 3, 10),
            defense: tenths(endurance * 20 + stamina * 5),
            ether_defense: saturate(ether + endurance),
            avoidance: race.avoidance.apply(agility * 15 + speed * 10, 10),
            accuracy: tenths(agility * 10 + speed * 5),
            crit_percent: tenths(speed * 3 + agility * 2),
            movement: (4 + profile.speed / 15).min(Self::MAX_MOVE),
            jump: (2 + profile.strength / 20).min(Self::MAX_JUMP),
            base_rt: base_recovery_time(profile.speed),
        }
    }

    /// Derived stats with the baseline race set.
    pub fn from_profile(profile: &StatProfile) -> Self {
        Self::derive(profile, &RaceModifierSet::BASELINE)
    }
}

impl RaceTable {
    /// Derive stats for a race key; unknown keys use the baseline set.
    pub fn derive(&self, profile: &StatProfile, race_key: &str) -> DerivedStats {
        DerivedStats::derive(profile, self.lookup(race_key))
    }
}

/// clamp(100 - speed / 5, MIN_RT, MAX_RT)
pub fn base_recovery_time(speed: u32) -> u32 {
    let raw = 100_i64 - i64::from(speed / 5);
    raw.clamp(i64::from(RulesConfig::MIN_RT), i64::from(RulesConfig::MAX_RT)) as u32
}

fn tenths(value: u64) -> u32 {
    saturate(value / 10)
}

fn saturate(value: u64) -> u32 {
    value.min(u64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Multiplier;

    #[test]
    fn baseline_hp_example() {
        let profile = StatProfile::new(0, 0, 0, 10, 10, 0);
        let derived = DerivedStats::derive(&profile, &RaceModifierSet::BASELINE);
        assert_eq!(derived.max_hp, 430);
    }

    #[test]
    fn balanced_ten_profile() {
        let derived = DerivedStats::from_profile(&StatProfile::uniform(10));

        assert_eq!(derived.max_hp, 430);
        assert_eq!(derived.max_resource, 350);
        assert_eq!(derived.resource_regen, 8);
        assert_eq!(derived.attack, 30);
        assert_eq!(derived.ether_attack, 28);
        assert_eq!(derived.defense, 25);
        assert_eq!(derived.ether_defense, 20);
        assert_eq!(derived.avoidance, 25);
        assert_eq!(derived.accuracy, 15);
        assert_eq!(derived.crit_percent, 5);
        assert_eq!(derived.movement, 4);
        assert_eq!(derived.jump, 2);
        assert_eq!(derived.base_rt, 98);
    }

    #[test]
    fn race_scalars_apply_after_base() {
        let table = RaceTable::standard();
        let profile = StatProfile::uniform(10);
        let derived = DerivedStats::derive(&profile, table.lookup("Gorath"));

        // 430 × 1.25 = 537.5
        assert_eq!(derived.max_hp, 537);
        // 30 × 1.20 = 36
        assert_eq!(derived.attack, 36);
        // 28 × 0.90 = 25.2
        assert_eq!(derived.ether_attack, 25);
        // Unscaled stats ignore race
        assert_eq!(derived.defense, 25);
    }

    #[test]
    fn unknown_race_key_derives_with_baseline() {
        let table = RaceTable::standard();
        let profile = StatProfile::uniform(10);
        assert_eq!(
            table.derive(&profile, "no-such-race"),
            DerivedStats::from_profile(&profile)
        );
    }

    #[test]
    fn movement_and_jump_saturate() {
        let profile = StatProfile::new(200, 200, 1, 1, 1, 1);
        let derived = DerivedStats::from_profile(&profile);
        assert_eq!(derived.movement, DerivedStats::MAX_MOVE);
        assert_eq!(derived.jump, DerivedStats::MAX_JUMP);

        let profile = StatProfile::new(39, 29, 1, 1, 1, 1);
        let derived = DerivedStats::from_profile(&profile);
        assert_eq!(derived.movement, 5);
        assert_eq!(derived.jump, 3);
    }

    #[test]
    fn base_rt_stays_in_bounds() {
        assert_eq!(base_recovery_time(0), 100);
        assert_eq!(base_recovery_time(54), 90);
        assert_eq!(base_recovery_time(100), 80);
        assert_eq!(base_recovery_time(u32::MAX), 80);
    }

    #[test]
    fn derive_is_deterministic() {
        let race = RaceModifierSet::from_percents([103, 97, 111, 89, 121, 130]);
        for seed in 0..200_u32 {
            let profile = StatProfile::new(
                seed,
                seed * 3 % 97,
                seed * 7 % 53,
                seed * 11 % 41,
                seed * 13 % 67,
                seed * 17 % 89,
            );
            assert_eq!(
                DerivedStats::derive(&profile, &race),
                DerivedStats::derive(&profile, &race)
            );
        }
    }

    #[test]
    fn huge_stats_do_not_overflow() {
        let derived = DerivedStats::derive(
            &StatProfile::uniform(u32::MAX),
            &RaceModifierSet::uniform(Multiplier(130)),
        );
        assert_eq!(derived.max_hp, u32::MAX);
        assert_eq!(derived.base_rt, RulesConfig::MIN_RT);
    }
}
