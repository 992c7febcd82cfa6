//! Training profile - the persisted layer of the stat system.
//!
//! The six training stats are the Single Source of Truth (SSOT) for a
//! character's combat power and the only stats that are permanently stored.
//! Everything in [`DerivedStats`](super::DerivedStats) is recomputed from them.

use strum::IntoEnumIterator;

/// The six player-investable training attributes.
///
/// Parsing accepts the full snake_case name or a short alias, case-insensitive
/// (`"Strength"`, `"str"`, `"ETHER"`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
pub enum TrainingStat {
    /// Physical power: attack and jump height.
    #[strum(to_string = "strength", serialize = "str")]
    Strength,
    /// Quickness: recovery time, move range, crit.
    #[strum(to_string = "speed", serialize = "spd")]
    Speed,
    /// Nimbleness: avoidance, accuracy, ether attack.
    #[strum(to_string = "agility", serialize = "agi")]
    Agility,
    /// Toughness: HP, defense, ether defense.
    #[strum(to_string = "endurance", serialize = "end")]
    Endurance,
    /// Staying power: HP, resource pool, defense.
    #[strum(to_string = "stamina", serialize = "sta")]
    Stamina,
    /// Ether mastery: resource pool, regen, ether attack and defense.
    #[strum(to_string = "ether_control", serialize = "ether", serialize = "etc")]
    EtherControl,
}

/// Training stats for one character.
///
/// No upper bound is enforced: imbalance is discouraged by the training
/// economy's soft cap, not by the data type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatProfile {
    pub strength: u32,
    pub speed: u32,
    pub agility: u32,
    pub endurance: u32,
    pub stamina: u32,
    pub ether_control: u32,
}

impl StatProfile {
    /// Value every stat starts at for a freshly created character.
    pub const STARTING_VALUE: u32 = 1;

    pub const fn new(
        strength: u32,
        speed: u32,
        agility: u32,
        endurance: u32,
        stamina: u32,
        ether_control: u32,
    ) -> Self {
        Self {
            strength,
            speed,
            agility,
            endurance,
            stamina,
            ether_control,
        }
    }

    /// Profile with every stat set to `value`.
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn get(&self, stat: TrainingStat) -> u32 {
        match stat {
            TrainingStat::Strength => self.strength,
            TrainingStat::Speed => self.speed,
            TrainingStat::Agility => self.agility,
            TrainingStat::Endurance => self.endurance,
            TrainingStat::Stamina => self.stamina,
            TrainingStat::EtherControl => self.ether_control,
        }
    }

    pub fn get_mut(&mut self, stat: TrainingStat) -> &mut u32 {
        match stat {
            TrainingStat::Strength => &mut self.strength,
            TrainingStat::Speed => &mut self.speed,
            TrainingStat::Agility => &mut self.agility,
            TrainingStat::Endurance => &mut self.endurance,
            TrainingStat::Stamina => &mut self.stamina,
            TrainingStat::EtherControl => &mut self.ether_control,
        }
    }

    /// Iterate `(stat, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TrainingStat, u32)> + '_ {
        TrainingStat::iter().map(move |stat| (stat, self.get(stat)))
    }

    /// The weakest stat value; the baseline for the soft cap.
    pub fn lowest(&self) -> u32 {
        self.iter().map(|(_, value)| value).min().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.iter().map(|(_, value)| u64::from(value)).sum()
    }

    /// Character level: the mean of the six stats, rounded down.
    pub fn level(&self) -> u32 {
        (self.total() / 6).min(u64::from(u32::MAX)) as u32
    }
}

impl Default for StatProfile {
    /// A freshly created character: every stat at 1.
    fn default() -> Self {
        Self::uniform(Self::STARTING_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn stat_keys_parse_with_aliases() {
        assert_eq!(TrainingStat::from_str("strength"), Ok(TrainingStat::Strength));
        assert_eq!(TrainingStat::from_str("STR"), Ok(TrainingStat::Strength));
        assert_eq!(TrainingStat::from_str("Spd"), Ok(TrainingStat::Speed));
        assert_eq!(
            TrainingStat::from_str("ether_control"),
            Ok(TrainingStat::EtherControl)
        );
        assert_eq!(TrainingStat::from_str("ether"), Ok(TrainingStat::EtherControl));
        assert!(TrainingStat::from_str("charisma").is_err());
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(TrainingStat::EtherControl.to_string(), "ether_control");
        assert_eq!(TrainingStat::Agility.as_ref(), "agility");
    }

    #[test]
    fn lowest_and_level() {
        let profile = StatProfile::new(14, 8, 10, 12, 9, 7);
        assert_eq!(profile.lowest(), 7);
        assert_eq!(profile.total(), 60);
        assert_eq!(profile.level(), 10);
    }

    #[test]
    fn get_mut_targets_named_stat() {
        let mut profile = StatProfile::default();
        *profile.get_mut(TrainingStat::Stamina) += 4;
        assert_eq!(profile.stamina, 5);
        assert_eq!(profile.get(TrainingStat::Stamina), 5);
        assert_eq!(profile.strength, 1);
    }
}
