use crate::abilities::Tier;
use crate::stats::Multiplier;
use crate::training::ResetClock;

/// Level band for the daily training-point earn cap.
///
/// The cap of the highest band whose `min_level` is at or below the
/// character level applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelCap {
    pub min_level: u32,
    pub cap: u32,
}

impl LevelCap {
    pub const fn new(min_level: u32, cap: u32) -> Self {
        Self { min_level, cap }
    }
}

/// Rules configuration and tunable balance parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// UTC hour at which a new training period begins.
    pub reset_hour_utc: u32,

    /// Training points awarded for the 1st, 2nd, 3rd... session of a period.
    /// Sessions beyond the schedule award nothing.
    pub session_awards: Vec<u32>,

    /// Daily training-point earn caps, ordered by `min_level`.
    pub daily_caps: Vec<LevelCap>,

    /// Maximum ability points that can be earned within one period.
    pub ability_point_daily_cap: u32,

    /// Ability point cost of learning a tier 1..=4 entry.
    pub ability_tier_costs: [u32; 4],

    /// Damage multiplier applied on a critical hit, before caps.
    pub crit_multiplier: Multiplier,
}

impl RulesConfig {
    // ===== compile-time constants =====
    pub const MIN_RT: u32 = 80;
    pub const MAX_RT: u32 = 150;
    pub const MAX_DODGE_PHYSICAL: u32 = 75;
    pub const MAX_DODGE_ETHER: u32 = 60;
    /// Share of the target's MaxHP that a single hit may remove (percent).
    pub const DAMAGE_CAP_PERCENT: u32 = 60;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RESET_HOUR_UTC: u32 = 17;
    pub const DEFAULT_ABILITY_POINT_DAILY_CAP: u32 = 8;
    pub const DEFAULT_ABILITY_TIER_COSTS: [u32; 4] = [3, 8, 15, 25];
    pub const DEFAULT_CRIT_MULTIPLIER: Multiplier = Multiplier::from_percent(150);

    pub fn new() -> Self {
        Self {
            reset_hour_utc: Self::DEFAULT_RESET_HOUR_UTC,
            session_awards: vec![2, 2, 1],
            daily_caps: vec![
                LevelCap::new(0, 5),
                LevelCap::new(10, 3),
                LevelCap::new(20, 1),
            ],
            ability_point_daily_cap: Self::DEFAULT_ABILITY_POINT_DAILY_CAP,
            ability_tier_costs: Self::DEFAULT_ABILITY_TIER_COSTS,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
        }
    }

    pub fn reset_clock(&self) -> ResetClock {
        ResetClock::new(self.reset_hour_utc)
    }

    /// Daily training-point earn cap for a character level.
    pub fn daily_point_cap(&self, level: u32) -> u32 {
        self.daily_caps
            .iter()
            .filter(|band| band.min_level <= level)
            .max_by_key(|band| band.min_level)
            .map(|band| band.cap)
            .unwrap_or(0)
    }

    /// Points awarded for the session at `index` (0-based) within a period.
    pub fn session_award(&self, index: u32) -> u32 {
        self.session_awards
            .get(index as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn tier_cost(&self, tier: Tier) -> u32 {
        self.ability_tier_costs[tier.index()]
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_cap_follows_level_bands() {
        let config = RulesConfig::default();
        assert_eq!(config.daily_point_cap(1), 5);
        assert_eq!(config.daily_point_cap(9), 5);
        assert_eq!(config.daily_point_cap(10), 3);
        assert_eq!(config.daily_point_cap(19), 3);
        assert_eq!(config.daily_point_cap(20), 1);
        assert_eq!(config.daily_point_cap(80), 1);
    }

    #[test]
    fn session_schedule_runs_out() {
        let config = RulesConfig::default();
        assert_eq!(config.session_award(0), 2);
        assert_eq!(config.session_award(1), 2);
        assert_eq!(config.session_award(2), 1);
        assert_eq!(config.session_award(3), 0);
    }

    #[test]
    fn tier_costs() {
        let config = RulesConfig::default();
        let costs: Vec<u32> = Tier::ALL.iter().map(|t| config.tier_cost(*t)).collect();
        assert_eq!(costs, vec![3, 8, 15, 25]);
    }
}
