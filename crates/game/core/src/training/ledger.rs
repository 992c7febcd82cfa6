//! Per-character training ledger.
//!
//! The ledger owns the two currencies (training points, ability points) and
//! the per-period earn counters. The point bank carries over across periods
//! indefinitely; a reset clears only the counters.

use chrono::{DateTime, Utc};

use crate::config::RulesConfig;
use crate::stats::{StatProfile, TrainingStat};

use super::cost::next_point_cost;
use super::error::TrainingError;
use super::period::{ResetClock, ResetPeriod};

/// Result of a (previewed or committed) allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    pub stat: TrainingStat,
    pub requested: u32,
    pub applied: u32,
    pub spent: u32,
    /// Bank balance after the allocation is committed.
    pub new_bank: u32,
}

impl Allocation {
    /// True when the bank ran out before `requested` increments were bought.
    pub fn is_partial(&self) -> bool {
        self.applied < self.requested
    }
}

/// Outcome of recording a completed role-play session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionAward {
    pub awarded: u32,
    pub earned_today: u32,
    pub daily_cap: u32,
    pub at_cap: bool,
}

/// Outcome of earning ability points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityPointAward {
    pub awarded: u32,
    pub balance: u32,
    pub earned_today: u32,
    pub at_cap: bool,
}

/// Read-only summary for a training countdown display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingStatus {
    pub points_bank: u32,
    pub daily_points_earned: u32,
    pub daily_point_cap: u32,
    pub daily_sessions: u32,
    pub period: ResetPeriod,
    pub seconds_until_reset: i64,
}

/// Training economy state for one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingLedger {
    /// Persistent training-point currency. Never decays.
    pub points_bank: u32,

    /// Persistent ability-point currency spent on learning abilities.
    pub ability_points: u32,

    /// Period of the last counter reset; `None` until the first check.
    pub last_reset: Option<ResetPeriod>,

    pub daily_points_earned: u32,
    pub daily_sessions: u32,
    pub daily_ability_points_earned: u32,
}

impl TrainingLedger {
    pub fn new(points_bank: u32) -> Self {
        Self {
            points_bank,
            ..Self::default()
        }
    }

    /// Simulate buying `count` sequential +1 increments of `stat`.
    ///
    /// The lowest stat is re-evaluated on the simulated profile after every
    /// increment, so raising the weakest stat can shift the baseline. Buying
    /// stops at the first increment that would overspend the bank.
    ///
    /// # Errors
    ///
    /// - [`TrainingError::InvalidCount`] when `count` is zero
    /// - [`TrainingError::StatAtMaximum`] when the stat is already at `u32::MAX`
    /// - [`TrainingError::InsufficientBank`] when not even one increment is affordable
    pub fn preview_allocate(
        &self,
        profile: &StatProfile,
        stat: TrainingStat,
        count: u32,
    ) -> Result<Allocation, TrainingError> {
        if count == 0 {
            return Err(TrainingError::InvalidCount);
        }
        if profile.get(stat) == u32::MAX {
            return Err(TrainingError::StatAtMaximum(stat));
        }

        let mut simulated = *profile;
        let mut spent: u32 = 0;
        let mut applied: u32 = 0;

        while applied < count {
            let cost = next_point_cost(&simulated, stat);
            let Some(total) = spent.checked_add(cost).filter(|total| *total <= self.points_bank)
            else {
                break;
            };
            let Some(raised) = simulated.get(stat).checked_add(1) else {
                break;
            };

            *simulated.get_mut(stat) = raised;
            spent = total;
            applied += 1;
        }

        if applied == 0 {
            return Err(TrainingError::InsufficientBank {
                stat,
                needed: next_point_cost(profile, stat),
                available: self.points_bank,
            });
        }

        Ok(Allocation {
            stat,
            requested: count,
            applied,
            spent,
            new_bank: self.points_bank - spent,
        })
    }

    /// Commit an allocation: deduct the cost and raise the stat.
    ///
    /// Runs the same simulation as [`Self::preview_allocate`], so the result is
    /// identical to a preview taken over the same starting state. Nothing is
    /// mutated on error.
    pub fn allocate(
        &mut self,
        profile: &mut StatProfile,
        stat: TrainingStat,
        count: u32,
    ) -> Result<Allocation, TrainingError> {
        let allocation = self.preview_allocate(profile, stat, count)?;

        *profile.get_mut(stat) += allocation.applied;
        self.points_bank = allocation.new_bank;

        Ok(allocation)
    }

    /// Add out-of-band points to the bank. Saturates instead of failing.
    pub fn grant_bonus(&mut self, amount: u32) -> u32 {
        self.points_bank = self.points_bank.saturating_add(amount);
        self.points_bank
    }

    /// Clear the per-period counters if `now` is in a new period.
    ///
    /// Returns true if a reset occurred. Both banks are untouched.
    pub fn try_reset(&mut self, now: DateTime<Utc>, clock: &ResetClock) -> bool {
        let period = clock.period_at(now);
        if self.last_reset == Some(period) {
            return false;
        }

        self.daily_points_earned = 0;
        self.daily_sessions = 0;
        self.daily_ability_points_earned = 0;
        self.last_reset = Some(period);
        true
    }

    /// Award training points for a completed role-play session.
    ///
    /// Sessions pay out per the configured schedule, clamped to the daily cap
    /// of the character's level band.
    pub fn award_session(
        &mut self,
        now: DateTime<Utc>,
        level: u32,
        config: &RulesConfig,
    ) -> SessionAward {
        self.try_reset(now, &config.reset_clock());

        let daily_cap = config.daily_point_cap(level);
        let remaining = daily_cap.saturating_sub(self.daily_points_earned);
        let award = config.session_award(self.daily_sessions).min(remaining);

        if award == 0 {
            return SessionAward {
                awarded: 0,
                earned_today: self.daily_points_earned,
                daily_cap,
                at_cap: true,
            };
        }

        self.points_bank = self.points_bank.saturating_add(award);
        self.daily_points_earned += award;
        self.daily_sessions += 1;

        SessionAward {
            awarded: award,
            earned_today: self.daily_points_earned,
            daily_cap,
            at_cap: self.daily_points_earned >= daily_cap,
        }
    }

    /// Earn ability points, clamped to the daily ability-point cap.
    pub fn earn_ability_points(
        &mut self,
        now: DateTime<Utc>,
        amount: u32,
        config: &RulesConfig,
    ) -> Result<AbilityPointAward, TrainingError> {
        if amount == 0 {
            return Err(TrainingError::InvalidCount);
        }

        self.try_reset(now, &config.reset_clock());

        let cap = config.ability_point_daily_cap;
        let awarded = amount.min(cap.saturating_sub(self.daily_ability_points_earned));

        self.ability_points = self.ability_points.saturating_add(awarded);
        self.daily_ability_points_earned += awarded;

        Ok(AbilityPointAward {
            awarded,
            balance: self.ability_points,
            earned_today: self.daily_ability_points_earned,
            at_cap: self.daily_ability_points_earned >= cap,
        })
    }

    /// Current period summary. Performs the reset check first.
    pub fn status(&mut self, now: DateTime<Utc>, level: u32, config: &RulesConfig) -> TrainingStatus {
        let clock = config.reset_clock();
        self.try_reset(now, &clock);

        TrainingStatus {
            points_bank: self.points_bank,
            daily_points_earned: self.daily_points_earned,
            daily_point_cap: config.daily_point_cap(level),
            daily_sessions: self.daily_sessions,
            period: clock.period_at(now),
            seconds_until_reset: clock.seconds_until_next_reset(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn after_reset(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, day, 18, 0, 0).unwrap()
    }

    #[test]
    fn balanced_profile_buys_five_at_unit_cost() {
        let mut ledger = TrainingLedger::new(5);
        let mut profile = StatProfile::uniform(10);

        let allocation = ledger
            .allocate(&mut profile, TrainingStat::Strength, 5)
            .unwrap();

        assert_eq!(allocation.applied, 5);
        assert_eq!(allocation.spent, 5);
        assert_eq!(allocation.new_bank, 0);
        assert!(!allocation.is_partial());
        assert_eq!(profile.strength, 15);
        assert_eq!(ledger.points_bank, 0);
    }

    #[test]
    fn cost_escalates_across_the_gap_edge() {
        // Strength at gap 8: two points at 1, then gap 10 costs 2.
        let ledger = TrainingLedger::new(100);
        let profile = StatProfile::new(18, 10, 10, 10, 10, 10);

        let allocation = ledger
            .preview_allocate(&profile, TrainingStat::Strength, 4)
            .unwrap();

        assert_eq!(allocation.applied, 4);
        assert_eq!(allocation.spent, 1 + 1 + 2 + 2);
    }

    #[test]
    fn stops_at_first_overspend() {
        // gap 19 → 2 points, then gap 20 → 4 points; bank 5 buys only one.
        let mut ledger = TrainingLedger::new(5);
        let mut profile = StatProfile::new(29, 10, 10, 10, 10, 10);

        let allocation = ledger
            .allocate(&mut profile, TrainingStat::Strength, 3)
            .unwrap();

        assert_eq!(allocation.applied, 1);
        assert_eq!(allocation.spent, 2);
        assert!(allocation.is_partial());
        assert_eq!(ledger.points_bank, 3);
        assert_eq!(profile.strength, 30);
    }

    #[test]
    fn raising_the_lowest_stat_shifts_the_baseline() {
        // Speed is the lowest stat all the way from 10 to 25, so every point
        // costs 1. Holding the floor at 10 would charge 2 from gap 10 on.
        let ledger = TrainingLedger::new(100);
        let profile = StatProfile::new(30, 10, 30, 30, 30, 30);

        let allocation = ledger
            .preview_allocate(&profile, TrainingStat::Speed, 15)
            .unwrap();

        assert_eq!(allocation.applied, 15);
        assert_eq!(allocation.spent, 15);
        assert_eq!(allocation.new_bank, 85);
    }

    #[test]
    fn maxed_stat_is_reported_as_such() {
        let mut ledger = TrainingLedger::new(100);
        let mut profile = StatProfile::new(u32::MAX, 1, 1, 1, 1, 1);

        assert_eq!(
            ledger.allocate(&mut profile, TrainingStat::Strength, 1),
            Err(TrainingError::StatAtMaximum(TrainingStat::Strength))
        );
        assert_eq!(ledger.points_bank, 100);

        // One below the ceiling buys a single point and stops there.
        let mut profile = StatProfile::new(u32::MAX - 1, 1, 1, 1, 1, 1);
        let allocation = ledger
            .allocate(&mut profile, TrainingStat::Strength, 3)
            .unwrap();
        assert_eq!((allocation.applied, allocation.spent), (1, 4));
        assert_eq!(profile.strength, u32::MAX);
    }

    #[test]
    fn nothing_affordable_is_insufficient_bank() {
        let mut ledger = TrainingLedger::new(3);
        let mut profile = StatProfile::new(40, 10, 10, 10, 10, 10);

        let err = ledger
            .allocate(&mut profile, TrainingStat::Strength, 1)
            .unwrap_err();

        assert_eq!(
            err,
            TrainingError::InsufficientBank {
                stat: TrainingStat::Strength,
                needed: 4,
                available: 3,
            }
        );
        assert_eq!(ledger.points_bank, 3);
        assert_eq!(profile.strength, 40);
    }

    #[test]
    fn zero_count_is_invalid() {
        let ledger = TrainingLedger::new(10);
        assert_eq!(
            ledger.preview_allocate(&StatProfile::default(), TrainingStat::Agility, 0),
            Err(TrainingError::InvalidCount)
        );
    }

    #[test]
    fn preview_matches_commit() {
        for bank in 0..40_u32 {
            for count in 1..12_u32 {
                for stat in [TrainingStat::Strength, TrainingStat::Stamina] {
                    let start = StatProfile::new(21, 3, 9, 14, 3, 7);
                    let ledger = TrainingLedger::new(bank);
                    let preview = ledger.preview_allocate(&start, stat, count);

                    let mut committed_ledger = ledger.clone();
                    let mut profile = start;
                    let committed = committed_ledger.allocate(&mut profile, stat, count);

                    assert_eq!(preview, committed);
                    if let Ok(allocation) = committed {
                        assert!(allocation.spent <= bank);
                        assert_eq!(committed_ledger.points_bank, bank - allocation.spent);
                        assert_eq!(profile.get(stat), start.get(stat) + allocation.applied);
                    }
                }
            }
        }
    }

    #[test]
    fn grant_bonus_saturates() {
        let mut ledger = TrainingLedger::new(u32::MAX - 1);
        assert_eq!(ledger.grant_bonus(10), u32::MAX);
    }

    #[test]
    fn reset_clears_counters_but_keeps_bank() {
        let clock = ResetClock::new(17);
        let mut ledger = TrainingLedger::new(12);
        ledger.daily_points_earned = 4;
        ledger.daily_sessions = 2;
        ledger.daily_ability_points_earned = 6;
        ledger.ability_points = 9;

        assert!(ledger.try_reset(after_reset(1), &clock));
        assert!(!ledger.try_reset(after_reset(1), &clock));

        assert_eq!(ledger.points_bank, 12);
        assert_eq!(ledger.ability_points, 9);
        assert_eq!(ledger.daily_points_earned, 0);
        assert_eq!(ledger.daily_sessions, 0);
        assert_eq!(ledger.daily_ability_points_earned, 0);

        assert!(ledger.try_reset(after_reset(2), &clock));
    }

    #[test]
    fn session_schedule_is_capped_by_level() {
        let config = RulesConfig::default();
        let mut ledger = TrainingLedger::default();

        let awards: Vec<u32> = (0..4)
            .map(|_| ledger.award_session(after_reset(3), 1, &config).awarded)
            .collect();
        assert_eq!(awards, vec![2, 2, 1, 0]);
        assert_eq!(ledger.points_bank, 5);

        // Level 10-19 cap is 3: second session is clamped to 1.
        let mut ledger = TrainingLedger::default();
        assert_eq!(ledger.award_session(after_reset(3), 12, &config).awarded, 2);
        let second = ledger.award_session(after_reset(3), 12, &config);
        assert_eq!(second.awarded, 1);
        assert!(second.at_cap);
        assert_eq!(ledger.award_session(after_reset(3), 12, &config).awarded, 0);

        // New period: schedule restarts, bank carries over.
        let next_day = ledger.award_session(after_reset(4), 12, &config);
        assert_eq!(next_day.awarded, 2);
        assert_eq!(ledger.points_bank, 5);
    }

    #[test]
    fn ability_points_respect_daily_cap() {
        let config = RulesConfig::default();
        let mut ledger = TrainingLedger::default();

        let first = ledger.earn_ability_points(after_reset(5), 5, &config).unwrap();
        assert_eq!(first.awarded, 5);
        assert!(!first.at_cap);

        let second = ledger.earn_ability_points(after_reset(5), 5, &config).unwrap();
        assert_eq!(second.awarded, 3);
        assert_eq!(second.balance, 8);
        assert!(second.at_cap);

        assert_eq!(
            ledger.earn_ability_points(after_reset(5), 0, &config),
            Err(TrainingError::InvalidCount)
        );
    }

    #[test]
    fn status_reports_countdown() {
        let config = RulesConfig::default();
        let mut ledger = TrainingLedger::new(7);
        let status = ledger.status(after_reset(6), 1, &config);

        assert_eq!(status.points_bank, 7);
        assert_eq!(status.daily_point_cap, 5);
        assert_eq!(status.seconds_until_reset, 23 * 3600);
    }
}
