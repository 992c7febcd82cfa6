//! Soft-cap cost policy.
//!
//! Raising a stat costs more the further it sits above the character's
//! weakest stat:
//!
//! | gap above lowest | cost per point | efficiency |
//! |------------------|----------------|------------|
//! | 0..10            | 1              | 100%       |
//! | 10..20           | 2              | 50%        |
//! | 20+              | 4              | 25%        |

use crate::stats::{StatProfile, TrainingStat};

/// Efficiency band a stat currently falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoftCapBand {
    Full,
    Half,
    Quarter,
}

impl SoftCapBand {
    /// Gap at which a point starts costing 2.
    pub const HALF_GAP: u32 = 10;
    /// Gap at which a point starts costing 4.
    pub const QUARTER_GAP: u32 = 20;

    pub const fn for_gap(gap: u32) -> Self {
        if gap >= Self::QUARTER_GAP {
            Self::Quarter
        } else if gap >= Self::HALF_GAP {
            Self::Half
        } else {
            Self::Full
        }
    }

    pub const fn cost(self) -> u32 {
        match self {
            Self::Full => 1,
            Self::Half => 2,
            Self::Quarter => 4,
        }
    }

    pub const fn efficiency_percent(self) -> u32 {
        100 / self.cost()
    }
}

/// Cost of one point for a stat `gap` above the lowest stat.
pub const fn point_cost(gap: u32) -> u32 {
    SoftCapBand::for_gap(gap).cost()
}

/// Cost of the next +1 to `stat`, with the lowest stat taken from `profile`.
pub fn next_point_cost(profile: &StatProfile, stat: TrainingStat) -> u32 {
    point_cost(profile.get(stat) - profile.lowest())
}
