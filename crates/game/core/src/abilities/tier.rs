use core::fmt;

/// Ability tier, 1 through 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum Tier {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::One, Tier::Two, Tier::Three, Tier::Four];

    pub const fn new(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based position, for per-tier tables.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn previous(self) -> Option<Self> {
        Self::new(self.number() - 1)
    }

    /// Owned entries of the previous tier (same group) needed to unlock this one.
    pub const fn requirement(self) -> u32 {
        match self {
            Self::One => 0,
            Self::Two => 3,
            Self::Three => 2,
            Self::Four => 1,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.number())
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| format!("tier must be 1..=4, got {number}"))
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_round_trip_through_numbers() {
        for tier in Tier::ALL {
            assert_eq!(Tier::new(tier.number()), Some(tier));
        }
        assert_eq!(Tier::new(0), None);
        assert_eq!(Tier::new(5), None);
    }

    #[test]
    fn requirements_and_previous() {
        assert_eq!(Tier::One.previous(), None);
        assert_eq!(Tier::Three.previous(), Some(Tier::Two));
        let reqs: Vec<u32> = Tier::ALL.iter().map(|t| t.requirement()).collect();
        assert_eq!(reqs, vec![0, 3, 2, 1]);
    }
}
