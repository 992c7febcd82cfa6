use crate::config::RulesConfig;

/// Recovery weight of the action a combatant just took.
///
/// The set is closed: callers pick the variant matching the action they
/// executed, the scheduler never infers it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionWeight {
    Wait,
    Defend,
    Move,
    LightAttack,
    MediumAbility,
    HeavyAbility,
    Finisher,
}

impl ActionWeight {
    pub const fn weight(self) -> u32 {
        match self {
            Self::Wait | Self::Defend => 10,
            Self::Move => 15,
            Self::LightAttack => 20,
            Self::MediumAbility => 30,
            Self::HeavyAbility => 40,
            Self::Finisher => 50,
        }
    }
}

/// RT after acting: clamp(base_rt + weight, MIN_RT, MAX_RT).
pub fn recovery_time(base_rt: u32, action: ActionWeight) -> u32 {
    base_rt
        .saturating_add(action.weight())
        .clamp(RulesConfig::MIN_RT, RulesConfig::MAX_RT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn weights_match_table() {
        let weights: Vec<u32> = ActionWeight::iter().map(ActionWeight::weight).collect();
        assert_eq!(weights, vec![10, 10, 15, 20, 30, 40, 50]);
    }

    #[test]
    fn recovery_time_is_clamped() {
        assert_eq!(recovery_time(98, ActionWeight::LightAttack), 118);
        assert_eq!(recovery_time(0, ActionWeight::Wait), RulesConfig::MIN_RT);
        assert_eq!(recovery_time(140, ActionWeight::Finisher), RulesConfig::MAX_RT);
        assert_eq!(recovery_time(u32::MAX, ActionWeight::Move), RulesConfig::MAX_RT);
    }

    #[test]
    fn parses_snake_case_keys() {
        assert_eq!("heavy_ability".parse(), Ok(ActionWeight::HeavyAbility));
        assert_eq!(ActionWeight::LightAttack.to_string(), "light_attack");
    }
}
