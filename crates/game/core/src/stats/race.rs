//! Race modifiers - static multipliers applied on top of the derived formulas.
//!
//! Every race carries six scalars (HP, resource, attack, ether attack,
//! avoidance, regen) and an optional table of elemental resistances.
//! Lookups never fail: an unknown race key resolves to
//! [`RaceModifierSet::BASELINE`].

use std::collections::BTreeMap;

/// Fixed-point scalar stored in hundredths (`105` = ×1.05).
///
/// Integer storage keeps derivation exact and identical between a client
/// preview and the authoritative server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Multiplier(pub u32);

impl Multiplier {
    pub const ONE: Self = Self(100);

    pub const fn from_percent(percent: u32) -> Self {
        Self(percent)
    }

    pub const fn percent(self) -> u32 {
        self.0
    }

    /// Scale a value expressed in `1/denominator` units and truncate to a whole number.
    ///
    /// `apply(4300, 1)` with ×1.05 yields `4515`; `apply(275, 10)` (27.5) with
    /// ×1.20 yields `33`.
    pub fn apply(self, value: u64, denominator: u64) -> u32 {
        let scaled = value.saturating_mul(u64::from(self.0)) / (100 * denominator.max(1));
        scaled.min(u64::from(u32::MAX)) as u32
    }

    /// Scale by `100 - resist` percent, never below ×0.00.
    pub fn resisted(self, resist: i32) -> Self {
        let factor = (100 - i64::from(resist)).max(0);
        let adjusted = i64::from(self.0) * factor / 100;
        Self(adjusted.clamp(0, i64::from(u32::MAX)) as u32)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

/// Elements used by spells and by racial resistances.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    Fire,
    Water,
    Wind,
    Earth,
    Lightning,
}

/// Multiplier set for one race. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceModifierSet {
    pub hp: Multiplier,
    pub resource: Multiplier,
    pub attack: Multiplier,
    pub ether_attack: Multiplier,
    pub avoidance: Multiplier,
    pub regen: Multiplier,

    /// Signed resist percentage per element: positive reduces incoming
    /// damage, negative amplifies it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: BTreeMap<Element, i32>,
}

impl RaceModifierSet {
    /// The set used for unknown race keys: ×1.00 everywhere, no resistances.
    pub const BASELINE: Self = Self::uniform(Multiplier::ONE);

    pub const fn uniform(value: Multiplier) -> Self {
        Self {
            hp: value,
            resource: value,
            attack: value,
            ether_attack: value,
            avoidance: value,
            regen: value,
            resistances: BTreeMap::new(),
        }
    }

    /// Builds a set from percentages in the order
    /// `hp, resource, attack, ether_attack, avoidance, regen`.
    pub const fn from_percents(percents: [u32; 6]) -> Self {
        Self {
            hp: Multiplier(percents[0]),
            resource: Multiplier(percents[1]),
            attack: Multiplier(percents[2]),
            ether_attack: Multiplier(percents[3]),
            avoidance: Multiplier(percents[4]),
            regen: Multiplier(percents[5]),
            resistances: BTreeMap::new(),
        }
    }

    pub fn with_resistance(mut self, element: Element, percent: i32) -> Self {
        self.resistances.insert(element, percent);
        self
    }

    pub fn resistance(&self, element: Element) -> i32 {
        self.resistances.get(&element).copied().unwrap_or(0)
    }

    /// Fold this race's resistance to `element` into a caller-supplied element bonus.
    ///
    /// A 20% resistance turns a ×1.50 bonus into ×1.20; a -10% resistance turns
    /// ×1.00 into ×1.10. The result never drops below ×0.00.
    pub fn resist_adjusted(&self, element: Element, bonus: Multiplier) -> Multiplier {
        bonus.resisted(self.resistance(element))
    }
}

impl Default for RaceModifierSet {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Lookup table from race key to modifier set.
///
/// Keys are matched case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RaceTable {
    races: BTreeMap<String, RaceModifierSet>,
    baseline: RaceModifierSet,
}

impl RaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ten playable races of the standard ruleset.
    pub fn standard() -> Self {
        const ROWS: [(&str, [u32; 6]); 10] = [
            ("Human", [105, 105, 105, 105, 105, 105]),
            ("Gorath", [125, 90, 120, 90, 90, 100]),
            ("Sythari", [100, 110, 100, 115, 110, 100]),
            ("Fenric", [110, 95, 115, 95, 110, 100]),
            ("Valdren", [115, 120, 100, 100, 100, 125]),
            ("Kaerath", [100, 105, 110, 100, 115, 110]),
            ("Nexari", [105, 115, 100, 105, 105, 115]),
            ("Ashborn", [110, 115, 100, 115, 95, 100]),
            ("Delvari", [100, 110, 100, 110, 105, 115]),
            ("Verskai", [105, 110, 110, 105, 110, 100]),
        ];

        ROWS.iter()
            .map(|(name, percents)| (*name, RaceModifierSet::from_percents(*percents)))
            .collect()
    }

    pub fn insert(&mut self, key: impl AsRef<str>, set: RaceModifierSet) {
        self.races.insert(normalize(key.as_ref()), set);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.races.contains_key(&normalize(key))
    }

    /// Resolve a race key; unknown keys resolve to the baseline set.
    pub fn lookup(&self, key: &str) -> &RaceModifierSet {
        self.races.get(&normalize(key)).unwrap_or(&self.baseline)
    }

    /// Normalized race keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.races.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }
}

impl<K: AsRef<str>> FromIterator<(K, RaceModifierSet)> for RaceTable {
    fn from_iter<I: IntoIterator<Item = (K, RaceModifierSet)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, set) in iter {
            table.insert(key, set);
        }
        table
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_race_resolves_to_baseline() {
        let table = RaceTable::standard();
        assert_eq!(table.lookup("Moonfolk"), &RaceModifierSet::BASELINE);
        assert_eq!(table.lookup(""), &RaceModifierSet::BASELINE);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = RaceTable::standard();
        assert_eq!(table.len(), 10);
        assert_eq!(table.lookup("gorath").hp, Multiplier(125));
        assert_eq!(table.lookup(" GORATH ").attack, Multiplier(120));
        assert!(table.contains("valdren"));
    }

    #[test]
    fn multiplier_truncates_toward_zero() {
        assert_eq!(Multiplier(105).apply(430, 1), 451);
        assert_eq!(Multiplier(115).apply(100, 1), 115);
        assert_eq!(Multiplier(90).apply(275, 10), 24);
    }

    #[test]
    fn resistance_adjusts_element_bonus() {
        let set = RaceModifierSet::BASELINE
            .with_resistance(Element::Fire, 20)
            .with_resistance(Element::Water, -10);

        assert_eq!(set.resist_adjusted(Element::Fire, Multiplier(150)), Multiplier(120));
        assert_eq!(set.resist_adjusted(Element::Water, Multiplier::ONE), Multiplier(110));
        assert_eq!(set.resist_adjusted(Element::Wind, Multiplier(130)), Multiplier(130));
    }

    #[test]
    fn full_immunity_floors_at_zero() {
        let set = RaceModifierSet::BASELINE.with_resistance(Element::Earth, 150);
        assert_eq!(set.resist_adjusted(Element::Earth, Multiplier(200)), Multiplier(0));
    }
}
