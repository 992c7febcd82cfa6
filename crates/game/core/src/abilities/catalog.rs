use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::tier::Tier;

/// Catalog key of a skill or spell.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityId(pub String);

impl AbilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AbilityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Skills are grouped by tree, spells by element.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityKind {
    Skill,
    Spell,
}

/// One learnable ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub id: AbilityId,
    pub kind: AbilityKind,
    /// Skill tree or element name.
    pub group: String,
    pub tier: Tier,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, kind: AbilityKind, group: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: AbilityId::new(id),
            kind,
            group: group.into(),
            tier,
        }
    }

    /// Whether `other` counts toward this entry's tier gate.
    pub fn same_group(&self, other: &CatalogEntry) -> bool {
        self.kind == other.kind && self.group.eq_ignore_ascii_case(&other.group)
    }
}

/// Tier gate evaluation for one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnlockStatus {
    pub needed: u32,
    pub have: u32,
}

impl UnlockStatus {
    pub fn unlocked(&self) -> bool {
        self.have >= self.needed
    }
}

/// All learnable abilities, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityCatalog {
    entries: BTreeMap<AbilityId, CatalogEntry>,
}

impl AbilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, entry: CatalogEntry) -> Option<CatalogEntry> {
        self.entries.insert(entry.id.clone(), entry)
    }

    pub fn get(&self, id: &AbilityId) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sharing `entry`'s kind and group at `tier` that appear in `owned`.
    ///
    /// Owned ids missing from the catalog are ignored.
    pub fn owned_in_group(&self, entry: &CatalogEntry, tier: Tier, owned: &BTreeSet<AbilityId>) -> u32 {
        owned
            .iter()
            .filter_map(|id| self.entries.get(id))
            .filter(|other| other.tier == tier && entry.same_group(other))
            .count() as u32
    }

    /// Count the prerequisites `entry` needs and how many are owned.
    pub fn unlock_status(&self, entry: &CatalogEntry, owned: &BTreeSet<AbilityId>) -> UnlockStatus {
        let needed = entry.tier.requirement();
        let have = match entry.tier.previous() {
            Some(previous) => self.owned_in_group(entry, previous, owned),
            None => 0,
        };
        UnlockStatus { needed, have }
    }

    /// Tier 1 is always unlocked; tier t needs `requirement(t)` owned entries
    /// of tier t-1 in the same group.
    pub fn is_unlocked(&self, entry: &CatalogEntry, owned: &BTreeSet<AbilityId>) -> bool {
        self.unlock_status(entry, owned).unlocked()
    }
}

impl FromIterator<CatalogEntry> for AbilityCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> AbilityCatalog {
        [
            CatalogEntry::new("slash", AbilityKind::Skill, "blade", Tier::One),
            CatalogEntry::new("thrust", AbilityKind::Skill, "blade", Tier::One),
            CatalogEntry::new("parry", AbilityKind::Skill, "blade", Tier::One),
            CatalogEntry::new("whirl", AbilityKind::Skill, "blade", Tier::Two),
            CatalogEntry::new("jab", AbilityKind::Skill, "fist", Tier::One),
            CatalogEntry::new("spark", AbilityKind::Spell, "blade", Tier::One),
        ]
        .into_iter()
        .collect()
    }

    fn owned(ids: &[&str]) -> BTreeSet<AbilityId> {
        ids.iter().map(|id| AbilityId::from(*id)).collect()
    }

    #[test]
    fn tier_one_is_always_unlocked() {
        let catalog = catalog();
        let slash = catalog.get(&"slash".into()).unwrap();
        assert!(catalog.is_unlocked(slash, &BTreeSet::new()));
    }

    #[test]
    fn tier_two_needs_three_tier_one_in_group() {
        let catalog = catalog();
        let whirl = catalog.get(&"whirl".into()).unwrap();

        assert!(!catalog.is_unlocked(whirl, &owned(&["slash", "thrust"])));
        assert!(catalog.is_unlocked(whirl, &owned(&["slash", "thrust", "parry"])));
    }

    #[test]
    fn other_groups_and_kinds_do_not_count() {
        let catalog = catalog();
        let whirl = catalog.get(&"whirl".into()).unwrap();

        let status = catalog.unlock_status(whirl, &owned(&["slash", "thrust", "jab", "spark", "ghost"]));
        assert_eq!(status, UnlockStatus { needed: 3, have: 2 });
        assert!(!status.unlocked());
    }

    #[test]
    fn gate_check_does_not_mutate_inputs() {
        let catalog = catalog();
        let before = catalog.clone();
        let set = owned(&["slash"]);
        let whirl = catalog.get(&"whirl".into()).unwrap();

        let _ = catalog.is_unlocked(whirl, &set);
        assert_eq!(catalog, before);
        assert_eq!(set, owned(&["slash"]));
    }
}
