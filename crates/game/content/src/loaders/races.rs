//! Race modifier table loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::{Element, Multiplier, RaceModifierSet, RaceTable};

use crate::loaders::{LoadResult, read_file};

/// One race row. Multipliers are percentages (`105` is ×1.05).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceSpec {
    pub key: String,
    pub hp: u32,
    pub resource: u32,
    pub attack: u32,
    pub ether_attack: u32,
    pub avoidance: u32,
    pub regen: u32,
    #[serde(default)]
    pub resistances: BTreeMap<Element, i32>,
}

impl RaceSpec {
    pub fn modifiers(&self) -> RaceModifierSet {
        RaceModifierSet {
            hp: Multiplier(self.hp),
            resource: Multiplier(self.resource),
            attack: Multiplier(self.attack),
            ether_attack: Multiplier(self.ether_attack),
            avoidance: Multiplier(self.avoidance),
            regen: Multiplier(self.regen),
            resistances: self.resistances.clone(),
        }
    }
}

/// Race catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceCatalog {
    pub races: Vec<RaceSpec>,
}

/// Loader for the race modifier table from RON files.
pub struct RaceLoader;

impl RaceLoader {
    /// Load a race table from a RON file.
    ///
    /// Keys are case-insensitive; a key listed twice is an error.
    pub fn load(path: &Path) -> LoadResult<RaceTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RaceTable> {
        let catalog: RaceCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse race catalog RON: {}", e))?;

        let mut table = RaceTable::new();
        for spec in &catalog.races {
            if spec.key.trim().is_empty() {
                anyhow::bail!("race key must not be empty");
            }
            if table.contains(&spec.key) {
                anyhow::bail!("duplicate race key: {}", spec.key);
            }
            table.insert(&spec.key, spec.modifiers());
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_races_and_resistances() {
        let table = RaceLoader::parse(
            r#"
            RaceCatalog(
                races: [
                    (key: "Gorath", hp: 125, resource: 90, attack: 120, ether_attack: 90, avoidance: 90, regen: 100),
                    (key: "Ashborn", hp: 110, resource: 115, attack: 100, ether_attack: 115, avoidance: 95, regen: 100,
                     resistances: { Fire: 25, Water: -10 }),
                ],
            )
            "#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("gorath").hp, Multiplier(125));
        assert_eq!(table.lookup("ashborn").resistance(Element::Fire), 25);
        assert_eq!(table.lookup("unknown"), &RaceModifierSet::BASELINE);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = RaceLoader::parse(
            r#"
            RaceCatalog(races: [
                (key: "human", hp: 105, resource: 105, attack: 105, ether_attack: 105, avoidance: 105, regen: 105),
                (key: "HUMAN", hp: 100, resource: 100, attack: 100, ether_attack: 100, avoidance: 100, regen: 100),
            ])
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("duplicate race key"));
    }
}
