//! Persisted character record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tactics_core::CharacterSheet;

/// Repository key of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u64);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CharacterId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Authoritative copy of one character.
///
/// Mutations bump `revision`, so a client holding a preview can tell whether
/// the server state moved underneath it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: CharacterId,
    pub sheet: CharacterSheet,
    pub revision: u64,
    pub updated_at: DateTime<Utc>,
}

impl CharacterRecord {
    pub fn new(id: CharacterId, sheet: CharacterSheet, now: DateTime<Utc>) -> Self {
        Self {
            id,
            sheet,
            revision: 0,
            updated_at: now,
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.revision += 1;
        self.updated_at = now;
    }
}
