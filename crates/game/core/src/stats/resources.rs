//! Resource pools (HP, ether resource) are partially stored:
//! - Maximum values: computed from [`DerivedStats`] (NOT stored)
//! - Current values: character state (MUST be stored)
//!
//! Current values never exceed the recomputed maximum; every profile change
//! is followed by [`ResourcePools::clamp_to`].

use super::derived::DerivedStats;

/// Current pool values (character state, persisted).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePools {
    pub hp: u32,
    pub resource: u32,
}

impl ResourcePools {
    pub const fn new(hp: u32, resource: u32) -> Self {
        Self { hp, resource }
    }

    /// Pools filled to the maximums of `derived`.
    pub const fn at_max(derived: &DerivedStats) -> Self {
        Self {
            hp: derived.max_hp,
            resource: derived.max_resource,
        }
    }

    /// Clamp current values to the maximums of a freshly derived snapshot.
    ///
    /// Returns true if any pool was reduced.
    pub fn clamp_to(&mut self, derived: &DerivedStats) -> bool {
        let before = *self;
        self.hp = self.hp.min(derived.max_hp);
        self.resource = self.resource.min(derived.max_resource);
        before != *self
    }

    /// Copy of these pools clamped to `derived`.
    #[must_use]
    pub fn clamped(mut self, derived: &DerivedStats) -> Self {
        self.clamp_to(derived);
        self
    }

    /// Regenerate resource by `derived.resource_regen`, up to the maximum.
    pub fn regenerate(&mut self, derived: &DerivedStats) {
        self.resource = self
            .resource
            .saturating_add(derived.resource_regen)
            .min(derived.max_resource);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}
