//! Data-driven rules content and loaders.
//!
//! This crate provides loaders for the RON/TOML data files that parameterize
//! the rules engine:
//! - Race modifier table (RON)
//! - Ability catalog (RON)
//! - Rules configuration (TOML)
//!
//! All loaders deserialize straight into tactics-core types through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, ConfigLoader, ContentFactory, LoadResult, RaceLoader, RaceSpec, RulesContent,
};
