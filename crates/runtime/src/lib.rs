//! Authoritative runtime for the tactics rules engine.
//!
//! This crate wraps the pure rules in `tactics-core` with the pieces a server
//! needs: per-character serialized mutation, persistence, a clock source and
//! an encounter driver. Consumers hold a [`CharacterService`] for training
//! and ability requests and build an [`Encounter`] per fight.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the per-character request handlers
//! - [`encounter`] drives turn order and attack resolution
//! - [`api`] exposes the error types downstream clients interact with
//! - [`repository`] and [`clock`] provide adapters reused by other crates
pub mod api;
pub mod clock;
pub mod encounter;
pub mod repository;
pub mod service;

pub use api::{Result, RuntimeError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use encounter::{AttackReport, Combatant, Encounter, Team};
pub use repository::{
    CharacterId, CharacterRecord, CharacterRepository, FileCharacterRepository,
    InMemoryCharacterRepository, RepositoryError,
};
pub use service::{CharacterService, Committed};
