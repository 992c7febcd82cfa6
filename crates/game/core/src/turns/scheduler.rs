use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{ErrorSeverity, RulesError};

use super::weight::{ActionWeight, recovery_time};

/// Identifier of a combatant registered with a scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete time unit on the scheduler timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);
}

impl std::ops::Add<u32> for Tick {
    type Output = Tick;
    fn add(self, rhs: u32) -> Tick {
        Tick(self.0.saturating_add(u64::from(rhs)))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur during turn operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("no combatants are registered")]
    EmptyScheduler,

    #[error("combatant {0} is not registered")]
    UnknownCombatant(CombatantId),

    #[error("combatant {0} is already registered")]
    AlreadyRegistered(CombatantId),
}

impl RulesError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyScheduler => ErrorSeverity::Recoverable,
            Self::UnknownCombatant(_) | Self::AlreadyRegistered(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyScheduler => "empty_scheduler",
            Self::UnknownCombatant(_) => "unknown_combatant",
            Self::AlreadyRegistered(_) => "already_registered",
        }
    }
}

/// Queue key. Field order defines the turn order: earliest `ready_at` first,
/// then earliest registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct ScheduledTurn {
    ready_at: Tick,
    order: u64,
    id: CombatantId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    base_rt: u32,
    rt: u32,
    ready_at: Tick,
    order: u64,
}

impl Slot {
    fn key(&self, id: CombatantId) -> ScheduledTurn {
        ScheduledTurn {
            ready_at: self.ready_at,
            order: self.order,
            id,
        }
    }
}

/// Recovery-time scheduler.
///
/// Each combatant holds an RT value and the tick at which that recovery
/// elapses. The combatant whose recovery elapses first (the lowest remaining
/// RT) acts next; selection and rescheduling are O(log n). Ties go to the
/// combatant registered first.
///
/// A freshly registered combatant has RT 0 and is ready at the current
/// clock. After [`advance`](Self::advance) its RT is
/// `clamp(base_rt + weight, MIN_RT, MAX_RT)`.
#[derive(Clone, Debug, Default)]
pub struct TurnScheduler {
    clock: Tick,
    queue: BTreeSet<ScheduledTurn>,
    slots: BTreeMap<CombatantId, Slot>,
    next_order: u64,
    current: Option<CombatantId>,
}

impl TurnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current timeline clock value.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// The combatant last returned by [`next_actor`](Self::next_actor).
    pub fn current_actor(&self) -> Option<CombatantId> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: CombatantId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Register a combatant at RT 0.
    pub fn register(&mut self, id: CombatantId, base_rt: u32) -> Result<(), TurnError> {
        if self.slots.contains_key(&id) {
            return Err(TurnError::AlreadyRegistered(id));
        }

        let slot = Slot {
            base_rt,
            rt: 0,
            ready_at: self.clock,
            order: self.next_order,
        };
        self.next_order += 1;

        self.queue.insert(slot.key(id));
        self.slots.insert(id, slot);
        Ok(())
    }

    /// Remove a combatant (defeated, fled). Returns true if it was registered.
    pub fn remove(&mut self, id: CombatantId) -> bool {
        let Some(slot) = self.slots.remove(&id) else {
            return false;
        };
        self.queue.remove(&slot.key(id));
        if self.current == Some(id) {
            self.current = None;
        }
        true
    }

    /// Select the combatant with the lowest remaining RT and move the clock to
    /// the moment its recovery elapses.
    ///
    /// Calling this again without [`advance`](Self::advance) returns the same
    /// combatant.
    pub fn next_actor(&mut self) -> Result<CombatantId, TurnError> {
        let next = *self.queue.first().ok_or(TurnError::EmptyScheduler)?;

        self.clock = self.clock.max(next.ready_at);
        self.current = Some(next.id);
        Ok(next.id)
    }

    /// The combatant [`next_actor`](Self::next_actor) would return, without
    /// touching the clock.
    pub fn peek_next(&self) -> Option<CombatantId> {
        self.queue.first().map(|turn| turn.id)
    }

    /// Record that `id` acted with `action`; returns its new RT.
    ///
    /// Ends the turn if `id` held it.
    pub fn advance(&mut self, id: CombatantId, action: ActionWeight) -> Result<u32, TurnError> {
        let clock = self.clock;
        let slot = self
            .slots
            .get_mut(&id)
            .ok_or(TurnError::UnknownCombatant(id))?;

        self.queue.remove(&slot.key(id));
        slot.rt = recovery_time(slot.base_rt, action);
        slot.ready_at = clock + slot.rt;
        self.queue.insert(slot.key(id));

        let rt = slot.rt;
        if self.current == Some(id) {
            self.current = None;
        }
        Ok(rt)
    }

    /// Update the base RT after the combatant's stats changed. Takes effect on
    /// its next [`advance`](Self::advance).
    pub fn set_base_rt(&mut self, id: CombatantId, base_rt: u32) -> Result<(), TurnError> {
        let slot = self
            .slots
            .get_mut(&id)
            .ok_or(TurnError::UnknownCombatant(id))?;
        slot.base_rt = base_rt;
        Ok(())
    }

    /// RT assigned by the combatant's last action (0 before acting).
    pub fn rt(&self, id: CombatantId) -> Option<u32> {
        self.slots.get(&id).map(|slot| slot.rt)
    }

    /// Ticks left until the combatant's recovery elapses.
    pub fn remaining_rt(&self, id: CombatantId) -> Option<u64> {
        self.slots
            .get(&id)
            .map(|slot| slot.ready_at.0.saturating_sub(self.clock.0))
    }

    /// Combatants in the order they would act if nobody acted in between.
    pub fn turn_order(&self) -> impl Iterator<Item = CombatantId> + '_ {
        self.queue.iter().map(|turn| turn.id)
    }
}
