//! Encounter driver: turn order plus attack resolution over live combatants.
//!
//! The encounter owns combat snapshots captured when combatants join, so
//! training committed mid-fight does not leak into it. Defeated combatants
//! leave the turn order immediately.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use tactics_core::{
    ActionWeight, AttackParams, AttackResult, AttackRolls, CharacterSheet, CombatSnapshot,
    CombatantId, RaceTable, RulesConfig, Tick, TurnScheduler, apply_damage, resolve_attack,
};

use crate::api::{Result, RuntimeError};

/// Side a combatant fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Team(pub u8);

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub name: String,
    pub team: Team,
    pub snapshot: CombatSnapshot,
}

impl Combatant {
    pub fn is_alive(&self) -> bool {
        self.snapshot.is_alive()
    }
}

/// One resolved attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: CombatantId,
    pub target: CombatantId,
    pub result: AttackResult,
    pub target_hp: u32,
    pub defeated: bool,
    /// Attacker's RT after the action.
    pub recovery: u32,
    pub clock: Tick,
}

pub struct Encounter {
    config: RulesConfig,
    scheduler: TurnScheduler,
    roster: BTreeMap<CombatantId, Combatant>,
    next_id: u32,
}

impl Encounter {
    pub fn new(config: RulesConfig) -> Self {
        Self {
            config,
            scheduler: TurnScheduler::new(),
            roster: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Add a combatant. Join order breaks ties in the turn order.
    pub fn join(&mut self, name: impl Into<String>, team: Team, snapshot: CombatSnapshot) -> Result<CombatantId> {
        let name = name.into();
        if !snapshot.is_alive() {
            return Err(RuntimeError::JoinedDefeated(name));
        }

        let id = CombatantId(self.next_id);
        self.scheduler.register(id, snapshot.derived.base_rt)?;
        self.next_id += 1;

        let combatant = Combatant {
            name,
            team,
            snapshot,
        };
        tracing::debug!(
            "{} joined {} as {} (HP {}, base RT {})",
            combatant.name,
            team,
            id,
            combatant.snapshot.pools.hp,
            combatant.snapshot.derived.base_rt
        );
        self.roster.insert(id, combatant);
        Ok(id)
    }

    pub fn join_sheet(&mut self, sheet: &CharacterSheet, team: Team, races: &RaceTable) -> Result<CombatantId> {
        self.join(sheet.name.clone(), team, sheet.snapshot(races))
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.roster.get(&id)
    }

    pub fn combatants(&self) -> impl Iterator<Item = (CombatantId, &Combatant)> {
        self.roster.iter().map(|(id, combatant)| (*id, combatant))
    }

    pub fn clock(&self) -> Tick {
        self.scheduler.clock()
    }

    /// Upcoming actors, soonest first.
    pub fn turn_order(&self) -> Vec<CombatantId> {
        self.scheduler.turn_order().collect()
    }

    /// The winning team once only one team has combatants standing.
    pub fn winner(&self) -> Option<Team> {
        let mut alive = self.roster.values().filter(|c| c.is_alive()).map(|c| c.team);
        let first = alive.next()?;
        alive.all(|team| team == first).then_some(first)
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.scheduler.is_empty()
    }

    /// Hand the turn to the combatant with the lowest remaining RT.
    ///
    /// The actor regenerates resource at the start of its turn.
    pub fn next_turn(&mut self) -> Result<CombatantId> {
        if self.is_over() {
            return Err(RuntimeError::EncounterOver);
        }
        let actor = self.scheduler.next_actor()?;
        if let Some(combatant) = self.roster.get_mut(&actor) {
            let snapshot = &mut combatant.snapshot;
            snapshot.pools.regenerate(&snapshot.derived);
        }
        Ok(actor)
    }

    /// Spend the current turn without attacking.
    pub fn pass(&mut self, actor: CombatantId, action: ActionWeight) -> Result<u32> {
        self.ensure_current(actor)?;
        Ok(self.scheduler.advance(actor, action)?)
    }

    /// Resolve an attack by the current actor and advance its RT by `action`.
    ///
    /// Nothing changes unless the whole attack succeeds.
    pub fn attack(
        &mut self,
        attacker: CombatantId,
        target: CombatantId,
        params: &AttackParams,
        rolls: AttackRolls,
        action: ActionWeight,
    ) -> Result<AttackReport> {
        self.ensure_current(attacker)?;
        if attacker == target {
            return Err(RuntimeError::SelfTarget(attacker));
        }

        let attacking = self
            .roster
            .get(&attacker)
            .ok_or(RuntimeError::UnknownCombatant(attacker))?;
        let defender = self
            .roster
            .get(&target)
            .ok_or(RuntimeError::UnknownCombatant(target))?;
        if !defender.is_alive() {
            return Err(RuntimeError::TargetDefeated(target));
        }

        let result = resolve_attack(
            &attacking.snapshot,
            &defender.snapshot,
            params,
            rolls,
            &self.config,
        );
        let recovery = self.scheduler.advance(attacker, action)?;

        let defender = self
            .roster
            .get_mut(&target)
            .ok_or(RuntimeError::UnknownCombatant(target))?;
        defender.snapshot.pools.hp = apply_damage(defender.snapshot.pools.hp, result.damage_dealt());
        let target_hp = defender.snapshot.pools.hp;
        let defeated = !defender.is_alive();

        tracing::debug!(
            "{} -> {}: {} for {} (HP {})",
            attacker,
            target,
            result.outcome,
            result.damage_dealt(),
            target_hp
        );

        if defeated {
            self.scheduler.remove(target);
            tracing::info!("{} defeated at tick {}", target, self.scheduler.clock());
        }

        Ok(AttackReport {
            attacker,
            target,
            result,
            target_hp,
            defeated,
            recovery,
            clock: self.scheduler.clock(),
        })
    }

    /// Run the fight to completion with random rolls.
    ///
    /// Every actor makes a light attack on the enemy with the least HP left
    /// (lowest id on ties). Stops after `max_turns` turns; returns the winner
    /// if there is one.
    pub fn auto_battle<R: Rng>(
        &mut self,
        rng: &mut R,
        max_turns: u32,
        log: &mut Vec<AttackReport>,
    ) -> Result<Option<Team>> {
        for _ in 0..max_turns {
            if self.is_over() {
                break;
            }

            let actor = self.next_turn()?;
            let Some(target) = self.weakest_enemy(actor) else {
                self.pass(actor, ActionWeight::Wait)?;
                continue;
            };

            let rolls = AttackRolls {
                dodge: rng.random_range(0..100),
                crit: rng.random_range(0..100),
            };
            let report = self.attack(actor, target, &AttackParams::basic(), rolls, ActionWeight::LightAttack)?;
            log.push(report);
        }

        Ok(self.winner())
    }

    fn weakest_enemy(&self, actor: CombatantId) -> Option<CombatantId> {
        let team = self.roster.get(&actor)?.team;
        self.roster
            .iter()
            .filter(|(_, c)| c.team != team && c.is_alive())
            .min_by_key(|(id, c)| (c.snapshot.pools.hp, **id))
            .map(|(id, _)| *id)
    }

    fn ensure_current(&self, actor: CombatantId) -> Result<()> {
        match self.scheduler.current_actor() {
            Some(expected) if expected == actor => Ok(()),
            Some(expected) => Err(RuntimeError::NotCurrentActor {
                expected,
                provided: actor,
            }),
            None if self.roster.contains_key(&actor) => Err(RuntimeError::NotCurrentActor {
                expected: self.scheduler.peek_next().unwrap_or(actor),
                provided: actor,
            }),
            None => Err(RuntimeError::UnknownCombatant(actor)),
        }
    }
}
