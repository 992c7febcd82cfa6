//! Authoritative character service.
//!
//! Every mutation of a character runs under that character's lock: load,
//! period reset check, rules operation, save. Operations on different
//! characters never contend. Results carry the canonical post-commit record,
//! which clients adopt over any local preview.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tactics_content::RulesContent;
use tactics_core::{
    AbilityId, AbilityPointAward, Allocation, CharacterSheet, DerivedStats, SessionAward,
    TrainingStatus, parse_stat,
};

use crate::api::{Result, RuntimeError};
use crate::clock::Clock;
use crate::repository::{CharacterId, CharacterRecord, CharacterRepository};

/// Outcome of a committed mutation together with the canonical record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed<T> {
    pub value: T,
    pub record: CharacterRecord,
}

pub struct CharacterService {
    repository: Arc<dyn CharacterRepository>,
    content: Arc<RulesContent>,
    clock: Arc<dyn Clock>,
    locks: Mutex<HashMap<CharacterId, Arc<tokio::sync::Mutex<()>>>>,
    create_lock: tokio::sync::Mutex<()>,
}

impl CharacterService {
    pub fn new(
        repository: Arc<dyn CharacterRepository>,
        content: Arc<RulesContent>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            content,
            clock,
            locks: Mutex::new(HashMap::new()),
            create_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn content(&self) -> &RulesContent {
        &self.content
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Create a character at starting stats with full pools.
    pub async fn create(&self, name: &str, race: &str) -> Result<CharacterRecord> {
        let _guard = self.create_lock.lock().await;

        if !self.content.races.contains(race) {
            tracing::warn!("Unknown race '{}' for new character, using baseline modifiers", race);
        }

        let id = self.repository.next_id()?;
        let sheet = CharacterSheet::new(name, race, &self.content.races);
        let record = CharacterRecord::new(id, sheet, self.clock.now());
        self.repository.save(&record)?;

        tracing::info!("Created character[{}] '{}' ({})", id, name, race);
        Ok(record)
    }

    pub async fn get(&self, id: CharacterId) -> Result<CharacterRecord> {
        self.load(id)
    }

    pub async fn list(&self) -> Result<Vec<CharacterId>> {
        Ok(self.repository.list_ids()?)
    }

    /// Delete a character. Its lock entry stays, so a later character that
    /// reuses the id serializes with requests still queued for this one.
    pub async fn delete(&self, id: CharacterId) -> Result<()> {
        let lock = self.lock_for(id)?;
        let _guard = lock.lock().await;

        self.load(id)?;
        self.repository.delete(id)?;

        tracing::info!("Deleted character[{}]", id);
        Ok(())
    }

    pub async fn derived(&self, id: CharacterId) -> Result<DerivedStats> {
        let record = self.load(id)?;
        Ok(record.sheet.derived(&self.content.races))
    }

    /// Non-binding allocation preview over the current stored state.
    pub async fn preview_allocate(
        &self,
        id: CharacterId,
        stat_key: &str,
        count: u32,
    ) -> Result<Allocation> {
        let stat = parse_stat(stat_key)?;
        let record = self.load(id)?;
        Ok(record.sheet.preview_train(stat, count)?)
    }

    /// Spend banked points on a stat and persist the result.
    pub async fn allocate(
        &self,
        id: CharacterId,
        stat_key: &str,
        count: u32,
    ) -> Result<Committed<Allocation>> {
        let stat = parse_stat(stat_key)?;

        let committed = self
            .mutate(id, |sheet, _| Ok(sheet.train(stat, count, &self.content.races)?))
            .await?;

        let allocation = &committed.value;
        if allocation.is_partial() {
            tracing::warn!(
                "Character[{}] allocation of {} {} limited to {} by bank",
                id,
                allocation.requested,
                stat,
                allocation.applied
            );
        }
        tracing::info!(
            "Character[{}] trained {} +{} for {} points (bank {})",
            id,
            stat,
            allocation.applied,
            allocation.spent,
            allocation.new_bank
        );

        Ok(committed)
    }

    /// Out-of-band point reward. Never fails for an existing character.
    pub async fn grant_bonus(&self, id: CharacterId, amount: u32) -> Result<Committed<u32>> {
        let committed = self
            .mutate(id, |sheet, _| Ok(sheet.grant_bonus(amount)))
            .await?;
        tracing::info!("Character[{}] granted {} bonus points (bank {})", id, amount, committed.value);
        Ok(committed)
    }

    /// Record a completed role-play session.
    pub async fn award_session(&self, id: CharacterId) -> Result<Committed<SessionAward>> {
        let committed = self
            .mutate(id, |sheet, now| Ok(sheet.award_session(now, &self.content.config)))
            .await?;

        let award = &committed.value;
        if award.awarded == 0 {
            tracing::warn!("Character[{}] session refused: daily cap {} reached", id, award.daily_cap);
        } else {
            tracing::info!(
                "Character[{}] session awarded {} points ({}/{} today)",
                id,
                award.awarded,
                award.earned_today,
                award.daily_cap
            );
        }
        Ok(committed)
    }

    pub async fn earn_ability_points(
        &self,
        id: CharacterId,
        amount: u32,
    ) -> Result<Committed<AbilityPointAward>> {
        let config = &self.content.config;
        let committed = self
            .mutate(id, |sheet, now| Ok(sheet.earn_ability_points(now, amount, config)?))
            .await?;
        tracing::info!(
            "Character[{}] earned {} ability points (balance {})",
            id,
            committed.value.awarded,
            committed.value.balance
        );
        Ok(committed)
    }

    /// Learn an ability from the catalog; returns the remaining ability points.
    pub async fn learn_ability(&self, id: CharacterId, ability: &str) -> Result<Committed<u32>> {
        let ability_id = AbilityId::new(ability.trim());
        let content = &self.content;

        let result = self
            .mutate(id, |sheet, _| {
                Ok(sheet.learn_ability(&content.abilities, &ability_id, &content.config)?)
            })
            .await;

        match &result {
            Ok(committed) => tracing::info!(
                "Character[{}] learned {} (ability points {})",
                id,
                ability_id,
                committed.value
            ),
            Err(err) => tracing::warn!("Character[{}] cannot learn {}: {}", id, ability_id, err),
        }
        result
    }

    /// Training summary. Persists the reset if one was due.
    pub async fn status(&self, id: CharacterId) -> Result<Committed<TrainingStatus>> {
        self.mutate(id, |sheet, now| Ok(sheet.training_status(now, &self.content.config)))
            .await
    }

    /// Restore pools to their maximums.
    pub async fn rest(&self, id: CharacterId) -> Result<Committed<()>> {
        self.mutate(id, |sheet, _| {
            sheet.rest(&self.content.races);
            Ok(())
        })
        .await
    }

    fn load(&self, id: CharacterId) -> Result<CharacterRecord> {
        self.repository
            .load(id)?
            .ok_or(RuntimeError::CharacterNotFound(id))
    }

    /// Lock handle for a stored character. Entries are only created for ids
    /// that exist and are never removed.
    fn lock_for(&self, id: CharacterId) -> Result<Arc<tokio::sync::Mutex<()>>> {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(lock) = locks.get(&id) {
            return Ok(Arc::clone(lock));
        }
        if !self.repository.exists(id) {
            return Err(RuntimeError::CharacterNotFound(id));
        }
        Ok(Arc::clone(locks.entry(id).or_default()))
    }

    /// Load, reset-check, apply `op`, save; all under the character's lock.
    ///
    /// Nothing is saved when `op` fails.
    async fn mutate<T>(
        &self,
        id: CharacterId,
        op: impl FnOnce(&mut CharacterSheet, DateTime<Utc>) -> Result<T>,
    ) -> Result<Committed<T>> {
        let lock = self.lock_for(id)?;
        let _guard = lock.lock().await;

        let mut record = self.load(id)?;
        let now = self.clock.now();

        let reset_clock = self.content.config.reset_clock();
        if record.sheet.ledger.try_reset(now, &reset_clock) {
            tracing::info!(
                "Character[{}] entered training period {}",
                id,
                reset_clock.period_at(now)
            );
        }

        let value = op(&mut record.sheet, now)?;

        record.touch(now);
        self.repository.save(&record)?;

        Ok(Committed { value, record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::repository::InMemoryCharacterRepository;
    use tactics_core::{AbilityCatalog, RaceTable, RulesConfig};

    fn service() -> CharacterService {
        let content = RulesContent {
            races: RaceTable::standard(),
            abilities: AbilityCatalog::new(),
            config: RulesConfig::default(),
        };
        CharacterService::new(
            Arc::new(InMemoryCharacterRepository::new()),
            Arc::new(content),
            Arc::new(SystemClock),
        )
    }

    fn lock_count(service: &CharacterService) -> usize {
        service.locks.lock().unwrap().len()
    }

    #[tokio::test]
    async fn reused_id_shares_the_lock_of_the_deleted_character() {
        let service = service();
        let first = service.create("Ilya", "human").await.unwrap();
        let queued = service.lock_for(first.id).unwrap();

        service.delete(first.id).await.unwrap();
        let second = service.create("Maren", "gorath").await.unwrap();

        assert_eq!(second.id, first.id);
        assert!(Arc::ptr_eq(&queued, &service.lock_for(second.id).unwrap()));
    }

    #[tokio::test]
    async fn missing_ids_leave_no_lock_entries() {
        let service = service();

        for raw in 100..110 {
            let err = service.grant_bonus(CharacterId(raw), 1).await.unwrap_err();
            assert!(matches!(err, RuntimeError::CharacterNotFound(_)));
        }
        assert!(matches!(
            service.delete(CharacterId(7)).await,
            Err(RuntimeError::CharacterNotFound(_))
        ));
        assert_eq!(lock_count(&service), 0);

        let record = service.create("Ilya", "human").await.unwrap();
        service.grant_bonus(record.id, 1).await.unwrap();
        assert_eq!(lock_count(&service), 1);
    }
}
