//! Character commands backed by the file repository.
//!
//! Every command goes through the authoritative service, so stored
//! characters see the same locking, reset checks and validation as a server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use runtime::{CharacterId, CharacterRecord, CharacterService, FileCharacterRepository, SystemClock};
use tactics_content::RulesContent;

use super::{print_derived, print_profile};
use crate::dirs;

/// Stored character commands
#[derive(Parser)]
pub enum CharacterCommand {
    /// Create a character at starting stats
    Create {
        name: String,
        #[arg(short, long, default_value = "human")]
        race: String,
    },

    /// List stored character ids
    List,

    /// Show a character's stats, ledger and abilities
    Show { id: CharacterId },

    /// Spend banked points on a stat
    Train {
        id: CharacterId,
        #[arg(value_name = "STAT")]
        stat: String,
        #[arg(value_name = "COUNT")]
        count: u32,
    },

    /// Record a completed role-play session
    Session { id: CharacterId },

    /// Grant out-of-band training points
    Grant { id: CharacterId, amount: u32 },

    /// Earn ability points
    EarnAp { id: CharacterId, amount: u32 },

    /// Learn an ability from the catalog
    Learn { id: CharacterId, ability: String },

    /// Restore HP and resource
    Rest { id: CharacterId },

    /// Delete a stored character
    Delete { id: CharacterId },
}

impl CharacterCommand {
    pub fn execute(self, content: RulesContent) -> Result<()> {
        tokio::runtime::Runtime::new()?.block_on(self.execute_async(content))
    }

    async fn execute_async(self, content: RulesContent) -> Result<()> {
        let save_dir = std::env::var_os("TACTICS_SAVE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(dirs::save_dir);
        let repository = FileCharacterRepository::new(&save_dir)
            .with_context(|| format!("Failed to open save directory: {}", save_dir.display()))?;
        tracing::debug!("Using save directory {}", save_dir.display());

        let service = CharacterService::new(
            Arc::new(repository),
            Arc::new(content),
            Arc::new(SystemClock),
        );

        match self {
            Self::Create { name, race } => {
                let record = service.create(&name, race.trim()).await?;
                println!("{} {}", style("Created character").green().bold(), record.id);
                show(&service, &record).await?;
            }
            Self::List => {
                let ids = service.list().await?;
                if ids.is_empty() {
                    println!("{}", style("No characters stored").dim());
                }
                for id in ids {
                    let record = service.get(id).await?;
                    println!(
                        "  {:>4}  {:<16} {:<10} level {}",
                        id.to_string(),
                        record.sheet.name,
                        record.sheet.race,
                        record.sheet.level()
                    );
                }
            }
            Self::Show { id } => {
                let status = service.status(id).await?;
                show(&service, &status.record).await?;
            }
            Self::Train { id, stat, count } => {
                let committed = service.allocate(id, &stat, count).await?;
                let allocation = committed.value;
                println!(
                    "Trained {} +{} for {} points (bank {})",
                    allocation.stat, allocation.applied, allocation.spent, allocation.new_bank
                );
                if allocation.is_partial() {
                    println!(
                        "  {}",
                        style(format!("Requested {}, bank ran out", allocation.requested)).yellow()
                    );
                }
            }
            Self::Session { id } => {
                let award = service.award_session(id).await?.value;
                if award.awarded == 0 {
                    println!(
                        "{}",
                        style(format!("Daily cap of {} reached", award.daily_cap)).yellow()
                    );
                } else {
                    println!(
                        "Awarded {} points ({}/{} today)",
                        award.awarded, award.earned_today, award.daily_cap
                    );
                }
            }
            Self::Grant { id, amount } => {
                let bank = service.grant_bonus(id, amount).await?.value;
                println!("Granted {} points (bank {})", amount, bank);
            }
            Self::EarnAp { id, amount } => {
                let award = service.earn_ability_points(id, amount).await?.value;
                println!(
                    "Earned {} ability points (balance {}{})",
                    award.awarded,
                    award.balance,
                    if award.at_cap { ", daily cap reached" } else { "" }
                );
            }
            Self::Learn { id, ability } => {
                let remaining = service.learn_ability(id, &ability).await?.value;
                println!("Learned {} ({} ability points left)", ability.trim(), remaining);
            }
            Self::Rest { id } => {
                let record = service.rest(id).await?.record;
                println!(
                    "Rested: HP {}, resource {}",
                    record.sheet.pools.hp, record.sheet.pools.resource
                );
            }
            Self::Delete { id } => {
                service.delete(id).await?;
                println!("{} {}", style("Deleted character").red().bold(), id);
            }
        }

        Ok(())
    }
}

async fn show(service: &CharacterService, record: &CharacterRecord) -> Result<()> {
    let sheet = &record.sheet;
    let ledger = &sheet.ledger;
    let now = service.now();
    let config = &service.content().config;

    println!(
        "{} {} ({}, revision {})",
        style("Character:").bold().cyan(),
        sheet.name,
        sheet.race,
        record.revision
    );
    println!();
    print_profile(&sheet.profile);
    println!();
    print_derived(&service.derived(record.id).await?);
    println!();

    println!("{}", style("Training:").bold().yellow());
    println!("  Bank:           {}", ledger.points_bank);
    println!(
        "  Today:          {}/{} points, {} sessions",
        ledger.daily_points_earned,
        config.daily_point_cap(sheet.level()),
        ledger.daily_sessions
    );
    println!("  Ability points: {}", ledger.ability_points);
    println!(
        "  Next reset in:  {}s",
        config.reset_clock().seconds_until_next_reset(now)
    );
    println!("  Pools:          HP {}, resource {}", sheet.pools.hp, sheet.pools.resource);
    println!();

    println!("{}", style("Abilities:").bold().yellow());
    if sheet.abilities.is_empty() {
        println!("  {}", style("none").dim());
    }
    for id in sheet.abilities.iter() {
        match service.content().abilities.get(id) {
            Some(entry) => println!("  {} ({} {}, {})", id, entry.group, entry.kind, entry.tier),
            None => println!("  {}", id),
        }
    }

    Ok(())
}
