//! Simulate a seeded duel between two characters.

use anyhow::Result;
use clap::Parser;
use console::style;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use runtime::{Encounter, Team};
use tactics_content::RulesContent;
use tactics_core::{AttackOutcome, CharacterSheet, StatProfile};

/// Simulate a seeded duel
#[derive(Parser)]
pub struct Duel {
    /// Race of the first fighter
    #[arg(long, default_value = "human")]
    left_race: String,

    /// Uniform stat value of the first fighter
    #[arg(long, default_value_t = 10)]
    left_level: u32,

    /// Race of the second fighter
    #[arg(long, default_value = "gorath")]
    right_race: String,

    /// Uniform stat value of the second fighter
    #[arg(long, default_value_t = 10)]
    right_level: u32,

    /// RNG seed; the same seed replays the same fight
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Give up after this many turns
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// Print every attack
    #[arg(short, long)]
    verbose: bool,
}

impl Duel {
    pub fn execute(self, content: &RulesContent) -> Result<()> {
        let races = &content.races;
        let left = CharacterSheet::with_profile(
            format!("{} {}", self.left_race.trim(), self.left_level),
            self.left_race.trim(),
            StatProfile::uniform(self.left_level),
            races,
        );
        let right = CharacterSheet::with_profile(
            format!("{} {}", self.right_race.trim(), self.right_level),
            self.right_race.trim(),
            StatProfile::uniform(self.right_level),
            races,
        );

        let mut encounter = Encounter::new(content.config.clone());
        encounter.join_sheet(&left, Team(0), races)?;
        encounter.join_sheet(&right, Team(1), races)?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut log = Vec::new();
        let winner = encounter.auto_battle(&mut rng, self.max_turns, &mut log)?;

        println!("{}", style("=== Duel ===").bold().green());
        for (id, combatant) in encounter.combatants() {
            println!(
                "  {} {} ({}) HP {}/{}, base RT {}",
                id,
                combatant.name,
                combatant.team,
                combatant.snapshot.pools.hp,
                combatant.snapshot.derived.max_hp,
                combatant.snapshot.derived.base_rt
            );
        }
        println!();

        if self.verbose {
            println!("{}", style("Attacks:").bold().yellow());
            for report in &log {
                let outcome = match report.result.outcome {
                    AttackOutcome::Dodged => style(report.result.outcome.to_string()).dim(),
                    AttackOutcome::Hit => style(report.result.outcome.to_string()),
                    AttackOutcome::Critical => style(report.result.outcome.to_string()).red().bold(),
                };
                println!(
                    "  [{}] {} -> {} {} {} (HP {}, RT {})",
                    report.clock,
                    report.attacker,
                    report.target,
                    outcome,
                    report.result.damage_dealt(),
                    report.target_hp,
                    report.recovery
                );
            }
            println!();
        }

        let dodged = log
            .iter()
            .filter(|report| report.result.outcome == AttackOutcome::Dodged)
            .count();
        println!("  Attacks:  {} ({} dodged)", log.len(), dodged);
        println!("  Clock:    {}", encounter.clock());
        match winner {
            Some(team) => println!("  {} {}", style("Winner:").bold().cyan(), team),
            None => println!(
                "  {}",
                style(format!("No winner after {} turns", self.max_turns)).yellow()
            ),
        }

        Ok(())
    }
}
