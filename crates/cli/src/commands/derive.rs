//! Show derived combat stats for a profile and race.

use anyhow::Result;
use clap::Parser;
use console::style;
use tactics_content::RulesContent;

use super::{ProfileArgs, print_derived, print_profile};

/// Show derived combat stats
#[derive(Parser)]
pub struct Derive {
    /// Race key (unknown races use baseline modifiers)
    #[arg(short, long, default_value = "human")]
    race: String,

    #[command(flatten)]
    stats: ProfileArgs,
}

impl Derive {
    pub fn execute(self, content: &RulesContent) -> Result<()> {
        let profile = self.stats.profile();
        let race = self.race.trim();

        println!("{} {}", style("Race:").bold().cyan(), race);
        if !content.races.contains(race) {
            println!(
                "  {}",
                style("Unknown race, baseline modifiers apply").dim()
            );
        }
        println!();

        print_profile(&profile);
        println!();
        print_derived(&content.races.derive(&profile, race));

        Ok(())
    }
}
