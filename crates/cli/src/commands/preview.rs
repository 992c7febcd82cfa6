//! Preview an allocation without committing it.

use anyhow::Result;
use clap::Parser;
use console::style;
use tactics_content::RulesContent;
use tactics_core::{TrainingLedger, parse_stat};

use super::{ProfileArgs, print_derived};

/// Preview spending banked points on a stat
#[derive(Parser)]
pub struct Preview {
    /// Stat to raise (e.g. strength, spd, ether_control)
    #[arg(value_name = "STAT")]
    stat: String,

    /// Number of +1 increments to buy
    #[arg(value_name = "COUNT")]
    count: u32,

    /// Points in the bank
    #[arg(short, long, default_value_t = 0)]
    bank: u32,

    /// Race key used for the derived stat comparison
    #[arg(short, long, default_value = "human")]
    race: String,

    #[command(flatten)]
    stats: ProfileArgs,
}

impl Preview {
    pub fn execute(self, content: &RulesContent) -> Result<()> {
        let stat = parse_stat(&self.stat)?;
        let profile = self.stats.profile();
        let ledger = TrainingLedger::new(self.bank);

        let allocation = ledger.preview_allocate(&profile, stat, self.count)?;

        let mut after = profile;
        *after.get_mut(stat) += allocation.applied;

        println!("{}", style("=== Allocation Preview ===").bold().green());
        println!("  Stat:       {} ({} -> {})", stat, profile.get(stat), after.get(stat));
        println!("  Requested:  {}", allocation.requested);
        println!("  Applied:    {}", allocation.applied);
        println!("  Spent:      {}", allocation.spent);
        println!("  Bank after: {}", allocation.new_bank);
        if allocation.is_partial() {
            println!(
                "  {}",
                style("Bank ran out before every increment was bought").yellow()
            );
        }
        println!();

        let race = self.race.trim();
        let before = content.races.derive(&profile, race);
        let derived = content.races.derive(&after, race);
        print_derived(&derived);
        if derived.base_rt != before.base_rt || derived.max_hp != before.max_hp {
            println!();
            println!(
                "  {} max_hp {:+}, base_rt {:+}",
                style("Change:").dim(),
                i64::from(derived.max_hp) - i64::from(before.max_hp),
                i64::from(derived.base_rt) - i64::from(before.base_rt)
            );
        }

        Ok(())
    }
}
