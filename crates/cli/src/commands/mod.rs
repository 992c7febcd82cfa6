//! Command implementations
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod character;
mod derive;
mod duel;
mod preview;
mod reset_status;

pub use character::CharacterCommand;
pub use derive::Derive;
pub use duel::Duel;
pub use preview::Preview;
pub use reset_status::ResetStatus;

use clap::Args;
use console::style;
use tactics_core::{DerivedStats, StatProfile};

/// The six training stats, each defaulting to the starting value.
#[derive(Args, Clone, Copy, Debug)]
pub struct ProfileArgs {
    #[arg(long = "str", default_value_t = StatProfile::STARTING_VALUE)]
    strength: u32,
    #[arg(long = "spd", default_value_t = StatProfile::STARTING_VALUE)]
    speed: u32,
    #[arg(long = "agi", default_value_t = StatProfile::STARTING_VALUE)]
    agility: u32,
    #[arg(long = "end", default_value_t = StatProfile::STARTING_VALUE)]
    endurance: u32,
    #[arg(long = "sta", default_value_t = StatProfile::STARTING_VALUE)]
    stamina: u32,
    #[arg(long = "ether", default_value_t = StatProfile::STARTING_VALUE)]
    ether_control: u32,
}

impl ProfileArgs {
    pub fn profile(&self) -> StatProfile {
        StatProfile::new(
            self.strength,
            self.speed,
            self.agility,
            self.endurance,
            self.stamina,
            self.ether_control,
        )
    }
}

pub(crate) fn print_profile(profile: &StatProfile) {
    println!("{}", style("Training Stats:").bold().yellow());
    for (stat, value) in profile.iter() {
        println!("  {:<14} {}", stat.to_string(), value);
    }
    println!("  {:<14} {}", "level", profile.level());
}

pub(crate) fn print_derived(derived: &DerivedStats) {
    println!("{}", style("Derived Stats:").bold().yellow());
    let rows = [
        ("max_hp", derived.max_hp),
        ("max_resource", derived.max_resource),
        ("resource_regen", derived.resource_regen),
        ("attack", derived.attack),
        ("defense", derived.defense),
        ("ether_attack", derived.ether_attack),
        ("ether_defense", derived.ether_defense),
        ("avoidance", derived.avoidance),
        ("accuracy", derived.accuracy),
        ("crit_percent", derived.crit_percent),
        ("movement", derived.movement),
        ("jump", derived.jump),
        ("base_rt", derived.base_rt),
    ];
    for (name, value) in rows {
        println!("  {:<14} {}", name, value);
    }
}
