//! Operator tool for the tactics rules engine.
//!
//! Inspects derived stats, previews training, shows the reset countdown,
//! simulates seeded duels and manages stored characters.
//! Run with: `cargo run -p tactics-cli -- <command>`

mod commands;
mod dirs;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{CharacterCommand, Derive, Duel, Preview, ResetStatus};
use tactics_content::ContentFactory;

/// Tactics rules engine tools
#[derive(Parser)]
#[command(name = "tactics")]
#[command(about = "Rules inspection and character tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding rules.toml, races.ron and abilities.ron
    #[arg(long, global = true, env = "TACTICS_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show derived combat stats for a profile and race
    Derive(Derive),

    /// Preview spending banked points on a stat
    Preview(Preview),

    /// Show the current training period and time until reset
    ResetStatus(ResetStatus),

    /// Simulate a seeded duel between two characters
    Duel(Duel),

    /// Manage stored characters
    #[command(subcommand)]
    Character(CharacterCommand),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for TACTICS_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let content = ContentFactory::new(&cli.data_dir)
        .load_all()
        .with_context(|| format!("Failed to load rules content from {}", cli.data_dir.display()))?;
    tracing::debug!(
        "Loaded {} races and {} abilities from {}",
        content.races.len(),
        content.abilities.len(),
        cli.data_dir.display()
    );

    match cli.command {
        Command::Derive(cmd) => cmd.execute(&content),
        Command::Preview(cmd) => cmd.execute(&content),
        Command::ResetStatus(cmd) => cmd.execute(&content),
        Command::Duel(cmd) => cmd.execute(&content),
        Command::Character(cmd) => cmd.execute(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn data_dir_defaults_to_data() {
        let cli = Cli::try_parse_from(["tactics", "derive", "--race", "gorath", "--str", "12"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("data"));
        assert!(matches!(cli.command, Command::Derive(_)));
    }
}
