//! Show the training period and the countdown to the next reset.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use console::style;
use tactics_content::RulesContent;

/// Show the current training period
#[derive(Parser)]
pub struct ResetStatus {
    /// Evaluate at this RFC 3339 instant instead of now
    #[arg(long, value_name = "TIME")]
    at: Option<String>,

    /// Character level used for the daily point cap
    #[arg(short, long, default_value_t = 1)]
    level: u32,
}

impl ResetStatus {
    pub fn execute(self, content: &RulesContent) -> Result<()> {
        let now = match &self.at {
            Some(at) => DateTime::parse_from_rfc3339(at)
                .with_context(|| format!("Invalid timestamp: {}", at))?
                .with_timezone(&Utc),
            None => Utc::now(),
        };

        let config = &content.config;
        let clock = config.reset_clock();
        let seconds = clock.seconds_until_next_reset(now);

        println!("{} {}", style("Now:").bold().cyan(), now.to_rfc3339());
        println!("{} {}", style("Period:").bold().cyan(), clock.period_at(now));
        println!(
            "{} {} ({:02}:00 UTC)",
            style("Next reset:").bold().cyan(),
            clock.next_reset_after(now).to_rfc3339(),
            clock.cutover_hour()
        );
        println!(
            "{} {:02}h {:02}m {:02}s",
            style("Remaining:").bold().cyan(),
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        );
        println!(
            "{} {} points at level {}",
            style("Daily cap:").bold().cyan(),
            config.daily_point_cap(self.level),
            self.level
        );

        Ok(())
    }
}
