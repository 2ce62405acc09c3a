pub mod action;
pub mod check;
pub mod shop;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use domcart_common::config::{Config, DEFAULT_CHECK_DELAY, DEFAULT_ODDS, DEFAULT_TARGET};

#[derive(Parser)]
#[command(name = "domcart")]
#[command(about = "A domain shopping cart for the terminal.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Number of domains to buy
    #[arg(long, global = true, default_value_t = DEFAULT_TARGET, value_parser = parse_target)]
    pub target: usize,

    /// Latency of the simulated availability lookup, in milliseconds
    #[arg(long = "delay-ms", global = true, default_value_t = DEFAULT_CHECK_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Probability that a domain comes back available
    #[arg(long, global = true, default_value_t = DEFAULT_ODDS, value_parser = parse_odds)]
    pub odds: f64,

    /// Seed for the availability lookup, for reproducible runs
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Never touch the clipboard
    #[arg(long, global = true)]
    pub no_clipboard: bool,

    /// Skip the start-up banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output, repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive cart (default)
    #[command(alias = "s")]
    Shop,
    /// Check a list of domains once and print the resulting cart
    #[command(alias = "c")]
    Check { domains: Vec<String> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_parts(self) -> (Commands, Config) {
        let cfg = Config {
            target: self.target,
            check_delay: Duration::from_millis(self.delay_ms),
            odds: self.odds,
            seed: self.seed,
            no_clipboard: self.no_clipboard,
            no_banner: self.no_banner,
            quiet: self.quiet,
            verbose: self.verbose,
        };
        (self.command.unwrap_or(Commands::Shop), cfg)
    }
}

fn parse_target(s: &str) -> Result<usize, String> {
    let target: usize = s.parse().map_err(|e| format!("{e}"))?;
    if target == 0 {
        return Err("target must be at least 1".to_string());
    }
    Ok(target)
}

fn parse_odds(s: &str) -> Result<f64, String> {
    let odds: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !(0.0..=1.0).contains(&odds) {
        return Err(format!("{odds} is not between 0 and 1"));
    }
    Ok(odds)
}
