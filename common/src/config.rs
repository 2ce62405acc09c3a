use std::time::Duration;

/// How many domains a cart should end up holding.
pub const DEFAULT_TARGET: usize = 5;

/// Artificial latency of the mock availability lookup.
pub const DEFAULT_CHECK_DELAY: Duration = Duration::from_millis(1000);

/// Probability that the mock lookup reports a domain as available.
pub const DEFAULT_ODDS: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Number of domains required before a purchase is allowed.
    pub target: usize,
    /// Delay applied by the mock checker before answering.
    pub check_delay: Duration,
    /// Chance in `[0, 1]` that a domain comes back available.
    pub odds: f64,
    /// Seeds the checker's RNG so runs can be replayed.
    pub seed: Option<u64>,
    /// Disables clipboard export.
    ///
    /// `copy` still builds the list, the write is reported as failed.
    pub no_clipboard: bool,
    pub no_banner: bool,
    pub quiet: u8,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            check_delay: DEFAULT_CHECK_DELAY,
            odds: DEFAULT_ODDS,
            seed: None,
            no_clipboard: false,
            no_banner: false,
            quiet: 0,
            verbose: false,
        }
    }
}
