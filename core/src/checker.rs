//! # Mock Availability Checker
//!
//! Stands in for a registrar lookup: waits a fixed delay, then flips a
//! weighted coin. It never fails on its own.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use domcart_common::config::Config;
use domcart_common::domain::Domain;
use domcart_common::error::CheckError;
use domcart_common::ports::AvailabilityChecker;

pub struct MockChecker {
    delay: Duration,
    odds: f64,
    rng: Mutex<StdRng>,
}

impl MockChecker {
    pub fn new(delay: Duration, odds: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            delay,
            odds: odds.clamp(0.0, 1.0),
            rng: Mutex::new(rng),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.check_delay, cfg.odds, cfg.seed)
    }

    fn roll(&self, domain: &Domain) -> Result<bool, CheckError> {
        let mut rng = self.rng.lock().map_err(|_| CheckError {
            domain: domain.to_string(),
            reason: "random source poisoned".to_string(),
        })?;
        Ok(rng.random_bool(self.odds))
    }
}

#[async_trait]
impl AvailabilityChecker for MockChecker {
    async fn is_available(&self, domain: &Domain) -> Result<bool, CheckError> {
        debug!("checking domain availability for {domain}");
        tokio::time::sleep(self.delay).await;
        let available = self.roll(domain)?;
        debug!("{domain} available: {available}");
        Ok(available)
    }
}
