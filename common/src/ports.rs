//! # Outbound Ports
//!
//! Contracts for everything the cart needs from the outside world.
//! Concrete implementations live in `domcart-core` (mock checker) and
//! `domcart-cli` (terminal clipboard).

use async_trait::async_trait;

use crate::domain::Domain;
use crate::error::{CheckError, ClipboardError};

/// Answers whether a domain can be registered.
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    /// Resolves to `true` if `domain` is free.
    ///
    /// An `Err` means the lookup itself failed; callers treat it as
    /// unavailable but report it separately.
    async fn is_available(&self, domain: &Domain) -> Result<bool, CheckError>;
}

/// Write-only text export.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
