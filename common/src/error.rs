use thiserror::Error;

use crate::domain::{Domain, InvalidDomain};

/// Failure of the availability lookup itself, as opposed to a negative answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("availability check for {domain} failed: {reason}")]
pub struct CheckError {
    pub domain: String,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reason a bulk operation left the cart untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoChange {
    #[error("There are no unavailable domains in your cart")]
    NothingUnavailable,
    #[error("You already have {have} domains which is not more than required ({target})")]
    WithinTarget { have: usize, target: usize },
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Please enter a domain")]
    EmptyInput,
    #[error("Invalid Domain: {0}")]
    InvalidDomain(#[from] InvalidDomain),
    #[error("{0} is already in your cart")]
    Duplicate(Domain),
    #[error("{0} is not in your cart")]
    NotInCart(String),
    #[error("There are no domains to copy")]
    EmptyCart,
    #[error("{0}")]
    NoChange(#[from] NoChange),
    #[error("Failed to copy domains to clipboard: {0}")]
    ClipboardFailure(#[from] ClipboardError),
    #[error("{0}")]
    CheckFailed(#[from] CheckError),
    #[error("Purchase needs exactly {need} domains, your cart has {have}")]
    NotReady { have: usize, need: usize },
}
