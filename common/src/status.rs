//! Availability results and the per-domain lifecycle
//! `absent -> pending -> {available, unavailable}`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Unavailable,
}

impl From<bool> for Availability {
    fn from(available: bool) -> Self {
        if available {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }
}

/// Identifies one dispatched availability check.
///
/// Every add issues a fresh ticket. A result is only written back while the
/// domain is still pending under the ticket it was issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the status map stores for a domain in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Pending(Ticket),
    Resolved(Availability),
}

/// Rendering view of a cart entry's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Available,
    Unavailable,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Checking...",
            Status::Available => "Available",
            Status::Unavailable => "Unavailable",
        }
    }
}

impl From<CheckState> for Status {
    fn from(state: CheckState) -> Self {
        match state {
            CheckState::Pending(_) => Status::Pending,
            CheckState::Resolved(Availability::Available) => Status::Available,
            CheckState::Resolved(Availability::Unavailable) => Status::Unavailable,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
