//! # Cart State Manager
//!
//! Holds the ordered list of accepted domains together with the availability
//! state of each one. Both are only ever changed through the methods below, so
//! every key of the status map is always a member of the cart.

use std::cmp::Reverse;
use std::collections::HashMap;

use domcart_common::domain::Domain;
use domcart_common::error::{CartError, CheckError, NoChange};
use domcart_common::status::{Availability, CheckState, Status, Ticket};

pub mod progress;
pub mod scoring;

use progress::Progress;

/// An availability lookup the caller still has to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub domain: Domain,
    pub ticket: Ticket,
}

/// Result of folding a finished check back into the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Applied {
        domain: Domain,
        availability: Availability,
        /// Set when the lookup failed and the domain was closed as unavailable.
        failure: Option<CheckError>,
    },
    /// The domain was removed, or removed and re-added, while the check ran.
    Stale { domain: Domain },
}

#[derive(Debug)]
pub struct Cart {
    domains: Vec<Domain>,
    states: HashMap<Domain, CheckState>,
    target: usize,
    last_ticket: Ticket,
}

impl Cart {
    pub fn new(target: usize) -> Self {
        Self {
            domains: Vec::new(),
            states: HashMap::new(),
            target,
            last_ticket: Ticket::new(0),
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn contains(&self, domain: &Domain) -> bool {
        self.states.contains_key(domain)
    }

    pub fn status(&self, domain: &Domain) -> Option<Status> {
        self.states.get(domain).copied().map(Status::from)
    }

    /// Domains in cart order with their current status.
    pub fn entries(&self) -> impl Iterator<Item = (&Domain, Status)> {
        self.domains.iter().map(|domain| {
            let status = self.status(domain).unwrap_or(Status::Pending);
            (domain, status)
        })
    }

    /// Validates `input` and appends it as pending.
    ///
    /// The returned request must be run by the caller and its answer handed
    /// to [`Cart::resolve`].
    pub fn add(&mut self, input: &str) -> Result<CheckRequest, CartError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CartError::EmptyInput);
        }

        let domain = Domain::parse(trimmed)?;
        if self.contains(&domain) {
            return Err(CartError::Duplicate(domain));
        }

        self.last_ticket = self.last_ticket.next();
        let ticket = self.last_ticket;

        self.domains.push(domain.clone());
        self.states.insert(domain.clone(), CheckState::Pending(ticket));

        Ok(CheckRequest { domain, ticket })
    }

    /// Writes a check result back, unless the entry it was issued for is gone.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        domain: &Domain,
        result: Result<bool, CheckError>,
    ) -> Resolution {
        let Some(state) = self.states.get_mut(domain) else {
            return Resolution::Stale {
                domain: domain.clone(),
            };
        };
        if *state != CheckState::Pending(ticket) {
            return Resolution::Stale {
                domain: domain.clone(),
            };
        }

        let (availability, failure) = match result {
            Ok(available) => (Availability::from(available), None),
            Err(err) => (Availability::Unavailable, Some(err)),
        };
        *state = CheckState::Resolved(availability);

        Resolution::Applied {
            domain: domain.clone(),
            availability,
            failure,
        }
    }

    pub fn remove(&mut self, input: &str) -> Result<Domain, CartError> {
        let wanted = input.trim().to_lowercase();
        let Some(idx) = self.domains.iter().position(|d| d.as_str() == wanted) else {
            return Err(CartError::NotInCart(input.trim().to_string()));
        };

        let domain = self.domains.remove(idx);
        self.states.remove(&domain);
        Ok(domain)
    }

    /// Empties the cart, returning how many domains were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.domains.len();
        self.domains.clear();
        self.states.clear();
        dropped
    }

    /// Keeps only domains confirmed available. Pending ones are dropped too.
    pub fn remove_unavailable(&mut self) -> Result<usize, CartError> {
        let states = &self.states;
        let keep: Vec<Domain> = self
            .domains
            .iter()
            .filter(|d| {
                states.get(*d) == Some(&CheckState::Resolved(Availability::Available))
            })
            .cloned()
            .collect();

        let dropped = self.domains.len() - keep.len();
        if dropped == 0 {
            return Err(NoChange::NothingUnavailable.into());
        }

        self.states.retain(|d, _| keep.contains(d));
        self.domains = keep;
        Ok(dropped)
    }

    /// Trims the cart to the `n` highest scoring domains, best first.
    ///
    /// Equal scores keep their insertion order. Returns the dropped domains.
    pub fn keep_best(&mut self, n: usize) -> Result<Vec<Domain>, CartError> {
        if self.domains.len() <= n {
            return Err(NoChange::WithinTarget {
                have: self.domains.len(),
                target: n,
            }
            .into());
        }

        let mut ranked = std::mem::take(&mut self.domains);
        ranked.sort_by_key(|d| Reverse(scoring::score(d)));
        let dropped = ranked.split_off(n);

        self.states.retain(|d, _| !dropped.contains(d));
        self.domains = ranked;
        Ok(dropped)
    }

    /// The cart as a `", "` separated list.
    pub fn copy_text(&self) -> Result<String, CartError> {
        if self.domains.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(self
            .domains
            .iter()
            .map(Domain::as_str)
            .collect::<Vec<_>>()
            .join(", "))
    }

    pub fn can_purchase(&self) -> bool {
        self.domains.len() == self.target
    }

    /// Acknowledges a purchase of exactly [`Cart::target`] domains.
    pub fn purchase(&self) -> Result<usize, CartError> {
        if !self.can_purchase() {
            return Err(CartError::NotReady {
                have: self.domains.len(),
                need: self.target,
            });
        }
        Ok(self.domains.len())
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.domains.len(), self.target)
    }
}
