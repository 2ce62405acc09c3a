//! # Cart Session
//!
//! Owns one [`Cart`] and the collaborators it needs. Every add spawns its own
//! availability task; results come back over a channel and are folded in on
//! the session's task, so the cart itself is never shared.
//!
//! Results may arrive in any order. [`Cart::resolve`] drops the ones whose
//! domain left the cart in the meantime.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use domcart_common::domain::Domain;
use domcart_common::error::{CartError, CheckError};
use domcart_common::ports::{AvailabilityChecker, Clipboard};
use domcart_common::status::Ticket;

use crate::cart::progress::Progress;
use crate::cart::{Cart, CheckRequest, Resolution};

/// A finished availability lookup on its way back to the session.
#[derive(Debug)]
pub struct CheckOutcome {
    pub ticket: Ticket,
    pub domain: Domain,
    pub result: Result<bool, CheckError>,
}

pub struct Session {
    cart: Cart,
    checker: Arc<dyn AvailabilityChecker>,
    clipboard: Box<dyn Clipboard>,
    outcome_tx: UnboundedSender<CheckOutcome>,
    outcome_rx: UnboundedReceiver<CheckOutcome>,
    in_flight: usize,
}

impl Session {
    pub fn new(
        target: usize,
        checker: Arc<dyn AvailabilityChecker>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            cart: Cart::new(target),
            checker,
            clipboard,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn progress(&self) -> Progress {
        self.cart.progress()
    }

    /// Number of availability checks that have not reported back yet.
    pub fn pending(&self) -> usize {
        self.in_flight
    }

    /// Adds `input` to the cart and starts its availability check.
    ///
    /// Must be called from within a tokio runtime.
    pub fn add(&mut self, input: &str) -> Result<Domain, CartError> {
        let request = self.cart.add(input)?;
        let domain = request.domain.clone();
        self.dispatch(request);
        Ok(domain)
    }

    fn dispatch(&mut self, request: CheckRequest) {
        let checker = Arc::clone(&self.checker);
        let tx = self.outcome_tx.clone();
        self.in_flight += 1;

        debug!("dispatching check {} for {}", request.ticket, request.domain);
        tokio::spawn(async move {
            let domain = request.domain.clone();
            let lookup = tokio::spawn(async move { checker.is_available(&domain).await });

            // A panicking checker still has to report back, or `settle` waits forever.
            let result = lookup.await.unwrap_or_else(|err| {
                Err(CheckError {
                    domain: request.domain.to_string(),
                    reason: format!("lookup task aborted: {err}"),
                })
            });
            let _ = tx.send(CheckOutcome {
                ticket: request.ticket,
                domain: request.domain,
                result,
            });
        });
    }

    pub fn remove(&mut self, input: &str) -> Result<Domain, CartError> {
        self.cart.remove(input)
    }

    pub fn clear(&mut self) -> usize {
        self.cart.clear()
    }

    pub fn remove_unavailable(&mut self) -> Result<usize, CartError> {
        self.cart.remove_unavailable()
    }

    /// Trims the cart down to its target size.
    pub fn keep_best(&mut self) -> Result<Vec<Domain>, CartError> {
        let target = self.cart.target();
        self.cart.keep_best(target)
    }

    /// Exports the cart to the clipboard, returning how many domains were copied.
    pub fn copy_all(&self) -> Result<usize, CartError> {
        let text = self.cart.copy_text()?;
        self.clipboard.write_text(&text)?;
        Ok(self.cart.len())
    }

    pub fn purchase(&self) -> Result<usize, CartError> {
        self.cart.purchase()
    }

    /// Waits for the next check to finish and applies it.
    ///
    /// Returns `None` straight away when nothing is in flight.
    pub async fn settle(&mut self) -> Option<Resolution> {
        if self.in_flight == 0 {
            return None;
        }
        let outcome = self.outcome_rx.recv().await?;
        Some(self.apply(outcome))
    }

    /// Waits for every outstanding check.
    pub async fn drain(&mut self) -> Vec<Resolution> {
        let mut resolutions = Vec::with_capacity(self.in_flight);
        while let Some(resolution) = self.settle().await {
            resolutions.push(resolution);
        }
        resolutions
    }

    fn apply(&mut self, outcome: CheckOutcome) -> Resolution {
        self.in_flight = self.in_flight.saturating_sub(1);

        if let Err(err) = &outcome.result {
            debug!("{err}, closing {} as unavailable", outcome.domain);
        }

        let resolution = self
            .cart
            .resolve(outcome.ticket, &outcome.domain, outcome.result);
        if let Resolution::Stale { domain } = &resolution {
            debug!("ignoring late result for {domain}");
        }
        resolution
    }
}
