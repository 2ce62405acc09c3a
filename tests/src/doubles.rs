use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use domcart_common::domain::Domain;
use domcart_common::error::{CheckError, ClipboardError};
use domcart_common::ports::{AvailabilityChecker, Clipboard};
use tokio::sync::oneshot;

type Answer = Result<bool, CheckError>;

/// Availability checker whose answers are handed out by the test, one call at a time.
#[derive(Default)]
pub struct ManualChecker {
    waiting: Mutex<HashMap<String, VecDeque<oneshot::Sender<Answer>>>>,
}

impl ManualChecker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answers the oldest outstanding call for `domain`.
    pub async fn answer(&self, domain: &str, answer: Answer) {
        for _ in 0..1_000 {
            let sender = self
                .waiting
                .lock()
                .unwrap()
                .get_mut(domain)
                .and_then(VecDeque::pop_front);
            if let Some(sender) = sender {
                sender.send(answer).expect("check task went away");
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("no availability check was issued for {domain}");
    }
}

#[async_trait]
impl AvailabilityChecker for ManualChecker {
    async fn is_available(&self, domain: &Domain) -> Result<bool, CheckError> {
        let (tx, rx) = oneshot::channel();
        self.waiting
            .lock()
            .unwrap()
            .entry(domain.to_string())
            .or_default()
            .push_back(tx);

        rx.await.unwrap_or_else(|_| {
            Err(CheckError {
                domain: domain.to_string(),
                reason: "checker dropped".to_string(),
            })
        })
    }
}

/// Clipboard keeping every successful write.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub writes: Arc<Mutex<Vec<String>>>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard in tests".to_string()))
    }
}

/// Checker that blows up on every call.
pub struct PanickingChecker;

#[async_trait]
impl AvailabilityChecker for PanickingChecker {
    async fn is_available(&self, domain: &Domain) -> Result<bool, CheckError> {
        panic!("lookup for {domain} exploded");
    }
}
