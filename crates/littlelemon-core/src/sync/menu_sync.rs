use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, MenuClient};
use crate::cache::MenuCache;
use crate::config::ClearPolicy;
use crate::models::{Dish, MenuList};

/// Buffer size for the sync message channel.
/// Each sync sends one message; superseded syncs are aborted.
const CHANNEL_BUFFER_SIZE: usize = 8;

/// Completion report of one background fetch.
#[derive(Debug)]
pub struct SyncMessage {
    pub generation: u64,
    pub result: Result<Vec<Dish>, ApiError>,
}

/// What a finished sync did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The cache now holds this many rows from the remote menu.
    Updated { rows: usize },
    /// Fetch or decode failed; the cache was left as the clear policy had it.
    Failed(String),
}

enum Woken {
    Message(SyncMessage),
    TaskEnded(Result<(), JoinError>),
}

struct InFlight {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Drives menu syncs for a single `MenuCache` owner.
pub struct MenuSync {
    client: MenuClient,
    policy: ClearPolicy,
    tx: mpsc::Sender<SyncMessage>,
    rx: mpsc::Receiver<SyncMessage>,
    generation: u64,
    in_flight: Option<InFlight>,
    last_outcome: Option<SyncOutcome>,
}

impl MenuSync {
    pub fn new(client: MenuClient, policy: ClearPolicy) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        Self {
            client,
            policy,
            tx,
            rx,
            generation: 0,
            in_flight: None,
            last_outcome: None,
        }
    }

    pub fn is_syncing(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_outcome(&self) -> Option<&SyncOutcome> {
        self.last_outcome.as_ref()
    }

    /// Start a background sync, cancelling any sync still in flight.
    ///
    /// Must be called from within a Tokio runtime. The cache is cleared
    /// right away under `ClearPolicy::BeforeFetch`.
    pub fn start(&mut self, cache: &mut MenuCache) {
        self.cancel();
        self.clear_before_fetch(cache);

        self.generation += 1;
        let generation = self.generation;
        let client = self.client.clone();
        let tx = self.tx.clone();

        info!(generation, url = %client.menu_url(), "Starting menu sync");
        let handle = tokio::spawn(async move {
            let result = client.fetch_menu().await.map(MenuList::into_dishes);
            Self::send_message(&tx, SyncMessage { generation, result }).await;
        });

        self.in_flight = Some(InFlight { generation, handle });
    }

    /// Abort the sync in flight, if any. A message it already sent is
    /// discarded when drained.
    pub fn cancel(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            debug!(generation = in_flight.generation, "Cancelling menu sync");
            in_flight.handle.abort();
            self.generation += 1;
        }
    }

    /// Helper to send sync results, logging any channel errors
    async fn send_message(tx: &mpsc::Sender<SyncMessage>, message: SyncMessage) {
        if let Err(e) = tx.send(message).await {
            error!(error = %e, "Failed to send sync result - channel closed");
        }
    }

    /// Apply every completed sync without blocking. Returns the outcome of
    /// the current sync if it finished.
    pub fn check_background_tasks(&mut self, cache: &mut MenuCache) -> Option<SyncOutcome> {
        // Checked before draining: a finished task has already queued its message
        let task_finished = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.handle.is_finished());

        let mut outcome = None;
        while let Ok(message) = self.rx.try_recv() {
            if let Some(o) = self.process_message(cache, message) {
                outcome = Some(o);
            }
        }

        if task_finished && self.in_flight.is_some() {
            outcome = Some(self.task_ended(cache, Ok(())));
        }
        outcome
    }

    /// Wait for the sync in flight to finish and apply it. Returns `None`
    /// when nothing is in flight.
    pub async fn wait(&mut self, cache: &mut MenuCache) -> Option<SyncOutcome> {
        loop {
            let woken = {
                let in_flight = self.in_flight.as_mut()?;
                tokio::select! {
                    biased;
                    message = self.rx.recv() => Woken::Message(message?),
                    joined = &mut in_flight.handle => Woken::TaskEnded(joined),
                }
            };

            match woken {
                Woken::Message(message) => {
                    if let Some(outcome) = self.process_message(cache, message) {
                        return Some(outcome);
                    }
                }
                Woken::TaskEnded(joined) => return Some(self.task_ended(cache, joined)),
            }
        }
    }

    /// The task in flight is done. Its message, if it sent one, is already
    /// queued; a task that died without one counts as a failed sync.
    fn task_ended(&mut self, cache: &mut MenuCache, joined: Result<(), JoinError>) -> SyncOutcome {
        self.in_flight = None;
        while let Ok(message) = self.rx.try_recv() {
            if let Some(outcome) = self.process_message(cache, message) {
                return outcome;
            }
        }

        let reason = match joined {
            Err(e) => format!("Menu sync task failed: {}", e),
            Ok(()) => "Menu sync task ended without a result".to_string(),
        };
        warn!(%reason, "Menu sync failed");
        let outcome = SyncOutcome::Failed(reason);
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    fn process_message(&mut self, cache: &mut MenuCache, message: SyncMessage) -> Option<SyncOutcome> {
        if message.generation != self.generation {
            debug!(
                generation = message.generation,
                current = self.generation,
                "Dropping result of superseded menu sync"
            );
            return None;
        }
        self.in_flight = None;
        Some(self.apply_result(cache, message.result))
    }

    /// Run a whole sync against a body that was fetched elsewhere.
    pub fn apply_payload(&mut self, cache: &mut MenuCache, body: &[u8]) -> SyncOutcome {
        self.cancel();
        self.clear_before_fetch(cache);
        let result = MenuList::from_slice(body)
            .map(MenuList::into_dishes)
            .map_err(ApiError::from);
        self.apply_result(cache, result)
    }

    fn clear_before_fetch(&self, cache: &mut MenuCache) {
        if self.policy == ClearPolicy::BeforeFetch {
            if let Err(e) = cache.clear() {
                warn!(error = %e, "Failed to clear menu cache");
            }
        }
    }

    fn apply_result(&mut self, cache: &mut MenuCache, result: Result<Vec<Dish>, ApiError>) -> SyncOutcome {
        let outcome = match result {
            Ok(rows) => {
                let count = rows.len();
                match cache.replace_all(rows) {
                    Ok(()) => {
                        info!(rows = count, "Menu sync complete");
                        SyncOutcome::Updated { rows: count }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to store synced menu");
                        SyncOutcome::Failed(e.to_string())
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Menu sync failed");
                SyncOutcome::Failed(e.to_string())
            }
        };
        self.last_outcome = Some(outcome.clone());
        outcome
    }
}

impl Drop for MenuSync {
    fn drop(&mut self) {
        self.cancel();
    }
}
