use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::SearchOutcome;
use crate::consts::DEFAULT_SEARCH_DELAY_MS;
use crate::generator::Generator;

pub struct SearchConfig {
    /// Pause before generation starts.
    pub delay: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
        }
    }
}

/// Runs generation requests in the background.
///
/// Every request gets the next id from a monotonic counter. Starting a
/// request cancels the one before it, and a request that completes after a
/// newer one started reports [`SearchOutcome::Superseded`] instead of its
/// recipes.
pub struct SearchEngine {
    generator: Arc<dyn Generator>,
    config: SearchConfig,
    latest: Arc<AtomicU64>,
    cancel: Mutex<Option<watch::Sender<bool>>>,
}

/// Handle to one in-flight request.
pub struct SearchTicket {
    pub request_id: u64,
    handle: JoinHandle<SearchOutcome>,
}

impl SearchTicket {
    /// Wait for the request to finish.
    pub async fn outcome(self) -> SearchOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => SearchOutcome::Superseded,
            Err(e) => SearchOutcome::Failed(e.to_string()),
        }
    }
}

impl SearchEngine {
    pub fn new(generator: Arc<dyn Generator>, config: SearchConfig) -> Self {
        Self {
            generator,
            config,
            latest: Arc::new(AtomicU64::new(0)),
            cancel: Mutex::new(None),
        }
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Id of the most recent request, 0 if none has started.
    pub fn latest_request(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Start generating suggestions for `ingredients`. Must be called from
    /// inside a tokio runtime.
    pub fn start(&self, ingredients: Vec<String>) -> SearchTicket {
        let request_id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        if let Some(previous) = self
            .cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(cancel_tx)
        {
            let _ = previous.send(true);
        }

        tracing::info!(
            request_id,
            ingredients = ingredients.len(),
            "search started"
        );

        let generator = Arc::clone(&self.generator);
        let latest = Arc::clone(&self.latest);
        let delay = self.config.delay;

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                Ok(()) = cancel_rx.changed() => {
                    tracing::debug!(request_id, "search cancelled before generation");
                    return SearchOutcome::Superseded;
                }
            }

            let result = generator.generate(&ingredients).await;

            if latest.load(Ordering::SeqCst) != request_id || *cancel_rx.borrow() {
                tracing::debug!(request_id, "search superseded");
                return SearchOutcome::Superseded;
            }

            match result {
                Ok(recipes) => {
                    tracing::info!(request_id, recipes = recipes.len(), "search finished");
                    SearchOutcome::Ready(recipes)
                }
                Err(e) => {
                    tracing::warn!(request_id, error = %e, "recipe generation failed");
                    SearchOutcome::Failed(e.to_string())
                }
            }
        });

        SearchTicket { request_id, handle }
    }

    /// Cancel whatever request is pending. No-op when idle.
    pub fn cancel(&self) {
        if let Some(pending) = self
            .cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            let _ = pending.send(true);
        }
    }
}
