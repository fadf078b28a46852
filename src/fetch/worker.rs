//! Background worker thread for outbound search requests.
//!
//! This module implements the fetch worker: a dedicated thread that consumes
//! [`FetchRequest`]s from a single-consumer channel, performs one blocking GET
//! per request, and reports exactly one [`FetchOutcome`] per request back to the
//! event loop. Running requests off the main thread keeps the interactive
//! front-end responsive while a search is in flight.

use crate::domain::error::{Result, StoryfetchError};
use crate::domain::Story;
use crate::fetch::response::SearchResponse;
use crate::fetch::{FetchOutcome, FetchRequest};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Fetch worker state owning the HTTP client.
///
/// The client is constructed once with a request timeout and reused for every
/// request the worker handles.
pub struct FetchWorker {
    client: reqwest::blocking::Client,
}

impl FetchWorker {
    /// Creates a worker with a client configured for the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoryfetchError::Fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Handles one fetch request and returns its outcome.
    ///
    /// Issues a single GET to the request target. A success status with a
    /// decodable body yields [`FetchOutcome::Delivered`]. Everything else
    /// (transport error, non-success status, undecodable body) collapses into
    /// [`FetchOutcome::Failed`]. The underlying error is logged at debug level
    /// and goes no further.
    pub fn handle_request(&self, request: &FetchRequest) -> FetchOutcome {
        let _span = tracing::debug_span!("handle_fetch_request", target = %request.target).entered();

        match self.perform(&request.target) {
            Ok(stories) => {
                tracing::debug!(story_count = stories.len(), "search response delivered");
                FetchOutcome::Delivered { stories }
            }
            Err(e) => {
                tracing::debug!(error = %e, "search request failed");
                FetchOutcome::Failed
            }
        }
    }

    /// Performs the GET and decodes the response payload.
    fn perform(&self, target: &str) -> std::result::Result<Vec<Story>, reqwest::Error> {
        let response = self.client.get(target).send()?.error_for_status()?;
        let payload: SearchResponse = response.json()?;
        Ok(payload.into_stories())
    }
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker").finish_non_exhaustive()
    }
}

/// Spawns the fetch worker thread and returns the request sender.
///
/// The worker drains the returned channel in FIFO order, invoking `on_outcome`
/// once per request. The thread exits when every sender has been dropped. The
/// outcome callback typically forwards into the runtime's event channel.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed or the thread
/// cannot be spawned.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use storyfetch::fetch::{spawn_fetch_worker, FetchRequest};
///
/// let requests = spawn_fetch_worker(Duration::from_secs(10), |outcome| {
///     println!("{outcome:?}");
/// })?;
/// requests.send(FetchRequest::new("https://hn.algolia.com/api/v1/search?query=rust"))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn spawn_fetch_worker<F>(timeout: Duration, on_outcome: F) -> Result<mpsc::Sender<FetchRequest>>
where
    F: Fn(FetchOutcome) + Send + 'static,
{
    let worker = FetchWorker::new(timeout)?;
    let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();

    thread::Builder::new()
        .name("storyfetch-fetch".to_string())
        .spawn(move || {
            for request in request_rx {
                let outcome = worker.handle_request(&request);
                on_outcome(outcome);
            }
            tracing::debug!("request channel closed, fetch worker exiting");
        })
        .map_err(|e| StoryfetchError::Worker(format!("failed to spawn fetch worker: {e}")))?;

    Ok(request_tx)
}
