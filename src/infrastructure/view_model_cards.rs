use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use futures::{
    StreamExt, future,
    stream::{self, BoxStream},
};
use log::debug;
use tokio::{
    sync::watch,
    task::{AbortHandle, JoinHandle},
};

use crate::{CardsRepository, FetchEvent, FetchResult, ViewState};

/// Drives card fetches and publishes the resulting view state.
///
/// A new [`CardsViewModel::trigger_fetch`] cancels the fetch still in flight.
/// Each fetch carries a generation and only the latest generation publishes, so
/// a stale response never overwrites a newer one, even when it completes while
/// being cancelled. Dropping the view model cancels the fetch in flight.
pub struct CardsViewModel {
    /// The cards repository
    repository: Arc<dyn CardsRepository>,

    /// The published view state
    state: Arc<watch::Sender<ViewState>>,

    /// The fetch task in flight, if any
    in_flight: Mutex<Option<AbortHandle>>,

    /// The generation of the latest fetch
    generation: Arc<AtomicU64>,
}

impl CardsViewModel {
    /// Creates a new `CardsViewModel` instance with the given repository.
    pub fn new(repository: Arc<dyn CardsRepository>) -> Self {
        let (state, _) = watch::channel(ViewState::default());

        Self {
            repository,
            state: Arc::new(state),
            in_flight: Mutex::new(None),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Subscribes to the view state updates.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Returns a snapshot of the current view state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Starts a fetch on the current tokio runtime, cancelling the one in flight.
    ///
    /// The returned handle can be ignored, the effects are observed through the
    /// view state.
    pub fn trigger_fetch(&self) -> JoinHandle<()> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = in_flight.take() {
            if !previous.is_finished() {
                debug!("Cancelling the fetch in flight");
            }
            previous.abort();
        }

        let handle = tokio::spawn(Self::run_fetch(
            self.repository.get_cards(),
            Arc::clone(&self.state),
            self.next_generation(),
        ));
        *in_flight = Some(handle.abort_handle());

        handle
    }

    /// Runs a fetch to completion on the calling task.
    ///
    /// Unlike [`CardsViewModel::trigger_fetch`], this does not abort a fetch in
    /// flight, but the older fetch stops publishing once this one starts.
    pub async fn fetch_cards(&self) {
        Self::run_fetch(
            self.repository.get_cards(),
            Arc::clone(&self.state),
            self.next_generation(),
        )
        .await
    }

    fn next_generation(&self) -> FetchGeneration {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        FetchGeneration {
            id,
            current: Arc::clone(&self.generation),
        }
    }

    async fn run_fetch(
        results: BoxStream<'static, FetchResult>,
        state: Arc<watch::Sender<ViewState>>,
        generation: FetchGeneration,
    ) {
        stream::once(future::ready(FetchEvent::Started))
            .chain(results.map(FetchEvent::Completed))
            .for_each(|event| {
                debug!("Fetch #{} event: {event:?}", generation.id);
                // Checked under the state lock: a superseded fetch never publishes.
                let published = state.send_if_modified(|state| {
                    if generation.is_current() {
                        state.apply(event);
                        true
                    } else {
                        false
                    }
                });
                if !published {
                    debug!("Dropped event of superseded fetch #{}", generation.id);
                }
                future::ready(())
            })
            .await
    }
}

/// Identifies a fetch, only the latest one may publish view state.
struct FetchGeneration {
    id: u64,
    current: Arc<AtomicU64>,
}

impl FetchGeneration {
    fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.id
    }
}

impl Drop for CardsViewModel {
    fn drop(&mut self) {
        let in_flight = self
            .in_flight
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = in_flight.take() {
            handle.abort();
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
