use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use super::errors::{ProviderError, RecommendationError};
use super::model::Recommendation;
use super::state::{RequestEvent, RequestState, RequestTicket};

/// Single source of truth for the current [`RequestState`].
///
/// Every change goes through [`RequestState::apply`] while the channel's write
/// lock is held, so readers only ever see whole snapshots.
pub struct RequestStateStore {
    sender: watch::Sender<RequestState>,
    sequence: AtomicU64,
}

impl RequestStateStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(RequestState::Idle);
        Self {
            sender,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> RequestState {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.sender.subscribe()
    }

    /// Issues the next ticket and moves to `Loading` for it.
    pub fn begin(&self) -> RequestTicket {
        let mut issued = RequestTicket::default();
        self.sender.send_modify(|state| {
            let ticket = RequestTicket::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
            issued = ticket;
            *state = std::mem::take(state).apply(RequestEvent::Started(ticket));
        });
        issued
    }

    /// Like [`begin`](Self::begin), but refuses while a request is loading.
    ///
    /// The check and the move to `Loading` happen under one write lock.
    pub fn try_begin(&self) -> Result<RequestTicket, RecommendationError> {
        let mut issued = None;
        self.sender.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            let ticket = RequestTicket::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
            issued = Some(ticket);
            *state = std::mem::take(state).apply(RequestEvent::Started(ticket));
            true
        });
        issued.ok_or(RecommendationError::AlreadyLoading)
    }

    /// Like [`reject`](Self::reject), but leaves a loading request alone.
    pub fn try_reject(&self, error: RecommendationError) -> Result<RequestState, RecommendationError> {
        let applied = self.sender.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = std::mem::take(state).apply(RequestEvent::Rejected(error));
            true
        });
        if applied {
            Ok(self.snapshot())
        } else {
            Err(RecommendationError::AlreadyLoading)
        }
    }

    pub fn reject(&self, error: RecommendationError) -> RequestState {
        self.apply(RequestEvent::Rejected(error))
    }

    /// Settles the request identified by `ticket`.
    ///
    /// Returns `None` when the ticket is no longer the one being awaited.
    pub fn complete(
        &self,
        ticket: RequestTicket,
        outcome: Result<Vec<Recommendation>, ProviderError>,
    ) -> Option<RequestState> {
        let accepted = self.sender.send_if_modified(|state| {
            if !state.is_awaiting(ticket) {
                return false;
            }
            *state = std::mem::take(state).apply(RequestEvent::Completed { ticket, outcome });
            true
        });
        accepted.then(|| self.snapshot())
    }

    pub fn apply(&self, event: RequestEvent) -> RequestState {
        self.sender
            .send_modify(|state| *state = std::mem::take(state).apply(event));
        self.snapshot()
    }
}

impl Default for RequestStateStore {
    fn default() -> Self {
        Self::new()
    }
}
