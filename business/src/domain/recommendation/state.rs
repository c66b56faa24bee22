use super::errors::{ProviderError, RecommendationError};
use super::model::Recommendation;

pub const FAILURE_PREFIX: &str = "Failed to get recommendations. ";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Sequence number identifying one request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse status of a [`RequestState`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Idle => write!(f, "idle"),
            RequestStatus::Loading => write!(f, "loading"),
            RequestStatus::Succeeded => write!(f, "succeeded"),
            RequestStatus::Failed => write!(f, "failed"),
        }
    }
}

/// What the page renders from. Exactly one variant holds at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading {
        ticket: RequestTicket,
    },
    Succeeded(Vec<Recommendation>),
    Failed(String),
}

/// Inputs to the request state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestEvent {
    /// Submission refused before reaching the provider.
    Rejected(RecommendationError),
    /// A new provider call went out. Replaces any previous result or error.
    Started(RequestTicket),
    /// The provider call identified by `ticket` settled.
    Completed {
        ticket: RequestTicket,
        outcome: Result<Vec<Recommendation>, ProviderError>,
    },
}

impl RequestState {
    /// Pure transition function.
    ///
    /// A completion only applies while the state is `Loading` with the same
    /// ticket; anything else is a stale response and leaves the state as is.
    pub fn apply(self, event: RequestEvent) -> RequestState {
        match event {
            RequestEvent::Rejected(error) => RequestState::Failed(error.to_string()),
            RequestEvent::Started(ticket) => RequestState::Loading { ticket },
            RequestEvent::Completed { ticket, outcome } => {
                if !self.is_awaiting(ticket) {
                    return self;
                }
                match outcome {
                    Ok(recommendations) => RequestState::Succeeded(recommendations),
                    Err(error) => RequestState::Failed(failure_message(&error)),
                }
            }
        }
    }

    /// Whether a completion for `ticket` would be accepted.
    pub fn is_awaiting(&self, ticket: RequestTicket) -> bool {
        matches!(self, RequestState::Loading { ticket: current } if *current == ticket)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }

    pub fn status(&self) -> RequestStatus {
        match self {
            RequestState::Idle => RequestStatus::Idle,
            RequestState::Loading { .. } => RequestStatus::Loading,
            RequestState::Succeeded(_) => RequestStatus::Succeeded,
            RequestState::Failed(_) => RequestStatus::Failed,
        }
    }

    /// Recommendations of a succeeded cycle, empty otherwise.
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            RequestState::Succeeded(recommendations) => recommendations,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// User-facing text for a failed provider call.
pub fn failure_message(error: &ProviderError) -> String {
    format!(
        "{}{}",
        FAILURE_PREFIX,
        error.message().unwrap_or(UNKNOWN_ERROR_MESSAGE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading(sequence: u64) -> RequestState {
        RequestState::Loading {
            ticket: RequestTicket::new(sequence),
        }
    }

    fn titles(state: &RequestState) -> Vec<&str> {
        state
            .recommendations()
            .iter()
            .map(|r| r.title.as_str())
            .collect()
    }

    #[test]
    fn should_start_idle() {
        let state = RequestState::default();

        assert_eq!(state, RequestState::Idle);
        assert_eq!(state.status(), RequestStatus::Idle);
        assert!(!state.is_loading());
    }

    #[test]
    fn should_fail_with_validation_message_when_rejected() {
        let state = RequestState::Idle.apply(RequestEvent::Rejected(RecommendationError::EmptyInput));

        assert_eq!(
            state,
            RequestState::Failed("Please enter some movies you like.".to_string())
        );
    }

    #[test]
    fn should_move_to_loading_when_started() {
        let state = RequestState::Idle.apply(RequestEvent::Started(RequestTicket::new(1)));

        assert!(state.is_loading());
        assert!(state.is_awaiting(RequestTicket::new(1)));
    }

    #[test]
    fn should_clear_previous_result_when_started() {
        let succeeded = RequestState::Succeeded(vec![Recommendation::new("Memento")]);
        let state = succeeded.apply(RequestEvent::Started(RequestTicket::new(2)));

        assert!(state.recommendations().is_empty());
        assert_eq!(state.error(), None);
        assert!(state.is_loading());
    }

    #[test]
    fn should_clear_previous_error_when_started() {
        let failed = RequestState::Failed("Failed to get recommendations. timeout".to_string());
        let state = failed.apply(RequestEvent::Started(RequestTicket::new(3)));

        assert_eq!(state.error(), None);
        assert!(state.is_loading());
    }

    #[test]
    fn should_succeed_preserving_provider_order() {
        let state = loading(1).apply(RequestEvent::Completed {
            ticket: RequestTicket::new(1),
            outcome: Ok(vec![
                Recommendation::new("Memento"),
                Recommendation::new("Oldboy"),
                Recommendation::new("Memento"),
            ]),
        });

        assert_eq!(state.status(), RequestStatus::Succeeded);
        assert_eq!(titles(&state), vec!["Memento", "Oldboy", "Memento"]);
    }

    #[test]
    fn should_succeed_with_empty_list() {
        let state = loading(1).apply(RequestEvent::Completed {
            ticket: RequestTicket::new(1),
            outcome: Ok(vec![]),
        });

        assert_eq!(state, RequestState::Succeeded(vec![]));
    }

    #[test]
    fn should_prefix_provider_message_when_failed() {
        let state = loading(1).apply(RequestEvent::Completed {
            ticket: RequestTicket::new(1),
            outcome: Err(ProviderError::Network("timeout".to_string())),
        });

        assert_eq!(
            state.error(),
            Some("Failed to get recommendations. timeout")
        );
    }

    #[test]
    fn should_use_fallback_text_when_provider_error_has_no_message() {
        let state = loading(1).apply(RequestEvent::Completed {
            ticket: RequestTicket::new(1),
            outcome: Err(ProviderError::Unknown),
        });

        assert_eq!(
            state.error(),
            Some("Failed to get recommendations. An unknown error occurred.")
        );
    }

    #[test]
    fn should_ignore_completion_for_stale_ticket() {
        let state = loading(2).apply(RequestEvent::Completed {
            ticket: RequestTicket::new(1),
            outcome: Ok(vec![Recommendation::new("Memento")]),
        });

        assert_eq!(state, loading(2));
    }

    #[test]
    fn should_ignore_completion_when_not_loading() {
        let failed = RequestState::Failed("Please enter some movies you like.".to_string());
        let state = failed.clone().apply(RequestEvent::Completed {
            ticket: RequestTicket::new(1),
            outcome: Err(ProviderError::Unknown),
        });

        assert_eq!(state, failed);
    }

    #[test]
    fn should_display_status_in_snake_case() {
        assert_eq!(RequestStatus::Succeeded.to_string(), "succeeded");
        assert_eq!(loading(1).status().to_string(), "loading");
    }
}
