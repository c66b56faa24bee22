/// Errors raised by the recommendation flow before any provider call is made.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommendationError {
    #[error("Please enter some movies you like.")]
    EmptyInput,
    #[error("A recommendation request is already in progress.")]
    AlreadyLoading,
}

/// Failure reported by a recommendation provider.
///
/// The display text of every variant except `Unknown` is the bare provider
/// message, so it can be appended to the user-facing failure prefix as is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Api(String),
    #[error("{0}")]
    MalformedResponse(String),
    #[error("An unknown error occurred.")]
    Unknown,
}

impl ProviderError {
    /// Human-readable message carried by the error, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ProviderError::Network(message)
            | ProviderError::Api(message)
            | ProviderError::MalformedResponse(message) => {
                Some(message.as_str()).filter(|m| !m.trim().is_empty())
            }
            ProviderError::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_message_of_network_error() {
        let error = ProviderError::Network("timeout".to_string());

        assert_eq!(error.message(), Some("timeout"));
        assert_eq!(error.to_string(), "timeout");
    }

    #[test]
    fn should_have_no_message_when_unknown() {
        assert_eq!(ProviderError::Unknown.message(), None);
    }

    #[test]
    fn should_treat_blank_message_as_missing() {
        assert_eq!(ProviderError::Api("  ".to_string()).message(), None);
    }

    #[test]
    fn should_display_validation_message_for_empty_input() {
        assert_eq!(
            RecommendationError::EmptyInput.to_string(),
            "Please enter some movies you like."
        );
    }
}
