use super::model::Recommendation;
use super::state::RequestState;

/// One recommendation prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<'a> {
    /// Stable key built from title and position, so duplicate titles stay distinct.
    pub key: String,
    pub recommendation: &'a Recommendation,
}

/// The results region of the page. Exactly one of these is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView<'a> {
    Placeholder,
    Pending,
    ErrorBanner(&'a str),
    ResultGrid(Vec<Card<'a>>),
}

impl<'a> ResultsView<'a> {
    pub fn from_state(state: &'a RequestState) -> Self {
        match state {
            RequestState::Idle => ResultsView::Placeholder,
            RequestState::Loading { .. } => ResultsView::Pending,
            RequestState::Failed(message) => ResultsView::ErrorBanner(message),
            RequestState::Succeeded(recommendations) => ResultsView::ResultGrid(
                recommendations
                    .iter()
                    .enumerate()
                    .map(|(index, recommendation)| Card {
                        key: format!("{}-{}", recommendation.title, index),
                        recommendation,
                    })
                    .collect(),
            ),
        }
    }
}

/// State of the form's submit affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitControl {
    Ready,
    /// Shows a busy indicator; the form refuses resubmission.
    Busy,
}

impl SubmitControl {
    pub fn from_state(state: &RequestState) -> Self {
        if state.is_loading() {
            SubmitControl::Busy
        } else {
            SubmitControl::Ready
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, SubmitControl::Busy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::state::RequestTicket;

    #[test]
    fn should_show_placeholder_when_idle() {
        let state = RequestState::Idle;

        assert_eq!(ResultsView::from_state(&state), ResultsView::Placeholder);
        assert_eq!(SubmitControl::from_state(&state), SubmitControl::Ready);
    }

    #[test]
    fn should_show_busy_control_and_no_results_when_loading() {
        let state = RequestState::Loading {
            ticket: RequestTicket::new(1),
        };

        assert_eq!(ResultsView::from_state(&state), ResultsView::Pending);
        assert!(SubmitControl::from_state(&state).is_disabled());
    }

    #[test]
    fn should_show_error_banner_when_failed() {
        let state = RequestState::Failed("Failed to get recommendations. timeout".to_string());

        assert_eq!(
            ResultsView::from_state(&state),
            ResultsView::ErrorBanner("Failed to get recommendations. timeout")
        );
        assert_eq!(SubmitControl::from_state(&state), SubmitControl::Ready);
    }

    #[test]
    fn should_key_cards_by_title_and_position() {
        let state = RequestState::Succeeded(vec![
            Recommendation::new("Oldboy"),
            Recommendation::new("Oldboy"),
        ]);

        let ResultsView::ResultGrid(cards) = ResultsView::from_state(&state) else {
            panic!("expected result grid");
        };

        let keys: Vec<_> = cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["Oldboy-0", "Oldboy-1"]);
    }

    #[test]
    fn should_show_empty_grid_when_succeeded_without_results() {
        let state = RequestState::Succeeded(vec![]);

        assert_eq!(ResultsView::from_state(&state), ResultsView::ResultGrid(vec![]));
    }
}
