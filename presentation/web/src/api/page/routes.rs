use std::sync::Arc;

use poem::handler;
use poem::web::{Data, Form, Html, Redirect};
use serde::Deserialize;

use crate::api::page::render::render_page;
use crate::session::RecommendationSession;

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub movies: String,
}

/// Renders the page from the current input and request state.
#[handler]
pub async fn index(session: Data<&Arc<RecommendationSession>>) -> Html<String> {
    let input = session.input().await;
    Html(render_page(&input, &session.snapshot()))
}

/// Starts a request cycle from the form post and sends the browser straight
/// back to the page, which shows the busy state until the cycle settles.
#[handler]
pub async fn submit(
    session: Data<&Arc<RecommendationSession>>,
    Form(form): Form<SubmitForm>,
) -> Redirect {
    if let Err(err) = session.submit(form.movies).await {
        tracing::warn!("Ignored form submission: {}", err);
    }
    Redirect::see_other("/")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use poem::http::StatusCode;
    use poem::test::TestClient;

    use business::domain::recommendation::errors::ProviderError;
    use business::domain::recommendation::model::Recommendation;

    use crate::api::test_support::{StubProvider, test_app, wait_until_settled};

    #[tokio::test]
    async fn should_render_idle_page() {
        let cli = TestClient::new(test_app(StubProvider::returning(Ok(vec![]))));

        let resp = cli.get("/").send().await;

        resp.assert_status_is_ok();
        resp.assert_content_type("text/html; charset=utf-8");
        let body = resp.0.into_body().into_string().await.unwrap();
        assert!(body.contains("CineSuggest AI"));
        assert!(body.contains("Your personalized movie recommendations will appear here."));
    }

    #[tokio::test]
    async fn should_redirect_after_submit_and_render_results() {
        let provider = StubProvider::returning(Ok(vec![
            Recommendation::new("Memento"),
            Recommendation::new("Oldboy"),
        ]));
        let cli = TestClient::new(test_app(provider));

        let resp = cli
            .post("/")
            .form(&[("movies", "Parasite, Inception")])
            .send()
            .await;

        resp.assert_status(StatusCode::SEE_OTHER);
        resp.assert_header("location", "/");
        wait_until_settled(&cli).await;

        let page = cli.get("/").send().await;
        let body = page.0.into_body().into_string().await.unwrap();
        assert!(body.contains("Here are some movies you might enjoy:"));
        assert!(body.contains("<h3>Memento</h3>"));
        assert!(body.contains("<h3>Oldboy</h3>"));
        assert!(body.contains(">Parasite, Inception</textarea>"));
    }

    #[tokio::test]
    async fn should_redirect_to_busy_page_while_provider_is_working() {
        let provider = StubProvider::returning(Ok(vec![Recommendation::new("Oldboy")])).gated();
        let gate = provider.gate();
        let cli = TestClient::new(test_app(provider));

        let resp = tokio::time::timeout(
            Duration::from_secs(1),
            cli.post("/").form(&[("movies", "Parasite")]).send(),
        )
        .await
        .unwrap();
        resp.assert_status(StatusCode::SEE_OTHER);

        let page = cli.get("/").send().await;
        let body = page.0.into_body().into_string().await.unwrap();
        assert!(body.contains("Finding Gems..."));
        assert!(body.contains("<button type=\"submit\" disabled>"));

        gate.notify_one();
        wait_until_settled(&cli).await;

        let page = cli.get("/").send().await;
        let body = page.0.into_body().into_string().await.unwrap();
        assert!(!body.contains("Finding Gems..."));
        assert!(body.contains("<h3>Oldboy</h3>"));
    }

    #[tokio::test]
    async fn should_render_error_banner_after_failed_submit() {
        let provider = StubProvider::returning(Err(ProviderError::Network("timeout".to_string())));
        let cli = TestClient::new(test_app(provider));

        cli.post("/")
            .form(&[("movies", "Amelie")])
            .send()
            .await
            .assert_status(StatusCode::SEE_OTHER);
        wait_until_settled(&cli).await;

        let page = cli.get("/").send().await;
        let body = page.0.into_body().into_string().await.unwrap();
        assert!(body.contains("Failed to get recommendations. timeout"));
        assert!(!body.contains("will appear here"));
    }

    #[tokio::test]
    async fn should_render_validation_message_for_blank_form() {
        let provider = StubProvider::returning(Ok(vec![Recommendation::new("Memento")]));
        let calls = provider.calls();
        let cli = TestClient::new(test_app(provider));

        cli.post("/").form(&[("movies", "  ")]).send().await;

        let page = cli.get("/").send().await;
        let body = page.0.into_body().into_string().await.unwrap();
        assert!(body.contains("Please enter some movies you like."));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }
}
