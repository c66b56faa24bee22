use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde_json::{Value, json};

use business::domain::recommendation::errors::ProviderError;
use business::domain::recommendation::model::Recommendation;
use business::domain::recommendation::services::RecommendationProvider;

use crate::client::{API_KEY_HEADER, GeminiClient};

const RECOMMENDATION_COUNT: usize = 6;

const SYSTEM_INSTRUCTION: &str = r#"You are a film expert with deep knowledge of world cinema.
Your goal: help users discover their next favorite movie from around the world.

Core principles:
- Look past Hollywood: mix international films from different countries and eras
- Never recommend a movie the user already listed
- Explain each pick in one short sentence tied to the user's taste

Return ONLY a valid JSON array, no additional text."#;

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```[a-zA-Z]*\s*(.*?)\s*```$").expect("fence pattern is valid")
});

pub struct MovieRecommenderGemini {
    client: GeminiClient,
}

impl MovieRecommenderGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(liked_movies: &str) -> String {
        format!(
            r#"Here are some movies I love:
{}

Recommend {} movies I might enjoy next.
For each movie give the title, the release year, the country it comes from, its main genre
and a one-sentence reason why it matches my taste."#,
            liked_movies, RECOMMENDATION_COUNT
        )
    }

    fn request_body(liked_movies: &str) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{"text": SYSTEM_INSTRUCTION}]
            },
            "contents": [
                {"role": "user", "parts": [{"text": Self::build_prompt(liked_movies)}]}
            ],
            "generationConfig": {
                "temperature": 0.8,
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": {"type": "STRING"},
                            "year": {"type": "INTEGER"},
                            "country": {"type": "STRING"},
                            "genre": {"type": "STRING"},
                            "reason": {"type": "STRING"}
                        },
                        "required": ["title", "year", "country", "genre", "reason"]
                    }
                }
            }
        })
    }

    /// Pulls the generated text out of a generateContent response.
    fn extract_text(data: &Value) -> Result<&str, ProviderError> {
        if let Some(reason) = data["promptFeedback"]["blockReason"].as_str() {
            return Err(ProviderError::Api(format!(
                "Request was blocked: {}",
                reason
            )));
        }

        data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part["text"].as_str())
            .ok_or_else(|| {
                ProviderError::MalformedResponse("Gemini returned an empty response.".to_string())
            })
    }

    fn parse_response(content: &str) -> Result<Vec<Recommendation>, ProviderError> {
        let trimmed = content.trim();
        let json_text = FENCED_JSON
            .captures(trimmed)
            .and_then(|captures| captures.get(1))
            .map_or(trimmed, |m| m.as_str());

        let parsed: Vec<Value> = serde_json::from_str(json_text).map_err(|e| {
            ProviderError::MalformedResponse(format!("Could not parse Gemini response: {}", e))
        })?;

        parsed
            .iter()
            .enumerate()
            .map(|(index, item)| -> Result<Recommendation, ProviderError> {
                let title = item
                    .get("title")
                    .and_then(|t| t.as_str())
                    .filter(|t| !t.trim().is_empty())
                    .ok_or_else(|| {
                        ProviderError::MalformedResponse(format!(
                            "Recommendation {} has no title.",
                            index + 1
                        ))
                    })?;

                Ok(Recommendation {
                    title: title.to_string(),
                    year: text_field(item, "year"),
                    country: text_field(item, "country"),
                    genre: text_field(item, "genre"),
                    reason: text_field(item, "reason"),
                    poster_url: text_field(item, "posterUrl"),
                })
            })
            .collect()
    }

    /// Message from a Gemini error body, e.g. `{"error": {"message": "..."}}`.
    fn api_error_message(body: &str) -> Option<String> {
        let data: Value = serde_json::from_str(body).ok()?;
        data["error"]["message"]
            .as_str()
            .filter(|m| !m.trim().is_empty())
            .map(|m| m.to_string())
    }

    fn transport_error(err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Network("The request to Gemini timed out.".to_string())
        } else if err.is_connect() {
            ProviderError::Network("Could not connect to Gemini.".to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// Reads a descriptive field that may come back as a string or a number.
fn text_field(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[async_trait]
impl RecommendationProvider for MovieRecommenderGemini {
    async fn recommend(&self, liked_movies: &str) -> Result<Vec<Recommendation>, ProviderError> {
        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, &self.client.api_key)
            .json(&Self::request_body(liked_movies))
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::api_error_message(&body)
                .unwrap_or_else(|| format!("Gemini returned HTTP {}.", status.as_u16()));
            return Err(ProviderError::Api(message));
        }

        let data: Value = response.json().await.map_err(|e| {
            ProviderError::MalformedResponse(format!("Could not read Gemini response: {}", e))
        })?;

        let content = Self::extract_text(&data)?;

        Self::parse_response(content)
    }
}
