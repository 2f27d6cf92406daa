//! Gemini `generateContent` client.
//!
//! Blocking on purpose: requests run on advisor worker threads, never on the
//! UI thread.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{prompt, Advisor, AdvisorError};
use crate::build_state::BuildState;
use crate::config_file::AdvisorConfig;
use crate::types::Category;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Concatenated text of the first candidate, or `None` if it has none.
fn extract_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");
    let text = text.trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Advisor backed by the Gemini REST API.
///
/// Does not derive Debug so the API key cannot end up in logs.
pub struct GeminiAdvisor {
    client: reqwest::blocking::Client,
    url: String,
    api_key: String,
}

impl GeminiAdvisor {
    /// Create a client for `model` at `endpoint`.
    pub fn new(
        endpoint: &str,
        model: &str,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, AdvisorError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("rigbuilder/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| AdvisorError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: format!(
                "{}/models/{}:generateContent",
                endpoint.trim_end_matches('/'),
                model
            ),
            api_key,
        })
    }

    /// Create a client from configuration, reading the key from the
    /// configured environment variable.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| AdvisorError::NotConfigured(config.api_key_env.clone()))?;
        Self::new(&config.endpoint, &config.model, api_key, config.timeout())
    }

    fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| AdvisorError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdvisorError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| AdvisorError::Decode(e.without_url().to_string()))?;
        extract_text(parsed).ok_or(AdvisorError::EmptyResponse)
    }
}

impl Advisor for GeminiAdvisor {
    fn review_build(&self, build: &BuildState) -> Result<String, AdvisorError> {
        self.generate(&prompt::review_prompt(build))
    }

    fn recommend_part(&self, category: Category, build: &BuildState) -> Result<String, AdvisorError> {
        self.generate(&prompt::recommendation_prompt(category, build))
    }
}
