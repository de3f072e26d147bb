use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};

use crate::error::RelnotesError;

const GITHUB_MODELS_URL: &str = "https://models.github.ai/inference/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 2000;

/// Minimal request/response structs for the GitHub Models chat completions
/// API (OpenAI-compatible wire shape).
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[derive(Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Blocking client for the GitHub Models inference endpoint.
pub struct GitHubModelsClient {
    client: Client,
    token: String,
    model: String,
}

impl GitHubModelsClient {
    pub fn new(token: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        GitHubModelsClient {
            client,
            token,
            model,
        }
    }

    /// Send the prompt as a single user message and return the trimmed text
    /// of the first choice. One shot: no retry, no backoff.
    pub fn generate_release_notes(&self, prompt: &str) -> Result<String> {
        let req = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        log::info!("Calling GitHub Models model {:?}", &req.model);
        log::debug!("Release notes prompt:\n{}", truncate(prompt, 3000));

        let resp = self
            .client
            .post(GITHUB_MODELS_URL)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .json(&req)
            .send()
            .context("failed to send request to GitHub Models")?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .context("failed to read GitHub Models response body")?;

        extract_content(status, &body)
    }
}

/// Turn a raw (status, body) pair into the generated notes. Kept separate
/// from the transport so failure handling is testable without a server.
fn extract_content(status: u16, body: &str) -> Result<String> {
    if status != 200 {
        return Err(RelnotesError::Api {
            status,
            body: body.to_string(),
        }
        .into());
    }

    let chat_resp: ChatResponse =
        serde_json::from_str(body).map_err(|e| RelnotesError::MalformedResponse {
            status,
            reason: e.to_string(),
        })?;

    let content = chat_resp
        .choices
        .first()
        .map(|c| c.message.content.as_str())
        .ok_or_else(|| RelnotesError::MalformedResponse {
            status,
            reason: "no choices returned".to_string(),
        })?;

    if let Some(usage) = &chat_resp.usage {
        log::debug!(
            "Token usage: prompt={}, completion={}, total={}",
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens
        );
    }

    Ok(content.trim().to_string())
}

/// Truncate long strings for debug logging. The prompt contains multi-byte
/// emoji, so the cut point backs up to the nearest char boundary.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut cut = max_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...\n[truncated {} chars]", &s[..cut], s.len() - cut)
}
