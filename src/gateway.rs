//! Model Gateway: the request/response mediation layer.
//!
//! This module turns heterogeneous inputs (assembled prompts, base64 images)
//! into Ollama requests and normalizes heterogeneous model outputs back into
//! plain text. Two dispatch paths exist, selected by modality:
//!
//! * [`ModelGateway::dispatch_text`] — a single chat-style exchange via
//!   `/api/chat`; reasoning segments are stripped from the completion.
//! * [`ModelGateway::dispatch_multimodal`] — `/api/generate` with attached
//!   images; the body comes back as newline-delimited JSON chunks that are
//!   concatenated in line order.
//!
//! The gateway is intentionally thin: prompt assembly lives in
//! [`crate::prompts`], completion cleanup in [`crate::pipeline::postprocess`],
//! and the rendering of errors as user-facing text in [`crate::qa`]. No retry,
//! no timeout, no conversation history — a failure is terminal for that call.

use crate::error::QaError;
use crate::pipeline::postprocess;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// A single model request: target model, prompt text, attached images.
///
/// Invariant: `prompt` is non-empty before dispatch, and `images` is empty
/// for text-only requests.
#[derive(Debug, Clone, Serialize)]
pub struct PromptRequest {
    pub model: String,
    pub prompt: String,
    pub images: Vec<String>,
}

/// A normalized model response. The completion is always plain text with
/// reasoning segments stripped and surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub completion: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    message: ChatReplyMessage,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize, Default)]
struct ChatReplyMessage {
    #[serde(default)]
    content: String,
}

/// Gateway to a locally hosted Ollama server.
#[derive(Debug, Clone)]
pub struct ModelGateway {
    client: reqwest::Client,
    base_url: String,
}

impl ModelGateway {
    /// Create a gateway for the given base URL (e.g. `http://localhost:11434`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Send a text-only prompt as a single user turn to `/api/chat`.
    ///
    /// The raw completion may contain a `<think>…</think>` reasoning segment;
    /// it is stripped in its entirety before the result is trimmed and
    /// returned. No conversation history is retained or replayed.
    pub async fn dispatch_text(&self, model: &str, prompt: &str) -> Result<ModelResponse, QaError> {
        validate_request(model, prompt)?;

        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        debug!("Dispatching text prompt ({} chars) to model '{model}'", prompt.len());
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .inspect_err(|e| error!("Error running model {model}: {e}"))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            error!("Error running model {model}: HTTP {status}; response text: {body}");
            return Err(QaError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatReply = serde_json::from_str(&body).map_err(|e| {
            error!("Error running model {model}: undecodable chat reply: {e}");
            QaError::ModelRuntime {
                model: model.to_string(),
                detail: format!("undecodable chat reply: {e}"),
            }
        })?;

        if let Some(detail) = reply.error {
            error!("Error running model {model}: {detail}");
            return Err(QaError::ModelRuntime {
                model: model.to_string(),
                detail,
            });
        }

        info!("Model '{model}' chat response received");
        Ok(ModelResponse {
            completion: postprocess::normalize_completion(&reply.message.content),
        })
    }

    /// Send a prompt plus base64 images to `/api/generate`.
    ///
    /// The endpoint replies with newline-delimited JSON objects collapsed
    /// into one body; each non-blank line is parsed independently and its
    /// `response` field concatenated in line order. A malformed line is
    /// logged and skipped, never fatal to the whole response.
    pub async fn dispatch_multimodal(
        &self,
        model: &str,
        prompt: &str,
        images: &[String],
    ) -> Result<ModelResponse, QaError> {
        validate_request(model, prompt)?;

        let url = format!("{}/api/generate", self.base_url);
        let request = PromptRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            images: images.to_vec(),
        };

        debug!(
            "Dispatching multimodal prompt ({} chars, {} images) to model '{model}'",
            prompt.len(),
            images.len()
        );
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .inspect_err(|e| error!("Error in API request to model {model}: {e}"))?;

        // Capture whatever body arrived before deciding on the status, so the
        // error path can log the raw response text.
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            error!("Error in API request to model {model}: HTTP {status}; response text: {body}");
            return Err(QaError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let completion = collect_ndjson_responses(&body);
        info!("Model '{model}' generate response received ({} chars)", completion.len());
        Ok(ModelResponse { completion })
    }
}

/// Concatenate the `response` fields of a newline-delimited JSON body in
/// line order, then trim. Lines that fail to parse are logged and skipped.
fn collect_ndjson_responses(body: &str) -> String {
    let mut completion = String::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<serde_json::Value>(line) {
            Ok(obj) => {
                if let Some(part) = obj.get("response").and_then(|v| v.as_str()) {
                    completion.push_str(part);
                }
            }
            Err(e) => warn!("Error parsing JSON line: {e}"),
        }
    }
    completion.trim().to_string()
}

fn validate_request(model: &str, prompt: &str) -> Result<(), QaError> {
    if model.is_empty() {
        return Err(QaError::InvalidRequest("model identifier is empty".into()));
    }
    if prompt.is_empty() {
        return Err(QaError::InvalidRequest("prompt is empty".into()));
    }
    Ok(())
}
