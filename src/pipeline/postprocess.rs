//! Completion normalization: strip reasoning segments and trim.
//!
//! Reasoning models (deepseek-r1 and friends) emit an internal deliberation
//! block delimited by `<think>` / `</think>` before the user-facing answer.
//! That block is model scratchpad, not answer content, so the gateway strips
//! it in its entirety — markers included — before returning a completion.
//!
//! The match is non-greedy and spans line breaks: a completion containing two
//! separate reasoning blocks loses both, without swallowing the answer text
//! between them.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_REASONING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<think>.*?</think>").unwrap());

/// Remove every `<think>…</think>` segment from `input`.
pub fn strip_reasoning(input: &str) -> String {
    RE_REASONING.replace_all(input, "").to_string()
}

/// Normalize a raw completion: strip reasoning segments, then trim
/// leading/trailing whitespace.
pub fn normalize_completion(input: &str) -> String {
    strip_reasoning(input).trim().to_string()
}
