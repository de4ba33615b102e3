//! Error types for the docqa library.
//!
//! Every failure mode is a structured [`QaError`] variant, not a stringly
//! sentinel. The taxonomy mirrors the four places a Q&A call can fail:
//!
//! * **Extraction** — the PDF could not be opened or parsed at all.
//! * **ImageEncoding** — the raster buffer could not be turned into a
//!   base64 JPEG (usually a shape mismatch).
//! * **Transport / HttpStatus** — the model endpoint was unreachable or
//!   answered outside the 2xx range.
//! * **ModelRuntime** — the model process itself reported an error.
//!
//! Errors are recovered at the orchestrator boundary in [`crate::qa`] and
//! rendered there as display text; no variant escapes `answer_from_*`.
//! Keeping the structure until that final step lets tests assert on the
//! taxonomy instead of string-matching messages.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the docqa library.
#[derive(Debug, Error)]
pub enum QaError {
    // ── Extraction errors ─────────────────────────────────────────────────
    /// The PDF could not be opened or its structure could not be parsed.
    #[error("PDF extraction failed for '{path}': {detail}")]
    Extraction { path: PathBuf, detail: String },

    // ── Encoding errors ───────────────────────────────────────────────────
    /// The in-memory raster could not be encoded as a base64 JPEG.
    #[error("Image encoding failed: {detail}")]
    ImageEncoding { detail: String },

    // ── Gateway errors ────────────────────────────────────────────────────
    /// A request was rejected before dispatch (empty prompt or model id).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The model endpoint could not be reached or the connection failed.
    #[error("Model endpoint transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The model endpoint answered with a non-success HTTP status.
    ///
    /// `body` carries whatever response text was received before the
    /// failure so it can be logged alongside the status.
    #[error("Model endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The model process reported an error of its own.
    #[error("Model '{model}' failed: {detail}")]
    ModelRuntime { model: String, detail: String },

    // ── Config / infrastructure errors ────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Log directory or file could not be created.
    #[error("Logging setup failed: {0}")]
    Logging(#[source] std::io::Error),

    /// Unexpected internal error (runtime construction, joined task panic).
    #[error("Internal error: {0}")]
    Internal(String),
}
