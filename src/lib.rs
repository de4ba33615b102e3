//! # docqa
//!
//! Ask natural-language questions about a PDF document or an image using
//! locally hosted Ollama models.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF upload
//!  │
//!  ├─ 1. Extract   per-page text via lopdf (blocking thread)
//!  ├─ 2. Prompt    "PDF content:\n…\n\nQuestion: …\nAnswer:"
//!  ├─ 3. Gateway   POST /api/chat, single user turn
//!  └─ 4. Polish    strip <think>…</think>, trim → answer string
//!
//! image upload
//!  │
//!  ├─ 1. Encode    RGB raster → JPEG → base64
//!  ├─ 2. Gateway   POST /api/generate {model, prompt, images}
//!  └─ 3. Collect   NDJSON `response` chunks in line order → answer string
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docqa::{answer_from_pdf, QaConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = QaConfig::default();
//!     let answer = answer_from_pdf("report.pdf", "What is the key finding?", &config).await;
//!     println!("{answer}");
//! }
//! ```
//!
//! The caller-facing functions always return a string and never raise:
//! failures surface as `"Error occurred: <detail>"` or one of the literal
//! short-circuit messages. The structured [`QaError`] taxonomy is available
//! at every layer below for callers that want to drive the gateway or the
//! pipeline stages directly.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod pipeline;
pub mod prompts;
pub mod qa;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{QaConfig, QaConfigBuilder, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_PDF_MODEL};
pub use error::QaError;
pub use gateway::{ModelGateway, ModelResponse, PromptRequest};
pub use logging::LogConfig;
pub use qa::{
    answer_from_image, answer_from_image_raw, answer_from_image_sync, answer_from_pdf,
    answer_from_pdf_sync,
    IMAGE_PROCESSING_FAILED, NO_ANSWER_RECEIVED, PDF_EXTRACTION_FAILED,
};
