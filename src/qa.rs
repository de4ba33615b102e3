//! Question-answering orchestrators: the caller-facing contract.
//!
//! Each orchestrator is a linear pipeline with two short-circuit exits:
//! input adaptation (extract / encode), prompt assembly, gateway dispatch,
//! answer rendering. Both functions **always return a string and never
//! raise** — every structured [`QaError`] is rendered as display text at
//! this boundary, so callers get `"Error occurred: <detail>"` instead of a
//! fault. The structured error stays testable everywhere below this layer.
//!
//! A call blocks until the model responds or errors: no retries, no timeout,
//! no cancellation. A host that needs those wraps the async fns in its own
//! task boundary without changing this contract.

use crate::config::QaConfig;
use crate::error::QaError;
use crate::gateway::ModelGateway;
use crate::pipeline::{encode, extract};
use crate::prompts;
use image::RgbImage;
use std::path::Path;
use tracing::{error, info};

/// Literal returned when the PDF yields no text (short-circuit, no model call).
pub const PDF_EXTRACTION_FAILED: &str = "PDF text extraction failed.";

/// Literal returned when the image cannot be encoded (short-circuit, no model call).
pub const IMAGE_PROCESSING_FAILED: &str = "Image processing failed.";

/// Literal returned when the model produced no answer text.
pub const NO_ANSWER_RECEIVED: &str = "No answer received.";

/// Answer a question about a PDF document.
///
/// Extracts the document text, assembles the prompt, and dispatches it to
/// `config.pdf_model` via the chat path. Returns the completion, or one of
/// the literal failure strings — never an `Err`.
pub async fn answer_from_pdf(pdf_path: impl AsRef<Path>, question: &str, config: &QaConfig) -> String {
    let path = pdf_path.as_ref().to_path_buf();

    // lopdf is synchronous; keep it off the async executor.
    let extracted = tokio::task::spawn_blocking(move || extract::extract_text(&path)).await;
    let text = match extracted {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            error!("PDF extraction error: {e}");
            return PDF_EXTRACTION_FAILED.to_string();
        }
        Err(e) => {
            error!("PDF extraction task panicked: {e}");
            return PDF_EXTRACTION_FAILED.to_string();
        }
    };
    if text.is_empty() {
        return PDF_EXTRACTION_FAILED.to_string();
    }

    let prompt = prompts::build_pdf_prompt(&text, question);
    let gateway = ModelGateway::new(&config.base_url);

    info!("Sending prompt to model '{}'", config.pdf_model);
    match gateway.dispatch_text(&config.pdf_model, &prompt).await {
        Ok(response) => render_completion(response.completion),
        Err(e) => render_error(e),
    }
}

/// Answer a question about an in-memory RGB image.
///
/// Encodes the raster as a base64 JPEG and dispatches the question to
/// `config.image_model` via the generate path. Returns the completion, or
/// one of the literal failure strings — never an `Err`.
pub async fn answer_from_image(image: &RgbImage, question: &str, config: &QaConfig) -> String {
    let encoded = match encode::encode_image(image, config.jpeg_quality) {
        Ok(b64) => b64,
        Err(e) => {
            error!("Image processing error: {e}");
            return IMAGE_PROCESSING_FAILED.to_string();
        }
    };

    let gateway = ModelGateway::new(&config.base_url);

    info!("Sending prompt to model '{}'", config.image_model);
    match gateway
        .dispatch_multimodal(&config.image_model, question, &[encoded])
        .await
    {
        Ok(response) => render_completion(response.completion),
        Err(e) => render_error(e),
    }
}

/// Answer a question about a raw 3-channel RGB pixel buffer.
///
/// Same pipeline as [`answer_from_image`], for callers holding raw bytes
/// instead of a decoded raster. A buffer whose length does not match
/// `width * height * 3` short-circuits to [`IMAGE_PROCESSING_FAILED`]
/// without a model call.
pub async fn answer_from_image_raw(
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    question: &str,
    config: &QaConfig,
) -> String {
    let encoded = match encode::encode_raw(width, height, pixels, config.jpeg_quality) {
        Ok(b64) => b64,
        Err(e) => {
            error!("Image processing error: {e}");
            return IMAGE_PROCESSING_FAILED.to_string();
        }
    };

    let gateway = ModelGateway::new(&config.base_url);

    info!("Sending prompt to model '{}'", config.image_model);
    match gateway
        .dispatch_multimodal(&config.image_model, question, &[encoded])
        .await
    {
        Ok(response) => render_completion(response.completion),
        Err(e) => render_error(e),
    }
}

/// Synchronous wrapper around [`answer_from_pdf`].
///
/// Creates a temporary tokio runtime internally.
pub fn answer_from_pdf_sync(pdf_path: impl AsRef<Path>, question: &str, config: &QaConfig) -> String {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(answer_from_pdf(pdf_path, question, config)),
        Err(e) => render_error(QaError::Internal(format!("Failed to create tokio runtime: {e}"))),
    }
}

/// Synchronous wrapper around [`answer_from_image`].
pub fn answer_from_image_sync(image: &RgbImage, question: &str, config: &QaConfig) -> String {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(answer_from_image(image, question, config)),
        Err(e) => render_error(QaError::Internal(format!("Failed to create tokio runtime: {e}"))),
    }
}

/// Render a normalized completion for the caller; an empty completion means
/// the model returned nothing usable.
fn render_completion(completion: String) -> String {
    if completion.is_empty() {
        NO_ANSWER_RECEIVED.to_string()
    } else {
        completion
    }
}

/// Final adaptation step: a structured error becomes caller-facing text.
fn render_error(e: QaError) -> String {
    error!("Q&A call failed: {e}");
    format!("Error occurred: {e}")
}
