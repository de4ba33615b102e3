//! Configuration for document and image Q&A.
//!
//! All behaviour is controlled through [`QaConfig`], built via its
//! [`QaConfigBuilder`]. Keeping every knob in one struct makes it trivial to
//! share a config across calls and to point the whole crate at a different
//! Ollama instance (or a test server) in one place.

use crate::error::QaError;
use serde::{Deserialize, Serialize};

/// Default Ollama endpoint. All requests go to `{base_url}/api/...`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model for PDF questions.
pub const DEFAULT_PDF_MODEL: &str = "deepseek-r1:1.5b";

/// Default model for image questions.
pub const DEFAULT_IMAGE_MODEL: &str = "llava";

/// Configuration for a Q&A session.
///
/// # Example
/// ```rust
/// use docqa::QaConfig;
///
/// let config = QaConfig::builder()
///     .base_url("http://localhost:11434")
///     .pdf_model("deepseek-r1:1.5b")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaConfig {
    /// Base URL of the local Ollama server. Default: `http://localhost:11434`.
    pub base_url: String,

    /// Model identifier used for PDF questions. Default: `deepseek-r1:1.5b`.
    ///
    /// Reasoning models emit a `<think>…</think>` segment that the gateway
    /// strips before returning the completion.
    pub pdf_model: String,

    /// Model identifier used for image questions. Default: `llava`.
    pub image_model: String,

    /// JPEG quality used when encoding rasters for the multimodal request.
    /// Range: 1–100. Default: 90.
    ///
    /// 90 keeps photographic detail while staying well under typical request
    /// body limits; lossless formats are unnecessary because vision models
    /// downsample the input anyway.
    pub jpeg_quality: u8,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pdf_model: DEFAULT_PDF_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            jpeg_quality: 90,
        }
    }
}

impl QaConfig {
    /// Create a new builder for `QaConfig`.
    pub fn builder() -> QaConfigBuilder {
        QaConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`QaConfig`].
#[derive(Debug)]
pub struct QaConfigBuilder {
    config: QaConfig,
}

impl QaConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        // A trailing slash would produce "//api/chat" when joined.
        self.config.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn pdf_model(mut self, model: impl Into<String>) -> Self {
        self.config.pdf_model = model.into();
        self
    }

    pub fn image_model(mut self, model: impl Into<String>) -> Self {
        self.config.image_model = model.into();
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.config.jpeg_quality = quality.clamp(1, 100);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<QaConfig, QaError> {
        let c = &self.config;
        if c.base_url.is_empty() {
            return Err(QaError::InvalidConfig("base_url must not be empty".into()));
        }
        if c.pdf_model.is_empty() || c.image_model.is_empty() {
            return Err(QaError::InvalidConfig(
                "model identifiers must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
