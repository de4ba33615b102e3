//! Pipeline stages for turning user inputs into model-ready material.
//!
//! Each submodule implements exactly one transformation step, keeping every
//! stage independently testable:
//!
//! ```text
//! PDF upload ──▶ extract ──┐
//!                          ├──▶ prompt ──▶ gateway ──▶ postprocess ──▶ answer
//! image upload ─▶ encode ──┘
//! ```
//!
//! 1. [`extract`] — pull plain text out of a PDF, page by page
//! 2. [`encode`]  — JPEG-encode and base64-wrap an RGB raster for the
//!    multimodal request body
//! 3. [`postprocess`] — normalize raw completions (strip reasoning segments,
//!    trim whitespace)

pub mod encode;
pub mod extract;
pub mod postprocess;
