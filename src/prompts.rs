//! Prompt assembly.
//!
//! Centralising prompt construction here serves two purposes:
//!
//! 1. **Single source of truth** — the exact wording the model sees is
//!    defined in one place.
//! 2. **Testability** — unit tests can assert on the assembled prompt
//!    without spinning up a model.

/// Build the prompt for a PDF question: the extracted document text followed
/// by the user's question and an `Answer:` cue.
pub fn build_pdf_prompt(text: &str, question: &str) -> String {
    format!("PDF content:\n{text}\n\nQuestion: {question}\nAnswer:")
}
