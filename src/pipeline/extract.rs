//! Document extraction: pull plain text out of a PDF, page by page.
//!
//! Extraction is best-effort per page: image-only and malformed pages yield
//! nothing and are skipped, while a document that cannot be opened at all is
//! a hard [`QaError::Extraction`]. Callers treat an `Ok` result that is empty
//! the same way they treat the error — there is no text to ask questions
//! about either way — but the two cases stay distinguishable for logging.
//!
//! lopdf is synchronous and CPU-bound; the orchestrator runs this function
//! on a blocking thread via `spawn_blocking`.

use crate::error::QaError;
use lopdf::Document;
use std::path::Path;
use tracing::{debug, info};

/// Extract the full text of a PDF, concatenating page texts in document
/// order with a line break after each non-empty page extraction.
pub fn extract_text(path: &Path) -> Result<String, QaError> {
    let doc = Document::load(path).map_err(|e| QaError::Extraction {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let mut text = String::new();
    let mut extracted_pages = 0usize;
    let pages = doc.get_pages();
    let total = pages.len();

    // BTreeMap keys iterate in ascending page order.
    for page_number in pages.keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => {
                let page_text = page_text.trim();
                if !page_text.is_empty() {
                    text.push_str(page_text);
                    text.push('\n');
                    extracted_pages += 1;
                }
            }
            Err(e) => {
                // Single bad page never aborts the document.
                debug!("Page {page_number}: extraction yielded nothing ({e})");
            }
        }
    }

    info!(
        "Extracted text from {extracted_pages}/{total} pages of '{}'",
        path.display()
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use std::io::Write;

    /// Build a minimal PDF with one text line per page.
    fn build_pdf(pages: &[&str]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn save_pdf(doc: &mut Document) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn multi_page_text_in_page_order() {
        let mut doc = build_pdf(&["First page text", "Second page text"]);
        let file = save_pdf(&mut doc);

        let text = extract_text(file.path()).expect("extraction should succeed");
        let first = text.find("First page text").expect("first page present");
        let second = text.find("Second page text").expect("second page present");
        assert!(first < second, "pages out of order: {text:?}");
        // One line break after each non-empty page.
        assert_eq!(text.matches('\n').count(), 2, "got: {text:?}");
    }

    #[test]
    fn unreadable_file_is_extraction_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a pdf at all").unwrap();
        file.flush().unwrap();

        let err = extract_text(file.path()).unwrap_err();
        assert!(matches!(err, QaError::Extraction { .. }));
    }

    #[test]
    fn missing_file_is_extraction_error() {
        let err = extract_text(Path::new("/nonexistent/never.pdf")).unwrap_err();
        assert!(matches!(err, QaError::Extraction { .. }));
    }
}
