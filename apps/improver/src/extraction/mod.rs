//! Text Extractor — turns an uploaded PDF into plain text, page by page.
//!
//! Wraps the pdf-extract crate. No layout reconstruction, no fallback:
//! unreadable input fails the interaction.
//! CPU-bound parsing runs inside tokio::task::spawn_blocking.

use thiserror::Error;
use tracing::{info, warn};

use crate::models::{ExtractedText, UploadedDocument};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF could not be parsed: {0}")]
    Unreadable(String),

    #[error("PDF parser panicked")]
    Panicked,

    #[error("Extraction task was cancelled")]
    Cancelled,
}

/// Extracts the text of every page of an in-memory PDF and concatenates it
/// in page order, without separators.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;
    Ok(ExtractedText::from_pages(pages))
}

/// Async entry point used by the HTTP handlers.
pub async fn extract_document(document: UploadedDocument) -> Result<ExtractedText, ExtractionError> {
    let size = document.bytes.len();
    let bytes = document.bytes;

    let extracted = tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                ExtractionError::Panicked
            } else {
                ExtractionError::Cancelled
            }
        })??;

    info!(
        "Extracted {} chars from {} page(s) ({} bytes, file: {})",
        extracted.char_count(),
        extracted.page_count,
        size,
        document.file_name.as_deref().unwrap_or("<unnamed>")
    );
    if extracted.is_blank() {
        warn!("No text could be extracted. The PDF may be image-only.");
    }

    Ok(extracted)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a PDF with one page per entry. Each `Some(line)` becomes a single
    /// Helvetica text run; `None` produces a page with no text at all.
    pub fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in pages {
            let operations = match line {
                Some(line) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
                None => Vec::new(),
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("content encodes"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
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
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("pdf serializes");
        buf
    }
}
