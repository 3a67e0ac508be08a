use bytes::Bytes;
use serde::Serialize;

/// One uploaded PDF file, held in memory for the duration of a single request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl UploadedDocument {
    pub fn new(bytes: Bytes, file_name: Option<String>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            file_name,
            content_type,
        }
    }

    /// Accepts a `.pdf` file name or an `application/pdf` content type.
    /// Whether the bytes actually parse is left to the extractor.
    pub fn looks_like_pdf(&self) -> bool {
        let by_name = self
            .file_name
            .as_deref()
            .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false);
        let by_type = self
            .content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("application/pdf"))
            .unwrap_or(false);
        by_name || by_type
    }
}

/// Plain text of every page, concatenated in document order.
/// An empty string is valid (image-only PDFs) and is never rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

impl ExtractedText {
    pub fn from_pages(pages: Vec<String>) -> Self {
        let page_count = pages.len();
        Self {
            text: pages.concat(),
            page_count,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: Option<&str>, ct: Option<&str>) -> UploadedDocument {
        UploadedDocument::new(
            Bytes::from_static(b"%PDF-1.5"),
            name.map(String::from),
            ct.map(String::from),
        )
    }

    #[test]
    fn test_pdf_accepted_by_extension_case_insensitive() {
        assert!(doc(Some("Resume.PDF"), None).looks_like_pdf());
    }

    #[test]
    fn test_pdf_accepted_by_content_type() {
        assert!(doc(Some("upload"), Some("application/pdf")).looks_like_pdf());
    }

    #[test]
    fn test_docx_rejected() {
        assert!(!doc(
            Some("resume.docx"),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        )
        .looks_like_pdf());
    }

    #[test]
    fn test_pages_concatenated_without_separator() {
        let text = ExtractedText::from_pages(vec!["one".into(), "two".into(), "three".into()]);
        assert_eq!(text.text, "onetwothree");
        assert_eq!(text.page_count, 3);
    }

    #[test]
    fn test_no_pages_is_empty_text() {
        let text = ExtractedText::from_pages(Vec::new());
        assert_eq!(text.as_str(), "");
        assert!(text.is_blank());
        assert_eq!(text.char_count(), 0);
    }
}
