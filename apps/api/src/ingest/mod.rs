//! Document ingestion: raw resume text from an uploaded PDF or DOCX.
//!
//! PDF text comes from `pdf-extract` (pages concatenated). DOCX text is read straight out of
//! `word/document.xml`: one line per paragraph, joined by `\n`.
//!
//! Unsupported file types do NOT error: they yield the `UNSUPPORTED_FILE_TYPE` sentinel as the
//! extracted text. Callers that want a hard failure check `DocumentKind::from_file_name` first.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::{info, warn};

/// Text returned in place of content for unsupported uploads.
pub const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type.";

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Classifies by extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Extracts plain text from an uploaded resume.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, IngestError> {
    let Some(kind) = DocumentKind::from_file_name(file_name) else {
        warn!(file_name, "unsupported resume file type; returning sentinel text");
        return Ok(UNSUPPORTED_FILE_TYPE.to_string());
    };

    let text = match kind {
        DocumentKind::Pdf => extract_pdf_text(bytes)?,
        DocumentKind::Docx => extract_docx_text(bytes)?,
    };
    info!(file_name, chars = text.len(), "resume text extracted");
    Ok(text)
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, IngestError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| IngestError::Pdf(e.to_string()))
}

fn extract_docx_text(bytes: &[u8]) -> Result<String, IngestError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| IngestError::Docx(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| IngestError::Docx(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| IngestError::Docx(e.to_string()))?;

    let paragraphs = paragraphs_from_document_xml(&xml)?;
    Ok(paragraphs.join("\n"))
}

/// Walks WordprocessingML and returns the text of every `<w:p>`, in document order.
fn paragraphs_from_document_xml(xml: &str) -> Result<Vec<String>, IngestError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| IngestError::Docx(e.to_string()))?;
        match event {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                b"w:p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|e| IngestError::Docx(e.to_string()))?;
                current.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::docx::export_docx;

    #[test]
    fn test_document_kind_by_extension() {
        assert_eq!(DocumentKind::from_file_name("cv.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_file_name("CV.DOCX"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_file_name("cv.doc"), None);
        assert_eq!(DocumentKind::from_file_name("resume"), None);
    }

    #[test]
    fn test_unsupported_type_yields_sentinel() {
        let text = extract_text("resume.txt", b"plain text resume").unwrap();
        assert_eq!(text, UNSUPPORTED_FILE_TYPE);
    }

    #[test]
    fn test_paragraphs_from_document_xml() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t xml:space="preserve">Rust </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>&amp; Go</w:t></w:r></w:p>
    <w:p><w:r><w:t>Skills</w:t><w:tab/><w:t>SQL</w:t></w:r></w:p>
  </w:body>
</w:document>"#;
        let paragraphs = paragraphs_from_document_xml(xml).unwrap();
        assert_eq!(paragraphs, vec!["Jane Doe", "", "Rust & Go", "Skills\tSQL"]);
    }

    #[test]
    fn test_docx_round_trip_through_exporter() {
        let bytes = export_docx("Jane Doe\nBuilt **Rust** services\n").unwrap();
        let text = extract_text("exported.docx", &bytes).unwrap();
        assert_eq!(text, "Jane Doe\nBuilt Rust services\n");
    }

    #[test]
    fn test_garbage_docx_is_an_error() {
        let err = extract_text("broken.docx", b"not a zip").unwrap_err();
        assert!(matches!(err, IngestError::Docx(_)));
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let err = extract_text("broken.pdf", b"%PDF-nonsense").unwrap_err();
        assert!(matches!(err, IngestError::Pdf(_)));
    }
}
