// Export rendering: marker text → emphasis spans → DOCX paragraphs or a paginated PDF canvas.
// Both writers are CPU-only; async callers run them inside tokio::task::spawn_blocking.

pub mod canvas;
pub mod docx;
pub mod emphasis;
pub mod font_metrics;
pub mod pdf;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("DOCX export failed: {0}")]
    Docx(String),

    #[error("PDF export failed: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Docx,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Renders marker text into the target format. `title` only lands in PDF metadata.
    pub fn export(self, text: &str, title: &str) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Docx => docx::export_docx(text),
            ExportFormat::Pdf => pdf::export_pdf(text, title),
        }
    }
}
