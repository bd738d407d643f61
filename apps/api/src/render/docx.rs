//! DOCX export: one paragraph per input line, bold runs preserved.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run};

use crate::render::emphasis::{is_score_label, render_line, render_paragraph_model, RichParagraph};
use crate::render::ExportError;

pub fn export_docx(text: &str) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new();
    for line in text.split('\n') {
        let model = render_paragraph_model(&render_line(line));
        docx = docx.add_paragraph(to_paragraph(&model, is_score_label(line)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::Docx(e.to_string()))?;
    Ok(buffer.into_inner())
}

fn to_paragraph(model: &RichParagraph, break_after: bool) -> Paragraph {
    let mut paragraph = Paragraph::new();
    for run in model.runs.iter().filter(|r| !r.text.is_empty()) {
        let mut docx_run = Run::new().add_text(run.text.as_str());
        if run.bold {
            docx_run = docx_run.bold();
        }
        paragraph = paragraph.add_run(docx_run);
    }
    if break_after {
        paragraph = paragraph.add_run(Run::new().add_break(BreakType::TextWrapping));
    }
    paragraph
}
