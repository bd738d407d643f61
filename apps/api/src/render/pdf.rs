//! PDF export: draws the paginated canvas with the built-in Helvetica faces.

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::render::canvas::{layout_text, PageGeometry};
use crate::render::font_metrics::FontMetrics;
use crate::render::ExportError;

pub const FONT_SIZE_PT: f32 = 11.0;
const LAYER_NAME: &str = "Layer 1";

pub fn export_pdf(text: &str, title: &str) -> Result<Vec<u8>, ExportError> {
    let geometry = PageGeometry::letter();
    let metrics = FontMetrics::helvetica(FONT_SIZE_PT);
    let pages = layout_text(text, &geometry, &metrics);

    let page_width = Mm::from(Pt(geometry.width));
    let page_height = Mm::from(Pt(geometry.height));
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, page_width, page_height, LAYER_NAME);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(page_width, page_height, LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for word in &page.words {
            let font = if word.bold { &bold } else { &regular };
            layer.use_text(
                word.text.as_str(),
                metrics.size_pt,
                Mm::from(Pt(word.x)),
                Mm::from(Pt(word.y)),
                font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}
