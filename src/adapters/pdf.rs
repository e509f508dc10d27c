use crate::config::PageGeometry;
use crate::domain::model::{FontStyle, ResolvedColor};
use crate::domain::ports::Canvas;
use crate::utils::error::{LabelError, Result};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

const PT_TO_MM: f32 = 25.4 / 72.0;

// The builtin fonts carry no glyph metrics through this backend, so
// centered and right-aligned text is placed with an average Helvetica
// advance per character.
const AVG_GLYPH_EM: f32 = 0.55;

/// printpdf-backed canvas. The document and its first page are created up
/// front; nothing reaches disk until `finish`.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font_regular: IndirectFontRef,
    font_bold: IndirectFontRef,
    page_width: f32,
    page_height: f32,
    output_path: PathBuf,
}

impl PdfCanvas {
    pub fn new<P: Into<PathBuf>>(output_path: P, geometry: &PageGeometry) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(
            "Schedule labels",
            Mm(geometry.page_width),
            Mm(geometry.page_height),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let font_regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| LabelError::PdfError(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| LabelError::PdfError(e.to_string()))?;

        Ok(Self {
            doc,
            layer,
            font_regular,
            font_bold,
            page_width: geometry.page_width,
            page_height: geometry.page_height,
            output_path: output_path.into(),
        })
    }

    fn font(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.font_regular,
            FontStyle::Bold => &self.font_bold,
        }
    }

    fn text_width_mm(text: &str, size_pt: f32) -> f32 {
        text.chars().count() as f32 * size_pt * AVG_GLYPH_EM * PT_TO_MM
    }
}

impl Canvas for PdfCanvas {
    fn set_color(&mut self, color: ResolvedColor) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(color.r, color.g, color.b, None)));
    }

    fn text_left(&mut self, x: f32, y: f32, style: FontStyle, size: f32, text: &str) {
        self.layer.use_text(text, size, Mm(x), Mm(y), self.font(style));
    }

    fn text_centered(&mut self, x: f32, y: f32, style: FontStyle, size: f32, text: &str) {
        let x = x - Self::text_width_mm(text, size) / 2.0;
        self.layer.use_text(text, size, Mm(x), Mm(y), self.font(style));
    }

    fn text_right(&mut self, x: f32, y: f32, style: FontStyle, size: f32, text: &str) {
        let x = x - Self::text_width_mm(text, size);
        self.layer.use_text(text, size, Mm(x), Mm(y), self.font(style));
    }

    fn new_page(&mut self) {
        let (page, layer) =
            self.doc
                .add_page(Mm(self.page_width), Mm(self.page_height), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
    }

    fn finish(self) -> Result<String> {
        let file = File::create(&self.output_path)?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .map_err(|e| LabelError::PdfError(e.to_string()))?;
        Ok(self.output_path.display().to_string())
    }
}
