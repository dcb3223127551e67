//! Session PDF rendering
//!
//! Pure transformation of a session (title, creation timestamp, ordered
//! entries) into PDF bytes. Attachments are previewed according to
//! [`AttachmentPreview`]: images are embedded scaled to the content width,
//! text files become a truncated fixed-width preview, anything else gets a
//! placeholder line. A failed image decode or text read is replaced by an
//! inline oblique marker; it never aborts the document.

use crate::domain::attachment::{self, AttachmentPreview, PREVIEW_LINE_WIDTH};
use crate::domain::Entry;
use crate::error::{LabbookError, Result};
use chrono::{DateTime, Local};
use printpdf::image_crate::io::Reader as ImageReader;
use printpdf::image_crate::{DynamicImage, GenericImageView};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use std::fs;
use std::path::Path;

// A4 geometry, millimeters.
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 20.0;
const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
// Baselines below this trigger a page break; the footer sits underneath.
const CONTENT_FLOOR: f64 = MARGIN;
const FOOTER_BASELINE: f64 = 12.0;

const PT_TO_MM: f64 = 25.4 / 72.0;
const EMBED_DPI: f64 = 300.0;

/// Timestamp format used in the footer and in export file names.
const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FILE_STAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Text styles used in the document.
#[derive(Debug, Clone, Copy)]
enum Style {
    /// Session title line, large bold.
    Header,
    /// Entry description text.
    Body,
    /// Bold caption naming a previewed file.
    Caption,
    /// Fixed-width preview line, reduced size.
    Preview,
    /// Oblique inline marker (errors, unsupported attachments).
    Note,
    /// Centered per-page footer.
    Footer,
}

impl Style {
    fn size(self) -> f64 {
        match self {
            Style::Header => 20.0,
            Style::Body | Style::Caption => 12.0,
            Style::Preview => 9.0,
            Style::Note => 11.0,
            Style::Footer => 10.0,
        }
    }

    /// Characters that fit on one content line at this size; glyph widths
    /// are approximated at half an em (exact for Courier at 0.6 em).
    fn wrap_width(self) -> usize {
        let em = match self {
            Style::Preview => self.size() * 0.6,
            _ => self.size() * 0.5,
        };
        (CONTENT_WIDTH / (em * PT_TO_MM)) as usize
    }
}

struct DocFonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
    mono: IndirectFontRef,
}

/// Cursor-based page writer with automatic page breaks.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: DocFonts,
    footer: String,
    y: f64,
}

impl PageWriter {
    fn new(doc_title: &str, footer: String) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(doc_title, Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");

        let fonts = DocFonts {
            regular: add_font(&doc, BuiltinFont::Helvetica)?,
            bold: add_font(&doc, BuiltinFont::HelveticaBold)?,
            oblique: add_font(&doc, BuiltinFont::HelveticaOblique)?,
            mono: add_font(&doc, BuiltinFont::Courier)?,
        };

        let layer = doc.get_page(page).get_layer(layer);
        let writer = PageWriter {
            doc,
            layer,
            fonts,
            footer,
            y: PAGE_HEIGHT - MARGIN,
        };
        writer.write_footer();
        Ok(writer)
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
        self.write_footer();
    }

    fn write_footer(&self) {
        let size = Style::Footer.size();
        let width = self.footer.chars().count() as f64 * size * 0.5 * PT_TO_MM;
        let x = ((PAGE_WIDTH - width) / 2.0).max(MARGIN);
        self.layer.use_text(
            self.footer.clone(),
            size as f32,
            Mm(x as f32),
            Mm(FOOTER_BASELINE as f32),
            &self.fonts.regular,
        );
    }

    fn ensure_room(&mut self, needed: f64) {
        if self.y - needed < CONTENT_FLOOR {
            self.new_page();
        }
    }

    /// Write one already-wrapped line in the given style.
    fn line(&mut self, text: &str, style: Style) {
        let height = line_height(style.size());
        self.ensure_room(height);
        self.y -= height;

        let font = match style {
            Style::Header | Style::Caption => &self.fonts.bold,
            Style::Note => &self.fonts.oblique,
            Style::Preview => &self.fonts.mono,
            Style::Body | Style::Footer => &self.fonts.regular,
        };
        self.layer
            .use_text(text, style.size() as f32, Mm(MARGIN as f32), Mm(self.y as f32), font);
    }

    /// Write text in the given style, hard-wrapped to the content width.
    fn text(&mut self, text: &str, style: Style) {
        for line in attachment::hard_wrap(text, style.wrap_width()) {
            self.line(&line, style);
        }
    }

    fn gap(&mut self, mm: f64) {
        self.y -= mm;
    }

    /// Embed a decoded image scaled to fit the content width, and the page
    /// height if it is taller than one page.
    fn image(&mut self, image: &DynamicImage) {
        let (px_w, px_h) = image.dimensions();
        let native_w = px_w as f64 * 25.4 / EMBED_DPI;
        let native_h = px_h as f64 * 25.4 / EMBED_DPI;

        let max_height = PAGE_HEIGHT - MARGIN - CONTENT_FLOOR;
        let mut scale = CONTENT_WIDTH / native_w;
        if native_h * scale > max_height {
            scale = max_height / native_h;
        }

        let height = native_h * scale;
        self.ensure_room(height);
        self.y -= height;

        Image::from_dynamic_image(image).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN as f32)),
                translate_y: Some(Mm(self.y as f32)),
                scale_x: Some(scale as f32),
                scale_y: Some(scale as f32),
                dpi: Some(EMBED_DPI as f32),
                ..Default::default()
            },
        );
        self.gap(2.0);
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| LabbookError::Export(e.to_string()))
    }
}

fn add_font(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| LabbookError::Export(e.to_string()))
}

fn line_height(size: f64) -> f64 {
    size * PT_TO_MM * 1.4
}

fn decode_image(path: &Path) -> std::result::Result<DynamicImage, String> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| e.to_string())?;
    let image = reader.decode().map_err(|e| e.to_string())?;
    // Flatten to RGB; alpha channels are not representable in the embedded
    // object.
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

/// Render a session document: header, one block per entry, per-page footer.
///
/// `generated_at` appears verbatim in the footer, so the caller can use the
/// same instant for the footer and the file name.
pub fn render_session(
    title: &str,
    created_at: &str,
    entries: &[Entry],
    generated_at: DateTime<Local>,
) -> Result<Vec<u8>> {
    let footer = format!("Generated: {}", generated_at.format(GENERATED_AT_FORMAT));
    let mut page = PageWriter::new(title, footer)?;

    page.text(&format!("{} ({})", title, created_at), Style::Header);
    page.gap(4.0);

    for entry in entries {
        page.text(&entry.description, Style::Body);

        match AttachmentPreview::resolve(Path::new(&entry.attachment_path)) {
            AttachmentPreview::Missing => {}
            AttachmentPreview::Image(path) => match decode_image(&path) {
                Ok(image) => page.image(&image),
                Err(_) => page.line("[could not load image]", Style::Note),
            },
            AttachmentPreview::Text(path) => match fs::read_to_string(&path) {
                Ok(content) => {
                    page.text(
                        &format!("Contents of {}:", entry.attachment_name()),
                        Style::Caption,
                    );
                    let preview = attachment::preview_text(&content);
                    for line in attachment::hard_wrap(&preview, PREVIEW_LINE_WIDTH) {
                        page.line(&line, Style::Preview);
                    }
                }
                Err(_) => page.line("[could not read text file]", Style::Note),
            },
            AttachmentPreview::Unsupported(_) => {
                page.line(
                    &format!("Attachment: {} (unsupported type)", entry.attachment_name()),
                    Style::Note,
                );
            }
        }

        page.gap(3.0);
    }

    page.finish()
}

/// File name for an exported session: the title with spaces replaced by
/// underscores, plus the generation timestamp at minute precision.
pub fn export_file_name(title: &str, generated_at: DateTime<Local>) -> String {
    format!(
        "{}_{}.pdf",
        title.replace(' ', "_"),
        generated_at.format(FILE_STAMP_FORMAT)
    )
}

/// Write `bytes` to `path` via a temp file in the same directory, renamed
/// into place.
///
/// On Windows, `rename` does not overwrite existing files, so the
/// destination is removed first.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp_name = format!(
        "{}.labbook-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("export.pdf"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, bytes)?;

    if path.exists() {
        fs::remove_file(path)?;
    }
    fs::rename(&tmp_path, path)?;
    Ok(())
}
