//! PDF rendering for prompt exports.
//!
//! A thin wrapper over `printpdf`: one page per prompt, built-in base-14
//! fonts, simple whitespace wrapping. Layout fidelity is not a goal here;
//! producing a readable attachment is.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};
use promptvault_db::models::prompt::Prompt;

/// A4 page width in millimetres.
const PAGE_WIDTH: f32 = 210.0;
/// A4 page height in millimetres.
const PAGE_HEIGHT: f32 = 297.0;
/// Page margin on all sides, in millimetres.
const MARGIN: f32 = 40.0;
/// Characters per wrapped line. Conservative for 12pt body text.
const WRAP_WIDTH: usize = 80;
/// Vertical advance per body line, in millimetres.
const LINE_HEIGHT: f32 = 6.0;

/// Render the given prompts into a PDF, one page per prompt.
pub fn render_prompts(prompts: &[Prompt]) -> Result<Vec<u8>, printpdf::Error> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Prompts", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");

    let heading = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let body = doc.add_builtin_font(BuiltinFont::TimesRoman)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    for (idx, prompt) in prompts.iter().enumerate() {
        if idx > 0 {
            let (page, layer_idx) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            layer = doc.get_page(page).get_layer(layer_idx);
        }

        let mut y = PAGE_HEIGHT - MARGIN;

        layer.use_text(prompt.title.clone(), 18.0, Mm(MARGIN), Mm(y), &heading);
        y -= LINE_HEIGHT * 2.0;

        if let Some(description) = &prompt.description {
            y = write_wrapped(&doc, &mut layer, description, &heading, 12.0, y);
            y -= LINE_HEIGHT;
        }

        layer.use_text(
            format!("Tags: {}", prompt.tags.join(", ")),
            10.0,
            Mm(MARGIN),
            Mm(y),
            &heading,
        );
        y -= LINE_HEIGHT;
        if let Some(category) = &prompt.category {
            layer.use_text(
                format!("Category: {category}"),
                10.0,
                Mm(MARGIN),
                Mm(y),
                &heading,
            );
            y -= LINE_HEIGHT;
        }
        if let Some(folder) = &prompt.folder {
            layer.use_text(
                format!("Folder: {folder}"),
                10.0,
                Mm(MARGIN),
                Mm(y),
                &heading,
            );
            y -= LINE_HEIGHT;
        }
        y -= LINE_HEIGHT;

        layer.use_text("Prompt:", 12.0, Mm(MARGIN), Mm(y), &heading);
        y -= LINE_HEIGHT;
        write_wrapped(&doc, &mut layer, &prompt.text, &body, 12.0, y);
    }

    doc.save_to_bytes()
}

/// Write whitespace-wrapped text downward from `y`, spilling onto fresh
/// pages as needed. Returns the y position after the last line.
fn write_wrapped(
    doc: &PdfDocumentReference,
    layer: &mut printpdf::PdfLayerReference,
    text: &str,
    font: &IndirectFontRef,
    size: f32,
    mut y: f32,
) -> f32 {
    for line in wrap_lines(text, WRAP_WIDTH) {
        if y < MARGIN {
            let (page, layer_idx) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            *layer = doc.get_page(page).get_layer(layer_idx);
            y = PAGE_HEIGHT - MARGIN;
        }
        layer.use_text(line, size, Mm(MARGIN), Mm(y), font);
        y -= LINE_HEIGHT;
    }
    y
}

/// Greedy whitespace wrapping at `width` characters. Words longer than a
/// whole line are emitted as-is rather than split.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }
    lines
}
