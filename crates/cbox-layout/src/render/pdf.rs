//! PDF output
//!
//! Produces a single page whose MediaBox is the canvas in points. The content
//! stream first installs a matrix mapping top-left millimeter coordinates
//! onto PDF space, so primitives are written in the same units the layout
//! engine uses.

use super::{LABEL_COLOR, LineStyle, TemplateRenderer, fmt_num};
use crate::constants::{LABEL_FONT_SIZE_MM, POINTS_PER_MM, mm_to_pt};
use crate::layout::{Layer, Primitive};
use crate::template::Template;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, Stream};

/// Renders templates as single-page PDF documents
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl TemplateRenderer for PdfRenderer {
    fn render(&self, template: &Template) -> Result<Vec<u8>> {
        let mut doc = build_document(template);
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok(writer)
    }
}

fn build_document(template: &Template) -> Document {
    let width_pt = mm_to_pt(template.canvas.total_width);
    let height_pt = mm_to_pt(template.canvas.total_height);

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    // Create font
    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));

    let content = generate_content(template, height_pt);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut fonts = Dictionary::new();
    fonts.set("F1", Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    let page_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width_pt),
                Object::Real(height_pt),
            ]),
        ),
        ("Resources", Object::Dictionary(resources)),
        ("Contents", Object::Reference(content_id)),
    ]));

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Build the page content stream
fn generate_content(template: &Template, height_pt: f32) -> String {
    let mut ops = String::new();

    // Save graphics state, then flip to y-down millimeters (unrounded, this
    // matrix scales every coordinate)
    ops.push_str("q\n");
    ops.push_str(&format!(
        "{} 0 0 {} 0 {} cm\n",
        POINTS_PER_MM, -POINTS_PER_MM, height_pt
    ));

    for layer in Layer::ALL {
        let mut strokes = String::new();
        for primitive in template.primitives().filter(|p| p.layer() == Some(layer)) {
            strokes.push_str(&stroke_ops(primitive));
        }
        if strokes.is_empty() {
            continue;
        }

        let style = LineStyle::for_layer(layer);
        ops.push_str(&format!(
            "{} {} {} RG\n",
            fmt_num(style.color.r),
            fmt_num(style.color.g),
            fmt_num(style.color.b)
        ));
        ops.push_str(&format!("{} w\n", fmt_num(style.width_mm)));
        match style.dash_mm {
            Some((dash, gap)) => {
                ops.push_str(&format!("[{} {}] 0 d\n", fmt_num(dash), fmt_num(gap)))
            }
            None => ops.push_str("[] 0 d\n"),
        }
        ops.push_str(&strokes);
    }

    let mut labels = String::new();
    for primitive in template.primitives() {
        if let Primitive::Label { text, at } = primitive {
            // Undo the y flip for glyphs; font size comes from the text matrix
            labels.push_str(&format!(
                "BT /F1 1 Tf {} 0 0 {} {} {} Tm ({}) Tj ET\n",
                fmt_num(LABEL_FONT_SIZE_MM),
                fmt_num(-LABEL_FONT_SIZE_MM),
                fmt_num(at.x),
                fmt_num(at.y),
                escape_pdf_string(text)
            ));
        }
    }
    if !labels.is_empty() {
        ops.push_str(&format!(
            "{} {} {} rg\n",
            fmt_num(LABEL_COLOR.r),
            fmt_num(LABEL_COLOR.g),
            fmt_num(LABEL_COLOR.b)
        ));
        ops.push_str(&labels);
    }

    // Restore graphics state
    ops.push_str("Q\n");

    ops
}

fn stroke_ops(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Line { start, end, .. } => format!(
            "{} {} m {} {} l S\n",
            fmt_num(start.x),
            fmt_num(start.y),
            fmt_num(end.x),
            fmt_num(end.y)
        ),
        Primitive::Rect { rect, .. } => format!(
            "{} {} {} {} re S\n",
            fmt_num(rect.x),
            fmt_num(rect.y),
            fmt_num(rect.width),
            fmt_num(rect.height)
        ),
        Primitive::Label { .. } => String::new(),
    }
}

fn escape_pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TemplateOptions;
    use crate::template::generate_template;

    #[test]
    fn test_escape_pdf_string() {
        assert_eq!(
            escape_pdf_string("Main Body (outside dims)"),
            "Main Body \\(outside dims\\)"
        );
        assert_eq!(escape_pdf_string("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_content_styles_per_layer() {
        let template = generate_template(&TemplateOptions::default()).unwrap();
        let content = generate_content(&template, 100.0);

        assert!(content.starts_with("q\n"));
        assert!(content.ends_with("Q\n"));
        assert!(content.contains("0 0 0 RG\n0.4 w\n[] 0 d\n"));
        assert!(content.contains("1 0 0 RG\n0.2 w\n[] 0 d\n"));
        assert!(content.contains("0 0 1 RG\n0.2 w\n[1 0.6] 0 d\n"));
        assert!(content.contains("5 5 110 282 re S\n"));
        assert_eq!(content.matches(" Tj ET").count(), 3);
    }

    #[test]
    fn test_content_without_folds_has_no_dash() {
        let options = TemplateOptions {
            folds: false,
            labels: false,
            ..Default::default()
        };
        let template = generate_template(&options).unwrap();
        let content = generate_content(&template, 100.0);

        assert!(!content.contains("[1 0.6] 0 d"));
        assert!(!content.contains("BT"));
    }
}
