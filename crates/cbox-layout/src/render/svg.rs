//! SVG output
//!
//! The document is sized in millimeters with a matching view box, so one
//! user unit is one millimeter. Each layer becomes a `<g>` element carrying
//! the layer's stroke style, which laser software can map to cut settings.

use super::{LABEL_COLOR, LineStyle, TemplateRenderer, fmt_num};
use crate::constants::LABEL_FONT_SIZE_MM;
use crate::layout::{Layer, Primitive};
use crate::template::Template;
use crate::types::Result;
use std::fmt::Write as _;

/// Renders templates as standalone SVG documents
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl TemplateRenderer for SvgRenderer {
    fn render(&self, template: &Template) -> Result<Vec<u8>> {
        Ok(render_svg(template).into_bytes())
    }
}

fn render_svg(template: &Template) -> String {
    let width = fmt_num(template.canvas.total_width);
    let height = fmt_num(template.canvas.total_height);

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );

    for layer in Layer::ALL {
        let primitives: Vec<&Primitive> = template
            .primitives()
            .filter(|p| p.layer() == Some(layer))
            .collect();
        if primitives.is_empty() {
            continue;
        }

        let style = LineStyle::for_layer(layer);
        let _ = write!(
            svg,
            r#"  <g id="{}" fill="none" stroke="{}" stroke-width="{}""#,
            layer.name(),
            style.color.name,
            fmt_num(style.width_mm)
        );
        if let Some((dash, gap)) = style.dash_mm {
            let _ = write!(
                svg,
                r#" stroke-dasharray="{},{}""#,
                fmt_num(dash),
                fmt_num(gap)
            );
        }
        svg.push_str(">\n");

        for primitive in primitives {
            write_shape(&mut svg, primitive);
        }
        svg.push_str("  </g>\n");
    }

    let labels: Vec<(&str, f32, f32)> = template
        .primitives()
        .filter_map(|p| match p {
            Primitive::Label { text, at } => Some((text.as_str(), at.x, at.y)),
            _ => None,
        })
        .collect();
    if !labels.is_empty() {
        let _ = writeln!(
            svg,
            r#"  <g id="labels" fill="{}" font-family="sans-serif" font-size="{}">"#,
            LABEL_COLOR.name,
            fmt_num(LABEL_FONT_SIZE_MM)
        );
        for (text, x, y) in labels {
            let _ = write!(svg, r#"    <text x="{}" y="{}">"#, fmt_num(x), fmt_num(y));
            escape_xml_into(&mut svg, text);
            svg.push_str("</text>\n");
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_shape(svg: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Line { start, end, .. } => {
            let _ = writeln!(
                svg,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                fmt_num(start.x),
                fmt_num(start.y),
                fmt_num(end.x),
                fmt_num(end.y)
            );
        }
        Primitive::Rect { rect, .. } => {
            let _ = writeln!(
                svg,
                r#"    <rect x="{}" y="{}" width="{}" height="{}"/>"#,
                fmt_num(rect.x),
                fmt_num(rect.y),
                fmt_num(rect.width),
                fmt_num(rect.height)
            );
        }
        Primitive::Label { .. } => {}
    }
}

fn escape_xml_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
