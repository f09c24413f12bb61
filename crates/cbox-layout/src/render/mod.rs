//! Output backends for box templates
//!
//! The layout engine produces a backend-independent [`Template`]; the
//! renderers here turn it into document bytes:
//! - SVG in millimeter user units, one group per layer
//! - single-page PDF sized to the canvas

mod pdf;
mod style;
mod svg;

pub use pdf::PdfRenderer;
pub use style::{LABEL_COLOR, LineStyle, RgbColor};
pub use svg::SvgRenderer;

use crate::template::Template;
use crate::types::Result;

/// A document backend consuming a finished template
pub trait TemplateRenderer {
    /// Serialize the whole template into one document
    fn render(&self, template: &Template) -> Result<Vec<u8>>;
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn fmt_num(v: f32) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut out = format!("{:.3}", v);
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}
