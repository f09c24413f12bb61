//! Box template generation
//!
//! This module orchestrates template generation:
//! 1. Validate options and derive dimensions
//! 2. Size the canvas
//! 3. Emit the strip and both side panels
//! 4. Render and save through an output backend

mod io;

pub use io::{render_template, save_template};

use crate::layout::{
    Canvas, DerivedDimensions, Panel, PanelKind, Primitive, derive_dimensions, emit_side,
    emit_strip, side_bounds, size_canvas, strip_bounds,
};
use crate::options::TemplateOptions;
use crate::types::*;

/// Number of flapped side panels in a box
pub const SIDE_PANEL_COUNT: usize = 2;

/// A fully laid out box net, independent of any output format
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub dimensions: DerivedDimensions,
    pub canvas: Canvas,
    pub padding_mm: f32,
    /// Strip first, then side panels top to bottom
    pub panels: Vec<Panel>,
}

impl Template {
    /// All primitives across all panels, in emission order
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.panels.iter().flat_map(|panel| panel.primitives.iter())
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.kind == kind)
    }

    pub fn strip(&self) -> Option<&Panel> {
        self.panel(PanelKind::Strip)
    }

    pub fn sides(&self) -> impl Iterator<Item = &Panel> {
        self.panels
            .iter()
            .filter(|panel| matches!(panel.kind, PanelKind::Side(_)))
    }
}

/// Lay out a complete box template.
pub fn generate_template(options: &TemplateOptions) -> Result<Template> {
    options.validate()?;

    let padding = options.padding_mm;
    let dims = derive_dimensions(&options.spec);
    log::debug!("derived dimensions: {:?}", dims);

    // The output document is sized up front, so this comes before any emission
    let canvas = size_canvas(&dims, padding);
    log::debug!(
        "canvas: {:.1} x {:.1} mm",
        canvas.total_width,
        canvas.total_height
    );

    let mut panels = Vec::with_capacity(1 + SIDE_PANEL_COUNT);
    panels.push(emit_strip(
        &dims,
        strip_bounds(&dims, padding),
        options.labels,
        options.folds,
    ));
    for index in 0..SIDE_PANEL_COUNT {
        panels.push(emit_side(
            &dims,
            side_bounds(&dims, padding, index),
            index,
            options.labels,
            options.folds,
        ));
    }

    Ok(Template {
        dimensions: dims,
        canvas,
        padding_mm: padding,
        panels,
    })
}
