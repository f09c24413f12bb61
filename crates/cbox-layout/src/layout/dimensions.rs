//! Derived box dimensions
//!
//! Every coordinate the layout engine emits is a sum of these terms, so
//! they are computed exactly once per template.

use crate::constants::FLAP_HEIGHT_MM;
use crate::types::BoxSpec;

/// Dimensions derived from a [`BoxSpec`], all in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedDimensions {
    /// The input this was derived from
    pub spec: BoxSpec,
    /// Height of a peel/score strip between faces
    pub peel_height: f32,
    /// Height of the glue flap below each side panel
    pub flap_height: f32,
    /// Double-layer wall thickness
    pub wall_thickness: f32,
    /// Outside length of the base
    pub base_length: f32,
    /// Outside width of the base
    pub base_width: f32,
    /// Width of the continuous strip
    pub strip_width: f32,
    /// Height of the continuous strip
    pub strip_height: f32,
    /// Width of a side panel at its widest face
    pub side_outer_width: f32,
    /// Width of a side panel's inner face
    pub side_inner_width: f32,
    /// Height of one side panel including its flap
    pub side_stack_height: f32,
}

/// Derive all layout dimensions from the box specification.
///
/// `strip_height` keeps its peel and thickness terms separate; the strip
/// cursor walks the same segments in the same order.
pub fn derive_dimensions(spec: &BoxSpec) -> DerivedDimensions {
    let BoxSpec {
        length,
        width,
        height,
        thickness,
    } = *spec;

    let peel_height = 2.0 * thickness;
    let flap_height = FLAP_HEIGHT_MM;
    let wall_thickness = 2.0 * thickness;

    let base_length = length + 2.0 * wall_thickness;
    let base_width = width + 2.0 * wall_thickness;

    let strip_width = base_length;
    let strip_height = 4.0 * height + 2.0 * peel_height + 2.0 * thickness + base_width;

    let side_outer_width = base_width + 2.0 * wall_thickness;
    let side_inner_width = width;
    let side_stack_height = 2.0 * height + 2.0 * peel_height + flap_height;

    DerivedDimensions {
        spec: *spec,
        peel_height,
        flap_height,
        wall_thickness,
        base_length,
        base_width,
        strip_width,
        strip_height,
        side_outer_width,
        side_inner_width,
        side_stack_height,
    }
}

impl From<BoxSpec> for DerivedDimensions {
    fn from(spec: BoxSpec) -> Self {
        derive_dimensions(&spec)
    }
}

// =============================================================================
// Tests
// =============================================================================
