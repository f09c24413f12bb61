//! Shared constants for box template generation
//!
//! This module centralizes magic numbers and constants used throughout
//! layout and rendering.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Box Geometry
// =============================================================================

/// Height of the glue flap below each side panel (mm)
pub const FLAP_HEIGHT_MM: f32 = 10.0;

/// Vertical run of the small corner chamfers on the side panels (mm)
pub const CHAMFER_DROP_MM: f32 = 1.0;

/// Default gap between panels and around the canvas edge (mm)
pub const DEFAULT_PADDING_MM: f32 = 5.0;

// =============================================================================
// Default Box Dimensions
// =============================================================================

/// Default interior length (mm)
pub const DEFAULT_LENGTH_MM: f32 = 94.0;

/// Default interior width (mm)
pub const DEFAULT_WIDTH_MM: f32 = 90.0;

/// Default interior height (mm)
pub const DEFAULT_HEIGHT_MM: f32 = 38.0;

/// Default cardboard thickness (mm)
pub const DEFAULT_THICKNESS_MM: f32 = 4.0;

// =============================================================================
// Line Styles
// =============================================================================

/// Stroke width for cut lines (mm)
pub const CUT_LINE_WIDTH_MM: f32 = 0.4;

/// Stroke width for score/peel lines (mm)
pub const SCORE_LINE_WIDTH_MM: f32 = 0.2;

/// Stroke width for fold lines (mm)
pub const FOLD_LINE_WIDTH_MM: f32 = 0.2;

/// Fold line dash pattern: dash length, gap length (mm)
pub const FOLD_DASH_PATTERN_MM: (f32, f32) = (1.0, 0.6);

// =============================================================================
// Labels
// =============================================================================

/// Label font size (mm)
pub const LABEL_FONT_SIZE_MM: f32 = 1.0;

/// Horizontal inset of a label from its panel's reference edge (mm)
pub const LABEL_INSET_X_MM: f32 = 5.0;

/// Vertical offset of a label baseline from its reference line (mm)
pub const LABEL_OFFSET_Y_MM: f32 = 15.0;
