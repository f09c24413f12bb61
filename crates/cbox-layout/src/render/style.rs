use crate::constants::*;
use crate::layout::Layer;

/// An RGB color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    pub name: &'static str,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

const BLACK: RgbColor = RgbColor {
    name: "black",
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

const RED: RgbColor = RgbColor {
    name: "red",
    r: 1.0,
    g: 0.0,
    b: 0.0,
};

const BLUE: RgbColor = RgbColor {
    name: "blue",
    r: 0.0,
    g: 0.0,
    b: 1.0,
};

/// Fill color for text labels
pub const LABEL_COLOR: RgbColor = BLUE;

/// Stroke appearance of one layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: RgbColor,
    pub width_mm: f32,
    /// Dash and gap length, `None` for a solid line
    pub dash_mm: Option<(f32, f32)>,
}

impl LineStyle {
    pub fn for_layer(layer: Layer) -> Self {
        match layer {
            Layer::Cut => LineStyle {
                color: BLACK,
                width_mm: CUT_LINE_WIDTH_MM,
                dash_mm: None,
            },
            Layer::Score => LineStyle {
                color: RED,
                width_mm: SCORE_LINE_WIDTH_MM,
                dash_mm: None,
            },
            Layer::Fold => LineStyle {
                color: BLUE,
                width_mm: FOLD_LINE_WIDTH_MM,
                dash_mm: Some(FOLD_DASH_PATTERN_MM),
            },
        }
    }
}
