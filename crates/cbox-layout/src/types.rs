use crate::constants::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CboxError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid {name}: {value} mm")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CboxError>;

/// Interior box dimensions and material thickness, all in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxSpec {
    /// Interior length (width of the continuous strip)
    pub length: f32,
    /// Interior width (width of the side panels)
    pub width: f32,
    /// Interior height
    pub height: f32,
    /// Cardboard thickness
    pub thickness: f32,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH_MM,
            width: DEFAULT_WIDTH_MM,
            height: DEFAULT_HEIGHT_MM,
            thickness: DEFAULT_THICKNESS_MM,
        }
    }
}

impl BoxSpec {
    pub fn new(length: f32, width: f32, height: f32, thickness: f32) -> Self {
        Self {
            length,
            width,
            height,
            thickness,
        }
    }

    /// Reject dimensions that would produce degenerate or negative geometry.
    ///
    /// Zero thickness is accepted; it only collapses the score gaps.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CboxError::InvalidDimension { name, value });
            }
        }

        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(CboxError::InvalidDimension {
                name: "thickness",
                value: self.thickness,
            });
        }

        Ok(())
    }
}

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputFormat {
    /// Scalable Vector Graphics, millimeter units
    #[default]
    Svg,
    /// Single-page PDF sized to the canvas
    Pdf,
}

impl OutputFormat {
    /// File extension without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
        }
    }
}

/// Statistics about a generated template
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateStatistics {
    /// Outside dimensions of the strip (width, height) in mm
    pub strip_outside_mm: (f32, f32),
    /// Outside dimensions of one side panel (width, height) in mm
    pub side_outside_mm: (f32, f32),
    /// Number of side panels
    pub side_panels: usize,
    /// Canvas dimensions (width, height) in mm
    pub canvas_mm: (f32, f32),
    /// Number of cut primitives
    pub cut_primitives: usize,
    /// Number of score primitives
    pub score_primitives: usize,
    /// Number of fold primitives
    pub fold_primitives: usize,
    /// Number of text labels
    pub labels: usize,
    /// Total stroke length of the cut layer in mm
    pub cut_length_mm: f32,
    /// Total stroke length of the score layer in mm
    pub score_length_mm: f32,
    /// Total stroke length of the fold layer in mm
    pub fold_length_mm: f32,
}
