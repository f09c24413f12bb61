use crate::constants::DEFAULT_PADDING_MM;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete template generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateOptions {
    // Box geometry
    pub spec: BoxSpec,

    // Optional layers
    pub labels: bool,
    pub folds: bool,

    // Canvas
    pub padding_mm: f32,

    // Output
    pub format: OutputFormat,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            spec: BoxSpec::default(),
            labels: true,
            folds: true,
            padding_mm: DEFAULT_PADDING_MM,
            format: OutputFormat::Svg,
        }
    }
}

impl TemplateOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CboxError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CboxError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.spec.validate()?;

        if !self.padding_mm.is_finite() || self.padding_mm < 0.0 {
            return Err(CboxError::Config(format!(
                "Padding must be a non-negative number of millimeters, got {}",
                self.padding_mm
            )));
        }

        Ok(())
    }

    /// File name used when no output path is given, e.g. `cbox_90_94_38_4.svg`.
    ///
    /// Dimensions appear in width, length, height, thickness order, rounded to
    /// whole millimeters.
    pub fn default_file_name(&self) -> String {
        let spec = &self.spec;
        format!(
            "cbox_{:.0}_{:.0}_{:.0}_{:.0}.{}",
            spec.width,
            spec.length,
            spec.height,
            spec.thickness,
            self.format.extension()
        )
    }
}
