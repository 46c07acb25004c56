use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of the numeric measurement columns in the input CSV
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeasurementSystem {
    #[default]
    Millimeters,
    Centimeters,
    Inches,
    Points,
}

impl MeasurementSystem {
    pub fn name(&self) -> &'static str {
        match self {
            MeasurementSystem::Millimeters => "mm",
            MeasurementSystem::Centimeters => "cm",
            MeasurementSystem::Inches => "in",
            MeasurementSystem::Points => "pt",
        }
    }

    pub fn to_mm(&self, value: f32) -> f32 {
        match self {
            MeasurementSystem::Millimeters => value,
            MeasurementSystem::Centimeters => value * 10.0,
            MeasurementSystem::Inches => value * 25.4,
            MeasurementSystem::Points => value * 0.352778,
        }
    }

    pub fn from_mm(&self, value: f32) -> f32 {
        match self {
            MeasurementSystem::Millimeters => value,
            MeasurementSystem::Centimeters => value / 10.0,
            MeasurementSystem::Inches => value / 25.4,
            MeasurementSystem::Points => value / 0.352778,
        }
    }

    /// Parse a unit suffix such as `in`, `inches`, `cm` or `mm`
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.trim().trim_end_matches('.').to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Some(MeasurementSystem::Millimeters)
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(MeasurementSystem::Centimeters)
            }
            "in" | "inch" | "inches" | "\"" => Some(MeasurementSystem::Inches),
            "pt" | "pts" | "points" => Some(MeasurementSystem::Points),
            _ => None,
        }
    }
}

/// CSV header names holding each measurement
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColumnMapping {
    pub height: String,
    pub width: String,
    pub thickness: String,
    pub flap_width: String,
    /// Column used to name output files; stays in the book variables
    pub title: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            height: "Height".to_string(),
            width: "Width".to_string(),
            thickness: "Thickness".to_string(),
            flap_width: "Flap Width".to_string(),
            title: "Title".to_string(),
        }
    }
}

/// Guide marks drawn by the PDF plotter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JacketMarks {
    /// Thin outline around every region
    pub region_outlines: bool,
    /// Short dashed ticks in the bleed where the jacket folds
    pub fold_marks: bool,
    /// L-shaped marks at the trim corners
    pub crop_marks: bool,
}

impl Default for JacketMarks {
    fn default() -> Self {
        Self {
            region_outlines: true,
            fold_marks: true,
            crop_marks: true,
        }
    }
}

/// Jacket generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JacketOptions {
    // Input
    pub units: MeasurementSystem,
    pub columns: ColumnMapping,
    pub default_flap_width_mm: Option<f32>,

    // Output
    pub bleed_mm: f32,
    pub marks: JacketMarks,
}

impl Default for JacketOptions {
    fn default() -> Self {
        Self {
            units: MeasurementSystem::Millimeters,
            columns: ColumnMapping::default(),
            default_flap_width_mm: None,
            bleed_mm: 15.0,
            marks: JacketMarks::default(),
        }
    }
}

impl JacketOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| JacketError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| JacketError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.bleed_mm.is_finite() || self.bleed_mm < 0.0 {
            return Err(JacketError::Config(format!(
                "Bleed must be a non-negative number, got {}",
                self.bleed_mm
            )));
        }

        if let Some(flap) = self.default_flap_width_mm {
            if !flap.is_finite() || flap <= 0.0 {
                return Err(JacketError::Config(format!(
                    "Default flap width must be positive, got {}",
                    flap
                )));
            }
        }

        let columns = [
            &self.columns.height,
            &self.columns.width,
            &self.columns.thickness,
            &self.columns.flap_width,
        ];
        if columns.iter().any(|name| name.trim().is_empty()) {
            return Err(JacketError::Config(
                "Measurement column names must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
