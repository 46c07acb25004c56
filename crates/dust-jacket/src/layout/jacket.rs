//! Dust jacket measurements and region derivation
//!
//! A jacket is five rectangles side by side along the abscissa, all sharing
//! the book height:
//!
//! ```text
//! | left fold | left trim | spine | right trim | right fold |
//! ```
//!
//! Each region starts where the previous one terminates.

use super::types::{Canvas, Point};
use crate::types::CanvasError;
use std::collections::{BTreeMap, HashSet};

/// The named areas of a dust jacket, in left-to-right order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    LeftFold,
    LeftTrim,
    Spine,
    RightTrim,
    RightFold,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::LeftFold,
        Region::LeftTrim,
        Region::Spine,
        Region::RightTrim,
        Region::RightFold,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::LeftFold => "left fold",
            Region::LeftTrim => "left trim",
            Region::Spine => "spine",
            Region::RightTrim => "right trim",
            Region::RightFold => "right fold",
        }
    }
}

/// Book measurements plus any extra per-book columns.
///
/// Fields are fixed at construction. Regions are derived on every call and
/// never cached, so repeated calls always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct DustJacket {
    book_height_mm: f32,
    book_width_mm: f32,
    book_thickness_mm: f32,
    flap_width_mm: f32,
    book_vars: BTreeMap<String, String>,
}

impl DustJacket {
    pub fn new(
        book_height_mm: f32,
        book_width_mm: f32,
        book_thickness_mm: f32,
        flap_width_mm: f32,
        book_vars: BTreeMap<String, String>,
    ) -> Self {
        Self {
            book_height_mm,
            book_width_mm,
            book_thickness_mm,
            flap_width_mm,
            book_vars,
        }
    }

    pub fn book_height_mm(&self) -> f32 {
        self.book_height_mm
    }

    pub fn book_width_mm(&self) -> f32 {
        self.book_width_mm
    }

    pub fn book_thickness_mm(&self) -> f32 {
        self.book_thickness_mm
    }

    pub fn flap_width_mm(&self) -> f32 {
        self.flap_width_mm
    }

    /// Columns carried through untouched for plotters and file naming
    pub fn book_vars(&self) -> &BTreeMap<String, String> {
        &self.book_vars
    }

    pub fn book_var(&self, key: &str) -> Option<&str> {
        self.book_vars.get(key).map(String::as_str)
    }

    /// Filesystem-safe name taken from the `title_column` variable, or
    /// `jacket-<index>` when the title is missing or blank.
    pub fn file_stem(&self, title_column: &str, index: usize) -> String {
        let title = self.book_var(title_column).unwrap_or_default().trim();
        let stem: String = title
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let stem = stem.trim_matches('_');

        if stem.is_empty() {
            format!("jacket-{}", index)
        } else {
            stem.to_string()
        }
    }

    /// One stem per jacket, in order, with no two equal ignoring case.
    ///
    /// A stem that was already handed out gets `-<index>` appended, so two
    /// books titled "Dune" become `Dune` and `Dune-2`.
    pub fn unique_file_stems(jackets: &[DustJacket], title_column: &str) -> Vec<String> {
        let mut used = HashSet::new();
        jackets
            .iter()
            .enumerate()
            .map(|(offset, jacket)| {
                let index = offset + 1;
                let stem = jacket.file_stem(title_column, index);
                let mut candidate = stem.clone();
                let mut suffix = index;
                while !used.insert(candidate.to_lowercase()) {
                    candidate = format!("{}-{}", stem, suffix);
                    suffix += 1;
                }
                candidate
            })
            .collect()
    }

    /// Canvas of `width` starting at `orig_abscissa`, spanning the book height
    fn component_measurement(&self, orig_abscissa: f32, width: f32) -> Result<Canvas, CanvasError> {
        let origin = Point::new(orig_abscissa, 0.0);
        let termination = origin + Point::new(width, self.book_height_mm);
        Canvas::new(origin, termination)
    }

    pub fn left_fold(&self) -> Result<Canvas, CanvasError> {
        self.component_measurement(0.0, self.book_width_mm)
    }

    pub fn left_trim(&self) -> Result<Canvas, CanvasError> {
        let start = self.left_fold()?.termination().abscissa();
        self.component_measurement(start, self.flap_width_mm)
    }

    pub fn spine(&self) -> Result<Canvas, CanvasError> {
        let start = self.left_trim()?.termination().abscissa();
        self.component_measurement(start, self.book_thickness_mm)
    }

    pub fn right_trim(&self) -> Result<Canvas, CanvasError> {
        let start = self.spine()?.termination().abscissa();
        self.component_measurement(start, self.book_width_mm)
    }

    pub fn right_fold(&self) -> Result<Canvas, CanvasError> {
        let start = self.right_trim()?.termination().abscissa();
        self.component_measurement(start, self.flap_width_mm)
    }

    pub fn region(&self, region: Region) -> Result<Canvas, CanvasError> {
        match region {
            Region::LeftFold => self.left_fold(),
            Region::LeftTrim => self.left_trim(),
            Region::Spine => self.spine(),
            Region::RightTrim => self.right_trim(),
            Region::RightFold => self.right_fold(),
        }
    }

    /// Width of a region as configured, before any validation
    pub fn region_width_mm(&self, region: Region) -> f32 {
        match region {
            Region::LeftFold | Region::RightTrim => self.book_width_mm,
            Region::LeftTrim | Region::RightFold => self.flap_width_mm,
            Region::Spine => self.book_thickness_mm,
        }
    }

    /// All five regions in one pass, threading each termination into the
    /// next origin.
    pub fn regions(&self) -> Result<[(Region, Canvas); 5], CanvasError> {
        let mut start = 0.0;
        let mut build = |region: Region| -> Result<(Region, Canvas), CanvasError> {
            let canvas = self.component_measurement(start, self.region_width_mm(region))?;
            start = canvas.termination().abscissa();
            Ok((region, canvas))
        };

        Ok([
            build(Region::LeftFold)?,
            build(Region::LeftTrim)?,
            build(Region::Spine)?,
            build(Region::RightTrim)?,
            build(Region::RightFold)?,
        ])
    }

    /// Bounding rectangle of the whole jacket
    pub fn outer(&self) -> Result<Canvas, CanvasError> {
        Canvas::new(Point::ORIGIN, self.right_fold()?.termination())
    }
}
