use crate::layout::{DustJacket, Region};
use crate::options::JacketOptions;
use crate::types::*;

/// Summary measurements of a jacket, in millimetres
#[derive(Debug, Clone, PartialEq)]
pub struct JacketStatistics {
    /// Trimmed jacket width (all five regions)
    pub jacket_width_mm: f32,
    /// Trimmed jacket height (the book height)
    pub jacket_height_mm: f32,
    /// Output sheet width including bleed on both sides
    pub sheet_width_mm: f32,
    /// Output sheet height including bleed on both sides
    pub sheet_height_mm: f32,
    pub spine_width_mm: f32,
    pub flap_width_mm: f32,
    /// Width of every region, left to right
    pub region_widths_mm: Vec<(Region, f32)>,
}

/// Calculate statistics for one jacket
pub fn calculate_statistics(
    jacket: &DustJacket,
    options: &JacketOptions,
) -> Result<JacketStatistics> {
    options.validate()?;

    let regions = jacket.regions()?;
    let outer = jacket.outer()?;

    let region_widths_mm = regions
        .iter()
        .map(|(region, canvas)| (*region, canvas.width()))
        .collect();

    Ok(JacketStatistics {
        jacket_width_mm: outer.width(),
        jacket_height_mm: outer.height(),
        sheet_width_mm: outer.width() + 2.0 * options.bleed_mm,
        sheet_height_mm: outer.height() + 2.0 * options.bleed_mm,
        spine_width_mm: jacket.book_thickness_mm(),
        flap_width_mm: jacket.flap_width_mm(),
        region_widths_mm,
    })
}
