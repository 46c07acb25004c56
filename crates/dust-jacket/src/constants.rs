//! Shared constants for jacket output
//!
//! Layout works in millimetres; PDF output works in points.

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

// =============================================================================
// Guide Marks
// =============================================================================

/// Line width for region outlines (points)
pub const OUTLINE_WIDTH: f32 = 0.25;

/// Gray level for region outlines (0 = black, 1 = white)
pub const OUTLINE_GRAY: f32 = 0.6;

/// Line width for fold marks (points)
pub const FOLD_MARK_WIDTH: f32 = 0.5;

/// Line width for crop marks (points)
pub const CROP_MARK_WIDTH: f32 = 0.25;

/// Length of crop and fold marks (points)
pub const MARK_LENGTH: f32 = 12.0;

/// Gap between a mark and the trim edge (points)
pub const MARK_GAP: f32 = 3.0;
