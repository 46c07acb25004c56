//! Guide marks for jacket pages
//!
//! Each function returns PDF content stream operators. Coordinates are in
//! points on the output page.

use crate::constants::{
    CROP_MARK_WIDTH, FOLD_MARK_WIDTH, MARK_GAP, MARK_LENGTH, OUTLINE_GRAY, OUTLINE_WIDTH,
};

/// Trimmed jacket area on the output page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimBounds {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

/// Thin gray rectangle around one region
pub fn generate_region_outline(x: f32, y: f32, width: f32, height: f32) -> String {
    format!(
        "q\n{} G\n{} w\n[] 0 d\n{} {} {} {} re S\nQ\n",
        OUTLINE_GRAY, OUTLINE_WIDTH, x, y, width, height
    )
}

/// Dashed ticks above and below the trim at each fold position
pub fn generate_fold_marks(fold_xs: &[f32], trim: &TrimBounds) -> String {
    if fold_xs.is_empty() {
        return String::new();
    }

    let mut ops = String::new();
    ops.push_str("q\n0 0 0 RG\n");
    ops.push_str(&format!("{} w\n", FOLD_MARK_WIDTH));
    ops.push_str("[3 2] 0 d\n");

    for &x in fold_xs {
        // Above the head
        ops.push_str(&format!(
            "{} {} m {} {} l S\n",
            x,
            trim.top + MARK_GAP,
            x,
            trim.top + MARK_GAP + MARK_LENGTH
        ));
        // Below the tail
        ops.push_str(&format!(
            "{} {} m {} {} l S\n",
            x,
            trim.bottom - MARK_GAP,
            x,
            trim.bottom - MARK_GAP - MARK_LENGTH
        ));
    }

    ops.push_str("Q\n");
    ops
}

/// L-shaped marks just outside each corner of the trim
pub fn generate_crop_marks(trim: &TrimBounds) -> String {
    let mut ops = String::new();
    ops.push_str("q\n0 0 0 RG\n");
    ops.push_str(&format!("{} w\n", CROP_MARK_WIDTH));
    ops.push_str("[] 0 d\n");

    // (corner x, corner y, horizontal direction, vertical direction)
    let corners = [
        (trim.left, trim.top, -1.0, 1.0),
        (trim.right, trim.top, 1.0, 1.0),
        (trim.left, trim.bottom, -1.0, -1.0),
        (trim.right, trim.bottom, 1.0, -1.0),
    ];

    for (x, y, dx, dy) in corners {
        // Vertical arm continues the side edge past the corner
        ops.push_str(&format!(
            "{} {} m {} {} l S\n",
            x,
            y + dy * MARK_GAP,
            x,
            y + dy * (MARK_GAP + MARK_LENGTH)
        ));
        // Horizontal arm continues the head or tail edge
        ops.push_str(&format!(
            "{} {} m {} {} l S\n",
            x + dx * MARK_GAP,
            y,
            x + dx * (MARK_GAP + MARK_LENGTH),
            y
        ));
    }

    ops.push_str("Q\n");
    ops
}
