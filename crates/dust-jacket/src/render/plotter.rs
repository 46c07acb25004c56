//! Plotter that draws trim and fold guides into a PDF content stream

use crate::constants::mm_to_pt;
use crate::layout::{Canvas, Point};
use crate::marks::{TrimBounds, generate_crop_marks, generate_fold_marks, generate_region_outline};
use crate::options::JacketMarks;
use crate::plot::JacketPlotter;

/// Collects content stream operators for one jacket page.
///
/// Canvases arrive in jacket coordinates (millimetres from the bottom-left
/// trim corner) and are shifted by the bleed onto the page.
#[derive(Debug, Clone)]
pub struct GuidePlotter {
    bleed_mm: f32,
    marks: JacketMarks,
    content_ops: Vec<String>,
    /// Right edges of the regions plotted so far, in points
    region_edges_pt: Vec<f32>,
}

impl GuidePlotter {
    pub fn new(bleed_mm: f32, marks: JacketMarks) -> Self {
        Self {
            bleed_mm,
            marks,
            content_ops: Vec::new(),
            region_edges_pt: Vec::new(),
        }
    }

    /// The content stream built so far
    pub fn content(&self) -> String {
        self.content_ops.join("")
    }

    pub fn into_content(self) -> String {
        self.content_ops.join("")
    }

    fn to_page(&self, canvas: &Canvas) -> TrimBounds {
        let placed = canvas.translate(Point::new(self.bleed_mm, self.bleed_mm));
        let (left, bottom) = placed.origin().components();
        let (right, top) = placed.termination().components();
        TrimBounds {
            left: mm_to_pt(left),
            bottom: mm_to_pt(bottom),
            right: mm_to_pt(right),
            top: mm_to_pt(top),
        }
    }

    fn plot_component(&mut self, canvas: &Canvas) {
        let bounds = self.to_page(canvas);
        self.region_edges_pt.push(bounds.right);

        if self.marks.region_outlines {
            self.content_ops.push(generate_region_outline(
                bounds.left,
                bounds.bottom,
                bounds.right - bounds.left,
                bounds.top - bounds.bottom,
            ));
        }
    }
}

impl JacketPlotter for GuidePlotter {
    fn plot_left_fold(&mut self, canvas: &Canvas) {
        self.plot_component(canvas);
    }

    fn plot_left_trim(&mut self, canvas: &Canvas) {
        self.plot_component(canvas);
    }

    fn plot_spine(&mut self, canvas: &Canvas) {
        self.plot_component(canvas);
    }

    fn plot_right_trim(&mut self, canvas: &Canvas) {
        self.plot_component(canvas);
    }

    fn plot_right_fold(&mut self, canvas: &Canvas) {
        self.plot_component(canvas);
    }

    fn plot_outer(&mut self, canvas: &Canvas) {
        let trim = self.to_page(canvas);

        if self.marks.fold_marks {
            // The last edge is the trim itself, not a fold
            let folds: Vec<f32> = self
                .region_edges_pt
                .iter()
                .copied()
                .filter(|&x| x < trim.right)
                .collect();
            self.content_ops.push(generate_fold_marks(&folds, &trim));
        }

        if self.marks.crop_marks {
            self.content_ops.push(generate_crop_marks(&trim));
        }
    }
}
