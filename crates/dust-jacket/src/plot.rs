//! Plotting interface for dust jacket regions
//!
//! A plotter receives one canvas per region, left to right, followed by the
//! outer canvas spanning the whole jacket for cross-cutting decoration such
//! as backgrounds or wraparound bands.

use crate::layout::{Canvas, DustJacket, Region};
use crate::types::CanvasError;

/// Drawing strategy for the parts of a dust jacket
pub trait JacketPlotter {
    fn plot_left_fold(&mut self, canvas: &Canvas);
    fn plot_left_trim(&mut self, canvas: &Canvas);
    fn plot_spine(&mut self, canvas: &Canvas);
    fn plot_right_trim(&mut self, canvas: &Canvas);
    fn plot_right_fold(&mut self, canvas: &Canvas);
    /// Decoration spanning several regions
    fn plot_outer(&mut self, canvas: &Canvas);

    /// Dispatch to the method for `region`
    fn plot_region(&mut self, region: Region, canvas: &Canvas) {
        match region {
            Region::LeftFold => self.plot_left_fold(canvas),
            Region::LeftTrim => self.plot_left_trim(canvas),
            Region::Spine => self.plot_spine(canvas),
            Region::RightTrim => self.plot_right_trim(canvas),
            Region::RightFold => self.plot_right_fold(canvas),
        }
    }
}

/// Plot every region of `jacket`, then the outer pass.
///
/// All canvases are derived before the first call, so an invalid jacket never
/// reaches the plotter half drawn.
pub fn plot_jacket<P: JacketPlotter + ?Sized>(
    jacket: &DustJacket,
    plotter: &mut P,
) -> Result<(), CanvasError> {
    let regions = jacket.regions()?;
    let outer = jacket.outer()?;

    for (region, canvas) in &regions {
        plotter.plot_region(*region, canvas);
    }
    plotter.plot_outer(&outer);

    Ok(())
}

/// Which plotter method was invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotCall {
    Region(Region),
    Outer,
}

/// Plotter that only remembers what it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct RecordingPlotter {
    calls: Vec<(PlotCall, Canvas)>,
}

impl RecordingPlotter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[(PlotCall, Canvas)] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<(PlotCall, Canvas)> {
        self.calls
    }

    fn record(&mut self, call: PlotCall, canvas: &Canvas) {
        log::trace!("plot {:?} at {:?}", call, canvas);
        self.calls.push((call, *canvas));
    }
}

impl JacketPlotter for RecordingPlotter {
    fn plot_left_fold(&mut self, canvas: &Canvas) {
        self.record(PlotCall::Region(Region::LeftFold), canvas);
    }

    fn plot_left_trim(&mut self, canvas: &Canvas) {
        self.record(PlotCall::Region(Region::LeftTrim), canvas);
    }

    fn plot_spine(&mut self, canvas: &Canvas) {
        self.record(PlotCall::Region(Region::Spine), canvas);
    }

    fn plot_right_trim(&mut self, canvas: &Canvas) {
        self.record(PlotCall::Region(Region::RightTrim), canvas);
    }

    fn plot_right_fold(&mut self, canvas: &Canvas) {
        self.record(PlotCall::Region(Region::RightFold), canvas);
    }

    fn plot_outer(&mut self, canvas: &Canvas) {
        self.record(PlotCall::Outer, canvas);
    }
}
