use dust_jacket::*;
use std::collections::BTreeMap;

fn create_test_jacket() -> DustJacket {
    DustJacket::new(200.0, 150.0, 20.0, 80.0, BTreeMap::new())
}

#[test]
fn test_plot_order_and_canvases() {
    let jacket = create_test_jacket();
    let mut plotter = RecordingPlotter::new();

    plot_jacket(&jacket, &mut plotter).unwrap();

    let calls = plotter.calls();
    assert_eq!(calls.len(), 6);

    let expected = [
        PlotCall::Region(Region::LeftFold),
        PlotCall::Region(Region::LeftTrim),
        PlotCall::Region(Region::Spine),
        PlotCall::Region(Region::RightTrim),
        PlotCall::Region(Region::RightFold),
        PlotCall::Outer,
    ];
    for ((call, _), expected) in calls.iter().zip(expected) {
        assert_eq!(*call, expected);
    }

    assert_eq!(calls[2].1, jacket.spine().unwrap());
    assert_eq!(calls[5].1, jacket.outer().unwrap());
}

#[test]
fn test_invalid_jacket_plots_nothing() {
    // Broken spine: the left regions are valid but must not be drawn
    let jacket = DustJacket::new(200.0, 150.0, 0.0, 80.0, BTreeMap::new());
    let mut plotter = RecordingPlotter::new();

    let result = plot_jacket(&jacket, &mut plotter);
    assert!(matches!(result, Err(CanvasError::Precondition { .. })));
    assert!(plotter.calls().is_empty());
}

#[test]
fn test_plot_region_dispatch() {
    let jacket = create_test_jacket();
    let mut plotter = RecordingPlotter::new();

    for region in Region::ALL.iter().rev() {
        plotter.plot_region(*region, &jacket.region(*region).unwrap());
    }

    let calls = plotter.into_calls();
    assert_eq!(calls[0].0, PlotCall::Region(Region::RightFold));
    assert_eq!(calls[4].0, PlotCall::Region(Region::LeftFold));
}

/// Plotter defined outside the crate, as a downstream user would write one
#[derive(Default)]
struct SpineOnly {
    spine_width: Option<f32>,
    outer_width: Option<f32>,
}

impl JacketPlotter for SpineOnly {
    fn plot_left_fold(&mut self, _canvas: &Canvas) {}
    fn plot_left_trim(&mut self, _canvas: &Canvas) {}
    fn plot_spine(&mut self, canvas: &Canvas) {
        self.spine_width = Some(canvas.width());
    }
    fn plot_right_trim(&mut self, _canvas: &Canvas) {}
    fn plot_right_fold(&mut self, _canvas: &Canvas) {}
    fn plot_outer(&mut self, canvas: &Canvas) {
        self.outer_width = Some(canvas.width());
    }
}

#[test]
fn test_custom_plotter_through_trait_object() {
    let jacket = create_test_jacket();
    let mut spine_only = SpineOnly::default();

    {
        let plotter: &mut dyn JacketPlotter = &mut spine_only;
        plot_jacket(&jacket, plotter).unwrap();
    }

    assert_eq!(spine_only.spine_width, Some(20.0));
    assert_eq!(spine_only.outer_width, Some(480.0));
}

#[test]
fn test_guide_plotter_emits_marks() {
    let jacket = create_test_jacket();
    let mut plotter = GuidePlotter::new(15.0, JacketMarks::default());

    plot_jacket(&jacket, &mut plotter).unwrap();
    let content = plotter.content();

    // One outline per region
    assert_eq!(content.matches(" re S").count(), 5);
    // Four fold positions, a tick above and below each, plus eight crop arms
    assert_eq!(content.matches(" l S").count(), 4 * 2 + 8);
    assert!(content.contains("[3 2] 0 d"));
}

#[test]
fn test_guide_plotter_respects_mark_toggles() {
    let jacket = create_test_jacket();
    let marks = JacketMarks {
        region_outlines: false,
        fold_marks: false,
        crop_marks: true,
    };
    let mut plotter = GuidePlotter::new(15.0, marks);

    plot_jacket(&jacket, &mut plotter).unwrap();
    let content = plotter.into_content();

    assert!(!content.contains(" re S"));
    assert!(!content.contains("[3 2] 0 d"));
    assert_eq!(content.matches(" l S").count(), 8);
}
