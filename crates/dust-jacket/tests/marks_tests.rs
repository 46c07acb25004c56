use dust_jacket::constants::{MARK_GAP, MARK_LENGTH, mm_to_pt};
use dust_jacket::marks::*;

fn trim() -> TrimBounds {
    TrimBounds {
        left: 20.0,
        bottom: 20.0,
        right: 520.0,
        top: 320.0,
    }
}

#[test]
fn test_mm_to_pt() {
    assert!((mm_to_pt(25.4) - 72.0).abs() < 1e-4);
    assert_eq!(mm_to_pt(0.0), 0.0);
}

#[test]
fn test_region_outline() {
    let ops = generate_region_outline(10.0, 20.0, 30.0, 40.0);
    assert!(ops.starts_with("q\n"));
    assert!(ops.ends_with("Q\n"));
    assert!(ops.contains("10 20 30 40 re S"));
}

#[test]
fn test_fold_marks_stay_outside_trim() {
    let ops = generate_fold_marks(&[100.0, 250.5], &trim());

    let above = format!(
        "100 {} m 100 {} l S",
        320.0 + MARK_GAP,
        320.0 + MARK_GAP + MARK_LENGTH
    );
    let below = format!(
        "250.5 {} m 250.5 {} l S",
        20.0 - MARK_GAP,
        20.0 - MARK_GAP - MARK_LENGTH
    );
    assert!(ops.contains(&above), "{}", ops);
    assert!(ops.contains(&below), "{}", ops);
    assert_eq!(ops.matches(" l S").count(), 4);
}

#[test]
fn test_fold_marks_empty() {
    assert!(generate_fold_marks(&[], &trim()).is_empty());
}

#[test]
fn test_crop_marks_at_each_corner() {
    let ops = generate_crop_marks(&trim());
    assert_eq!(ops.matches(" l S").count(), 8);

    // Bottom-left vertical arm points down from the corner
    let bottom_left = format!(
        "20 {} m 20 {} l S",
        20.0 - MARK_GAP,
        20.0 - MARK_GAP - MARK_LENGTH
    );
    assert!(ops.contains(&bottom_left), "{}", ops);

    // Top-right horizontal arm points right from the corner
    let top_right = format!(
        "{} 320 m {} 320 l S",
        520.0 + MARK_GAP,
        520.0 + MARK_GAP + MARK_LENGTH
    );
    assert!(ops.contains(&top_right), "{}", ops);
}
