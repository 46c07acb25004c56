use dust_jacket::constants::mm_to_pt;
use dust_jacket::*;
use lopdf::{Document, Object};
use std::collections::BTreeMap;

fn create_test_jacket(title: &str, width: f32) -> DustJacket {
    let mut vars = BTreeMap::new();
    vars.insert("Title".to_string(), title.to_string());
    DustJacket::new(200.0, width, 20.0, 80.0, vars)
}

fn box_values(doc: &Document, page_id: lopdf::ObjectId, key: &[u8]) -> Vec<f32> {
    let page = doc.get_dictionary(page_id).unwrap();
    page.get(key)
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|value| match value {
            Object::Real(v) => *v,
            Object::Integer(v) => *v as f32,
            other => panic!("unexpected box value {:?}", other),
        })
        .collect()
}

#[tokio::test]
async fn test_render_one_page_per_jacket() {
    let jackets = vec![
        create_test_jacket("First", 150.0),
        create_test_jacket("Second", 140.0),
    ];

    let doc = render_jackets(&jackets, &JacketOptions::default())
        .await
        .unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[tokio::test]
async fn test_page_boxes_include_bleed() {
    let jackets = vec![create_test_jacket("Boxes", 150.0)];
    let options = JacketOptions::default();

    let doc = render_jackets(&jackets, &options).await.unwrap();
    let page_id = *doc.get_pages().get(&1).unwrap();

    let bleed = mm_to_pt(15.0);
    let media = box_values(&doc, page_id, b"MediaBox");
    let trim = box_values(&doc, page_id, b"TrimBox");

    assert_eq!(media[0], 0.0);
    assert!((media[2] - (mm_to_pt(480.0) + 2.0 * bleed)).abs() < 0.01);
    assert!((media[3] - (mm_to_pt(200.0) + 2.0 * bleed)).abs() < 0.01);

    assert!((trim[0] - bleed).abs() < 0.01);
    assert!((trim[2] - trim[0] - mm_to_pt(480.0)).abs() < 0.01);
    assert!((trim[3] - trim[1] - mm_to_pt(200.0)).abs() < 0.01);

    assert_eq!(media, box_values(&doc, page_id, b"BleedBox"));
}

#[tokio::test]
async fn test_page_content_has_guides() {
    let jackets = vec![create_test_jacket("Content", 150.0)];
    let doc = render_jackets(&jackets, &JacketOptions::default())
        .await
        .unwrap();

    let page_id = *doc.get_pages().get(&1).unwrap();
    let content = doc.get_page_content(page_id).unwrap();
    let text = String::from_utf8(content).unwrap();

    assert_eq!(text.matches(" re S").count(), 5);
    assert!(text.contains(" l S"));
}

#[tokio::test]
async fn test_render_no_jackets() {
    let result = render_jackets(&[], &JacketOptions::default()).await;
    assert!(matches!(result, Err(JacketError::NoRows)));
}

#[tokio::test]
async fn test_render_invalid_jacket() {
    let jackets = vec![
        create_test_jacket("Fine", 150.0),
        create_test_jacket("Broken", 0.0),
    ];

    let result = render_jackets(&jackets, &JacketOptions::default()).await;
    match result {
        Err(JacketError::Canvas(CanvasError::Precondition { .. })) => {}
        _ => panic!("Expected Canvas precondition error"),
    }
}

#[tokio::test]
async fn test_render_validation_fails() {
    let jackets = vec![create_test_jacket("Bleed", 150.0)];
    let options = JacketOptions {
        bleed_mm: -3.0,
        ..Default::default()
    };

    let result = render_jackets(&jackets, &options).await;
    assert!(matches!(result, Err(JacketError::Config(_))));
}

#[tokio::test]
async fn test_save_pdf() {
    use tempfile::NamedTempFile;

    let jackets = vec![create_test_jacket("Saved", 150.0)];
    let doc = render_jackets(&jackets, &JacketOptions::default())
        .await
        .unwrap();

    let temp = NamedTempFile::new().unwrap();
    save_pdf(doc, temp.path()).await.unwrap();

    let loaded = Document::load(temp.path()).unwrap();
    assert_eq!(loaded.get_pages().len(), 1);
}
