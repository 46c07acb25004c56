//! Jacket page assembly
//!
//! One output page per jacket. The page is the trimmed jacket plus bleed on
//! every side; TrimBox marks the jacket itself.

use super::plotter::GuidePlotter;
use crate::constants::mm_to_pt;
use crate::layout::DustJacket;
use crate::options::JacketOptions;
use crate::plot::plot_jacket;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

/// Render every jacket onto its own page of a new document
pub async fn render_jackets(jackets: &[DustJacket], options: &JacketOptions) -> Result<Document> {
    options.validate()?;

    let jackets = jackets.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || render_jackets_sync(&jackets, &options)).await?
}

fn render_jackets_sync(jackets: &[DustJacket], options: &JacketOptions) -> Result<Document> {
    if jackets.is_empty() {
        return Err(JacketError::NoRows);
    }

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();

    for (index, jacket) in jackets.iter().enumerate() {
        let page_id = render_jacket_page(&mut output, jacket, pages_tree_id, options)?;
        log::debug!(
            "Rendered jacket {} ({})",
            index + 1,
            jacket.file_stem(&options.columns.title, index + 1)
        );
        page_refs.push(Object::Reference(page_id));
    }

    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// Add one jacket page to `output` and return its object id.
///
/// Fails with the canvas precondition error before anything is added when the
/// jacket dimensions are degenerate.
pub fn render_jacket_page(
    output: &mut Document,
    jacket: &DustJacket,
    parent_pages_id: ObjectId,
    options: &JacketOptions,
) -> Result<ObjectId> {
    let mut plotter = GuidePlotter::new(options.bleed_mm, options.marks);
    plot_jacket(jacket, &mut plotter)?;

    let outer = jacket.outer()?;
    let bleed_pt = mm_to_pt(options.bleed_mm);
    let trim_width_pt = mm_to_pt(outer.width());
    let trim_height_pt = mm_to_pt(outer.height());
    let sheet_width_pt = trim_width_pt + 2.0 * bleed_pt;
    let sheet_height_pt = trim_height_pt + 2.0 * bleed_pt;

    let media_box = box_array(0.0, 0.0, sheet_width_pt, sheet_height_pt);
    let trim_box = box_array(
        bleed_pt,
        bleed_pt,
        bleed_pt + trim_width_pt,
        bleed_pt + trim_height_pt,
    );

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set("MediaBox", media_box.clone());
    page_dict.set("BleedBox", media_box);
    page_dict.set("TrimBox", trim_box);

    let content = plotter.into_content();
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));

    Ok(output.add_object(page_dict))
}

fn box_array(left: f32, bottom: f32, right: f32, top: f32) -> Object {
    Object::Array(vec![
        Object::Real(left),
        Object::Real(bottom),
        Object::Real(right),
        Object::Real(top),
    ])
}

/// Save a rendered document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, JacketError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
