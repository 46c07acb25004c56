//! PDF output for dust jackets
//!
//! - `GuidePlotter`: region outlines, fold and crop marks as content stream ops
//! - Page assembly with media, bleed and trim boxes

mod page;
mod plotter;

pub use page::{render_jacket_page, render_jackets, save_pdf};
pub use plotter::GuidePlotter;
