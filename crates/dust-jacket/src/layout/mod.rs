//! Layout calculation for dust jackets
//!
//! - Coordinate and rectangle primitives with their ordering invariant
//! - Region derivation: five contiguous canvases from book measurements

mod jacket;
mod types;

pub use jacket::*;
pub use types::*;
