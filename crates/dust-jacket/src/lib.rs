pub mod constants;
mod ingest;
pub mod layout;
pub mod marks;
mod options;
mod plot;
pub mod render;
mod stats;
mod types;

pub use ingest::{DIMENSIONS_COLUMN, load_jackets, parse_dimensions, parse_jackets, preprocess};
pub use layout::{Canvas, DustJacket, Point, Region};
pub use options::*;
pub use plot::{JacketPlotter, PlotCall, RecordingPlotter, plot_jacket};
pub use render::{GuidePlotter, render_jackets, save_pdf};
pub use stats::{JacketStatistics, calculate_statistics};
pub use types::*;
