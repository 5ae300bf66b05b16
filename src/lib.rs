mod document;
pub use document::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

mod family;
pub use family::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Pure functions to compute line heights and turn content strings into
/// per-line placements
pub mod layout;

/// Pre-defined page sizes for common paper formats
pub mod pagesize;

mod pdf;
pub use pdf::*;

pub(crate) mod refs;

mod metrics;
pub use metrics::*;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for inspecting generated output
pub use pdf_writer;
