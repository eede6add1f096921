//! Export backends for rendered ladder diagrams.
//!
//! Each backend implements the [`Surface`](rungview_core::surface::Surface)
//! trait, so the renderer drives them without knowing the output format.
//! Currently only SVG output is supported.

use thiserror::Error;

pub mod svg;

pub use svg::SvgSurface;

/// Errors raised while writing an exported document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
