//! PDF output for laid-out billforge documents, built on `lopdf`.
//!
//! Pages are written through [`PdfWriter`], which buffers objects under
//! stable ids and serializes them in a fixed order so identical layouts
//! produce identical bytes.

mod helpers;
mod renderer;
mod resources;
mod writer;

pub use helpers::to_win_ansi;
pub use renderer::LopdfRenderer;
pub use writer::PdfWriter;
