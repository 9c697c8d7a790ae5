//! Core rendering abstractions for billforge output backends.
//!
//! - `DocumentRenderer` abstracts writing laid-out pages to a byte sink
//! - `RenderError` covers every backend failure
//! - Shared coordinate helpers for the top-left layout origin

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::{DocumentRenderer, render_document};
pub use types::DocumentInfo;
