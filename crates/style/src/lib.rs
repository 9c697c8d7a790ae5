pub mod dimension;
pub mod font;
pub mod metrics;
pub mod text;

pub use dimension::{Margins, PageSize};
pub use font::{FontFamily, FontWeight};
pub use metrics::text_width;
pub use text::TextAlign;
