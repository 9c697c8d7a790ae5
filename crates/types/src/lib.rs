pub mod color;
pub mod document;
pub mod geometry;

pub use color::Color;
pub use document::{
    DocumentData, DocumentKind, DocumentStatus, ImageSource, LineItem, PartyRecord,
    PostalAddress, ProjectReference,
};
pub use geometry::{Rect, Size};

// Monetary and quantity values are decimals throughout the engine.
pub use rust_decimal::Decimal;
