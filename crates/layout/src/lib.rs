//! Page layout for estimates and invoices.
//!
//! A document is laid out by running a fixed sequence of sections through a
//! [`PageStream`], which owns the cursor and every page-break decision. The
//! result is a [`LaidOutDocument`]: absolutely positioned draw commands per
//! page, ready for a renderer.

pub mod algorithms;
pub mod assets;
mod elements;
mod engine;
mod env;
mod error;
mod page;
pub mod sections;
pub mod table;
pub mod text;

pub use self::assets::{AssetError, AssetKind, AssetWarning, EmbeddedImage, decode_image};
pub use self::elements::{
    ElementRole, ImageElement, LayoutElement, PositionedElement, RectElement, Stroke, TextElement, TextStyle,
    TotalsLine,
};
pub use self::engine::LayoutEngine;
pub use self::env::{FooterOptions, MUTED_COLOR, RULE_COLOR, RenderMode, SectionEnv, TEXT_COLOR};
pub use self::error::LayoutError;
pub use self::page::{FOOTER_BAND, LaidOutDocument, LaidOutPage, PageGeometry, PageStream};
pub use self::sections::{Section, SectionOutput};
pub use self::table::TableLayoutEngine;

pub use billforge_types::{Rect, Size};

#[cfg(test)]
mod test_utils;
