//! Template configuration and the fail-open resolver.
//!
//! A stored [`TemplateConfig`] is merged over fixed defaults by [`resolve`],
//! producing a [`ResolvedConfig`] whose flags and styles are always usable.
//! Feature flags are nullable booleans: only an explicit `false` turns a
//! feature off.

mod config;
mod error;
mod feature;
mod resolver;

pub use config::TemplateConfig;
pub use error::TemplateError;
pub use feature::{Feature, FeatureFlags};
pub use resolver::{
    DEFAULT_PRIMARY, DEFAULT_SECONDARY, HeaderVariant, ResolvedConfig, TableVariant, resolve,
    resolve_json,
};
