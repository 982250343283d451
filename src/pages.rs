//! Resolver, shape-based renderers, hydrator, tabs, theme and loader.

pub use induction_pages::*;
