//! # induction-core
//!
//! Core types shared by the induction-web crates.
//!
//! - [`page`]: the `Page` tree used for templates and rendered fragments,
//!   HTML escaping, parsing through html5ever, and node addressing.

pub mod page;

pub use page::{IntoPage, NodePath, Page, PageElement};
