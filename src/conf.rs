//! Layered hydration settings.

pub use induction_conf::*;
