//! Page tree, HTML parsing and node addressing.
//!
//! ```
//! use induction::core::page::parse_fragment;
//!
//! let page = parse_fragment("<p id=\"year\"></p>");
//! assert!(page.find_element(|el| el.get_attr("id") == Some("year")).is_some());
//! ```

pub use induction_core::*;
