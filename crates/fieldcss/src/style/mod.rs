//! The style map and its serialization.
//!
//! Resolution writes declarations into a [`StyleMap`], an ordered
//! `media query → selector → property → value` structure. Once every field has
//! been resolved the map goes through two stages:
//!
//! 1. [`add_prefixes`] duplicates properties such as `transform` under their
//!    `-webkit-`, `-moz-`, `-ms-` and `-o-` names.
//! 2. [`to_css`] emits minified CSS, skipping empty values and empty blocks.
//!
//! ```rust
//! use fieldcss::{add_prefixes, to_css, StyleMap, GLOBAL_MEDIA_QUERY};
//!
//! let mut styles = StyleMap::new();
//! styles.set(GLOBAL_MEDIA_QUERY, ".btn", "box-sizing", "border-box");
//! styles.set("@media (max-width:600px)", ".btn", "width", "100%");
//!
//! assert_eq!(
//!     to_css(&add_prefixes(styles)),
//!     ".btn{-webkit-box-sizing:border-box;-moz-box-sizing:border-box;box-sizing:border-box;}\
//!      @media (max-width:600px){.btn{width:100%;}}"
//! );
//! ```

mod css;
mod map;
mod prefix;

pub use css::to_css;
pub use map::{Declarations, Rulesets, StyleMap, StyleValue};
pub use prefix::add_prefixes;
