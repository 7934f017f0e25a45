//! # fieldcss - CSS from Field Output Rules
//!
//! `fieldcss` turns a set of fields (a value plus one or more output rules)
//! into minified CSS for a page `<style>` block. Each rule says where the value
//! lands: selector, property, media query, and optional prefix and suffix.
//!
//! ## Core Concepts
//!
//! - [`Field`]: A value, its type, and its [`OutputRule`]s
//! - [`FieldValue`]: A scalar, or a composite of named sub-values
//! - [`OutputResolver`]: Turns rules plus a value into declarations
//! - [`ResolverRegistry`]: Picks a resolver by field type, with a scalar fallback
//! - [`StyleMap`]: Ordered `media query → selector → property → value` map
//! - [`Generator`]: Runs the whole pipeline, one [`GenerationPass`] per render
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcss::{Field, FieldValue, Generator, OutputRule};
//!
//! let fields = [
//!     Field::new("link_color", "color")
//!         .value("#0073aa")
//!         .rule(OutputRule::new("a").property("color")),
//!     Field::new("header_padding", "dimensions")
//!         .value(FieldValue::composite([("top", "10px"), ("bottom", "20px")]))
//!         .rule(OutputRule::new(".site-header").property("padding"))
//!         .rule(OutputRule::new(".site-header")
//!             .property("padding-top")
//!             .choice("top")
//!             .media_query("@media (min-width:768px)")),
//! ];
//!
//! let css = Generator::new().generate(&fields);
//! assert_eq!(
//!     css,
//!     "a{color:#0073aa;}.site-header{padding-top:10px;padding-bottom:20px;}\
//!      @media (min-width:768px){.site-header{padding-top:10px;}}"
//! );
//! ```
//!
//! ## Loading Fields
//!
//! Field sets and generator settings can be loaded from YAML or JSON:
//!
//! ```rust
//! use fieldcss::{FieldSet, Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::from_yaml("default_properties: { color: color }").unwrap();
//! let fields = FieldSet::from_yaml(r##"
//! body_text:
//!   type: color
//!   value: "#333"
//!   output: body
//! "##).unwrap();
//!
//! assert_eq!(Generator::from_config(&config).generate(&fields), "body{color:#333;}");
//! ```
//!
//! ## Diagnostics
//!
//! Resolution never fails. Rules that cannot apply are skipped, and the
//! skips are reported through the [`log`] facade: resolver fallbacks and
//! shape mismatches at `debug`, contradictory rules at `warn`.

pub mod config;
mod error;
pub mod field;
mod load;
pub mod prelude;
pub mod resolve;
pub mod rule;
pub mod style;
pub mod transform;
pub mod value;
mod generator;

// Error type
pub use error::LoadError;

// Field model
pub use field::{Field, FieldOutput, FieldSet, DEFAULT_CONFIG};
pub use rule::{OutputRule, GLOBAL_MEDIA_QUERY, SUB_KEY_PLACEHOLDER};
pub use value::FieldValue;

// Resolution
pub use resolve::{
    DimensionsResolver, OutputResolver, ResolveContext, ResolverRegistry, ScalarResolver,
    DIMENSIONS_FIELD_TYPE,
};
pub use transform::{TransformRegistry, ValueTransform};

// Style map and serialization
pub use style::{add_prefixes, to_css, Declarations, Rulesets, StyleMap, StyleValue};

// Pipeline
pub use config::GeneratorConfig;
pub use generator::{GenerationPass, Generator, StylesFilter};
