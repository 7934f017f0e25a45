//! Convenient imports for hosts generating CSS:
//!
//! ```rust
//! use fieldcss::prelude::*;
//!
//! let field = Field::new("accent", "color")
//!     .value("tomato")
//!     .rule(OutputRule::new(".accent").property("color"));
//! assert_eq!(Generator::new().generate([&field]), ".accent{color:tomato;}");
//! ```

pub use crate::field::{Field, FieldSet};
pub use crate::generator::Generator;
pub use crate::resolve::{OutputResolver, ResolveContext};
pub use crate::rule::OutputRule;
pub use crate::style::StyleMap;
pub use crate::value::FieldValue;
