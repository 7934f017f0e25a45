//! Resolution of output rules against field values.
//!
//! A resolver turns a field's rules and value into declarations in a
//! [`StyleMap`]. Which resolver handles a field depends on its type:
//!
//! - [`ScalarResolver`]: the fallback. One declaration per rule.
//! - [`DimensionsResolver`]: composite values such as `{top, right, bottom,
//!   left}`. One declaration per rule and sub-key, with `%%` templating and
//!   `choice` restriction.
//!
//! The mapping from field type to resolver lives in [`ResolverRegistry`] and
//! can be extended with custom [`OutputResolver`] implementations.
//!
//! ## Writing a resolver
//!
//! Resolvers never write to the map directly. They call
//! [`ResolveContext::write`], which applies the property's registered value
//! transform and the rule's prefix and suffix before storing the result:
//!
//! ```rust
//! use fieldcss::{FieldValue, OutputResolver, OutputRule, ResolveContext};
//!
//! /// Writes a composite value as a space-separated shorthand.
//! struct Shorthand;
//!
//! impl OutputResolver for Shorthand {
//!     fn resolve(&self, rules: &[OutputRule], value: &FieldValue, ctx: &mut ResolveContext<'_>) {
//!         let Some(values) = value.as_composite() else { return };
//!         let joined = values.values().cloned().collect::<Vec<_>>().join(" ");
//!         for rule in rules {
//!             ctx.write(rule, &rule.property, &joined);
//!         }
//!     }
//! }
//! ```

mod dimensions;
mod registry;
mod scalar;

pub use dimensions::DimensionsResolver;
pub use registry::{ResolverRegistry, DIMENSIONS_FIELD_TYPE};
pub use scalar::ScalarResolver;

use crate::rule::OutputRule;
use crate::style::StyleMap;
use crate::transform::TransformRegistry;
use crate::value::FieldValue;

/// Resolves a field's output rules and value into style map declarations.
///
/// Resolution is fail-open: rules that cannot apply to the value are skipped
/// rather than reported as errors.
pub trait OutputResolver {
    fn resolve(&self, rules: &[OutputRule], value: &FieldValue, ctx: &mut ResolveContext<'_>);
}

/// Blanket implementation for closures with the resolver signature.
impl<F> OutputResolver for F
where
    F: Fn(&[OutputRule], &FieldValue, &mut ResolveContext<'_>),
{
    fn resolve(&self, rules: &[OutputRule], value: &FieldValue, ctx: &mut ResolveContext<'_>) {
        (self)(rules, value, ctx)
    }
}

/// Write access to the style map for the duration of one resolution.
pub struct ResolveContext<'a> {
    styles: &'a mut StyleMap,
    transforms: &'a TransformRegistry,
}

impl<'a> ResolveContext<'a> {
    pub fn new(styles: &'a mut StyleMap, transforms: &'a TransformRegistry) -> Self {
        Self { styles, transforms }
    }

    /// Stores `prefix + transform(property, raw) + suffix` under the rule's
    /// media query and selector, overwriting any previous value.
    pub fn write(&mut self, rule: &OutputRule, property: &str, raw: &str) {
        let value = rule.decorate(&self.transforms.apply(property, raw));
        self.styles
            .set(&rule.media_query, &rule.selector, property, value);
    }

    /// The declarations written so far, including those from earlier fields.
    pub fn styles(&self) -> &StyleMap {
        self.styles
    }
}
