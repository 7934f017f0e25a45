//! The default resolver for single-valued fields.

use log::debug;

use super::{OutputResolver, ResolveContext};
use crate::rule::OutputRule;
use crate::value::FieldValue;

/// Writes one declaration per rule: `rule.property: prefix + value + suffix`.
///
/// Rules with an empty `property` use the resolver's default property when one
/// is configured (a color field might default to `color`). Without a default,
/// such rules resolve to nothing. Composite values are not handled here and
/// produce no declarations.
///
/// ```rust
/// use fieldcss::{to_css, FieldValue, OutputResolver, OutputRule, ResolveContext,
///                ScalarResolver, StyleMap, TransformRegistry};
///
/// let resolver = ScalarResolver::with_default_property("color");
/// let rules = [OutputRule::new("a"), OutputRule::new("a:hover").property("border-color")];
///
/// let mut styles = StyleMap::new();
/// let transforms = TransformRegistry::new();
/// resolver.resolve(&rules, &FieldValue::from("#0073aa"),
///                  &mut ResolveContext::new(&mut styles, &transforms));
///
/// assert_eq!(to_css(&styles), "a{color:#0073aa;}a:hover{border-color:#0073aa;}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarResolver {
    default_property: Option<String>,
}

impl ScalarResolver {
    /// Creates a resolver without a default property.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver that fills empty rule properties with `property`.
    pub fn with_default_property(property: impl Into<String>) -> Self {
        Self {
            default_property: Some(property.into()),
        }
    }

    pub fn default_property(&self) -> Option<&str> {
        self.default_property.as_deref()
    }
}

impl OutputResolver for ScalarResolver {
    fn resolve(&self, rules: &[OutputRule], value: &FieldValue, ctx: &mut ResolveContext<'_>) {
        let Some(raw) = value.as_scalar() else {
            debug!(
                "scalar resolver received a {} value; {} rule(s) skipped",
                value.kind(),
                rules.len()
            );
            return;
        };

        for rule in rules {
            let property = if rule.property.is_empty() {
                match self.default_property.as_deref() {
                    Some(property) => property,
                    None => {
                        debug!(
                            "rule for selector '{}' has no property and no default; skipped",
                            rule.selector
                        );
                        continue;
                    }
                }
            } else {
                rule.property.as_str()
            };
            ctx.write(rule, property, raw);
        }
    }
}
