//! Resolver for composite values with named sub-values.

use log::{debug, warn};

use super::{OutputResolver, ResolveContext};
use crate::rule::{OutputRule, SUB_KEY_PLACEHOLDER};
use crate::value::FieldValue;

/// Fans each rule out into one declaration per sub-key of a composite value.
///
/// For every rule and every sub-key `k`, in the value's key order, the
/// property name is:
///
/// | Rule                          | Property              |
/// |-------------------------------|-----------------------|
/// | `property` empty              | `k`                   |
/// | `property` contains `%%`      | `%%` replaced by `k`  |
/// | otherwise                     | `property-k`          |
/// | `choice` set                  | `property`, only for `k == choice` |
///
/// A `choice` rule targets exactly one sub-key and keeps its property name
/// verbatim; every other sub-key is skipped for it. Scalar values produce no
/// declarations.
///
/// ```rust
/// use fieldcss::{to_css, DimensionsResolver, FieldValue, OutputResolver, OutputRule,
///                ResolveContext, StyleMap, TransformRegistry};
///
/// let value = FieldValue::composite([("top", "1px"), ("bottom", "2px")]);
/// let rules = [OutputRule::new(".a").property("padding")];
///
/// let mut styles = StyleMap::new();
/// let transforms = TransformRegistry::new();
/// DimensionsResolver.resolve(&rules, &value, &mut ResolveContext::new(&mut styles, &transforms));
///
/// assert_eq!(to_css(&styles), ".a{padding-top:1px;padding-bottom:2px;}");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionsResolver;

impl OutputResolver for DimensionsResolver {
    fn resolve(&self, rules: &[OutputRule], value: &FieldValue, ctx: &mut ResolveContext<'_>) {
        let Some(values) = value.as_composite() else {
            debug!(
                "dimensions resolver received a {} value; {} rule(s) skipped",
                value.kind(),
                rules.len()
            );
            return;
        };

        for rule in rules {
            if rule.choice.is_some() && rule.property.is_empty() {
                warn!(
                    "rule for selector '{}' sets a choice but no property; skipped",
                    rule.selector
                );
                continue;
            }

            for (key, raw) in values {
                let property = match rule.choice.as_deref() {
                    Some(choice) if choice == key.as_str() => rule.property.clone(),
                    Some(_) => continue,
                    None => sub_property(&rule.property, key),
                };
                ctx.write(rule, &property, raw);
            }
        }
    }
}

/// Property name for sub-key `key` of a rule without a `choice`.
fn sub_property(property: &str, key: &str) -> String {
    if property.is_empty() {
        key.to_string()
    } else if property.contains(SUB_KEY_PLACEHOLDER) {
        property.replace(SUB_KEY_PLACEHOLDER, key)
    } else {
        format!("{property}-{key}")
    }
}
