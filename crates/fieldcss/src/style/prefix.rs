//! Vendor-prefixed duplicates for properties that still need them.

use super::map::{Declarations, StyleMap};

/// A set of vendor prefixes applied to a fixed list of properties.
struct PrefixGroup {
    vendors: [&'static str; 2],
    properties: &'static [&'static str],
}

const PREFIX_GROUPS: [PrefixGroup; 2] = [
    PrefixGroup {
        vendors: ["-webkit-", "-moz-"],
        properties: &[
            "border-radius",
            "box-shadow",
            "box-sizing",
            "text-shadow",
            "transform",
            "background-size",
            "transition",
            "transition-property",
        ],
    },
    PrefixGroup {
        vendors: ["-ms-", "-o-"],
        properties: &[
            "transform",
            "background-size",
            "transition",
            "transition-property",
        ],
    },
];

/// Adds vendor-prefixed copies of properties that need them.
///
/// Each matching property gets its prefixed variants with the identical value,
/// and the unprefixed property is moved after them so it wins the cascade in
/// engines that understand it. Running this twice only overwrites the same keys
/// with the same values.
///
/// ```rust
/// use fieldcss::{add_prefixes, to_css, StyleMap, GLOBAL_MEDIA_QUERY};
///
/// let mut styles = StyleMap::new();
/// styles.set(GLOBAL_MEDIA_QUERY, ".a", "border-radius", "3px");
///
/// assert_eq!(
///     to_css(&add_prefixes(styles)),
///     ".a{-webkit-border-radius:3px;-moz-border-radius:3px;border-radius:3px;}"
/// );
/// ```
pub fn add_prefixes(mut styles: StyleMap) -> StyleMap {
    for (_, rulesets) in styles.iter_mut() {
        for (_, declarations) in rulesets.iter_mut() {
            prefix_declarations(declarations);
        }
    }
    styles
}

fn prefix_declarations(declarations: &mut Declarations) {
    let properties: Vec<String> = declarations.keys().cloned().collect();

    for property in properties {
        for group in &PREFIX_GROUPS {
            if !group.properties.contains(&property.as_str()) {
                continue;
            }
            let Some(value) = declarations.shift_remove(&property) else {
                continue;
            };
            for vendor in group.vendors {
                declarations.insert(format!("{vendor}{property}"), value.clone());
            }
            declarations.insert(property.clone(), value);
        }
    }
}
