//! Minified CSS serialization of a [`StyleMap`].

use super::map::{Declarations, StyleMap};
use crate::rule::GLOBAL_MEDIA_QUERY;

/// Serializes a style map into a single minified CSS string.
///
/// Media queries, selectors and properties are emitted in insertion order.
/// Anything other than [`GLOBAL_MEDIA_QUERY`] is used verbatim as an at-rule
/// wrapper. Empty values produce no declaration, and a selector without any
/// declaration produces no block at all.
///
/// ```rust
/// use fieldcss::{to_css, StyleMap, GLOBAL_MEDIA_QUERY};
///
/// let mut styles = StyleMap::new();
/// styles.set(GLOBAL_MEDIA_QUERY, "h1", "font-size", "2em");
/// styles.set("@media (min-width:768px)", "h1", "font-size", "3em");
/// styles.set(GLOBAL_MEDIA_QUERY, ".unset", "color", "");
///
/// assert_eq!(
///     to_css(&styles),
///     "h1{font-size:2em;}@media (min-width:768px){h1{font-size:3em;}}"
/// );
/// ```
pub fn to_css(styles: &StyleMap) -> String {
    let mut css = String::new();

    for (media_query, rulesets) in styles {
        let wrapped = media_query != GLOBAL_MEDIA_QUERY;
        if wrapped {
            css.push_str(media_query);
            css.push('{');
        }

        for (selector, declarations) in rulesets {
            let body = declaration_block(declarations);
            if !body.is_empty() {
                css.push_str(selector);
                css.push('{');
                css.push_str(&body);
                css.push('}');
            }
        }

        if wrapped {
            css.push('}');
        }
    }

    css
}

fn declaration_block(declarations: &Declarations) -> String {
    let mut body = String::new();
    for (property, value) in declarations {
        for value in value.values().filter(|v| !v.is_empty()) {
            body.push_str(property);
            body.push(':');
            body.push_str(value);
            body.push(';');
        }
    }
    body
}
