//! Output rules describing where a field's value lands in the stylesheet.
//!
//! An [`OutputRule`] names a selector, a property and a media query, plus
//! optional literal text wrapped around the resolved value. Rules are usually
//! authored in YAML or JSON next to the field they belong to:
//!
//! ```yaml
//! output:
//!   - element: [".site-header", ".site-footer"]
//!     property: padding
//!     suffix: px
//!   - element: ".card"
//!     property: "border-%%-width"
//!     media_query: "@media (min-width:768px)"
//! ```
//!
//! Every key is optional. Missing keys fall back to an empty selector, an empty
//! property, the [`GLOBAL_MEDIA_QUERY`] and no prefix or suffix.

use serde::{Deserialize, Deserializer, Serialize};

/// Media query key for declarations emitted without an `@media` wrapper.
pub const GLOBAL_MEDIA_QUERY: &str = "global";

/// Token in a rule's `property` replaced by the current sub-key of a composite value.
pub const SUB_KEY_PLACEHOLDER: &str = "%%";

/// One instruction for placing a (sub-)value into the stylesheet.
///
/// # Example
///
/// ```rust
/// use fieldcss::OutputRule;
///
/// let rule = OutputRule::new(".entry-title")
///     .property("font-size")
///     .suffix("px")
///     .media_query("@media (min-width:768px)");
///
/// assert_eq!(rule.selector, ".entry-title");
/// assert!(!rule.is_global());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputRule {
    /// CSS selector the declaration applies to. Lists are joined with `,`.
    #[serde(
        rename = "element",
        alias = "selector",
        deserialize_with = "deserialize_selector"
    )]
    pub selector: String,

    /// CSS property name. May contain [`SUB_KEY_PLACEHOLDER`].
    pub property: String,

    /// `"global"` or a verbatim `@media ...` wrapper.
    #[serde(alias = "mediaQuery")]
    pub media_query: String,

    /// Literal text placed before the resolved value.
    pub prefix: String,

    /// Literal text placed after the resolved value (units, `!important`).
    pub suffix: String,

    /// Restricts a composite value to the single named sub-key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
}

impl Default for OutputRule {
    fn default() -> Self {
        Self {
            selector: String::new(),
            property: String::new(),
            media_query: GLOBAL_MEDIA_QUERY.to_string(),
            prefix: String::new(),
            suffix: String::new(),
            choice: None,
        }
    }
}

impl OutputRule {
    /// Creates a rule targeting `selector` with every other key defaulted.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    /// Sets the property, returning `self` for chaining.
    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    /// Sets the media query, returning `self` for chaining.
    pub fn media_query(mut self, media_query: impl Into<String>) -> Self {
        self.media_query = media_query.into();
        self
    }

    /// Sets the value prefix, returning `self` for chaining.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the value suffix, returning `self` for chaining.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Restricts the rule to one sub-key of a composite value.
    pub fn choice(mut self, choice: impl Into<String>) -> Self {
        self.choice = Some(choice.into());
        self
    }

    /// Returns true when declarations from this rule are emitted unwrapped.
    pub fn is_global(&self) -> bool {
        self.media_query == GLOBAL_MEDIA_QUERY
    }

    /// Wraps `value` in this rule's prefix and suffix.
    pub fn decorate(&self, value: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + value.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(value);
        out.push_str(&self.suffix);
        out
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectorRepr {
    One(String),
    Many(Vec<String>),
}

fn deserialize_selector<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match SelectorRepr::deserialize(deserializer)? {
        SelectorRepr::One(selector) => selector,
        SelectorRepr::Many(selectors) => selectors.join(","),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_is_global_and_empty() {
        let rule = OutputRule::default();
        assert_eq!(rule.selector, "");
        assert_eq!(rule.property, "");
        assert_eq!(rule.media_query, GLOBAL_MEDIA_QUERY);
        assert!(rule.is_global());
        assert!(rule.choice.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let rule = OutputRule::new(".a")
            .property("margin")
            .prefix("calc(")
            .suffix("px)")
            .choice("top");

        assert_eq!(rule.property, "margin");
        assert_eq!(rule.choice.as_deref(), Some("top"));
        assert_eq!(rule.decorate("4"), "calc(4px)");
    }

    #[test]
    fn test_yaml_missing_keys_are_defaulted() {
        let rule: OutputRule = serde_yaml::from_str("element: body").unwrap();
        assert_eq!(rule, OutputRule::new("body"));
    }

    #[test]
    fn test_yaml_selector_list_is_joined() {
        let rule: OutputRule = serde_yaml::from_str(
            r#"
            element: [".a", ".b > p"]
            property: color
            "#,
        )
        .unwrap();
        assert_eq!(rule.selector, ".a,.b > p");
    }

    #[test]
    fn test_json_aliases() {
        let rule: OutputRule = serde_json::from_str(
            r#"{"selector": ".x", "property": "width", "mediaQuery": "@media print"}"#,
        )
        .unwrap();
        assert_eq!(rule.selector, ".x");
        assert_eq!(rule.media_query, "@media print");
        assert!(!rule.is_global());
    }
}
