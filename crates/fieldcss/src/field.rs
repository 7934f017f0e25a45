//! Field descriptors: a value plus the rules saying where it goes.
//!
//! Fields are normally supplied by the host application after it has read and
//! sanitized the stored value. They can also be loaded from YAML or JSON
//! documents, either as a list or keyed by setting name:
//!
//! ```yaml
//! header_padding:
//!   type: dimensions
//!   value: { top: 10px, bottom: 20px }
//!   output:
//!     - element: .site-header
//!       property: padding
//!
//! link_color:
//!   type: color
//!   value: "#0073aa"
//!   output: "a"
//! ```
//!
//! An `output` given as a bare string is shorthand for a single rule whose
//! selector is that string.

use std::borrow::Cow;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::load;
use crate::rule::OutputRule;
use crate::value::FieldValue;

/// Config id used by fields that don't name one.
pub const DEFAULT_CONFIG: &str = "global";

/// A field's output: a rule list, or a bare selector string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldOutput {
    Rules(Vec<OutputRule>),
    Element(String),
}

impl FieldOutput {
    /// The output as a rule list; a bare selector becomes one defaulted rule.
    pub fn rules(&self) -> Cow<'_, [OutputRule]> {
        match self {
            FieldOutput::Rules(rules) => Cow::Borrowed(rules.as_slice()),
            FieldOutput::Element(selector) => Cow::Owned(vec![OutputRule::new(selector.as_str())]),
        }
    }
}

impl Default for FieldOutput {
    fn default() -> Self {
        FieldOutput::Rules(Vec::new())
    }
}

impl From<Vec<OutputRule>> for FieldOutput {
    fn from(rules: Vec<OutputRule>) -> Self {
        FieldOutput::Rules(rules)
    }
}

impl From<&str> for FieldOutput {
    fn from(selector: &str) -> Self {
        FieldOutput::Element(selector.to_string())
    }
}

/// One configuration unit: a value and the output rules it feeds.
///
/// # Example
///
/// ```rust
/// use fieldcss::{Field, FieldValue, OutputRule};
///
/// let field = Field::new("container_padding", "dimensions")
///     .value(FieldValue::composite([("left", "1rem"), ("right", "1rem")]))
///     .rule(OutputRule::new(".container").property("padding"));
///
/// assert_eq!(field.effective_type(), "dimensions");
/// assert_eq!(field.rules().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Setting name, used in diagnostics.
    #[serde(default)]
    pub settings: String,

    /// Field type used to pick a resolver.
    #[serde(rename = "type", default)]
    pub field_type: String,

    /// The sanitized value.
    #[serde(default)]
    pub value: FieldValue,

    #[serde(default)]
    pub output: FieldOutput,

    /// Config id, for config-scoped resolver registrations.
    #[serde(default = "default_config")]
    pub config: String,

    /// Type this field renders as, when it wraps another field type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<String>,
}

fn default_config() -> String {
    DEFAULT_CONFIG.to_string()
}

impl Field {
    /// Creates a field with an empty value and no output.
    pub fn new(settings: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            settings: settings.into(),
            field_type: field_type.into(),
            value: FieldValue::default(),
            output: FieldOutput::default(),
            config: default_config(),
            parent_type: None,
        }
    }

    /// Sets the value, returning `self` for chaining.
    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Replaces the whole output, returning `self` for chaining.
    pub fn output(mut self, output: impl Into<FieldOutput>) -> Self {
        self.output = output.into();
        self
    }

    /// Appends a rule, converting a bare selector output into its rule first.
    pub fn rule(mut self, rule: OutputRule) -> Self {
        let mut rules = self.output.rules().into_owned();
        rules.push(rule);
        self.output = FieldOutput::Rules(rules);
        self
    }

    /// Sets the config id, returning `self` for chaining.
    pub fn config(mut self, config: impl Into<String>) -> Self {
        self.config = config.into();
        self
    }

    /// Sets the parent type, returning `self` for chaining.
    pub fn parent_type(mut self, parent_type: impl Into<String>) -> Self {
        self.parent_type = Some(parent_type.into());
        self
    }

    /// The type used for resolver lookup: `parent_type` if set, else `type`.
    pub fn effective_type(&self) -> &str {
        self.parent_type.as_deref().unwrap_or(&self.field_type)
    }

    /// The output normalized to a rule list.
    pub fn rules(&self) -> Cow<'_, [OutputRule]> {
        self.output.rules()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldDocument {
    List(Vec<Field>),
    Keyed(IndexMap<String, Field>),
}

impl From<FieldDocument> for FieldSet {
    fn from(document: FieldDocument) -> Self {
        let fields = match document {
            FieldDocument::List(fields) => fields,
            FieldDocument::Keyed(fields) => fields
                .into_iter()
                .map(|(settings, mut field)| {
                    if field.settings.is_empty() {
                        field.settings = settings;
                    }
                    field
                })
                .collect(),
        };
        FieldSet { fields }
    }
}

/// An ordered collection of fields, resolved in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML document holding a list of fields or a settings-keyed map.
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        load::from_yaml::<FieldDocument>(yaml).map(Self::from)
    }

    /// Parses a JSON document holding a list of fields or a settings-keyed map.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        load::from_json::<FieldDocument>(json).map(Self::from)
    }

    /// Loads a field set from a file; `.json` files are JSON, others YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        load::from_file::<FieldDocument>(path.as_ref()).map(Self::from)
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finds a field by setting name.
    pub fn get(&self, settings: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.settings == settings)
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for FieldSet {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let field = Field::new("x", "text");
        assert_eq!(field.config, DEFAULT_CONFIG);
        assert_eq!(field.value, FieldValue::default());
        assert!(field.rules().is_empty());
    }

    #[test]
    fn test_element_output_becomes_single_rule() {
        let field = Field::new("x", "color").output("a:hover");
        let rules = field.rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0], OutputRule::new("a:hover"));
    }

    #[test]
    fn test_rule_appends_after_element() {
        let field = Field::new("x", "color")
            .output("a")
            .rule(OutputRule::new("b").property("color"));
        let rules = field.rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].selector, "a");
        assert_eq!(rules[1].selector, "b");
    }

    #[test]
    fn test_effective_type_prefers_parent() {
        let field = Field::new("x", "spacing").parent_type("dimensions");
        assert_eq!(field.effective_type(), "dimensions");
        assert_eq!(Field::new("x", "spacing").effective_type(), "spacing");
    }

    #[test]
    fn test_yaml_keyed_document() {
        let fields = FieldSet::from_yaml(
            r##"
            header_padding:
              type: dimensions
              value: { top: 10px, bottom: 20px }
              output:
                - element: .site-header
                  property: padding
            link_color:
              type: color
              value: "#0073aa"
              output: a
              config: shop
            "##,
        )
        .unwrap();

        assert_eq!(fields.len(), 2);
        let padding = fields.get("header_padding").unwrap();
        assert_eq!(padding.field_type, "dimensions");
        assert!(padding.value.is_composite());

        let link = fields.get("link_color").unwrap();
        assert_eq!(link.output, FieldOutput::Element("a".to_string()));
        assert_eq!(link.config, "shop");

        let order: Vec<&str> = fields.iter().map(|f| f.settings.as_str()).collect();
        assert_eq!(order, ["header_padding", "link_color"]);
    }

    #[test]
    fn test_yaml_list_document() {
        let fields = FieldSet::from_yaml(
            r#"
            - settings: a
              type: text
              value: 12
              output:
                - { element: p, property: font-size, suffix: px }
            - settings: b
              type: text
            "#,
        )
        .unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a").unwrap().value, FieldValue::from("12"));
        assert!(fields.get("b").unwrap().rules().is_empty());
    }

    #[test]
    fn test_keyed_document_keeps_explicit_settings() {
        let fields = FieldSet::from_yaml(
            r#"
            key:
              settings: explicit
              type: text
            "#,
        )
        .unwrap();
        assert!(fields.get("explicit").is_some());
    }

    #[test]
    fn test_json_document() {
        let fields = FieldSet::from_json(
            r#"[{"settings": "w", "type": "slider", "value": 3,
                 "output": [{"selector": ".x", "property": "width", "suffix": "em"}]}]"#,
        )
        .unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("w").unwrap().rules()[0].suffix, "em");
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            FieldSet::from_yaml("- [unclosed"),
            Err(LoadError::Yaml { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fields.json");
        fs::write(&path, r#"{"title_color": {"type": "color", "value": "red", "output": "h1"}}"#)
            .unwrap();

        let fields = FieldSet::from_file(&path).unwrap();
        assert_eq!(fields.get("title_color").unwrap().field_type, "color");
    }

    #[test]
    fn test_from_file_not_found() {
        let result = FieldSet::from_file("/nonexistent/fields.yaml");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
