//! Field values: a single scalar or an ordered mapping of named sub-values.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// The resolved value of a field.
///
/// Composite values arise from field types whose value is structured, e.g. the
/// four edges of a dimensions control. Sub-key order is preserved and decides
/// the order in which fanned-out declarations are written.
///
/// When deserialized, numbers and booleans are accepted as scalars and a
/// missing or null value becomes an empty scalar. Numbers are stored as Rust
/// formats the parsed number, not as authored: `1.0` becomes `"1"` and `1.50`
/// becomes `"1.5"`. Quote a value to keep its exact text.
///
/// ```rust
/// use fieldcss::FieldValue;
///
/// let value: FieldValue = serde_yaml::from_str("{ top: 1px, left: 2 }").unwrap();
/// let edges = value.as_composite().unwrap();
/// assert_eq!(edges.get("left").map(String::as_str), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single textual value.
    Scalar(String),
    /// Named sub-values in authoring order.
    Composite(IndexMap<String, String>),
}

impl FieldValue {
    /// Builds a composite value from `(sub-key, value)` pairs.
    pub fn composite<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        FieldValue::Composite(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the scalar text, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            FieldValue::Composite(_) => None,
        }
    }

    /// Returns the sub-values, if this is a composite.
    pub fn as_composite(&self) -> Option<&IndexMap<String, String>> {
        match self {
            FieldValue::Composite(values) => Some(values),
            FieldValue::Scalar(_) => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, FieldValue::Composite(_))
    }

    /// Short name of the value shape, used in diagnostics.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            FieldValue::Scalar(_) => "scalar",
            FieldValue::Composite(_) => "composite",
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Scalar(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<IndexMap<String, String>> for FieldValue {
    fn from(values: IndexMap<String, String>) -> Self {
        FieldValue::Composite(values)
    }
}

/// A scalar accepted from any textual, numeric or boolean input.
struct ScalarText(String);

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor).map(ScalarText)
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar or a mapping of scalars")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldValue, E> {
        ScalarVisitor.visit_str(v).map(FieldValue::Scalar)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FieldValue, E> {
        Ok(FieldValue::Scalar(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FieldValue, E> {
        ScalarVisitor.visit_bool(v).map(FieldValue::Scalar)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldValue, E> {
        ScalarVisitor.visit_i64(v).map(FieldValue::Scalar)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldValue, E> {
        ScalarVisitor.visit_u64(v).map(FieldValue::Scalar)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldValue, E> {
        ScalarVisitor.visit_f64(v).map(FieldValue::Scalar)
    }

    fn visit_unit<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<FieldValue, E> {
        Ok(FieldValue::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FieldValue, A::Error> {
        let mut values = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, ScalarText(value))) = map.next_entry::<ScalarText, ScalarText>()? {
            values.insert(key.0, value);
        }
        Ok(FieldValue::Composite(values))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}
