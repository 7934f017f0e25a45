//! The ordered style map that resolution writes into.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A declaration value: one value, or several fallbacks for the same property.
///
/// ```rust
/// use fieldcss::StyleValue;
///
/// let single = StyleValue::from("red");
/// let list = StyleValue::from(vec!["-webkit-linear-gradient(red,blue)".to_string(),
///                                  "linear-gradient(red,blue)".to_string()]);
/// assert_eq!(single.values().count(), 1);
/// assert_eq!(list.values().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Single(String),
    List(Vec<String>),
}

impl StyleValue {
    /// Iterates over every value, one per declaration to emit.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            StyleValue::Single(value) => std::slice::from_ref(value),
            StyleValue::List(values) => values,
        };
        slice.iter().map(String::as_str)
    }

    /// Returns true if no non-empty value would be emitted.
    pub fn is_blank(&self) -> bool {
        self.values().all(str::is_empty)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Single(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Single(value)
    }
}

impl From<Vec<String>> for StyleValue {
    fn from(values: Vec<String>) -> Self {
        StyleValue::List(values)
    }
}

/// Property → value, in insertion order.
pub type Declarations = IndexMap<String, StyleValue>;

/// Selector → declarations, in insertion order.
pub type Rulesets = IndexMap<String, Declarations>;

/// Nested `media query → selector → property → value` map.
///
/// Every level keeps insertion order, which decides output order. Writing an
/// existing key replaces its value in place: the entry keeps its original
/// position and the last write wins.
///
/// # Example
///
/// ```rust
/// use fieldcss::{StyleMap, GLOBAL_MEDIA_QUERY};
///
/// let mut styles = StyleMap::new();
/// styles.set(GLOBAL_MEDIA_QUERY, "body", "color", "#333");
/// styles.set(GLOBAL_MEDIA_QUERY, "body", "color", "#000");
///
/// assert_eq!(styles.len(), 1);
/// assert_eq!(fieldcss::to_css(&styles), "body{color:#000;}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    media: IndexMap<String, Rulesets>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a declaration, overwriting any previous value at the same key.
    pub fn set(
        &mut self,
        media_query: &str,
        selector: &str,
        property: &str,
        value: impl Into<StyleValue>,
    ) {
        self.declarations_entry(media_query, selector)
            .insert(property.to_string(), value.into());
    }

    /// Returns the value stored at a key.
    pub fn get(&self, media_query: &str, selector: &str, property: &str) -> Option<&StyleValue> {
        self.declarations(media_query, selector)?.get(property)
    }

    /// Removes a declaration, preserving the order of the remaining ones.
    ///
    /// A selector left without declarations is dropped, and so is a media
    /// query left without selectors.
    pub fn remove(
        &mut self,
        media_query: &str,
        selector: &str,
        property: &str,
    ) -> Option<StyleValue> {
        let rulesets = self.media.get_mut(media_query)?;
        let declarations = rulesets.get_mut(selector)?;
        let removed = declarations.shift_remove(property)?;

        if declarations.is_empty() {
            rulesets.shift_remove(selector);
        }
        if rulesets.is_empty() {
            self.media.shift_remove(media_query);
        }
        Some(removed)
    }

    /// Returns every declaration for a selector within a media query.
    pub fn declarations(&self, media_query: &str, selector: &str) -> Option<&Declarations> {
        self.media.get(media_query)?.get(selector)
    }

    /// Returns the rulesets grouped under a media query.
    pub fn rulesets(&self, media_query: &str) -> Option<&Rulesets> {
        self.media.get(media_query)
    }

    /// Iterates media queries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Rulesets> {
        self.media.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Rulesets> {
        self.media.iter_mut()
    }

    /// Media query keys in insertion order.
    pub fn media_queries(&self) -> impl Iterator<Item = &str> {
        self.media.keys().map(String::as_str)
    }

    /// Returns true if no declaration is stored.
    pub fn is_empty(&self) -> bool {
        self.media
            .values()
            .flat_map(|rulesets| rulesets.values())
            .all(|declarations| declarations.is_empty())
    }

    /// Number of stored declarations across all media queries and selectors.
    pub fn len(&self) -> usize {
        self.media
            .values()
            .flat_map(|rulesets| rulesets.values())
            .map(|declarations| declarations.len())
            .sum()
    }

    /// Writes every declaration of `other` into `self`.
    ///
    /// Keys already present are overwritten in place; new keys are appended.
    /// This is the same rule as a later field writing over an earlier one.
    pub fn merge(&mut self, other: StyleMap) {
        for (media_query, rulesets) in other.media {
            for (selector, declarations) in rulesets {
                self.declarations_entry(&media_query, &selector)
                    .extend(declarations);
            }
        }
    }

    fn declarations_entry(&mut self, media_query: &str, selector: &str) -> &mut Declarations {
        self.media
            .entry(media_query.to_string())
            .or_default()
            .entry(selector.to_string())
            .or_default()
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a String, &'a Rulesets);
    type IntoIter = indexmap::map::Iter<'a, String, Rulesets>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
