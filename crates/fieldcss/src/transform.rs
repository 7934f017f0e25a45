//! Per-property value post-processing.
//!
//! Before a resolved value is wrapped in its rule's prefix and suffix, it is
//! passed through the transform registered for the target property, if any.
//! Typical transforms add a unit to bare numbers or normalize color notation.
//! Without a registration the value is used verbatim.
//!
//! ```rust
//! use fieldcss::TransformRegistry;
//!
//! let mut transforms = TransformRegistry::new();
//! transforms.register("font-size", |_property: &str, value: &str| {
//!     if value.parse::<f64>().is_ok() {
//!         format!("{value}px")
//!     } else {
//!         value.to_string()
//!     }
//! });
//!
//! assert_eq!(transforms.apply("font-size", "14"), "14px");
//! assert_eq!(transforms.apply("font-size", "1em"), "1em");
//! assert_eq!(transforms.apply("color", "red"), "red");
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A pure `(property, value) -> value` post-processor.
///
/// A blanket implementation covers closures with the matching signature.
pub trait ValueTransform {
    fn transform(&self, property: &str, value: &str) -> String;
}

impl<F> ValueTransform for F
where
    F: Fn(&str, &str) -> String,
{
    fn transform(&self, property: &str, value: &str) -> String {
        (self)(property, value)
    }
}

/// Transforms keyed by property name.
///
/// `TransformRegistry` is cheap to clone since it stores transforms as `Rc`.
#[derive(Default, Clone)]
pub struct TransformRegistry {
    transforms: HashMap<String, Rc<dyn ValueTransform>>,
}

impl TransformRegistry {
    /// Creates an empty registry; every value passes through unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a transform for `property`, replacing any previous one.
    pub fn register<T: ValueTransform + 'static>(
        &mut self,
        property: impl Into<String>,
        transform: T,
    ) {
        self.transforms.insert(property.into(), Rc::new(transform));
    }

    /// Returns true if a transform is registered for `property`.
    pub fn contains(&self, property: &str) -> bool {
        self.transforms.contains_key(property)
    }

    /// Applies the transform for `property`, or returns `value` as-is.
    pub fn apply<'a>(&self, property: &str, value: &'a str) -> Cow<'a, str> {
        match self.transforms.get(property) {
            Some(transform) => Cow::Owned(transform.transform(property, value)),
            None => Cow::Borrowed(value),
        }
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut properties: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        properties.sort_unstable();
        f.debug_struct("TransformRegistry")
            .field("properties", &properties)
            .finish()
    }
}
